//! Project request: the resolved name, template and language for one run

use clap::ValueEnum;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static URL_SAFE_NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9@.\-_]+$").expect("name pattern is valid"));

/// Structural variant of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Template {
    /// Expo managed workflow (native code hidden)
    ExpoManaged,
    /// Expo bare workflow (native projects exposed)
    ExpoBare,
    /// Plain React Native CLI project
    Bare,
}

impl Template {
    pub const ALL: [Template; 3] = [Template::ExpoManaged, Template::ExpoBare, Template::Bare];

    /// Value used on the command line
    pub fn id(&self) -> &'static str {
        match self {
            Template::ExpoManaged => "expo-managed",
            Template::ExpoBare => "expo-bare",
            Template::Bare => "bare",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Template::ExpoManaged => "Expo Managed Workflow",
            Template::ExpoBare => "Expo Bare Workflow",
            Template::Bare => "Bare React Native",
        }
    }

    /// Generated by expo-cli rather than the React Native CLI
    pub fn is_expo(&self) -> bool {
        !matches!(self, Template::Bare)
    }

    /// Managed projects also get navigation and Expo SDK packages
    pub fn is_managed(&self) -> bool {
        matches!(self, Template::ExpoManaged)
    }

    /// Sub-template passed to `expo init --template`
    pub fn expo_template(&self) -> Option<&'static str> {
        match self {
            Template::ExpoManaged => Some("blank"),
            Template::ExpoBare => Some("bare-minimum"),
            Template::Bare => None,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Language {
    #[value(name = "typescript")]
    TypeScript,
    #[value(name = "javascript")]
    JavaScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::TypeScript, Language::JavaScript];

    pub fn id(&self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::TypeScript => "TypeScript",
            Language::JavaScript => "JavaScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the pipeline needs to know about the project to create
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub name: String,
    pub template: Template,
    pub language: Language,
}

impl ProjectRequest {
    /// Build a request, rejecting names that are not URL-safe
    pub fn new(
        name: impl Into<String>,
        template: Template,
        language: Language,
    ) -> crate::error::Result<Self> {
        let name = name.into();
        validate_name(&name).map_err(crate::error::ScaffoldError::InvalidName)?;
        Ok(Self {
            name,
            template,
            language,
        })
    }
}

/// Check a project name against the URL-safe character class
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("The project name can not be empty.".to_string());
    }
    if !URL_SAFE_NAME.is_match(name) {
        return Err("The project name can only contain URL-friendly characters.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_url_safe_names() {
        for name in ["demo", "my-app", "My_App.v2", "@scope", "a", "UPPER"] {
            assert!(validate_name(name).is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_rejects_empty_name() {
        let err = validate_name("").unwrap_err();
        assert!(err.contains("can not be empty"));
    }

    #[test]
    fn test_rejects_non_url_characters() {
        for name in ["my app", "a/b", "emoji😀", "semi;colon", "tab\tname", "ünï"] {
            let err = validate_name(name).unwrap_err();
            assert!(!err.is_empty(), "{name} should be rejected");
        }
    }

    #[test]
    fn test_request_rejects_invalid_name() {
        let result = ProjectRequest::new("no spaces", Template::Bare, Language::JavaScript);
        assert!(matches!(
            result,
            Err(crate::error::ScaffoldError::InvalidName(_))
        ));
    }

    #[test]
    fn test_template_flags() {
        assert!(Template::ExpoManaged.is_managed());
        assert!(!Template::ExpoBare.is_managed());
        assert!(Template::ExpoBare.is_expo());
        assert!(!Template::Bare.is_expo());
        assert_eq!(Template::ExpoManaged.expo_template(), Some("blank"));
        assert_eq!(Template::ExpoBare.expo_template(), Some("bare-minimum"));
        assert_eq!(Template::Bare.expo_template(), None);
    }

    #[test]
    fn test_cli_values_match_ids() {
        for template in Template::ALL {
            let parsed = Template::from_str(template.id(), false).unwrap();
            assert_eq!(parsed, template);
        }
        for language in Language::ALL {
            let parsed = Language::from_str(language.id(), false).unwrap();
            assert_eq!(parsed, language);
        }
    }
}
