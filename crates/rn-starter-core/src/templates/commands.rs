//! Dependency sets and generator invocations

use crate::config::PackageManager;
use crate::request::{Language, ProjectRequest, Template};
use crate::runtime::ShellCommand;
use crate::templates::version::types_react_spec;
use semver::Version;

/// ESLint toolchain, installed into every project as dev dependencies
pub const ESLINT_PACKAGES: &[&str] = &[
    "eslint",
    "eslint-config-airbnb",
    "eslint-plugin-import",
    "eslint-plugin-react",
    "eslint-plugin-jsx-a11y",
    "@babel/eslint-parser",
    "eslint-plugin-react-hooks",
    "babel-eslint",
    "@babel/core",
];

pub const NAVIGATION_PACKAGES: &[&str] = &[
    "@react-navigation/native",
    "@react-navigation/bottom-tabs",
    "@react-navigation/stack",
];

/// Expo SDK modules, installed through `expo install` for version alignment
pub const EXPO_PACKAGES: &[&str] = &[
    "expo-splash-screen",
    "expo-font",
    "expo-secure-store",
    "expo-status-bar",
    "expo-updates",
    "react-native-gesture-handler",
    "react-native-reanimated",
    "react-native-safe-area-context",
    "react-native-screens",
    "react-native-svg",
];

/// TypeScript tooling; `@types/react` is added separately with a pinned version
pub const TYPESCRIPT_PACKAGES: &[&str] = &[
    "@types/react-native",
    "@typescript-eslint/eslint-plugin",
    "@typescript-eslint/parser",
    "typescript",
];

fn owned(packages: &[&str]) -> Vec<String> {
    packages.iter().map(|p| p.to_string()).collect()
}

/// Commands that generate the project skeleton, run from the parent directory
pub fn create_project(request: &ProjectRequest, pm: PackageManager) -> Vec<ShellCommand> {
    match request.template.expo_template() {
        Some(sub_template) => {
            let mut init = format!(
                "expo init {} --template {} --non-interactive",
                request.name, sub_template
            );
            if pm == PackageManager::Npm {
                init.push_str(" --npm");
            }
            vec![
                ShellCommand::new("Installing latest expo-cli", "npm install --global expo-cli"),
                ShellCommand::new(
                    format!("Creating {} project {}", request.template.display_name(), request.name),
                    init,
                ),
            ]
        }
        None => {
            let mut init = format!("npx react-native init {}", request.name);
            if pm == PackageManager::Npm {
                init.push_str(" --npm");
            }
            vec![ShellCommand::new(
                format!("Creating React Native project {}", request.name),
                init,
            )]
        }
    }
}

pub fn install_eslint(pm: PackageManager) -> ShellCommand {
    ShellCommand::new(
        "Installing ESLint toolchain",
        pm.add_command(&owned(ESLINT_PACKAGES), true),
    )
}

pub fn install_navigation(pm: PackageManager) -> ShellCommand {
    ShellCommand::new(
        "Installing React Navigation",
        pm.add_command(&owned(NAVIGATION_PACKAGES), false),
    )
}

pub fn install_expo_sdk() -> ShellCommand {
    ShellCommand::new(
        "Installing Expo SDK packages",
        format!("expo install {}", EXPO_PACKAGES.join(" ")),
    )
}

pub fn install_typescript(pm: PackageManager, react: Option<&Version>) -> ShellCommand {
    let mut packages = vec![types_react_spec(react)];
    packages.extend(owned(TYPESCRIPT_PACKAGES));
    ShellCommand::new(
        "Installing TypeScript tooling",
        pm.add_command(&packages, true),
    )
}

/// Commands for user-configured extras; empty lists produce no command
pub fn install_extras(
    pm: PackageManager,
    dependencies: &[String],
    dev_dependencies: &[String],
) -> Vec<ShellCommand> {
    let mut commands = Vec::new();
    if !dependencies.is_empty() {
        commands.push(ShellCommand::new(
            "Installing extra dependencies",
            pm.add_command(dependencies, false),
        ));
    }
    if !dev_dependencies.is_empty() {
        commands.push(ShellCommand::new(
            "Installing extra dev dependencies",
            pm.add_command(dev_dependencies, true),
        ));
    }
    commands
}

/// Suggested commands printed once the project is ready
pub fn next_steps(request: &ProjectRequest, pm: PackageManager) -> Vec<String> {
    let mut steps = vec![format!("cd {}", request.name)];
    match request.template {
        Template::ExpoManaged => steps.push(pm.start_command().to_string()),
        Template::ExpoBare | Template::Bare => {
            steps.push("npx react-native run-android".to_string());
            steps.push("npx react-native run-ios".to_string());
        }
    }
    if request.language == Language::TypeScript {
        steps.push("npx tsc --noEmit".to_string());
    }
    steps.push("npx eslint .".to_string());
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(template: Template, language: Language) -> ProjectRequest {
        ProjectRequest::new("demo", template, language).unwrap()
    }

    #[test]
    fn test_expo_templates_update_cli_then_init() {
        let cmds = create_project(
            &request(Template::ExpoManaged, Language::TypeScript),
            PackageManager::Yarn,
        );
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].command, "npm install --global expo-cli");
        assert_eq!(
            cmds[1].command,
            "expo init demo --template blank --non-interactive"
        );

        let bare_minimum = create_project(
            &request(Template::ExpoBare, Language::JavaScript),
            PackageManager::Npm,
        );
        assert_eq!(
            bare_minimum[1].command,
            "expo init demo --template bare-minimum --non-interactive --npm"
        );
    }

    #[test]
    fn test_bare_template_uses_react_native_cli() {
        let cmds = create_project(
            &request(Template::Bare, Language::JavaScript),
            PackageManager::Yarn,
        );
        assert_eq!(cmds.len(), 1);
        assert_eq!(cmds[0].command, "npx react-native init demo");
    }

    #[test]
    fn test_eslint_install_is_dev() {
        let cmd = install_eslint(PackageManager::Yarn);
        assert!(cmd.command.starts_with("yarn add eslint "));
        assert!(cmd.command.ends_with("--dev"));
    }

    #[test]
    fn test_typescript_install_pins_types_react() {
        let cmd = install_typescript(PackageManager::Yarn, Some(&Version::new(18, 2, 0)));
        assert!(cmd.command.contains("@types/react@~18.2.0"));
        assert!(cmd.command.contains(" typescript "));

        let unpinned = install_typescript(PackageManager::Npm, None);
        assert!(unpinned.command.starts_with("npm install @types/react @types/react-native"));
    }

    #[test]
    fn test_expo_sdk_install_lists_reanimated() {
        assert!(install_expo_sdk()
            .command
            .contains("react-native-reanimated"));
    }

    #[test]
    fn test_extras() {
        assert!(install_extras(PackageManager::Yarn, &[], &[]).is_empty());
        let cmds = install_extras(
            PackageManager::Yarn,
            &["axios".to_string()],
            &["prettier".to_string()],
        );
        assert_eq!(cmds.len(), 2);
        assert_eq!(cmds[0].command, "yarn add axios");
        assert_eq!(cmds[1].command, "yarn add prettier --dev");
    }

    #[test]
    fn test_next_steps() {
        let steps = next_steps(
            &request(Template::ExpoManaged, Language::TypeScript),
            PackageManager::Yarn,
        );
        assert_eq!(steps[0], "cd demo");
        assert_eq!(steps[1], "yarn start");
        assert!(steps.contains(&"npx tsc --noEmit".to_string()));

        let bare = next_steps(&request(Template::Bare, Language::JavaScript), PackageManager::Npm);
        assert!(bare.contains(&"npx react-native run-ios".to_string()));
        assert!(!bare.iter().any(|s| s.contains("tsc")));
    }
}
