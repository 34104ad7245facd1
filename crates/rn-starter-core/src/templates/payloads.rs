//! Static config file contents keyed by template and language

use crate::request::{Language, Template};
use serde_json::{json, Value};

/// Line spliced into babel.config.js to register the Reanimated plugin
pub const BABEL_PLUGIN_LINE: &str = "plugins: ['react-native-reanimated/plugin'],";

pub const ESLINT_IGNORE: &str = "\
node_modules/
babel.config.js
metro.config.js
jest.config.js
android/
ios/
.expo/
web-build/
dist/
";

/// tsconfig.json for the given template
pub fn tsconfig(template: Template) -> Value {
    match template {
        Template::Bare => json!({
            "compilerOptions": {
                "target": "esnext",
                "lib": ["es2017"],
                "jsx": "react-native",
                "module": "commonjs",
                "moduleResolution": "node",
                "resolveJsonModule": true,
                "allowJs": true,
                "noEmit": true,
                "isolatedModules": true,
                "allowSyntheticDefaultImports": true,
                "esModuleInterop": true,
                "forceConsistentCasingInFileNames": true,
                "strict": true,
                "skipLibCheck": true
            },
            "exclude": [
                "node_modules",
                "babel.config.js",
                "metro.config.js",
                "jest.config.js"
            ]
        }),
        Template::ExpoManaged | Template::ExpoBare => json!({
            "extends": "expo/tsconfig.base",
            "compilerOptions": {
                "jsx": "react",
                "strict": true
            }
        }),
    }
}

/// .eslintrc.json for the given language
pub fn eslint_config(language: Language) -> Value {
    let mut config = json!({
        "root": true,
        "env": {
            "browser": true,
            "es2021": true,
            "jest": true
        },
        "extends": ["airbnb", "airbnb/hooks"],
        "parser": "@babel/eslint-parser",
        "parserOptions": {
            "ecmaFeatures": { "jsx": true },
            "ecmaVersion": "latest",
            "sourceType": "module",
            "requireConfigFile": false
        },
        "plugins": ["react", "react-hooks", "jsx-a11y", "import"],
        "globals": { "__DEV__": "readonly" },
        "rules": {
            "react/jsx-filename-extension": ["warn", { "extensions": [".js", ".jsx"] }],
            "react/prop-types": "off",
            "react/style-prop-object": "off",
            "react/function-component-definition": "off",
            "react/require-default-props": "off",
            "import/prefer-default-export": "off",
            "global-require": "off",
            "no-use-before-define": ["error", { "variables": false }]
        }
    });

    if language == Language::TypeScript {
        config["extends"] = json!([
            "airbnb",
            "airbnb/hooks",
            "plugin:@typescript-eslint/recommended"
        ]);
        config["parser"] = json!("@typescript-eslint/parser");
        config["parserOptions"] = json!({
            "ecmaFeatures": { "jsx": true },
            "ecmaVersion": "latest",
            "sourceType": "module"
        });
        config["plugins"] = json!([
            "react",
            "react-hooks",
            "jsx-a11y",
            "import",
            "@typescript-eslint"
        ]);
        config["settings"] = json!({
            "import/resolver": {
                "node": { "extensions": [".js", ".jsx", ".ts", ".tsx"] }
            }
        });
        let rules = &mut config["rules"];
        rules["react/jsx-filename-extension"] =
            json!(["warn", { "extensions": [".jsx", ".tsx"] }]);
        rules["no-use-before-define"] = json!("off");
        rules["@typescript-eslint/no-use-before-define"] = json!(["error", { "variables": false }]);
        rules["import/extensions"] = json!([
            "error",
            "ignorePackages",
            { "js": "never", "jsx": "never", "ts": "never", "tsx": "never" }
        ]);
    }

    config
}

/// eas.json build profiles
pub fn eas_config() -> Value {
    json!({
        "cli": {
            "version": ">= 0.52.0"
        },
        "build": {
            "development": {
                "developmentClient": true,
                "distribution": "internal"
            },
            "preview": {
                "distribution": "internal"
            },
            "production": {}
        },
        "submit": {
            "production": {}
        }
    })
}

/// Serialize a payload the way it is written to disk
pub fn render(value: &Value) -> String {
    let mut text = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tsconfig_variants() {
        let bare = tsconfig(Template::Bare);
        assert_eq!(bare["compilerOptions"]["jsx"], "react-native");
        assert!(bare.get("extends").is_none());

        for template in [Template::ExpoManaged, Template::ExpoBare] {
            let expo = tsconfig(template);
            assert_eq!(expo["extends"], "expo/tsconfig.base");
            assert_eq!(expo["compilerOptions"]["strict"], true);
        }
    }

    #[test]
    fn test_eslint_typescript_uses_ts_parser() {
        let ts = eslint_config(Language::TypeScript);
        assert_eq!(ts["parser"], "@typescript-eslint/parser");
        assert!(ts["plugins"]
            .as_array()
            .unwrap()
            .contains(&json!("@typescript-eslint")));
        assert_eq!(ts["rules"]["no-use-before-define"], "off");
    }

    #[test]
    fn test_eslint_javascript_uses_babel_parser() {
        let js = eslint_config(Language::JavaScript);
        assert_eq!(js["parser"], "@babel/eslint-parser");
        assert!(js.get("settings").is_none());
    }

    #[test]
    fn test_render_is_pretty_with_trailing_newline() {
        let text = render(&eas_config());
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\n  \"build\""));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, eas_config());
    }

    #[test]
    fn test_eslint_ignore_covers_native_dirs() {
        assert!(ESLINT_IGNORE.lines().any(|l| l == "android/"));
        assert!(ESLINT_IGNORE.lines().any(|l| l == "ios/"));
    }
}
