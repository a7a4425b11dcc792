#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use serial_test::serial;
    use tempfile::TempDir;

    use crate::config::ImprintConfig;
    use crate::error::{CliError, ConfigError};

    fn project(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            let path = temp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        temp
    }

    #[test]
    #[serial]
    fn missing_file_falls_back_to_defaults() {
        let temp = project(&[]);
        let config = ImprintConfig::load(temp.path(), None).unwrap();
        assert_eq!(config, ImprintConfig::default());
        assert_eq!(config.registry().unwrap().len(), 4);
    }

    #[test]
    #[serial]
    fn toml_file_is_discovered() {
        let temp = project(&[(
            "imprint.toml",
            r#"
root = "styles"
exclude = ["vendor/"]
log_dependents = true

[parsers]
".less" = false
".scss" = { prefixes = [] }
"#,
        )]);

        let config = ImprintConfig::load(temp.path(), None).unwrap();
        assert_eq!(config.root, Some(temp.path().join("styles")));
        assert_eq!(config.exclude, vec!["vendor/"]);
        assert!(config.log_dependents);

        let registry = config.registry().unwrap();
        assert!(!registry.contains(".less"));
        assert!(registry.get(".scss").unwrap().prefixes().is_empty());
        assert_eq!(registry.get(".scss").unwrap().postfixes(), [".scss", ".sass"]);
    }

    #[test]
    #[serial]
    fn toml_takes_precedence_over_json() {
        let temp = project(&[
            ("imprint.toml", "log_dependents = true\n"),
            ("imprint.json", r#"{ "log_dependents": false }"#),
        ]);
        assert_eq!(
            ImprintConfig::discover(temp.path()),
            Some(temp.path().join("imprint.toml"))
        );
        assert!(ImprintConfig::load(temp.path(), None).unwrap().log_dependents);
    }

    #[test]
    #[serial]
    fn explicit_json_file_with_new_extension() {
        let temp = project(&[(
            "conf/ci.json",
            r#"{
                "display_base": "..",
                "parsers": {
                    ".styl": { "parserSteps": ["@import\\s+'([^']+)'"], "postfixes": [".styl"] },
                    ".sass": null
                }
            }"#,
        )]);
        let explicit = temp.path().join("conf/ci.json");

        let config = ImprintConfig::load(temp.path(), Some(&explicit)).unwrap();
        assert_eq!(config.display_base, Some(temp.path().join("conf/..")));

        let registry = config.registry().unwrap();
        assert!(registry.contains(".STYL"));
        assert!(!registry.contains(".sass"));
    }

    #[test]
    #[serial]
    fn explicit_file_must_exist() {
        let temp = project(&[]);
        let missing = temp.path().join("nope.toml");
        let err = ImprintConfig::load(temp.path(), Some(&missing)).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::NotFound(ref p)) if p == &missing));
    }

    #[test]
    #[serial]
    fn unknown_fields_are_rejected() {
        let temp = project(&[("imprint.toml", "roots = \"typo\"\n")]);
        let err = ImprintConfig::load(temp.path(), None).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn new_extension_without_steps_fails_to_register() {
        let temp = project(&[(
            "imprint.toml",
            "[parsers]\n\".styl\" = { postfixes = [\".styl\"] }\n",
        )]);
        let config = ImprintConfig::load(temp.path(), None).unwrap();
        assert!(matches!(config.registry(), Err(ConfigError::Parsers(_))));
    }

    #[test]
    #[serial]
    fn environment_overrides_file() {
        let temp = project(&[("imprint.toml", "log_dependents = false\nroot = \"a\"\n")]);
        unsafe {
            std::env::set_var("IMPRINT_LOG_DEPENDENTS", "true");
            std::env::set_var("IMPRINT_ROOT", "b");
        }
        let result = ImprintConfig::load(temp.path(), None);
        unsafe {
            std::env::remove_var("IMPRINT_LOG_DEPENDENTS");
            std::env::remove_var("IMPRINT_ROOT");
        }

        let config = result.unwrap();
        assert!(config.log_dependents);
        assert_eq!(config.root, Some(temp.path().join("b")));
    }

    #[test]
    fn include_and_exclude_filters() {
        let config = ImprintConfig {
            include: vec!["src/".into()],
            exclude: vec!["vendor/".into()],
            ..ImprintConfig::default()
        };
        assert!(config.is_included(Path::new("src/main.scss")));
        assert!(!config.is_included(Path::new("lib/main.scss")));
        assert!(config.is_excluded(Path::new("src/vendor/grid.scss")));
        assert!(!config.is_excluded(Path::new("src/main.scss")));

        let defaults = ImprintConfig::default();
        assert!(defaults.is_included(Path::new("anything.scss")));
        assert!(defaults.is_excluded(&PathBuf::from("node_modules/x/a.scss")));
        assert!(!defaults.is_excluded(Path::new("a.scss")));
    }
}
