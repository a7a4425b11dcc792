//! Command tests against real project directories.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::cli::{ChangedArgs, DependentsArgs, OutputFormat, TreeArgs};
use crate::commands::changed::{self, ChangeReport};
use crate::commands::{dependents, tree};
use crate::error::CliError;

struct Project {
    temp: TempDir,
}

impl Project {
    fn new(files: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            let path = temp.path().join(name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        Self { temp }
    }

    fn root(&self) -> PathBuf {
        fs::canonicalize(self.temp.path()).unwrap()
    }

    fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    fn changed(&self, files: &[&str]) -> Vec<ChangeReport> {
        let args = ChangedArgs {
            files: files.iter().map(|f| self.path(f)).collect(),
            root: Some(self.root()),
            log_dependents: false,
            format: OutputFormat::Text,
        };
        changed::replay(&args, None).unwrap()
    }
}

fn sass_project() -> Project {
    Project::new(&[
        ("src/_colors.scss", "$brand: red;"),
        ("src/_theme.scss", "@use 'colors';"),
        ("src/main.scss", "@import 'theme';"),
        ("src/print.scss", "@import 'colors';"),
        ("README.md", "@import 'src/colors';"),
    ])
}

#[test]
fn tree_lists_importers_relative_to_root() {
    let project = sass_project();
    let args = TreeArgs {
        root: Some(project.root()),
    };
    let out = tree::render(&args, None).unwrap();

    assert!(out.contains(
        "┬ src/_colors.scss\n├── src/_theme.scss\n└── src/print.scss\n"
    ));
    assert!(out.contains("┬ src/_theme.scss\n└── src/main.scss\n"));
    assert!(!out.contains("README"));
}

#[test]
fn dependents_recursive() {
    let project = sass_project();
    let args = DependentsArgs {
        file: project.path("src/_colors.scss"),
        recursive: true,
        root: Some(project.root()),
    };
    let out = dependents::render(&args, None).unwrap();
    assert!(out.starts_with("┬ src/_colors.scss\n"));
    assert!(out.contains("src/main.scss"));
    assert!(out.contains("src/print.scss"));

    let direct = DependentsArgs {
        recursive: false,
        ..args
    };
    let out = dependents::render(&direct, None).unwrap();
    assert!(!out.contains("src/main.scss"));
}

#[test]
fn changed_partial_rebuilds_transitive_importers() {
    let project = sass_project();
    let reports = project.changed(&["src/_colors.scss", "src/main.scss", "README.md"]);

    assert_eq!(
        reports[0],
        ChangeReport {
            file: "src/_colors.scss".into(),
            exists: true,
            rebuild: Some(vec![
                "src/_theme.scss".into(),
                "src/main.scss".into(),
                "src/print.scss".into(),
            ]),
        }
    );
    assert_eq!(reports[1].rebuild, Some(vec![]));
    assert_eq!(reports[2].rebuild, None);
}

#[test]
fn changed_deleted_partial_is_replayed_without_content() {
    let project = Project::new(&[("base.less", "@import 'missing';")]);
    let reports = project.changed(&["missing.less"]);

    assert!(!reports[0].exists);
    assert_eq!(reports[0].rebuild, Some(vec!["base.less".to_string()]));
    assert_eq!(
        changed::render_text(&reports),
        "missing.less (deleted)\n  base.less\n"
    );
}

#[test]
fn logging_dependents_does_not_change_the_report() {
    let project = sass_project();
    let args = ChangedArgs {
        files: vec![project.path("src/_theme.scss")],
        root: Some(project.root()),
        log_dependents: true,
        format: OutputFormat::Text,
    };
    let logged = changed::replay(&args, None).unwrap();

    assert_eq!(logged, project.changed(&["src/_theme.scss"]));
    assert_eq!(logged[0].rebuild, Some(vec!["src/main.scss".to_string()]));
}

#[test]
fn config_file_excludes_and_overrides() {
    let project = Project::new(&[
        ("imprint.toml", "exclude = [\"vendor/\"]\n\n[parsers]\n\".less\" = false\n"),
        ("_grid.scss", ""),
        ("vendor/theme.scss", "@import '../grid';"),
        ("app.scss", "@import 'grid';"),
        ("a.less", ""),
        ("b.less", "@import 'a';"),
    ]);

    let reports = project.changed(&["_grid.scss", "a.less"]);
    assert_eq!(reports[0].rebuild, Some(vec!["app.scss".to_string()]));
    assert_eq!(reports[1].rebuild, None);
}

#[test]
fn explicit_config_path_is_used() {
    let project = Project::new(&[
        ("conf/imprint.json", r#"{ "display_base": "../src" }"#),
        ("src/_a.pcss", ""),
        ("src/b.pcss", "@import '_a.pcss';"),
    ]);
    let config = project.path("conf/imprint.json");
    let args = DependentsArgs {
        file: project.path("src/_a.pcss"),
        recursive: false,
        root: Some(project.root()),
    };
    let out = dependents::render(&args, Some(&config)).unwrap();
    assert_eq!(out, "┬ _a.pcss\n└── b.pcss\n");
}

#[test]
fn missing_root_is_reported() {
    let project = Project::new(&[]);
    let args = TreeArgs {
        root: Some(project.path("nowhere")),
    };
    let err = tree::render(&args, None).unwrap_err();
    assert!(matches!(err, CliError::FileNotFound(ref p) if p.ends_with("nowhere")));
}

#[test]
fn reports_serialize_as_json() {
    let report = ChangeReport {
        file: "a.scss".into(),
        exists: true,
        rebuild: None,
    };
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["file"], "a.scss");
    assert!(json["rebuild"].is_null());
    assert!(Path::new(json["file"].as_str().unwrap()).extension().is_some());
}
