//! Changed command implementation.
//!
//! Replays files as change events against a freshly populated tracker, the
//! way a watcher-driven build would report them.

use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;

use crate::cli::{ChangedArgs, OutputFormat};
use crate::commands::session::Session;
use crate::error::Result;

/// Rebuild list for one replayed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeReport {
    pub file: String,
    /// False when the file was deleted and replayed without content
    pub exists: bool,
    /// `None` when the tracker does not handle the file's extension or had never seen it
    pub rebuild: Option<Vec<String>>,
}

/// Execute the changed command.
pub fn execute(args: ChangedArgs, config: Option<&Path>) -> Result<()> {
    let reports = replay(&args, config)?;
    match args.format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&reports)?),
    }
    Ok(())
}

/// Populate, then feed each file back through the tracker in argument order.
pub fn replay(args: &ChangedArgs, config: Option<&Path>) -> Result<Vec<ChangeReport>> {
    let session = Session::populated(args.root.as_deref(), config)?;
    let session = if args.log_dependents {
        session.with_log_dependents(true)
    } else {
        session
    };

    let mut reports = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let path = session.resolve(file);
        let content = session.read(&path)?;
        let rebuild = session.tracker.update(&path, content.as_deref())?;

        let path = imprint::DependencyPath::new(&path)?;
        reports.push(ChangeReport {
            file: session.display(&path),
            exists: content.is_some(),
            rebuild: rebuild
                .map(|files| files.iter().map(|f| session.display(&f.path)).collect()),
        });
    }
    Ok(reports)
}

pub fn render_text(reports: &[ChangeReport]) -> String {
    let mut out = String::new();
    for report in reports {
        let deleted = if report.exists { "" } else { " (deleted)" };
        let status = match &report.rebuild {
            None => " (not tracked)",
            Some(files) if files.is_empty() => " (nothing to rebuild)",
            Some(_) => "",
        };
        let _ = writeln!(out, "{}{deleted}{status}", report.file);
        for file in report.rebuild.iter().flatten() {
            let _ = writeln!(out, "  {file}");
        }
    }
    out
}
