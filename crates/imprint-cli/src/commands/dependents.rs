//! Dependents command implementation.

use std::path::Path;

use crate::cli::DependentsArgs;
use crate::commands::session::Session;
use crate::error::Result;
use crate::ui;

/// Execute the dependents command.
pub fn execute(args: DependentsArgs, config: Option<&Path>) -> Result<()> {
    print!("{}", render(&args, config)?);
    Ok(())
}

pub(crate) fn render(args: &DependentsArgs, config: Option<&Path>) -> Result<String> {
    let session = Session::populated(args.root.as_deref(), config)?;
    let file = session.resolve(&args.file);

    if !session.tracker.is_tracked(&file) {
        ui::warning(&format!(
            "{} was not found while scanning {}",
            file.display(),
            session.root.display()
        ));
    }

    Ok(session
        .tracker
        .render_dependents(&file, args.recursive, Some(&session.display_base))?)
}
