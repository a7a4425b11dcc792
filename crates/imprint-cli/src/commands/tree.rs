//! Tree command implementation.

use std::path::Path;

use crate::cli::TreeArgs;
use crate::commands::session::Session;
use crate::error::Result;

/// Execute the tree command.
///
/// Scans the project and prints every dependency with the files importing it.
pub fn execute(args: TreeArgs, config: Option<&Path>) -> Result<()> {
    print!("{}", render(&args, config)?);
    Ok(())
}

pub(crate) fn render(args: &TreeArgs, config: Option<&Path>) -> Result<String> {
    let session = Session::populated(args.root.as_deref(), config)?;
    Ok(session.tracker.render_tree(Some(&session.display_base)))
}
