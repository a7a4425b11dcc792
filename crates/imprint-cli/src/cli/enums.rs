use clap::ValueEnum;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tree
    #[default]
    Text,
    /// JSON on stdout
    Json,
}
