use clap::Parser;

/// Find the shortest chain of links between two Wikipedia articles.
#[derive(Debug, Parser)]
#[command(name = "wikipath")]
pub struct Cli {
    /// Starting article topic, e.g. "South Korea". Prompted for when absent.
    pub start: Option<String>,

    /// Target article topic, e.g. "Hangul". Prompted for when absent.
    pub end: Option<String>,

    /// Override the search endpoint priority list (repeatable, tried in
    /// the given order).
    #[arg(long = "endpoint", value_name = "URL")]
    pub endpoints: Vec<String>,

    /// Probe the health route of every configured endpoint and exit.
    #[arg(long)]
    pub check: bool,

    /// Log to the terminal in addition to ./wikipath.log.
    #[arg(long)]
    pub verbose: bool,
}
