use clap::Parser;

/// News reports CLI arguments
///
/// Every flag is optional; with none given the three reports run with
/// the configured (or default) parameters.
#[derive(Debug, Parser)]
#[command(
    name = "news-reports",
    version,
    about = "Popular articles, popular authors and high-error days from the news log"
)]
pub struct Cli {
    /// Database URL (overrides NEWS_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// Number of articles in the popular-articles report
    #[arg(long)]
    pub top_articles: Option<u32>,

    /// Error percentage at or above which a day is reported
    #[arg(long)]
    pub error_threshold: Option<f64>,

    /// Emit all three reports as a single JSON document
    #[arg(long)]
    pub json: bool,
}
