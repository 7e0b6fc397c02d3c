//! Report runner.
//!
//! Runs the three reports in a fixed order (articles, authors, error
//! days). Each section is written only after its query has succeeded; the
//! first failure stops the run.

use std::io::Write;

use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;
use crate::executor::QueryExecutor;
use crate::format::{format_data_table, format_days, format_headline, DEFAULT_SECOND_COLUMN};
use crate::models::{ArticleViews, AuthorViews, ErrorDay, FormattedDay, TableRow};
use crate::queries::{high_error_days, popular_articles, popular_authors};

pub const AUTHORS_HEADLINE: &str = "Most popular article authors of all time";

/// All three result sets, for the JSON output mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSet {
    pub articles: Vec<ArticleViews>,
    pub authors: Vec<AuthorViews>,
    pub error_days: Vec<FormattedDay>,
}

pub fn articles_headline(count: u32) -> String {
    match count {
        1 => "Most popular article of all time".to_string(),
        n => format!("Most popular {} articles of all time", number_word(n)),
    }
}

pub fn error_days_headline(threshold: f64) -> String {
    format!("Days with more than {}% of requests as errors", threshold)
}

fn number_word(n: u32) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(n as usize)
        .map(|w| w.to_string())
        .unwrap_or_else(|| n.to_string())
}

/// Headline, table, trailing blank line.
pub fn render_section<R: TableRow>(
    headline: &str,
    rows: &[R],
    first_col: &str,
    second_col: &str,
) -> String {
    let mut section = format_headline(headline);
    section.push_str(&format_data_table(rows, first_col, second_col));
    section.push('\n');
    section
}

/// Run all three reports and write them as text tables to `out`.
pub async fn run_reports<W: Write>(
    executor: &QueryExecutor,
    config: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    let articles: Vec<ArticleViews> = executor
        .run_query(&popular_articles(config.top_articles))
        .await?;
    tracing::info!("Popular articles report: {} rows", articles.len());
    write_section(
        out,
        &render_section(
            &articles_headline(config.top_articles),
            &articles,
            "Article name",
            DEFAULT_SECOND_COLUMN,
        ),
    )?;

    let authors: Vec<AuthorViews> = executor.run_query(&popular_authors()).await?;
    tracing::info!("Popular authors report: {} rows", authors.len());
    write_section(
        out,
        &render_section(AUTHORS_HEADLINE, &authors, "Author name", DEFAULT_SECOND_COLUMN),
    )?;

    let days: Vec<ErrorDay> = executor
        .run_query(&high_error_days(config.error_threshold))
        .await?;
    tracing::info!("High error days report: {} rows", days.len());
    let days = format_days(days);
    write_section(
        out,
        &render_section(
            &error_days_headline(config.error_threshold),
            &days,
            "Day",
            "Error percent",
        ),
    )?;

    Ok(())
}

/// Run all three reports and collect the rows without rendering.
pub async fn collect_reports(
    executor: &QueryExecutor,
    config: &Config,
) -> Result<ReportSet, AppError> {
    let articles: Vec<ArticleViews> = executor
        .run_query(&popular_articles(config.top_articles))
        .await?;
    let authors: Vec<AuthorViews> = executor.run_query(&popular_authors()).await?;
    let days: Vec<ErrorDay> = executor
        .run_query(&high_error_days(config.error_threshold))
        .await?;

    Ok(ReportSet {
        articles,
        authors,
        error_days: format_days(days),
    })
}

/// Collect all three reports and write them to `out` as one JSON document.
pub async fn run_reports_json<W: Write>(
    executor: &QueryExecutor,
    config: &Config,
    out: &mut W,
) -> Result<(), AppError> {
    let reports = collect_reports(executor, config).await?;
    let json = serde_json::to_string_pretty(&reports)
        .map_err(|err| AppError::format(err.to_string()))?;
    writeln!(out, "{}", json)?;
    out.flush()?;
    Ok(())
}

fn write_section<W: Write>(out: &mut W, section: &str) -> Result<(), AppError> {
    out.write_all(section.as_bytes())?;
    out.flush()?;
    Ok(())
}
