//! Query builders for the three reports.
//!
//! Each builder returns a [`ReportQuery`]: static SQL plus the typed
//! parameters to bind, in placeholder order. Nothing here touches the
//! database; [`crate::executor::QueryExecutor`] runs the result.
//!
//! Ties on view count are ordered by title (articles) or name (authors)
//! so repeated runs over the same data print the same table.

/// A typed value bound to a `?` placeholder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryParam {
    Int(i64),
    Real(f64),
}

/// SQL text together with its bind parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportQuery {
    sql: &'static str,
    params: Vec<QueryParam>,
}

impl ReportQuery {
    fn new(sql: &'static str, params: Vec<QueryParam>) -> Self {
        Self { sql, params }
    }

    pub fn sql(&self) -> &'static str {
        self.sql
    }

    pub fn params(&self) -> &[QueryParam] {
        &self.params
    }
}

const POPULAR_ARTICLES_SQL: &str = "
    SELECT COUNT(log.status) AS views, articles.title AS title
    FROM articles
    JOIN log ON log.path = '/article/' || articles.slug
    GROUP BY articles.title
    ORDER BY views DESC, articles.title ASC
    LIMIT ?";

const POPULAR_AUTHORS_SQL: &str = "
    SELECT COUNT(log.id) AS views, authors.name AS name
    FROM articles
    JOIN authors ON articles.author = authors.id
    JOIN log ON log.path = '/article/' || articles.slug
    GROUP BY authors.name
    ORDER BY views DESC, authors.name ASC";

// Zero-traffic days are excluded before the division is evaluated.
// `date()` trims timestamp-valued aggregate keys to the calendar day.
const HIGH_ERROR_DAYS_SQL: &str = "
    SELECT ROUND(
               CAST(errors_per_day.error_count AS REAL) * 100.0
               / (errors_per_day.error_count + successes_per_day.success_count),
               2
           ) AS error_percent,
           date(successes_per_day.date) AS date
    FROM successes_per_day
    JOIN errors_per_day ON successes_per_day.date = errors_per_day.date
    WHERE (errors_per_day.error_count + successes_per_day.success_count) > 0
      AND CAST(errors_per_day.error_count AS REAL) * 100.0
          / (errors_per_day.error_count + successes_per_day.success_count) >= ?
    ORDER BY date ASC";

/// The `count` most viewed articles, most viewed first.
pub fn popular_articles(count: u32) -> ReportQuery {
    ReportQuery::new(
        POPULAR_ARTICLES_SQL,
        vec![QueryParam::Int(i64::from(count))],
    )
}

/// Every author with at least one article view, most viewed first.
pub fn popular_authors() -> ReportQuery {
    ReportQuery::new(POPULAR_AUTHORS_SQL, Vec::new())
}

/// Days whose error percentage is at least `limit`, oldest first.
/// The returned percentage is rounded to two decimals; the comparison
/// uses the unrounded value.
pub fn high_error_days(limit: f64) -> ReportQuery {
    ReportQuery::new(HIGH_ERROR_DAYS_SQL, vec![QueryParam::Real(limit)])
}
