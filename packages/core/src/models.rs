//! Row shapes returned by the report queries.
//!
//! Field order mirrors the projected columns: the count (or percentage)
//! first, the label second.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the popular-articles report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ArticleViews {
    pub views: i64,
    pub title: String,
}

/// One row of the popular-authors report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct AuthorViews {
    pub views: i64,
    pub name: String,
}

/// A day whose error percentage met the threshold, as read from the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ErrorDay {
    pub error_percent: f64,
    pub date: NaiveDate,
}

/// An [`ErrorDay`] with its date rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormattedDay {
    pub error_percent: f64,
    pub day: String,
}

/// A two-column row that can be laid out by the table formatter.
pub trait TableRow {
    /// First-column text.
    fn label(&self) -> &str;
    /// Second-column text.
    fn value(&self) -> String;
}

impl TableRow for ArticleViews {
    fn label(&self) -> &str {
        &self.title
    }

    fn value(&self) -> String {
        self.views.to_string()
    }
}

impl TableRow for AuthorViews {
    fn label(&self) -> &str {
        &self.name
    }

    fn value(&self) -> String {
        self.views.to_string()
    }
}

impl TableRow for FormattedDay {
    fn label(&self) -> &str {
        &self.day
    }

    fn value(&self) -> String {
        format!("{:.2}", self.error_percent)
    }
}
