//! Fixture databases for unit tests.
//!
//! Each fixture is a SQLite file inside its own temp directory, so every
//! scoped connection opened by the executor sees the same data.

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::{ConnectOptions, Connection};
use tempfile::TempDir;

use crate::config::DatabaseConfig;

const SCHEMA: &[&str] = &[
    "CREATE TABLE authors (id INTEGER PRIMARY KEY, name TEXT NOT NULL, bio TEXT)",
    "CREATE TABLE articles (
        id INTEGER PRIMARY KEY,
        author INTEGER NOT NULL REFERENCES authors(id),
        title TEXT NOT NULL,
        slug TEXT NOT NULL UNIQUE
    )",
    "CREATE TABLE log (
        id INTEGER PRIMARY KEY,
        path TEXT NOT NULL,
        method TEXT NOT NULL DEFAULT 'GET',
        status TEXT NOT NULL,
        time TEXT NOT NULL DEFAULT '2016-07-01 00:00:00'
    )",
    "CREATE TABLE successes_per_day (date DATE PRIMARY KEY, success_count INTEGER NOT NULL)",
    "CREATE TABLE errors_per_day (date DATE PRIMARY KEY, error_count INTEGER NOT NULL)",
];

pub(crate) struct NewsFixture {
    dir: TempDir,
    conn: SqliteConnection,
}

impl NewsFixture {
    pub(crate) async fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let mut conn = SqliteConnectOptions::new()
            .filename(dir.path().join("news.db"))
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete)
            .connect()
            .await
            .unwrap();

        for statement in SCHEMA {
            sqlx::query(statement).execute(&mut conn).await.unwrap();
        }

        Self { dir, conn }
    }

    pub(crate) async fn author(&mut self, id: i64, name: &str) {
        sqlx::query("INSERT INTO authors (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&mut self.conn)
            .await
            .unwrap();
    }

    pub(crate) async fn article(&mut self, author: i64, slug: &str, title: &str) {
        sqlx::query("INSERT INTO articles (author, title, slug) VALUES (?, ?, ?)")
            .bind(author)
            .bind(title)
            .bind(slug)
            .execute(&mut self.conn)
            .await
            .unwrap();
    }

    /// Record `count` successful hits on `/article/<slug>`.
    pub(crate) async fn views(&mut self, slug: &str, count: usize) {
        let path = format!("/article/{}", slug);
        for _ in 0..count {
            self.log(&path, "200 OK").await;
        }
    }

    pub(crate) async fn log(&mut self, path: &str, status: &str) {
        sqlx::query("INSERT INTO log (path, status) VALUES (?, ?)")
            .bind(path)
            .bind(status)
            .execute(&mut self.conn)
            .await
            .unwrap();
    }

    pub(crate) async fn successes(&mut self, date: &str, count: i64) {
        sqlx::query("INSERT INTO successes_per_day (date, success_count) VALUES (?, ?)")
            .bind(date)
            .bind(count)
            .execute(&mut self.conn)
            .await
            .unwrap();
    }

    pub(crate) async fn errors(&mut self, date: &str, count: i64) {
        sqlx::query("INSERT INTO errors_per_day (date, error_count) VALUES (?, ?)")
            .bind(date)
            .bind(count)
            .execute(&mut self.conn)
            .await
            .unwrap();
    }

    pub(crate) async fn exec(&mut self, sql: &str) {
        sqlx::query(sql).execute(&mut self.conn).await.unwrap();
    }

    /// Close the writer and hand back the directory guard plus a config
    /// pointing at the database file.
    pub(crate) async fn finish(self) -> (TempDir, DatabaseConfig) {
        self.conn.close().await.unwrap();
        let url = format!("sqlite://{}", self.dir.path().join("news.db").display());
        (self.dir, DatabaseConfig::new(url))
    }
}
