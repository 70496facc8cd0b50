// ABOUTME: SQLite-backed item store for the larder server using sqlx connection pooling
// ABOUTME: Handles schema migration and CRUD over the items table, dates stored as ISO text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! # Item Store
//!
//! Durable storage for tracked items keyed by their store-assigned id.
//! Every mutating operation commits before returning; callers observe either
//! the full new state or the prior state. Ids come from SQLite
//! `AUTOINCREMENT` and are never reused after deletion.

use chrono::NaiveDate;
use sqlx::{sqlite::SqliteRow, Pool, Row, Sqlite, SqlitePool};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::models::Item;

/// Date format used for the `expiry_date` column
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Database manager for item storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or migration fails.
    pub async fn new(database_url: &str) -> AppResult<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:") {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_owned()
        };

        let pool = SqlitePool::connect(&connection_options).await?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a migration statement fails.
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS items (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                expiry_date TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_expiry_date ON items(expiry_date)")
            .execute(&self.pool)
            .await?;

        info!("Database migrations completed");
        Ok(())
    }

    /// List all items ordered by expiry date ascending.
    ///
    /// Equal expiry dates are tie-broken by id so listing order is stable.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_items(&self) -> AppResult<Vec<Item>> {
        let rows = sqlx::query("SELECT id, name, expiry_date FROM items ORDER BY expiry_date ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_item).collect()
    }

    /// Get an item by id
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn get_item(&self, id: i64) -> AppResult<Option<Item>> {
        let row = sqlx::query("SELECT id, name, expiry_date FROM items WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(Self::row_to_item).transpose()
    }

    /// Insert a new item and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub async fn insert_item(&self, name: &str, expiry_date: NaiveDate) -> AppResult<Item> {
        let result = sqlx::query("INSERT INTO items (name, expiry_date) VALUES (?1, ?2)")
            .bind(name)
            .bind(expiry_date.format(DATE_FORMAT).to_string())
            .execute(&self.pool)
            .await?;

        Ok(Item {
            id: result.last_insert_rowid(),
            name: name.to_owned(),
            expiry_date,
        })
    }

    /// Update an item's name and expiry date.
    ///
    /// Returns `false` if no item with that id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub async fn update_item(
        &self,
        id: i64,
        name: &str,
        expiry_date: NaiveDate,
    ) -> AppResult<bool> {
        let result = sqlx::query("UPDATE items SET name = ?1, expiry_date = ?2 WHERE id = ?3")
            .bind(name)
            .bind(expiry_date.format(DATE_FORMAT).to_string())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an item by id.
    ///
    /// Returns `false` if no item with that id exists; a second delete of the
    /// same id reports absent rather than silently succeeding.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub async fn delete_item(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Names of items that have not expired as of `today`, expiry ascending.
    ///
    /// ISO date text compares lexicographically in date order, so the filter
    /// runs directly on the stored column.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_unexpired_names(&self, today: NaiveDate) -> AppResult<Vec<String>> {
        let rows = sqlx::query(
            "SELECT name FROM items WHERE expiry_date >= ?1 ORDER BY expiry_date ASC, id ASC",
        )
        .bind(today.format(DATE_FORMAT).to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("name").map_err(AppError::from))
            .collect()
    }

    /// Decode a row of the items table into an [`Item`]
    fn row_to_item(row: &SqliteRow) -> AppResult<Item> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let expiry_text: String = row.try_get("expiry_date")?;
        let expiry_date = NaiveDate::parse_from_str(&expiry_text, DATE_FORMAT).map_err(|e| {
            AppError::database(format!("invalid expiry_date for item {id}: {e}"))
        })?;

        Ok(Item {
            id,
            name,
            expiry_date,
        })
    }
}
