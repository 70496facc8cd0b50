// ABOUTME: Inventory service composing the item store with input validation and urgency status
// ABOUTME: All mutating calls commit to the store before the caller observes success
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! # Inventory Service
//!
//! CRUD operations over the item store, used by the presentation layer.
//! Validation happens here: names must be non-empty after trimming and expiry
//! dates must parse as ISO calendar dates. "today" is an explicit parameter
//! so listings classify deterministically under test.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::database::Database;
use crate::errors::{AppError, AppResult};
use crate::models::{Item, UrgencyStatus};

/// Inventory service over the item store
#[derive(Clone)]
pub struct InventoryService {
    db: Arc<Database>,
}

impl InventoryService {
    /// Create a new inventory service
    #[must_use]
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// List all items with their urgency status, expiry ascending
    ///
    /// # Errors
    ///
    /// Returns an error if the store query fails.
    pub async fn list_with_status(
        &self,
        today: NaiveDate,
    ) -> AppResult<Vec<(Item, UrgencyStatus)>> {
        let items = self.db.list_items().await?;
        Ok(items
            .into_iter()
            .map(|item| {
                let status = UrgencyStatus::classify(item.expiry_date, today);
                (item, status)
            })
            .collect())
    }

    /// Create a new item from form input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name or unparseable date, or a
    /// database error if the insert fails.
    pub async fn create(&self, name: &str, expiry_date_text: &str) -> AppResult<Item> {
        let (name, expiry_date) = validate(name, expiry_date_text)?;
        let item = self.db.insert_item(name, expiry_date).await?;
        debug!(id = item.id, "created item");
        Ok(item)
    }

    /// Fetch a single item, failing if the id is absent
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the id is absent.
    pub async fn get(&self, id: i64) -> AppResult<Item> {
        self.db
            .get_item(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Item {id}")))
    }

    /// Update an item's name and expiry date from form input
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for bad input or `ResourceNotFound` if the id
    /// is absent.
    pub async fn update(
        &self,
        id: i64,
        name: &str,
        expiry_date_text: &str,
    ) -> AppResult<Item> {
        let (name, expiry_date) = validate(name, expiry_date_text)?;
        let updated = self.db.update_item(id, name, expiry_date).await?;
        if !updated {
            return Err(AppError::not_found(format!("Item {id}")));
        }
        debug!(id, "updated item");
        Ok(Item {
            id,
            name: name.to_owned(),
            expiry_date,
        })
    }

    /// Delete an item
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the id is absent.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let deleted = self.db.delete_item(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Item {id}")));
        }
        debug!(id, "deleted item");
        Ok(())
    }
}

/// Validate form input, returning the trimmed name and parsed date
fn validate<'a>(name: &'a str, expiry_date_text: &str) -> AppResult<(&'a str, NaiveDate)> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Item name must not be empty"));
    }

    let expiry_date = NaiveDate::parse_from_str(expiry_date_text.trim(), "%Y-%m-%d")
        .map_err(|_| {
            AppError::invalid_input(format!(
                "Expiry date must be an ISO date (YYYY-MM-DD), got {expiry_date_text:?}"
            ))
        })?;

    Ok((name, expiry_date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_validate_rejects_empty_name() {
        let error = validate("   ", "2025-06-15").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_validate_rejects_bad_date() {
        let error = validate("Milk", "next tuesday").unwrap_err();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_validate_trims_name() {
        let (name, date) = validate("  Milk  ", "2025-06-15").unwrap();
        assert_eq!(name, "Milk");
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
    }
}
