// ABOUTME: Core data model for tracked food items and derived urgency status
// ABOUTME: Item is the fixed-shape persisted value; UrgencyStatus is recomputed on every read
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! # Data Model
//!
//! [`Item`] mirrors a row of the `items` table. [`UrgencyStatus`] is derived
//! from the expiry date and an injected "today" at read time and is never
//! persisted, so listings always reflect the current date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A tracked perishable good
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Store-assigned identifier, immutable after creation
    pub id: i64,
    /// Free-form item name, never empty
    pub name: String,
    /// Calendar date the item expires (no time component)
    pub expiry_date: NaiveDate,
}

/// How close an item is to its expiry date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyStatus {
    /// Already expired
    Danger,
    /// Expires within the next three days
    Warning,
    /// More than three days of shelf life left
    Safe,
}

/// Days of remaining shelf life at or below which an item counts as `warning`
const WARNING_WINDOW_DAYS: i64 = 3;

impl UrgencyStatus {
    /// Classify an expiry date against an injected "today".
    ///
    /// Pure and deterministic: callers resolve the wall clock once at the
    /// request boundary and pass the date in.
    #[must_use]
    pub fn classify(expiry_date: NaiveDate, today: NaiveDate) -> Self {
        let days_left = (expiry_date - today).num_days();
        if days_left < 0 {
            Self::Danger
        } else if days_left <= WARNING_WINDOW_DAYS {
            Self::Warning
        } else {
            Self::Safe
        }
    }

    /// String form used as the CSS class on listing rows
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Safe => "safe",
        }
    }
}
