// ABOUTME: Library crate for the larder server, a household food-inventory tracker
// ABOUTME: Wires the item store, inventory and menu services, LLM provider and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! # Larder
//!
//! Household food-inventory tracker: register perishable items with expiry
//! dates, view them color-coded by urgency, and request AI-generated meal
//! suggestions for the items that have not yet expired.
//!
//! The crate is a thin CRUD layer over a SQLite `items` table plus a single
//! outbound call to the Gemini generative-language API:
//!
//! - [`database::Database`] — durable item store
//! - [`models::UrgencyStatus`] — pure expiry classifier
//! - [`inventory::InventoryService`] — validated CRUD with status listing
//! - [`menu::MenuService`] — prompt building and the external AI call
//! - [`routes`] — axum presentation layer rendering [`views`]

/// Environment-based server configuration
pub mod config;
/// SQLite-backed item store
pub mod database;
/// Unified error handling
pub mod errors;
/// Inventory service with validation and urgency status
pub mod inventory;
/// LLM provider abstraction and the Gemini implementation
pub mod llm;
/// Structured logging setup
pub mod logging;
/// Menu suggestion service
pub mod menu;
/// Core data model
pub mod models;
/// HTTP routes and shared server state
pub mod routes;
/// HTML page rendering
pub mod views;
