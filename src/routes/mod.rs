// ABOUTME: Route module organization for the larder server HTTP endpoints
// ABOUTME: Holds the shared ServerResources state and assembles the full router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! Route modules for the larder server
//!
//! Each domain module contains route definitions and thin handler functions
//! that delegate to the service layer. Handlers resolve "today" once at the
//! request boundary and pass it down explicitly.

/// Health check and system status routes
pub mod health;
/// Item listing and CRUD form routes
pub mod inventory;
/// Meal suggestion routes
pub mod menu;

pub use health::HealthRoutes;
pub use inventory::InventoryRoutes;
pub use menu::MenuRoutes;

use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::inventory::InventoryService;
use crate::menu::MenuService;

/// Shared state constructed once at startup and reused read-only
pub struct ServerResources {
    /// Inventory service over the item store
    pub inventory: InventoryService,
    /// Menu suggestion service
    pub menu: MenuService,
}

impl ServerResources {
    /// Create the shared server state
    #[must_use]
    pub fn new(inventory: InventoryService, menu: MenuService) -> Self {
        Self { inventory, menu }
    }
}

/// Assemble the full application router
#[must_use]
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(InventoryRoutes::routes(resources.clone()))
        .merge(MenuRoutes::routes(resources))
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
}
