// ABOUTME: Route handlers for the meal suggestion page
// ABOUTME: POST runs the suggestion service; the page always renders with HTTP 200
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! Menu routes
//!
//! GET shows the empty suggestion page; POST triggers the menu suggestion
//! service and renders whatever text it produced, whether a generated menu,
//! the empty-larder notice or an absorbed provider error.

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use std::sync::Arc;

use super::ServerResources;
use crate::errors::AppError;
use crate::views;

/// Menu routes handler
pub struct MenuRoutes;

impl MenuRoutes {
    /// Create all menu routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/menu", get(Self::handle_page))
            .route("/menu", post(Self::handle_suggest))
            .with_state(resources)
    }

    /// Handle GET /menu - render the page without a suggestion
    async fn handle_page() -> Response {
        Html(views::menu_page(None)).into_response()
    }

    /// Handle POST /menu - run the suggestion service and render the result
    async fn handle_suggest(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let today = Local::now().date_naive();
        let suggestion = resources.menu.suggest(today).await?;
        Ok(Html(views::menu_page(Some(&suggestion))).into_response())
    }
}
