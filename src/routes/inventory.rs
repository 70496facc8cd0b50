// ABOUTME: Route handlers for the item list and add/edit/delete forms
// ABOUTME: Validation failures re-render the form with a banner; missing ids render a 404 page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! Inventory routes
//!
//! Browser-facing CRUD endpoints over the inventory service. Successful
//! mutations redirect back to the listing; each request re-reads current
//! store state, nothing is cached across requests.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Form, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use std::sync::Arc;

use super::ServerResources;
use crate::errors::{AppError, ErrorCode};
use crate::views;

/// Form fields shared by the add and edit endpoints
#[derive(Debug, Deserialize)]
pub struct ItemForm {
    /// Item name
    pub name: String,
    /// Expiry date as ISO text (`YYYY-MM-DD`)
    pub expiry_date: String,
}

/// Inventory routes handler
pub struct InventoryRoutes;

impl InventoryRoutes {
    /// Create all inventory routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/add", post(Self::handle_add))
            .route("/:id/edit", get(Self::handle_edit_form))
            .route("/:id/edit", post(Self::handle_edit))
            .route("/:id/delete", post(Self::handle_delete))
            .with_state(resources)
    }

    /// The calendar date mutations and classifications are judged against
    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Handle GET / - render the item list with urgency status
    async fn handle_index(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let items = resources.inventory.list_with_status(Self::today()).await?;
        Ok(Html(views::index_page(&items, None)).into_response())
    }

    /// Handle POST /add - create an item and redirect to the listing
    async fn handle_add(
        State(resources): State<Arc<ServerResources>>,
        Form(form): Form<ItemForm>,
    ) -> Result<Response, AppError> {
        match resources
            .inventory
            .create(&form.name, &form.expiry_date)
            .await
        {
            Ok(_) => Ok(Redirect::to("/").into_response()),
            Err(error) if error.code == ErrorCode::InvalidInput => {
                // Re-show the listing with the validation message
                let items = resources.inventory.list_with_status(Self::today()).await?;
                Ok((
                    StatusCode::BAD_REQUEST,
                    Html(views::index_page(&items, Some(&error.message))),
                )
                    .into_response())
            }
            Err(error) => Err(error),
        }
    }

    /// Handle GET /:id/edit - render the edit form pre-filled
    async fn handle_edit_form(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        let item = resources.inventory.get(id).await?;
        Ok(Html(views::edit_page(&item, None)).into_response())
    }

    /// Handle POST /:id/edit - update an item and redirect to the listing
    async fn handle_edit(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
        Form(form): Form<ItemForm>,
    ) -> Result<Response, AppError> {
        // Resolve the item first so an absent id is a 404 even when the
        // submitted fields are also invalid
        let item = resources.inventory.get(id).await?;

        match resources
            .inventory
            .update(id, &form.name, &form.expiry_date)
            .await
        {
            Ok(_) => Ok(Redirect::to("/").into_response()),
            Err(error) if error.code == ErrorCode::InvalidInput => Ok((
                StatusCode::BAD_REQUEST,
                Html(views::edit_page(&item, Some(&error.message))),
            )
                .into_response()),
            Err(error) => Err(error),
        }
    }

    /// Handle POST /:id/delete - delete an item and redirect to the listing
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<i64>,
    ) -> Result<Response, AppError> {
        resources.inventory.delete(id).await?;
        Ok(Redirect::to("/").into_response())
    }
}
