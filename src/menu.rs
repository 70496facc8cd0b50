// ABOUTME: Menu suggestion service turning unexpired larder items into AI meal proposals
// ABOUTME: Absorbs every provider failure into a user-facing message so the page always renders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! # Menu Suggestion Service
//!
//! Gathers the names of items that have not yet expired, builds a fixed
//! instructional prompt and asks the configured generative-language provider
//! for three meal proposals. Provider failures of any kind (network, auth,
//! quota, malformed response) never propagate: they are converted into the
//! text of the suggestion itself, with the raw detail kept in the log.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::database::Database;
use crate::errors::AppResult;
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Shown when no unexpired items exist; no API call is made in that case
pub const EMPTY_LARDER_MESSAGE: &str =
    "There are no unexpired ingredients in your larder. Add some items first.";

/// System instruction sent with every suggestion request
const SUGGESTION_SYSTEM_PROMPT: &str = "\
You are a professional recipe developer. Based on the ingredient list you are \
given, propose exactly three meals that are easy to cook at home.

Rules:
- Give each meal a name and a clear summary of 2-3 steps.
- Follow this Markdown layout exactly:

**[Proposal 1: meal name]**
- Step 1
- Step 2

**[Proposal 2: meal name]**
- Step 1
- Step 2
";

/// Menu suggestion service
#[derive(Clone)]
pub struct MenuService {
    db: Arc<Database>,
    provider: Option<Arc<dyn LlmProvider>>,
    model: String,
}

impl MenuService {
    /// Create a new menu service.
    ///
    /// `provider` is `None` when no API key was configured at startup; the
    /// failure then surfaces on the suggestion page, not at boot.
    #[must_use]
    pub fn new(
        db: Arc<Database>,
        provider: Option<Arc<dyn LlmProvider>>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            db,
            provider,
            model: model.into(),
        }
    }

    /// Produce suggestion text for the items unexpired as of `today`.
    ///
    /// # Errors
    ///
    /// Returns an error only if the item store query fails; provider
    /// failures are folded into the returned text.
    pub async fn suggest(&self, today: NaiveDate) -> AppResult<String> {
        let names = self.db.list_unexpired_names(today).await?;

        if names.is_empty() {
            debug!("larder has no unexpired items, skipping API call");
            return Ok(EMPTY_LARDER_MESSAGE.to_owned());
        }

        let food_list = names.join(", ");

        let Some(provider) = self.provider.as_ref() else {
            warn!("meal suggestion requested but no LLM provider is configured");
            return Ok(unavailable_message("the AI provider is not configured"));
        };

        let request = ChatRequest::new(vec![
            ChatMessage::system(SUGGESTION_SYSTEM_PROMPT),
            ChatMessage::user(format!("Here is the ingredient list:\n{food_list}")),
        ])
        .with_model(self.model.clone());

        match provider.complete(&request).await {
            Ok(response) => Ok(response.content),
            Err(error) => {
                // Log the full detail, show only the redacted description
                warn!(error = %error, "meal suggestion call failed");
                Ok(unavailable_message(error.code.description()))
            }
        }
    }
}

/// User-facing text for an absorbed suggestion failure
fn unavailable_message(detail: &str) -> String {
    format!("Could not fetch a meal suggestion: {detail}. Please try again later.")
}
