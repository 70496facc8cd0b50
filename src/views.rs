// ABOUTME: HTML page rendering for the larder web UI using inline templates
// ABOUTME: Every interpolated value is escaped; suggestion text renders as escaped verbatim text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

//! # Views
//!
//! Browser-facing pages built from inline template strings. The urgency
//! status of each listing row becomes its CSS class (`danger`, `warning`,
//! `safe`). The presentation layer owns Markdown-safe display of suggestion
//! text: it is escaped and shown verbatim inside a `<pre>` block.

use axum::http::StatusCode;
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::fmt::Write as _;

use crate::models::{Item, UrgencyStatus};

/// Shared page shell with the stylesheet for urgency classes
fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} - Larder</title>
<style>
body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
table {{ border-collapse: collapse; width: 100%; }}
th, td {{ border: 1px solid #ccc; padding: 0.4rem 0.6rem; text-align: left; }}
tr.danger td {{ background: #fdd; }}
tr.warning td {{ background: #ffe9b3; }}
tr.safe td {{ background: #e4f7e4; }}
p.error {{ color: #b00; }}
pre.suggestion {{ background: #f4f4f4; padding: 1rem; white-space: pre-wrap; }}
form.inline {{ display: inline; }}
nav a {{ margin-right: 1rem; }}
</style>
</head>
<body>
<nav><a href="/">Items</a><a href="/menu">Meal suggestions</a></nav>
{body}
</body>
</html>
"#,
        title = encode_text(title),
    )
}

/// Optional validation-error banner
fn error_banner(error: Option<&str>) -> String {
    error.map_or_else(String::new, |message| {
        format!("<p class=\"error\">{}</p>\n", encode_text(message))
    })
}

/// Item list page with the add form
#[must_use]
pub fn index_page(items: &[(Item, UrgencyStatus)], error: Option<&str>) -> String {
    let mut rows = String::new();
    for (item, status) in items {
        // Infallible: writing into a String cannot fail
        let _ = write!(
            rows,
            r#"<tr class="{status}"><td>{name}</td><td>{expiry}</td><td>{status}</td>
<td><a href="/{id}/edit">Edit</a>
<form class="inline" method="post" action="/{id}/delete"><button type="submit">Delete</button></form></td></tr>
"#,
            status = status.as_str(),
            name = encode_text(&item.name),
            expiry = item.expiry_date,
            id = item.id,
        );
    }

    let table = if items.is_empty() {
        "<p>No items tracked yet.</p>\n".to_owned()
    } else {
        format!(
            "<table>\n<tr><th>Name</th><th>Expiry date</th><th>Status</th><th></th></tr>\n{rows}</table>\n"
        )
    };

    let body = format!(
        r#"<h1>Larder</h1>
{banner}{table}<h2>Add an item</h2>
<form method="post" action="/add">
<label>Name <input type="text" name="name" required></label>
<label>Expiry date <input type="date" name="expiry_date" required></label>
<button type="submit">Add</button>
</form>
"#,
        banner = error_banner(error),
    );

    layout("Items", &body)
}

/// Edit form pre-filled with the current item
#[must_use]
pub fn edit_page(item: &Item, error: Option<&str>) -> String {
    let body = format!(
        r#"<h1>Edit item</h1>
{banner}<form method="post" action="/{id}/edit">
<label>Name <input type="text" name="name" value="{name}" required></label>
<label>Expiry date <input type="date" name="expiry_date" value="{expiry}" required></label>
<button type="submit">Save</button>
<a href="/">Cancel</a>
</form>
"#,
        banner = error_banner(error),
        id = item.id,
        name = encode_double_quoted_attribute(&item.name),
        expiry = item.expiry_date,
    );

    layout("Edit item", &body)
}

/// Meal suggestion page; `suggestion` is `None` before the first request
#[must_use]
pub fn menu_page(suggestion: Option<&str>) -> String {
    let suggestion_block = suggestion.map_or_else(String::new, |text| {
        format!(
            "<h2>Suggestion</h2>\n<pre class=\"suggestion\">{}</pre>\n",
            encode_text(text)
        )
    });

    let body = format!(
        r#"<h1>Meal suggestions</h1>
<p>Ask for three meal ideas based on your unexpired ingredients.</p>
<form method="post" action="/menu">
<button type="submit">Suggest meals</button>
</form>
{suggestion_block}"#
    );

    layout("Meal suggestions", &body)
}

/// Error page used by the `AppError` response conversion
#[must_use]
pub fn error_page(status: StatusCode, message: &str) -> String {
    let body = format!(
        "<h1>{status}</h1>\n<p>{message}</p>\n<p><a href=\"/\">Back to items</a></p>\n",
        status = status,
        message = encode_text(message),
    );

    layout("Error", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_owned(),
            expiry_date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        }
    }

    #[test]
    fn test_index_page_escapes_item_names() {
        let items = vec![(item(1, "<script>alert(1)</script>"), UrgencyStatus::Safe)];
        let html = index_page(&items, None);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_index_page_uses_status_class() {
        let items = vec![(item(1, "Milk"), UrgencyStatus::Danger)];
        let html = index_page(&items, None);
        assert!(html.contains("tr class=\"danger\""));
        assert!(html.contains("2025-06-15"));
    }

    #[test]
    fn test_index_page_empty_state() {
        let html = index_page(&[], None);
        assert!(html.contains("No items tracked yet"));
    }

    #[test]
    fn test_edit_page_prefills_values() {
        let html = edit_page(&item(7, "Eggs"), None);
        assert!(html.contains("action=\"/7/edit\""));
        assert!(html.contains("value=\"Eggs\""));
        assert!(html.contains("value=\"2025-06-15\""));
    }

    #[test]
    fn test_menu_page_escapes_suggestion_markdown() {
        let html = menu_page(Some("**[Proposal 1: Omelette]**\n- Beat <eggs>"));
        assert!(html.contains("&lt;eggs&gt;"));
        assert!(html.contains("class=\"suggestion\""));
    }

    #[test]
    fn test_error_page_shows_status() {
        let html = error_page(StatusCode::NOT_FOUND, "The requested resource was not found");
        assert!(html.contains("404"));
        assert!(html.contains("was not found"));
    }
}
