// ABOUTME: Integration tests for the inventory service over a real SQLite store
// ABOUTME: Covers validated CRUD, listing order, urgency classification and id lifecycle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, NaiveDate};
use larder::database::Database;
use larder::errors::ErrorCode;
use larder::inventory::InventoryService;
use larder::models::UrgencyStatus;
use std::sync::Arc;
use tempfile::TempDir;

async fn test_service() -> (TempDir, InventoryService) {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite:{}/larder.db", dir.path().display());
    let db = Arc::new(Database::new(&url).await.unwrap());
    (dir, InventoryService::new(db))
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
}

#[tokio::test]
async fn test_create_then_list_includes_item() {
    let (_dir, service) = test_service().await;

    let created = service.create("Milk", "2025-06-20").await.unwrap();
    assert!(created.id > 0);

    let listed = service.list_with_status(today()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].0.name, "Milk");
    assert_eq!(
        listed[0].0.expiry_date,
        NaiveDate::from_ymd_opt(2025, 6, 20).unwrap()
    );
}

#[tokio::test]
async fn test_listing_sorted_by_expiry_regardless_of_insertion_order() {
    let (_dir, service) = test_service().await;

    service.create("Rice", "2025-07-15").await.unwrap();
    service.create("Milk", "2025-06-14").await.unwrap();
    service.create("Eggs", "2025-06-17").await.unwrap();

    let listed = service.list_with_status(today()).await.unwrap();
    let names: Vec<&str> = listed.iter().map(|(item, _)| item.name.as_str()).collect();
    assert_eq!(names, ["Milk", "Eggs", "Rice"]);
}

#[tokio::test]
async fn test_urgency_scenario_milk_eggs_rice() {
    let (_dir, service) = test_service().await;
    let today = today();

    // Milk expired yesterday, Eggs in two days, Rice in thirty
    let milk = (today - Duration::days(1)).to_string();
    let eggs = (today + Duration::days(2)).to_string();
    let rice = (today + Duration::days(30)).to_string();
    service.create("Milk", &milk).await.unwrap();
    service.create("Eggs", &eggs).await.unwrap();
    service.create("Rice", &rice).await.unwrap();

    let listed = service.list_with_status(today).await.unwrap();
    let summary: Vec<(&str, UrgencyStatus)> = listed
        .iter()
        .map(|(item, status)| (item.name.as_str(), *status))
        .collect();
    assert_eq!(
        summary,
        [
            ("Milk", UrgencyStatus::Danger),
            ("Eggs", UrgencyStatus::Warning),
            ("Rice", UrgencyStatus::Safe),
        ]
    );
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let (_dir, service) = test_service().await;
    let error = service.create("   ", "2025-06-20").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);

    let listed = service.list_with_status(today()).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn test_create_rejects_unparseable_date() {
    let (_dir, service) = test_service().await;
    let error = service.create("Milk", "20-06-2025").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_update_persists_new_values() {
    let (_dir, service) = test_service().await;
    let created = service.create("Milk", "2025-06-20").await.unwrap();

    service
        .update(created.id, "Oat milk", "2025-06-25")
        .await
        .unwrap();

    let fetched = service.get(created.id).await.unwrap();
    assert_eq!(fetched.name, "Oat milk");
    assert_eq!(
        fetched.expiry_date,
        NaiveDate::from_ymd_opt(2025, 6, 25).unwrap()
    );
}

#[tokio::test]
async fn test_update_missing_id_is_not_found() {
    let (_dir, service) = test_service().await;
    let error = service.update(42, "Milk", "2025-06-20").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_update_deleted_id_is_not_found() {
    let (_dir, service) = test_service().await;
    let created = service.create("Milk", "2025-06-20").await.unwrap();
    service.delete(created.id).await.unwrap();

    let error = service
        .update(created.id, "Milk", "2025-06-21")
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_second_delete_fails_not_found() {
    let (_dir, service) = test_service().await;
    let created = service.create("Milk", "2025-06-20").await.unwrap();

    service.delete(created.id).await.unwrap();
    let error = service.delete(created.id).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[tokio::test]
async fn test_ids_are_not_reused_after_deletion() {
    let (_dir, service) = test_service().await;
    let first = service.create("Milk", "2025-06-20").await.unwrap();
    service.delete(first.id).await.unwrap();

    let second = service.create("Eggs", "2025-06-21").await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_get_missing_id_is_not_found() {
    let (_dir, service) = test_service().await;
    let error = service.get(7).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}
