use crate::*;
use crate::models::{Item, User};
use crate::repo::{InMemoryRepository, Page, RepoHandle, Repository};
use crate::store::{Fixture, UserRecord};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Repository handle over the built-in seed data
pub fn seeded_repo() -> RepoHandle {
    Arc::new(InMemoryRepository::seeded())
}

/// Repository whose every call fails, for exercising the 500 path
pub struct FailingRepository;

impl Repository for FailingRepository {
    fn list_users(&self, _page: Page) -> anyhow::Result<Vec<User>> {
        Err(anyhow::anyhow!("storage offline"))
    }

    fn get_user(&self, _user_id: i64) -> anyhow::Result<Option<User>> {
        Err(anyhow::anyhow!("storage offline"))
    }

    fn list_items(&self, _page: Page) -> anyhow::Result<Vec<Item>> {
        Err(anyhow::anyhow!("storage offline"))
    }

    fn get_items_for_user(&self, _user_id: i64) -> anyhow::Result<Vec<Item>> {
        Err(anyhow::anyhow!("storage offline"))
    }
}

pub fn failing_repo() -> RepoHandle {
    Arc::new(FailingRepository)
}

/// Sends a GET request to the app and returns the status and parsed JSON body
pub async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

/// Generates strings with arbitrary printable and control characters
pub fn arb_messy_string() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9._:/-]{0,24}",
        "\\PC{0,16}",
        ".{0,16}",
    ]
}

/// Generates a fixture that satisfies the store invariants
///
/// User ids are unique and arbitrary (so insertion order differs from id
/// order); item ids are unique and every item is owned by a generated user.
pub fn arb_fixture() -> impl Strategy<Value = Fixture> {
    prop::collection::hash_set(any::<i64>(), 0..12)
        .prop_map(|ids| ids.into_iter().collect::<Vec<i64>>())
        .prop_flat_map(|user_ids| {
            let owners = if user_ids.is_empty() {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec(
                    (prop::sample::select(user_ids.clone()), prop::option::of("[a-z ]{0,12}")),
                    0..20,
                ).boxed()
            };
            (Just(user_ids), owners)
        })
        .prop_map(|(user_ids, owners)| {
            let users = user_ids
                .iter()
                .map(|&id| UserRecord {
                    id,
                    username: format!("user{}", id),
                    email: format!("user{}@example.com", id),
                    is_active: id % 2 == 0,
                })
                .collect();
            let items = owners
                .into_iter()
                .enumerate()
                .map(|(index, (owner_id, description))| {
                    Item::new(index as i64 + 1, format!("item-{}", index + 1), description, owner_id)
                })
                .collect();
            Fixture { users, items }
        })
}

/// Tests the seeded app answers the health check
#[tokio::test]
async fn test_seeded_app_health() {
    let (status, body) = get_json(create_app(seeded_repo()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

proptest! {
    /// Generated fixtures always satisfy the store invariants
    #[test]
    fn prop_arb_fixture_is_valid(fixture in arb_fixture()) {
        prop_assert!(fixture.validate().is_ok());
    }
}
