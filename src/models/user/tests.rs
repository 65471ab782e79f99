use super::*;
use serde_json::json;

fn sample_user() -> User {
    User::new(
        1,
        "jules".to_string(),
        "jules@example.com".to_string(),
        true,
        vec![
            Item::new(1, "Super-Widget".to_string(), None, 1),
            Item::new(2, "Mega-Gadget".to_string(), None, 1),
        ],
    )
}

#[test]
fn test_new_sets_fields() {
    let user = sample_user();

    assert_eq!(user.get_id(), 1);
    assert_eq!(user.get_username(), "jules");
    assert_eq!(user.get_email(), "jules@example.com");
    assert!(user.is_active());
    assert_eq!(user.get_items().len(), 2);
}

#[test]
fn test_serializes_with_nested_items() {
    let value = serde_json::to_value(sample_user()).unwrap();

    assert_eq!(value["id"], 1);
    assert_eq!(value["username"], "jules");
    assert_eq!(value["email"], "jules@example.com");
    assert_eq!(value["is_active"], true);
    assert_eq!(value["items"][0]["name"], "Super-Widget");
    assert_eq!(value["items"][1]["id"], 2);
}

#[test]
fn test_field_order_matches_api_shape() {
    let serialized = serde_json::to_string(&sample_user()).unwrap();

    let positions: Vec<usize> = ["\"id\"", "\"email\"", "\"username\"", "\"is_active\"", "\"items\""]
        .iter()
        .map(|key| serialized.find(key).unwrap())
        .collect();

    assert!(positions.windows(2).all(|w| w[0] < w[1]), "unexpected field order: {}", serialized);
}

#[test]
fn test_deserialize_applies_defaults() {
    let user: User = serde_json::from_value(json!({
        "id": 5,
        "username": "sam",
        "email": "sam@example.com"
    })).unwrap();

    assert!(user.is_active());
    assert!(user.get_items().is_empty());
}

#[test]
fn test_deserialize_respects_inactive_flag() {
    let user: User = serde_json::from_value(json!({
        "id": 6,
        "username": "old",
        "email": "old@example.com",
        "is_active": false
    })).unwrap();

    assert!(!user.is_active());
}
