// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{client_with, empty, ok, profile_json, status};
use finsync::client::{Method, server_message};
use finsync::error::ApiError;
use finsync::models::User;
use finsync::resources::{budgets, categories, roles, users};
use finsync::models::RoleType;
use serde_json::json;

#[test]
fn bearer_token_is_attached_from_session() {
    let (client, log) = client_with(Some("tok-123"), |_| ok(profile_json(7)));
    let user: User = users::profile(&client).unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.full_name(), "Ana Silva");
    let req = log.last();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.path, "/users/profile");
    assert_eq!(req.bearer.as_deref(), Some("tok-123"));
}

#[test]
fn no_bearer_without_session() {
    let (client, log) = client_with(None, |_| ok(json!([])));
    let _: Vec<User> = users::list(&client).unwrap();
    assert_eq!(log.last().bearer, None);
}

#[test]
fn unauthorized_clears_session_and_later_calls_carry_no_token() {
    let mut first = true;
    let (client, log) = client_with(Some("stale"), move |_| {
        if first {
            first = false;
            status(401, "")
        } else {
            ok(json!([]))
        }
    });
    let err = users::list(&client).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 401 }));
    assert!(err.is_unauthorized());
    assert_eq!(client.session().token().unwrap(), None);

    let _ = users::list(&client).unwrap();
    assert_eq!(log.last().bearer, None);
}

#[test]
fn forbidden_is_treated_like_unauthorized() {
    let (client, _) = client_with(Some("t"), |_| status(403, "Forbidden"));
    let err = roles::list(&client).unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized { status: 403 }));
    assert_eq!(client.session().token().unwrap(), None);
}

#[test]
fn validation_error_surfaces_server_message() {
    let (client, _) = client_with(Some("t"), |_| {
        status(400, r#"{"error":"Bad Request","message":"Category name already exists"}"#)
    });
    let err = categories::delete(&client, 3).unwrap_err();
    assert_eq!(err.banner("Failed to delete category."), "Category name already exists");
    // Session survives a plain validation failure.
    assert_eq!(client.session().token().unwrap().as_deref(), Some("t"));
}

#[test]
fn validation_without_message_falls_back_to_generic_banner() {
    let (client, _) = client_with(Some("t"), |_| status(422, ""));
    let err = categories::delete(&client, 3).unwrap_err();
    assert!(matches!(err, ApiError::Validation { status: 422, message: None }));
    assert_eq!(err.banner("Failed to delete category."), "Failed to delete category.");
}

#[test]
fn server_errors_are_unexpected() {
    let (client, _) = client_with(Some("t"), |_| status(500, "boom"));
    let err = users::list(&client).unwrap_err();
    assert!(matches!(err, ApiError::Unexpected { status: 500, .. }));
    assert_eq!(err.banner("Failed to load users."), "Failed to load users.");
}

#[test]
fn undecodable_body_is_a_decode_error() {
    let (client, _) = client_with(Some("t"), |_| ok(json!({"unexpected": true})));
    let err = users::list(&client).unwrap_err();
    assert!(matches!(err, ApiError::Decode { ref path, .. } if path == "/users"));
}

#[test]
fn unit_calls_accept_empty_bodies() {
    let (client, log) = client_with(Some("t"), |_| empty());
    categories::restore(&client, 9).unwrap();
    let req = log.last();
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.path, "/categories/9/restore");
    assert_eq!(req.body, None);
}

#[test]
fn query_parameters_are_passed_separately() {
    let (client, log) = client_with(Some("t"), |_| {
        ok(json!({"totalBudgetLimit": "0", "totalRolloverAmount": "0", "budgets": []}))
    });
    let report = budgets::report(&client, 7).unwrap();
    assert!(report.budgets.is_empty());
    let req = log.last();
    assert_eq!(req.path, "/budgets/report");
    assert_eq!(req.query, vec![("userId".to_string(), "7".to_string())]);
}

#[test]
fn role_delete_uses_wire_name() {
    let (client, log) = client_with(Some("t"), |_| empty());
    roles::delete(&client, RoleType::CustomerService).unwrap();
    assert_eq!(log.calls(), vec!["DELETE /admin/roles/CUSTOMER_SERVICE"]);
}

#[test]
fn server_message_shapes() {
    assert_eq!(
        server_message(r#"{"message":"nope"}"#).as_deref(),
        Some("nope")
    );
    assert_eq!(server_message(r#"{"error":"Bad"}"#).as_deref(), Some("Bad"));
    assert_eq!(server_message(r#""quoted""#).as_deref(), Some("quoted"));
    assert_eq!(
        server_message("Username is already taken").as_deref(),
        Some("Username is already taken")
    );
    assert_eq!(server_message("   "), None);
    assert_eq!(server_message("[1,2]"), None);
}
