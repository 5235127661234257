// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;
use serde::Serialize;

/// Self-service profile edit (`PUT /users/profile`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub currency: String,
    pub timezone: String,
    pub preferred_language: String,
}

/// Admin-side create/update of another user. Absent fields are left alone on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

pub fn profile(client: &ApiClient) -> Result<User, ApiError> {
    client.get("/users/profile")
}

pub fn update_profile(client: &ApiClient, req: &ProfileUpdate) -> Result<(), ApiError> {
    client.put_unit("/users/profile", req)
}

/// Delete the caller's own account.
pub fn remove(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/users/remove/{id}"))
}

pub fn list(client: &ApiClient) -> Result<Vec<User>, ApiError> {
    client.get("/users")
}

pub fn get(client: &ApiClient, id: i64) -> Result<User, ApiError> {
    client.get(&format!("/users/{id}"))
}

pub fn create(client: &ApiClient, req: &UserRequest) -> Result<(), ApiError> {
    client.post_unit("/users", req)
}

pub fn update(client: &ApiClient, id: i64, req: &UserRequest) -> Result<(), ApiError> {
    client.put_unit(&format!("/users/{id}"), req)
}

pub fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/users/{id}"))
}
