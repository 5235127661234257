// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Category, CategoryType};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    pub icon: String,
    pub color_code: String,
}

pub fn list_for_user(
    client: &ApiClient,
    user_id: i64,
    include_deleted: bool,
) -> Result<Vec<Category>, ApiError> {
    let path = format!("/categories/user/{user_id}");
    if include_deleted {
        client.get_with_query(&path, &[("includeDeleted", "true".to_string())])
    } else {
        client.get(&path)
    }
}

pub fn create(client: &ApiClient, req: &CategoryRequest) -> Result<(), ApiError> {
    client.post_unit("/categories", req)
}

pub fn update(client: &ApiClient, id: i64, req: &CategoryRequest) -> Result<(), ApiError> {
    client.put_unit(&format!("/categories/{id}"), req)
}

/// Soft delete; the category stays listed with `deleted` set.
pub fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/categories/{id}"))
}

pub fn restore(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.put_empty(&format!("/categories/{id}/restore"))
}
