// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Role, RolePermission, RoleType};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    pub role_name: RoleType,
    pub description: Option<String>,
    pub permissions: BTreeSet<RolePermission>,
}

pub fn list(client: &ApiClient) -> Result<Vec<Role>, ApiError> {
    client.get("/admin/roles")
}

/// Creates the role, or replaces description and permissions when it already exists.
pub fn upsert(client: &ApiClient, req: &RoleRequest) -> Result<Role, ApiError> {
    client.post("/admin/roles", req)
}

pub fn delete(client: &ApiClient, role: RoleType) -> Result<(), ApiError> {
    client.delete(&format!("/admin/roles/{}", role.as_str()))
}
