// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::LoginResponse;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Username or email; the backend accepts either.
    pub user_name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub currency: String,
    pub timezone: String,
    pub preferred_language: String,
}

pub fn login(client: &ApiClient, req: &LoginRequest) -> Result<LoginResponse, ApiError> {
    client.post("/auth/login", req)
}

pub fn register(client: &ApiClient, req: &RegisterRequest) -> Result<(), ApiError> {
    client.post_unit("/auth/register", req)
}
