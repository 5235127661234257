// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use finsync::client::{ApiClient, ApiRequest, Method, RawResponse, Transport};
use finsync::error::ApiError;
use finsync::session::Session;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

/// Every request the fake backend saw, in order.
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<ApiRequest>>>);

impl Log {
    pub fn all(&self) -> Vec<ApiRequest> {
        self.0.borrow().clone()
    }

    pub fn calls(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .map(|r| format!("{} {}", r.method.as_str(), r.path))
            .collect()
    }

    pub fn mutations(&self) -> Vec<ApiRequest> {
        self.0
            .borrow()
            .iter()
            .filter(|r| r.method != Method::Get)
            .cloned()
            .collect()
    }

    pub fn last(&self) -> ApiRequest {
        self.0.borrow().last().cloned().expect("no requests")
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

pub struct FakeBackend<F> {
    handler: RefCell<F>,
    log: Log,
}

impl<F> Transport for FakeBackend<F>
where
    F: FnMut(&ApiRequest) -> RawResponse,
{
    fn execute(&self, request: &ApiRequest) -> Result<RawResponse, ApiError> {
        self.log.0.borrow_mut().push(request.clone());
        Ok((self.handler.borrow_mut())(request))
    }
}

pub fn ok(body: Value) -> RawResponse {
    RawResponse {
        status: 200,
        body: body.to_string(),
    }
}

pub fn empty() -> RawResponse {
    RawResponse {
        status: 200,
        body: String::new(),
    }
}

pub fn status(code: u16, body: &str) -> RawResponse {
    RawResponse {
        status: code,
        body: body.to_string(),
    }
}

pub fn not_found() -> RawResponse {
    status(404, r#"{"error":"Not Found","message":"no such route"}"#)
}

/// Client over an in-memory session that already holds `token`.
pub fn client_with<F>(token: Option<&str>, handler: F) -> (ApiClient, Log)
where
    F: FnMut(&ApiRequest) -> RawResponse + 'static,
{
    let session = Session::open_in_memory().unwrap();
    if let Some(t) = token {
        session.set_token(t).unwrap();
    }
    let log = Log::default();
    let backend = FakeBackend {
        handler: RefCell::new(handler),
        log: log.clone(),
    };
    (ApiClient::new(Box::new(backend), session), log)
}

pub fn profile_json(id: i64) -> Value {
    json!({
        "id": id,
        "username": "ana",
        "email": "ana@example.com",
        "firstName": "Ana",
        "lastName": "Silva",
        "currency": "USD"
    })
}

pub fn account_json(id: i64, name: &str, kind: &str, balance: &str, active: bool) -> Value {
    json!({
        "accountId": id,
        "name": name,
        "accountType": kind,
        "balance": balance,
        "isActive": active,
        "currency": "USD"
    })
}

/// Same field set as the per-user and per-account listing rows, which carry no id.
pub fn tx_json(date: &str, kind: &str, amount: &str, desc: &str) -> Value {
    json!({
        "date": date,
        "transactionType": kind,
        "amount": amount,
        "accountName": "Everyday",
        "category": "General",
        "description": desc,
        "paymentMethod": "CASH",
        "status": "COMPLETED",
        "nextDueDate": null,
        "toAccountId": null,
        "dateCreated": date
    })
}

pub fn category_json(id: i64, name: &str, deleted: bool) -> Value {
    json!({
        "categoryId": id,
        "name": name,
        "type": "EXPENSE",
        "icon": "tag",
        "colorCode": "#112233",
        "deleted": deleted
    })
}

pub fn budget_json(id: i64, category_id: i64, category: &str, start: &str, end: &str) -> Value {
    json!({
        "budgetId": id,
        "description": format!("{category} budget"),
        "amountLimit": "300",
        "startDate": start,
        "endDate": end,
        "budgetType": "FLEXIBLE",
        "rolloverAmount": "0",
        "categoryId": category_id,
        "category": category,
        "spent": "120",
        "percentageUsed": 40
    })
}
