// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::{
    account_json, category_json, client_with, empty, not_found, ok, profile_json, status,
};
use finsync::client::Method;
use finsync::error::ApiError;
use finsync::forms::{
    AccountDraft, CategoryDraft, LoanPaymentDraft, PaymentKind, RoleDraft, UserDraft,
};
use finsync::models::{AccountType, LoginResponse, RolePermission, RoleType};
use finsync::pages::accounts::AccountsPage;
use finsync::pages::categories::CategoriesPage;
use finsync::pages::dashboard::DashboardPage;
use finsync::pages::loans::LoansPage;
use finsync::pages::profile::ProfilePage;
use finsync::pages::roles::RolesPage;
use finsync::pages::users::UsersPage;
use finsync::pages::{CancelToken, NOTICE_TTL, Outcome, ViewState};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;
use std::str::FromStr;
use std::time::{Duration, Instant};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn admin_login() -> LoginResponse {
    serde_json::from_value(json!({"token": "t", "userId": 7, "roles": ["ADMIN"]})).unwrap()
}

/// Accounts kept server-side so the page has to re-fetch to see changes.
fn accounts_backend() -> (finsync::client::ApiClient, common::Log) {
    let store: Rc<RefCell<Vec<Value>>> = Rc::new(RefCell::new(vec![
        account_json(1, "Everyday", "CHECKING", "500.00", true),
        account_json(2, "Rainy day", "SAVINGS", "1500.00", false),
    ]));
    client_with(Some("t"), move |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users/profile") => ok(profile_json(7)),
        (Method::Get, "/accounts/user/7") => ok(json!(
            store
                .borrow()
                .iter()
                .filter(|a| a["deleted"] != true)
                .cloned()
                .collect::<Vec<_>>()
        )),
        (Method::Get, "/accounts/user/7/all") => ok(json!(store.borrow().clone())),
        (Method::Get, "/users") => ok(json!([profile_json(7), profile_json(8)])),
        (Method::Get, "/admin/roles") => ok(json!([{"roleName": "ADMIN"}])),
        (Method::Post, "/accounts/create/7") => {
            let body = r.body.clone().unwrap();
            let id = store.borrow().len() as i64 + 1;
            let mut acct = account_json(
                id,
                body["name"].as_str().unwrap(),
                body["type"].as_str().unwrap(),
                body["balance"].as_str().unwrap(),
                true,
            );
            acct["deleted"] = json!(false);
            store.borrow_mut().push(acct);
            empty()
        }
        (Method::Delete, path) if path.starts_with("/accounts/") => {
            let id: i64 = path.trim_start_matches("/accounts/").parse().unwrap();
            for a in store.borrow_mut().iter_mut() {
                if a["accountId"] == id {
                    a["deleted"] = json!(true);
                }
            }
            empty()
        }
        (Method::Put, path) if path.starts_with("/accounts/") && !path.ends_with("/restore") => {
            let id: i64 = path.trim_start_matches("/accounts/").parse().unwrap();
            let body = r.body.clone().unwrap();
            for a in store.borrow_mut().iter_mut() {
                if a["accountId"] == id {
                    a["name"] = body["name"].clone();
                    a["balance"] = body["balance"].clone();
                }
            }
            empty()
        }
        (Method::Put, path) if path.ends_with("/restore") => {
            let id: i64 = path
                .trim_start_matches("/accounts/")
                .trim_end_matches("/restore")
                .parse()
                .unwrap();
            for a in store.borrow_mut().iter_mut() {
                if a["accountId"] == id {
                    a["deleted"] = json!(false);
                }
            }
            empty()
        }
        _ => not_found(),
    })
}

#[test]
fn dashboard_totals_track_refetched_accounts() {
    let (client, log) = accounts_backend();
    let mut page = DashboardPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    assert_eq!(page.total_balance(), dec("2000"));
    assert_eq!(page.active_count(), 1);
    assert_eq!(
        page.type_counts(),
        vec![
            (AccountType::Checking, 1),
            (AccountType::Savings, 1),
            (AccountType::Credit, 0),
            (AccountType::Investment, 0),
        ]
    );
    // Non-admin sessions never ask for users or roles.
    assert!(!log.calls().iter().any(|c| c.contains("/admin/roles")));
    assert_eq!(page.summary().user_count, None);

    let draft = AccountDraft {
        name: "Card".into(),
        account_type: Some(AccountType::Credit),
        balance: Some(dec("-250.00")),
        ..AccountDraft::default()
    };
    page.create_account(&draft).unwrap();
    assert_eq!(page.accounts().len(), 3);
    assert_eq!(page.total_balance(), dec("1750"));
    assert_eq!(page.type_counts()[2], (AccountType::Credit, 1));
    assert_eq!(page.state.success(), Some("Account created successfully."));

    page.delete_account(3).unwrap();
    assert_eq!(page.accounts().len(), 2);
    assert_eq!(page.total_balance(), dec("2000"));
}

#[test]
fn admin_dashboard_loads_users_and_roles() {
    let (client, log) = accounts_backend();
    client.session().store_login(&admin_login()).unwrap();
    let mut page = DashboardPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    let summary = page.summary();
    assert_eq!(summary.user_count, Some(2));
    assert_eq!(summary.role_count, Some(1));
    let calls = log.calls();
    assert_eq!(calls[0], "GET /users/profile");
    assert_eq!(calls[1], "GET /accounts/user/7");
}

#[test]
fn accounts_view_all_and_restore() {
    let (client, _) = accounts_backend();
    let mut page = AccountsPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    page.delete(2).unwrap();
    assert_eq!(page.accounts().len(), 1);
    assert!(page.all_accounts().is_none());

    page.show_all().unwrap();
    assert_eq!(page.all_accounts().unwrap().len(), 2);
    page.restore(2).unwrap();
    assert_eq!(page.accounts().len(), 2);
    // The full list is refreshed alongside the active one.
    assert!(page.all_accounts().unwrap().iter().all(|a| !a.deleted));
}

#[test]
fn account_update_is_reflected_once_after_refetch() {
    let (client, log) = accounts_backend();
    let mut page = AccountsPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    let mut draft = AccountDraft::from_existing(page.find(1).unwrap());
    draft.name = "Daily spending".into();
    draft.balance = Some(dec("640.25"));
    log.clear();
    page.save(&draft).unwrap();
    assert_eq!(log.calls(), vec!["PUT /accounts/1", "GET /accounts/user/7"]);
    assert_eq!(page.state.success(), Some("Account updated successfully."));
    assert_eq!(page.accounts().len(), 2);
    let renamed: Vec<_> = page.accounts().iter().filter(|a| a.id == 1).collect();
    assert_eq!(renamed.len(), 1);
    assert_eq!(renamed[0].name, "Daily spending");
    assert_eq!(renamed[0].balance, dec("640.25"));
    assert_eq!(page.find(2).unwrap().name, "Rainy day");
}

#[test]
fn user_create_update_delete_each_show_up_once() {
    let store = Rc::new(RefCell::new(vec![profile_json(7)]));
    let (client, log) = client_with(Some("t"), move |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users") => ok(json!(store.borrow().clone())),
        (Method::Post, "/users") => {
            let body = r.body.clone().unwrap();
            let mut user = profile_json(store.borrow().len() as i64 + 7);
            for key in ["username", "email", "firstName", "lastName"] {
                user[key] = body[key].clone();
            }
            store.borrow_mut().push(user);
            empty()
        }
        (Method::Put, path) if path.starts_with("/users/") => {
            let id: i64 = path.trim_start_matches("/users/").parse().unwrap();
            let body = r.body.clone().unwrap();
            for u in store.borrow_mut().iter_mut() {
                if u["id"] == id {
                    u["email"] = body["email"].clone();
                }
            }
            empty()
        }
        (Method::Delete, path) if path.starts_with("/users/") => {
            let id: i64 = path.trim_start_matches("/users/").parse().unwrap();
            store.borrow_mut().retain(|u| u["id"] != id);
            empty()
        }
        _ => not_found(),
    });
    let mut page = UsersPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    assert_eq!(page.users().len(), 1);

    let draft = UserDraft {
        username: "bo".into(),
        email: "bo@example.com".into(),
        first_name: "Bo".into(),
        last_name: "Lee".into(),
        ..UserDraft::default()
    };
    page.save(&draft).unwrap();
    assert_eq!(page.state.success(), Some("User created successfully."));
    let ids: Vec<i64> = page.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![7, 8]);
    assert_eq!(page.users()[1].username, "bo");

    let mut edit = UserDraft::from_existing(&page.users()[1]);
    edit.email = "bo.lee@example.com".into();
    log.clear();
    page.save(&edit).unwrap();
    assert_eq!(log.calls(), vec!["PUT /users/8", "GET /users"]);
    assert_eq!(page.state.success(), Some("User updated successfully."));
    assert_eq!(page.users().len(), 2);
    assert_eq!(page.users()[1].email, "bo.lee@example.com");
    assert_eq!(page.users()[0].email, "ana@example.com");

    page.delete(8).unwrap();
    let ids: Vec<i64> = page.users().iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![7]);
    assert_eq!(page.state.success(), Some("User deleted successfully."));
}

#[test]
fn profile_update_remounts_with_server_copy() {
    let profile = Rc::new(RefCell::new(profile_json(7)));
    let (client, log) = client_with(Some("t"), move |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users/profile") => ok(profile.borrow().clone()),
        (Method::Put, "/users/profile") => {
            let body = r.body.clone().unwrap();
            let mut p = profile.borrow_mut();
            p["firstName"] = body["firstName"].clone();
            p["timezone"] = body["timezone"].clone();
            empty()
        }
        _ => not_found(),
    });
    let mut page = ProfilePage::new(&client, CancelToken::new());
    page.mount().unwrap();
    let mut draft = page.draft().unwrap();
    draft.first_name = "Ana Maria".into();
    draft.timezone = "Europe/Lisbon".into();
    log.clear();
    page.update(&draft).unwrap();
    assert_eq!(log.calls(), vec!["PUT /users/profile", "GET /users/profile"]);
    assert_eq!(page.state.success(), Some("Profile updated successfully."));
    let user = page.user().unwrap();
    assert_eq!(user.id, 7);
    assert_eq!(user.first_name, "Ana Maria");
    assert_eq!(user.timezone.as_deref(), Some("Europe/Lisbon"));
    assert_eq!(user.last_name, "Silva");
}

#[test]
fn category_soft_delete_and_restore_leave_others_untouched() {
    let store = Rc::new(RefCell::new(vec![
        category_json(1, "Food", false),
        category_json(2, "Rent", false),
        category_json(3, "Fun", false),
    ]));
    let (client, log) = client_with(Some("t"), move |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users/profile") => ok(profile_json(7)),
        (Method::Get, "/categories/user/7") => {
            assert_eq!(r.query, vec![("includeDeleted".to_string(), "true".to_string())]);
            ok(json!(store.borrow().clone()))
        }
        (Method::Delete, "/categories/2") => {
            store.borrow_mut()[1]["deleted"] = json!(true);
            empty()
        }
        (Method::Put, "/categories/2/restore") => {
            store.borrow_mut()[1]["deleted"] = json!(false);
            empty()
        }
        _ => not_found(),
    });
    let mut page = CategoriesPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    let before = page.categories().to_vec();

    page.delete(2).unwrap();
    assert_eq!(page.active().len(), 2);
    assert_eq!(page.deleted()[0].id, 2);

    page.restore(2).unwrap();
    assert_eq!(page.categories(), before.as_slice());
    assert_eq!(
        log.calls()
            .iter()
            .filter(|c| c.starts_with("GET /categories"))
            .count(),
        3
    );
}

#[test]
fn new_category_is_sent_with_user_id_and_defaults() {
    let (client, log) = client_with(Some("t"), |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users/profile") => ok(profile_json(7)),
        (Method::Get, "/categories/user/7") => ok(json!([])),
        (Method::Post, "/categories") => empty(),
        _ => not_found(),
    });
    let mut page = CategoriesPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    let draft = CategoryDraft {
        name: "Travel".into(),
        ..CategoryDraft::default()
    };
    page.save(&draft).unwrap();
    let body = log.mutations()[0].body.clone().unwrap();
    assert_eq!(body["userId"], 7);
    assert_eq!(body["type"], "EXPENSE");
    assert_eq!(body["colorCode"], "#000000");
}

#[test]
fn cancelled_token_discards_late_response() {
    let token = CancelToken::new();
    let flag = token.clone();
    let (client, _) = client_with(Some("t"), move |r| {
        if r.path == "/accounts/user/7" {
            // Page was torn down while this request was in flight.
            flag.cancel();
            return ok(json!([account_json(1, "Late", "CHECKING", "1", true)]));
        }
        ok(profile_json(7))
    });
    let mut page = AccountsPage::new(&client, token.clone());
    assert_eq!(page.mount().unwrap(), Outcome::Discarded);
    assert!(page.accounts().is_empty());
    assert!(!page.state.loading);
    assert!(page.state.error.is_none());

    // Nothing is fetched once cancelled.
    assert_eq!(page.refresh().unwrap(), Outcome::Discarded);
}

#[test]
fn cancelled_failures_leave_no_banner() {
    let token = CancelToken::new();
    let flag = token.clone();
    let (client, _) = client_with(Some("t"), move |_| {
        flag.cancel();
        status(500, "down")
    });
    let mut page = ProfilePage::new(&client, token);
    assert_eq!(page.mount().unwrap(), Outcome::Discarded);
    assert!(page.state.error.is_none());
}

#[test]
fn success_notice_expires() {
    let mut state = ViewState::default();
    let t0 = Instant::now();
    state.set_success_at("Saved", t0);
    assert_eq!(state.success_at(t0 + Duration::from_secs(2)), Some("Saved"));
    assert_eq!(state.success_at(t0 + NOTICE_TTL), None);
}

#[test]
fn failed_load_sets_generic_banner() {
    let (client, _) = client_with(Some("t"), |r| {
        if r.path == "/users/profile" {
            ok(profile_json(7))
        } else {
            status(500, "stack trace")
        }
    });
    let mut page = LoansPage::new(&client, CancelToken::new());
    assert!(page.mount().is_err());
    assert_eq!(page.state.error.as_deref(), Some("Failed to load loans."));
    assert!(!page.state.loading);
    page.state.dismiss_error();
    assert!(page.state.error.is_none());
}

#[test]
fn loans_totals_and_payment_refetch() {
    let (client, log) = client_with(Some("t"), |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users/profile") => ok(profile_json(7)),
        (Method::Get, "/loans/user/7") => ok(json!([
            {"loanId": 1, "lenderName": "Bank", "amountBorrowed": "10000", "interestRate": "5",
             "monthlyPayment": "250", "outstandingBalance": "8000", "status": "ACTIVE"},
            {"loanId": 2, "lenderName": "Credit union", "amountBorrowed": "5000", "interestRate": "3.5",
             "monthlyPayment": "100", "outstandingBalance": "0", "status": "PAID_OFF"}
        ])),
        (Method::Post, "/loan-payments/1/pay") => ok(json!({
            "paymentAmount": "250", "extraPayment": "0", "principalPaid": "216.67",
            "interestPaid": "33.33", "remainingBalance": "7783.33"
        })),
        (Method::Get, "/loan-payments/1") => ok(json!([{"paymentAmount": "250"}])),
        _ => not_found(),
    });
    let mut page = LoansPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    let totals = page.totals();
    assert_eq!(totals.count, 2);
    assert_eq!(totals.borrowed, dec("15000"));
    assert_eq!(totals.outstanding, dec("8000"));

    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let draft = LoanPaymentDraft::for_loan(page.find(1).unwrap(), today);
    assert_eq!(draft.kind, PaymentKind::Monthly);
    log.clear();
    let payment = page.pay(1, &draft).unwrap();
    assert_eq!(payment.remaining_balance, dec("7783.33"));
    assert_eq!(log.calls(), vec!["POST /loan-payments/1/pay", "GET /loans/user/7"]);

    page.load_payments(1).unwrap();
    assert_eq!(page.payments(1).unwrap().len(), 1);
    assert!(page.payments(2).is_none());
}

#[test]
fn open_payment_history_follows_pay_and_delete() {
    let history = Rc::new(RefCell::new(Vec::<Value>::new()));
    let (client, log) = client_with(Some("t"), move |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users/profile") => ok(profile_json(7)),
        (Method::Get, "/loans/user/7") => ok(json!([
            {"loanId": 1, "lenderName": "Bank", "amountBorrowed": "10000", "interestRate": "5",
             "monthlyPayment": "250", "outstandingBalance": "8000", "status": "ACTIVE"}
        ])),
        (Method::Get, "/loan-payments/1") => ok(json!(history.borrow().clone())),
        (Method::Post, "/loan-payments/1/pay") => {
            let payment = json!({"paymentAmount": "250", "remainingBalance": "7783.33"});
            history.borrow_mut().push(payment.clone());
            ok(payment)
        }
        (Method::Delete, "/loans/1") => empty(),
        _ => not_found(),
    });
    let mut page = LoansPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    page.load_payments(1).unwrap();
    assert_eq!(page.payments(1).unwrap().len(), 0);

    let today = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let draft = LoanPaymentDraft::for_loan(page.find(1).unwrap(), today);
    log.clear();
    page.pay(1, &draft).unwrap();
    assert_eq!(
        log.calls(),
        vec![
            "POST /loan-payments/1/pay",
            "GET /loans/user/7",
            "GET /loan-payments/1"
        ]
    );
    assert_eq!(page.payments(1).unwrap().len(), 1);

    page.delete(1).unwrap();
    assert!(page.payments(1).is_none());
}

#[test]
fn role_upsert_reports_create_or_update() {
    let roles = Rc::new(RefCell::new(Vec::<Value>::new()));
    let (client, _) = client_with(Some("t"), move |r| match r.method {
        Method::Get => ok(json!(roles.borrow().clone())),
        Method::Post => {
            let body = r.body.clone().unwrap();
            roles
                .borrow_mut()
                .retain(|x| x["roleName"] != body["roleName"]);
            roles.borrow_mut().push(body.clone());
            ok(body)
        }
        Method::Delete => {
            roles.borrow_mut().clear();
            empty()
        }
        Method::Put => not_found(),
    });
    let mut page = RolesPage::new(&client, CancelToken::new());
    page.mount().unwrap();
    let mut draft = RoleDraft {
        role_name: Some(RoleType::Manager),
        ..RoleDraft::default()
    };
    draft.permissions.insert(RolePermission::Read);
    page.save(&draft).unwrap();
    assert_eq!(page.state.success(), Some("Role created successfully."));

    draft.permissions.insert(RolePermission::ManageUsers);
    page.save(&draft).unwrap();
    assert_eq!(page.state.success(), Some("Role updated successfully."));
    assert_eq!(page.roles().len(), 1);
    assert_eq!(page.find(RoleType::Manager).unwrap().permissions.len(), 2);

    page.delete(RoleType::Manager).unwrap();
    assert!(page.roles().is_empty());
}

#[test]
fn profile_delete_clears_session() {
    let (client, log) = client_with(Some("t"), |r| match (r.method, r.path.as_str()) {
        (Method::Get, "/users/profile") => ok(profile_json(7)),
        (Method::Delete, "/users/remove/7") => empty(),
        _ => not_found(),
    });
    let mut page = ProfilePage::new(&client, CancelToken::new());
    page.mount().unwrap();
    page.delete_account().unwrap();
    assert_eq!(log.calls().last().unwrap(), "DELETE /users/remove/7");
    assert_eq!(client.session().token().unwrap(), None);
    assert!(page.user().is_none());
    assert!(matches!(
        page.delete_account(),
        Err(ApiError::NotLoggedIn)
    ));
}

#[test]
fn unauthorized_mount_leaves_page_logged_out() {
    let (client, _) = client_with(Some("t"), |_| status(401, ""));
    let mut page = AccountsPage::new(&client, CancelToken::new());
    let err = page.mount().unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(client.session().token().unwrap(), None);
    assert!(page.state.error.as_deref().unwrap().contains("login"));
}
