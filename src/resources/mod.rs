// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One module per backend resource. Every function is a single fresh round trip; nothing is
//! cached and failures come back unchanged.

pub mod accounts;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod loans;
pub mod roles;
pub mod transactions;
pub mod users;
