// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Database layer (MySQL).

pub mod mysql;
pub mod schema;

pub use mysql::MysqlDb;
