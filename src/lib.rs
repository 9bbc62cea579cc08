// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod error;
pub mod finance;
pub mod models;
pub mod remote;
pub mod source;
pub mod store;
pub mod utils;

pub use error::FinanceError;
