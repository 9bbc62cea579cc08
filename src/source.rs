// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::Result;
use crate::finance::aggregate::ExpenseWindow;
use crate::models::{Expense, Goal, Investment, InvestmentType};

/// Where dashboard records come from: the local database or the remote API.
pub trait RecordSource {
    fn expenses(&self, window: &ExpenseWindow) -> Result<Vec<Expense>>;
    fn goals(&self) -> Result<Vec<Goal>>;
    fn investments(&self) -> Result<Vec<Investment>>;
    fn investment_types(&self) -> Result<Vec<InvestmentType>>;
}
