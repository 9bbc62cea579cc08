// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::finance::aggregate::{
    Bucket, ExpenseWindow, TimeBucket, by_category, by_time_bucket, investments_by_type,
};
use crate::finance::goals::progress;
use crate::models::{Expense, Goal, Investment, InvestmentType};
use crate::source::RecordSource;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub const RECENT_LIMIT: usize = 5;

/// Last records successfully fetched for the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    pub expenses: Vec<Expense>,
    pub goals: Vec<Goal>,
    pub investments: Vec<Investment>,
    pub investment_types: Vec<InvestmentType>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalRow {
    pub goal_name: String,
    pub deadline: chrono::NaiveDate,
    pub status: String,
    pub progress: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub by_category: Vec<Bucket<String>>,
    pub over_time: Vec<Bucket<TimeBucket>>,
    pub by_investment_type: Vec<Bucket<String>>,
    pub recent_expenses: Vec<Expense>,
    pub recent_investments: Vec<Investment>,
    pub goals: Vec<GoalRow>,
}

impl DashboardState {
    /// Pulls each record kind on its own. A failed fetch keeps what was there
    /// before and adds a notice to the returned list.
    pub fn refresh(&mut self, source: &dyn RecordSource, window: &ExpenseWindow) -> Vec<String> {
        let mut failures = Vec::new();
        match source.expenses(window) {
            Ok(v) => self.expenses = v,
            Err(e) => {
                tracing::warn!(error = %e, "expense refresh failed; keeping previous data");
                failures.push("Failed to load expenses".to_string());
            }
        }
        match source.goals() {
            Ok(v) => self.goals = v,
            Err(e) => {
                tracing::warn!(error = %e, "goal refresh failed; keeping previous data");
                failures.push("Failed to load goals".to_string());
            }
        }
        match source.investments() {
            Ok(v) => self.investments = v,
            Err(e) => {
                tracing::warn!(error = %e, "investment refresh failed; keeping previous data");
                failures.push("Failed to load investments".to_string());
            }
        }
        match source.investment_types() {
            Ok(v) => self.investment_types = v,
            Err(e) => {
                tracing::warn!(error = %e, "investment type refresh failed; keeping previous data");
                failures.push("Failed to load investments by category".to_string());
            }
        }
        failures
    }

    pub fn view(&self, window: &ExpenseWindow) -> DashboardView {
        DashboardView {
            by_category: by_category(&self.expenses),
            over_time: by_time_bucket(&self.expenses, window),
            by_investment_type: investments_by_type(&self.investment_types, &self.investments),
            recent_expenses: self.expenses.iter().take(RECENT_LIMIT).cloned().collect(),
            recent_investments: self.investments.iter().take(RECENT_LIMIT).cloned().collect(),
            goals: self
                .goals
                .iter()
                .take(RECENT_LIMIT)
                .map(|g| GoalRow {
                    goal_name: g.goal_name.clone(),
                    deadline: g.deadline,
                    status: g.status.clone(),
                    progress: progress(g.current_amount, g.target_amount),
                })
                .collect(),
        }
    }
}
