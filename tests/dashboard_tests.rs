// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Month, NaiveDate};
use finsight::FinanceError;
use finsight::commands::dashboard::{load_snapshot, save_snapshot};
use finsight::dashboard::DashboardState;
use finsight::finance::aggregate::{ExpenseWindow, MonthSelection, TimeBucket};
use finsight::models::{Expense, Goal, Investment, InvestmentType};
use finsight::source::RecordSource;
use finsight::{db, store};
use rust_decimal::Decimal;
use std::cell::Cell;

fn expense(y: i32, m: u32, day: u32, amount: i64, category: &str) -> Expense {
    Expense {
        id: format!("{}-{}-{}", y, m, day),
        date: NaiveDate::from_ymd_opt(y, m, day).unwrap(),
        amount: Decimal::from(amount),
        category: category.into(),
        description: None,
    }
}

/// Serves fixed records; goals fail once `fail_goals` is set.
struct FakeSource {
    expenses: Vec<Expense>,
    goals: Vec<Goal>,
    fail_goals: Cell<bool>,
    fail_all: bool,
}

impl FakeSource {
    fn down() -> Result<(), FinanceError> {
        Err(FinanceError::UpstreamUnavailable("connection refused".into()))
    }
}

impl RecordSource for FakeSource {
    fn expenses(&self, window: &ExpenseWindow) -> finsight::error::Result<Vec<Expense>> {
        if self.fail_all {
            Self::down()?;
        }
        Ok(self
            .expenses
            .iter()
            .filter(|e| window.contains(e))
            .cloned()
            .collect())
    }

    fn goals(&self) -> finsight::error::Result<Vec<Goal>> {
        if self.fail_all || self.fail_goals.get() {
            Self::down()?;
        }
        Ok(self.goals.clone())
    }

    fn investments(&self) -> finsight::error::Result<Vec<Investment>> {
        if self.fail_all {
            Self::down()?;
        }
        Ok(Vec::new())
    }

    fn investment_types(&self) -> finsight::error::Result<Vec<InvestmentType>> {
        if self.fail_all {
            Self::down()?;
        }
        Ok(vec![InvestmentType {
            id: "1".into(),
            name: "Stocks".into(),
        }])
    }
}

fn goal(name: &str, current: i64, target: i64) -> Goal {
    Goal {
        id: name.into(),
        goal_name: name.into(),
        target_amount: Decimal::from(target),
        current_amount: Decimal::from(current),
        deadline: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        status: "Pending".into(),
    }
}

fn source() -> FakeSource {
    FakeSource {
        expenses: vec![
            expense(2024, 2, 3, 30, "Food"),
            expense(2024, 2, 3, 20, "Fuel"),
            expense(2024, 5, 9, 15, "Food"),
        ],
        goals: vec![goal("Bike", 300, 200), goal("Trip", 50, 200)],
        fail_goals: Cell::new(false),
        fail_all: false,
    }
}

#[test]
fn view_builds_every_chart_series() {
    let src = source();
    let window = ExpenseWindow {
        year: 2024,
        month: MonthSelection::All,
    };
    let mut state = DashboardState::default();
    assert!(state.refresh(&src, &window).is_empty());

    let view = state.view(&window);
    assert_eq!(view.by_category.len(), 2);
    assert_eq!(view.by_category[0].amount, Decimal::from(45));
    assert_eq!(view.over_time[0].name, TimeBucket::Month("Feb"));
    assert_eq!(view.over_time[1].amount, Decimal::from(15));
    assert_eq!(view.by_investment_type.len(), 1);
    assert!(view.by_investment_type[0].amount.is_zero());
    assert_eq!(view.goals[0].progress, Decimal::from(100));
    assert_eq!(view.goals[1].progress, Decimal::from(25));
}

#[test]
fn failed_fetch_keeps_previous_data() {
    let src = source();
    let feb = ExpenseWindow {
        year: 2024,
        month: MonthSelection::Month(Month::February),
    };
    let mut state = DashboardState::default();
    state.refresh(&src, &feb);
    assert_eq!(state.goals.len(), 2);

    src.fail_goals.set(true);
    let failures = state.refresh(&src, &feb);
    assert_eq!(failures, ["Failed to load goals"]);
    assert_eq!(state.goals.len(), 2);
    assert_eq!(state.expenses.len(), 2);
}

#[test]
fn total_outage_leaves_state_untouched() {
    let mut src = source();
    let window = ExpenseWindow {
        year: 2024,
        month: MonthSelection::All,
    };
    let mut state = DashboardState::default();
    state.refresh(&src, &window);
    let before = state.clone();

    src.fail_all = true;
    let failures = state.refresh(&src, &window);
    assert_eq!(failures.len(), 4);
    assert_eq!(state, before);
}

#[test]
fn recent_lists_are_capped_at_five() {
    let mut src = source();
    src.expenses = (1..=8).map(|d| expense(2024, 1, d, 1, "Misc")).collect();
    let window = ExpenseWindow {
        year: 2024,
        month: MonthSelection::All,
    };
    let mut state = DashboardState::default();
    state.refresh(&src, &window);
    assert_eq!(state.view(&window).recent_expenses.len(), 5);
}

#[test]
fn snapshot_survives_a_round_trip_through_settings() {
    let conn = db::open_in_memory().unwrap();
    assert_eq!(load_snapshot(&conn).unwrap(), DashboardState::default());

    let src = source();
    let window = ExpenseWindow {
        year: 2024,
        month: MonthSelection::All,
    };
    let mut state = DashboardState::default();
    state.refresh(&src, &window);
    save_snapshot(&conn, &state).unwrap();
    assert_eq!(load_snapshot(&conn).unwrap(), state);
}

#[test]
fn local_store_feeds_the_dashboard() {
    let conn = db::open_in_memory().unwrap();
    store::add_investment_type(&conn, "Stocks").unwrap();
    store::add_expense(&conn, &expense(2024, 7, 4, 12, "Food")).unwrap();
    store::add_expense(&conn, &expense(2024, 7, 4, 8, "Food")).unwrap();
    let window = ExpenseWindow {
        year: 2024,
        month: MonthSelection::Month(Month::July),
    };
    let mut state = DashboardState::default();
    let failures = state.refresh(&store::LocalStore::new(&conn), &window);
    assert!(failures.is_empty());
    let view = state.view(&window);
    assert_eq!(view.over_time.len(), 1);
    assert_eq!(view.over_time[0].name, TimeBucket::Day(4));
    assert_eq!(view.over_time[0].amount, Decimal::from(20));
}
