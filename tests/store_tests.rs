// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Month, NaiveDate};
use finsight::finance::aggregate::{ExpenseWindow, MonthSelection};
use finsight::models::{Expense, Goal, Investment};
use finsight::source::RecordSource;
use finsight::{db, store};
use rust_decimal::Decimal;
use std::str::FromStr;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn expense(day: &str, amount: &str, category: &str) -> Expense {
    Expense {
        id: String::new(),
        date: date(day),
        amount: d(amount),
        category: category.into(),
        description: None,
    }
}

#[test]
fn expenses_round_trip_and_filter_by_window() {
    let conn = db::open_in_memory().unwrap();
    store::add_expense(&conn, &expense("2024-03-02", "10.10", "Food")).unwrap();
    store::add_expense(&conn, &expense("2024-04-15", "20.00", "Rent")).unwrap();
    store::add_expense(&conn, &expense("2023-03-02", "5.00", "Food")).unwrap();

    let all = store::list_expenses(&conn, None).unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].date, date("2024-04-15"));
    // Decimal text survives storage exactly
    assert_eq!(all[1].amount.to_string(), "10.10");

    let year = ExpenseWindow {
        year: 2024,
        month: MonthSelection::All,
    };
    assert_eq!(store::list_expenses(&conn, Some(&year)).unwrap().len(), 2);

    let march = ExpenseWindow {
        year: 2024,
        month: MonthSelection::Month(Month::March),
    };
    let only = store::list_expenses(&conn, Some(&march)).unwrap();
    assert_eq!(only.len(), 1);
    assert_eq!(only[0].category, "Food");
}

#[test]
fn expense_update_and_delete() {
    let conn = db::open_in_memory().unwrap();
    let id = store::add_expense(&conn, &expense("2024-03-02", "10", "Food")).unwrap();

    let mut e = store::get_expense(&conn, &id).unwrap();
    e.amount = d("12.75");
    e.description = Some("lunch".into());
    store::update_expense(&conn, &e).unwrap();
    let again = store::get_expense(&conn, &id).unwrap();
    assert_eq!(again.amount, d("12.75"));
    assert_eq!(again.description.as_deref(), Some("lunch"));

    store::delete_expense(&conn, &id).unwrap();
    assert!(store::get_expense(&conn, &id).is_err());
    assert!(store::delete_expense(&conn, &id).is_err());
    assert!(store::delete_expense(&conn, "not-a-number").is_err());
}

#[test]
fn investment_types_are_unique_and_ordered() {
    let conn = db::open_in_memory().unwrap();
    store::add_investment_type(&conn, " Stocks ").unwrap();
    store::add_investment_type(&conn, "Gold").unwrap();
    assert!(store::add_investment_type(&conn, "Stocks").is_err());
    assert!(store::add_investment_type(&conn, "   ").is_err());

    let names: Vec<String> = store::list_investment_types(&conn)
        .unwrap()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(names, ["Stocks", "Gold"]);

    store::delete_investment_type(&conn, "Stocks").unwrap();
    assert_eq!(store::list_investment_types(&conn).unwrap().len(), 1);
}

#[test]
fn investments_and_goals_round_trip() {
    let conn = db::open_in_memory().unwrap();
    let inv_id = store::add_investment(
        &conn,
        &Investment {
            id: String::new(),
            date: date("2024-01-10"),
            amount: d("5000"),
            investment_type: "Gold".into(),
            roi: d("7.5"),
            duration: d("3"),
            exp_amount: d("6211.48"),
        },
    )
    .unwrap();
    let mut inv = store::list_investments(&conn).unwrap().remove(0);
    assert_eq!(inv.id, inv_id);
    assert_eq!(inv.exp_amount, d("6211.48"));
    inv.amount = d("5500");
    store::update_investment(&conn, &inv).unwrap();
    assert_eq!(store::list_investments(&conn).unwrap()[0].amount, d("5500"));

    let goal_id = store::add_goal(
        &conn,
        &Goal {
            id: String::new(),
            goal_name: "Laptop".into(),
            target_amount: d("1000"),
            current_amount: d("250"),
            deadline: date("2025-06-30"),
            status: "Pending".into(),
        },
    )
    .unwrap();
    let goals = store::list_goals(&conn).unwrap();
    assert_eq!(goals[0].id, goal_id);
    assert_eq!(goals[0].progress(), d("25"));

    store::delete_goal(&conn, &goal_id).unwrap();
    store::delete_investment(&conn, &inv_id).unwrap();
    assert!(store::list_goals(&conn).unwrap().is_empty());
    assert!(store::list_investments(&conn).unwrap().is_empty());
}

#[test]
fn local_store_reports_corrupt_rows_as_upstream_failure() {
    let conn = db::open_in_memory().unwrap();
    conn.execute(
        "INSERT INTO goals(goal_name, target_amount, current_amount, deadline) VALUES ('X','abc','0','2025-01-01')",
        [],
    )
    .unwrap();
    let err = store::LocalStore::new(&conn).goals().unwrap_err();
    assert!(err.is_upstream());
}
