// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Month, NaiveDate};
use finsight::finance::aggregate::{
    ExpenseWindow, MonthSelection, TimeBucket, aggregate_by_key, by_category, by_time_bucket,
    investment_totals, investments_by_type, total,
};
use finsight::models::{Expense, Investment, InvestmentType};
use rust_decimal::Decimal;
use std::str::FromStr;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn exp(date: &str, amount: &str, category: &str) -> Expense {
    Expense {
        id: String::new(),
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: d(amount),
        category: category.to_string(),
        description: None,
    }
}

fn inv(amount: &str, kind: &str, expected: &str) -> Investment {
    Investment {
        id: String::new(),
        date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        amount: d(amount),
        investment_type: kind.to_string(),
        roi: d("8"),
        duration: d("5"),
        exp_amount: d(expected),
    }
}

fn sample() -> Vec<Expense> {
    vec![
        exp("2024-03-05", "12.50", "Food"),
        exp("2024-03-05", "40.00", "Rent"),
        exp("2024-03-17", "7.25", "Food"),
        exp("2024-04-01", "100.00", "Travel"),
        exp("2024-09-30", "0.10", "Food"),
        exp("2023-03-05", "999.00", "Food"),
    ]
}

#[test]
fn category_totals_keep_first_appearance_order() {
    let buckets = by_category(&sample());
    let names: Vec<&str> = buckets.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Food", "Rent", "Travel"]);
    assert_eq!(buckets[0].amount, d("1018.85"));
    assert_eq!(buckets[1].amount, d("40.00"));
}

#[test]
fn aggregation_preserves_grand_total() {
    let records = sample();
    let buckets = by_category(&records);
    let bucket_sum: Decimal = buckets.iter().map(|b| b.amount).sum();
    assert_eq!(bucket_sum, total(&records));
}

#[test]
fn permuting_input_keeps_per_key_totals() {
    let records = sample();
    let mut reversed = records.clone();
    reversed.reverse();

    let a = by_category(&records);
    let b = by_category(&reversed);
    assert_ne!(
        a.iter().map(|x| &x.name).collect::<Vec<_>>(),
        b.iter().map(|x| &x.name).collect::<Vec<_>>()
    );
    for bucket in &a {
        let other = b.iter().find(|x| x.name == bucket.name).unwrap();
        assert_eq!(other.amount, bucket.amount);
    }
}

#[test]
fn custom_key_function() {
    let records = sample();
    let by_year = aggregate_by_key(&records, |e| e.date.format("%Y").to_string());
    assert_eq!(by_year.len(), 2);
    assert_eq!(by_year[0].name, "2024");
    assert_eq!(by_year[1].amount, d("999.00"));
}

#[test]
fn empty_input_yields_no_buckets() {
    let none: Vec<Expense> = Vec::new();
    assert!(by_category(&none).is_empty());
    assert!(total(&none).is_zero());
}

#[test]
fn whole_year_buckets_by_short_month_name() {
    let window = ExpenseWindow {
        year: 2024,
        month: MonthSelection::All,
    };
    let buckets = by_time_bucket(&sample(), &window);
    let names: Vec<String> = buckets.iter().map(|b| b.name.to_string()).collect();
    assert_eq!(names, ["Mar", "Apr", "Sep"]);
    assert_eq!(buckets[0].amount, d("59.75"));
    assert_eq!(buckets[2].name, TimeBucket::Month("Sep"));
}

#[test]
fn single_month_buckets_by_day_and_filters_other_months() {
    let window = ExpenseWindow {
        year: 2024,
        month: MonthSelection::Month(Month::March),
    };
    let buckets = by_time_bucket(&sample(), &window);
    assert_eq!(buckets.len(), 2);
    assert_eq!(buckets[0].name, TimeBucket::Day(5));
    assert_eq!(buckets[0].amount, d("52.50"));
    assert_eq!(buckets[1].name, TimeBucket::Day(17));
    assert_eq!(buckets[1].amount, d("7.25"));
}

#[test]
fn investments_follow_declared_type_order() {
    let types = vec![
        InvestmentType {
            id: "1".into(),
            name: "Gold".into(),
        },
        InvestmentType {
            id: "2".into(),
            name: "Stocks".into(),
        },
        InvestmentType {
            id: "3".into(),
            name: "Bonds".into(),
        },
    ];
    let investments = vec![
        inv("100", "Stocks", "150"),
        inv("50", "Gold", "60"),
        inv("25", "Stocks", "30"),
        inv("999", "Crypto", "0"),
    ];
    let buckets = investments_by_type(&types, &investments);
    assert_eq!(buckets.len(), 3);
    assert_eq!(buckets[0].name, "Gold");
    assert_eq!(buckets[0].amount, d("50"));
    assert_eq!(buckets[1].amount, d("125"));
    assert!(buckets[2].amount.is_zero());
}

#[test]
fn investment_totals_round_to_cents() {
    let investments = vec![inv("10.005", "Gold", "12.333"), inv("0.001", "Gold", "1")];
    let t = investment_totals(&investments);
    assert_eq!(t.total_amount, d("10.01"));
    assert_eq!(t.total_return, d("13.33"));
}

#[test]
fn investment_totals_round_halves_up() {
    let investments = vec![inv("1.125", "Gold", "2.0"), inv("1.0", "Gold", "0.005")];
    let t = investment_totals(&investments);
    assert_eq!(t.total_amount, d("2.13"));
    assert_eq!(t.total_return, d("2.01"));
}
