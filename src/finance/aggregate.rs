// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Amounted, Expense, Investment, InvestmentType};
use chrono::{Datelike, Month};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bucket<K> {
    pub name: K,
    pub amount: Decimal,
}

/// Sum amounts per key, keeping keys in order of first appearance.
pub fn aggregate_by_key<R, K, F>(records: &[R], key_fn: F) -> Vec<Bucket<K>>
where
    R: Amounted,
    K: Eq + Hash + Clone,
    F: Fn(&R) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut out: Vec<Bucket<K>> = Vec::new();
    for r in records {
        let key = key_fn(r);
        match index.get(&key) {
            Some(&i) => out[i].amount += r.amount(),
            None => {
                index.insert(key.clone(), out.len());
                out.push(Bucket {
                    name: key,
                    amount: r.amount(),
                });
            }
        }
    }
    out
}

pub fn by_category(expenses: &[Expense]) -> Vec<Bucket<String>> {
    aggregate_by_key(expenses, |e| e.category.clone())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthSelection {
    #[default]
    All,
    Month(Month),
}

impl MonthSelection {
    /// Accepts "All", a month name ("March", "mar") or a month number ("3").
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("all") {
            return Some(MonthSelection::All);
        }
        if let Ok(n) = s.parse::<u8>() {
            return Month::try_from(n).ok().map(MonthSelection::Month);
        }
        s.parse::<Month>().ok().map(MonthSelection::Month)
    }

    pub fn number(&self) -> Option<u32> {
        match self {
            MonthSelection::All => None,
            MonthSelection::Month(m) => Some(m.number_from_month()),
        }
    }
}

impl fmt::Display for MonthSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelection::All => write!(f, "All"),
            MonthSelection::Month(m) => write!(f, "{}", m.name()),
        }
    }
}

/// Year plus month selection the dashboard is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpenseWindow {
    pub year: i32,
    pub month: MonthSelection,
}

impl ExpenseWindow {
    pub fn contains(&self, e: &Expense) -> bool {
        if e.date.year() != self.year {
            return false;
        }
        match self.month {
            MonthSelection::All => true,
            MonthSelection::Month(m) => e.date.month() == m.number_from_month(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TimeBucket {
    Day(u32),
    Month(&'static str),
}

impl fmt::Display for TimeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeBucket::Day(d) => write!(f, "{}", d),
            TimeBucket::Month(m) => write!(f, "{}", m),
        }
    }
}

const SHORT_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub fn by_time_bucket(expenses: &[Expense], window: &ExpenseWindow) -> Vec<Bucket<TimeBucket>> {
    let selected: Vec<Expense> = expenses
        .iter()
        .filter(|e| window.contains(e))
        .cloned()
        .collect();
    match window.month {
        MonthSelection::All => aggregate_by_key(&selected, |e| {
            TimeBucket::Month(SHORT_MONTHS[e.date.month0() as usize])
        }),
        MonthSelection::Month(_) => aggregate_by_key(&selected, |e| TimeBucket::Day(e.date.day())),
    }
}

/// One slice per declared type, in declaration order. Investments whose type
/// was never declared are left out.
pub fn investments_by_type(
    types: &[InvestmentType],
    investments: &[Investment],
) -> Vec<Bucket<String>> {
    types
        .iter()
        .map(|t| Bucket {
            name: t.name.clone(),
            amount: investments
                .iter()
                .filter(|i| i.investment_type == t.name)
                .map(|i| i.amount)
                .sum(),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentTotals {
    pub total_amount: Decimal,
    pub total_return: Decimal,
}

pub fn investment_totals(investments: &[Investment]) -> InvestmentTotals {
    let (amount, ret) = investments
        .iter()
        .fold((Decimal::ZERO, Decimal::ZERO), |(a, r), i| {
            (a + i.amount, r + i.exp_amount)
        });
    InvestmentTotals {
        total_amount: cents(amount),
        total_return: cents(ret),
    }
}

/// Two decimal places, halves rounded up.
fn cents(d: Decimal) -> Decimal {
    d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn total<R: Amounted>(records: &[R]) -> Decimal {
    records.iter().map(|r| r.amount()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_selection_parses_names_and_numbers() {
        assert_eq!(MonthSelection::parse(" All "), Some(MonthSelection::All));
        assert_eq!(
            MonthSelection::parse("March"),
            Some(MonthSelection::Month(Month::March))
        );
        assert_eq!(
            MonthSelection::parse("12"),
            Some(MonthSelection::Month(Month::December))
        );
        assert_eq!(MonthSelection::parse("13"), None);
        assert_eq!(MonthSelection::parse("Smarch"), None);
        assert_eq!(MonthSelection::Month(Month::May).to_string(), "May");
    }

    #[test]
    fn time_bucket_serializes_as_plain_value() {
        assert_eq!(serde_json::to_string(&TimeBucket::Day(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&TimeBucket::Month("Sep")).unwrap(),
            "\"Sep\""
        );
    }
}
