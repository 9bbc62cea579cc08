// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{remote_client, required, use_remote};
use crate::commands::expenses::window_from;
use crate::config::Config;
use crate::finance::aggregate::{Bucket, by_category, total};
use crate::finance::insights::{Insight, Slice, income_distribution, score};
use crate::source::RecordSource;
use crate::store::LocalStore;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table};
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsReport {
    pub income: Decimal,
    pub total_expenses: Decimal,
    #[serde(flatten)]
    pub insight: Insight,
    pub expense_breakdown: Vec<Bucket<String>>,
    pub income_distribution: [Slice; 2],
}

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let window = window_from(m)?.ok_or_else(|| anyhow!("--year is required"))?;
    let income = parse_amount("income", required(m, "income")?)?;

    let expenses = if use_remote(m) {
        remote_client(conn)?.expenses(&window)
    } else {
        LocalStore::new(conn).expenses(&window)
    }
    .context("Failed to load data")?;

    let total_expenses = total(&expenses);
    let report = InsightsReport {
        income,
        total_expenses,
        insight: score(income, total_expenses)?,
        expense_breakdown: by_category(&expenses),
        income_distribution: income_distribution(income, total_expenses),
    };
    tracing::debug!(rate = %report.insight.savings_rate, "insights computed");

    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &report)? {
        let sym = Config::load(conn)?.currency;
        println!("Savings Rate: {:.2}%", report.insight.savings_rate);
        println!("Financial Score: {}", report.insight.label);
        println!(
            "{}",
            pretty_table(
                &["Category", "Amount"],
                report
                    .expense_breakdown
                    .iter()
                    .map(|b| vec![b.name.clone(), fmt_money(&b.amount, &sym)])
                    .collect()
            )
        );
        println!(
            "{}",
            pretty_table(
                &["Income Distribution", "Amount"],
                report
                    .income_distribution
                    .iter()
                    .map(|s| vec![s.name.to_string(), fmt_money(&s.value, &sym)])
                    .collect()
            )
        );
    }
    Ok(())
}
