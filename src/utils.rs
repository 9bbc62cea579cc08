// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FinanceError;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{Cell, Table, presets::UTF8_FULL};
use rust_decimal::{Decimal, RoundingStrategy};

const UA: &str = concat!(
    "finsight/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/alphavelocity/finsight)"
);

pub fn http_client() -> Result<reqwest::blocking::Client> {
    let c = reqwest::blocking::Client::builder()
        .timeout(std::time::Duration::from_secs(15))
        .user_agent(UA)
        .build()?;
    Ok(c)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_year(s: &str) -> Result<i32> {
    let y: i32 = s
        .trim()
        .parse()
        .with_context(|| format!("Invalid year '{}'", s))?;
    if !(1900..=9999).contains(&y) {
        return Err(anyhow::anyhow!("Year {} out of range", y));
    }
    Ok(y)
}

/// Money amount that must not be negative.
pub fn parse_amount(name: &str, s: &str) -> Result<Decimal> {
    let d = s
        .trim()
        .parse::<Decimal>()
        .map_err(|_| FinanceError::invalid(name, format!("'{}' is not a number", s.trim())))?;
    if d.is_sign_negative() && !d.is_zero() {
        return Err(FinanceError::invalid(name, format!("{} must be >= 0", d)).into());
    }
    Ok(d)
}

/// Non-negative floating point input for the SIP calculator.
pub fn parse_rate(name: &str, s: &str) -> Result<f64> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| FinanceError::invalid(name, format!("'{}' is not a number", s.trim())))?;
    if !v.is_finite() || v < 0.0 {
        return Err(FinanceError::invalid(name, format!("{} must be a finite value >= 0", v)).into());
    }
    Ok(v)
}

pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    format!(
        "{}{:.2}",
        symbol,
        d.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // Arrays are streamed one element per line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
