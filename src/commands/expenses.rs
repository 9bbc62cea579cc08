// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, remote_client, required, use_remote};
use crate::config::Config;
use crate::finance::aggregate::{ExpenseWindow, MonthSelection};
use crate::models::Expense;
use crate::remote::Resource;
use crate::source::RecordSource;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, parse_year, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let category = required(sub, "category")?;
    if category.is_empty() {
        return Err(anyhow!("Category must not be blank"));
    }
    let expense = Expense {
        id: String::new(),
        date: parse_date(required(sub, "date")?)?,
        amount: parse_amount("amount", required(sub, "amount")?)?,
        category: category.to_string(),
        description: arg(sub, "description")
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string()),
    };
    if use_remote(sub) {
        remote_client(conn)?.create(Resource::Expenses, &expense)?;
    } else {
        let id = store::add_expense(conn, &expense)?;
        tracing::info!(id = %id, "expense added");
    }
    println!(
        "Recorded {} on {} for '{}'",
        expense.amount, expense.date, expense.category
    );
    Ok(())
}

pub fn window_from(sub: &clap::ArgMatches) -> Result<Option<ExpenseWindow>> {
    let Some(year) = arg(sub, "year") else {
        if arg(sub, "month").is_some() {
            return Err(anyhow!("--month needs --year"));
        }
        return Ok(None);
    };
    let month = match arg(sub, "month") {
        Some(raw) => MonthSelection::parse(raw)
            .ok_or_else(|| anyhow!("Invalid month '{}', expected a month name, number, or All", raw))?,
        None => MonthSelection::All,
    };
    Ok(Some(ExpenseWindow {
        year: parse_year(year)?,
        month,
    }))
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let window = window_from(sub)?;
    let mut data = if use_remote(sub) {
        let w = window.ok_or_else(|| anyhow!("--year is required with --remote"))?;
        remote_client(conn)?.expenses(&w)?
    } else {
        store::list_expenses(conn, window.as_ref())?
    };
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let sym = Config::load(conn)?.currency;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|e| {
                vec![
                    e.id.clone(),
                    e.date.to_string(),
                    e.category.clone(),
                    fmt_money(&e.amount, &sym),
                    e.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["ID", "Date", "Category", "Amount", "Description"], rows)
        );
    }
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    if use_remote(sub) {
        let mut body = serde_json::Map::new();
        if let Some(d) = arg(sub, "date") {
            body.insert("date".into(), parse_date(d)?.to_string().into());
        }
        if let Some(a) = arg(sub, "amount") {
            body.insert("amount".into(), serde_json::to_value(parse_amount("amount", a)?)?);
        }
        if let Some(c) = arg(sub, "category") {
            body.insert("category".into(), c.into());
        }
        if let Some(t) = arg(sub, "description") {
            body.insert("description".into(), t.into());
        }
        remote_client(conn)?.update(Resource::Expenses, id, &body)?;
    } else {
        let mut e = store::get_expense(conn, id)?;
        if let Some(d) = arg(sub, "date") {
            e.date = parse_date(d)?;
        }
        if let Some(a) = arg(sub, "amount") {
            e.amount = parse_amount("amount", a)?;
        }
        if let Some(c) = arg(sub, "category") {
            e.category = c.to_string();
        }
        if let Some(t) = arg(sub, "description") {
            e.description = Some(t.to_string()).filter(|s| !s.is_empty());
        }
        store::update_expense(conn, &e)?;
    }
    println!("Updated expense {}", id);
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    if use_remote(sub) {
        remote_client(conn)?.delete(Resource::Expenses, id)?;
    } else {
        store::delete_expense(conn, id)?;
    }
    println!("Removed expense {}", id);
    Ok(())
}
