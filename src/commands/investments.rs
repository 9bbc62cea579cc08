// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, remote_client, required, use_remote};
use crate::config::Config;
use crate::finance::aggregate::investment_totals;
use crate::models::Investment;
use crate::remote::Resource;
use crate::source::RecordSource;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{Result, anyhow, bail};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("update", sub)) => update(conn, sub)?,
        Some(("rm", sub)) => remove(conn, sub)?,
        Some(("totals", sub)) => totals(conn, sub)?,
        Some(("type-add", sub)) => {
            let name = required(sub, "name")?;
            if use_remote(sub) {
                remote_client(conn)?.create_investment_type(name)?;
            } else {
                store::add_investment_type(conn, name)?;
            }
            println!("Added investment type '{}'", name);
        }
        Some(("type-rm", sub)) => {
            if use_remote(sub) {
                bail!("Removing investment types is not supported by the remote API");
            }
            let name = required(sub, "name")?;
            store::delete_investment_type(conn, name)?;
            println!("Removed investment type '{}'", name);
        }
        Some(("types", sub)) => types(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn load(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Investment>> {
    if use_remote(sub) {
        Ok(remote_client(conn)?.investments()?)
    } else {
        store::list_investments(conn)
    }
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let investment_type = required(sub, "type")?.to_string();
    if !use_remote(sub)
        && !store::list_investment_types(conn)?
            .iter()
            .any(|t| t.name == investment_type)
    {
        tracing::warn!(kind = %investment_type, "investment type is not declared");
        eprintln!(
            "Note: '{}' is not a declared investment type; it will not appear in by-type breakdowns",
            investment_type
        );
    }
    let amount = parse_amount("amount", required(sub, "amount")?)?;
    let exp_amount = match arg(sub, "expected") {
        Some(raw) => parse_amount("expected amount", raw)?,
        None => amount,
    };
    let inv = Investment {
        id: String::new(),
        date: parse_date(required(sub, "date")?)?,
        amount,
        investment_type,
        roi: parse_amount("roi", required(sub, "roi")?)?,
        duration: parse_amount("duration", required(sub, "duration")?)?,
        exp_amount,
    };
    if use_remote(sub) {
        remote_client(conn)?.create(Resource::Investments, &inv)?;
    } else {
        let id = store::add_investment(conn, &inv)?;
        tracing::info!(id = %id, "investment added");
    }
    println!(
        "Recorded {} in {} on {}",
        inv.amount, inv.investment_type, inv.date
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = load(conn, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let sym = Config::load(conn)?.currency;
        let rows = data
            .iter()
            .map(|i| {
                vec![
                    i.id.clone(),
                    i.date.to_string(),
                    i.investment_type.clone(),
                    fmt_money(&i.amount, &sym),
                    format!("{}%", i.roi),
                    i.duration.to_string(),
                    fmt_money(&i.exp_amount, &sym),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Date", "Type", "Amount", "ROI", "Years", "Expected"],
                rows
            )
        );
    }
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let mut inv = load(conn, sub)?
        .into_iter()
        .find(|i| i.id == id)
        .ok_or_else(|| anyhow!("Investment '{}' not found", id))?;
    if let Some(d) = arg(sub, "date") {
        inv.date = parse_date(d)?;
    }
    if let Some(a) = arg(sub, "amount") {
        inv.amount = parse_amount("amount", a)?;
    }
    if let Some(t) = arg(sub, "type") {
        inv.investment_type = t.to_string();
    }
    if let Some(r) = arg(sub, "roi") {
        inv.roi = parse_amount("roi", r)?;
    }
    if let Some(d) = arg(sub, "duration") {
        inv.duration = parse_amount("duration", d)?;
    }
    if let Some(e) = arg(sub, "expected") {
        inv.exp_amount = parse_amount("expected amount", e)?;
    }
    if use_remote(sub) {
        remote_client(conn)?.update(Resource::Investments, id, &inv)?;
    } else {
        store::update_investment(conn, &inv)?;
    }
    println!("Updated investment {}", id);
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    if use_remote(sub) {
        remote_client(conn)?.delete(Resource::Investments, id)?;
    } else {
        store::delete_investment(conn, id)?;
    }
    println!("Removed investment {}", id);
    Ok(())
}

fn totals(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let t = investment_totals(&load(conn, sub)?);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &t)? {
        let sym = Config::load(conn)?.currency;
        println!(
            "{}",
            pretty_table(
                &["Total Invested", "Expected Return"],
                vec![vec![
                    fmt_money(&t.total_amount, &sym),
                    fmt_money(&t.total_return, &sym)
                ]]
            )
        );
    }
    Ok(())
}

fn types(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let data = if use_remote(sub) {
        remote_client(conn)?.investment_types()?
    } else {
        store::list_investment_types(conn)?
    };
    let rows = data.into_iter().map(|t| vec![t.name]).collect();
    println!("{}", pretty_table(&["Investment Type"], rows));
    Ok(())
}
