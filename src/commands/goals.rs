// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{arg, remote_client, required, use_remote};
use crate::config::Config;
use crate::finance::goals::progress_label;
use crate::models::Goal;
use crate::remote::Resource;
use crate::source::RecordSource;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde::Serialize;

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

fn load(conn: &Connection, sub: &clap::ArgMatches) -> Result<Vec<Goal>> {
    if use_remote(sub) {
        Ok(remote_client(conn)?.goals()?)
    } else {
        store::list_goals(conn)
    }
}

fn parse_target(raw: &str) -> Result<Decimal> {
    let t = parse_amount("target amount", raw)?;
    if t.is_zero() {
        return Err(anyhow!("Target amount must be greater than 0"));
    }
    Ok(t)
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let goal = Goal {
        id: String::new(),
        goal_name: required(sub, "name")?.to_string(),
        target_amount: parse_target(required(sub, "target")?)?,
        current_amount: parse_amount("current amount", required(sub, "current")?)?,
        deadline: parse_date(required(sub, "deadline")?)?,
        status: required(sub, "status")?.to_string(),
    };
    if use_remote(sub) {
        remote_client(conn)?.create(Resource::Goals, &goal)?;
    } else {
        let id = store::add_goal(conn, &goal)?;
        tracing::info!(id = %id, "goal added");
    }
    println!(
        "Added goal '{}' ({} by {})",
        goal.goal_name, goal.target_amount, goal.deadline
    );
    Ok(())
}

#[derive(Serialize)]
struct GoalListRow<'a> {
    #[serde(flatten)]
    goal: &'a Goal,
    progress: Decimal,
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let goals = load(conn, sub)?;
    let data: Vec<GoalListRow> = goals
        .iter()
        .map(|g| GoalListRow {
            goal: g,
            progress: g.progress(),
        })
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &data)? {
        let sym = Config::load(conn)?.currency;
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.goal.id.clone(),
                    r.goal.goal_name.clone(),
                    r.goal.deadline.to_string(),
                    fmt_money(&r.goal.current_amount, &sym),
                    fmt_money(&r.goal.target_amount, &sym),
                    progress_label(r.progress),
                    r.goal.status.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["ID", "Goal", "Deadline", "Invested", "Target", "Progress", "Status"],
                rows
            )
        );
    }
    Ok(())
}

fn update(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    let mut goal = load(conn, sub)?
        .into_iter()
        .find(|g| g.id == id)
        .ok_or_else(|| anyhow!("Goal '{}' not found", id))?;
    if let Some(n) = arg(sub, "name") {
        goal.goal_name = n.to_string();
    }
    if let Some(t) = arg(sub, "target") {
        goal.target_amount = parse_target(t)?;
    }
    if let Some(c) = arg(sub, "current") {
        goal.current_amount = parse_amount("current amount", c)?;
    }
    if let Some(d) = arg(sub, "deadline") {
        goal.deadline = parse_date(d)?;
    }
    if let Some(s) = arg(sub, "status") {
        goal.status = s.to_string();
    }
    if use_remote(sub) {
        remote_client(conn)?.update(Resource::Goals, id, &goal)?;
    } else {
        store::update_goal(conn, &goal)?;
    }
    println!("Updated goal {}", id);
    Ok(())
}

fn remove(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = required(sub, "id")?;
    if use_remote(sub) {
        remote_client(conn)?.delete(Resource::Goals, id)?;
    } else {
        store::delete_goal(conn, id)?;
    }
    println!("Removed goal {}", id);
    Ok(())
}
