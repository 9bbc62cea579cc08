// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{remote_client, use_remote};
use crate::commands::expenses::window_from;
use crate::config::{self, Config, KEY_DASHBOARD_SNAPSHOT};
use crate::dashboard::{DashboardState, DashboardView};
use crate::finance::aggregate::ExpenseWindow;
use crate::finance::goals::progress_label;
use crate::store::LocalStore;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Context, Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let window = window_from(m)?.ok_or_else(|| anyhow!("--year is required"))?;
    let remote = use_remote(m);

    let mut state = if remote {
        load_snapshot(conn)?
    } else {
        DashboardState::default()
    };
    let failures = if remote {
        state.refresh(&remote_client(conn)?, &window)
    } else {
        state.refresh(&LocalStore::new(conn), &window)
    };
    for f in &failures {
        eprintln!("⚠ {}", f);
    }
    if remote {
        // refresh only replaced the kinds that loaded
        save_snapshot(conn, &state)?;
    }

    let view = state.view(&window);
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &view)? {
        let sym = Config::load(conn)?.currency;
        print_view(&view, &window, &sym);
    }
    Ok(())
}

pub fn load_snapshot(conn: &Connection) -> Result<DashboardState> {
    match config::get_setting(conn, KEY_DASHBOARD_SNAPSHOT)? {
        Some(raw) => serde_json::from_str(&raw).context("Corrupt dashboard snapshot"),
        None => Ok(DashboardState::default()),
    }
}

pub fn save_snapshot(conn: &Connection, state: &DashboardState) -> Result<()> {
    config::set_setting(conn, KEY_DASHBOARD_SNAPSHOT, &serde_json::to_string(state)?)
}

fn print_view(view: &DashboardView, window: &ExpenseWindow, sym: &str) {
    println!("Expenses by category ({} {})", window.month, window.year);
    println!(
        "{}",
        pretty_table(
            &["Category", "Amount"],
            view.by_category
                .iter()
                .map(|b| vec![b.name.clone(), fmt_money(&b.amount, sym)])
                .collect()
        )
    );
    println!("Expenses over time");
    println!(
        "{}",
        pretty_table(
            &["Bucket", "Amount"],
            view.over_time
                .iter()
                .map(|b| vec![b.name.to_string(), fmt_money(&b.amount, sym)])
                .collect()
        )
    );
    println!("Investments by type");
    println!(
        "{}",
        pretty_table(
            &["Type", "Amount"],
            view.by_investment_type
                .iter()
                .map(|b| vec![b.name.clone(), fmt_money(&b.amount, sym)])
                .collect()
        )
    );
    println!("Recent expenses");
    println!(
        "{}",
        pretty_table(
            &["Date", "Category", "Amount"],
            view.recent_expenses
                .iter()
                .map(|e| vec![e.date.to_string(), e.category.clone(), fmt_money(&e.amount, sym)])
                .collect()
        )
    );
    println!("Recent investments");
    println!(
        "{}",
        pretty_table(
            &["Type", "Amount"],
            view.recent_investments
                .iter()
                .map(|i| vec![i.investment_type.clone(), fmt_money(&i.amount, sym)])
                .collect()
        )
    );
    println!("Goals");
    println!(
        "{}",
        pretty_table(
            &["Goal", "Due", "Progress", "Status"],
            view.goals
                .iter()
                .map(|g| {
                    vec![
                        g.goal_name.clone(),
                        g.deadline.to_string(),
                        progress_label(g.progress),
                        g.status.clone(),
                    ]
                })
                .collect()
        )
    );
}
