// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::FinanceError;
use crate::finance::aggregate::{ExpenseWindow, MonthSelection};
use crate::models::{Expense, Goal, Investment, InvestmentType};
use crate::source::RecordSource;
use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

fn dec(raw: &str, what: &str) -> Result<Decimal> {
    raw.parse::<Decimal>()
        .with_context(|| format!("Invalid {} '{}' in database", what, raw))
}

fn date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}' in database", raw))
}

fn parse_id(id: &str) -> Result<i64> {
    id.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid record id '{}'", id))
}

fn expect_changed(n: usize, kind: &str, id: &str) -> Result<()> {
    if n == 0 {
        return Err(anyhow!("{} '{}' not found", kind, id.trim()));
    }
    Ok(())
}

// Expenses

pub fn add_expense(conn: &Connection, e: &Expense) -> Result<String> {
    conn.execute(
        "INSERT INTO expenses(date, amount, category, description) VALUES (?1, ?2, ?3, ?4)",
        params![
            e.date.to_string(),
            e.amount.to_string(),
            e.category,
            e.description
        ],
    )?;
    Ok(conn.last_insert_rowid().to_string())
}

pub fn update_expense(conn: &Connection, e: &Expense) -> Result<()> {
    let n = conn.execute(
        "UPDATE expenses SET date=?1, amount=?2, category=?3, description=?4 WHERE id=?5",
        params![
            e.date.to_string(),
            e.amount.to_string(),
            e.category,
            e.description,
            parse_id(&e.id)?
        ],
    )?;
    expect_changed(n, "Expense", &e.id)
}

pub fn delete_expense(conn: &Connection, id: &str) -> Result<()> {
    let n = conn.execute("DELETE FROM expenses WHERE id=?1", params![parse_id(id)?])?;
    expect_changed(n, "Expense", id)
}

pub fn get_expense(conn: &Connection, id: &str) -> Result<Expense> {
    let wanted = parse_id(id)?;
    list_expenses(conn, None)?
        .into_iter()
        .find(|e| e.id == wanted.to_string())
        .ok_or_else(|| anyhow!("Expense '{}' not found", id.trim()))
}

/// Newest first. `window` narrows to a year and optionally one month.
pub fn list_expenses(conn: &Connection, window: Option<&ExpenseWindow>) -> Result<Vec<Expense>> {
    let mut sql =
        String::from("SELECT id, date, amount, category, description FROM expenses WHERE 1=1");
    let mut args: Vec<String> = Vec::new();
    if let Some(w) = window {
        sql.push_str(" AND substr(date,1,4)=?");
        args.push(format!("{:04}", w.year));
        if let MonthSelection::Month(m) = w.month {
            sql.push_str(" AND substr(date,6,2)=?");
            args.push(format!("{:02}", m.number_from_month()));
        }
    }
    sql.push_str(" ORDER BY date DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = stmt.query(rusqlite::params_from_iter(args.iter()))?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let d: String = r.get(1)?;
        let amt: String = r.get(2)?;
        out.push(Expense {
            id: id.to_string(),
            date: date(&d)?,
            amount: dec(&amt, "expense amount")?,
            category: r.get(3)?,
            description: r.get(4)?,
        });
    }
    Ok(out)
}

// Investment types

pub fn add_investment_type(conn: &Connection, name: &str) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FinanceError::invalid("investment type", "name must not be blank").into());
    }
    conn.execute(
        "INSERT INTO investment_types(name) VALUES (?1)",
        params![name],
    )
    .with_context(|| format!("Investment type '{}' already exists", name))?;
    Ok(conn.last_insert_rowid().to_string())
}

pub fn delete_investment_type(conn: &Connection, name: &str) -> Result<()> {
    let n = conn.execute(
        "DELETE FROM investment_types WHERE name=?1",
        params![name.trim()],
    )?;
    expect_changed(n, "Investment type", name)
}

/// Declaration order.
pub fn list_investment_types(conn: &Connection) -> Result<Vec<InvestmentType>> {
    let mut stmt = conn.prepare("SELECT id, name FROM investment_types ORDER BY id")?;
    let rows = stmt.query_map([], |r| {
        Ok(InvestmentType {
            id: r.get::<_, i64>(0)?.to_string(),
            name: r.get(1)?,
        })
    })?;
    let mut out = Vec::new();
    for row in rows {
        out.push(row?);
    }
    Ok(out)
}

// Investments

pub fn add_investment(conn: &Connection, i: &Investment) -> Result<String> {
    conn.execute(
        "INSERT INTO investments(date, amount, investment_type, roi, duration, exp_amount)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            i.date.to_string(),
            i.amount.to_string(),
            i.investment_type,
            i.roi.to_string(),
            i.duration.to_string(),
            i.exp_amount.to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid().to_string())
}

pub fn update_investment(conn: &Connection, i: &Investment) -> Result<()> {
    let n = conn.execute(
        "UPDATE investments SET date=?1, amount=?2, investment_type=?3, roi=?4, duration=?5, exp_amount=?6
         WHERE id=?7",
        params![
            i.date.to_string(),
            i.amount.to_string(),
            i.investment_type,
            i.roi.to_string(),
            i.duration.to_string(),
            i.exp_amount.to_string(),
            parse_id(&i.id)?
        ],
    )?;
    expect_changed(n, "Investment", &i.id)
}

pub fn delete_investment(conn: &Connection, id: &str) -> Result<()> {
    let n = conn.execute("DELETE FROM investments WHERE id=?1", params![parse_id(id)?])?;
    expect_changed(n, "Investment", id)
}

pub fn list_investments(conn: &Connection) -> Result<Vec<Investment>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, amount, investment_type, roi, duration, exp_amount
         FROM investments ORDER BY date DESC, id DESC",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let d: String = r.get(1)?;
        let amt: String = r.get(2)?;
        let roi: String = r.get(4)?;
        let dur: String = r.get(5)?;
        let exp: String = r.get(6)?;
        out.push(Investment {
            id: id.to_string(),
            date: date(&d)?,
            amount: dec(&amt, "investment amount")?,
            investment_type: r.get(3)?,
            roi: dec(&roi, "roi")?,
            duration: dec(&dur, "duration")?,
            exp_amount: dec(&exp, "expected amount")?,
        });
    }
    Ok(out)
}

// Goals

pub fn add_goal(conn: &Connection, g: &Goal) -> Result<String> {
    conn.execute(
        "INSERT INTO goals(goal_name, target_amount, current_amount, deadline, status)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            g.goal_name,
            g.target_amount.to_string(),
            g.current_amount.to_string(),
            g.deadline.to_string(),
            g.status
        ],
    )?;
    Ok(conn.last_insert_rowid().to_string())
}

pub fn update_goal(conn: &Connection, g: &Goal) -> Result<()> {
    let n = conn.execute(
        "UPDATE goals SET goal_name=?1, target_amount=?2, current_amount=?3, deadline=?4, status=?5
         WHERE id=?6",
        params![
            g.goal_name,
            g.target_amount.to_string(),
            g.current_amount.to_string(),
            g.deadline.to_string(),
            g.status,
            parse_id(&g.id)?
        ],
    )?;
    expect_changed(n, "Goal", &g.id)
}

pub fn delete_goal(conn: &Connection, id: &str) -> Result<()> {
    let n = conn.execute("DELETE FROM goals WHERE id=?1", params![parse_id(id)?])?;
    expect_changed(n, "Goal", id)
}

pub fn list_goals(conn: &Connection) -> Result<Vec<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT id, goal_name, target_amount, current_amount, deadline, status
         FROM goals ORDER BY deadline, id",
    )?;
    let mut rows = stmt.query([])?;
    let mut out = Vec::new();
    while let Some(r) = rows.next()? {
        let id: i64 = r.get(0)?;
        let target: String = r.get(2)?;
        let current: String = r.get(3)?;
        let deadline: String = r.get(4)?;
        out.push(Goal {
            id: id.to_string(),
            goal_name: r.get(1)?,
            target_amount: dec(&target, "target amount")?,
            current_amount: dec(&current, "current amount")?,
            deadline: date(&deadline)?,
            status: r.get(5)?,
        });
    }
    Ok(out)
}

/// The local database seen as a record source.
pub struct LocalStore<'a> {
    conn: &'a Connection,
}

impl<'a> LocalStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        LocalStore { conn }
    }
}

fn unavailable(e: anyhow::Error) -> FinanceError {
    FinanceError::UpstreamUnavailable(format!("{:#}", e))
}

impl RecordSource for LocalStore<'_> {
    fn expenses(&self, window: &ExpenseWindow) -> crate::error::Result<Vec<Expense>> {
        list_expenses(self.conn, Some(window)).map_err(unavailable)
    }

    fn goals(&self) -> crate::error::Result<Vec<Goal>> {
        list_goals(self.conn).map_err(unavailable)
    }

    fn investments(&self) -> crate::error::Result<Vec<Investment>> {
        list_investments(self.conn).map_err(unavailable)
    }

    fn investment_types(&self) -> crate::error::Result<Vec<InvestmentType>> {
        list_investment_types(self.conn).map_err(unavailable)
    }
}
