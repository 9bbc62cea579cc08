// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::{Connection, OptionalExtension, params};

pub const KEY_CURRENCY: &str = "currency_symbol";
pub const KEY_REMOTE_URL: &str = "remote_url";
pub const KEY_TOKEN: &str = "auth_token";
pub const KEY_DASHBOARD_SNAPSHOT: &str = "dashboard_snapshot";

const ENV_REMOTE_URL: &str = "FINSIGHT_REMOTE_URL";
const ENV_TOKEN: &str = "FINSIGHT_TOKEN";

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

pub fn clear_setting(conn: &Connection, key: &str) -> Result<()> {
    conn.execute("DELETE FROM settings WHERE key=?1", params![key])?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub currency: String,
    pub remote_url: Option<String>,
    pub token: Option<String>,
}

impl Config {
    /// Settings table first, then environment overrides on top.
    pub fn load(conn: &Connection) -> Result<Config> {
        let currency = get_setting(conn, KEY_CURRENCY)?.unwrap_or_else(|| "₹".to_string());
        let remote_url = std::env::var(ENV_REMOTE_URL)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or(get_setting(conn, KEY_REMOTE_URL)?);
        let token = std::env::var(ENV_TOKEN)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .or(get_setting(conn, KEY_TOKEN)?);
        Ok(Config {
            currency,
            remote_url,
            token,
        })
    }
}
