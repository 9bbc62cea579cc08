// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::required;
use crate::config::{self, Config, KEY_CURRENCY, KEY_DASHBOARD_SNAPSHOT, KEY_REMOTE_URL, KEY_TOKEN};
use crate::utils::pretty_table;
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => {
            let cfg = Config::load(conn)?;
            let rows = vec![
                vec!["currency".to_string(), cfg.currency],
                vec!["remote url".to_string(), cfg.remote_url.unwrap_or_default()],
                vec![
                    "auth token".to_string(),
                    if cfg.token.is_some() { "(set)" } else { "" }.to_string(),
                ],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        Some(("set-currency", sub)) => {
            let sym = required(sub, "SYMBOL")?;
            config::set_setting(conn, KEY_CURRENCY, sym)?;
            println!("Currency symbol set to {}", sym);
        }
        Some(("set-remote", sub)) => {
            let url = required(sub, "url")?.trim_end_matches('/');
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(anyhow!("Remote URL must start with http:// or https://"));
            }
            config::set_setting(conn, KEY_REMOTE_URL, url)?;
            println!("Remote API set to {}", url);
        }
        Some(("set-token", sub)) => {
            config::set_setting(conn, KEY_TOKEN, required(sub, "token")?)?;
            println!("Auth token stored");
        }
        Some(("clear-remote", _)) => {
            for key in [KEY_REMOTE_URL, KEY_TOKEN, KEY_DASHBOARD_SNAPSHOT] {
                config::clear_setting(conn, key)?;
            }
            println!("Remote settings cleared");
        }
        _ => {}
    }
    Ok(())
}
