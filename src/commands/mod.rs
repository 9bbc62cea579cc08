// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod dashboard;
pub mod expenses;
pub mod goals;
pub mod insights;
pub mod investments;
pub mod settings;
pub mod sip;

use crate::config::Config;
use crate::remote::RemoteClient;
use anyhow::{Result, anyhow};
use rusqlite::Connection;

pub(crate) fn use_remote(m: &clap::ArgMatches) -> bool {
    m.try_get_one::<bool>("remote")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}

pub(crate) fn remote_client(conn: &Connection) -> Result<RemoteClient> {
    let cfg = Config::load(conn)?;
    let url = cfg
        .remote_url
        .ok_or_else(|| anyhow!("No remote URL configured; run `finsight config set-remote --url <URL>`"))?;
    let token = cfg
        .token
        .ok_or_else(|| anyhow!("No auth token configured; run `finsight config set-token --token <TOKEN>`"))?;
    RemoteClient::new(&url, &token)
}

pub(crate) fn arg<'a>(m: &'a clap::ArgMatches, id: &str) -> Option<&'a str> {
    m.get_one::<String>(id).map(|s| s.trim())
}

pub(crate) fn required<'a>(m: &'a clap::ArgMatches, id: &str) -> Result<&'a str> {
    arg(m, id).ok_or_else(|| anyhow!("--{} is required", id))
}
