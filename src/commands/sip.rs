// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::required;
use crate::error::FinanceError;
use crate::finance::sip::{SipParameters, SipPoint, simulate, summarize};
use crate::utils::{maybe_print_json, parse_rate, pretty_table};
use anyhow::{Context, Result};

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let params = params_from(m)?;
    if m.get_flag("summary") {
        let s = summarize(&params);
        if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &s)? {
            println!(
                "{}",
                pretty_table(
                    &["Contributed", "Gained", "Total"],
                    vec![vec![
                        format!("{:.2}", s.contributed),
                        format!("{:.2}", s.gained),
                        format!("{:.2}", s.contributed + s.gained),
                    ]]
                )
            );
        }
        return Ok(());
    }

    let series = simulate(&params);
    if let Some(path) = m.get_one::<String>("csv") {
        write_csv(path.trim(), &series)?;
        println!("Wrote {} months to {}", series.len(), path.trim());
        return Ok(());
    }
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &series)? {
        let rows = series
            .iter()
            .map(|p| {
                vec![
                    p.month.to_string(),
                    format!("{:.2}", p.cumulative_investment),
                    format!("{:.2}", p.projected_value),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Total Investment", "Total Value"], rows)
        );
    }
    Ok(())
}

pub fn params_from(m: &clap::ArgMatches) -> Result<SipParameters> {
    let years_raw = required(m, "years")?;
    let years: u32 = years_raw.parse().map_err(|_| {
        FinanceError::invalid(
            "duration",
            format!("'{}' is not a whole number of years >= 0", years_raw),
        )
    })?;
    let params = SipParameters::new(
        parse_rate("monthly investment", required(m, "monthly")?)?,
        years,
        parse_rate("annual return rate", required(m, "rate")?)?,
        parse_rate("one-time investment", required(m, "lump-sum")?)?,
    )?;
    Ok(params)
}

pub fn write_csv(path: &str, series: &[SipPoint]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("Create CSV {}", path))?;
    wtr.write_record(["month", "investment", "value"])?;
    for p in series {
        wtr.write_record([
            p.month.to_string(),
            format!("{:.2}", p.cumulative_investment),
            format!("{:.2}", p.projected_value),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
