// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Systematic investment plan projection.
//!
//! Each month the running contribution total is grown by `(1 + r)^m`, where
//! `m` is the month index, instead of rolling a balance forward month by
//! month. Outputs must match that model exactly, so do not swap in the
//! textbook future-value formula.

use crate::error::{FinanceError, Result};
use serde::Serialize;

/// Longest plan accepted, in years.
pub const MAX_DURATION_YEARS: u32 = 100;

/// Validated inputs. Only [`SipParameters::new`] builds one, so the month
/// count is always bounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SipParameters {
    monthly_investment: f64,
    duration_years: u32,
    annual_return_rate_percent: f64,
    one_time_investment: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipPoint {
    pub month: u32,
    #[serde(rename = "investment")]
    pub cumulative_investment: f64,
    #[serde(rename = "value")]
    pub projected_value: f64,
}

/// Final point split into what was paid in and what was earned on top.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SipSummary {
    pub contributed: f64,
    pub gained: f64,
}

impl SipParameters {
    pub fn new(
        monthly_investment: f64,
        duration_years: u32,
        annual_return_rate_percent: f64,
        one_time_investment: f64,
    ) -> Result<Self> {
        check_amount("monthly investment", monthly_investment)?;
        check_amount("annual return rate", annual_return_rate_percent)?;
        check_amount("one-time investment", one_time_investment)?;
        if duration_years > MAX_DURATION_YEARS {
            return Err(FinanceError::invalid(
                "duration",
                format!(
                    "{} years is more than the {} year maximum",
                    duration_years, MAX_DURATION_YEARS
                ),
            ));
        }
        Ok(SipParameters {
            monthly_investment,
            duration_years,
            annual_return_rate_percent,
            one_time_investment,
        })
    }

    pub fn monthly_investment(&self) -> f64 {
        self.monthly_investment
    }

    pub fn duration_years(&self) -> u32 {
        self.duration_years
    }

    pub fn annual_return_rate_percent(&self) -> f64 {
        self.annual_return_rate_percent
    }

    pub fn one_time_investment(&self) -> f64 {
        self.one_time_investment
    }

    pub fn total_months(&self) -> u32 {
        self.duration_years * 12
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_return_rate_percent / 100.0 / 12.0
    }
}

fn check_amount(name: &str, v: f64) -> Result<()> {
    if !v.is_finite() {
        return Err(FinanceError::invalid(name, format!("'{}' is not a number", v)));
    }
    if v < 0.0 {
        return Err(FinanceError::invalid(name, format!("{} must be >= 0", v)));
    }
    Ok(())
}

pub fn simulate(params: &SipParameters) -> Vec<SipPoint> {
    let total_months = params.total_months();
    let growth = 1.0 + params.monthly_rate();
    let mut cumulative = params.one_time_investment;
    let mut out = Vec::with_capacity(total_months as usize);
    for month in 1..=total_months {
        cumulative += params.monthly_investment;
        let projected = cumulative * growth.powf(f64::from(month));
        out.push(SipPoint {
            month,
            cumulative_investment: cumulative,
            projected_value: projected,
        });
    }
    tracing::debug!(months = total_months, "sip simulated");
    out
}

pub fn summarize(params: &SipParameters) -> SipSummary {
    match simulate(params).last() {
        Some(last) => SipSummary {
            contributed: last.cumulative_investment,
            gained: last.projected_value - last.cumulative_investment,
        },
        None => SipSummary {
            contributed: params.one_time_investment,
            gained: 0.0,
        },
    }
}
