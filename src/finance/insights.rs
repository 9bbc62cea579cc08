// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::{FinanceError, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthLabel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthLabel::Excellent => "Excellent",
            HealthLabel::Good => "Good",
            HealthLabel::NeedsImprovement => "Needs Improvement",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub savings_rate: Decimal,
    pub label: HealthLabel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: &'static str,
    pub value: Decimal,
}

pub fn score(income: Decimal, total_expenses: Decimal) -> Result<Insight> {
    if income <= Decimal::ZERO {
        return Err(FinanceError::invalid(
            "income",
            format!("{} must be greater than 0", income),
        ));
    }
    if total_expenses < Decimal::ZERO {
        return Err(FinanceError::invalid(
            "total expenses",
            format!("{} must be >= 0", total_expenses),
        ));
    }
    let savings_rate = (income - total_expenses)
        .checked_div(income)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or_else(|| {
            FinanceError::invalid(
                "total expenses",
                format!("{} is out of range for income {}", total_expenses, income),
            )
        })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let label = if savings_rate >= Decimal::from(20) {
        HealthLabel::Excellent
    } else if savings_rate >= Decimal::TEN {
        HealthLabel::Good
    } else {
        HealthLabel::NeedsImprovement
    };
    Ok(Insight {
        savings_rate,
        label,
    })
}

/// Savings vs. expenses, in that order. Savings goes negative when spending
/// exceeds income.
pub fn income_distribution(income: Decimal, total_expenses: Decimal) -> [Slice; 2] {
    [
        Slice {
            name: "Savings",
            value: income - total_expenses,
        },
        Slice {
            name: "Expenses",
            value: total_expenses,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_display_matches_ui_wording() {
        assert_eq!(HealthLabel::NeedsImprovement.to_string(), "Needs Improvement");
    }

    #[test]
    fn overspending_is_scored_not_rejected() {
        let i = score(Decimal::from(1000), Decimal::from(1500)).unwrap();
        assert_eq!(i.savings_rate, Decimal::from(-50));
        assert_eq!(i.label, HealthLabel::NeedsImprovement);
    }

    #[test]
    fn negative_expense_total_is_rejected() {
        assert!(score(Decimal::from(1000), Decimal::from(-1)).is_err());
    }
}
