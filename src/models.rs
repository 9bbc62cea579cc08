// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Anything carrying a money amount that the aggregator can sum.
pub trait Amounted {
    fn amount(&self) -> Decimal;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub investment_type: String,
    pub roi: Decimal, // annual %
    pub duration: Decimal, // years
    pub exp_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentType {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub goal_name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub status: String,
}

impl Amounted for Expense {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Amounted for Investment {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Goal {
    pub fn progress(&self) -> Decimal {
        crate::finance::goals::progress(self.current_amount, self.target_amount)
    }
}
