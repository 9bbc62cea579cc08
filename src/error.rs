// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    #[error("Invalid {name}: {reason}")]
    InvalidParameter { name: String, reason: String },

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl FinanceError {
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        FinanceError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, FinanceError::InvalidParameter { .. })
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, FinanceError::UpstreamUnavailable(_))
    }
}

impl From<reqwest::Error> for FinanceError {
    fn from(e: reqwest::Error) -> Self {
        FinanceError::UpstreamUnavailable(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;
