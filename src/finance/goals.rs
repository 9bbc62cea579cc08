// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, RoundingStrategy};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Percentage of `target` reached, capped at 100. A non-positive target
/// yields 0. Negative `current` is passed through unchanged.
pub fn progress(current: Decimal, target: Decimal) -> Decimal {
    if target <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match current
        .checked_div(target)
        .and_then(|r| r.checked_mul(HUNDRED))
    {
        Some(pct) => pct.min(HUNDRED),
        // out of Decimal range, so far past either end
        None if current.is_sign_negative() => Decimal::MIN,
        None => HUNDRED,
    }
}

/// Whole-percent caption shown next to a progress bar, e.g. "67%".
pub fn progress_label(pct: Decimal) -> String {
    format!(
        "{}%",
        pct.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn label_rounds_half_up() {
        assert_eq!(progress_label(Decimal::from_str("66.5").unwrap()), "67%");
        assert_eq!(progress_label(Decimal::from_str("33.33").unwrap()), "33%");
        assert_eq!(progress_label(HUNDRED), "100%");
    }

    #[test]
    fn huge_ratios_do_not_overflow() {
        let big = Decimal::from_str("70000000000000000000000000000").unwrap();
        let cent = Decimal::from_str("0.01").unwrap();
        assert_eq!(progress(big, cent), HUNDRED);
        assert_eq!(progress(-big, cent), Decimal::MIN);
    }

    #[test]
    fn negative_current_is_not_clamped_at_zero() {
        let p = progress(Decimal::from(-10), Decimal::from(100));
        assert_eq!(p, Decimal::from(-10));
    }
}
