//! Cart pre-flight checks.
//!
//! Structural checks that reject a request before any search runs: a
//! cart must name at least one course, and its required courses alone
//! must not exceed the credit ceiling.

use crate::error::ScheduleError;
use crate::models::Cart;

/// Validates a cart before schedule generation.
///
/// # Checks
/// 1. At least one course across `required`, `choose_any`, `choose_one`.
/// 2. The required courses' estimated credits do not exceed
///    `credit_reqs.max`.
///
/// Credit estimation uses the first-candidate proxy
/// ([`crate::models::Course::credit_estimate`]) since no sections have
/// been selected yet.
pub fn validate_cart(cart: &Cart) -> Result<(), ScheduleError> {
    if cart.is_empty() {
        return Err(ScheduleError::EmptyCart);
    }
    if cart.required_credit_estimate() > cart.credit_reqs.max {
        return Err(ScheduleError::CreditLimitExceeded);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, CreditRange, Section, SectionGroup};

    fn required_course(id: &str, credits: f64) -> Course {
        Course::new(id, id).with_group(SectionGroup::new(vec![Section::new(
            format!("{id}-01"),
            credits,
        )]))
    }

    #[test]
    fn test_empty_cart_rejected() {
        let cart = Cart::new(CreditRange::new(12.0, 18.0));
        assert_eq!(validate_cart(&cart).unwrap_err(), ScheduleError::EmptyCart);
    }

    #[test]
    fn test_any_pool_counts_as_nonempty() {
        let cart = Cart::new(CreditRange::new(12.0, 18.0))
            .with_choose_any(required_course("X", 4.0));
        assert!(validate_cart(&cart).is_ok());
    }

    #[test]
    fn test_required_over_ceiling_rejected() {
        let cart = Cart::new(CreditRange::new(0.0, 3.0))
            .with_required(required_course("A", 4.0));
        assert_eq!(
            validate_cart(&cart).unwrap_err(),
            ScheduleError::CreditLimitExceeded
        );
    }

    #[test]
    fn test_required_at_ceiling_allowed() {
        let cart = Cart::new(CreditRange::new(0.0, 8.0))
            .with_required(required_course("A", 4.0))
            .with_required(required_course("B", 4.0));
        assert!(validate_cart(&cart).is_ok());
    }
}
