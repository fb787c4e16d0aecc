//! Local argument checks run before a request is built.

use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::error::ApiError;

pub fn non_empty<T>(name: &'static str, items: &[T]) -> Result<(), ApiError> {
    if items.is_empty() {
        return Err(ApiError::invalid(name, "must not be empty"));
    }
    Ok(())
}

/// Between 1 and `max` items.
pub fn bounded<T>(name: &'static str, items: &[T], max: usize) -> Result<(), ApiError> {
    if items.is_empty() || items.len() > max {
        return Err(ApiError::invalid(
            name,
            format!("must contain 1 to {max} items, got {}", items.len()),
        ));
    }
    Ok(())
}

pub fn in_range<T>(name: &'static str, value: T, range: RangeInclusive<T>) -> Result<(), ApiError>
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        return Err(ApiError::invalid(
            name,
            format!("must be between {} and {}, got {value}", range.start(), range.end()),
        ));
    }
    Ok(())
}

pub fn not_blank(name: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid(name, "must not be empty"));
    }
    Ok(())
}

/// `name` describes the pair, e.g. `"business_id|campaign_id"`.
pub fn exactly_one(name: &'static str, first: bool, second: bool) -> Result<(), ApiError> {
    if first == second {
        return Err(ApiError::invalid(name, "exactly one of the two must be given"));
    }
    Ok(())
}

pub fn at_least_one(name: &'static str, first: bool, second: bool) -> Result<(), ApiError> {
    if !first && !second {
        return Err(ApiError::invalid(name, "at least one of the two must be given"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_accepts_one_to_max() {
        assert!(bounded("model_ids", &[1; 1], 100).is_ok());
        assert!(bounded("model_ids", &[1; 100], 100).is_ok());
    }

    #[test]
    fn bounded_rejects_empty_and_overflow() {
        let err = bounded("model_ids", &[1; 101], 100).unwrap_err();
        assert!(err.to_string().contains("got 101"));
        assert!(bounded::<u64>("model_ids", &[], 100).is_err());
    }

    #[test]
    fn in_range_is_inclusive() {
        assert!(in_range("count", 1, 1..=100).is_ok());
        assert!(in_range("count", 100, 1..=100).is_ok());
        assert!(in_range("count", 0, 1..=100).is_err());
        assert!(in_range("count", 101, 1..=100).is_err());
    }

    #[test]
    fn exactly_one_rejects_both_and_neither() {
        assert!(exactly_one("a|b", true, false).is_ok());
        assert!(exactly_one("a|b", false, true).is_ok());
        assert!(exactly_one("a|b", true, true).is_err());
        assert!(exactly_one("a|b", false, false).is_err());
    }

    #[test]
    fn at_least_one_rejects_neither() {
        assert!(at_least_one("a|b", true, true).is_ok());
        assert!(at_least_one("a|b", false, false).is_err());
    }

    #[test]
    fn not_blank_rejects_whitespace() {
        assert!(not_blank("query", "  ").is_err());
        assert!(not_blank("query", "Термопаста").is_ok());
    }
}
