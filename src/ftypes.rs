//! Maybe and Either sum types, and the order rules built on them.
//!
//! Lookup misses and rule failures are returned as values, never raised:
//! `safe_order` yields [`Maybe::Nothing`] when no order matches, and the
//! validation rules yield [`Either::Left`] with an [`ErrorInfo`].
//!
//! # Usage
//!
//! ```
//! use fp_delivery::ftypes::{assign_courier, validate_order};
//! use fp_delivery::models::{Courier, Order};
//!
//! let order = Order::new("o1", "r1").with_total(6000);
//! let courier = Courier::new("c1", "Alice", "bike", "north");
//!
//! let outcome = validate_order(&order, &[], &[])
//!     .and_then(|o| assign_courier(&o, &courier));
//! assert!(outcome.is_left());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Courier, Order, Rule};
use crate::policy::{HeavyOrderVehicle, PolicyContext, PolicyEngine};

/// An optional value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

/// A value that is either an error (`Left`) or a success (`Right`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Either<E, T> {
    /// Failure.
    Left(E),
    /// Success.
    Right(T),
}

/// Error payload carried by failed rules. Serializes as `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Human-readable error message.
    pub error: String,
}

impl<T> Maybe<T> {
    /// Whether a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Maybe::Just(_))
    }

    /// Whether no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Maybe::Nothing)
    }

    /// Reference to the value, if present.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Converts into an `Option`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }

    /// Maps the present value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Just(value) => Maybe::Just(f(value)),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may itself produce nothing.
    pub fn and_then<U, F: FnOnce(T) -> Maybe<U>>(self, f: F) -> Maybe<U> {
        match self {
            Maybe::Just(value) => f(value),
            Maybe::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the value or `default`.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Maybe::Just(value) => value,
            Maybe::Nothing => default,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Maybe::Just(value),
            None => Maybe::Nothing,
        }
    }
}

impl<E, T> Either<E, T> {
    /// Whether this is a failure.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Whether this is a success.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Reference to the error, if this is `Left`.
    pub const fn error(&self) -> Option<&E> {
        match self {
            Either::Left(error) => Some(error),
            Either::Right(_) => None,
        }
    }

    /// Reference to the success value, if this is `Right`.
    pub const fn value(&self) -> Option<&T> {
        match self {
            Either::Left(_) => None,
            Either::Right(value) => Some(value),
        }
    }

    /// Maps the success value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Either<E, U> {
        match self {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => Either::Right(f(value)),
        }
    }

    /// Maps the error value.
    pub fn map_left<D, F: FnOnce(E) -> D>(self, f: F) -> Either<D, T> {
        match self {
            Either::Left(error) => Either::Left(f(error)),
            Either::Right(value) => Either::Right(value),
        }
    }

    /// Chains a fallible computation on success; short-circuits on failure.
    pub fn and_then<U, F: FnOnce(T) -> Either<E, U>>(self, f: F) -> Either<E, U> {
        match self {
            Either::Left(error) => Either::Left(error),
            Either::Right(value) => f(value),
        }
    }

    /// Converts into a `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<E, T> From<Result<T, E>> for Either<E, T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Either::Right(value),
            Err(error) => Either::Left(error),
        }
    }
}

impl ErrorInfo {
    /// Creates an error payload.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error)
    }
}

/// First order whose `id` equals `order_id`, or `Nothing`.
pub fn safe_order(orders: &[Order], order_id: &str) -> Maybe<Order> {
    orders.iter().find(|o| o.id == order_id).cloned().into()
}

/// Checks an order against the standard order policies.
///
/// Fails with "Order too expensive" when `total > 10000`. `rules` select
/// built-in policies by kind; `couriers` are exposed to policies as
/// candidates but no built-in policy consults them.
pub fn validate_order(order: &Order, rules: &[Rule], couriers: &[Courier]) -> Either<ErrorInfo, Order> {
    let context = PolicyContext::new().with_candidates(couriers);
    PolicyEngine::standard()
        .with_rules(rules)
        .evaluate(order, &context)
}

/// Checks that `courier` can carry `order`.
///
/// Fails with "Heavy order cannot be delivered by bike" when
/// `total > 5000` and the courier rides a bike.
pub fn assign_courier(order: &Order, courier: &Courier) -> Either<ErrorInfo, Order> {
    let context = PolicyContext::new().with_courier(courier);
    PolicyEngine::new()
        .with_policy(HeavyOrderVehicle::default())
        .evaluate(order, &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn orders() -> Vec<Order> {
        vec![
            Order::new("o1", "r1").with_total(1000),
            Order::new("o2", "r1").with_total(2000),
        ]
    }

    #[test]
    fn test_maybe_variants() {
        let just = Maybe::Just("test value");
        assert!(just.is_just());
        assert!(!just.is_nothing());
        assert_eq!(just.value(), Some(&"test value"));

        let nothing: Maybe<&str> = Maybe::Nothing;
        assert!(nothing.is_nothing());
        assert_eq!(nothing.value(), None);
        assert_eq!(nothing.unwrap_or("fallback"), "fallback");
    }

    #[test]
    fn test_maybe_combinators() {
        let doubled = Maybe::Just(21).map(|x| x * 2);
        assert_eq!(doubled, Maybe::Just(42));

        let chained = Maybe::Just(4).and_then(|x| if x > 5 { Maybe::Just(x) } else { Maybe::Nothing });
        assert!(chained.is_nothing());

        assert_eq!(Maybe::from(Some(1)).into_option(), Some(1));
        assert_eq!(Maybe::<i32>::from(None), Maybe::Nothing);
    }

    #[test]
    fn test_either_variants() {
        let right: Either<ErrorInfo, &str> = Either::Right("success");
        assert!(right.is_right());
        assert_eq!(right.value(), Some(&"success"));
        assert_eq!(right.error(), None);

        let left: Either<ErrorInfo, &str> = Either::Left(ErrorInfo::new("boom"));
        assert!(left.is_left());
        assert_eq!(left.error().map(|e| e.error.as_str()), Some("boom"));
        assert_eq!(left.into_result(), Err(ErrorInfo::new("boom")));
    }

    #[test]
    fn test_either_short_circuits() {
        let failed: Either<&str, i32> = Either::Left("first");
        let result = failed.and_then(|x| Either::<&str, i32>::Right(x + 1));
        assert_eq!(result, Either::Left("first"));

        let mapped = Either::<&str, i32>::Right(1).map(|x| x + 1).map_left(|e| e.len());
        assert_eq!(mapped, Either::Right(2));
    }

    #[test]
    fn test_safe_order_found() {
        let found = safe_order(&orders(), "o2");
        assert!(found.is_just());
        assert_eq!(found.value().map(|o| o.total), Some(2000));
    }

    #[test]
    fn test_safe_order_missing() {
        assert!(safe_order(&orders(), "nonexistent").is_nothing());
        assert!(safe_order(&[], "o1").is_nothing());
    }

    #[rstest]
    #[case(15000, false)]
    #[case(10001, false)]
    #[case(10000, true)]
    #[case(5000, true)]
    #[case(0, true)]
    fn test_validate_order_threshold(#[case] total: u64, #[case] valid: bool) {
        let order = Order::new("o1", "r1").with_total(total);
        let outcome = validate_order(&order, &[], &[]);
        assert_eq!(outcome.is_right(), valid);
        if !valid {
            assert_eq!(outcome.error(), Some(&ErrorInfo::new("Order too expensive")));
        }
    }

    #[test]
    fn test_validate_order_returns_same_order() {
        let order = Order::new("o1", "r1").with_item("m1", 2).with_total(5000);
        assert_eq!(validate_order(&order, &[], &[]), Either::Right(order));
    }

    #[test]
    fn test_validate_order_ignores_rule_payloads() {
        let rules = vec![
            Rule::new("R1", "max_total").with_payload("limit", 100),
            Rule::new("R2", "weekend_surcharge"),
        ];
        let couriers = vec![Courier::new("c1", "Alice", "bike", "north")];
        let order = Order::new("o1", "r1").with_total(5000);

        assert!(validate_order(&order, &rules, &couriers).is_right());
    }

    #[rstest]
    #[case(6000, "bike", false)]
    #[case(6000, "car", true)]
    #[case(6000, "scooter", true)]
    #[case(5000, "bike", true)]
    #[case(100, "bike", true)]
    fn test_assign_courier(#[case] total: u64, #[case] vehicle: &str, #[case] ok: bool) {
        let order = Order::new("o1", "r1").with_total(total);
        let courier = Courier::new("c1", "Alice", vehicle, "north");
        let outcome = assign_courier(&order, &courier);
        assert_eq!(outcome.is_right(), ok);
        if !ok {
            assert_eq!(
                outcome.error().map(ToString::to_string),
                Some("Heavy order cannot be delivered by bike".to_string())
            );
        }
    }

    #[test]
    fn test_error_info_json_shape() {
        let json = serde_json::to_value(ErrorInfo::new("Order too expensive")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Order too expensive"}));
    }
}
