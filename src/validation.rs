//! Integrity checks for seed datasets.
//!
//! Loading only guarantees that each record is well-typed. These checks
//! look across collections and report every problem found:
//! - Duplicate IDs within a collection
//! - Menu items and orders referencing unknown restaurants
//! - Slots referencing unknown couriers
//! - Slots whose end sorts before their start

use std::collections::HashSet;

use crate::seed::Seed;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two records of the same collection share an ID.
    DuplicateId,
    /// A record references a restaurant that doesn't exist.
    UnknownRestaurant,
    /// A slot references a courier that doesn't exist.
    UnknownCourier,
    /// A slot ends before it starts.
    InvertedSlot,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

fn collect_ids<'a>(
    collection: &str,
    ids: impl Iterator<Item = &'a str>,
    errors: &mut Vec<ValidationError>,
) -> HashSet<&'a str> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate {collection} ID: {id}"),
            ));
        }
    }
    seen
}

/// Validates cross-collection integrity of a seed dataset.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_seed(seed: &Seed) -> ValidationResult {
    let mut errors = Vec::new();

    let restaurant_ids = collect_ids(
        "restaurant",
        seed.restaurants.iter().map(|r| r.id.as_str()),
        &mut errors,
    );
    collect_ids(
        "menu item",
        seed.menu_items.iter().map(|m| m.id.as_str()),
        &mut errors,
    );
    collect_ids("order", seed.orders.iter().map(|o| o.id.as_str()), &mut errors);
    let courier_ids = collect_ids(
        "courier",
        seed.couriers.iter().map(|c| c.id.as_str()),
        &mut errors,
    );
    collect_ids("slot", seed.slots.iter().map(|s| s.id.as_str()), &mut errors);

    for item in &seed.menu_items {
        if !restaurant_ids.contains(item.rest_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRestaurant,
                format!(
                    "Menu item '{}' references unknown restaurant '{}'",
                    item.id, item.rest_id
                ),
            ));
        }
    }

    for order in &seed.orders {
        if !restaurant_ids.contains(order.rest_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRestaurant,
                format!(
                    "Order '{}' references unknown restaurant '{}'",
                    order.id, order.rest_id
                ),
            ));
        }
    }

    for slot in &seed.slots {
        if !courier_ids.contains(slot.courier_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCourier,
                format!(
                    "Slot '{}' references unknown courier '{}'",
                    slot.id, slot.courier_id
                ),
            ));
        }
        if !slot.is_well_formed() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvertedSlot,
                format!("Slot '{}' ends ({}) before it starts ({})", slot.id, slot.end, slot.start),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Courier, MenuItem, Order, Restaurant, Slot};

    fn sample_seed() -> Seed {
        Seed {
            restaurants: vec![
                Restaurant::new("r1", "North Pizza", "north"),
                Restaurant::new("r2", "South Sushi", "south"),
            ],
            menu_items: vec![MenuItem::new("m1", "r1", "Margherita").with_price(450)],
            orders: vec![
                Order::new("o1", "r1").with_item("m1", 1).with_total(450),
                Order::new("o2", "r2").with_total(900),
            ],
            couriers: vec![Courier::new("c1", "Alice", "bike", "north")],
            slots: vec![Slot::new("s1", "c1", "10:00", "12:00")],
        }
    }

    #[test]
    fn test_valid_seed() {
        assert!(validate_seed(&sample_seed()).is_ok());
        assert!(validate_seed(&Seed::fallback()).is_ok());
        assert!(validate_seed(&Seed::default()).is_ok());
    }

    #[test]
    fn test_duplicate_order_id() {
        let mut seed = sample_seed();
        seed.orders.push(Order::new("o1", "r2"));

        let errors = validate_seed(&seed).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("order")));
    }

    #[test]
    fn test_unknown_restaurant() {
        let mut seed = sample_seed();
        seed.orders.push(Order::new("o3", "ghost"));
        seed.menu_items.push(MenuItem::new("m2", "ghost", "Soup"));

        let errors = validate_seed(&seed).unwrap_err();
        let unknown: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::UnknownRestaurant)
            .collect();
        assert_eq!(unknown.len(), 2);
    }

    #[test]
    fn test_unknown_courier() {
        let mut seed = sample_seed();
        seed.slots.push(Slot::new("s2", "c9", "12:00", "14:00"));

        let errors = validate_seed(&seed).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownCourier));
    }

    #[test]
    fn test_inverted_slot() {
        let mut seed = sample_seed();
        seed.slots.push(Slot::new("s2", "c1", "18:00", "16:00"));

        let errors = validate_seed(&seed).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvertedSlot);
    }

    #[test]
    fn test_multiple_errors() {
        let mut seed = sample_seed();
        seed.restaurants.push(Restaurant::new("r1", "Copy", "east"));
        seed.slots.push(Slot::new("s1", "c7", "09:00", "08:00"));

        let errors = validate_seed(&seed).unwrap_err();
        assert!(errors.len() >= 4);
    }
}
