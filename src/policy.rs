//! Order policies and the policy engine.
//!
//! A policy inspects one order (plus the courier context) and either
//! accepts it or returns an [`ErrorInfo`]. The engine runs policies in
//! insertion order and stops at the first rejection.
//!
//! Declarative [`Rule`] records select built-in policies by kind. Their
//! payloads are not interpreted: thresholds are fixed constants.
//!
//! # Usage
//!
//! ```
//! use fp_delivery::models::{Order, Rule};
//! use fp_delivery::policy::{PolicyContext, PolicyEngine};
//!
//! let engine = PolicyEngine::standard().with_rules(&[Rule::new("R1", "vehicle_load")]);
//! let order = Order::new("o1", "r1").with_total(12_000);
//!
//! assert!(engine.evaluate(&order, &PolicyContext::new()).is_left());
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use tracing::debug;

use crate::ftypes::{Either, ErrorInfo};
use crate::models::{Courier, Order, Rule, RuleKind, Vehicle};

/// Largest accepted order total (minor units).
pub const MAX_ORDER_TOTAL: u64 = 10_000;

/// Totals above this are too heavy for a bike.
pub const HEAVY_ORDER_TOTAL: u64 = 5_000;

/// Context passed to policies.
#[derive(Debug, Clone, Copy, Default)]
pub struct PolicyContext<'a> {
    /// Couriers that could take the order.
    pub candidates: &'a [Courier],
    /// Courier being assigned, if any.
    pub courier: Option<&'a Courier>,
}

impl<'a> PolicyContext<'a> {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate couriers.
    pub fn with_candidates(mut self, couriers: &'a [Courier]) -> Self {
        self.candidates = couriers;
        self
    }

    /// Sets the courier being assigned.
    pub fn with_courier(mut self, courier: &'a Courier) -> Self {
        self.courier = Some(courier);
        self
    }
}

/// A rule that accepts or rejects an order.
pub trait OrderPolicy: Send + Sync + Debug {
    /// Policy name (unique among built-ins).
    fn name(&self) -> &'static str;

    /// Returns `Right(())` when the order passes.
    fn check(&self, order: &Order, context: &PolicyContext<'_>) -> Either<ErrorInfo, ()>;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Rejects orders whose total exceeds a limit.
#[derive(Debug, Clone, Copy)]
pub struct MaxOrderTotal {
    /// Largest accepted total (inclusive).
    pub limit: u64,
}

impl Default for MaxOrderTotal {
    fn default() -> Self {
        Self {
            limit: MAX_ORDER_TOTAL,
        }
    }
}

impl OrderPolicy for MaxOrderTotal {
    fn name(&self) -> &'static str {
        "MAX_TOTAL"
    }

    fn check(&self, order: &Order, _context: &PolicyContext<'_>) -> Either<ErrorInfo, ()> {
        if order.total > self.limit {
            Either::Left(ErrorInfo::new("Order too expensive"))
        } else {
            Either::Right(())
        }
    }

    fn description(&self) -> &'static str {
        "Maximum order total"
    }
}

/// Rejects heavy orders for couriers on a restricted vehicle.
///
/// Passes when no courier is in the context.
#[derive(Debug, Clone)]
pub struct HeavyOrderVehicle {
    /// Totals strictly above this are heavy.
    pub limit: u64,
    /// Vehicle that cannot carry heavy orders.
    pub vehicle: Vehicle,
}

impl Default for HeavyOrderVehicle {
    fn default() -> Self {
        Self {
            limit: HEAVY_ORDER_TOTAL,
            vehicle: Vehicle::Bike,
        }
    }
}

impl OrderPolicy for HeavyOrderVehicle {
    fn name(&self) -> &'static str {
        "VEHICLE_LOAD"
    }

    fn check(&self, order: &Order, context: &PolicyContext<'_>) -> Either<ErrorInfo, ()> {
        match context.courier {
            Some(courier) if order.total > self.limit && courier.rides(&self.vehicle) => {
                Either::Left(ErrorInfo::new(format!(
                    "Heavy order cannot be delivered by {}",
                    self.vehicle
                )))
            }
            _ => Either::Right(()),
        }
    }

    fn description(&self) -> &'static str {
        "Vehicle load limit"
    }
}

/// Ordered collection of policies.
#[derive(Debug, Clone, Default)]
pub struct PolicyEngine {
    policies: Vec<Arc<dyn OrderPolicy>>,
}

impl PolicyEngine {
    /// Creates an engine with no policies (accepts everything).
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine with the standard order checks ([`MaxOrderTotal`]).
    pub fn standard() -> Self {
        Self::new().with_policy(MaxOrderTotal::default())
    }

    /// Appends a policy.
    pub fn with_policy<P: OrderPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Arc::new(policy));
        self
    }

    /// Adds the built-in policy for each recognized rule kind.
    ///
    /// A policy already present (by name) is not added twice. Rules of
    /// unrecognized kinds are skipped.
    pub fn with_rules(self, rules: &[Rule]) -> Self {
        rules.iter().fold(self, |engine, rule| match rule.rule_kind() {
            RuleKind::MaxOrderTotal => engine.with_policy_once(MaxOrderTotal::default()),
            RuleKind::VehicleLoad => engine.with_policy_once(HeavyOrderVehicle::default()),
            RuleKind::Other(kind) => {
                debug!(rule_id = %rule.id, %kind, "skipping rule of unrecognized kind");
                engine
            }
        })
    }

    fn with_policy_once<P: OrderPolicy + 'static>(self, policy: P) -> Self {
        if self.policies.iter().any(|p| p.name() == policy.name()) {
            self
        } else {
            self.with_policy(policy)
        }
    }

    /// Names of the configured policies, in evaluation order.
    pub fn policy_names(&self) -> Vec<&'static str> {
        self.policies.iter().map(|p| p.name()).collect()
    }

    /// Runs policies in order; returns the first rejection or the order.
    pub fn evaluate(&self, order: &Order, context: &PolicyContext<'_>) -> Either<ErrorInfo, Order> {
        self.policies
            .iter()
            .map(|policy| policy.check(order, context))
            .find_map(|outcome| match outcome {
                Either::Left(error) => Some(error),
                Either::Right(()) => None,
            })
            .map_or_else(|| Either::Right(order.clone()), Either::Left)
    }

    /// All rejections, in policy order.
    pub fn violations(&self, order: &Order, context: &PolicyContext<'_>) -> Vec<ErrorInfo> {
        self.policies
            .iter()
            .filter_map(|policy| match policy.check(order, context) {
                Either::Left(error) => Some(error),
                Either::Right(()) => None,
            })
            .collect()
    }
}
