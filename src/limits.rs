//! Input bounds enforced by the validator.

use crate::model::{CustomerId, ManagerId, Score};

/// Inclusive upper bounds for balancer input. Lower bounds are always 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceLimits {
    /// Maximum number of managers in one run.
    pub max_managers: usize,
    pub max_manager_id: ManagerId,
    pub max_manager_score: Score,
    /// Maximum number of customers in one run.
    pub max_customers: usize,
    pub max_customer_id: CustomerId,
    pub max_customer_score: Score,
}

impl Default for BalanceLimits {
    fn default() -> Self {
        Self {
            max_managers: 999,
            max_manager_id: 999,
            max_manager_score: 9_999,
            max_customers: 999_999,
            max_customer_id: 999_999,
            max_customer_score: 99_999,
        }
    }
}

impl BalanceLimits {
    /// How many managers may be away when `manager_count` are on the roster.
    pub const fn max_away(manager_count: usize) -> usize {
        manager_count / 2
    }
}
