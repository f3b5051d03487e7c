//! Balancer entry point: validate, distribute, resolve.

use crate::distribution::{self, DistributionMap};
use crate::error::BalanceError;
use crate::limits::BalanceLimits;
use crate::model::{Customer, Manager, ManagerId};
use crate::ranking;
use crate::validation;

/// Returned by [`CustomerSuccessBalancing::execute`] when no single manager
/// has the most customers.
pub const NO_MANAGER: ManagerId = 0;

/// One balancing run over borrowed input.
///
/// The caller's slices are never reordered; sorting happens on copies.
#[derive(Debug, Clone)]
pub struct CustomerSuccessBalancing<'a> {
    managers: &'a [Manager],
    customers: &'a [Customer],
    away: &'a [ManagerId],
    limits: BalanceLimits,
}

impl<'a> CustomerSuccessBalancing<'a> {
    pub fn new(managers: &'a [Manager], customers: &'a [Customer], away: &'a [ManagerId]) -> Self {
        Self {
            managers,
            customers,
            away,
            limits: BalanceLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: BalanceLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &BalanceLimits {
        &self.limits
    }

    pub fn validate(&self) -> Result<(), BalanceError> {
        validation::validate(self.managers, self.customers, self.away, &self.limits).map_err(
            |reason| {
                tracing::debug!(%reason, "balancer input rejected");
                BalanceError::from(reason)
            },
        )
    }

    /// Validate, then count customers per available manager.
    pub fn distribute(&self) -> Result<DistributionMap, BalanceError> {
        self.validate()?;
        Ok(distribution::distribute(self.managers, self.customers, self.away))
    }

    /// Id of the manager serving the most customers, or [`NO_MANAGER`] on a tie.
    pub fn execute(&self) -> Result<ManagerId, BalanceError> {
        tracing::debug!(
            managers = self.managers.len(),
            customers = self.customers.len(),
            away = self.away.len(),
            "balancing customers"
        );

        let map = self.distribute()?;
        let busiest = ranking::busiest_manager(&map);

        match busiest {
            Some(manager_id) => {
                tracing::debug!(manager_id, count = map.get(manager_id), "busiest manager found")
            }
            None => tracing::debug!(managers = map.len(), "no single busiest manager"),
        }

        Ok(busiest.unwrap_or(NO_MANAGER))
    }
}
