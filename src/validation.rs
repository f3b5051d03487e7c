//! Input validation.
//!
//! Checks run in a fixed order and the first violation wins: manager count,
//! absence limit, each manager in list order, customer count, then each
//! customer in list order.

use std::collections::HashSet;

use crate::error::InvalidInput;
use crate::limits::BalanceLimits;
use crate::model::{Customer, Manager, ManagerId};

pub fn validate(
    managers: &[Manager],
    customers: &[Customer],
    away: &[ManagerId],
    limits: &BalanceLimits,
) -> Result<(), InvalidInput> {
    validate_managers(managers, away, limits)?;
    validate_customers(customers, limits)
}

fn validate_managers(
    managers: &[Manager],
    away: &[ManagerId],
    limits: &BalanceLimits,
) -> Result<(), InvalidInput> {
    let count = managers.len();
    if !(1..=limits.max_managers).contains(&count) {
        return Err(InvalidInput::ManagerCount {
            count,
            max: limits.max_managers,
        });
    }

    let away_limit = BalanceLimits::max_away(count);
    if away.len() > away_limit {
        return Err(InvalidInput::TooManyAway {
            away: away.len(),
            managers: count,
            limit: away_limit,
        });
    }

    let mut seen_scores = HashSet::with_capacity(count);
    for manager in managers {
        if !seen_scores.insert(manager.score) {
            return Err(InvalidInput::DuplicateManagerScore {
                id: manager.id,
                score: manager.score,
            });
        }
        if !(1..=limits.max_manager_score).contains(&manager.score) {
            return Err(InvalidInput::ManagerScoreOutOfRange {
                id: manager.id,
                score: manager.score,
                max: limits.max_manager_score,
            });
        }
        if !(1..=limits.max_manager_id).contains(&manager.id) {
            return Err(InvalidInput::ManagerIdOutOfRange {
                id: manager.id,
                max: limits.max_manager_id,
            });
        }
    }

    Ok(())
}

fn validate_customers(customers: &[Customer], limits: &BalanceLimits) -> Result<(), InvalidInput> {
    let count = customers.len();
    if !(1..=limits.max_customers).contains(&count) {
        return Err(InvalidInput::CustomerCount {
            count,
            max: limits.max_customers,
        });
    }

    for customer in customers {
        if !(1..=limits.max_customer_id).contains(&customer.id) {
            return Err(InvalidInput::CustomerIdOutOfRange {
                id: customer.id,
                max: limits.max_customer_id,
            });
        }
        if !(1..=limits.max_customer_score).contains(&customer.score) {
            return Err(InvalidInput::CustomerScoreOutOfRange {
                id: customer.id,
                score: customer.score,
                max: limits.max_customer_score,
            });
        }
    }

    Ok(())
}
