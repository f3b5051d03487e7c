//! Errors returned by the balancer.

use thiserror::Error;

use crate::model::{CustomerId, ManagerId, Score};

/// Why an input set was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("invalid amount of managers: {count}, must be between 1 and {max}")]
    ManagerCount { count: usize, max: usize },
    #[error("too many managers away: {away} of {managers}, at most {limit} allowed")]
    TooManyAway {
        away: usize,
        managers: usize,
        limit: usize,
    },
    #[error("duplicate manager score {score} (manager {id})")]
    DuplicateManagerScore { id: ManagerId, score: Score },
    #[error("manager {id} score {score} must be between 1 and {max}")]
    ManagerScoreOutOfRange { id: ManagerId, score: Score, max: Score },
    #[error("manager id {id} must be between 1 and {max}")]
    ManagerIdOutOfRange { id: ManagerId, max: ManagerId },
    #[error("invalid amount of customers: {count}, must be between 1 and {max}")]
    CustomerCount { count: usize, max: usize },
    #[error("customer id {id} must be between 1 and {max}")]
    CustomerIdOutOfRange { id: CustomerId, max: CustomerId },
    #[error("customer {id} score {score} must be between 1 and {max}")]
    CustomerScoreOutOfRange {
        id: CustomerId,
        score: Score,
        max: Score,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}
