//! Manager and customer records.

use serde::{Deserialize, Serialize};

use crate::traits::Scored;

pub type ManagerId = u32;
pub type CustomerId = u32;
pub type Score = u32;

/// A customer-success manager and the highest customer score they can serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Manager {
    pub id: ManagerId,
    pub score: Score,
}

impl Manager {
    pub const fn new(id: ManagerId, score: Score) -> Self {
        Self { id, score }
    }
}

impl Scored for Manager {
    fn score(&self) -> Score {
        self.score
    }
}

/// A customer and the capacity required to serve them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub score: Score,
}

impl Customer {
    pub const fn new(id: CustomerId, score: Score) -> Self {
        Self { id, score }
    }
}

impl Scored for Customer {
    fn score(&self) -> Score {
        self.score
    }
}
