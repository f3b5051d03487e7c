//! Core domain traits for the balancer.
//!
//! Managers and customers are both ordered by a capacity score. The distributor
//! sorts them through this trait.

use crate::model::Score;

/// A record ordered by its capacity score.
pub trait Scored {
    /// Capacity value. For a manager this is the serving threshold, for a
    /// customer the capacity it requires.
    fn score(&self) -> Score;
}

/// Copy `records` and sort the copy ascending by score.
///
/// The sort is unstable: records with equal scores end up in arbitrary
/// relative order.
pub fn sorted_by_score<T>(records: impl IntoIterator<Item = T>) -> Vec<T>
where
    T: Scored,
{
    let mut sorted: Vec<T> = records.into_iter().collect();
    sorted.sort_unstable_by_key(|record| record.score());
    sorted
}
