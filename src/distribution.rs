//! Greedy customer distribution.
//!
//! Available managers and customers are each sorted by score, then merged in
//! a single pass: every customer goes to the lowest-score available manager
//! whose score is at least the customer's. Customers above every available
//! manager's score are left unassigned.

use std::collections::{BTreeMap, HashSet};

use crate::model::{Customer, Manager, ManagerId};
use crate::traits::{Scored, sorted_by_score};

/// Number of customers assigned to each manager in one run.
///
/// Only managers with at least one customer are present. Iteration is in
/// ascending manager id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistributionMap {
    counts: BTreeMap<ManagerId, usize>,
}

impl DistributionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Customers assigned to `manager_id`, or 0 if none.
    pub fn get(&self, manager_id: ManagerId) -> usize {
        self.counts.get(&manager_id).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ManagerId, usize)> + '_ {
        self.counts.iter().map(|(&id, &count)| (id, count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total customers assigned across all managers.
    pub fn assigned_total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Add `count` customers to `manager_id`. Zero counts are not recorded.
    pub fn record(&mut self, manager_id: ManagerId, count: usize) {
        if count == 0 {
            return;
        }
        *self.counts.entry(manager_id).or_insert(0) += count;
    }
}

impl FromIterator<(ManagerId, usize)> for DistributionMap {
    fn from_iter<I: IntoIterator<Item = (ManagerId, usize)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (id, count) in iter {
            map.record(id, count);
        }
        map
    }
}

/// Managers not listed in `away`, sorted ascending by score.
pub fn sorted_available_managers(managers: &[Manager], away: &[ManagerId]) -> Vec<Manager> {
    let away: HashSet<ManagerId> = away.iter().copied().collect();
    sorted_by_score(
        managers
            .iter()
            .copied()
            .filter(|manager| !away.contains(&manager.id)),
    )
}

/// A copy of `customers` sorted ascending by score.
pub fn sorted_customers(customers: &[Customer]) -> Vec<Customer> {
    sorted_by_score(customers.iter().copied())
}

/// Distribute customers over available managers.
///
/// Input is assumed to be validated; nothing here can fail.
pub fn distribute(
    managers: &[Manager],
    customers: &[Customer],
    away: &[ManagerId],
) -> DistributionMap {
    let managers = sorted_available_managers(managers, away);
    let customers = sorted_customers(customers);
    merge(&managers, &customers)
}

/// Single-cursor merge of two score-sorted sequences.
fn merge<C: Scored>(managers: &[Manager], customers: &[C]) -> DistributionMap {
    let mut map = DistributionMap::new();
    let mut cursor = 0;

    for manager in managers {
        let start = cursor;
        while cursor < customers.len() && customers[cursor].score() <= manager.score {
            cursor += 1;
        }
        map.record(manager.id, cursor - start);
    }

    tracing::trace!(
        assigned = cursor,
        unassigned = customers.len() - cursor,
        managers = map.len(),
        "customers distributed"
    );

    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn managers(scores: &[u32]) -> Vec<Manager> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Manager::new(i as u32 + 1, score))
            .collect()
    }

    fn customers(scores: &[u32]) -> Vec<Customer> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| Customer::new(i as u32 + 1, score))
            .collect()
    }

    #[test]
    fn test_customer_goes_to_lowest_qualifying_manager() {
        let roster = managers(&[60, 20, 95, 75]);
        let map = distribute(&roster, &customers(&[90, 20, 70, 40, 60, 10]), &[]);
        // 10, 20 -> manager 2; 40, 60 -> manager 1; 70 -> manager 4; 90 -> manager 3
        assert_eq!(map.get(2), 2);
        assert_eq!(map.get(1), 2);
        assert_eq!(map.get(4), 1);
        assert_eq!(map.get(3), 1);
    }

    #[test]
    fn test_away_managers_are_skipped() {
        let roster = managers(&[60, 20, 95, 75]);
        let map = distribute(&roster, &customers(&[90, 20, 70, 40, 60, 10]), &[2, 4]);
        assert_eq!(map.get(1), 4);
        assert_eq!(map.get(3), 2);
        assert_eq!(map.get(2), 0);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_customers_above_every_manager_are_dropped() {
        let map = distribute(&managers(&[3, 4, 5]), &customers(&[1, 10, 60]), &[]);
        assert_eq!(map.assigned_total(), 1);
        assert_eq!(map.get(1), 1);
    }

    #[test]
    fn test_managers_without_customers_are_absent() {
        let map = distribute(&managers(&[10, 20, 30]), &customers(&[25, 26]), &[]);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![(3, 2)]);
    }

    #[test]
    fn test_equal_scores_are_served() {
        let map = distribute(&managers(&[50]), &customers(&[50, 50, 51]), &[]);
        assert_eq!(map.get(1), 2);
    }

    #[test]
    fn test_caller_slices_keep_their_order() {
        let roster = managers(&[60, 20, 95]);
        let queue = customers(&[90, 20, 70]);
        let roster_before = roster.clone();
        let queue_before = queue.clone();
        distribute(&roster, &queue, &[]);
        assert_eq!(roster, roster_before);
        assert_eq!(queue, queue_before);
    }

    #[test]
    fn test_sorted_available_managers_filters_and_orders() {
        let sorted = sorted_available_managers(&managers(&[60, 20, 95, 75]), &[3]);
        let scores: Vec<u32> = sorted.iter().map(|m| m.score).collect();
        assert_eq!(scores, vec![20, 60, 75]);
    }

    #[test]
    fn test_record_ignores_zero() {
        let mut map = DistributionMap::new();
        map.record(7, 0);
        assert!(map.is_empty());
        map.record(7, 2);
        map.record(7, 1);
        assert_eq!(map.get(7), 3);
    }
}
