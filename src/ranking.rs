//! Find the manager serving the most customers.

use crate::distribution::DistributionMap;
use crate::model::ManagerId;

/// The manager with strictly the most customers, or `None` on a tie or an
/// empty distribution.
pub fn busiest_manager(map: &DistributionMap) -> Option<ManagerId> {
    busiest_of(map.iter())
}

/// Single pass over `(manager, count)` entries in any order.
///
/// An entry equal to the running maximum latches the tie flag; only a
/// strictly greater count clears it.
pub fn busiest_of(entries: impl IntoIterator<Item = (ManagerId, usize)>) -> Option<ManagerId> {
    let mut max_count = 0;
    let mut owner = None;
    let mut tied = false;

    for (manager_id, count) in entries {
        if count > max_count {
            max_count = count;
            owner = Some(manager_id);
            tied = false;
        } else if count == max_count {
            tied = true;
        }
    }

    if tied { None } else { owner }
}
