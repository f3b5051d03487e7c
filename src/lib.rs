//! cs-balancer core
//!
//! Distributes customers across customer-success managers by score and
//! reports the manager serving the most customers.

pub mod traits;
pub mod model;
pub mod limits;
pub mod error;
pub mod validation;
pub mod distribution;
pub mod ranking;
pub mod balancer;

pub use balancer::{CustomerSuccessBalancing, NO_MANAGER};
pub use distribution::DistributionMap;
pub use error::{BalanceError, InvalidInput};
pub use limits::BalanceLimits;
pub use model::{Customer, CustomerId, Manager, ManagerId, Score};
