//! Test fixtures for cs-balancer.
//!
//! Records are built from bare score lists: id = position + 1.

#![allow(dead_code)]

use cs_balancer::{Customer, Manager};

pub fn build_managers(scores: &[u32]) -> Vec<Manager> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| Manager::new(index as u32 + 1, score))
        .collect()
}

pub fn build_customers(scores: &[u32]) -> Vec<Customer> {
    scores
        .iter()
        .enumerate()
        .map(|(index, &score)| Customer::new(index as u32 + 1, score))
        .collect()
}

/// The ten-customer set shared by most scenarios.
pub fn standard_customers() -> Vec<Customer> {
    build_customers(&[10, 10, 10, 20, 20, 30, 30, 30, 20, 60])
}
