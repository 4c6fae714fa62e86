//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod brute_force;
pub mod census;
pub mod chain;
pub mod histogram;
pub mod set_store;
