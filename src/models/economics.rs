//! Economics models.
//!
//! This module contains partial-equilibrium market models.

pub mod market;
