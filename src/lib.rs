//! # Market Models
//!
//! Supply-and-demand market models built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! The reference model is a linear gasoline market: solve for the free-market
//! equilibrium, find the largest per-unit tax a regulator can levy before tax
//! revenue would exceed seller revenue, and report the revenue split under
//! any admissible tax.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! only moves to [`support`] once more than one model needs it.

pub mod models;
pub mod support;
