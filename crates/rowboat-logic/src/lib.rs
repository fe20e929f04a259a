//! Pure condition and safety-check logic for a rowboat.
//!
//! This crate contains the whole domain model, independent of any runtime,
//! storage, or UI. Types take plain data and return results, making them
//! unit-testable and easy to drive from a harness or a future simulation
//! loop. Nothing here performs I/O.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`anchor`] | Anchor system: rope/anchor condition and adequacy checks |
//! | [`check`] | Shared pass/fail outcome type for safety checks |
//! | [`error`] | Invalid-argument rejection for mutating operations |
//! | [`hull`] | Hull damage tracking, cargo load, watertight and buoyancy state |
//! | [`oars`] | Oar pair dimensions, damage tracking, rowing suitability |

pub mod anchor;
pub mod check;
pub mod error;
pub mod hull;
pub mod oars;
