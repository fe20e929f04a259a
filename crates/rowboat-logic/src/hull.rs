//! Hull damage tracking, cargo load, watertight and buoyancy state.
//!
//! Damage is kept as a sparse map from location to accumulated severity:
//! an absent location means zero damage, and repairing a location back to
//! zero removes its entry. The watertight flag is derived by a full rescan
//! of the map after every damage or repair mutation, never incrementally.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::check::CheckOutcome;
use crate::error::InvalidArgument;

/// Where on the hull a damage event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HullLocation {
    Bottom,
    Side,
    Bow,
    Stern,
}

/// Accumulated bottom damage at or above this level breaches the hull.
const BOTTOM_BREACH_SEVERITY: u32 = 2;

/// Accumulated side/bow/stern damage at or above this level breaches the hull.
const WALL_BREACH_SEVERITY: u32 = 3;

/// A rowboat hull: fixed dimensions, accumulated damage, and cargo load.
///
/// Damage severity per event is nominally 1 (scratch), 2 (crack), or
/// 3 (breach), but `add_damage` accepts any value and lets it accumulate
/// unbounded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hull {
    boat_length: f32,
    max_load: f32,
    damages: HashMap<HullLocation, u32>,
    total_weight: f32,
    watertight: bool,
}

impl Hull {
    /// Create an undamaged, unloaded hull.
    ///
    /// `boat_length` is in metres, `max_load` in kilograms; both are fixed
    /// for the lifetime of the hull.
    pub fn new(boat_length: f32, max_load: f32) -> Self {
        Self {
            boat_length,
            max_load,
            damages: HashMap::new(),
            total_weight: 0.0,
            watertight: true,
        }
    }

    /// Hull length in metres. The anchor system derives its required
    /// anchor weight from this, at 1 kg per metre.
    pub fn boat_length(&self) -> f32 {
        self.boat_length
    }

    /// Cargo capacity ceiling in kilograms.
    pub fn max_load(&self) -> f32 {
        self.max_load
    }

    /// Current cargo mass in kilograms.
    pub fn total_weight(&self) -> f32 {
        self.total_weight
    }

    /// Accumulated damage severity at a location (0 when absent).
    pub fn damage_at(&self, location: HullLocation) -> u32 {
        self.damages.get(&location).copied().unwrap_or(0)
    }

    /// Number of locations currently carrying damage.
    pub fn damaged_location_count(&self) -> usize {
        self.damages.len()
    }

    /// Record a damage event, accumulating severity at the location.
    pub fn add_damage(&mut self, location: HullLocation, severity: u32) {
        *self.damages.entry(location).or_insert(0) += severity;
        self.update_watertight();
    }

    /// Repair a location by up to `severity` points, floored at zero.
    ///
    /// The entry is dropped entirely once it reaches zero. A location with
    /// no recorded damage is left untouched.
    pub fn repair(&mut self, location: HullLocation, severity: u32) {
        if let Some(current) = self.damages.get_mut(&location) {
            *current = current.saturating_sub(severity);
            if *current == 0 {
                self.damages.remove(&location);
            }
            self.update_watertight();
        }
    }

    /// Current watertight status, as derived after the last mutation.
    pub fn is_watertight(&self) -> bool {
        self.watertight
    }

    /// Load cargo. Rejects negative weight before mutating.
    pub fn add_cargo(&mut self, weight: f32) -> Result<(), InvalidArgument> {
        if weight < 0.0 {
            return Err(InvalidArgument::NegativeCargoWeight(weight));
        }
        self.total_weight += weight;
        Ok(())
    }

    /// Unload cargo. Rejects negative weight before mutating.
    ///
    /// No floor is enforced on the resulting total: unloading more than
    /// was loaded drives it negative.
    pub fn remove_cargo(&mut self, weight: f32) -> Result<(), InvalidArgument> {
        if weight < 0.0 {
            return Err(InvalidArgument::NegativeCargoWeight(weight));
        }
        self.total_weight -= weight;
        Ok(())
    }

    /// Whether the current cargo load keeps the boat afloat.
    pub fn check_buoyancy(&self) -> CheckOutcome {
        if self.total_weight <= self.max_load {
            CheckOutcome::pass("cargo within limits, boat stays afloat")
        } else {
            CheckOutcome::fail("overloaded, boat is going to sink")
        }
    }

    /// Rescan the whole damage map and recompute the watertight flag.
    ///
    /// Deliberately a full scan rather than an incremental update of the
    /// just-modified location.
    fn update_watertight(&mut self) {
        self.watertight = true;
        for (location, severity) in &self.damages {
            let breached = match location {
                HullLocation::Bottom => *severity >= BOTTOM_BREACH_SEVERITY,
                HullLocation::Side | HullLocation::Bow | HullLocation::Stern => {
                    *severity >= WALL_BREACH_SEVERITY
                }
            };
            if breached {
                self.watertight = false;
                break;
            }
        }
    }
}
