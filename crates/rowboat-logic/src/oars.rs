//! Oar pair dimensions, damage tracking, rowing suitability.
//!
//! A rowboat carries exactly two oars. Each keeps its own sparse damage
//! map (absent location == no damage, entries removed when repaired to
//! zero). Suitability for rowing is an aggregate over matched dimensions,
//! weight/length ceilings, and the absence of critical damage.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::InvalidArgument;

/// Maximum permissible weight of a single oar, in kilograms.
pub const MAX_WEIGHT_PER_OAR: f32 = 3.0;

/// Maximum permissible length of a single oar, in metres.
pub const MAX_OAR_LENGTH: f32 = 2.0;

/// Which of the pair an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OarId {
    Port,
    Starboard,
}

/// Where on an oar a damage event landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OarLocation {
    Blade,
    Shaft,
    Grip,
}

/// Damage at or above this severity counts as critical.
const CRITICAL_SEVERITY: u32 = 2;

/// One oar: fixed dimensions plus accumulated damage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oar {
    length: f32,
    weight: f32,
    damages: HashMap<OarLocation, u32>,
}

impl Oar {
    fn new(length: f32, weight: f32) -> Self {
        Self {
            length,
            weight,
            damages: HashMap::new(),
        }
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Accumulated damage severity at a location (0 when absent).
    pub fn damage_at(&self, location: OarLocation) -> u32 {
        self.damages.get(&location).copied().unwrap_or(0)
    }

    fn has_critical_damage(&self) -> bool {
        self.damages.values().any(|&s| s >= CRITICAL_SEVERITY)
    }
}

/// The rowboat's pair of oars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Oars {
    port: Oar,
    starboard: Oar,
}

impl Oars {
    /// Build a pair from each oar's length (metres) and weight (kilograms).
    pub fn new(
        port_length: f32,
        starboard_length: f32,
        port_weight: f32,
        starboard_weight: f32,
    ) -> Self {
        Self {
            port: Oar::new(port_length, port_weight),
            starboard: Oar::new(starboard_length, starboard_weight),
        }
    }

    pub fn oar(&self, id: OarId) -> &Oar {
        match id {
            OarId::Port => &self.port,
            OarId::Starboard => &self.starboard,
        }
    }

    fn oar_mut(&mut self, id: OarId) -> &mut Oar {
        match id {
            OarId::Port => &mut self.port,
            OarId::Starboard => &mut self.starboard,
        }
    }

    /// Do the two oars have identical length and identical weight?
    pub fn same_oars(&self) -> bool {
        self.port.length == self.starboard.length && self.port.weight == self.starboard.weight
    }

    /// Is the combined weight within the ceiling for a pair?
    pub fn within_permissible_weight(&self) -> bool {
        self.port.weight + self.starboard.weight <= MAX_WEIGHT_PER_OAR * 2.0
    }

    /// Is the combined length within the ceiling for a pair?
    pub fn suitable_length(&self) -> bool {
        self.port.length + self.starboard.length <= MAX_OAR_LENGTH * 2.0
    }

    /// Record a damage event on one oar. Severity must be in 1..=3
    /// (1 = scratch, 3 = break); it accumulates at the location.
    pub fn add_damage(
        &mut self,
        id: OarId,
        location: OarLocation,
        severity: u32,
    ) -> Result<(), InvalidArgument> {
        if !(1..=3).contains(&severity) {
            return Err(InvalidArgument::OarSeverityOutOfRange(severity));
        }
        *self.oar_mut(id).damages.entry(location).or_insert(0) += severity;
        Ok(())
    }

    /// Repair one oar's location by up to `severity` points, floored at
    /// zero; the entry is dropped at zero. No-op when the location carries
    /// no damage.
    pub fn repair(&mut self, id: OarId, location: OarLocation, severity: u32) {
        let oar = self.oar_mut(id);
        if let Some(current) = oar.damages.get_mut(&location) {
            *current = current.saturating_sub(severity);
            if *current == 0 {
                oar.damages.remove(&location);
            }
        }
    }

    /// Does any single damage entry on either oar reach critical severity?
    pub fn has_critical_damage(&self) -> bool {
        self.port.has_critical_damage() || self.starboard.has_critical_damage()
    }

    /// Aggregate rowing suitability: matched pair, within weight and
    /// length ceilings, and free of critical damage.
    pub fn oars_are_suitable(&self) -> bool {
        self.same_oars()
            && self.within_permissible_weight()
            && self.suitable_length()
            && !self.has_critical_damage()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_oars() -> Oars {
        Oars::new(1.8, 1.8, 1.5, 1.5)
    }

    #[test]
    fn test_initial_state() {
        let oars = sample_oars();
        assert_eq!(oars.oar(OarId::Port).length(), 1.8);
        assert_eq!(oars.oar(OarId::Starboard).weight(), 1.5);
        assert_eq!(oars.oar(OarId::Port).damage_at(OarLocation::Blade), 0);
        assert!(!oars.has_critical_damage());
    }

    #[test]
    fn test_same_oars() {
        assert!(sample_oars().same_oars());
        assert!(!Oars::new(1.8, 2.0, 1.5, 1.5).same_oars());
        assert!(!Oars::new(1.8, 1.8, 1.5, 1.2).same_oars());
    }

    #[test]
    fn test_within_permissible_weight() {
        assert!(sample_oars().within_permissible_weight());
        // 3.0 + 3.0 sits exactly at the pair ceiling.
        assert!(Oars::new(1.8, 1.8, 3.0, 3.0).within_permissible_weight());
        assert!(!Oars::new(1.8, 1.8, 3.5, 3.0).within_permissible_weight());
    }

    #[test]
    fn test_suitable_length() {
        assert!(sample_oars().suitable_length());
        assert!(Oars::new(2.0, 2.0, 1.5, 1.5).suitable_length());
        assert!(!Oars::new(2.5, 2.5, 1.5, 1.5).suitable_length());
    }

    #[test]
    fn test_add_damage_validates_severity() {
        let mut oars = sample_oars();
        assert_eq!(
            oars.add_damage(OarId::Port, OarLocation::Blade, 0),
            Err(InvalidArgument::OarSeverityOutOfRange(0))
        );
        assert_eq!(
            oars.add_damage(OarId::Port, OarLocation::Blade, 4),
            Err(InvalidArgument::OarSeverityOutOfRange(4))
        );
        assert_eq!(oars.oar(OarId::Port).damage_at(OarLocation::Blade), 0);
    }

    #[test]
    fn test_damage_accumulates() {
        let mut oars = sample_oars();
        oars.add_damage(OarId::Starboard, OarLocation::Shaft, 1).unwrap();
        oars.add_damage(OarId::Starboard, OarLocation::Shaft, 1).unwrap();
        assert_eq!(oars.oar(OarId::Starboard).damage_at(OarLocation::Shaft), 2);
        // Damage on the other oar stays put.
        assert_eq!(oars.oar(OarId::Port).damage_at(OarLocation::Shaft), 0);
    }

    #[test]
    fn test_repair_floors_and_removes_entry() {
        let mut oars = sample_oars();
        oars.add_damage(OarId::Port, OarLocation::Grip, 3).unwrap();
        oars.repair(OarId::Port, OarLocation::Grip, 2);
        assert_eq!(oars.oar(OarId::Port).damage_at(OarLocation::Grip), 1);

        oars.repair(OarId::Port, OarLocation::Grip, 5);
        assert_eq!(oars.oar(OarId::Port).damage_at(OarLocation::Grip), 0);

        // Repairing an untouched location is a no-op.
        oars.repair(OarId::Starboard, OarLocation::Blade, 3);
        assert_eq!(oars.oar(OarId::Starboard).damage_at(OarLocation::Blade), 0);
    }

    #[test]
    fn test_has_critical_damage() {
        let mut oars = sample_oars();
        oars.add_damage(OarId::Port, OarLocation::Blade, 1).unwrap();
        assert!(!oars.has_critical_damage());

        oars.add_damage(OarId::Port, OarLocation::Blade, 1).unwrap();
        assert!(oars.has_critical_damage());

        oars.repair(OarId::Port, OarLocation::Blade, 1);
        assert!(!oars.has_critical_damage());
    }

    #[test]
    fn test_suitability_fails_on_critical_damage() {
        let mut oars = sample_oars();
        assert!(oars.oars_are_suitable());

        oars.add_damage(OarId::Port, OarLocation::Blade, 3).unwrap();
        // Identity, weight, and length checks still pass; critical damage
        // alone sinks the verdict.
        assert!(oars.same_oars());
        assert!(oars.within_permissible_weight());
        assert!(oars.suitable_length());
        assert!(!oars.oars_are_suitable());
    }

    #[test]
    fn test_suitability_requires_matched_pair() {
        let oars = Oars::new(1.8, 1.9, 1.5, 1.5);
        assert!(oars.within_permissible_weight());
        assert!(oars.suitable_length());
        assert!(!oars.has_critical_damage());
        assert!(!oars.oars_are_suitable());
    }

    #[test]
    fn test_suitability_requires_limits() {
        assert!(!Oars::new(2.5, 2.5, 1.5, 1.5).oars_are_suitable());
        assert!(!Oars::new(1.8, 1.8, 3.5, 3.5).oars_are_suitable());
    }
}
