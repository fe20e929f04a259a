//! Anchor system: rope/anchor condition and adequacy checks.
//!
//! The system is bound to a [`Hull`](crate::hull::Hull) only at
//! construction, when it snapshots the hull length to derive the required
//! anchor weight (1 kg per metre). The snapshot is never re-read, so a
//! later change to the hull does not ripple into an existing anchor system.

use serde::{Deserialize, Serialize};

use crate::check::CheckOutcome;
use crate::error::InvalidArgument;
use crate::hull::Hull;

/// The rope must be at least this many times the reservoir depth.
const ROPE_LENGTH_DEPTH_FACTOR: f32 = 3.0;

/// Condition of a rope or anchor. Only ever upgraded, never repaired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum DamageLevel {
    Intact = 0,
    Minor = 1,
    Critical = 2,
}

impl DamageLevel {
    /// Map a raw severity (1 = minor, 2 = critical) onto a level.
    fn from_severity(severity: u8) -> Result<Self, InvalidArgument> {
        match severity {
            1 => Ok(DamageLevel::Minor),
            2 => Ok(DamageLevel::Critical),
            _ => Err(InvalidArgument::AnchorSeverityOutOfRange(severity)),
        }
    }
}

/// Anchoring equipment for one boat in one reservoir.
///
/// All dimensional parameters are fixed at construction; only the two
/// damage levels mutate, and only monotonically upward. There is no repair
/// path for either — worn anchoring gear gets replaced, not patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnchorSystem {
    reservoir_depth: f32,
    rope_length: f32,
    anchor_weight: f32,
    required_anchor_weight: f32,
    rope_damage: DamageLevel,
    anchor_damage: DamageLevel,
}

impl AnchorSystem {
    /// Build an anchor system for the given hull.
    ///
    /// Depths and lengths are in metres, weights in kilograms. The hull is
    /// borrowed only long enough to snapshot its length.
    pub fn new(reservoir_depth: f32, rope_length: f32, anchor_weight: f32, hull: &Hull) -> Self {
        Self {
            reservoir_depth,
            rope_length,
            anchor_weight,
            // 1 kg of anchor per metre of hull.
            required_anchor_weight: hull.boat_length(),
            rope_damage: DamageLevel::Intact,
            anchor_damage: DamageLevel::Intact,
        }
    }

    pub fn reservoir_depth(&self) -> f32 {
        self.reservoir_depth
    }

    pub fn rope_length(&self) -> f32 {
        self.rope_length
    }

    pub fn anchor_weight(&self) -> f32 {
        self.anchor_weight
    }

    /// Required anchor weight as frozen at construction.
    pub fn required_anchor_weight(&self) -> f32 {
        self.required_anchor_weight
    }

    pub fn rope_damage(&self) -> DamageLevel {
        self.rope_damage
    }

    pub fn anchor_damage(&self) -> DamageLevel {
        self.anchor_damage
    }

    /// Is the rope long enough to anchor in this reservoir?
    pub fn check_rope_length(&self) -> CheckOutcome {
        let min_length = self.reservoir_depth * ROPE_LENGTH_DEPTH_FACTOR;
        if self.rope_length >= min_length {
            CheckOutcome::pass("anchor rope is long enough")
        } else {
            CheckOutcome::fail(format!(
                "rope is too short, minimum length: {} m",
                min_length
            ))
        }
    }

    /// Is the anchor heavy enough for this hull?
    pub fn check_anchor_weight(&self) -> CheckOutcome {
        if self.anchor_weight >= self.required_anchor_weight {
            CheckOutcome::pass("anchor is heavy enough")
        } else {
            CheckOutcome::fail(format!(
                "anchor is too light, required: {} kg",
                self.required_anchor_weight
            ))
        }
    }

    /// Rope wear verdict. Minor damage still passes.
    pub fn check_rope_condition(&self) -> CheckOutcome {
        match self.rope_damage {
            DamageLevel::Intact => CheckOutcome::pass("rope is in good condition"),
            DamageLevel::Minor => CheckOutcome::pass("rope has minor damage"),
            DamageLevel::Critical => {
                CheckOutcome::fail("rope has critical damage, needs replacement")
            }
        }
    }

    /// Anchor wear verdict. Minor damage still passes.
    pub fn check_anchor_condition(&self) -> CheckOutcome {
        match self.anchor_damage {
            DamageLevel::Intact => CheckOutcome::pass("anchor is in good condition"),
            DamageLevel::Minor => CheckOutcome::pass("anchor has minor damage"),
            DamageLevel::Critical => CheckOutcome::fail("anchor has critical damage, needs repair"),
        }
    }

    /// Run every check in fixed order and surface the first failure.
    ///
    /// Order is rope length, anchor weight, rope condition, anchor
    /// condition — which failure message a caller sees depends on it.
    pub fn is_system_ok(&self) -> CheckOutcome {
        let checks = [
            self.check_rope_length(),
            self.check_anchor_weight(),
            self.check_rope_condition(),
            self.check_anchor_condition(),
        ];
        for check in checks {
            if !check.passed {
                return check;
            }
        }
        CheckOutcome::pass("anchor system fully OK")
    }

    /// Record rope wear. Severity must be 1 (minor) or 2 (critical); the
    /// level only ever moves upward.
    pub fn add_rope_damage(&mut self, severity: u8) -> Result<(), InvalidArgument> {
        let level = DamageLevel::from_severity(severity)?;
        self.rope_damage = self.rope_damage.max(level);
        Ok(())
    }

    /// Record anchor wear, with the same rules as [`add_rope_damage`].
    ///
    /// [`add_rope_damage`]: AnchorSystem::add_rope_damage
    pub fn add_anchor_damage(&mut self, severity: u8) -> Result<(), InvalidArgument> {
        let level = DamageLevel::from_severity(severity)?;
        self.anchor_damage = self.anchor_damage.max(level);
        Ok(())
    }
}
