//! Integration tests across all three boat components.
//!
//! Exercises: Hull → AnchorSystem binding, plus end-to-end pre-departure
//! inspection scenarios combining damage, cargo, and equipment checks.

use rowboat_logic::anchor::{AnchorSystem, DamageLevel};
use rowboat_logic::hull::{Hull, HullLocation};
use rowboat_logic::oars::{OarId, OarLocation, Oars};

// ── Helpers ────────────────────────────────────────────────────────────

fn standard_hull() -> Hull {
    Hull::new(5.0, 200.0)
}

fn standard_oars() -> Oars {
    Oars::new(1.8, 1.8, 1.5, 1.5)
}

// ── Cross-component scenarios ──────────────────────────────────────────

#[test]
fn fresh_boat_passes_every_inspection() {
    let hull = standard_hull();
    let anchor = AnchorSystem::new(10.0, 35.0, 5.0, &hull);
    let oars = standard_oars();

    assert!(hull.is_watertight());
    assert!(hull.check_buoyancy().passed);
    assert!(anchor.check_rope_length().passed);
    assert!(anchor.check_anchor_weight().passed);
    let verdict = anchor.is_system_ok();
    assert!(verdict.passed);
    assert!(verdict.message.contains("system fully OK"));
    assert!(oars.oars_are_suitable());
}

#[test]
fn anchor_sizing_follows_hull_length() {
    // 1 kg of anchor per metre of hull: a 5 kg anchor serves a 5 m hull
    // but not a 6 m one.
    let small = Hull::new(5.0, 200.0);
    let large = Hull::new(6.0, 260.0);

    assert!(AnchorSystem::new(10.0, 35.0, 5.0, &small)
        .check_anchor_weight()
        .passed);
    assert!(!AnchorSystem::new(10.0, 35.0, 5.0, &large)
        .check_anchor_weight()
        .passed);
}

#[test]
fn anchor_snapshot_outlives_the_hull_borrow() {
    let mut hull = standard_hull();
    let anchor = AnchorSystem::new(10.0, 35.0, 5.0, &hull);

    // Hull can keep mutating after the anchor system is built; the
    // required anchor weight stays frozen.
    hull.add_damage(HullLocation::Bottom, 3);
    hull.add_cargo(500.0).unwrap();
    assert!(!hull.is_watertight());
    assert!(!hull.check_buoyancy().passed);
    assert_eq!(anchor.required_anchor_weight(), 5.0);
    assert!(anchor.is_system_ok().passed);
}

#[test]
fn voyage_with_mishaps_and_repairs() {
    let mut hull = standard_hull();
    let mut anchor = AnchorSystem::new(10.0, 35.0, 5.0, &hull);
    let mut oars = standard_oars();

    // Loading day: within capacity.
    hull.add_cargo(180.0).unwrap();
    assert!(hull.check_buoyancy().passed);

    // Grounding scrapes the bottom twice; the hull starts leaking.
    hull.add_damage(HullLocation::Bottom, 1);
    assert!(hull.is_watertight());
    hull.add_damage(HullLocation::Bottom, 1);
    assert!(!hull.is_watertight());

    // The rope frays on the same rocks.
    anchor.add_rope_damage(1).unwrap();
    assert!(anchor.is_system_ok().passed);
    anchor.add_rope_damage(2).unwrap();
    let verdict = anchor.is_system_ok();
    assert!(!verdict.passed);
    assert!(verdict.message.contains("replacement"));

    // A blade snaps against a rock.
    oars.add_damage(OarId::Starboard, OarLocation::Blade, 3).unwrap();
    assert!(!oars.oars_are_suitable());

    // Back ashore: patch the hull and the blade. The rope stays critical —
    // there is no repair path for anchor gear.
    hull.repair(HullLocation::Bottom, 2);
    assert!(hull.is_watertight());
    oars.repair(OarId::Starboard, OarLocation::Blade, 3);
    assert!(oars.oars_are_suitable());
    assert_eq!(anchor.rope_damage(), DamageLevel::Critical);
    assert!(!anchor.is_system_ok().passed);
}

#[test]
fn first_failing_anchor_check_wins() {
    // Rope length and anchor weight both fail: the rope-length message
    // surfaces because that check runs first.
    let hull = standard_hull();
    let anchor = AnchorSystem::new(10.0, 20.0, 1.0, &hull);

    let verdict = anchor.is_system_ok();
    assert!(!verdict.passed);
    assert!(verdict.message.contains("30"));
    assert!(!verdict.message.contains("kg"));
}

#[test]
fn cargo_symmetry_survives_interleaved_damage() {
    let mut hull = standard_hull();
    hull.add_cargo(75.0).unwrap();
    hull.add_damage(HullLocation::Side, 2);
    hull.add_cargo(25.0).unwrap();
    hull.repair(HullLocation::Side, 1);
    hull.remove_cargo(25.0).unwrap();
    hull.remove_cargo(75.0).unwrap();

    assert_eq!(hull.total_weight(), 0.0);
    assert!(hull.check_buoyancy().passed);
}
