//! Rowboat Headless Inspection Harness
//!
//! Validates the pure boat-condition logic and the scenario data file.
//! Runs entirely in-process — no storage, no networking, no rendering.
//!
//! Usage:
//!   cargo run -p rowboat-simtest
//!   cargo run -p rowboat-simtest -- --verbose

use rowboat_logic::anchor::{AnchorSystem, DamageLevel};
use rowboat_logic::hull::{Hull, HullLocation};
use rowboat_logic::oars::{OarId, OarLocation, Oars};
use serde::Deserialize;

// ── Inspection scenarios (replayed against the logic crate) ────────────
const SCENARIOS_JSON: &str = include_str!("../../../data/inspection_scenarios.json");

#[derive(Debug, Deserialize)]
struct Scenario {
    name: String,
    hull: HullParams,
    #[serde(default)]
    hull_events: Vec<HullEvent>,
    #[serde(default)]
    cargo_loaded: f32,
    expect_watertight: bool,
    expect_buoyant: bool,
    anchor: Option<AnchorScenario>,
    oars: Option<OarScenario>,
}

#[derive(Debug, Deserialize)]
struct HullParams {
    boat_length: f32,
    max_load: f32,
}

#[derive(Debug, Deserialize)]
struct HullEvent {
    location: HullLocation,
    severity: u32,
    #[serde(default)]
    repair: bool,
}

#[derive(Debug, Deserialize)]
struct AnchorScenario {
    reservoir_depth: f32,
    rope_length: f32,
    anchor_weight: f32,
    #[serde(default)]
    events: Vec<AnchorEvent>,
    expect_ok: bool,
}

#[derive(Debug, Deserialize)]
struct AnchorEvent {
    part: AnchorPart,
    severity: u8,
}

#[derive(Debug, Deserialize)]
enum AnchorPart {
    Rope,
    Anchor,
}

#[derive(Debug, Deserialize)]
struct OarScenario {
    port_length: f32,
    starboard_length: f32,
    port_weight: f32,
    starboard_weight: f32,
    #[serde(default)]
    events: Vec<OarEvent>,
    expect_suitable: bool,
}

#[derive(Debug, Deserialize)]
struct OarEvent {
    oar: OarId,
    location: OarLocation,
    severity: u32,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    println!("=== Rowboat Inspection Harness ===\n");

    let mut results = Vec::new();

    // 1. Scenario file replay
    results.extend(replay_scenarios(verbose));

    // 2. Watertight invariant sweep
    results.extend(validate_watertight_invariant(verbose));

    // 3. Rope length boundary sweep
    results.extend(validate_rope_length_boundary(verbose));

    // 4. Damage level monotonicity
    results.extend(validate_damage_monotonicity(verbose));

    // 5. Anchor check ordering
    results.extend(validate_check_ordering(verbose));

    // 6. Repair floor and cargo symmetry
    results.extend(validate_repair_and_cargo(verbose));

    // 7. Oar suitability aggregate
    results.extend(validate_oar_suitability(verbose));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. Scenario replay ──────────────────────────────────────────────────

fn replay_scenarios(verbose: bool) -> Vec<TestResult> {
    println!("--- Inspection Scenarios ---");
    let mut results = Vec::new();

    let scenarios: Vec<Scenario> = match serde_json::from_str(SCENARIOS_JSON) {
        Ok(s) => s,
        Err(e) => {
            results.push(TestResult {
                name: "scenarios_parse".into(),
                passed: false,
                detail: format!("failed to parse scenario file: {}", e),
            });
            return results;
        }
    };

    results.push(TestResult {
        name: "scenarios_parse".into(),
        passed: !scenarios.is_empty(),
        detail: format!("{} scenarios loaded", scenarios.len()),
    });

    for scenario in &scenarios {
        if verbose {
            println!("  replaying {}", scenario.name);
        }
        results.extend(replay_one(scenario));
    }

    results
}

fn replay_one(scenario: &Scenario) -> Vec<TestResult> {
    let mut results = Vec::new();

    let mut hull = Hull::new(scenario.hull.boat_length, scenario.hull.max_load);
    for event in &scenario.hull_events {
        if event.repair {
            hull.repair(event.location, event.severity);
        } else {
            hull.add_damage(event.location, event.severity);
        }
    }
    if let Err(e) = hull.add_cargo(scenario.cargo_loaded) {
        results.push(TestResult {
            name: format!("{}_cargo", scenario.name),
            passed: false,
            detail: format!("cargo rejected: {}", e),
        });
        return results;
    }

    results.push(TestResult {
        name: format!("{}_watertight", scenario.name),
        passed: hull.is_watertight() == scenario.expect_watertight,
        detail: format!(
            "watertight={} expected={}",
            hull.is_watertight(),
            scenario.expect_watertight
        ),
    });

    let buoyancy = hull.check_buoyancy();
    results.push(TestResult {
        name: format!("{}_buoyancy", scenario.name),
        passed: buoyancy.passed == scenario.expect_buoyant,
        detail: buoyancy.message.clone(),
    });

    if let Some(anchor_scenario) = &scenario.anchor {
        let mut anchor = AnchorSystem::new(
            anchor_scenario.reservoir_depth,
            anchor_scenario.rope_length,
            anchor_scenario.anchor_weight,
            &hull,
        );
        let mut event_error = None;
        for event in &anchor_scenario.events {
            let outcome = match event.part {
                AnchorPart::Rope => anchor.add_rope_damage(event.severity),
                AnchorPart::Anchor => anchor.add_anchor_damage(event.severity),
            };
            if let Err(e) = outcome {
                event_error = Some(e);
            }
        }
        let verdict = anchor.is_system_ok();
        results.push(TestResult {
            name: format!("{}_anchor", scenario.name),
            passed: event_error.is_none() && verdict.passed == anchor_scenario.expect_ok,
            detail: match event_error {
                Some(e) => format!("damage event rejected: {}", e),
                None => verdict.message.clone(),
            },
        });
    }

    if let Some(oar_scenario) = &scenario.oars {
        let mut oars = Oars::new(
            oar_scenario.port_length,
            oar_scenario.starboard_length,
            oar_scenario.port_weight,
            oar_scenario.starboard_weight,
        );
        let mut event_error = None;
        for event in &oar_scenario.events {
            if let Err(e) = oars.add_damage(event.oar, event.location, event.severity) {
                event_error = Some(e);
            }
        }
        results.push(TestResult {
            name: format!("{}_oars", scenario.name),
            passed: event_error.is_none()
                && oars.oars_are_suitable() == oar_scenario.expect_suitable,
            detail: match event_error {
                Some(e) => format!("damage event rejected: {}", e),
                None => format!(
                    "suitable={} expected={}",
                    oars.oars_are_suitable(),
                    oar_scenario.expect_suitable
                ),
            },
        });
    }

    results
}

// ── 2. Watertight invariant ─────────────────────────────────────────────

fn validate_watertight_invariant(verbose: bool) -> Vec<TestResult> {
    println!("--- Watertight Invariant ---");
    let mut results = Vec::new();

    let locations = [
        HullLocation::Bottom,
        HullLocation::Side,
        HullLocation::Bow,
        HullLocation::Stern,
    ];

    // Sweep damage then repair at every location and severity 1..=4,
    // checking the cached flag against a recompute from the map each step.
    let mut checked = 0u32;
    let mut mismatches = 0u32;
    for &location in &locations {
        for severity in 1..=4u32 {
            let mut hull = Hull::new(5.0, 200.0);
            hull.add_damage(location, severity);
            if hull.is_watertight() != recompute_watertight(&hull) {
                mismatches += 1;
            }
            checked += 1;

            hull.repair(location, 1);
            if hull.is_watertight() != recompute_watertight(&hull) {
                mismatches += 1;
            }
            checked += 1;

            if verbose {
                println!(
                    "  {:?} severity {} → watertight={}",
                    location,
                    severity,
                    hull.is_watertight()
                );
            }
        }
    }

    results.push(TestResult {
        name: "watertight_matches_recompute".into(),
        passed: mismatches == 0,
        detail: format!("{} states checked, {} mismatches", checked, mismatches),
    });

    // Threshold spot checks: bottom breaches at 2, walls at 3.
    let mut hull = Hull::new(5.0, 200.0);
    hull.add_damage(HullLocation::Bottom, 2);
    let bottom_breaches = !hull.is_watertight();

    let mut hull = Hull::new(5.0, 200.0);
    hull.add_damage(HullLocation::Side, 2);
    let side_holds = hull.is_watertight();
    hull.add_damage(HullLocation::Side, 1);
    let side_breaches = !hull.is_watertight();

    results.push(TestResult {
        name: "watertight_thresholds".into(),
        passed: bottom_breaches && side_holds && side_breaches,
        detail: "bottom breaches at 2, side at 3".into(),
    });

    results
}

fn recompute_watertight(hull: &Hull) -> bool {
    !(hull.damage_at(HullLocation::Bottom) >= 2
        || hull.damage_at(HullLocation::Side) >= 3
        || hull.damage_at(HullLocation::Bow) >= 3
        || hull.damage_at(HullLocation::Stern) >= 3)
}

// ── 3. Rope length boundary ─────────────────────────────────────────────

fn validate_rope_length_boundary(verbose: bool) -> Vec<TestResult> {
    println!("--- Rope Length Boundary ---");
    let mut results = Vec::new();
    let hull = Hull::new(5.0, 200.0);

    let depths = [2.0f32, 5.0, 10.0, 12.5];
    let mut checked = 0u32;
    let mut wrong = 0u32;
    let mut message_wrong = 0u32;

    for &depth in &depths {
        let min = depth * 3.0;
        for rope in [min - 1.0, min - 0.5, min, min + 0.5, min + 10.0] {
            let anchor = AnchorSystem::new(depth, rope, 5.0, &hull);
            let outcome = anchor.check_rope_length();
            if outcome.passed != (rope >= min) {
                wrong += 1;
            }
            if !outcome.passed && !outcome.message.contains(&format!("{}", min)) {
                message_wrong += 1;
            }
            checked += 1;
            if verbose {
                println!("  depth={} rope={} → {}", depth, rope, outcome.message);
            }
        }
    }

    results.push(TestResult {
        name: "rope_length_boundary".into(),
        passed: wrong == 0,
        detail: format!("{} depth/rope pairs checked, {} wrong", checked, wrong),
    });
    results.push(TestResult {
        name: "rope_length_failure_message".into(),
        passed: message_wrong == 0,
        detail: "failure messages carry the computed minimum".into(),
    });

    results
}

// ── 4. Damage monotonicity ──────────────────────────────────────────────

fn validate_damage_monotonicity(verbose: bool) -> Vec<TestResult> {
    println!("--- Damage Monotonicity ---");
    let mut results = Vec::new();
    let hull = Hull::new(5.0, 200.0);

    let mut anchor = AnchorSystem::new(10.0, 35.0, 5.0, &hull);
    anchor.add_rope_damage(2).unwrap();
    anchor.add_rope_damage(1).unwrap();
    let rope_stays_critical = anchor.rope_damage() == DamageLevel::Critical;

    anchor.add_anchor_damage(1).unwrap();
    anchor.add_anchor_damage(1).unwrap();
    let anchor_stays_minor = anchor.anchor_damage() == DamageLevel::Minor;

    let severity_rejected =
        anchor.add_rope_damage(0).is_err() && anchor.add_anchor_damage(3).is_err();

    if verbose {
        println!(
            "  rope={:?} anchor={:?}",
            anchor.rope_damage(),
            anchor.anchor_damage()
        );
    }

    results.push(TestResult {
        name: "damage_levels_monotonic".into(),
        passed: rope_stays_critical && anchor_stays_minor,
        detail: "lower severity never downgrades a level".into(),
    });
    results.push(TestResult {
        name: "damage_severity_validated".into(),
        passed: severity_rejected,
        detail: "severity outside {1,2} rejected".into(),
    });

    results
}

// ── 5. Check ordering ───────────────────────────────────────────────────

fn validate_check_ordering(verbose: bool) -> Vec<TestResult> {
    println!("--- Anchor Check Ordering ---");
    let mut results = Vec::new();
    let hull = Hull::new(5.0, 200.0);

    // Both rope length and anchor weight fail: the rope-length message
    // must surface because that check runs first.
    let anchor = AnchorSystem::new(10.0, 20.0, 1.0, &hull);
    let verdict = anchor.is_system_ok();
    if verbose {
        println!("  verdict: {}", verdict.message);
    }
    results.push(TestResult {
        name: "first_failing_check_wins".into(),
        passed: !verdict.passed && verdict == anchor.check_rope_length(),
        detail: verdict.message.clone(),
    });

    // Rope condition outranks anchor condition when both are critical.
    let mut anchor = AnchorSystem::new(10.0, 35.0, 5.0, &hull);
    anchor.add_rope_damage(2).unwrap();
    anchor.add_anchor_damage(2).unwrap();
    let verdict = anchor.is_system_ok();
    results.push(TestResult {
        name: "rope_condition_before_anchor_condition".into(),
        passed: !verdict.passed && verdict.message.contains("replacement"),
        detail: verdict.message.clone(),
    });

    results
}

// ── 6. Repair floor and cargo symmetry ─────────────────────────────────

fn validate_repair_and_cargo(verbose: bool) -> Vec<TestResult> {
    println!("--- Repair Floor & Cargo ---");
    let mut results = Vec::new();

    let mut hull = Hull::new(5.0, 200.0);
    hull.add_damage(HullLocation::Bow, 1);
    hull.repair(HullLocation::Bow, 5);
    hull.repair(HullLocation::Bow, 5);
    hull.repair(HullLocation::Stern, 2);
    results.push(TestResult {
        name: "repair_floors_at_zero".into(),
        passed: hull.damaged_location_count() == 0 && hull.is_watertight(),
        detail: "over-repair and absent-location repair leave the map clean".into(),
    });

    let mut hull = Hull::new(5.0, 200.0);
    hull.add_cargo(120.0).unwrap();
    hull.add_cargo(30.0).unwrap();
    hull.remove_cargo(30.0).unwrap();
    hull.remove_cargo(120.0).unwrap();
    let balanced = hull.total_weight() == 0.0;
    let rejected = hull.add_cargo(-1.0).is_err() && hull.remove_cargo(-1.0).is_err();
    if verbose {
        println!("  total after round trip: {}", hull.total_weight());
    }
    results.push(TestResult {
        name: "cargo_round_trip".into(),
        passed: balanced && rejected,
        detail: format!("total={}, negative weights rejected", hull.total_weight()),
    });

    results
}

// ── 7. Oar suitability ──────────────────────────────────────────────────

fn validate_oar_suitability(verbose: bool) -> Vec<TestResult> {
    println!("--- Oar Suitability ---");
    let mut results = Vec::new();

    let mut oars = Oars::new(1.8, 1.8, 1.5, 1.5);
    let clean_pair_suitable = oars.oars_are_suitable();

    oars.add_damage(OarId::Port, OarLocation::Blade, 3).unwrap();
    let critical_blocks = !oars.oars_are_suitable()
        && oars.same_oars()
        && oars.within_permissible_weight()
        && oars.suitable_length();

    oars.repair(OarId::Port, OarLocation::Blade, 3);
    let repair_restores = oars.oars_are_suitable();

    let mismatched = Oars::new(1.8, 2.0, 1.5, 1.5);
    let mismatch_blocks = !mismatched.oars_are_suitable();

    if verbose {
        println!(
            "  clean={} critical_blocks={} repaired={} mismatch_blocks={}",
            clean_pair_suitable, critical_blocks, repair_restores, mismatch_blocks
        );
    }

    results.push(TestResult {
        name: "oars_suitability_aggregate".into(),
        passed: clean_pair_suitable && critical_blocks && repair_restores,
        detail: "critical damage alone blocks an otherwise matched pair".into(),
    });
    results.push(TestResult {
        name: "oars_identity_enforced".into(),
        passed: mismatch_blocks,
        detail: "mismatched pair fails suitability".into(),
    });

    results
}
