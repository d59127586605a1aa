//! Integration tests for the simulation core and the command layer
//!
//! These tests drive the full stack the way an interactive session does:
//! - scenario loading -> stepping -> status reporting
//! - capacity-bounded construction across settlement types
//! - policy changes mid-run, including Balanced reseeding
//! - backup/restore round trips

use reconstruction_sim::command::{Command, CommandExecutor};
use reconstruction_sim::facility::{FacilityCategory, FacilityType};
use reconstruction_sim::plan::PlanStatus;
use reconstruction_sim::policy::SelectionPolicy;
use reconstruction_sim::scenario::parse_scenario;
use reconstruction_sim::settlement::{Settlement, SettlementType};
use reconstruction_sim::simulation::Simulation;

fn run(executor: &mut CommandExecutor, sim: &mut Simulation, line: &str) -> Option<String> {
    executor
        .execute(sim, Command::parse(line).unwrap())
        .unwrap_or_else(|e| panic!("command {:?} failed: {}", line, e))
}

// ============================================================================
// Scenario -> stepping -> reporting
// ============================================================================

#[test]
fn test_scenario_drives_full_session() {
    let mut sim = parse_scenario(
        r#"
[[settlements]]
name = "Brookfield"
type = "village"

[[facilities]]
name = "well"
category = "life_quality"
cost = 2
life_quality = 1
economy = 1
environment = 1

[[plans]]
settlement = "Brookfield"
policy = "nve"
"#,
    )
    .unwrap();

    let mut executor = CommandExecutor::new();
    run(&mut executor, &mut sim, "step 2");

    let status = run(&mut executor, &mut sim, "planStatus 0").unwrap();
    assert!(status.contains("PlanStatus: AVAILABLE"));
    assert!(status.contains("LifeQualityScore: 1"));

    let summary = run(&mut executor, &mut sim, "close").unwrap();
    assert!(summary.contains("PlanID: 0"));
    assert!(summary.contains("LifeQuality_Score: 1"));
    assert!(!sim.is_running());
}

// ============================================================================
// Capacity across settlement types
// ============================================================================

/// A metropolis keeps three slots busy while a village keeps one, against
/// the same catalog.
#[test]
fn test_capacity_scales_with_settlement_type() {
    let mut sim = Simulation::new();
    sim.add_settlement(Settlement::new("Brookfield", SettlementType::Village))
        .unwrap();
    sim.add_settlement(Settlement::new("Ridgeport", SettlementType::Metropolis))
        .unwrap();
    sim.add_facility_type(FacilityType::new(
        "well",
        FacilityCategory::LifeQuality,
        5,
        1,
        0,
        0,
    ))
    .unwrap();
    sim.add_plan("Brookfield", SelectionPolicy::naive()).unwrap();
    sim.add_plan("Ridgeport", SelectionPolicy::naive()).unwrap();

    sim.step();

    let village = sim.plan(0).unwrap();
    let metropolis = sim.plan(1).unwrap();
    assert_eq!(village.under_construction().len(), 1);
    assert_eq!(metropolis.under_construction().len(), 3);
    assert_eq!(village.status(), PlanStatus::Busy);
    assert_eq!(metropolis.status(), PlanStatus::Busy);
}

/// A freed slot refills only on the next tick: per-tick completions are
/// capped at the capacity.
#[test]
fn test_freed_slot_refills_next_tick() {
    let mut sim = Simulation::new();
    sim.add_settlement(Settlement::new("Ridgeport", SettlementType::City))
        .unwrap();
    sim.add_facility_type(FacilityType::new(
        "shed",
        FacilityCategory::Economy,
        1,
        0,
        1,
        0,
    ))
    .unwrap();
    sim.add_plan("Ridgeport", SelectionPolicy::naive()).unwrap();

    for tick in 1..=4 {
        sim.step();
        let plan = sim.plan(0).unwrap();
        // Cost-1 facilities: each tick starts 2 and finishes 2
        assert_eq!(plan.operational().len(), tick * 2);
        assert_eq!(plan.economy_score(), (tick * 2) as i32);
    }
}

// ============================================================================
// Policy behavior over a mixed catalog
// ============================================================================

#[test]
fn test_sustainability_plan_only_builds_environment() {
    let mut sim = Simulation::new();
    sim.add_settlement(Settlement::new("Ridgeport", SettlementType::City))
        .unwrap();
    for (name, category) in [
        ("mill", FacilityCategory::Economy),
        ("park", FacilityCategory::Environment),
        ("school", FacilityCategory::LifeQuality),
        ("forest", FacilityCategory::Environment),
    ] {
        sim.add_facility_type(FacilityType::new(name, category, 2, 0, 0, 1))
            .unwrap();
    }
    sim.add_plan("Ridgeport", SelectionPolicy::sustainability())
        .unwrap();

    for _ in 0..6 {
        sim.step();
    }

    let plan = sim.plan(0).unwrap();
    assert!(!plan.operational().is_empty());
    for facility in plan.operational().iter().chain(plan.under_construction()) {
        assert_eq!(facility.category(), FacilityCategory::Environment);
    }
}

#[test]
fn test_switch_to_balanced_continues_from_standing() {
    let mut executor = CommandExecutor::new();
    let mut sim = Simulation::new();
    run(&mut executor, &mut sim, "settlement Brookfield 0");
    run(&mut executor, &mut sim, "facility well 0 2 1 1 1");
    run(&mut executor, &mut sim, "plan Brookfield nve");
    run(&mut executor, &mut sim, "step 1");

    // One cost-2 facility is mid-build; its (1,1,1) counts toward the seed
    let output = run(&mut executor, &mut sim, "changePolicy 0 bal").unwrap();
    assert_eq!(output, "planID: 0\npreviousPolicy: nve\nnewPolicy: bal");
    assert_eq!(
        sim.plan(0).unwrap().policy(),
        &SelectionPolicy::balanced(1, 1, 1)
    );

    // The plan keeps stepping under the new policy
    run(&mut executor, &mut sim, "step 1");
    assert_eq!(sim.plan(0).unwrap().operational().len(), 1);
}

// ============================================================================
// Backup / restore
// ============================================================================

#[test]
fn test_backup_restore_discards_later_progress() {
    let mut executor = CommandExecutor::new();
    let mut sim = Simulation::new();
    run(&mut executor, &mut sim, "settlement Brookfield 0");
    run(&mut executor, &mut sim, "facility well 0 3 1 1 1");
    run(&mut executor, &mut sim, "plan Brookfield nve");
    run(&mut executor, &mut sim, "step 1");
    run(&mut executor, &mut sim, "backup");

    // Progress past the snapshot, then add state the snapshot lacks
    run(&mut executor, &mut sim, "step 3");
    run(&mut executor, &mut sim, "settlement Ridgeport 2");
    assert_eq!(sim.plan(0).unwrap().operational().len(), 1);

    run(&mut executor, &mut sim, "restore");
    assert_eq!(sim.tick(), 1);
    assert_eq!(sim.settlements().len(), 1);
    assert_eq!(sim.plan(0).unwrap().operational().len(), 0);
    assert_eq!(sim.plan(0).unwrap().under_construction()[0].time_left(), 2);
}

#[test]
fn test_restored_simulation_replays_identically() {
    let mut sim = Simulation::new();
    sim.add_settlement(Settlement::new("Ridgeport", SettlementType::City))
        .unwrap();
    sim.add_facility_type(FacilityType::new(
        "well",
        FacilityCategory::LifeQuality,
        2,
        2,
        1,
        0,
    ))
    .unwrap();
    sim.add_facility_type(FacilityType::new(
        "mill",
        FacilityCategory::Economy,
        3,
        0,
        3,
        -1,
    ))
    .unwrap();
    sim.add_plan("Ridgeport", SelectionPolicy::balanced(0, 0, 0))
        .unwrap();
    sim.step();

    let snapshot = sim.clone();
    for _ in 0..7 {
        sim.step();
    }

    let mut replayed = snapshot;
    for _ in 0..7 {
        replayed.step();
    }

    let original = sim.plan(0).unwrap();
    let replay = replayed.plan(0).unwrap();
    assert_eq!(original.life_quality_score(), replay.life_quality_score());
    assert_eq!(original.economy_score(), replay.economy_score());
    assert_eq!(original.environment_score(), replay.environment_score());
    assert_eq!(original.operational(), replay.operational());
    assert_eq!(original.under_construction(), replay.under_construction());
}

// ============================================================================
// Growing catalog
// ============================================================================

/// Plans tolerate the catalog growing between ticks; a stalled filtered
/// policy picks up a matching entry appended later.
#[test]
fn test_catalog_growth_unstalls_filtered_policy() {
    let mut executor = CommandExecutor::new();
    let mut sim = Simulation::new();
    run(&mut executor, &mut sim, "settlement Brookfield 0");
    run(&mut executor, &mut sim, "facility park 2 2 0 0 2");
    run(&mut executor, &mut sim, "plan Brookfield eco");

    run(&mut executor, &mut sim, "step 3");
    assert!(sim.plan(0).unwrap().under_construction().is_empty());
    assert_eq!(sim.plan(0).unwrap().status(), PlanStatus::Available);

    run(&mut executor, &mut sim, "facility mill 1 2 0 3 0");
    run(&mut executor, &mut sim, "step 2");
    assert_eq!(sim.plan(0).unwrap().operational().len(), 1);
    assert_eq!(sim.plan(0).unwrap().operational()[0].name(), "mill");
}
