//! Full runs over the fixed four-professor week.

use u_slotfind::fitness::FitnessMode;
use u_slotfind::ga::{SearchConfig, SlotSearchRunner, Termination};
use u_slotfind::report::{Outcome, SlotReport};
use u_slotfind::schedule::{demo, ProfessorSchedule, RandomScheduleConfig};
use u_slotfind::{ConfigError, SlotError};

fn friday_config(seed: u64) -> SearchConfig {
    SearchConfig::default()
        .with_days(["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"])
        .with_window(8.0, 18.0)
        .with_granularity(0.5)
        .with_slot_duration(2.0)
        .with_fitness_mode(FitnessMode::Binary)
        .with_population_size(50)
        .with_max_generations(200)
        .with_mutation_rate(0.1)
        .with_seed(seed)
}

#[test]
fn test_friday_morning_is_found() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("u_slotfind=debug")
        .with_test_writer()
        .try_init();

    let schedules = demo::four_professors().unwrap();
    let result = SlotSearchRunner::run(&friday_config(2024), &schedules).unwrap();
    let report = SlotReport::from_result(&result).with_schedules(&schedules);

    let found = report.found_slot.expect("a common slot exists");
    assert_eq!(found.day, "Viernes");
    assert_eq!(found.start_time, "09:00");
    assert_eq!(found.end_time, "11:00");
    assert_eq!(found.num_professors_free, 4);
    assert!(report.generations_ran <= 200);
    assert_eq!(report.termination, Termination::Solved);
}

#[test]
fn test_friday_found_across_seeds() {
    let schedules = demo::four_professors().unwrap();
    for seed in 0..10 {
        let result = SlotSearchRunner::run(&friday_config(seed), &schedules).unwrap();
        let slot = result.found_slot().expect("a common slot exists");
        assert_eq!((slot.day.as_str(), slot.start_label()), ("Viernes", "09:00".to_string()));
    }
}

#[test]
fn test_report_round_trips_to_candidate() {
    let schedules = demo::four_professors().unwrap();
    let result = SlotSearchRunner::run(&friday_config(9), &schedules).unwrap();
    let report = SlotReport::from_result(&result);

    let located = result
        .space
        .locate(&report.best_slot.day, &report.best_slot.start_time);
    assert_eq!(located, Some(result.best.candidate));
}

#[test]
fn test_blocked_friday_has_no_common_slot() {
    let mut schedules = demo::four_professors().unwrap();
    schedules.push(
        ProfessorSchedule::new("Profesor 5")
            .with_busy("Viernes", 9.0, 10.0)
            .unwrap(),
    );
    let config = friday_config(11).with_max_generations(60);
    let result = SlotSearchRunner::run(&config, &schedules).unwrap();
    let report = SlotReport::from_result(&result);

    assert_eq!(result.termination, Termination::BudgetExhausted);
    assert_eq!(report.outcome, Outcome::NoSlot);
    assert!(report.found_slot.is_none());
    assert_eq!(report.generations_ran, 60);
}

#[test]
fn test_random_professors_counting() {
    let config = SearchConfig::default()
        .with_seed(77)
        .with_slot_duration(1.0)
        .with_max_generations(100);
    let professors = RandomScheduleConfig::default().with_professor_count(10);
    let (schedules, result) = SlotSearchRunner::run_random(&config, &professors).unwrap();
    let report = SlotReport::from_result(&result).with_schedules(&schedules);

    assert_eq!(report.professor_schedules.len(), 10);
    assert_eq!(report.max_score, 10);
    assert_eq!(report.best_slot.num_professors_free as u32, report.best_score);
    match report.outcome {
        Outcome::CommonSlot => assert_eq!(report.best_score, 10),
        Outcome::PartialSlot => assert!(report.best_score > 0 && report.best_score < 10),
        Outcome::NoSlot => assert_eq!(report.best_score, 0),
    }
}

#[test]
fn test_configuration_errors_are_distinct() {
    let schedules = demo::four_professors().unwrap();
    let err = SlotSearchRunner::run(&friday_config(1).with_population_size(0), &schedules)
        .unwrap_err();
    assert!(matches!(err, SlotError::InvalidConfig(_)));

    let err = SlotSearchRunner::run(&friday_config(1).with_slot_duration(12.0), &schedules)
        .unwrap_err();
    assert!(err.is_config());

    let err = SlotSearchRunner::run(&friday_config(1).with_granularity(1e-9), &schedules)
        .unwrap_err();
    assert_eq!(err, SlotError::InvalidConfig(ConfigError::Granularity(1e-9)));
}
