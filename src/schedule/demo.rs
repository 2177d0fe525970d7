//! Fixed schedules for demos and tests.

use super::types::ProfessorSchedule;
use crate::error::Result;

/// Four professors over `Lunes`..`Viernes`, working window 8-18.
///
/// Every day is fully covered by someone's busy blocks except Friday
/// 09:00-11:00, so for a 2 h slot at 0.5 h granularity the only slot free for
/// all four is `Viernes 09:00 - 11:00`.
pub fn four_professors() -> Result<Vec<ProfessorSchedule>> {
    Ok(vec![
        ProfessorSchedule::new("Profesor 1")
            .with_busy("Lunes", 8.0, 12.0)?
            .with_busy("Martes", 14.0, 18.0)?
            .with_busy("Miércoles", 8.0, 13.0)?
            .with_busy("Jueves", 13.0, 18.0)?
            .with_busy("Viernes", 8.0, 9.0)?,
        ProfessorSchedule::new("Profesor 2")
            .with_busy("Lunes", 12.0, 18.0)?
            .with_busy("Martes", 8.0, 11.0)?
            .with_busy("Miércoles", 13.0, 16.0)?
            .with_busy("Jueves", 8.0, 10.0)?
            .with_busy("Viernes", 11.0, 13.0)?,
        ProfessorSchedule::new("Profesor 3")
            .with_busy("Lunes", 10.0, 14.0)?
            .with_busy("Martes", 11.0, 14.0)?
            .with_busy("Miércoles", 16.0, 18.0)?
            .with_busy("Jueves", 10.0, 13.0)?
            .with_busy("Viernes", 13.0, 15.0)?,
        ProfessorSchedule::new("Profesor 4")
            .with_busy("Lunes", 15.0, 17.0)?
            .with_busy("Martes", 9.0, 12.0)?
            .with_busy("Miércoles", 10.0, 12.0)?
            .with_busy("Jueves", 9.0, 11.0)?
            .with_busy("Viernes", 15.0, 18.0)?,
    ])
}

/// Single-day schedules with whole-hour blocks and no common 2 h gap.
///
/// The union of busy blocks covers 8-18 completely, so a search over
/// `["Lunes"]` can at best free some of the professors.
pub fn single_day_overlapping() -> Result<Vec<ProfessorSchedule>> {
    Ok(vec![
        ProfessorSchedule::new("profesor1")
            .with_busy("Lunes", 8.0, 10.0)?
            .with_busy("Lunes", 14.0, 16.0)?,
        ProfessorSchedule::new("profesor2")
            .with_busy("Lunes", 9.0, 11.0)?
            .with_busy("Lunes", 13.0, 15.0)?,
        ProfessorSchedule::new("profesor3")
            .with_busy("Lunes", 11.0, 13.0)?
            .with_busy("Lunes", 15.0, 17.0)?,
        ProfessorSchedule::new("profesor4")
            .with_busy("Lunes", 10.0, 12.0)?
            .with_busy("Lunes", 16.0, 18.0)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAYS: [&str; 5] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes"];

    #[test]
    fn test_only_friday_nine_is_common() {
        let profs = four_professors().unwrap();
        let mut common = Vec::new();
        for day in DAYS {
            for k in 0..=16 {
                let start = 8.0 + k as f64 * 0.5;
                if profs.iter().all(|p| p.is_free(day, start, start + 2.0)) {
                    common.push((day, start));
                }
            }
        }
        assert_eq!(common, vec![("Viernes", 9.0)]);
    }

    #[test]
    fn test_single_day_has_no_common_slot() {
        let profs = single_day_overlapping().unwrap();
        for k in 0..=8 {
            let start = 8.0 + k as f64;
            assert!(profs.iter().any(|p| p.is_occupied("Lunes", start, start + 2.0)));
        }
    }
}
