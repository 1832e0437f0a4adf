use crate::domain::models::{ExerciseRecord, PlannedExercise, UserProfile, WorkoutPlan};
use rand::seq::SliceRandom;
use rand::Rng;

/// Weekly split templates keyed by training days. Anything outside 1/2/4
/// falls back to the 3-day push/pull/legs split.
fn weekly_split(days_per_week: i64) -> &'static [(&'static str, &'static str)] {
    match days_per_week {
        1 => &[("Day 1", "Full Body")],
        2 => &[("Day 1", "Upper Body"), ("Day 2", "Lower Body")],
        4 => &[
            ("Day 1", "Upper"),
            ("Day 2", "Lower"),
            ("Day 3", "Push"),
            ("Day 4", "Pull"),
        ],
        _ => &[("Day 1", "Push"), ("Day 2", "Pull"), ("Day 3", "Legs")],
    }
}

/// Exercises per day for a fitness level; unrecognized levels land between
/// beginner and intermediate.
fn exercises_per_day(fitness_level: &str) -> usize {
    match fitness_level.to_lowercase().as_str() {
        "beginner" => 4,
        "intermediate" => 6,
        "advanced" => 8,
        _ => 5,
    }
}

/// An exercise qualifies for a day when the focus word appears anywhere in
/// its muscle group string and its equipment needs are covered. `available`
/// must already be lowercased.
fn eligible_for<'a>(
    catalog: &'a [ExerciseRecord],
    focus: &str,
    available: &[String],
) -> Vec<&'a ExerciseRecord> {
    let focus = focus.to_lowercase();
    catalog
        .iter()
        .filter(|exercise| {
            if !exercise.muscle_groups.to_lowercase().contains(&focus) {
                return false;
            }
            let required = exercise.equipment_tags();
            required.is_empty() || required.iter().any(|tag| available.contains(tag))
        })
        .collect()
}

/// Build a weekly plan: for each day of the split, sample up to the level's
/// target count uniformly (without replacement) from the eligible exercises.
/// A day with nothing eligible stays in the plan with an empty list.
pub fn build_plan<R: Rng + ?Sized>(
    catalog: &[ExerciseRecord],
    profile: &UserProfile,
    rng: &mut R,
) -> WorkoutPlan {
    let target = exercises_per_day(&profile.fitness_level);
    let available: Vec<String> = profile
        .available_equipment
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .collect();

    let mut plan = WorkoutPlan::new();
    for (day, focus) in weekly_split(profile.days_per_week) {
        let eligible = eligible_for(catalog, focus, &available);
        let picked: Vec<PlannedExercise> = eligible
            .choose_multiple(rng, target)
            .map(|exercise| PlannedExercise::from(*exercise))
            .collect();
        plan.insert((*day).to_string(), picked);
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn record(id: i64, name: &str, muscle_groups: &str, equipment: &str) -> ExerciseRecord {
        ExerciseRecord {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            muscle_groups: muscle_groups.to_string(),
            equipment: equipment.to_string(),
            difficulty: "Beginner".to_string(),
        }
    }

    fn catalog() -> Vec<ExerciseRecord> {
        vec![
            record(1, "Push-up", "Push, Chest, Triceps", ""),
            record(2, "Overhead Press", "Push, Shoulders", "Barbell"),
            record(3, "Dumbbell Row", "Pull, Back, Biceps", "Dumbbells"),
            record(4, "Pull-up", "Pull, Back, Upper Body", "Pull-up Bar"),
            record(5, "Squat", "Legs, Glutes, Hamstrings", "Barbell, Rack"),
            record(6, "Lunge", "Legs, Glutes", ""),
            record(7, "Burpee", "Full Body, Legs, Core", ""),
            record(8, "Glute Bridge", "Lower Body, Glutes", ""),
        ]
    }

    fn profile(days: i64, level: &str, equipment: &[&str]) -> UserProfile {
        UserProfile {
            days_per_week: days,
            fitness_level: level.to_string(),
            available_equipment: equipment.iter().map(|e| e.to_string()).collect(),
            session_duration: 60,
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_split_day_counts_and_labels() {
        let catalog = catalog();
        for (days, labels) in [
            (1, vec!["Day 1"]),
            (2, vec!["Day 1", "Day 2"]),
            (3, vec!["Day 1", "Day 2", "Day 3"]),
            (4, vec!["Day 1", "Day 2", "Day 3", "Day 4"]),
        ] {
            let plan = build_plan(&catalog, &profile(days, "beginner", &[]), &mut rng());
            let keys: Vec<&str> = plan.keys().map(String::as_str).collect();
            assert_eq!(keys, labels, "wrong labels for {days} days");
        }
    }

    #[test]
    fn test_out_of_range_days_fall_back_to_three_day_split() {
        let catalog = catalog();
        for days in [0, 5, 7, -1] {
            let plan = build_plan(&catalog, &profile(days, "beginner", &[]), &mut rng());
            assert_eq!(plan.len(), 3, "expected 3-day fallback for {days} days");
        }
    }

    #[test]
    fn test_day_size_capped_by_level_target() {
        let catalog = catalog();
        let plan = build_plan(
            &catalog,
            &profile(3, "beginner", &["barbell", "dumbbells", "rack", "pull-up bar"]),
            &mut rng(),
        );
        for (day, exercises) in &plan {
            assert!(exercises.len() <= 4, "{day} exceeds beginner target");
        }
    }

    #[test]
    fn test_day_size_capped_by_eligible_count() {
        let catalog = catalog();
        // Advanced targets 8 per day but only 2 push exercises exist.
        let plan = build_plan(
            &catalog,
            &profile(3, "advanced", &["barbell", "dumbbells", "rack", "pull-up bar"]),
            &mut rng(),
        );
        assert_eq!(plan["Day 1"].len(), 2);
    }

    #[test]
    fn test_unknown_level_targets_five() {
        let mut catalog = Vec::new();
        for i in 0..10 {
            catalog.push(record(i, &format!("Push {i}"), "Push", ""));
        }
        let plan = build_plan(&catalog, &profile(3, "elite", &[]), &mut rng());
        assert_eq!(plan["Day 1"].len(), 5);
    }

    #[test]
    fn test_equipment_filter_excludes_without_gear() {
        let catalog = catalog();
        let plan = build_plan(&catalog, &profile(3, "advanced", &[]), &mut rng());
        let names: Vec<&str> = plan["Day 1"].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Push-up"], "barbell press needs a barbell");
    }

    #[test]
    fn test_equipment_filter_is_case_insensitive() {
        let catalog = vec![record(1, "Overhead Press", "Push, Shoulders", "Barbell")];
        let plan = build_plan(&catalog, &profile(3, "beginner", &["BARBELL"]), &mut rng());
        assert_eq!(plan["Day 1"].len(), 1);
    }

    #[test]
    fn test_partial_equipment_match_is_enough() {
        // Requires "Barbell, Rack"; owning just a barbell qualifies.
        let catalog = vec![record(1, "Squat", "Legs", "Barbell, Rack")];
        let plan = build_plan(&catalog, &profile(3, "beginner", &["barbell"]), &mut rng());
        assert_eq!(plan["Day 3"].len(), 1);
    }

    #[test]
    fn test_focus_match_is_substring_and_case_insensitive() {
        let catalog = vec![record(1, "Pull-up", "PULL, Back, Upper Body", "")];
        // 4-day split's "Upper" focus matches inside "Upper Body".
        let plan = build_plan(&catalog, &profile(4, "beginner", &[]), &mut rng());
        assert_eq!(plan["Day 1"].len(), 1);
        assert_eq!(plan["Day 4"].len(), 1);
    }

    #[test]
    fn test_empty_eligible_set_yields_empty_day() {
        let catalog = vec![record(1, "Push-up", "Push, Chest", "")];
        let plan = build_plan(&catalog, &profile(3, "beginner", &[]), &mut rng());
        assert!(plan["Day 2"].is_empty());
        assert!(plan["Day 3"].is_empty());
    }

    #[test]
    fn test_empty_catalog_yields_empty_plan_days() {
        let plan = build_plan(&[], &profile(2, "beginner", &[]), &mut rng());
        assert_eq!(plan.len(), 2);
        assert!(plan.values().all(Vec::is_empty));
    }

    #[test]
    fn test_seeded_rng_makes_plans_deterministic() {
        let catalog = catalog();
        let profile = profile(3, "beginner", &["barbell", "dumbbells", "rack"]);
        let first = build_plan(&catalog, &profile, &mut StdRng::seed_from_u64(7));
        let second = build_plan(&catalog, &profile, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_duplicate_picks_within_a_day() {
        let catalog = catalog();
        let plan = build_plan(
            &catalog,
            &profile(3, "advanced", &["barbell", "dumbbells", "rack", "pull-up bar"]),
            &mut rng(),
        );
        for exercises in plan.values() {
            let mut names: Vec<&str> = exercises.iter().map(|e| e.name.as_str()).collect();
            names.sort_unstable();
            let before = names.len();
            names.dedup();
            assert_eq!(before, names.len());
        }
    }
}
