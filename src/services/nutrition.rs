use crate::domain::models::{BodyMetrics, MacroBreakdown, NutritionTarget};

const DEFAULT_WEIGHT_KG: f64 = 70.0;
const DEFAULT_HEIGHT_CM: f64 = 170.0;
const DEFAULT_AGE_YEARS: f64 = 30.0;

/// Daily calorie target and macro grams from body metrics, activity level
/// and goal. Grams are derived from the unrounded calorie value; rounding
/// (half away from zero) happens only at the output edge.
pub fn calculate(metrics: &BodyMetrics, activity_level: &str, goal: &str) -> NutritionTarget {
    let bmr = mifflin_st_jeor(metrics);
    let tdee = bmr * activity_multiplier(activity_level);
    let calories = tdee + goal_adjustment(goal);

    NutritionTarget {
        calorie_target: calories.round() as i64,
        macros: macro_split(calories),
    }
}

/// Mifflin-St Jeor basal metabolic rate. Missing metrics fall back to the
/// defaults above; only "male" gets the +5 constant.
fn mifflin_st_jeor(metrics: &BodyMetrics) -> f64 {
    let weight = metrics.weight.unwrap_or(DEFAULT_WEIGHT_KG);
    let height = metrics.height.unwrap_or(DEFAULT_HEIGHT_CM);
    let age = metrics.age.unwrap_or(DEFAULT_AGE_YEARS);
    let base = 10.0 * weight + 6.25 * height - 5.0 * age;
    match metrics.gender.as_deref() {
        Some(gender) if !gender.eq_ignore_ascii_case("male") => base - 161.0,
        _ => base + 5.0,
    }
}

fn activity_multiplier(level: &str) -> f64 {
    match level.to_lowercase().as_str() {
        "sedentary" => 1.2,
        "light" => 1.375,
        "moderate" => 1.55,
        "active" => 1.725,
        "very_active" => 1.9,
        _ => 1.55,
    }
}

fn goal_adjustment(goal: &str) -> f64 {
    match goal.to_lowercase().as_str() {
        "lose" => -500.0,
        "gain" => 500.0,
        _ => 0.0,
    }
}

/// 30% protein (4 kcal/g), 25% fat (9 kcal/g), 45% carbs (4 kcal/g).
fn macro_split(calories: f64) -> MacroBreakdown {
    MacroBreakdown {
        protein: (calories * 0.30 / 4.0).round() as i64,
        fat: (calories * 0.25 / 9.0).round() as i64,
        carbs: (calories * 0.45 / 4.0).round() as i64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(weight: f64, height: f64, age: f64, gender: &str) -> BodyMetrics {
        BodyMetrics {
            weight: Some(weight),
            height: Some(height),
            age: Some(age),
            gender: Some(gender.to_string()),
        }
    }

    #[test]
    fn test_reference_male_maintain_values() {
        let m = metrics(70.0, 170.0, 30.0, "male");
        assert_eq!(mifflin_st_jeor(&m), 1673.75);

        let target = calculate(&m, "moderate", "maintain");
        // TDEE 2594.3125 rounds to 2594; grams come from the unrounded value.
        assert_eq!(target.calorie_target, 2594);
        assert_eq!(target.macros.protein, 195);
        assert_eq!(target.macros.fat, 72);
        assert_eq!(target.macros.carbs, 292);
    }

    #[test]
    fn test_non_male_gets_minus_161() {
        let m = metrics(70.0, 170.0, 30.0, "female");
        assert_eq!(mifflin_st_jeor(&m), 1673.75 - 166.0);
    }

    #[test]
    fn test_gender_comparison_ignores_case() {
        let m = metrics(70.0, 170.0, 30.0, "MALE");
        assert_eq!(mifflin_st_jeor(&m), 1673.75);
    }

    #[test]
    fn test_missing_metrics_use_defaults() {
        let target = calculate(&BodyMetrics::default(), "moderate", "maintain");
        let explicit = calculate(&metrics(70.0, 170.0, 30.0, "male"), "moderate", "maintain");
        assert_eq!(target, explicit);
    }

    #[test]
    fn test_goal_adjustments() {
        let m = metrics(70.0, 170.0, 30.0, "male");
        let maintain = calculate(&m, "moderate", "maintain").calorie_target;
        let lose = calculate(&m, "moderate", "lose").calorie_target;
        let gain = calculate(&m, "moderate", "gain").calorie_target;
        assert_eq!(maintain - lose, 500);
        assert_eq!(gain - maintain, 500);
    }

    #[test]
    fn test_unknown_activity_level_defaults_to_moderate() {
        let m = metrics(70.0, 170.0, 30.0, "male");
        assert_eq!(
            calculate(&m, "couch", "maintain"),
            calculate(&m, "moderate", "maintain")
        );
    }

    #[test]
    fn test_unknown_goal_means_no_adjustment() {
        let m = metrics(70.0, 170.0, 30.0, "male");
        assert_eq!(
            calculate(&m, "moderate", "bulk_forever"),
            calculate(&m, "moderate", "maintain")
        );
    }

    #[test]
    fn test_activity_level_ignores_case() {
        let m = metrics(70.0, 170.0, 30.0, "male");
        assert_eq!(
            calculate(&m, "Very_Active", "maintain"),
            calculate(&m, "very_active", "maintain")
        );
    }

    #[test]
    fn test_macro_calories_stay_within_rounding_tolerance() {
        // Across a spread of profiles, rounded grams re-expanded to calories
        // must not exceed 101% of the target.
        for (weight, height, age, gender) in [
            (50.0, 155.0, 22.0, "female"),
            (70.0, 170.0, 30.0, "male"),
            (95.0, 188.0, 44.0, "male"),
            (61.5, 164.0, 35.0, "other"),
        ] {
            for level in ["sedentary", "light", "moderate", "active", "very_active"] {
                for goal in ["lose", "maintain", "gain"] {
                    let target = calculate(&metrics(weight, height, age, gender), level, goal);
                    let macro_calories = (target.macros.protein * 4
                        + target.macros.fat * 9
                        + target.macros.carbs * 4) as f64;
                    assert!(
                        macro_calories <= target.calorie_target as f64 * 1.01,
                        "macros overflow target for {weight}/{level}/{goal}"
                    );
                }
            }
        }
    }
}
