use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::BTreeMap;

/// One row of the exercise catalog. Reference data, written once at seed
/// time and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ExerciseRecord {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Comma-delimited muscle group tags, e.g. "Push, Chest, Triceps".
    pub muscle_groups: String,
    /// Comma-delimited equipment tags; empty means no equipment required.
    pub equipment: String,
    pub difficulty: String,
}

impl ExerciseRecord {
    /// Required equipment tags, trimmed and lowercased.
    pub fn equipment_tags(&self) -> Vec<String> {
        self.equipment
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

fn default_days_per_week() -> i64 {
    3
}

fn default_fitness_level() -> String {
    "beginner".to_string()
}

fn default_session_duration() -> i64 {
    60
}

/// Profile payload for plan generation. Every field has a usable default so
/// a partial payload is filled in rather than rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    #[serde(default = "default_days_per_week")]
    pub days_per_week: i64,
    #[serde(default = "default_fitness_level")]
    pub fitness_level: String,
    #[serde(default)]
    pub available_equipment: Vec<String>,
    #[serde(default = "default_session_duration")]
    pub session_duration: i64,
}

/// A catalog exercise as it appears inside a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedExercise {
    pub name: String,
    pub description: String,
    pub equipment: String,
    pub difficulty: String,
}

impl From<&ExerciseRecord> for PlannedExercise {
    fn from(record: &ExerciseRecord) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            equipment: record.equipment.clone(),
            difficulty: record.difficulty.clone(),
        }
    }
}

/// Day label ("Day 1".."Day N") to the exercises picked for that day.
/// Built fresh on every request, never cached.
pub type WorkoutPlan = BTreeMap<String, Vec<PlannedExercise>>;

/// Body metrics for the nutrition calculator. Missing fields fall back to
/// 70 kg / 170 cm / 30 years / male.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BodyMetrics {
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<f64>,
    pub gender: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionTarget {
    pub calorie_target: i64,
    pub macros: MacroBreakdown,
}

/// Grams per macro, always derived from the calorie target via the fixed
/// 30/25/45 percent split.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein: i64,
    pub fat: i64,
    pub carbs: i64,
}

/// One logged training session as submitted by the client.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WorkoutData {
    /// Session timestamp; omitted means "now".
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: i64,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub exercises: Vec<ExerciseSetLog>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExerciseSetLog {
    pub exercise_id: i64,
    #[serde(default)]
    pub sets: i64,
    #[serde(default)]
    pub reps: Vec<i64>,
    #[serde(default)]
    pub weight: Vec<f64>,
}

/// Aggregate computed by the progress store's query layer.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub metric: String,
    pub time_range: String,
    pub total_sessions: i64,
    pub average_duration_minutes: f64,
    pub exercise_frequency: Vec<ExerciseFrequency>,
}

impl ProgressSummary {
    /// The aggregate over zero sessions, also returned when no store is
    /// configured.
    pub fn empty(metric: &str, time_range: &str) -> Self {
        Self {
            metric: metric.to_string(),
            time_range: time_range.to_string(),
            total_sessions: 0,
            average_duration_minutes: 0.0,
            exercise_frequency: Vec::new(),
        }
    }
}

/// How often an exercise shows up in the logs, ranked descending.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ExerciseFrequency {
    pub name: String,
    pub sessions: i64,
}
