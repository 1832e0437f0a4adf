pub mod seed;

use crate::domain::coach::ProgressStore;
use crate::domain::models::{ExerciseFrequency, ExerciseRecord, ProgressSummary, WorkoutData};
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

/// SQLite-backed progress store handed to the engine as its persistence
/// port.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

pub async fn load_exercises(pool: &SqlitePool) -> Result<Vec<ExerciseRecord>> {
    let records = sqlx::query_as::<_, ExerciseRecord>(
        r#"
        SELECT id, name, description, muscle_groups, equipment, difficulty
        FROM exercises
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// Window size in days for a "30days" style range. "all" disables the
/// cutoff; anything unparseable falls back to 30 days.
fn window_days(time_range: &str) -> Option<i64> {
    let range = time_range.trim().to_lowercase();
    match range.as_str() {
        "all" => None,
        "week" => Some(7),
        "month" => Some(30),
        other => other
            .strip_suffix("days")
            .and_then(|days| days.trim().parse().ok())
            .or(Some(30)),
    }
}

pub async fn insert_workout(pool: &SqlitePool, user_id: Uuid, data: &WorkoutData) -> Result<Uuid> {
    let workout_id = Uuid::new_v4();
    let logged_at = data.date.unwrap_or_else(Utc::now);

    let mut tx = pool.begin().await?;
    sqlx::query(
        r#"
        INSERT INTO workout_logs (id, user_id, logged_at, duration_minutes, notes)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(workout_id.to_string())
    .bind(user_id.to_string())
    .bind(logged_at)
    .bind(data.duration_minutes)
    .bind(data.notes.as_deref())
    .execute(&mut *tx)
    .await?;

    for entry in &data.exercises {
        sqlx::query(
            r#"
            INSERT INTO exercise_logs (id, workout_id, exercise_id, sets, reps, weight)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(Uuid::new_v4().to_string())
        .bind(workout_id.to_string())
        .bind(entry.exercise_id)
        .bind(entry.sets)
        .bind(serde_json::to_string(&entry.reps)?)
        .bind(serde_json::to_string(&entry.weight)?)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(workout_id)
}

pub async fn fetch_progress(
    pool: &SqlitePool,
    user_id: Uuid,
    metric: &str,
    time_range: &str,
) -> Result<ProgressSummary> {
    let since: Option<DateTime<Utc>> =
        window_days(time_range).map(|days| Utc::now() - Duration::days(days));

    // COALESCE keeps the aggregate well-formed when no sessions match.
    let (total_sessions, average_duration_minutes): (i64, f64) = sqlx::query_as(
        r#"
        SELECT COUNT(*), COALESCE(AVG(duration_minutes), 0.0)
        FROM workout_logs
        WHERE user_id = ?
          AND (? IS NULL OR logged_at >= ?)
        "#,
    )
    .bind(user_id.to_string())
    .bind(since)
    .bind(since)
    .fetch_one(pool)
    .await?;

    let exercise_frequency = sqlx::query_as::<_, ExerciseFrequency>(
        r#"
        SELECT e.name AS name, COUNT(*) AS sessions
        FROM exercise_logs el
        JOIN workout_logs w ON w.id = el.workout_id
        JOIN exercises e ON e.id = el.exercise_id
        WHERE w.user_id = ?
          AND (? IS NULL OR w.logged_at >= ?)
        GROUP BY e.name
        ORDER BY sessions DESC, name ASC
        "#,
    )
    .bind(user_id.to_string())
    .bind(since)
    .bind(since)
    .fetch_all(pool)
    .await?;

    Ok(ProgressSummary {
        metric: metric.to_string(),
        time_range: time_range.to_string(),
        total_sessions,
        average_duration_minutes,
        exercise_frequency,
    })
}

#[async_trait]
impl ProgressStore for Database {
    async fn insert_workout(&self, user_id: Uuid, data: &WorkoutData) -> Result<Uuid> {
        insert_workout(&self.pool, user_id, data).await
    }

    async fn fetch_progress(
        &self,
        user_id: Uuid,
        metric: &str,
        time_range: &str,
    ) -> Result<ProgressSummary> {
        fetch_progress(&self.pool, user_id, metric, time_range).await
    }
}
