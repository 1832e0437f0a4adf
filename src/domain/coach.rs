use crate::domain::models::{
    BodyMetrics, ExerciseRecord, NutritionTarget, ProgressSummary, UserProfile, WorkoutData,
    WorkoutPlan,
};
use crate::services::{motivation, nutrition, planner};
use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

/// Persistence port for workout logs. The engine never touches the backing
/// store directly; `db::Database` implements this over SQLite.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn insert_workout(&self, user_id: Uuid, data: &WorkoutData) -> Result<Uuid>;

    async fn fetch_progress(
        &self,
        user_id: Uuid,
        metric: &str,
        time_range: &str,
    ) -> Result<ProgressSummary>;
}

/// The recommendation engine: plan generation, nutrition targets,
/// motivation messages and the progress log facade, built over an injected
/// exercise catalog and an optional progress store.
#[derive(Clone)]
pub struct CoachEngine {
    catalog: Arc<Vec<ExerciseRecord>>,
    store: Option<Arc<dyn ProgressStore>>,
}

impl CoachEngine {
    pub fn new(catalog: Vec<ExerciseRecord>, store: Option<Arc<dyn ProgressStore>>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            store,
        }
    }

    pub fn generate_plan<R: Rng + ?Sized>(&self, profile: &UserProfile, rng: &mut R) -> WorkoutPlan {
        planner::build_plan(&self.catalog, profile, rng)
    }

    pub fn nutrition_targets(
        &self,
        metrics: &BodyMetrics,
        activity_level: &str,
        goal: &str,
    ) -> NutritionTarget {
        nutrition::calculate(metrics, activity_level, goal)
    }

    pub fn motivation<R: Rng + ?Sized>(&self, context: &str, rng: &mut R) -> String {
        motivation::pick(context, rng)
    }

    /// Append a workout log. Without a configured store this degrades to a
    /// warn-logged no-op; startup only permits that mode when explicitly
    /// requested.
    pub async fn record_workout(&self, user_id: Uuid, data: &WorkoutData) -> Result<()> {
        match &self.store {
            Some(store) => {
                store.insert_workout(user_id, data).await?;
                Ok(())
            }
            None => {
                tracing::warn!(%user_id, "no progress store configured, dropping workout log");
                Ok(())
            }
        }
    }

    /// Aggregated stats for a user, or the empty aggregate without a store.
    pub async fn progress_stats(
        &self,
        user_id: Uuid,
        metric: &str,
        time_range: &str,
    ) -> Result<ProgressSummary> {
        match &self.store {
            Some(store) => store.fetch_progress(user_id, metric, time_range).await,
            None => Ok(ProgressSummary::empty(metric, time_range)),
        }
    }
}
