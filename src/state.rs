use crate::domain::coach::CoachEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub coach: CoachEngine,
}

pub type SharedState = Arc<AppState>;
