pub mod coach;
pub mod models;
