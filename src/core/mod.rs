pub mod advice;
pub mod catalog;
pub mod dedup;
pub mod fallback;
pub mod orchestrator;
pub mod season;
pub mod tips;

pub use crate::domain::model::{GardenProfile, RecommendationResponse, RecommendationResult, Season};
pub use crate::domain::ports::{AiSettings, Clock, RecommendationSource};
pub use crate::utils::error::Result;
