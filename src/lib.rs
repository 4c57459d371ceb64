pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ai_client::{AiRecommendationClient, ExternalServiceError};
pub use config::toml_config::AppConfig;
pub use crate::core::{
    catalog::PlantCatalog,
    fallback::FallbackRecommendationEngine,
    orchestrator::RecommendationOrchestrator,
    season::{FixedClock, SystemClock},
    tips::DailyTipSelector,
};
pub use domain::model::{
    CultivationType, ExperienceLevel, GardenProfile, IrrigationMethod, PlantTag, Provenance,
    RecommendationResponse, RecommendationResult, Season,
};
pub use utils::error::{RecoError, Result};
