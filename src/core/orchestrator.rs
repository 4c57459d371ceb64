use crate::core::fallback::FallbackRecommendationEngine;
use crate::domain::model::{GardenProfile, RecommendationResponse};
use crate::domain::ports::RecommendationSource;
use crate::utils::error::Result;

/// 先嘗試外部推薦來源，任何失敗立即改用規則式備援，兩條路徑的結果不會合併
pub struct RecommendationOrchestrator<S: RecommendationSource> {
    source: S,
    fallback: FallbackRecommendationEngine,
}

impl<S: RecommendationSource> RecommendationOrchestrator<S> {
    pub fn new(source: S, fallback: FallbackRecommendationEngine) -> Self {
        Self { source, fallback }
    }

    pub async fn recommend(&self, profile: &GardenProfile) -> Result<RecommendationResponse> {
        let season = self.fallback.current_season();

        tracing::info!(
            "🌱 Requesting AI recommendations for a {} m² garden in {} ({})",
            profile.surface_m2,
            profile.region,
            season
        );

        let result = match self.source.request_recommendation(profile, season).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("⚠️ AI recommendations unavailable, using fallback: {}", e);
                self.fallback.generate_for_season(profile, season)?
            }
        };

        tracing::info!(
            "✅ Recommendations ready (source: {:?}, {} plants)",
            result.provenance,
            result.recommended_plants.len()
        );

        Ok(RecommendationResponse::from(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai_client::ExternalServiceError;
    use crate::core::catalog::PlantCatalog;
    use crate::core::season::FixedClock;
    use crate::domain::model::{
        CultivationType, ExperienceLevel, IrrigationMethod, Provenance, RecommendationResult,
        Season,
    };
    use crate::utils::error::RecoError;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct FailingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecommendationSource for FailingSource {
        async fn request_recommendation(
            &self,
            _profile: &GardenProfile,
            _season: Season,
        ) -> std::result::Result<RecommendationResult, ExternalServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(ExternalServiceError::EmptyCompletion)
        }
    }

    struct StaticSource;

    #[async_trait]
    impl RecommendationSource for StaticSource {
        async fn request_recommendation(
            &self,
            _profile: &GardenProfile,
            season: Season,
        ) -> std::result::Result<RecommendationResult, ExternalServiceError> {
            Ok(RecommendationResult {
                season,
                recommended_plants: vec!["Fèves".to_string()],
                companion_plants: vec![],
                plant_care_advice: "a".to_string(),
                seasonal_tips: "b".to_string(),
                watering_advice: "c".to_string(),
                space_advice: "d".to_string(),
                culture_advice: "e".to_string(),
                experience_advice: "f".to_string(),
                general_advice: "g".to_string(),
                provenance: Provenance::Ai,
            })
        }
    }

    fn fallback_engine(catalog: PlantCatalog) -> FallbackRecommendationEngine {
        let date = NaiveDate::from_ymd_opt(2026, 4, 12).unwrap();
        FallbackRecommendationEngine::new(Arc::new(catalog), Arc::new(FixedClock(date)))
    }

    fn garden() -> GardenProfile {
        GardenProfile {
            region: "Bretagne".to_string(),
            surface_m2: 3.0,
            cultivation_type: CultivationType::OpenGround,
            irrigation: IrrigationMethod::Drip,
            experience: ExperienceLevel::Beginner,
            plants: vec![],
        }
    }

    #[tokio::test]
    async fn test_failure_switches_to_fallback_after_a_single_attempt() {
        let source = FailingSource {
            calls: AtomicUsize::new(0),
        };
        let orchestrator =
            RecommendationOrchestrator::new(source, fallback_engine(PlantCatalog::builtin()));

        let response = orchestrator.recommend(&garden()).await.unwrap();
        let direct = fallback_engine(PlantCatalog::builtin())
            .generate(&garden())
            .unwrap();

        assert_eq!(orchestrator.source.calls.load(Ordering::SeqCst), 1);
        assert!(response.fallback);
        assert_eq!(response.recommendations.provenance, Provenance::Fallback);
        assert_eq!(response.recommendations, direct);
    }

    #[tokio::test]
    async fn test_ai_result_is_returned_untouched() {
        let orchestrator =
            RecommendationOrchestrator::new(StaticSource, fallback_engine(PlantCatalog::builtin()));

        let response = orchestrator.recommend(&garden()).await.unwrap();
        assert!(!response.fallback);
        assert_eq!(response.recommendations.season, Season::Spring);
        assert_eq!(response.recommendations.recommended_plants, vec!["Fèves"]);
        assert_eq!(response.recommendations.general_advice, "g");
    }

    #[tokio::test]
    async fn test_missing_catalog_entry_surfaces_configuration_error() {
        let source = FailingSource {
            calls: AtomicUsize::new(0),
        };
        let catalog =
            PlantCatalog::builtin().without_candidates(Season::Spring, ExperienceLevel::Beginner);
        let orchestrator = RecommendationOrchestrator::new(source, fallback_engine(catalog));

        let err = orchestrator.recommend(&garden()).await.unwrap_err();
        assert!(matches!(err, RecoError::ConfigurationError { .. }));
    }
}
