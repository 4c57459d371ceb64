use crate::core::advice::AdviceSynthesizer;
use crate::core::catalog::PlantCatalog;
use crate::core::dedup;
use crate::core::season::resolve_season;
use crate::domain::model::{GardenProfile, Provenance, RecommendationResult, Season};
use crate::domain::ports::Clock;
use crate::utils::error::Result;
use std::sync::Arc;

/// 規則式備援推薦引擎；給定相同的時鐘與菜園資料，輸出完全相同
pub struct FallbackRecommendationEngine {
    catalog: Arc<PlantCatalog>,
    clock: Arc<dyn Clock>,
}

impl FallbackRecommendationEngine {
    pub fn new(catalog: Arc<PlantCatalog>, clock: Arc<dyn Clock>) -> Self {
        Self { catalog, clock }
    }

    pub fn current_season(&self) -> Season {
        resolve_season(self.clock.as_ref())
    }

    pub fn generate(&self, profile: &GardenProfile) -> Result<RecommendationResult> {
        self.generate_for_season(profile, self.current_season())
    }

    pub fn generate_for_season(
        &self,
        profile: &GardenProfile,
        season: Season,
    ) -> Result<RecommendationResult> {
        let existing = &profile.plants;

        let candidates = self.catalog.candidates_for(season, profile.experience)?;
        let filtered = dedup::filter(candidates, existing);
        let recommended_plants = if filtered.is_empty() {
            tracing::debug!(
                "All {} candidates overlap existing plants, keeping the full list",
                candidates.len()
            );
            candidates.to_vec()
        } else {
            filtered
        };

        let companion_plants = self.companion_plants(existing);

        let synth = AdviceSynthesizer::new(&self.catalog);

        tracing::debug!(
            "Fallback recommendations for {}: {} plants, {} companions",
            season,
            recommended_plants.len(),
            companion_plants.len()
        );

        Ok(RecommendationResult {
            season,
            plant_care_advice: synth.plant_care_advice(existing),
            seasonal_tips: synth.seasonal_tips(season, &recommended_plants),
            watering_advice: synth.watering_advice(profile.irrigation, existing),
            space_advice: synth.space_advice(profile.surface_m2, existing),
            culture_advice: synth.culture_advice(profile.cultivation_type),
            experience_advice: synth.experience_advice(profile.experience),
            general_advice: synth.general_advice(&profile.region),
            recommended_plants,
            companion_plants,
            provenance: Provenance::Fallback,
        })
    }

    /// 合併所有現有植物的伴生植物（保留首次出現順序），
    /// 排除已種植者；結果為空時使用預設的授粉植物組合
    fn companion_plants(&self, existing: &[String]) -> Vec<String> {
        let mut companions: Vec<String> = Vec::new();

        for plant in existing {
            let suggested = dedup::filter(self.catalog.companions_of(plant), existing);
            for companion in suggested {
                if !companions.contains(&companion) {
                    companions.push(companion);
                }
            }
        }

        if companions.is_empty() {
            self.catalog.default_companions().to_vec()
        } else {
            companions
        }
    }
}
