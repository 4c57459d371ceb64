use crate::adapters::ai_client::ExternalServiceError;
use crate::domain::model::{GardenProfile, RecommendationResult, Season};
use async_trait::async_trait;
use chrono::NaiveDate;

/// 可注入的時鐘，測試時可固定日期
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub trait AiSettings: Send + Sync {
    fn ai_enabled(&self) -> bool;
    fn ai_endpoint(&self) -> &str;
    fn ai_model(&self) -> &str;
    fn api_key(&self) -> Option<String>;
    fn temperature(&self) -> f32;
    fn max_tokens(&self) -> u32;
    fn timeout_seconds(&self) -> Option<u64>;
}

/// 外部推薦來源（例如語言模型服務）。單次嘗試，失敗時由協調器決定是否備援。
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    async fn request_recommendation(
        &self,
        profile: &GardenProfile,
        season: Season,
    ) -> std::result::Result<RecommendationResult, ExternalServiceError>;
}
