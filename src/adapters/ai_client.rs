//! 語言模型推薦客戶端（OpenAI 相容的 chat completions 介面）。
//!
//! 每次請求只嘗試一次，任何失敗都以 [`ExternalServiceError`] 回報，
//! 是否改用備援引擎由協調器決定。回應內容必須完整符合推薦結構，
//! 缺欄位、型別錯誤或多出未知欄位都視為解析失敗。

use crate::domain::model::{GardenProfile, Provenance, RecommendationResult, Season};
use crate::domain::ports::{AiSettings, RecommendationSource};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExternalServiceError {
    #[error("AI recommendations are disabled")]
    Disabled,

    #[error("API key not found (set ai.api_key or ai.api_key_env)")]
    MissingApiKey,

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("AI service returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("AI service returned no completion")]
    EmptyCompletion,

    #[error("Malformed recommendation payload: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub format_type: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionResponseMessage,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

/// 模型必須回傳的 JSON 結構
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AiRecommendationPayload {
    pub recommended_plants: Vec<String>,
    pub companion_plants: Vec<String>,
    pub plant_care_advice: String,
    pub seasonal_tips: String,
    pub watering_advice: String,
    pub space_advice: String,
    pub culture_advice: String,
    pub experience_advice: String,
    pub general_advice: String,
}

impl AiRecommendationPayload {
    pub fn parse(content: &str) -> std::result::Result<Self, ExternalServiceError> {
        Ok(serde_json::from_str(content.trim())?)
    }

    pub fn into_result(self, season: Season) -> RecommendationResult {
        RecommendationResult {
            season,
            recommended_plants: self.recommended_plants,
            companion_plants: self.companion_plants,
            plant_care_advice: self.plant_care_advice,
            seasonal_tips: self.seasonal_tips,
            watering_advice: self.watering_advice,
            space_advice: self.space_advice,
            culture_advice: self.culture_advice,
            experience_advice: self.experience_advice,
            general_advice: self.general_advice,
            provenance: Provenance::Ai,
        }
    }
}

/// 依菜園資料、季節與現有植物組出提示詞
pub fn build_prompt(profile: &GardenProfile, season: Season) -> String {
    let plants = if profile.plants.is_empty() {
        "aucune plante pour le moment".to_string()
    } else {
        profile.plants.join(", ")
    };

    format!(
        r#"Tu es un expert du potager. Voici le profil de mon jardin :
- Région : {region}
- Surface : {surface} m²
- Type de culture : {culture}
- Arrosage : {irrigation}
- Niveau : {level}
- Saison actuelle : {season}
- Plantes déjà en place : {plants}

Propose des recommandations qui complètent les plantes déjà en place, adaptées à la saison et à mon niveau.
Réponds uniquement avec un objet JSON ayant exactement ces champs :
{{
  "recommendedPlants": ["5 à 8 plantes absentes de mon potager"],
  "companionPlants": ["plantes compagnes de mes plantes actuelles"],
  "plantCareAdvice": "entretien de mes plantes actuelles",
  "seasonalTips": "conseil pour la saison",
  "wateringAdvice": "conseil selon mon système d'arrosage et mes plantes",
  "spaceAdvice": "organisation de mon espace",
  "cultureAdvice": "conseil pour mon type de culture",
  "experienceAdvice": "conseil pour mon niveau",
  "generalAdvice": "conseil général"
}}"#,
        region = profile.region,
        surface = profile.surface_m2,
        culture = serde_json::to_value(profile.cultivation_type)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default(),
        irrigation = serde_json::to_value(profile.irrigation)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default(),
        level = profile.experience,
        season = season,
        plants = plants,
    )
}

pub struct AiRecommendationClient<C: AiSettings> {
    settings: C,
    client: Client,
}

impl<C: AiSettings> AiRecommendationClient<C> {
    pub fn new(settings: C) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    pub fn build_request(&self, profile: &GardenProfile, season: Season) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.ai_model().to_string(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(profile, season),
            }],
            response_format: Some(ResponseFormat {
                format_type: "json_object".to_string(),
            }),
            temperature: self.settings.temperature(),
            max_tokens: self.settings.max_tokens(),
        }
    }
}

#[async_trait]
impl<C: AiSettings> RecommendationSource for AiRecommendationClient<C> {
    async fn request_recommendation(
        &self,
        profile: &GardenProfile,
        season: Season,
    ) -> std::result::Result<RecommendationResult, ExternalServiceError> {
        if !self.settings.ai_enabled() {
            return Err(ExternalServiceError::Disabled);
        }
        let api_key = self
            .settings
            .api_key()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ExternalServiceError::MissingApiKey)?;

        let payload = self.build_request(profile, season);

        tracing::debug!(
            "📡 Sending recommendation request to {} (model {})",
            self.settings.ai_endpoint(),
            payload.model
        );

        let mut request = self
            .client
            .post(self.settings.ai_endpoint())
            .bearer_auth(api_key)
            .json(&payload);

        if let Some(timeout) = self.settings.timeout_seconds() {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().await?;
        let status = response.status();
        tracing::debug!("📡 AI response status: {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ExternalServiceError::Status { status, body });
        }

        let completion: ChatCompletionResponse = serde_json::from_slice(&response.bytes().await?)?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ExternalServiceError::EmptyCompletion)?;

        let parsed = AiRecommendationPayload::parse(&content)?;
        Ok(parsed.into_result(season))
    }
}
