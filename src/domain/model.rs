use crate::utils::error::{RecoError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// 季節，依當前月份推導
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    #[serde(rename = "printemps", alias = "spring")]
    Spring,
    #[serde(rename = "été", alias = "summer")]
    Summer,
    #[serde(rename = "automne", alias = "autumn")]
    Autumn,
    #[serde(rename = "hiver", alias = "winter")]
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Autumn, Season::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "printemps",
            Season::Summer => "été",
            Season::Autumn => "automne",
            Season::Winter => "hiver",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Season {
    type Err = RecoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "printemps" | "spring" => Ok(Season::Spring),
            "été" | "ete" | "summer" => Ok(Season::Summer),
            "automne" | "autumn" => Ok(Season::Autumn),
            "hiver" | "winter" => Ok(Season::Winter),
            other => Err(RecoError::ConfigurationError {
                message: format!("Unknown season '{}'", other),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CultivationType {
    #[serde(rename = "pleine_terre", alias = "open-ground", alias = "open_ground")]
    OpenGround,
    #[serde(rename = "bac", alias = "container")]
    Container,
    #[serde(rename = "serre", alias = "greenhouse")]
    Greenhouse,
    /// 未知的種植方式，不會產生種植建議
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IrrigationMethod {
    #[serde(rename = "manuel", alias = "manual")]
    Manual,
    #[serde(rename = "automatique", alias = "automatic")]
    Automatic,
    #[serde(rename = "goutte_a_goutte", alias = "drip")]
    Drip,
    #[serde(other)]
    Unrecognized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum ExperienceLevel {
    #[default]
    #[serde(rename = "debutant", alias = "beginner")]
    Beginner,
    #[serde(rename = "intermediaire", alias = "intermediate")]
    Intermediate,
    #[serde(rename = "expert")]
    Expert,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 3] = [
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Expert,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "debutant",
            ExperienceLevel::Intermediate => "intermediaire",
            ExperienceLevel::Expert => "expert",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperienceLevel {
    type Err = RecoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "debutant" | "débutant" | "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediaire" | "intermédiaire" | "intermediate" => {
                Ok(ExperienceLevel::Intermediate)
            }
            "expert" => Ok(ExperienceLevel::Expert),
            other => Err(RecoError::ConfigurationError {
                message: format!("Unknown experience level '{}'", other),
            }),
        }
    }
}

/// 植物能力標籤（需水、耐旱、高大、蔓生）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlantTag {
    Thirsty,
    DroughtTolerant,
    Tall,
    Spreading,
}

/// 使用者的菜園資料，對推薦引擎而言為唯讀輸入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GardenProfile {
    pub region: String,
    #[serde(alias = "surfaceArea")]
    pub surface_m2: f64,
    #[serde(alias = "type_culture", alias = "cultivationType")]
    pub cultivation_type: CultivationType,
    #[serde(alias = "arrosage", alias = "irrigationMethod")]
    pub irrigation: IrrigationMethod,
    #[serde(default, alias = "niveau", alias = "experienceLevel")]
    pub experience: ExperienceLevel,
    #[serde(
        default,
        alias = "plantes",
        alias = "existingPlants",
        deserialize_with = "plant_names"
    )]
    pub plants: Vec<String>,
}

/// 植物可以是名稱字串，或是帶有 `nom` 的植物紀錄（其餘欄位忽略）
#[derive(Deserialize)]
#[serde(untagged)]
enum PlantEntry {
    Name(String),
    Record {
        #[serde(alias = "name")]
        nom: String,
    },
}

fn plant_names<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let entries = Vec::<PlantEntry>::deserialize(deserializer)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            PlantEntry::Name(name) | PlantEntry::Record { nom: name } => name,
        })
        .collect())
}

impl GardenProfile {
    /// 從 JSON 或 TOML 檔案載入菜園資料（依副檔名判斷）
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Ok(serde_json::from_str(&content)?),
            other => Err(RecoError::InvalidConfigValueError {
                field: "profile".to_string(),
                value: path.display().to_string(),
                reason: format!(
                    "Unsupported profile format: {}. Use .json or .toml",
                    other.unwrap_or("<none>")
                ),
            }),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RecoError::ConfigValidationError {
            field: "profile".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for GardenProfile {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("region", &self.region)
            .map_err(|e| RecoError::ValidationError { message: e.to_string() })?;

        if !self.surface_m2.is_finite() || self.surface_m2 <= 0.0 {
            return Err(RecoError::ValidationError {
                message: format!("surface_m2 must be a positive number, got {}", self.surface_m2),
            });
        }

        if let Some(blank) = self.plants.iter().position(|p| p.trim().is_empty()) {
            return Err(RecoError::ValidationError {
                message: format!("plant #{} has an empty name", blank + 1),
            });
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Ai,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub season: Season,
    pub recommended_plants: Vec<String>,
    pub companion_plants: Vec<String>,
    pub plant_care_advice: String,
    pub seasonal_tips: String,
    pub watering_advice: String,
    pub space_advice: String,
    pub culture_advice: String,
    pub experience_advice: String,
    pub general_advice: String,
    #[serde(rename = "source")]
    pub provenance: Provenance,
}

/// 回傳給呼叫端的外層結構，`fallback` 表示是否使用了備援引擎
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResponse {
    pub recommendations: RecommendationResult,
    pub fallback: bool,
}

impl From<RecommendationResult> for RecommendationResponse {
    fn from(recommendations: RecommendationResult) -> Self {
        let fallback = recommendations.provenance == Provenance::Fallback;
        Self {
            recommendations,
            fallback,
        }
    }
}
