use crate::core::catalog::PlantCatalog;
use crate::domain::ports::AiSettings;
use crate::utils::error::{RecoError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_range,
    validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_AI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_AI_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AiConfig {
    pub enabled: Option<bool>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// 自訂目錄 TOML 檔案；未設定時使用內建目錄
    pub path: Option<String>,
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RecoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OPENAI_API_KEY})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecoError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn api_key_env(&self) -> &str {
        self.ai.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// 依設定載入植物目錄
    pub fn load_catalog(&self) -> Result<PlantCatalog> {
        match &self.catalog.path {
            Some(path) => {
                tracing::info!("📂 Loading plant catalog from {}", path);
                PlantCatalog::from_file(path)
            }
            None => Ok(PlantCatalog::builtin()),
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_url("ai.endpoint", self.ai_endpoint())?;
        validate_non_empty_string("ai.model", self.ai_model())?;
        validate_range("ai.temperature", self.temperature(), 0.0, 2.0)?;
        validate_positive_number("ai.max_tokens", u64::from(self.max_tokens()), 1)?;

        if let Some(timeout) = self.ai.timeout_seconds {
            validate_positive_number("ai.timeout_seconds", timeout, 1)?;
        }

        if let Some(path) = &self.catalog.path {
            validate_path("catalog.path", path)?;
        }

        Ok(())
    }
}

impl AiSettings for AppConfig {
    fn ai_enabled(&self) -> bool {
        self.ai.enabled.unwrap_or(true)
    }

    fn ai_endpoint(&self) -> &str {
        self.ai.endpoint.as_deref().unwrap_or(DEFAULT_AI_ENDPOINT)
    }

    fn ai_model(&self) -> &str {
        self.ai.model.as_deref().unwrap_or(DEFAULT_AI_MODEL)
    }

    /// 優先使用設定檔中的金鑰；未替換的 ${VAR} 視為未設定
    fn api_key(&self) -> Option<String> {
        self.ai
            .api_key
            .clone()
            .filter(|key| !key.starts_with("${"))
            .or_else(|| std::env::var(self.api_key_env()).ok())
    }

    fn temperature(&self) -> f32 {
        self.ai.temperature.unwrap_or(0.7)
    }

    fn max_tokens(&self) -> u32 {
        self.ai.max_tokens.unwrap_or(1000)
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.ai.timeout_seconds
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
