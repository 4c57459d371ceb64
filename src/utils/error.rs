use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecoError {
    /// 植物目錄缺少必要資料，屬於資料撰寫錯誤，無法恢復
    #[error("Catalog configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid garden profile: {message}")]
    ValidationError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Catalog,
    Configuration,
    Input,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RecoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RecoError::ConfigurationError { .. } => ErrorCategory::Catalog,
            RecoError::ConfigValidationError { .. }
            | RecoError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RecoError::ValidationError { .. } | RecoError::SerializationError(_) => {
                ErrorCategory::Input
            }
            RecoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RecoError::ValidationError { .. }
            | RecoError::SerializationError(_)
            | RecoError::ConfigValidationError { .. }
            | RecoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RecoError::ConfigurationError { .. } | RecoError::IoError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RecoError::ConfigurationError { .. } => {
                "Check the plant catalog: every season must list candidates for debutant, intermediaire and expert"
            }
            RecoError::ConfigValidationError { .. }
            | RecoError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and run the command again"
            }
            RecoError::ValidationError { .. } | RecoError::SerializationError(_) => {
                "Check the garden profile: region must be set and surface_m2 must be positive"
            }
            RecoError::IoError(_) => "Make sure the file exists and is readable",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RecoError::ConfigurationError { message } => {
                format!("Le catalogue de plantes est incomplet : {}", message)
            }
            RecoError::ValidationError { message } => {
                format!("Le profil du potager est invalide : {}", message)
            }
            RecoError::IoError(e) => format!("Impossible de lire le fichier : {}", e),
            other => format!("Configuration invalide : {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_errors_are_critical() {
        let err = RecoError::ConfigurationError {
            message: "missing hiver/expert".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("missing hiver/expert"));
    }

    #[test]
    fn test_profile_errors_are_input_errors() {
        let err = RecoError::ValidationError {
            message: "surface_m2 must be a positive number, got 0".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().starts_with("Le profil du potager est invalide"));
    }
}
