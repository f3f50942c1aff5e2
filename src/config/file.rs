use crate::domain::model::Language;
use crate::utils::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub general: Option<GeneralSection>,
    pub time: Option<TimeSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralSection {
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeSection {
    pub endpoints: Option<Vec<String>>,
    pub timeout_seconds: Option<u64>,
    pub offline: Option<bool>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AppError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| AppError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

// ${VAR_NAME} placeholders resolve from the environment; unknown variables
// are left as written.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}
