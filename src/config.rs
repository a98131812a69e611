//! Runtime configuration
//!
//! All settings come from the environment once at startup and are passed
//! explicitly into the analyzer.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// Default natural-language nutrients endpoint
pub const DEFAULT_NUTRITIONIX_ENDPOINT: &str =
    "https://trackapi.nutritionix.com/v2/natural/nutrients";

const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_THRESHOLD: f32 = 0.5;
const DEFAULT_MAX_INGREDIENTS: usize = 8;

/// Nutritionix credentials and transport settings
#[derive(Debug, Clone)]
pub struct NutritionixConfig {
    pub app_id: String,
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

/// Vision model location and decoding settings
#[derive(Debug, Clone)]
pub struct VisionConfig {
    pub model_path: PathBuf,
    /// Label sidecar; `None` means `<model>.labels.txt`
    pub labels_path: Option<PathBuf>,
    /// Minimum class probability for an ingredient to be reported
    pub threshold: f32,
    pub max_ingredients: usize,
}

impl VisionConfig {
    pub fn resolved_labels_path(&self) -> PathBuf {
        match &self.labels_path {
            Some(path) => path.clone(),
            None => default_labels_path(&self.model_path),
        }
    }
}

/// Complete analyzer configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub nutritionix: NutritionixConfig,
    pub vision: VisionConfig,
}

impl Config {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let app_id = get("NUTRITIONIX_APP_ID")
            .ok_or_else(|| Error::Config("NUTRITIONIX_APP_ID is not set".into()))?;
        let api_key = get("NUTRITIONIX_API_KEY")
            .ok_or_else(|| Error::Config("NUTRITIONIX_API_KEY is not set".into()))?;
        let model_path = get("VISION_MODEL_PATH")
            .or_else(|| get("LLAMA_MODEL_PATH"))
            .map(PathBuf::from)
            .ok_or_else(|| Error::Config("VISION_MODEL_PATH is not set".into()))?;

        let endpoint =
            get("NUTRITIONIX_ENDPOINT").unwrap_or_else(|| DEFAULT_NUTRITIONIX_ENDPOINT.to_string());
        let timeout_secs = parse_or(
            "NUTRITIONIX_TIMEOUT_SECS",
            get("NUTRITIONIX_TIMEOUT_SECS"),
            DEFAULT_TIMEOUT_SECS,
        )?;
        let threshold = parse_or(
            "RECOGNITION_THRESHOLD",
            get("RECOGNITION_THRESHOLD"),
            DEFAULT_THRESHOLD,
        )?;
        let max_ingredients = parse_or(
            "RECOGNITION_MAX_INGREDIENTS",
            get("RECOGNITION_MAX_INGREDIENTS"),
            DEFAULT_MAX_INGREDIENTS,
        )?;

        Ok(Self {
            nutritionix: NutritionixConfig {
                app_id,
                api_key,
                endpoint,
                timeout: Duration::from_secs(timeout_secs),
            },
            vision: VisionConfig {
                model_path,
                labels_path: get("VISION_LABELS_PATH").map(PathBuf::from),
                threshold,
                max_ingredients,
            },
        })
    }

    /// Check everything that can be checked before loading the model
    pub fn validate(&self) -> Result<()> {
        if !self.vision.model_path.is_file() {
            return Err(Error::Config(format!(
                "Vision model not found: {}",
                self.vision.model_path.display()
            )));
        }
        let labels = self.vision.resolved_labels_path();
        if !labels.is_file() {
            return Err(Error::Config(format!(
                "Label file not found: {}",
                labels.display()
            )));
        }
        if !(self.vision.threshold > 0.0 && self.vision.threshold <= 1.0) {
            return Err(Error::Config(format!(
                "RECOGNITION_THRESHOLD must be in (0, 1], got {}",
                self.vision.threshold
            )));
        }
        if self.vision.max_ingredients == 0 {
            return Err(Error::Config(
                "RECOGNITION_MAX_INGREDIENTS must be at least 1".into(),
            ));
        }
        if self.nutritionix.timeout.is_zero() {
            return Err(Error::Config(
                "NUTRITIONIX_TIMEOUT_SECS must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// `model.onnx` -> `model.labels.txt`
pub fn default_labels_path(model_path: &Path) -> PathBuf {
    model_path.with_extension("labels.txt")
}

fn parse_or<T: std::str::FromStr>(key: &str, value: Option<String>, default: T) -> Result<T> {
    match value {
        Some(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{} has an invalid value: {}", key, raw))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const REQUIRED: &[(&str, &str)] = &[
        ("NUTRITIONIX_APP_ID", "app"),
        ("NUTRITIONIX_API_KEY", "key"),
        ("VISION_MODEL_PATH", "/models/food.onnx"),
    ];

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(REQUIRED)).unwrap();
        assert_eq!(config.nutritionix.endpoint, DEFAULT_NUTRITIONIX_ENDPOINT);
        assert_eq!(config.nutritionix.timeout, Duration::from_secs(15));
        assert_eq!(config.vision.threshold, 0.5);
        assert_eq!(config.vision.max_ingredients, 8);
        assert_eq!(
            config.vision.resolved_labels_path(),
            PathBuf::from("/models/food.labels.txt")
        );
    }

    #[test]
    fn test_missing_credentials_fail() {
        let err =
            Config::from_lookup(lookup_from(&[("VISION_MODEL_PATH", "m.onnx")])).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_lookup(lookup_from(&[
            ("NUTRITIONIX_APP_ID", "app"),
            ("NUTRITIONIX_API_KEY", "   "),
            ("VISION_MODEL_PATH", "m.onnx"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("NUTRITIONIX_API_KEY"));
    }

    #[test]
    fn test_legacy_model_variable() {
        let config = Config::from_lookup(lookup_from(&[
            ("NUTRITIONIX_APP_ID", "app"),
            ("NUTRITIONIX_API_KEY", "key"),
            ("LLAMA_MODEL_PATH", "legacy.onnx"),
        ]))
        .unwrap();
        assert_eq!(config.vision.model_path, PathBuf::from("legacy.onnx"));
    }

    #[test]
    fn test_invalid_number_rejected() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("RECOGNITION_THRESHOLD", "high"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(err.to_string().contains("RECOGNITION_THRESHOLD"));
    }

    #[test]
    fn test_validate_checks_files_and_ranges() {
        let dir = tempfile::tempdir().unwrap();
        let model = dir.path().join("food.onnx");
        let model_str = model.to_string_lossy().to_string();

        let pairs = vec![
            ("NUTRITIONIX_APP_ID", "app"),
            ("NUTRITIONIX_API_KEY", "key"),
            ("VISION_MODEL_PATH", model_str.as_str()),
        ];
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert!(config.validate().is_err());

        std::fs::write(&model, b"onnx").unwrap();
        assert!(config.validate().unwrap_err().to_string().contains("Label file"));

        std::fs::write(dir.path().join("food.labels.txt"), "rice\n").unwrap();
        assert!(config.validate().is_ok());

        let mut bad = config.clone();
        bad.vision.threshold = 1.5;
        assert!(bad.validate().is_err());

        let mut bad = config;
        bad.vision.max_ingredients = 0;
        assert!(bad.validate().is_err());
    }
}
