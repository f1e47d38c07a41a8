use crate::error::{LeafDoctorError, Result};
use leaf_doctor_common::{Endpoint, Route, DEFAULT_API_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_URL_ENV: &str = "LEAF_DOCTOR_API_URL";
pub const API_ROUTE_ENV: &str = "LEAF_DOCTOR_API_ROUTE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub route: Route,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
            route: Route::Fixed,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    /// 設定ファイルを読み込み、環境変数で上書き
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_overrides(
            std::env::var(API_URL_ENV).ok(),
            std::env::var(API_ROUTE_ENV).ok(),
        )?;
        Ok(config)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| LeafDoctorError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("leaf-doctor").join("config.json"))
    }

    /// 環境変数の値を反映（空文字は無視）
    pub fn apply_overrides(
        &mut self,
        api_url: Option<String>,
        route: Option<String>,
    ) -> Result<()> {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(route) = route.filter(|r| !r.trim().is_empty()) {
            self.route = route
                .parse()
                .map_err(|e: leaf_doctor_common::Error| LeafDoctorError::Config(e.to_string()))?;
        }
        Ok(())
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.api_url.as_str(), self.route)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(
            config.endpoint().predict_url(Default::default()),
            "http://localhost:8000/predict/"
        );
        assert_eq!(config.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_apply_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(Some("https://leaf.example.com".into()), Some("category".into()))
            .unwrap();
        assert_eq!(config.api_url, "https://leaf.example.com");
        assert_eq!(config.route, Route::Category);
    }

    #[test]
    fn test_apply_overrides_ignores_empty() {
        let mut config = Config::default();
        config.apply_overrides(Some("  ".into()), None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_apply_overrides_invalid_route() {
        let mut config = Config::default();
        let err = config.apply_overrides(None, Some("per-crop".into())).unwrap_err();
        assert!(matches!(err, LeafDoctorError::Config(_)));
    }
}
