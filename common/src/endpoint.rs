//! 予測サービスのURL組み立て

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::types::Category;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// 予測ルートの形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    /// `{base}/predict/`
    #[default]
    Fixed,
    /// `{base}/predict/{category}`
    Category,
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "fixed" => Ok(Route::Fixed),
            "category" => Ok(Route::Category),
            other => Err(Error::Config(format!("unknown route mode: {}", other))),
        }
    }
}

/// 予測サービスの所在
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub base_url: String,
    #[serde(default)]
    pub route: Route,
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, Route::Fixed)
    }
}

impl Endpoint {
    pub fn new(base_url: impl Into<String>, route: Route) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
            route,
        }
    }

    /// カテゴリに応じた予測URL
    pub fn predict_url(&self, category: Category) -> String {
        match self.route {
            Route::Fixed => format!("{}/predict/", self.base_url),
            Route::Category => format!("{}/predict/{}", self.base_url, category.as_str()),
        }
    }

    /// 死活確認URL
    pub fn ping_url(&self) -> String {
        format!("{}/ping", self.base_url)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?})", self.base_url, self.route)
    }
}
