//! 予測クライアントの型定義
//!
//! Web(WASM)とネイティブで共有される型:
//! - SelectedFile: ユーザーが選択した画像
//! - Category: 作物カテゴリ
//! - PredictionResult: 予測サービスのレスポンス
//! - RequestStatus: リクエストのライフサイクル

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// マルチパートでファイルを載せるフィールド名
pub const UPLOAD_FIELD: &str = "file";

/// ユーザーが選択したファイル
#[derive(Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// 画像バイト列はログに出さない
impl fmt::Debug for SelectedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// 作物カテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Potato,
    Tomato,
    Pepper,
    #[default]
    Common,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Potato,
        Category::Tomato,
        Category::Pepper,
        Category::Common,
    ];

    /// URLパスセグメント・フォーム値
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Potato => "potato",
            Category::Tomato => "tomato",
            Category::Pepper => "pepper",
            Category::Common => "common",
        }
    }

    /// セレクタ表示名
    pub fn label(&self) -> &'static str {
        match self {
            Category::Potato => "Potato",
            Category::Tomato => "Tomato",
            Category::Pepper => "Pepper",
            Category::Common => "Common",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "potato" => Ok(Category::Potato),
            "tomato" => Ok(Category::Tomato),
            // 旧フォームの綴り
            "pepper" | "papper" => Ok(Category::Pepper),
            "common" | "auto" => Ok(Category::Common),
            other => Err(Error::Config(format!("unknown category: {}", other))),
        }
    }
}

/// リクエスト状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Idle => "idle",
            RequestStatus::InFlight => "in flight",
            RequestStatus::Succeeded => "succeeded",
            RequestStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 予測サービスのレスポンス
///
/// サービスが返すキーは末尾に空白を含む（`"Health "`, `"confidence "`）。
/// 互換性のためこの名前で読み書きし、空白なしの名前も読み込み時に受け付ける。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    #[serde(
        rename = "Health ",
        alias = "Health",
        alias = "health",
        alias = "healthLabel"
    )]
    pub health_label: String,

    #[serde(rename = "confidence ", alias = "confidence")]
    pub confidence: f64,
}

impl PredictionResult {
    pub fn new(health_label: impl Into<String>, confidence: f64) -> Self {
        Self {
            health_label: health_label.into(),
            confidence,
        }
    }

    /// 既知のラベルに変換（未知ならNone）
    pub fn label(&self) -> Option<HealthLabel> {
        HealthLabel::from_label(&self.health_label)
    }

    /// 表示用の信頼度（例: "97%"）
    pub fn confidence_text(&self) -> String {
        format_confidence(self.confidence)
    }
}

/// 既知の診断ラベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthLabel {
    Healthy,
    EarlyBlight,
    LateBlight,
    BacteriaSpots,
}

impl HealthLabel {
    pub const ALL: [HealthLabel; 4] = [
        HealthLabel::Healthy,
        HealthLabel::EarlyBlight,
        HealthLabel::LateBlight,
        HealthLabel::BacteriaSpots,
    ];

    /// サービスが返すラベル文字列
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthLabel::Healthy => "Healthy",
            HealthLabel::EarlyBlight => "Early Blight",
            HealthLabel::LateBlight => "Late Blight",
            HealthLabel::BacteriaSpots => "Bacteria Spots",
        }
    }

    /// 完全一致でラベルを解決
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == label)
    }
}

impl fmt::Display for HealthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 信頼度を整数パーセントに丸める（四捨五入、0.5は切り上げ）
pub fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0 + 0.5).floor() as i64
}

/// 信頼度を "NN%" 形式に整形
pub fn format_confidence(confidence: f64) -> String {
    format!("{}%", confidence_percent(confidence))
}
