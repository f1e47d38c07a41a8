//! Leaf Doctor native client
//!
//! ブラウザ版と同じ状態機械（UploadPredictor）をreqwestで駆動する。

pub mod client;
pub mod config;
pub mod error;
pub mod upload;

use client::HttpPredictionService;
use config::Config;
use error::Result;
use leaf_doctor_common::{
    Category, Error as CoreError, Notice, PredictionResult, UploadPredictor,
};
use std::path::Path;

/// ファイルを読み込み、1回だけ予測を実行
pub async fn predict_file(
    service: &HttpPredictionService,
    path: &Path,
    category: Category,
) -> Result<PredictionResult> {
    let file = upload::load_selected_file(path).await?;

    let mut predictor = UploadPredictor::with_category(category);
    predictor.select_file(file);

    predictor.submit_with(service).await?;
    if let Some(result) = predictor.result() {
        return Ok(result.clone());
    }

    match predictor.notice() {
        Some(Notice::Failure(e)) => Err(e.clone().into()),
        _ => Err(CoreError::InvalidTransition {
            action: "predict",
            status: predictor.status(),
        }
        .into()),
    }
}

/// 設定を読み込んでクライアントを作成
pub fn service_from_env() -> Result<HttpPredictionService> {
    let config = Config::load()?;
    HttpPredictionService::from_config(&config)
}
