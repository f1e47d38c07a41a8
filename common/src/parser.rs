//! 予測レスポンスパーサー
//!
//! レスポンス本文をPredictionResultに変換し、信頼度の範囲を検証する。
//! 本文が不正な場合はすべてTransportError::MalformedBodyとして扱う。

use crate::error::TransportError;
use crate::types::PredictionResult;

/// 予測レスポンス本文をパース
///
/// # Arguments
/// * `body` - レスポンス本文（JSON）
///
/// # Returns
/// * `Ok(PredictionResult)` - パース・検証成功
/// * `Err(TransportError::MalformedBody)` - JSON不正、フィールド欠落、信頼度が範囲外
///
/// # Examples
/// ```
/// use leaf_doctor_common::parse_prediction;
///
/// let result = parse_prediction(r#"{"Health ": "Healthy", "confidence ": 0.97}"#).unwrap();
/// assert_eq!(result.health_label, "Healthy");
/// ```
pub fn parse_prediction(body: &str) -> Result<PredictionResult, TransportError> {
    let result: PredictionResult = serde_json::from_str(body.trim())
        .map_err(|e| TransportError::MalformedBody(e.to_string()))?;
    validate_prediction(result)
}

/// 既にデシリアライズ済みのレスポンスを検証
pub fn validate_prediction(result: PredictionResult) -> Result<PredictionResult, TransportError> {
    if !result.confidence.is_finite() || !(0.0..=1.0).contains(&result.confidence) {
        return Err(TransportError::MalformedBody(format!(
            "confidence out of range: {}",
            result.confidence
        )));
    }
    Ok(result)
}
