//! 予測サービス抽象
//!
//! ブラウザ版はfetch、ネイティブ版はreqwestで実装する。

use crate::error::TransportError;
use crate::predictor::PredictionRequest;
use crate::types::PredictionResult;

/// リモート予測サービス
///
/// 1回の呼び出しで必ず1リクエストを送信し、成功か失敗のどちらかで終わる。
/// 再試行は呼び出し側でも行わない。
#[allow(async_fn_in_trait)]
pub trait PredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, TransportError>;
}
