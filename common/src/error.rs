//! エラー型定義
//!
//! - `TransportError`: 通信失敗・非2xxレスポンス・不正なレスポンス本文
//! - `Error`: 状態機械の操作エラー（ユーザー入力エラーを含む）

use thiserror::Error;

use crate::types::RequestStatus;

/// 予測サービスとの通信エラー
///
/// 4xx/5xx/ネットワーク障害はすべて同じ「失敗」として扱う
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Prediction service responded with status {0}")]
    Status(u16),

    #[error("Malformed prediction response: {0}")]
    MalformedBody(String),
}

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// ファイル未選択のまま送信（ユーザー入力エラー）
    #[error("Please upload a file first.")]
    NoFileSelected,

    #[error("A prediction request is already in flight")]
    RequestInFlight,

    #[error("Cannot {action} while {status}")]
    InvalidTransition {
        action: &'static str,
        status: RequestStatus,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// ユーザー入力に起因するエラーか
    pub fn is_user_input(&self) -> bool {
        matches!(self, Error::NoFileSelected)
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
