use leaf_doctor_common::{Error as CoreError, TransportError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LeafDoctorError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<TransportError> for LeafDoctorError {
    fn from(e: TransportError) -> Self {
        LeafDoctorError::Core(CoreError::Transport(e))
    }
}

pub type Result<T> = std::result::Result<T, LeafDoctorError>;
