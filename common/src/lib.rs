//! Leaf Doctor Common Library
//!
//! Web(WASM)とネイティブクライアントで共有される型と状態機械

pub mod types;
pub mod advisory;
pub mod endpoint;
pub mod error;
pub mod parser;
pub mod predictor;
pub mod service;

pub use types::{
    confidence_percent, format_confidence, Category, HealthLabel, PredictionResult,
    RequestStatus, SelectedFile, UPLOAD_FIELD,
};
pub use advisory::{advisory_for, Advisory};
pub use endpoint::{Endpoint, Route, DEFAULT_API_URL};
pub use error::{Error, Result, TransportError};
pub use parser::{parse_prediction, validate_prediction};
pub use predictor::{Notice, PredictionRequest, UploadPredictor, View};
pub use service::PredictionService;
