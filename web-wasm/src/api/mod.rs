//! 予測サービス呼び出し

pub mod predict;

pub use predict::FetchPredictionService;
