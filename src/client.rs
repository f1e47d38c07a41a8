//! 予測サービスHTTPクライアント
//!
//! - predict: `file` フィールド1つのマルチパートで画像を送信
//! - ping: 死活確認（GET /ping）
//!
//! 非2xx・通信失敗・本文不正はすべてTransportErrorとして返す。

use crate::config::Config;
use crate::error::Result;
use leaf_doctor_common::{
    parse_prediction, Endpoint, PredictionRequest, PredictionResult, PredictionService,
    SelectedFile, TransportError, UPLOAD_FIELD,
};
use log::debug;
use reqwest::multipart::{Form, Part};
use std::time::Duration;

pub struct HttpPredictionService {
    client: reqwest::Client,
    endpoint: Endpoint,
}

impl HttpPredictionService {
    pub fn new(endpoint: Endpoint, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, endpoint })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.endpoint(), config.timeout())
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// サービスの死活確認
    pub async fn ping(&self) -> std::result::Result<(), TransportError> {
        let url = self.endpoint.ping_url();
        debug!("ping: {}", url);

        let response = self.client.get(&url).send().await.map_err(transport_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(())
    }
}

impl PredictionService for HttpPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> std::result::Result<PredictionResult, TransportError> {
        let url = self.endpoint.predict_url(request.category);
        debug!("predict: POST {} ({:?})", url, request.file);

        let form = Form::new().part(UPLOAD_FIELD, file_part(&request.file));
        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        parse_prediction(&body)
    }
}

/// マルチパートのファイルパート
///
/// MIMEタイプが解釈できない場合は付けずに送る
fn file_part(file: &SelectedFile) -> Part {
    let part = || Part::bytes(file.bytes.clone()).file_name(file.name.clone());
    part().mime_str(&file.mime_type).unwrap_or_else(|_| part())
}

fn transport_error(e: reqwest::Error) -> TransportError {
    match e.status() {
        Some(status) => TransportError::Status(status.as_u16()),
        None => TransportError::Network(e.to_string()),
    }
}
