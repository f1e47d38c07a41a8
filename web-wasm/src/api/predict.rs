//! fetchによる予測サービス呼び出し
//!
//! 選択ファイルを `file` フィールド1つのFormDataで送信する。
//! Content-Typeはブラウザがboundary付きで設定するので指定しない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};
use leaf_doctor_common::{
    parse_prediction, Endpoint, PredictionRequest, PredictionResult, PredictionService,
    SelectedFile, TransportError, UPLOAD_FIELD,
};

pub struct FetchPredictionService {
    endpoint: Endpoint,
}

impl FetchPredictionService {
    pub fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }
}

impl PredictionService for FetchPredictionService {
    async fn predict(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, TransportError> {
        let url = self.endpoint.predict_url(request.category);
        log::debug!("predict: POST {} ({:?})", url, request.file);

        let form = build_form(&request.file).map_err(js_error)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&form);

        let fetch_request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| TransportError::Network("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            return Err(TransportError::Status(resp.status()));
        }

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        let body = text
            .as_string()
            .ok_or_else(|| TransportError::MalformedBody("response body is not text".into()))?;

        parse_prediction(&body)
    }
}

/// 選択ファイルからFormDataを作成
pub fn build_form(file: &SelectedFile) -> Result<FormData, JsValue> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);

    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &file.name)?;
    Ok(form)
}

fn js_error(e: JsValue) -> TransportError {
    TransportError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}
