//! アップロード予測コンポーネント
//!
//! 状態（UploadPredictor）とプレビューURLを所有し、入力ビューと結果ビューの
//! どちらか一方だけを表示する。どちらを出すかは状態から導出する。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leaf_doctor_common::{PredictionService, UploadPredictor};
use crate::api::FetchPredictionService;
use crate::components::{
    error_notice::ErrorNotice,
    result_panel::ResultPanel,
    upload_panel::UploadPanel,
};
use crate::config;

#[component]
pub fn UploadPredictorPanel() -> impl IntoView {
    let predictor = RwSignal::new(UploadPredictor::new());
    let preview = RwSignal::new(None::<String>);

    on_cleanup(move || crate::preview::replace(preview, None));

    let is_result = move || predictor.with(|p| p.view().is_result());

    view! {
        <div class="predictor">
            <ErrorNotice predictor=predictor />

            <Show
                when=is_result
                fallback=move || view! { <UploadPanel predictor=predictor preview=preview /> }
            >
                <ResultPanel predictor=predictor preview=preview />
            </Show>
        </div>
    }
}

/// 送信（1回の呼び出しで最大1リクエスト）
///
/// ファイル未選択はブロッキングのalertで知らせ、状態は変えない。
pub fn submit(predictor: RwSignal<UploadPredictor>) {
    let Some(submitted) = predictor.try_update(|p| p.submit()) else {
        return;
    };

    match submitted {
        Ok(request) => {
            let service = FetchPredictionService::new(config::endpoint());
            spawn_local(async move {
                let outcome = service.predict(&request).await;
                if let Err(e) = &outcome {
                    log::error!("Error uploading file: {}", e);
                }
                predictor.try_update(|p| p.complete(request.ticket, outcome));
            });
        }
        Err(e) if e.is_user_input() => {
            gloo::dialogs::alert(&e.to_string());
            predictor.update(|p| p.dismiss_notice());
        }
        Err(e) => log::warn!("submit rejected: {}", e),
    }
}

/// 結果ビューから入力ビューに戻す（ファイル・プレビューも破棄）
pub fn reset(predictor: RwSignal<UploadPredictor>, preview: RwSignal<Option<String>>) {
    match predictor.try_update(|p| p.reset()) {
        Some(Ok(())) => crate::preview::replace(preview, None),
        Some(Err(e)) => log::warn!("reset rejected: {}", e),
        None => {}
    }
}
