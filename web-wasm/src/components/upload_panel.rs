//! 入力ビュー（カテゴリ・ファイル・プレビュー・送信）

use leptos::prelude::*;
use leaf_doctor_common::UploadPredictor;
use crate::components::{
    category_select::CategorySelect,
    file_picker::{FilePicker, ReadSequence},
    progress_indicator::ProgressIndicator,
    upload_predictor::submit,
};

#[component]
pub fn UploadPanel(
    predictor: RwSignal<UploadPredictor>,
    preview: RwSignal<Option<String>>,
) -> impl IntoView {
    let reads = RwSignal::new(ReadSequence::default());
    let busy = move || predictor.with(|p| p.is_busy());
    // 読み込み中は前のファイルを送らない
    let reading = move || reads.with(|r| r.is_pending());

    view! {
        <section class="panel upload-panel slide-in-left">
            <CategorySelect predictor=predictor />
            <FilePicker predictor=predictor preview=preview reads=reads />

            <button
                class="btn btn-primary upload-button"
                disabled=move || busy() || reading()
                on:click=move |_| submit(predictor)
            >
                {move || if busy() { "Uploading..." } else { "Upload and Predict" }}
            </button>

            <Show when=busy>
                <ProgressIndicator />
            </Show>
        </section>
    }
}
