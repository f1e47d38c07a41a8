//! 結果ビュー（ラベル・信頼度・アドバイザリ）

use leptos::prelude::*;
use leaf_doctor_common::{UploadPredictor, View};
use crate::components::{
    disease_details::DiseaseDetails,
    upload_predictor::reset,
};

#[component]
pub fn ResultPanel(
    predictor: RwSignal<UploadPredictor>,
    preview: RwSignal<Option<String>>,
) -> impl IntoView {
    // Succeeded以外ではNone
    let summary = move || {
        predictor.with(|p| match p.view() {
            View::Result { result, confidence, advisory } => {
                Some((result.health_label.clone(), confidence, advisory))
            }
            View::Input { .. } => None,
        })
    };

    view! {
        <section class="panel result-panel slide-in-right">
            <button
                class="btn btn-tertiary back-button"
                title="Predict another leaf"
                on:click=move |_| reset(predictor, preview)
            >
                "← Back"
            </button>

            {move || summary().map(|(label, confidence, advisory)| view! {
                <h2>"Prediction Result"</h2>
                <p class="result">"Health: " {label}</p>
                <p class="result">"Confidence: " {confidence}</p>
                <DiseaseDetails advisory=advisory />
            })}
        </section>
    }
}
