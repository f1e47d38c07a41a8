//! 通信失敗の通知（閉じられる）

use leptos::prelude::*;
use leaf_doctor_common::UploadPredictor;

#[component]
pub fn ErrorNotice(predictor: RwSignal<UploadPredictor>) -> impl IntoView {
    let failure = move || {
        predictor.with(|p| {
            p.notice()
                .filter(|notice| notice.is_failure())
                .map(|notice| notice.message())
        })
    };

    view! {
        {move || failure().map(|message| view! {
            <div class="alert alert-error" role="alert">
                <span>{message}</span>
                <button
                    class="alert-close"
                    aria-label="Dismiss"
                    on:click=move |_| predictor.update(|p| p.dismiss_notice())
                >
                    "×"
                </button>
            </div>
        })}
    }
}
