//! 送信中インジケータ

use leptos::prelude::*;

#[component]
pub fn ProgressIndicator() -> impl IntoView {
    view! {
        <div class="progress-container" role="progressbar" aria-busy="true">
            <div class="spinner" />
            <p class="progress-text">"Analyzing leaf image..."</p>
        </div>
    }
}
