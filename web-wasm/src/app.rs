//! メインアプリケーションコンポーネント
//!
//! レイアウトのみ。状態はUploadPredictorPanelが持つ。

use leptos::prelude::*;
use crate::components::{
    header::Header,
    upload_predictor::UploadPredictorPanel,
};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-container">
            <Header />
            <main class="uploader">
                <UploadPredictorPanel />
            </main>
        </div>
    }
}
