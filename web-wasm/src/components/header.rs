//! ヘッダー（タイトルと使い方の一行説明）

use leptos::prelude::*;

const TITLE: &str = "Leaf Doctor - Plant Disease Detection";
const TAGLINE: &str = "Upload a leaf photo to check it for common diseases.";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{TITLE}</h1>
            <p class="tagline">{TAGLINE}</p>
        </header>
    }
}
