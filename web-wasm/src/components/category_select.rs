//! 作物カテゴリセレクタ

use leptos::prelude::*;
use leaf_doctor_common::{Category, UploadPredictor};

#[component]
pub fn CategorySelect(predictor: RwSignal<UploadPredictor>) -> impl IntoView {
    let current = move || predictor.with(|p| p.category());

    view! {
        <div class="form-group">
            <label for="category-select">"Select Vegetable"</label>
            <select
                id="category-select"
                on:change=move |ev| {
                    match event_target_value(&ev).parse::<Category>() {
                        Ok(category) => predictor.update(|p| p.select_category(category)),
                        Err(e) => log::warn!("{}", e),
                    }
                }
            >
                {Category::ALL
                    .into_iter()
                    .map(move |category| {
                        view! {
                            <option
                                value=category.as_str()
                                selected=move || current() == category
                            >
                                {category.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
