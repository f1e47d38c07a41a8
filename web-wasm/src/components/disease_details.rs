//! 病害アドバイザリ表示

use leptos::prelude::*;
use leaf_doctor_common::Advisory;

#[component]
pub fn DiseaseDetails(advisory: &'static Advisory) -> impl IntoView {
    let manage = (!advisory.manage.is_empty()).then(|| {
        view! {
            <hr />
            <h3>"To Manage"</h3>
            <ul>
                {advisory.manage.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
            </ul>
        }
    });

    view! {
        <div class="disease-details">
            <h3>"Disease Details"</h3>
            <p>{advisory.description}</p>
            <hr />
            <h3>"Impact"</h3>
            <ul>
                {advisory.impact.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
            </ul>
            {manage}
            <hr />
            <p class="advisory-note">{advisory.note}</p>
            {advisory.link.map(|href| view! {
                <a href=href target="_blank" rel="noopener noreferrer">"Learn more"</a>
            })}
        </div>
    }
}
