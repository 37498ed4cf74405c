use leptos::prelude::*;
use portfolio_core::section_id;

use crate::page::PageHandle;

#[component]
pub fn AboutSection(handle: PageHandle, summary: String) -> impl IntoView {
    view! {
        <section id=section_id::ABOUT class="section about-section">
            <div class="container">
                <h2 class=super::reveal_class(handle, section_id::ABOUT, "section-heading")>
                    "Professional " <span class="heading-accent">"Summary"</span>
                </h2>
                <div class=super::reveal_class(handle, section_id::ABOUT, "about-card delayed")>
                    <div class="card-accent-bar"></div>
                    <p class="about-text">{summary}</p>
                </div>
            </div>
        </section>
    }
}
