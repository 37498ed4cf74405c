use leptos::prelude::*;
use portfolio_core::{Publication, section_id};

use crate::icons::{ICON_ARROW_SQUARE_OUT, Icon};
use crate::page::PageHandle;

#[component]
pub fn PublicationsSection(handle: PageHandle, publications: Vec<Publication>) -> impl IntoView {
    view! {
        <section id=section_id::PUBLICATIONS class="section publications-section">
            <div class="container">
                <h2 class=super::reveal_class(handle, section_id::PUBLICATIONS, "section-heading")>
                    <span class="heading-accent">"Publications"</span>
                </h2>
                {publications
                    .into_iter()
                    .map(|publication| {
                        view! {
                            <div class=super::reveal_class(
                                handle,
                                section_id::PUBLICATIONS,
                                "publication-card",
                            )>
                                <div class="card-accent-bar"></div>
                                <h3 class="publication-title">{publication.title}</h3>
                                <p class="publication-summary">{publication.summary}</p>
                                <a
                                    href=publication.url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="btn btn-primary"
                                >
                                    <Icon path=ICON_ARROW_SQUARE_OUT size="20"/>
                                    <span>"Access Paper"</span>
                                </a>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
