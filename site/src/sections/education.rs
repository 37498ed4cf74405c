use leptos::prelude::*;
use portfolio_core::{Education, section_id};

use crate::icons::{ICON_GRADUATION_CAP, ICON_MEDAL, Icon};
use crate::page::PageHandle;

#[component]
pub fn EducationSection(
    handle: PageHandle,
    education: Vec<Education>,
    certifications: Vec<String>,
) -> impl IntoView {
    view! {
        <section id=section_id::EDUCATION class="section education-section">
            <div class="container">
                <h2 class=super::reveal_class(handle, section_id::EDUCATION, "section-heading")>
                    "Education & " <span class="heading-accent">"Certifications"</span>
                </h2>
                <div class="education-grid">
                    <div class=super::reveal_class(handle, section_id::EDUCATION, "education-column")>
                        <h3 class="column-heading">
                            <Icon path=ICON_GRADUATION_CAP size="28" class="column-icon blue"/>
                            <span>"Education"</span>
                        </h3>
                        <div class="education-list">
                            {education
                                .into_iter()
                                .map(|entry| {
                                    let meta = match entry.location {
                                        Some(location) => format!("{location} | {}", entry.period),
                                        None => entry.period,
                                    };
                                    view! {
                                        <div class="education-card">
                                            <div class="card-accent-rail"></div>
                                            <h4 class="education-degree">{entry.degree}</h4>
                                            <p class="education-school">{entry.school}</p>
                                            <p class="education-meta">{meta}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>

                    <div class=super::reveal_class(
                        handle,
                        section_id::EDUCATION,
                        "education-column delayed",
                    )>
                        <h3 class="column-heading">
                            <Icon path=ICON_MEDAL size="28" class="column-icon purple"/>
                            <span>"Certifications"</span>
                        </h3>
                        <div class="certification-card">
                            <ul class="certification-list">
                                {certifications
                                    .into_iter()
                                    .map(|certification| {
                                        view! {
                                            <li class="certification-item">
                                                <span class="certification-check">"✓"</span>
                                                <span>{certification}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
