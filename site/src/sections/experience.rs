use leptos::prelude::*;
use portfolio_core::{Experience, section_id};

use crate::icons::{ICON_BRIEFCASE, ICON_CARET_DOWN, Icon};
use crate::page::PageHandle;

#[component]
pub fn ExperienceSection(handle: PageHandle, experiences: Vec<Experience>) -> impl IntoView {
    view! {
        <section id=section_id::EXPERIENCE class="section experience-section">
            <div class="container">
                <h2 class=super::reveal_class(handle, section_id::EXPERIENCE, "section-heading")>
                    "Professional " <span class="heading-accent">"Experience"</span>
                </h2>
                <div class="experience-list">
                    {experiences
                        .into_iter()
                        .enumerate()
                        .map(|(index, job)| view! { <ExperienceCard handle=handle job=job index=index/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One role card. The achievement list sits behind a "More Info" disclosure.
#[component]
fn ExperienceCard(handle: PageHandle, job: Experience, index: usize) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let achievements = job.achievements.clone();
    let meta = format!("{} | {}", job.location, job.period);

    view! {
        <article
            class=super::reveal_class(handle, section_id::EXPERIENCE, "experience-card")
            style=format!("transition-delay: {}ms;", index * 200)
        >
            <div class="card-accent-rail"></div>
            <div class="experience-header">
                <div class="experience-icon">
                    <Icon path=ICON_BRIEFCASE size="24"/>
                </div>
                <div class="experience-heading">
                    <h3 class="experience-title">{job.title.clone()}</h3>
                    <p class="experience-company">{job.company.clone()}</p>
                    <p class="experience-meta">{meta}</p>
                </div>
            </div>

            <button
                class="disclosure-btn"
                on:click=move |_| set_expanded.update(|open| *open = !*open)
            >
                <span>"More Info"</span>
                <span class=move || {
                    if expanded.get() { "disclosure-caret open" } else { "disclosure-caret" }
                }>
                    <Icon path=ICON_CARET_DOWN size="18"/>
                </span>
            </button>

            <Show when=move || expanded.get()>
                <ul class="achievement-list">
                    {achievements
                        .iter()
                        .map(|achievement| {
                            view! {
                                <li class="achievement-item">
                                    <span class="achievement-bullet">"▸"</span>
                                    <span>{achievement.clone()}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </Show>
        </article>
    }
}
