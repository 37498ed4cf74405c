use leptos::prelude::*;
use portfolio_core::{Project, section_id};

use super::Dialog;
use crate::icons::{ICON_GITHUB_LOGO, ICON_PLAY, Icon};
use crate::page::PageHandle;

#[component]
pub fn ProjectsSection(handle: PageHandle, projects: Vec<Project>) -> impl IntoView {
    view! {
        <section id=section_id::PROJECTS class="section projects-section">
            <div class="container">
                <h2 class=super::reveal_class(handle, section_id::PROJECTS, "section-heading")>
                    "Featured " <span class="heading-accent">"Projects"</span>
                </h2>
                <div class="projects-grid">
                    {projects
                        .into_iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard handle=handle project=project index=index/> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// One project card: preview text with an optional "Show More" dialog, tag
/// chips, the GitHub link, and a demo button that either opens the recording
/// in a new tab or explains that none exists.
#[component]
fn ProjectCard(handle: PageHandle, project: Project, index: usize) -> impl IntoView {
    let (description_open, set_description_open) = signal(false);
    let (no_demo_open, set_no_demo_open) = signal(false);

    let preview = project.short_description();
    let card_text = preview.clone().unwrap_or_else(|| project.description.clone());
    let description = project.description.clone();
    let dialog_title = project.title.clone();
    let demo = project.demo.clone();

    let open_demo = move |_| match &demo {
        Some(url) => open_in_new_tab(url),
        None => set_no_demo_open.set(true),
    };

    view! {
        <article
            class=super::reveal_class(handle, section_id::PROJECTS, "project-card")
            style=format!("transition-delay: {}ms;", index * 150)
        >
            <div class="card-hover-bar"></div>
            <h3 class="project-title">{project.title.clone()}</h3>

            <div class="project-description">
                <p>{card_text}</p>
                {preview
                    .is_some()
                    .then(|| {
                        view! {
                            <button
                                class="show-more-btn"
                                on:click=move |_| set_description_open.set(true)
                            >
                                "Show More"
                            </button>
                        }
                    })}
            </div>

            <div class="tag-row">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="tag-chip">{tag.clone()}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="project-links">
                <a
                    href=project.github.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="project-link"
                >
                    <Icon path=ICON_GITHUB_LOGO size="18"/>
                    <span>"GitHub"</span>
                </a>
                <button class="project-link demo" on:click=open_demo>
                    <Icon path=ICON_PLAY size="18"/>
                    <span>"Demo"</span>
                </button>
            </div>
        </article>

        <Dialog open=description_open set_open=set_description_open title=dialog_title>
            <p>{description.clone()}</p>
        </Dialog>

        <Dialog open=no_demo_open set_open=set_no_demo_open title="Demo Not Available">
            <p>"No demo video is currently available for this project."</p>
        </Dialog>
    }
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer");
    }
}
