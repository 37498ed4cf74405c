use leptos::prelude::*;
use portfolio_core::{SkillGroup, section_id};

use crate::icons::{Icon, skill_icon_path};
use crate::page::PageHandle;

#[component]
pub fn SkillsSection(handle: PageHandle, skills: Vec<SkillGroup>) -> impl IntoView {
    view! {
        <section id=section_id::SKILLS class="section skills-section">
            <div class="container">
                <h2 class=super::reveal_class(handle, section_id::SKILLS, "section-heading")>
                    "Technical " <span class="heading-accent">"Skills"</span>
                </h2>
                <div class="skills-grid">
                    {skills
                        .into_iter()
                        .enumerate()
                        .map(|(index, group)| {
                            view! {
                                <article
                                    class=super::reveal_class(handle, section_id::SKILLS, "skill-card")
                                    style=format!("transition-delay: {}ms;", index * 100)
                                >
                                    <div class="card-hover-bar purple"></div>
                                    <div class="skill-header">
                                        <span class="skill-icon">
                                            <Icon path=skill_icon_path(group.icon) size="24"/>
                                        </span>
                                        <h3 class="skill-title">{group.title}</h3>
                                    </div>
                                    <p class="skill-summary">{group.summary}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
