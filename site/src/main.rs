// Portfolio single-page site — Leptos 0.8, client-side rendered

mod backdrop;
mod icons;
mod observer;
mod page;
mod sections;
mod styles;

use leptos::prelude::*;
use portfolio_core::{PageState, PortfolioContent};
use wasm_bindgen::JsValue;

use page::PageHandle;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();

    // Reject a malformed content table before anything mounts; a half-wired
    // menu is worse than an empty page.
    let content = match PortfolioContent::standard() {
        Ok(content) => content,
        Err(error) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "portfolio content rejected: {error}"
            )));
            return;
        }
    };

    leptos::mount::mount_to_body(move || view! { <App content=content/> });
}

#[component]
fn App(content: PortfolioContent) -> impl IntoView {
    let handle = PageHandle::new(PageState::new(content.registry.clone()));
    observer::start_section_observer(handle);

    view! {
        <style>{styles::PAGE_CSS}</style>
        <Nav handle=handle registry=content.registry.clone() initials=content.profile.initials()/>
        <main>
            <HeroSection handle=handle profile=content.profile.clone()/>
            <AboutSection handle=handle summary=content.profile.summary.clone()/>
            <ExperienceSection handle=handle experiences=content.experiences.clone()/>
            <ProjectsSection handle=handle projects=content.projects.clone()/>
            <SkillsSection handle=handle skills=content.skills.clone()/>
            <EducationSection
                handle=handle
                education=content.education.clone()
                certifications=content.certifications.clone()
            />
            <PublicationsSection handle=handle publications=content.publications.clone()/>
            <ContactSection handle=handle profile=content.profile.clone()/>
        </main>
        <Footer name=content.profile.name.clone()/>
    }
}
