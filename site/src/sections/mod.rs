// Page sections, in document order

mod about;
mod contact;
mod dialog;
mod education;
mod experience;
mod footer;
mod hero;
mod nav;
mod projects;
mod publications;
mod skills;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use dialog::Dialog;
pub use education::EducationSection;
pub use experience::ExperienceSection;
pub use footer::Footer;
pub use hero::HeroSection;
pub use nav::Nav;
pub use projects::ProjectsSection;
pub use publications::PublicationsSection;
pub use skills::SkillsSection;

use crate::page::PageHandle;

/// Pixels of scroll before the nav switches to its solid style.
pub const NAV_SCROLL_OFFSET: f64 = 50.0;

/// Class closure for an element that slides in once its section has been
/// scrolled into view.
fn reveal_class(
    handle: PageHandle,
    section: &'static str,
    base: &'static str,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        if handle.is_visible(section) {
            format!("{base} revealed")
        } else {
            base.to_string()
        }
    }
}
