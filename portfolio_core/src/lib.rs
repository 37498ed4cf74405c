//! # portfolio-core
//!
//! Domain logic for the portfolio single-page site, kept free of any
//! rendering framework so it can be tested on any target.
//!
//! The crate covers three concerns:
//!
//! - [`registry`] - the ordered section table that drives both the page
//!   layout and the navigation menu
//! - [`tracker`] - the page event model and state reducer: sticky section
//!   visibility, the active section, and navigation commands
//! - [`content`] - the content tables (profile, experience, projects,
//!   skills, education, publications) plus fail-fast validation
//!
//! The rendering crate feeds host events (intersection observations, menu
//! clicks) into [`tracker::PageState::apply`] and executes the commands it
//! returns. Nothing in here touches the DOM.
//!
//! ```rust
//! use portfolio_core::{PageEvent, PageState, PortfolioContent};
//!
//! let content = PortfolioContent::standard().unwrap();
//! let mut page = PageState::new(content.registry);
//!
//! page.apply(PageEvent::SectionIntersected {
//!     id: "about".into(),
//!     ratio: 0.8,
//! });
//! assert!(page.is_visible("about"));
//! assert!(page.is_active("about"));
//! ```

pub mod content;
pub mod demo_link;
pub mod registry;
pub mod tracker;
pub mod typewriter;

pub use content::{
    ContentError, Education, Experience, PortfolioContent, Profile, Project, Publication,
    SkillGroup, SkillIcon, Stat,
};
pub use demo_link::parse_demo_link;
pub use registry::{Section, SectionRegistry, section_id};
pub use tracker::{Command, DEFAULT_VISIBILITY_THRESHOLD, PageEvent, PageState};
pub use typewriter::Typewriter;
