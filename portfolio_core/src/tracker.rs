//! Scroll-driven page state.
//!
//! The host layer (the rendering crate) turns browser callbacks into
//! [`PageEvent`]s and feeds them, strictly in arrival order, to
//! [`PageState::apply`]. The reducer owns all mutable UI state: the sticky
//! per-section visibility flags, the single active section, and the mobile
//! menu flag. Side effects come back out as [`Command`]s for the host to run.
//!
//! Visibility is monotonic: once a section has been observed at or above the
//! threshold it stays visible for the life of the page. The active section is
//! only ever overwritten by the next qualifying observation, never cleared.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::registry::SectionRegistry;

/// Fraction of a section's bounding box that must be inside the viewport
/// before the section counts as seen.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;

/// Events delivered by the host environment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PageEvent {
    /// A section's visible fraction of the viewport was re-reported.
    SectionIntersected { id: String, ratio: f64 },
    /// A menu entry or call-to-action asked to jump to a section.
    NavigateRequested { id: String },
    /// The mobile menu button was pressed.
    MenuToggled,
    /// The host has no intersection mechanism; reveal every section so
    /// nothing stays permanently hidden.
    ObserverUnavailable,
}

/// Side effects the reducer asks the host layer to perform.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Smooth-scroll the section with this id to the top of the viewport.
    ScrollTo(String),
}

/// UI state owned by the page shell.
///
/// Renderers hold read-only views; only the event reducer writes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    registry: SectionRegistry,
    visible: BTreeSet<String>,
    active: String,
    menu_open: bool,
    threshold: f64,
}

impl PageState {
    /// Initial state: nothing seen yet, the first registered section active.
    pub fn new(registry: SectionRegistry) -> Self {
        Self::with_threshold(registry, DEFAULT_VISIBILITY_THRESHOLD)
    }

    pub fn with_threshold(registry: SectionRegistry, threshold: f64) -> Self {
        let active = registry.first().id.clone();
        Self {
            registry,
            visible: BTreeSet::new(),
            active,
            menu_open: false,
            threshold,
        }
    }

    /// Apply one event and return the side effect the host should run, if
    /// any. Events must be applied in the order the host delivered them;
    /// for the active section, the last qualifying observation wins.
    pub fn apply(&mut self, event: PageEvent) -> Option<Command> {
        match event {
            PageEvent::SectionIntersected { id, ratio } => {
                if ratio >= self.threshold && self.registry.contains(&id) {
                    self.visible.insert(id.clone());
                    self.active = id;
                }
                None
            }
            PageEvent::NavigateRequested { id } => {
                if !self.registry.contains(&id) {
                    return None;
                }
                self.menu_open = false;
                Some(Command::ScrollTo(id))
            }
            PageEvent::MenuToggled => {
                self.menu_open = !self.menu_open;
                None
            }
            PageEvent::ObserverUnavailable => {
                for section in self.registry.iter() {
                    self.visible.insert(section.id.clone());
                }
                None
            }
        }
    }

    /// Has this section been scrolled into view at least once?
    pub fn is_visible(&self, id: &str) -> bool {
        self.visible.contains(id)
    }

    /// Is this the section currently highlighted in the nav?
    pub fn is_active(&self, id: &str) -> bool {
        self.active == id
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::Section;
    use pretty_assertions::assert_eq;

    fn page(ids: &[&str]) -> PageState {
        let registry = SectionRegistry::new(
            ids.iter()
                .map(|id| Section::new(*id, format!("Label {id}")))
                .collect(),
        )
        .unwrap();
        PageState::new(registry)
    }

    fn intersected(id: &str, ratio: f64) -> PageEvent {
        PageEvent::SectionIntersected {
            id: id.into(),
            ratio,
        }
    }

    fn navigate(id: &str) -> PageEvent {
        PageEvent::NavigateRequested { id: id.into() }
    }

    #[test]
    fn starts_with_first_section_active_and_nothing_visible() {
        let page = page(&["home", "about", "projects"]);
        assert_eq!(page.active(), "home");
        for id in ["home", "about", "projects"] {
            assert!(!page.is_visible(id));
        }
    }

    #[test]
    fn qualifying_observation_marks_visible_and_active() {
        let mut page = page(&["home", "about", "projects"]);
        assert_eq!(page.apply(intersected("about", 0.8)), None);
        assert!(page.is_visible("about"));
        assert_eq!(page.active(), "about");
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let mut page = page(&["home", "about"]);
        page.apply(intersected("about", DEFAULT_VISIBILITY_THRESHOLD));
        assert!(page.is_visible("about"));
    }

    #[test]
    fn sub_threshold_observation_changes_nothing() {
        let mut page = page(&["home", "about"]);
        page.apply(intersected("about", 0.29));
        assert!(!page.is_visible("about"));
        assert_eq!(page.active(), "home");
    }

    #[test]
    fn visibility_is_sticky() {
        let mut page = page(&["home", "about", "projects"]);
        page.apply(intersected("about", 1.0));
        page.apply(intersected("about", 0.0));
        assert!(page.is_visible("about"));
        assert_eq!(page.active(), "about");
    }

    #[test]
    fn last_qualifying_observation_wins_for_active() {
        let mut page = page(&["home", "about", "projects"]);
        page.apply(intersected("about", 0.9));
        page.apply(intersected("projects", 0.5));
        assert_eq!(page.active(), "projects");
        assert!(page.is_visible("about"));
        assert!(page.is_visible("projects"));
    }

    // Positive observations set visibility and active; a later negative
    // observation for an already-seen section clears neither.
    #[test]
    fn scroll_sequence_scenario() {
        let mut page = page(&["home", "about", "projects"]);

        page.apply(intersected("about", 0.6));
        assert_eq!(page.active(), "about");
        assert!(page.is_visible("about"));
        assert!(!page.is_visible("projects"));

        page.apply(intersected("projects", 0.6));
        assert_eq!(page.active(), "projects");
        assert!(page.is_visible("about"));
        assert!(page.is_visible("projects"));

        let before = page.clone();
        page.apply(intersected("about", 0.1));
        assert_eq!(page, before);
    }

    #[test]
    fn unregistered_section_observation_is_ignored() {
        let mut page = page(&["home", "about"]);
        page.apply(intersected("sidebar", 1.0));
        assert!(!page.is_visible("sidebar"));
        assert_eq!(page.active(), "home");
    }

    #[test]
    fn navigation_emits_exactly_one_scroll_command() {
        let mut page = page(&["home", "about", "projects"]);
        assert_eq!(
            page.apply(navigate("projects")),
            Some(Command::ScrollTo("projects".into()))
        );
    }

    #[test]
    fn navigation_to_unknown_section_is_a_silent_no_op() {
        let mut page = page(&["home", "about"]);
        let before = page.clone();
        assert_eq!(page.apply(navigate("missing")), None);
        assert_eq!(page, before);
    }

    #[test]
    fn navigation_does_not_change_active_or_visibility() {
        let mut page = page(&["home", "about"]);
        page.apply(intersected("about", 0.5));
        page.apply(navigate("home"));
        assert_eq!(page.active(), "about");
        assert!(page.is_visible("about"));
        assert!(!page.is_visible("home"));
    }

    #[test]
    fn menu_toggles_and_navigation_closes_it() {
        let mut page = page(&["home", "about", "projects"]);
        page.apply(PageEvent::MenuToggled);
        assert!(page.menu_open());

        let command = page.apply(navigate("projects"));
        assert!(!page.menu_open());
        assert_eq!(command, Some(Command::ScrollTo("projects".into())));
    }

    #[test]
    fn failed_navigation_leaves_menu_open() {
        let mut page = page(&["home", "about"]);
        page.apply(PageEvent::MenuToggled);
        page.apply(navigate("missing"));
        assert!(page.menu_open());
    }

    #[test]
    fn observer_fallback_reveals_every_section() {
        let mut page = page(&["home", "about", "projects"]);
        page.apply(PageEvent::ObserverUnavailable);
        for id in ["home", "about", "projects"] {
            assert!(page.is_visible(id));
        }
        assert_eq!(page.active(), "home");
    }

    #[test]
    fn custom_threshold_is_honored() {
        let registry =
            SectionRegistry::new(vec![Section::new("home", "Home"), Section::new("about", "About")])
                .unwrap();
        let mut page = PageState::with_threshold(registry, 0.5);
        page.apply(intersected("about", 0.4));
        assert!(!page.is_visible("about"));
        page.apply(intersected("about", 0.5));
        assert!(page.is_visible("about"));
    }
}
