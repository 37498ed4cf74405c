//! Shared page state wiring.
//!
//! The app shell owns one `PageState` signal pair. Components get a copyable
//! [`PageHandle`]: reactive reads for highlight/reveal styling plus the
//! navigation and menu dispatchers. All mutation goes through the core
//! reducer; this module only executes the commands it returns.

use leptos::prelude::*;
use portfolio_core::{Command, PageEvent, PageState};

#[derive(Clone, Copy)]
pub struct PageHandle {
    state: ReadSignal<PageState>,
    set_state: WriteSignal<PageState>,
}

impl PageHandle {
    pub fn new(initial: PageState) -> Self {
        let (state, set_state) = signal(initial);
        Self { state, set_state }
    }

    /// Reactive: is `id` the section currently highlighted in the nav?
    pub fn is_active(&self, id: &str) -> bool {
        self.state.with(|state| state.is_active(id))
    }

    /// Reactive: has `id` been scrolled into view at least once?
    pub fn is_visible(&self, id: &str) -> bool {
        self.state.with(|state| state.is_visible(id))
    }

    pub fn menu_open(&self) -> bool {
        self.state.with(|state| state.menu_open())
    }

    pub fn toggle_menu(&self) {
        self.dispatch(PageEvent::MenuToggled);
    }

    /// Jump to a section. Unknown ids and detached targets are silently
    /// ignored; a click can never crash the page.
    pub fn goto(&self, id: &str) {
        self.dispatch(PageEvent::NavigateRequested { id: id.to_string() });
    }

    pub fn dispatch(&self, event: PageEvent) {
        let mut command = None;
        self.set_state.update(|state| command = state.apply(event));
        if let Some(Command::ScrollTo(id)) = command {
            scroll_to_section(&id);
        }
    }

    pub fn section_ids(&self) -> Vec<String> {
        self.state.with_untracked(|state| {
            state
                .registry()
                .iter()
                .map(|section| section.id.clone())
                .collect()
        })
    }
}

/// Smooth-scroll the element with `id` to the viewport top. No-op when the
/// element is not attached.
fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
