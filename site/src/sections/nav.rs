use leptos::prelude::*;
use portfolio_core::{SectionRegistry, section_id};

use super::NAV_SCROLL_OFFSET;
use crate::icons::{ICON_BRAIN, ICON_LIST, ICON_X, Icon};
use crate::observer;
use crate::page::PageHandle;

/// Fixed navigation bar: brand button, desktop links, mobile drawer.
///
/// The link list is the section registry itself, so the menu can never show
/// an entry the page does not have.
#[component]
pub fn Nav(handle: PageHandle, registry: SectionRegistry, initials: String) -> impl IntoView {
    let scrolled = observer::use_scrolled(NAV_SCROLL_OFFSET);
    let items: Vec<(String, String)> = registry
        .iter()
        .map(|section| (section.id.clone(), section.label.clone()))
        .collect();
    let drawer_items = items.clone();

    view! {
        <nav class=move || if scrolled.get() { "nav scrolled" } else { "nav" }>
            <div class="nav-inner">
                <button class="nav-brand" on:click=move |_| handle.goto(section_id::HOME)>
                    <Icon path=ICON_BRAIN size="28" class="nav-brand-icon"/>
                    <span class="nav-brand-name">{initials}</span>
                </button>

                <div class="nav-links">
                    {items
                        .into_iter()
                        .map(|(id, label)| {
                            let highlight_id = id.clone();
                            view! {
                                <button
                                    class=move || {
                                        if handle.is_active(&highlight_id) {
                                            "nav-link active"
                                        } else {
                                            "nav-link"
                                        }
                                    }
                                    on:click=move |_| handle.goto(&id)
                                >
                                    {label}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <button class="nav-menu-btn" on:click=move |_| handle.toggle_menu()>
                    {move || {
                        if handle.menu_open() {
                            view! { <Icon path=ICON_X size="24"/> }.into_any()
                        } else {
                            view! { <Icon path=ICON_LIST size="24"/> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile drawer; goto() closes it through the reducer
            <Show when=move || handle.menu_open()>
                <div class="nav-drawer">
                    {drawer_items
                        .iter()
                        .map(|(id, label)| {
                            let target = id.clone();
                            let highlight_id = id.clone();
                            view! {
                                <button
                                    class=move || {
                                        if handle.is_active(&highlight_id) {
                                            "nav-drawer-link active"
                                        } else {
                                            "nav-drawer-link"
                                        }
                                    }
                                    on:click=move |_| handle.goto(&target)
                                >
                                    {label.clone()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
        </nav>
    }
}
