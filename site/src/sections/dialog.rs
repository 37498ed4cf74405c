use leptos::prelude::*;

use crate::icons::{ICON_X, Icon};

/// Modal dialog over a dimmed backdrop.
///
/// Clicking the backdrop or the close button closes it; clicks inside the
/// panel stay inside.
#[component]
pub fn Dialog(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    #[prop(into)] title: String,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| set_open.set(false)>
                <div class="dialog-panel" on:click=|ev| ev.stop_propagation()>
                    <button class="dialog-close" on:click=move |_| set_open.set(false)>
                        <Icon path=ICON_X size="24"/>
                    </button>
                    <h3 class="dialog-title">{title.clone()}</h3>
                    <div class="dialog-body">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
