//! Browser geometry adapters.
//!
//! Two thin bridges between the DOM and the core reducer: the
//! IntersectionObserver that reports section visibility, and the window
//! scroll listener behind the nav restyle. Both are torn down on unmount.

use leptos::ev;
use leptos::prelude::*;
use portfolio_core::{DEFAULT_VISIBILITY_THRESHOLD, PageEvent};
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::page::PageHandle;

/// Observe every registered section and forward intersection entries, in
/// arrival order, to the page reducer. When the host has no
/// IntersectionObserver, degrade by revealing every section at once.
pub fn start_section_observer(handle: PageHandle) {
    // Effects run after the section elements are in the DOM.
    Effect::new(move || {
        let Some(window) = web_sys::window() else {
            return;
        };
        let supported = js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver"))
            .unwrap_or(false);
        if !supported {
            reveal_everything(handle);
            return;
        }
        let Some(document) = window.document() else {
            return;
        };

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                // One callback can carry a batch (fast scroll, resize);
                // entry order is preserved so the last one wins.
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    handle.dispatch(PageEvent::SectionIntersected {
                        id: entry.target().id(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(DEFAULT_VISIBILITY_THRESHOLD));
        let observer = match web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        ) {
            Ok(observer) => observer,
            Err(_) => {
                reveal_everything(handle);
                return;
            }
        };

        for id in handle.section_ids() {
            if let Some(element) = document.get_element_by_id(&id) {
                observer.observe(&element);
            }
        }

        // The closure must stay alive as long as the observer; both are
        // dropped together on unmount.
        let teardown = SendWrapper::new((observer, callback));
        on_cleanup(move || {
            let (observer, callback) = teardown.take();
            observer.disconnect();
            drop(callback);
        });
    });
}

fn reveal_everything(handle: PageHandle) {
    web_sys::console::warn_1(&JsValue::from_str(
        "IntersectionObserver unavailable; revealing all sections",
    ));
    handle.dispatch(PageEvent::ObserverUnavailable);
}

/// Reactive flag for "the page has scrolled past `offset` pixels".
/// The listener is removed on unmount.
pub fn use_scrolled(offset: f64) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);
    let listener = window_event_listener(ev::scroll, move |_| {
        let past = web_sys::window()
            .map(|window| window.scroll_y().unwrap_or(0.0) > offset)
            .unwrap_or(false);
        if scrolled.get_untracked() != past {
            set_scrolled.set(past);
        }
    });
    on_cleanup(move || listener.remove());
    scrolled
}
