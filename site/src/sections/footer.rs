use leptos::prelude::*;

use crate::icons::{ICON_BRAIN, Icon};

#[component]
pub fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container footer-inner">
                <p class="footer-copyright">{format!("© 2025 {name}. All rights reserved.")}</p>
                <div class="footer-note">
                    <span>"Built with"</span>
                    <Icon path=ICON_BRAIN size="18" class="footer-brain"/>
                    <span>"and Leptos"</span>
                </div>
            </div>
        </footer>
    }
}
