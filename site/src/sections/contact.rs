use leptos::prelude::*;
use portfolio_core::{Profile, section_id};

use crate::icons::{ICON_ENVELOPE, ICON_LINKEDIN_LOGO, ICON_PHONE, Icon};
use crate::page::PageHandle;

#[component]
pub fn ContactSection(handle: PageHandle, profile: Profile) -> impl IntoView {
    let mailto = format!("mailto:{}", profile.email);
    let tel = format!("tel:{}", profile.phone);

    view! {
        <section id=section_id::CONTACT class="section contact-section">
            <div class="container">
                <h2 class=super::reveal_class(handle, section_id::CONTACT, "section-heading")>
                    "Get In " <span class="heading-accent">"Touch"</span>
                </h2>
                <div class=super::reveal_class(handle, section_id::CONTACT, "contact-card delayed")>
                    <div class="card-accent-bar"></div>

                    <div class="contact-row">
                        <span class="contact-icon blue">
                            <Icon path=ICON_ENVELOPE size="24"/>
                        </span>
                        <div>
                            <p class="contact-label">"Email"</p>
                            <a href=mailto class="contact-value">{profile.email.clone()}</a>
                        </div>
                    </div>

                    <div class="contact-row">
                        <span class="contact-icon purple">
                            <Icon path=ICON_PHONE size="24"/>
                        </span>
                        <div>
                            <p class="contact-label">"Phone"</p>
                            <a href=tel class="contact-value">{profile.phone.clone()}</a>
                        </div>
                    </div>

                    <div class="contact-row">
                        <span class="contact-icon pink">
                            <Icon path=ICON_LINKEDIN_LOGO size="24"/>
                        </span>
                        <div>
                            <p class="contact-label">"LinkedIn"</p>
                            <a
                                href=profile.linkedin.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="contact-value"
                            >
                                "Connect on LinkedIn"
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
