use std::time::Duration;

use leptos::prelude::*;
use portfolio_core::{Profile, Typewriter, section_id};

use crate::backdrop::{NeuralNetworkBg, ParticleEffect};
use crate::icons::{
    ICON_BRAIN, ICON_CARET_DOWN, ICON_CODE, ICON_DATABASE, ICON_ENVELOPE, ICON_GRAPH,
    ICON_LIGHTNING, ICON_LINKEDIN_LOGO, ICON_SPARKLE, Icon,
};
use crate::page::PageHandle;

/// Interval between typewriter reveals.
const TYPE_INTERVAL: Duration = Duration::from_millis(100);

/// Hero banner: availability badge, name, typewriter caption, call-to-action
/// buttons, headline stats, and the animated emblem.
#[component]
pub fn HeroSection(handle: PageHandle, profile: Profile) -> impl IntoView {
    let caption = RwSignal::new(Typewriter::new(profile.caption.clone()));
    let ticker = StoredValue::new(None::<IntervalHandle>);

    // One reveal per interval tick; the interval is cleared once the caption
    // is complete and torn down on unmount either way.
    Effect::new(move || {
        if ticker.get_value().is_some() {
            return;
        }
        let started = set_interval_with_handle(
            move || {
                let mut done = false;
                caption.update(|tw| {
                    tw.tick();
                    done = tw.is_complete();
                });
                if done {
                    if let Some(interval) = ticker.get_value() {
                        interval.clear();
                        ticker.set_value(None);
                    }
                }
            },
            TYPE_INTERVAL,
        );
        if let Ok(interval) = started {
            ticker.set_value(Some(interval));
        }
    });
    on_cleanup(move || {
        if let Some(interval) = ticker.get_value() {
            interval.clear();
        }
    });

    let mailto = format!("mailto:{}", profile.email);

    view! {
        <section id=section_id::HOME class="hero">
            <NeuralNetworkBg/>
            <ParticleEffect/>

            <div class="container hero-grid">
                <div class=super::reveal_class(handle, section_id::HOME, "hero-content")>
                    <div class="hero-badge">
                        <Icon path=ICON_SPARKLE size="18" class="hero-badge-icon"/>
                        <span>{profile.availability.clone()}</span>
                    </div>

                    <h1 class="hero-name">{profile.name.clone()}</h1>
                    <h2 class="hero-headline">{profile.headline.clone()}</h2>
                    <p class="hero-caption">
                        {move || caption.with(|tw| tw.revealed().to_string())}
                    </p>
                    <p class="hero-intro">{profile.intro.clone()}</p>

                    <div class="hero-actions">
                        <a href=mailto class="btn btn-primary">
                            <Icon path=ICON_ENVELOPE size="20"/>
                            <span>"Contact Me"</span>
                        </a>
                        <a
                            href=profile.linkedin.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="btn btn-secondary"
                        >
                            <Icon path=ICON_LINKEDIN_LOGO size="20"/>
                            <span>"LinkedIn"</span>
                        </a>
                    </div>

                    <div class="hero-stats">
                        {profile
                            .stats
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="hero-stat">
                                        <div class="hero-stat-value">{stat.value.clone()}</div>
                                        <div class="hero-stat-label">{stat.label.clone()}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <div class=super::reveal_class(handle, section_id::HOME, "hero-emblem-wrap")>
                    <div class="hero-emblem">
                        <div class="emblem-glow"></div>
                        <div class="emblem-ring outer"></div>
                        <div class="emblem-ring inner"></div>
                        <div class="emblem-disc">
                            <Icon path=ICON_BRAIN size="120" class="emblem-brain"/>
                            <div class="emblem-chip top-right">
                                <Icon path=ICON_LIGHTNING size="24"/>
                            </div>
                            <div class="emblem-chip bottom-left" style="animation-delay: 1s;">
                                <Icon path=ICON_DATABASE size="24"/>
                            </div>
                            <div class="emblem-chip mid-left" style="animation-delay: 2s;">
                                <Icon path=ICON_GRAPH size="24"/>
                            </div>
                            <div class="emblem-chip mid-right" style="animation-delay: 1.5s;">
                                <Icon path=ICON_CODE size="24"/>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="hero-scroll-cue">
                <button
                    class="scroll-cue-btn"
                    on:click=move |_| handle.goto(section_id::ABOUT)
                >
                    <Icon path=ICON_CARET_DOWN size="40"/>
                </button>
            </div>
        </section>
    }
}
