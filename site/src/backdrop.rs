//! Cosmetic animated backdrops for the hero banner.
//!
//! Pure decoration: a randomized neural-network node field and a layer of
//! floating particles. Generated once per mount; the motion itself is CSS.

use leptos::prelude::*;

const NODE_COUNT: usize = 20;
const LINK_DISTANCE: f64 = 20.0;
const PARTICLE_COUNT: usize = 30;

struct Node {
    x: f64,
    y: f64,
    radius: f64,
    pulse_secs: f64,
}

fn random_nodes() -> Vec<Node> {
    (0..NODE_COUNT)
        .map(|_| Node {
            x: js_sys::Math::random() * 100.0,
            y: js_sys::Math::random() * 100.0,
            radius: js_sys::Math::random() * 3.0 + 2.0,
            pulse_secs: 2.0 + js_sys::Math::random() * 2.0,
        })
        .collect()
}

/// SVG node field with connecting lines between nearby nodes, opacity
/// weighted by distance.
#[component]
pub fn NeuralNetworkBg() -> impl IntoView {
    let nodes = random_nodes();

    let mut lines = Vec::new();
    for (i, a) in nodes.iter().enumerate() {
        for b in nodes.iter().skip(i + 1) {
            let distance = ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt();
            if distance < LINK_DISTANCE {
                lines.push((a.x, a.y, b.x, b.y, 1.0 - distance / LINK_DISTANCE));
            }
        }
    }

    view! {
        <div class="neural-bg">
            <svg class="neural-svg">
                <defs>
                    <linearGradient id="nodeGradient" x1="0%" y1="0%" x2="100%" y2="100%">
                        <stop offset="0%" stop-color="#3b82f6"/>
                        <stop offset="100%" stop-color="#8b5cf6"/>
                    </linearGradient>
                </defs>
                {lines
                    .into_iter()
                    .map(|(x1, y1, x2, y2, opacity)| {
                        view! {
                            <line
                                x1=format!("{x1:.2}%")
                                y1=format!("{y1:.2}%")
                                x2=format!("{x2:.2}%")
                                y2=format!("{y2:.2}%")
                                stroke="url(#nodeGradient)"
                                stroke-width="0.5"
                                opacity=format!("{opacity:.3}")
                            ></line>
                        }
                    })
                    .collect::<Vec<_>>()}
                {nodes
                    .into_iter()
                    .map(|node| {
                        view! {
                            <circle
                                cx=format!("{:.2}%", node.x)
                                cy=format!("{:.2}%", node.y)
                                r=format!("{:.2}", node.radius)
                                fill="url(#nodeGradient)"
                                class="neural-node"
                                style=format!("animation-duration: {:.2}s;", node.pulse_secs)
                            ></circle>
                        }
                    })
                    .collect::<Vec<_>>()}
            </svg>
        </div>
    }
}

/// Floating particle layer: small dots drifting upward on randomized delays.
#[component]
pub fn ParticleEffect() -> impl IntoView {
    view! {
        <div class="particle-field">
            {(0..PARTICLE_COUNT)
                .map(|_| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s;",
                        js_sys::Math::random() * 100.0,
                        js_sys::Math::random() * 100.0,
                        js_sys::Math::random() * 5.0,
                        5.0 + js_sys::Math::random() * 10.0,
                    );
                    view! { <span class="particle" style=style></span> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
