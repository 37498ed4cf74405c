//! CSS for the portfolio page.
//!
//! The complete stylesheet lives here as one constant and is rendered into a
//! `<style>` element by the app shell, so the build ships a single wasm
//! bundle with no external stylesheet to keep in sync.
//!
//! Layout notes:
//!
//! - `.revealed` drives the enter animations; every animated element starts
//!   translated/faded and transitions in once its section has been seen
//! - nav switches between transparent and solid via `.scrolled`
//! - mobile-first: the link row is hidden below 768px, the drawer above it

/// Complete stylesheet - dark gradient theme with blue/purple accents.
pub const PAGE_CSS: &str = r#"
:root {
    --bg-deep: #030712;
    --bg-dark: #111827;
    --bg-card-from: #1f2937;
    --bg-card-to: #111827;
    --text-bright: #f9fafb;
    --text-body: #d1d5db;
    --text-dim: #9ca3af;
    --border-card: #374151;
    --accent-blue: #3b82f6;
    --accent-blue-soft: #60a5fa;
    --accent-purple: #8b5cf6;
    --accent-pink: #ec4899;
    --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --container-max: 1152px;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg-deep);
    color: var(--text-body);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

/* ---------------------------------------------------------------- nav */

.nav {
    position: fixed;
    top: 0;
    left: 0;
    right: 0;
    z-index: 50;
    background: transparent;
    transition: background 0.3s ease, box-shadow 0.3s ease;
}

.nav.scrolled {
    background: rgba(17, 24, 39, 0.95);
    backdrop-filter: blur(12px);
    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
}

.nav-inner {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
    height: 64px;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.nav-brand {
    display: flex;
    align-items: center;
    gap: 8px;
    background: none;
    border: none;
    cursor: pointer;
    color: var(--text-bright);
    font-size: 20px;
    font-weight: 700;
    transition: color 0.2s ease;
}

.nav-brand:hover {
    color: var(--accent-blue-soft);
}

.nav-brand-icon {
    transition: transform 0.3s ease;
}

.nav-brand:hover .nav-brand-icon {
    transform: rotate(12deg);
}

.nav-links {
    display: none;
    gap: 4px;
}

.nav-link {
    padding: 8px 16px;
    border: none;
    border-radius: 8px;
    background: transparent;
    color: var(--text-body);
    font-size: 14px;
    font-weight: 500;
    cursor: pointer;
    transition: background 0.2s ease, color 0.2s ease;
}

.nav-link:hover {
    color: var(--text-bright);
    background: rgba(255, 255, 255, 0.1);
}

.nav-link.active {
    background: linear-gradient(to right, var(--accent-blue), var(--accent-purple));
    color: var(--text-bright);
    box-shadow: 0 8px 20px rgba(59, 130, 246, 0.35);
}

.nav-menu-btn {
    background: none;
    border: none;
    color: var(--text-bright);
    cursor: pointer;
    display: flex;
    align-items: center;
    transition: color 0.2s ease;
}

.nav-menu-btn:hover {
    color: var(--accent-blue-soft);
}

.nav-drawer {
    background: rgba(17, 24, 39, 0.95);
    backdrop-filter: blur(12px);
    border-radius: 0 0 12px 12px;
    padding: 16px 0;
    animation: fadeIn 0.3s ease-in;
}

.nav-drawer-link {
    display: block;
    width: 100%;
    text-align: left;
    padding: 12px 24px;
    border: none;
    background: transparent;
    color: var(--text-body);
    font-size: 15px;
    cursor: pointer;
    transition: background 0.2s ease, color 0.2s ease;
}

.nav-drawer-link:hover {
    color: var(--text-bright);
    background: rgba(255, 255, 255, 0.1);
}

.nav-drawer-link.active {
    background: linear-gradient(to right, var(--accent-blue), var(--accent-purple));
    color: var(--text-bright);
}

@media (min-width: 768px) {
    .nav-links {
        display: flex;
    }
    .nav-menu-btn, .nav-drawer {
        display: none;
    }
}

/* ---------------------------------------------------------------- hero */

.hero {
    position: relative;
    min-height: 100vh;
    padding-top: 64px;
    display: flex;
    align-items: center;
    overflow: hidden;
    background: linear-gradient(135deg, #111827 0%, #1e3a8a 50%, #581c87 100%);
}

.neural-bg {
    position: absolute;
    inset: 0;
    overflow: hidden;
    opacity: 0.2;
    pointer-events: none;
}

.neural-svg {
    width: 100%;
    height: 100%;
}

.neural-node {
    animation: pulse 3s ease-in-out infinite;
}

.particle-field {
    position: absolute;
    inset: 0;
    overflow: hidden;
    pointer-events: none;
}

.particle {
    position: absolute;
    width: 4px;
    height: 4px;
    border-radius: 50%;
    background: var(--accent-blue-soft);
    animation: float 6s ease-in-out infinite;
}

.hero-grid {
    position: relative;
    z-index: 10;
    display: grid;
    gap: 48px;
    align-items: center;
    padding-top: 80px;
    padding-bottom: 80px;
    width: 100%;
}

.hero-content {
    display: flex;
    flex-direction: column;
    gap: 24px;
    opacity: 0;
    transform: translateX(-40px);
    transition: opacity 1s ease, transform 1s ease;
}

.hero-content.revealed {
    opacity: 1;
    transform: translateX(0);
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    align-self: flex-start;
    padding: 8px 16px;
    background: rgba(59, 130, 246, 0.2);
    border: 1px solid rgba(96, 165, 250, 0.3);
    border-radius: 9999px;
    color: #93c5fd;
    font-size: 14px;
    font-weight: 500;
    backdrop-filter: blur(4px);
}

.hero-badge-icon {
    color: var(--accent-blue-soft);
}

.hero-name {
    margin: 0;
    font-size: clamp(30px, 5vw, 48px);
    font-weight: 700;
    color: var(--text-bright);
    letter-spacing: 0.02em;
    line-height: 1.2;
    text-transform: uppercase;
}

.hero-headline {
    margin: 0;
    font-size: clamp(24px, 3.5vw, 30px);
    font-weight: 600;
    background: linear-gradient(to right, var(--accent-blue-soft), #c084fc, #f472b6);
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.hero-caption {
    min-height: 32px;
    margin: 0;
    font-family: var(--font-mono);
    font-size: 20px;
    color: var(--text-body);
}

.hero-intro {
    margin: 0;
    max-width: 576px;
    font-size: 18px;
    line-height: 1.7;
}

.hero-actions {
    display: flex;
    flex-wrap: wrap;
    gap: 16px;
}

.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 14px 28px;
    border: none;
    border-radius: 12px;
    font-size: 16px;
    font-weight: 600;
    text-decoration: none;
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
}

.btn:hover {
    transform: scale(1.05);
}

.btn-primary {
    background: linear-gradient(to right, var(--accent-blue), var(--accent-purple));
    color: var(--text-bright);
}

.btn-primary:hover {
    box-shadow: 0 20px 40px rgba(59, 130, 246, 0.5);
}

.btn-secondary {
    background: rgba(255, 255, 255, 0.1);
    border: 1px solid rgba(255, 255, 255, 0.2);
    color: var(--text-bright);
    backdrop-filter: blur(4px);
}

.btn-secondary:hover {
    background: rgba(255, 255, 255, 0.2);
}

.hero-stats {
    display: flex;
    align-items: center;
    gap: 32px;
    padding-top: 16px;
}

.hero-stat {
    text-align: center;
}

.hero-stat:not(:first-child) {
    border-left: 1px solid #4b5563;
    padding-left: 32px;
}

.hero-stat-value {
    font-size: 30px;
    font-weight: 700;
    color: var(--text-bright);
}

.hero-stat-label {
    font-size: 14px;
    color: var(--text-dim);
}

.hero-emblem-wrap {
    display: flex;
    justify-content: center;
    opacity: 0;
    transform: translateX(40px);
    transition: opacity 1s ease 0.3s, transform 1s ease 0.3s;
}

.hero-emblem-wrap.revealed {
    opacity: 1;
    transform: translateX(0);
}

.hero-emblem {
    position: relative;
}

.emblem-glow {
    position: absolute;
    inset: 0;
    border-radius: 50%;
    background: linear-gradient(to right, var(--accent-blue), var(--accent-purple));
    filter: blur(64px);
    opacity: 0.3;
    animation: pulse 3s ease-in-out infinite;
}

.emblem-ring {
    position: absolute;
    border-radius: 50%;
}

.emblem-ring.outer {
    inset: -32px;
    border: 2px solid rgba(192, 132, 252, 0.2);
    animation: spin-slow 15s linear infinite reverse;
}

.emblem-ring.inner {
    inset: -16px;
    border: 2px solid rgba(96, 165, 250, 0.3);
    animation: spin-slow 20s linear infinite;
}

.emblem-disc {
    position: relative;
    width: 288px;
    height: 288px;
    border-radius: 50%;
    border: 4px solid rgba(59, 130, 246, 0.3);
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
    display: flex;
    align-items: center;
    justify-content: center;
}

.emblem-brain {
    color: var(--accent-blue-soft);
    position: relative;
    z-index: 10;
}

.emblem-chip {
    position: absolute;
    padding: 12px;
    border-radius: 8px;
    backdrop-filter: blur(4px);
    animation: float 6s ease-in-out infinite;
}

.emblem-chip.top-right {
    top: 32px;
    right: 32px;
    background: rgba(59, 130, 246, 0.2);
    border: 1px solid rgba(96, 165, 250, 0.3);
    color: var(--accent-blue-soft);
}

.emblem-chip.bottom-left {
    bottom: 32px;
    left: 32px;
    background: rgba(139, 92, 246, 0.2);
    border: 1px solid rgba(167, 139, 250, 0.3);
    color: #a78bfa;
}

.emblem-chip.mid-left {
    top: 50%;
    left: 0;
    background: rgba(236, 72, 153, 0.2);
    border: 1px solid rgba(244, 114, 182, 0.3);
    color: #f472b6;
}

.emblem-chip.mid-right {
    top: 50%;
    right: 0;
    background: rgba(34, 211, 238, 0.2);
    border: 1px solid rgba(103, 232, 249, 0.3);
    color: #67e8f9;
}

.hero-scroll-cue {
    position: absolute;
    bottom: 32px;
    left: 0;
    right: 0;
    display: flex;
    justify-content: center;
    z-index: 10;
}

.scroll-cue-btn {
    background: none;
    border: none;
    color: var(--text-bright);
    cursor: pointer;
    animation: bounce 1.5s infinite;
    transition: color 0.2s ease;
}

.scroll-cue-btn:hover {
    color: var(--accent-blue-soft);
}

@media (min-width: 1024px) {
    .hero-grid {
        grid-template-columns: 1fr 1fr;
    }
    .hero-emblem-wrap {
        justify-content: flex-end;
    }
    .emblem-disc {
        width: 384px;
        height: 384px;
    }
}

/* ---------------------------------------------------------------- sections */

.section {
    padding: 80px 0;
}

.about-section, .projects-section, .education-section, .contact-section {
    background: var(--bg-dark);
}

.experience-section, .skills-section, .publications-section {
    background: var(--bg-deep);
}

.projects-section {
    min-height: 100vh;
}

.section-heading {
    margin: 0 0 48px;
    text-align: center;
    font-size: clamp(36px, 5vw, 48px);
    font-weight: 700;
    color: var(--text-bright);
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 1s ease, transform 1s ease;
}

.section-heading.revealed {
    opacity: 1;
    transform: translateY(0);
}

.heading-accent {
    background: linear-gradient(to right, var(--accent-blue-soft), var(--accent-purple));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.card-accent-bar {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    border-radius: 16px 16px 0 0;
    background: linear-gradient(to right, var(--accent-blue), var(--accent-purple), var(--accent-pink));
}

.card-accent-rail {
    position: absolute;
    top: 0;
    left: 0;
    width: 8px;
    height: 100%;
    border-radius: 12px 0 0 12px;
    background: linear-gradient(to bottom, var(--accent-blue), var(--accent-purple));
}

.card-hover-bar {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 4px;
    border-radius: 12px 12px 0 0;
    background: linear-gradient(to right, var(--accent-blue), var(--accent-purple));
    opacity: 0;
    transition: opacity 0.3s ease;
}

.card-hover-bar.purple {
    background: linear-gradient(to right, var(--accent-purple), var(--accent-pink));
}

/* ---------------------------------------------------------------- about */

.about-card {
    position: relative;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 16px;
    padding: 48px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 1s ease, transform 1s ease;
}

.about-card.revealed {
    opacity: 1;
    transform: translateY(0);
}

.about-card.delayed {
    transition-delay: 0.2s;
}

.about-text {
    margin: 0;
    font-size: 18px;
    line-height: 1.7;
}

/* ---------------------------------------------------------------- experience */

.experience-list {
    display: flex;
    flex-direction: column;
    gap: 32px;
}

.experience-card {
    position: relative;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 12px;
    padding: 32px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
    opacity: 0;
    transform: translateX(-40px);
    transition: opacity 0.5s ease, transform 0.5s ease,
        border-color 0.3s ease, box-shadow 0.3s ease;
}

.experience-card.revealed {
    opacity: 1;
    transform: translateX(0);
}

.experience-card:hover {
    border-color: rgba(59, 130, 246, 0.5);
    box-shadow: 0 25px 50px rgba(59, 130, 246, 0.2);
}

.experience-header {
    display: flex;
    align-items: flex-start;
    gap: 16px;
    margin-bottom: 16px;
}

.experience-icon {
    padding: 12px;
    border-radius: 8px;
    background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(139, 92, 246, 0.2));
    border: 1px solid rgba(96, 165, 250, 0.3);
    color: var(--accent-blue-soft);
}

.experience-title {
    margin: 0;
    font-size: 20px;
    font-weight: 700;
    color: var(--text-bright);
}

.experience-company {
    margin: 0;
    font-weight: 600;
    color: var(--accent-blue-soft);
}

.experience-meta {
    margin: 0;
    font-size: 14px;
    color: var(--text-dim);
}

.disclosure-btn {
    display: flex;
    align-items: center;
    gap: 8px;
    margin-left: 64px;
    padding: 8px 16px;
    background: rgba(59, 130, 246, 0.2);
    border: 1px solid rgba(96, 165, 250, 0.5);
    border-radius: 8px;
    color: var(--accent-blue-soft);
    font-weight: 600;
    cursor: pointer;
    transition: background 0.3s ease, border-color 0.3s ease;
}

.disclosure-btn:hover {
    background: rgba(59, 130, 246, 0.3);
    border-color: var(--accent-blue-soft);
}

.disclosure-caret {
    display: inline-flex;
    transition: transform 0.3s ease;
}

.disclosure-caret.open {
    transform: rotate(180deg);
}

.achievement-list {
    list-style: none;
    margin: 16px 0 0;
    padding: 0 0 0 64px;
    display: flex;
    flex-direction: column;
    gap: 8px;
    animation: fadeIn 0.3s ease-in;
}

.achievement-item {
    display: flex;
    align-items: flex-start;
}

.achievement-bullet {
    color: var(--accent-blue-soft);
    margin-right: 8px;
}

/* ---------------------------------------------------------------- projects */

.projects-grid {
    display: grid;
    gap: 24px;
}

.project-card {
    position: relative;
    display: flex;
    flex-direction: column;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 12px;
    padding: 24px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
    opacity: 0;
    transform: scale(0.95);
    transition: opacity 0.5s ease, transform 0.5s ease,
        border-color 0.3s ease, box-shadow 0.3s ease;
}

.project-card.revealed {
    opacity: 1;
    transform: scale(1);
}

.project-card:hover {
    border-color: rgba(59, 130, 246, 0.5);
    box-shadow: 0 25px 50px rgba(59, 130, 246, 0.2);
    transform: translateY(-8px);
}

.project-card:hover .card-hover-bar {
    opacity: 1;
}

.project-title {
    margin: 0 0 12px;
    font-size: 20px;
    font-weight: 700;
    color: var(--text-bright);
    transition: color 0.2s ease;
}

.project-card:hover .project-title {
    color: var(--accent-blue-soft);
}

.project-description {
    margin-bottom: 16px;
    flex: 1;
}

.project-description p {
    margin: 0;
    line-height: 1.7;
}

.show-more-btn {
    margin-top: 8px;
    padding: 0;
    background: none;
    border: none;
    color: var(--accent-blue-soft);
    font-size: 14px;
    font-weight: 500;
    cursor: pointer;
    transition: color 0.2s ease;
}

.show-more-btn:hover {
    color: #93c5fd;
}

.tag-row {
    display: flex;
    flex-wrap: wrap;
    gap: 8px;
    margin-bottom: 16px;
}

.tag-chip {
    padding: 4px 12px;
    background: rgba(59, 130, 246, 0.1);
    border: 1px solid rgba(59, 130, 246, 0.3);
    border-radius: 9999px;
    color: var(--accent-blue-soft);
    font-size: 14px;
    font-weight: 500;
    backdrop-filter: blur(4px);
}

.project-links {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 12px;
}

.project-link {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    background: var(--border-card);
    border: none;
    border-radius: 8px;
    color: var(--text-bright);
    font-size: 15px;
    text-decoration: none;
    cursor: pointer;
    transition: background 0.2s ease;
}

.project-link:hover {
    background: #4b5563;
}

@media (min-width: 768px) {
    .projects-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .projects-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}

/* ---------------------------------------------------------------- skills */

.skills-grid {
    display: grid;
    gap: 24px;
}

.skill-card {
    position: relative;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 12px;
    padding: 24px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
    opacity: 0;
    transform: scale(0.95);
    transition: opacity 0.5s ease, transform 0.5s ease,
        border-color 0.3s ease, box-shadow 0.3s ease;
}

.skill-card.revealed {
    opacity: 1;
    transform: scale(1);
}

.skill-card:hover {
    border-color: rgba(139, 92, 246, 0.5);
    box-shadow: 0 25px 50px rgba(139, 92, 246, 0.2);
    transform: translateY(-8px);
}

.skill-card:hover .card-hover-bar {
    opacity: 1;
}

.skill-header {
    display: flex;
    align-items: center;
    gap: 12px;
    margin-bottom: 12px;
}

.skill-icon {
    color: #a78bfa;
    display: inline-flex;
    transition: transform 0.2s ease;
}

.skill-card:hover .skill-icon {
    transform: scale(1.1);
}

.skill-title {
    margin: 0;
    font-size: 18px;
    font-weight: 700;
    color: var(--text-bright);
    transition: color 0.2s ease;
}

.skill-card:hover .skill-title {
    color: #a78bfa;
}

.skill-summary {
    margin: 0;
}

@media (min-width: 640px) {
    .skills-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (min-width: 1024px) {
    .skills-grid {
        grid-template-columns: repeat(3, 1fr);
    }
}

/* ---------------------------------------------------------------- education */

.education-grid {
    display: grid;
    gap: 32px;
}

.education-column {
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 1s ease, transform 1s ease;
}

.education-column.revealed {
    opacity: 1;
    transform: translateY(0);
}

.education-column.delayed {
    transition-delay: 0.3s;
}

.column-heading {
    display: flex;
    align-items: center;
    gap: 12px;
    margin: 0 0 24px;
    font-size: 24px;
    font-weight: 700;
    color: var(--text-bright);
}

.column-icon.blue {
    color: var(--accent-blue-soft);
}

.column-icon.purple {
    color: #a78bfa;
}

.education-list {
    display: flex;
    flex-direction: column;
    gap: 24px;
}

.education-card {
    position: relative;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 12px;
    padding: 24px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
    transition: border-color 0.3s ease;
}

.education-card:hover {
    border-color: rgba(59, 130, 246, 0.5);
}

.education-degree {
    margin: 0;
    font-size: 18px;
    font-weight: 700;
    color: var(--text-bright);
}

.education-school {
    margin: 0;
    font-weight: 600;
    color: var(--accent-blue-soft);
}

.education-meta {
    margin: 0;
    color: var(--text-dim);
}

.certification-card {
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 12px;
    padding: 24px;
    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
}

.certification-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 12px;
}

.certification-item {
    display: flex;
    align-items: flex-start;
}

.certification-check {
    color: #a78bfa;
    margin-right: 8px;
}

@media (min-width: 768px) {
    .education-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

/* ---------------------------------------------------------------- publications */

.publication-card {
    position: relative;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 16px;
    padding: 32px;
    margin-bottom: 20px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
    opacity: 0;
    transform: translateY(40px);
    transition: opacity 0.5s ease, transform 0.5s ease,
        border-color 0.3s ease, box-shadow 0.3s ease;
}

.publication-card.revealed {
    opacity: 1;
    transform: translateY(0);
}

.publication-card:hover {
    border-color: rgba(59, 130, 246, 0.5);
    box-shadow: 0 25px 50px rgba(59, 130, 246, 0.2);
}

.publication-title {
    margin: 0 0 12px;
    font-size: 20px;
    font-weight: 700;
    color: var(--text-bright);
}

.publication-summary {
    margin: 0 0 16px;
}

/* ---------------------------------------------------------------- contact */

.contact-card {
    position: relative;
    max-width: 672px;
    margin: 0 auto;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 16px;
    padding: 48px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.4);
    display: flex;
    flex-direction: column;
    gap: 24px;
    opacity: 0;
    transform: scale(0.95);
    transition: opacity 1s ease, transform 1s ease;
}

.contact-card.revealed {
    opacity: 1;
    transform: scale(1);
}

.contact-card.delayed {
    transition-delay: 0.2s;
}

.contact-row {
    display: flex;
    align-items: center;
    gap: 16px;
}

.contact-icon {
    padding: 12px;
    border-radius: 8px;
    display: inline-flex;
    transition: transform 0.2s ease;
}

.contact-row:hover .contact-icon {
    transform: scale(1.1);
}

.contact-icon.blue {
    background: linear-gradient(135deg, rgba(59, 130, 246, 0.2), rgba(139, 92, 246, 0.2));
    border: 1px solid rgba(96, 165, 250, 0.3);
    color: var(--accent-blue-soft);
}

.contact-icon.purple {
    background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(236, 72, 153, 0.2));
    border: 1px solid rgba(167, 139, 250, 0.3);
    color: #a78bfa;
}

.contact-icon.pink {
    background: linear-gradient(135deg, rgba(236, 72, 153, 0.2), rgba(59, 130, 246, 0.2));
    border: 1px solid rgba(244, 114, 182, 0.3);
    color: #f472b6;
}

.contact-label {
    margin: 0;
    font-size: 14px;
    color: var(--text-dim);
}

.contact-value {
    font-size: 18px;
    font-weight: 600;
    color: var(--text-bright);
    text-decoration: none;
    transition: color 0.2s ease;
}

.contact-value:hover {
    color: var(--accent-blue-soft);
}

/* ---------------------------------------------------------------- dialog */

.dialog-backdrop {
    position: fixed;
    inset: 0;
    z-index: 50;
    display: flex;
    align-items: center;
    justify-content: center;
    background: rgba(0, 0, 0, 0.7);
    backdrop-filter: blur(4px);
    animation: fadeIn 0.2s ease-in;
}

.dialog-panel {
    position: relative;
    width: 100%;
    max-width: 672px;
    margin: 0 16px;
    background: linear-gradient(135deg, var(--bg-card-from), var(--bg-card-to));
    border: 1px solid var(--border-card);
    border-radius: 12px;
    padding: 24px;
    box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.dialog-close {
    position: absolute;
    top: 16px;
    right: 16px;
    background: none;
    border: none;
    color: var(--text-dim);
    cursor: pointer;
    transition: color 0.2s ease;
}

.dialog-close:hover {
    color: var(--text-bright);
}

.dialog-title {
    margin: 0 32px 16px 0;
    font-size: 24px;
    font-weight: 700;
    color: var(--text-bright);
}

.dialog-body {
    line-height: 1.7;
}

.dialog-body p {
    margin: 0;
}

/* ---------------------------------------------------------------- footer */

.footer {
    background: var(--bg-deep);
    border-top: 1px solid var(--bg-card-from);
    padding: 32px 0;
}

.footer-inner {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 16px;
}

.footer-copyright {
    margin: 0;
    color: var(--text-dim);
}

.footer-note {
    display: flex;
    align-items: center;
    gap: 8px;
    color: var(--text-dim);
}

.footer-brain {
    color: var(--accent-blue-soft);
}

@media (min-width: 768px) {
    .footer-inner {
        flex-direction: row;
    }
}

/* ---------------------------------------------------------------- keyframes */

@keyframes fadeIn {
    from { opacity: 0; }
    to { opacity: 1; }
}

@keyframes float {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-20px); }
}

@keyframes pulse {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.5; }
}

@keyframes spin-slow {
    from { transform: rotate(0deg); }
    to { transform: rotate(360deg); }
}

@keyframes bounce {
    0%, 100% { transform: translateY(0); }
    50% { transform: translateY(-10px); }
}
"#;
