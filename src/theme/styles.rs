//! Global CSS for the portfolio.
//!
//! Dark ink background with violet and cyan accents.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --ink: #0b0b12;
  --ink-raised: #12121c;
  --ink-border: #23233a;

  --violet: #8b5cf6;
  --violet-soft: rgba(139, 92, 246, 0.18);
  --cyan: #22d3ee;
  --cyan-soft: rgba(34, 211, 238, 0.16);

  --text-primary: #f4f4f8;
  --text-secondary: rgba(244, 244, 248, 0.72);
  --text-muted: rgba(244, 244, 248, 0.48);

  --success: #4ade80;
  --danger: #f43f5e;

  --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --navbar-height: 72px;
  --radius: 14px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
  background: var(--ink);
  color: var(--text-primary);
  font-family: var(--font-sans);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

button {
  font: inherit;
  color: inherit;
  background: none;
  border: none;
  cursor: pointer;
}

.fatal {
  padding: 2rem;
  color: var(--danger);
  font-family: var(--font-mono);
}

/* === Page Shell === */
.page {
  height: 100vh;
  overflow-y: auto;
  overflow-x: hidden;
  outline: none;
  scroll-behavior: smooth;
}

.page.scroll-locked {
  overflow: hidden;
}

.page.custom-cursor,
.page.custom-cursor * {
  cursor: none;
}

.page-main {
  position: relative;
}

/* === Navbar === */
.navbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  z-index: 40;
  height: var(--navbar-height);
  transition: background var(--transition-normal), border-color var(--transition-normal);
  border-bottom: 1px solid transparent;
}

.navbar.scrolled {
  background: rgba(11, 11, 18, 0.82);
  backdrop-filter: blur(12px);
  border-bottom-color: var(--ink-border);
}

.navbar-inner {
  max-width: 1120px;
  height: 100%;
  margin: 0 auto;
  padding: 0 1.5rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.navbar-logo {
  font-family: var(--font-mono);
  font-size: 1.25rem;
  font-weight: 700;
  letter-spacing: 0.04em;
}

.logo-dot {
  color: var(--violet);
}

.navbar-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link {
  padding: 0.5rem 0.9rem;
  border-radius: 999px;
  color: var(--text-secondary);
  font-size: 0.9rem;
  transition: color var(--transition-fast), background var(--transition-fast);
}

.nav-link:hover {
  color: var(--text-primary);
}

.nav-link.active {
  color: var(--text-primary);
  background: var(--violet-soft);
}

.menu-toggle {
  padding: 0.5rem;
  border-radius: 10px;
}

/* === Drawer === */
.drawer-backdrop {
  position: fixed;
  inset: 0;
  z-index: 45;
  background: rgba(0, 0, 0, 0.55);
  backdrop-filter: blur(4px);
}

.drawer {
  position: fixed;
  top: 0;
  right: 0;
  bottom: 0;
  z-index: 50;
  width: min(80vw, 320px);
  padding: calc(var(--navbar-height) + 1rem) 1.5rem 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  background: var(--ink-raised);
  border-left: 1px solid var(--ink-border);
  animation: drawer-in var(--transition-normal);
}

.drawer-link {
  text-align: left;
  padding: 0.9rem 1rem;
  border-radius: 10px;
  font-size: 1.1rem;
  color: var(--text-secondary);
}

.drawer-link.active {
  color: var(--text-primary);
  background: var(--violet-soft);
}

@keyframes drawer-in {
  from { transform: translateX(100%); }
  to { transform: translateX(0); }
}

/* === Hero === */
.hero {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  overflow: hidden;
  padding: calc(var(--navbar-height) + 2rem) 1.5rem 4rem;
}

.hero-parallax {
  position: absolute;
  inset: 0;
  pointer-events: none;
}

.orb {
  position: absolute;
  border-radius: 50%;
  filter: blur(80px);
  will-change: transform;
}

.orb-violet {
  top: 10%;
  left: 8%;
  width: 420px;
  height: 420px;
  background: var(--violet-soft);
}

.orb-cyan {
  bottom: 8%;
  right: 6%;
  width: 360px;
  height: 360px;
  background: var(--cyan-soft);
}

.hero-content {
  position: relative;
  max-width: 1120px;
  width: 100%;
  margin: 0 auto;
}

.hero-eyebrow {
  font-family: var(--font-mono);
  color: var(--cyan);
}

.hero-name {
  font-size: clamp(2.5rem, 7vw, 4.75rem);
  line-height: 1.1;
  font-weight: 800;
}

.hero-role {
  font-size: 1.25rem;
  color: var(--text-secondary);
}

.hero-typed {
  margin-top: 1rem;
  font-size: 1.5rem;
  min-height: 2.4rem;
}

.hero-phrase {
  color: var(--violet);
  font-weight: 600;
}

.caret {
  color: var(--cyan);
  animation: blink 1s steps(1) infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-bio {
  max-width: 640px;
  margin-top: 1.25rem;
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  flex-wrap: wrap;
  gap: 0.75rem;
  margin-top: 2rem;
}

.hero-social {
  display: flex;
  gap: 0.5rem;
  margin-top: 1.5rem;
}

.hero-stats {
  display: flex;
  flex-wrap: wrap;
  gap: 2.5rem;
  margin-top: 3rem;
}

.stat-value {
  font-size: 1.75rem;
  font-weight: 700;
  color: var(--text-primary);
}

.stat-label {
  font-size: 0.85rem;
  color: var(--text-muted);
}

/* === Sections === */
.page-section {
  padding: 6rem 1.5rem;
  scroll-margin-top: var(--navbar-height);
}

.section-inner {
  max-width: 1120px;
  margin: 0 auto;
}

.section-header {
  margin-bottom: 3rem;
}

.section-eyebrow {
  font-family: var(--font-mono);
  font-size: 0.85rem;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.12em;
}

.section-number {
  color: var(--violet);
}

.section-title {
  font-size: clamp(1.75rem, 4vw, 2.75rem);
  line-height: 1.2;
}

.section-lead {
  margin-top: 0.75rem;
  max-width: 560px;
  color: var(--text-secondary);
}

/* === About === */
.about-grid {
  display: grid;
  grid-template-columns: 3fr 2fr;
  gap: 3rem;
}

.about-copy p + p {
  margin-top: 1rem;
}

.about-copy,
.about-location {
  color: var(--text-secondary);
}

.about-location {
  display: flex;
  align-items: center;
  gap: 0.4rem;
}

.about-facts {
  display: grid;
  gap: 1rem;
}

.fact dt {
  font-size: 0.8rem;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.value-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
  gap: 1rem;
  margin-top: 3rem;
}

.value-card {
  padding: 1.5rem;
  border-radius: var(--radius);
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  border-top: 3px solid var(--accent);
}

.value-card p {
  margin-top: 0.5rem;
  font-size: 0.9rem;
  color: var(--text-secondary);
}

/* === Tech === */
.tech-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
  gap: 1rem;
}

.tech-tile {
  position: relative;
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.35rem;
  padding: 1.5rem 1rem;
  border-radius: var(--radius);
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.tech-tile.hovered {
  transform: translateY(-4px);
  border-color: var(--accent);
}

.tech-glyph {
  font-size: 1.75rem;
  color: var(--accent);
}

.tech-category {
  font-size: 0.75rem;
  color: var(--text-muted);
}

.tech-tooltip {
  position: absolute;
  bottom: calc(100% + 0.5rem);
  left: 50%;
  transform: translateX(-50%);
  width: 220px;
  padding: 0.6rem 0.8rem;
  border-radius: 10px;
  background: var(--ink);
  border: 1px solid var(--ink-border);
  font-size: 0.8rem;
  color: var(--text-secondary);
  z-index: 5;
}

/* === Experience === */
.timeline {
  list-style: none;
  position: relative;
  padding-left: 1.75rem;
  border-left: 1px solid var(--ink-border);
}

.timeline-item {
  position: relative;
}

.timeline-item + .timeline-item {
  margin-top: 2rem;
}

.timeline-marker {
  position: absolute;
  left: calc(-1.75rem - 6px);
  top: 1.6rem;
  width: 11px;
  height: 11px;
  border-radius: 50%;
  background: var(--violet);
  box-shadow: 0 0 12px var(--violet);
}

.timeline-card {
  padding: 1.5rem;
  border-radius: var(--radius);
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
}

.timeline-header {
  display: flex;
  justify-content: space-between;
  gap: 1rem;
  flex-wrap: wrap;
}

.timeline-company {
  color: var(--cyan);
}

.timeline-meta {
  display: flex;
  flex-direction: column;
  align-items: flex-end;
  font-size: 0.85rem;
  color: var(--text-muted);
}

.timeline-location {
  display: flex;
  align-items: center;
  gap: 0.3rem;
}

.timeline-description {
  margin-top: 1rem;
  color: var(--text-secondary);
}

.timeline-metrics {
  margin: 1rem 0;
  padding-left: 1.25rem;
  color: var(--text-secondary);
  font-size: 0.9rem;
}

/* === Tags === */
.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  list-style: none;
}

.tag {
  padding: 0.2rem 0.65rem;
  border-radius: 999px;
  font-family: var(--font-mono);
  font-size: 0.75rem;
  border: 1px solid var(--ink-border);
  color: var(--text-secondary);
}

.tag-violet {
  background: var(--violet-soft);
  border-color: transparent;
  color: #c4b5fd;
}

.tag-cyan {
  background: var(--cyan-soft);
  border-color: transparent;
  color: #a5f3fc;
}

/* === Projects === */
.project-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  gap: 1.5rem;
}

.project-card {
  overflow: hidden;
  border-radius: var(--radius);
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.project-card:hover {
  transform: translateY(-4px);
  border-color: var(--violet);
}

.project-card.featured {
  border-color: rgba(139, 92, 246, 0.4);
}

.project-media {
  aspect-ratio: 16 / 9;
  overflow: hidden;
}

.project-media img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.project-placeholder {
  width: 100%;
  height: 100%;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(135deg, var(--violet), var(--cyan));
  font-size: 2rem;
  font-weight: 800;
  color: rgba(255, 255, 255, 0.85);
}

.project-body {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.project-description,
.project-detail {
  color: var(--text-secondary);
  font-size: 0.95rem;
}

.project-links {
  display: flex;
  gap: 0.5rem;
}

/* === Buttons === */
.btn-primary,
.btn-outline,
.btn-ghost {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.7rem 1.3rem;
  border-radius: 999px;
  font-weight: 600;
  font-size: 0.95rem;
  transition: background var(--transition-fast), border-color var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary:disabled,
.btn-outline:disabled,
.btn-ghost:disabled {
  opacity: 0.6;
  cursor: default;
}

.btn-primary {
  background: var(--violet);
  color: #fff;
}

.btn-primary:hover:not(:disabled) {
  background: #7c3aed;
}

.btn-outline {
  border: 1px solid var(--ink-border);
}

.btn-outline:hover:not(:disabled) {
  border-color: var(--cyan);
}

.btn-ghost {
  padding: 0.5rem 0.9rem;
  color: var(--text-secondary);
}

.btn-ghost:hover:not(:disabled) {
  color: var(--text-primary);
}

.icon-btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 42px;
  height: 42px;
  border-radius: 50%;
  border: 1px solid var(--ink-border);
  color: var(--text-secondary);
  transition: color var(--transition-fast), border-color var(--transition-fast);
}

.icon-btn:hover {
  color: var(--text-primary);
  border-color: var(--violet);
}

/* === Contact === */
.contact-grid {
  display: grid;
  grid-template-columns: 2fr 3fr;
  gap: 2rem;
}

.contact-card {
  display: flex;
  flex-direction: column;
  align-items: flex-start;
  gap: 1rem;
  padding: 1.75rem;
  border-radius: var(--radius);
  background: var(--ink-raised);
  border: 1px solid var(--ink-border);
}

.contact-label {
  font-size: 0.8rem;
  color: var(--text-muted);
  text-transform: uppercase;
  letter-spacing: 0.08em;
}

.contact-email {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.05rem;
  color: var(--cyan);
}

.copy-button.copied {
  border-color: var(--success);
  color: var(--success);
}

.contact-location {
  display: flex;
  align-items: center;
  gap: 0.4rem;
  color: var(--text-secondary);
}

.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.form-row {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 1rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: 0.85rem;
  color: var(--text-secondary);
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  border-radius: 10px;
  border: 1px solid var(--ink-border);
  background: var(--ink-raised);
  color: var(--text-primary);
  font: inherit;
  resize: vertical;
  transition: border-color var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--violet);
}

.form-message {
  font-size: 0.9rem;
}

.form-message.success {
  color: var(--success);
}

.form-message.error {
  color: var(--danger);
}

.submit-button {
  align-self: flex-start;
}

.spin {
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

/* === Footer === */
.footer {
  max-width: 1120px;
  margin: 0 auto;
  padding: 2rem 1.5rem 3rem;
  display: flex;
  justify-content: space-between;
  align-items: center;
  border-top: 1px solid var(--ink-border);
  color: var(--text-muted);
  font-size: 0.85rem;
}

.footer-top:hover {
  color: var(--text-primary);
}

/* === Custom Cursor === */
.cursor {
  position: fixed;
  inset: 0;
  z-index: 100;
  pointer-events: none;
  opacity: 0;
  transition: opacity var(--transition-fast);
}

.cursor.visible {
  opacity: 1;
}

.cursor-ring,
.cursor-dot {
  position: absolute;
  top: 0;
  left: 0;
  border-radius: 50%;
  will-change: transform;
}

.cursor-ring {
  border: 1.5px solid var(--violet);
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.cursor.hovering .cursor-ring {
  border-color: var(--cyan);
  background: var(--cyan-soft);
}

.cursor-dot {
  background: var(--cyan);
}

/* === Narrow Viewports === */
@media (max-width: 768px) {
  .hero-stats {
    gap: 1.5rem;
  }

  .about-grid,
  .contact-grid,
  .form-row {
    grid-template-columns: 1fr;
  }

  .project-grid {
    grid-template-columns: 1fr;
  }

  .page-section {
    padding: 4rem 1.25rem;
  }

  .footer {
    flex-direction: column;
    gap: 0.75rem;
  }

  .timeline-meta {
    align-items: flex-start;
  }
}
"#;
