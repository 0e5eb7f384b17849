//! Global CSS styles for the credential gallery.
//!
//! The webview's CSS engine owns all animation: the backdrop fade, the
//! panel pop, and the row hover transitions are keyframes/transitions here,
//! not Rust-side logic.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --surface-page: #0f1115;
  --surface-card: #ffffff;
  --surface-card-hover: rgba(148, 163, 184, 0.25);
  --surface-backdrop: rgba(0, 0, 0, 0.55);

  /* EMERALD (Calls to action) */
  --emerald: #059669;
  --emerald-bright: #10b981;

  /* TEXT */
  --text-strong: #1f2937;
  --text-body: #4b5563;
  --text-muted: #9ca3af;
  --text-on-dark: #e5e7eb;

  /* BORDERS */
  --border-soft: #e5e7eb;
  --border-pill: #d1d5db;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', Helvetica, Arial, sans-serif;

  /* Type Scale */
  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--surface-page);
  color: var(--text-on-dark);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-size: var(--text-2xl);
  font-weight: 600;
  color: var(--text-on-dark);
  letter-spacing: 0.02em;
  margin-bottom: 1.5rem;
  text-align: center;
}

/* === Gallery List === */
.gallery {
  max-width: 42rem;
  margin: 0 auto;
  padding: 2rem 1rem;
}

.card-list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.card-row {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem;
  border-radius: 0.75rem;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.card-row:hover {
  background: var(--surface-card-hover);
}

.card-row__summary {
  display: flex;
  align-items: center;
  gap: 1rem;
}

.card-row__thumb {
  height: 3.5rem;
  width: 3.5rem;
  border-radius: 0.5rem;
  object-fit: cover;
  object-position: top;
}

/* === Card Header (shared by row and panel) === */
.card-header__title {
  font-size: var(--text-sm);
  font-weight: 600;
  color: inherit;
}

.card-header__issuer {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

/* === Call to Action === */
.cta-button {
  padding: 0.5rem 1rem;
  font-size: var(--text-sm);
  font-weight: 700;
  border: none;
  border-radius: 9999px;
  background: var(--emerald);
  color: #ffffff;
  cursor: pointer;
  transition: background var(--transition-fast);
}

.cta-button:hover {
  background: var(--emerald-bright);
}

.credential-link {
  padding: 0.75rem 1rem;
  font-size: var(--text-sm);
  font-weight: 700;
  border-radius: 9999px;
  background: var(--emerald);
  color: #ffffff;
  text-decoration: none;
  white-space: nowrap;
}

.credential-link:hover {
  background: var(--emerald-bright);
}

/* === Modal Overlay === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: var(--surface-backdrop);
  display: grid;
  place-items: center;
  z-index: 100;
  padding: 1.5rem;
  outline: none;
  animation: backdrop-fade var(--transition-normal);
}

@keyframes backdrop-fade {
  from { opacity: 0; }
  to   { opacity: 1; }
}

/* === Expanded Detail Panel === */
.card-detail {
  position: relative;
  display: flex;
  flex-direction: column;
  width: 100%;
  max-width: 500px;
  max-height: 90vh;
  background: var(--surface-card);
  color: var(--text-strong);
  border-radius: 1.5rem;
  overflow: hidden;
  animation: panel-pop var(--transition-normal);
}

@keyframes panel-pop {
  from {
    opacity: 0;
    transform: scale(0.92) translateY(1rem);
  }
  to {
    opacity: 1;
    transform: scale(1) translateY(0);
  }
}

.modal-close-btn {
  position: absolute;
  top: 0.5rem;
  right: 0.5rem;
  height: 1.75rem;
  width: 1.75rem;
  display: flex;
  align-items: center;
  justify-content: center;
  border: none;
  border-radius: 9999px;
  background: #ffffff;
  color: var(--text-strong);
  font-size: var(--text-base);
  cursor: pointer;
  z-index: 1;
  transition: background var(--transition-fast);
}

.modal-close-btn:hover {
  background: var(--border-soft);
}

.card-detail__image {
  width: 100%;
  height: 18rem;
  object-fit: cover;
  object-position: top;
}

.card-detail__body {
  padding: 1rem;
  overflow-y: auto;
}

.card-detail__header-row {
  display: flex;
  justify-content: space-between;
  align-items: flex-start;
  gap: 1rem;
  margin-bottom: 1rem;
}

.card-detail__header-row .card-header__title {
  font-size: var(--text-base);
  color: var(--text-strong);
}

.card-detail__header-row .card-header__issuer {
  color: var(--text-body);
}

.card-detail__skills {
  margin-bottom: 1rem;
}

.card-detail__skills-title {
  font-size: var(--text-sm);
  font-weight: 600;
  color: var(--text-strong);
  margin-bottom: 0.5rem;
}

/* === Skill Pills === */
.skill-pills {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.pill {
  padding: 0.125rem 0.625rem;
  font-size: var(--text-xs);
  border: 1px solid var(--border-pill);
  border-radius: 9999px;
  background: #f3f4f6;
  color: var(--text-body);
}

/* === Expanded Content Body === */
.card-detail__content {
  font-size: var(--text-sm);
  color: var(--text-body);
  max-height: 12rem;
  overflow-y: auto;
  padding-bottom: 2rem;
  mask-image: linear-gradient(to bottom, white 70%, transparent);
  -webkit-mask-image: linear-gradient(to bottom, white 70%, transparent);
  scrollbar-width: none;
}
"#;
