//! Global CSS styles for the Drachenhort gallery.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --page-bg: #f5f3fa;
  --surface: #ffffff;
  --surface-glass: rgba(255, 255, 255, 0.8);

  --purple: #8b5cf6;
  --purple-dark: #7c3aed;
  --purple-soft: #ede9fe;
  --purple-border: #ddd6fe;

  --text-primary: #111827;
  --text-secondary: #4b5563;
  --text-muted: #6b7280;
  --danger: #ef4444;
  --match-bg: #fde68a;

  --radius: 0.75rem;
  --shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1);
  --shadow-lifted: 0 25px 50px -12px rgba(0, 0, 0, 0.25);

  --transition-normal: 300ms ease-in-out;
  --entry-duration: 300ms;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: system-ui, -apple-system, 'Segoe UI', sans-serif;
  background: var(--page-bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Page === */
.page {
  min-height: 100vh;
  padding: 2rem;
}

.page-inner {
  max-width: 80rem;
  margin: 0 auto;
}

.page-title {
  font-size: 2.25rem;
  font-weight: 700;
  text-align: center;
  margin-bottom: 2rem;
}

/* === Filter Bar === */
.gallery {
  display: flex;
  flex-direction: column;
  gap: 2rem;
}

.filter-bar {
  position: sticky;
  top: 0;
  z-index: 10;
  background: var(--surface-glass);
  backdrop-filter: blur(4px);
  padding: 1.5rem;
  border-radius: var(--radius);
  box-shadow: var(--shadow);
}

.filter-bar__row {
  display: flex;
  flex-wrap: wrap;
  gap: 1rem;
}

.filter-bar__meta {
  margin-top: 1rem;
  justify-content: space-between;
  align-items: center;
  font-size: 0.875rem;
  color: var(--text-secondary);
}

.search-input-wrapper {
  flex: 1;
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.input-field,
.category-select {
  padding: 0.5rem 1rem;
  border: 2px solid var(--purple-border);
  border-radius: 0.5rem;
  background: var(--surface);
  font-size: 1rem;
  transition: border-color var(--transition-normal), box-shadow var(--transition-normal);
}

.search-input {
  flex: 1;
}

.input-field:focus,
.category-select:focus {
  outline: none;
  border-color: transparent;
  box-shadow: 0 0 0 2px var(--purple);
}

.toggle {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  cursor: pointer;
}

.toggle.checked .toggle-label {
  color: var(--purple-dark);
}

/* === Card Grid === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
  gap: 1.5rem;
}

.card-tile {
  overflow: hidden;
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow);
  padding: 1.5rem;
  cursor: pointer;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.card-tile:hover {
  transform: translateY(-0.25rem);
  box-shadow: var(--shadow-lifted);
}

.card-tile.entering {
  animation: card-enter var(--entry-duration) cubic-bezier(0.22, 1, 0.36, 1) both;
}

@keyframes card-enter {
  from {
    opacity: 0;
    transform: translate(var(--entry-x, 0), var(--entry-y, 0)) scale(0.9);
  }
  to {
    opacity: 1;
    transform: none;
  }
}

.card-tile__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.card-tile__name {
  font-size: 1.25rem;
  font-weight: 700;
  transition: color var(--transition-normal);
}

.card-tile:hover .card-tile__name {
  color: var(--purple-dark);
}

.category-badge {
  padding: 0.25rem 0.75rem;
  background: var(--purple-soft);
  color: var(--purple-dark);
  font-size: 0.75rem;
  font-weight: 500;
  border-radius: 9999px;
  white-space: nowrap;
}

.card-description {
  color: var(--text-primary);
  font-size: 0.875rem;
  white-space: pre-wrap;
}

mark.match {
  background: var(--match-bg);
  color: inherit;
  border-radius: 0.125rem;
}

/* === Empty / Loading / Error === */
.empty-result {
  text-align: center;
  padding: 3rem 0;
}

.empty-result__text {
  color: var(--text-muted);
  font-size: 1.125rem;
}

.btn-primary {
  margin-top: 1rem;
  padding: 0.5rem 1rem;
  background: var(--purple);
  color: #ffffff;
  border: none;
  border-radius: 0.5rem;
  cursor: pointer;
  transition: background var(--transition-normal);
}

.btn-primary:hover {
  background: var(--purple-dark);
}

.gallery-loading,
.spinner-container {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  align-items: center;
  justify-content: center;
  min-height: 25rem;
}

.spinner-label {
  color: var(--text-secondary);
}

.spinner {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  border-top: 2px solid var(--purple);
  border-bottom: 2px solid var(--purple);
  animation: spin 1s linear infinite;
}

@keyframes spin {
  to { transform: rotate(360deg); }
}

.gallery-error__title {
  color: var(--danger);
}

.gallery-error__detail {
  color: var(--text-muted);
  font-size: 0.75rem;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(17, 24, 39, 0.6);
  backdrop-filter: blur(4px);
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 1000;
  padding: 2rem;
  animation: fade-in 200ms ease-out;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.card-modal {
  position: relative;
  background: var(--surface);
  border-radius: var(--radius);
  box-shadow: var(--shadow-lifted);
  max-width: 40rem;
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
}

.close-btn {
  position: absolute;
  top: 0.75rem;
  right: 0.75rem;
  width: 2rem;
  height: 2rem;
  border: none;
  border-radius: 9999px;
  background: var(--surface-glass);
  font-size: 1.5rem;
  line-height: 1;
  cursor: pointer;
}

.card-image__img {
  display: block;
  width: 100%;
  max-height: 24rem;
  object-fit: contain;
  background: var(--purple-soft);
}

.card-image__placeholder,
.card-image__loading {
  display: flex;
  align-items: center;
  justify-content: center;
  height: 12rem;
  background: var(--purple-soft);
  color: var(--purple);
  font-size: 3rem;
}

.card-tile .card-image__img,
.card-tile .card-image__placeholder,
.card-tile .card-image__loading {
  height: 9rem;
  max-height: 9rem;
  margin: -1.5rem -1.5rem 1rem;
  width: calc(100% + 3rem);
  font-size: 2rem;
}

.card-modal__body {
  padding: 1.5rem;
}

.card-modal__header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  margin-bottom: 1rem;
}

.card-modal__title {
  font-size: 1.5rem;
  font-weight: 700;
}
"#;
