//! Global CSS styles for the catalog.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Surfaces */
  --surface: #f7f7f5;
  --surface-raised: #ffffff;
  --border: #d9d9d4;
  --overlay: rgba(20, 20, 20, 0.45);

  /* Accents */
  --primary: #2f6f4f;
  --primary-hover: #245a3f;
  --primary-soft: rgba(47, 111, 79, 0.12);

  /* Text */
  --text-primary: #1c1c1c;
  --text-secondary: #555555;
  --text-muted: #8a8a8a;

  /* Semantic */
  --danger: #c62845;

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;

  --radius: 6px;
  --transition-fast: 150ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  background: var(--surface);
  color: var(--text-primary);
  font-family: var(--font-sans);
  font-size: var(--text-base);
  line-height: 1.5;
}

/* === Layout === */
.app-shell {
  min-height: 100vh;
  display: flex;
  flex-direction: column;
}

.app-main {
  flex: 1;
  padding: 2rem;
  max-width: 1100px;
  width: 100%;
  margin: 0 auto;
}

.page-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1.5rem;
}

.page-title {
  font-size: var(--text-xl);
  font-weight: 600;
}

.page-actions {
  display: flex;
  gap: 0.5rem;
}

.section-header {
  font-size: var(--text-base);
  font-weight: 600;
  margin-bottom: 1rem;
}

.body-text {
  color: var(--text-secondary);
  margin: 1rem 0;
}

/* === Navigation === */
.nav-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 0.75rem 2rem;
  background: var(--surface-raised);
  border-bottom: 1px solid var(--border);
}

.nav-title .app-name {
  font-weight: 700;
  letter-spacing: 0.02em;
}

.nav-title .product-count {
  margin-left: 0.5rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.nav-links {
  display: flex;
  gap: 0.25rem;
}

.nav-link.active {
  background: var(--primary-soft);
  color: var(--primary);
}

/* === Buttons === */
.btn {
  font-family: inherit;
  font-size: var(--text-sm);
  padding: 0.5rem 1rem;
  border-radius: var(--radius);
  border: 1px solid transparent;
  background: transparent;
  color: var(--text-primary);
  cursor: pointer;
  text-decoration: none;
  transition: background var(--transition-fast), border-color var(--transition-fast);
}

.btn:disabled {
  opacity: 0.5;
  cursor: not-allowed;
}

.btn-primary {
  background: var(--primary);
  color: #ffffff;
}

.btn-primary:hover:not(:disabled) {
  background: var(--primary-hover);
}

.btn-secondary {
  border-color: var(--border);
  background: var(--surface-raised);
}

.btn-ghost:hover,
.nav-link:hover {
  background: var(--primary-soft);
}

.close-btn {
  border: none;
  background: transparent;
  font-size: 1.5rem;
  line-height: 1;
  color: var(--text-secondary);
  cursor: pointer;
}

/* === Form fields === */
.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
  margin-bottom: 1rem;
}

.input-label {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.input-currency {
  order: -1;
  font-family: var(--font-mono);
  color: var(--primary);
}

.input-field {
  font-family: inherit;
  font-size: var(--text-base);
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface-raised);
  color: var(--text-primary);
}

.input-field:focus {
  outline: none;
  border-color: var(--primary);
  box-shadow: 0 0 0 3px var(--primary-soft);
}

.input-field.invalid {
  border-color: var(--danger);
}

.input-footer {
  display: flex;
  justify-content: space-between;
  min-height: 1.1rem;
  font-size: var(--text-xs);
}

.input-counter {
  margin-left: auto;
  color: var(--text-muted);
  font-family: var(--font-mono);
}

.input-hint {
  font-size: var(--text-xs);
  color: var(--text-muted);
}

.error-text {
  color: var(--danger);
  font-size: var(--text-xs);
}

/* === Select === */
.dropdown-container {
  position: relative;
}

.dropdown-backdrop {
  position: fixed;
  inset: 0;
  z-index: 10;
}

.dropdown-field {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 0.5rem 0.75rem;
  border: 1px solid var(--border);
  border-radius: var(--radius);
  background: var(--surface-raised);
  cursor: pointer;
}

.dropdown-field.open {
  border-color: var(--primary);
}

.dropdown-selected.placeholder {
  color: var(--text-muted);
}

.dropdown-options {
  display: none;
  position: absolute;
  top: calc(100% + 4px);
  left: 0;
  right: 0;
  z-index: 20;
  padding: 0.5rem;
  background: var(--surface-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.12);
}

.dropdown-options.visible {
  display: block;
}

.dropdown-search {
  width: 100%;
  margin-bottom: 0.5rem;
}

.dropdown-list {
  list-style: none;
  max-height: 240px;
  overflow-y: auto;
}

.dropdown-option a {
  display: block;
  padding: 0.35rem 0.5rem;
  border-radius: var(--radius);
  cursor: pointer;
}

.dropdown-option:not(.is-group) a:hover {
  background: var(--primary-soft);
}

.dropdown-option.is-group a {
  font-size: var(--text-xs);
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--text-muted);
  cursor: default;
}

.dropdown-option.is-child a {
  padding-left: 1.25rem;
}

.dropdown-option.selected a {
  color: var(--primary);
  font-weight: 600;
}

/* === Modal === */
.modal-overlay {
  position: fixed;
  inset: 0;
  z-index: 100;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--overlay);
}

.modal {
  width: min(560px, 92vw);
  max-height: 90vh;
  overflow-y: auto;
  background: var(--surface-raised);
  border-radius: 10px;
  box-shadow: 0 16px 48px rgba(0, 0, 0, 0.2);
}

.modal-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 1rem 1.5rem;
  border-bottom: 1px solid var(--border);
}

.modal-title {
  font-size: 1.125rem;
  font-weight: 600;
}

.modal-body {
  padding: 1.5rem;
}

.modal-actions {
  display: flex;
  gap: 0.5rem;
  justify-content: flex-end;
  margin-top: 1rem;
}

/* === Data table === */
.datatable {
  width: 100%;
  border-collapse: collapse;
  background: var(--surface-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
}

.datatable th,
.datatable td {
  text-align: left;
  padding: 0.6rem 1rem;
  border-bottom: 1px solid var(--border);
  font-size: var(--text-sm);
}

.datatable th {
  color: var(--text-secondary);
  font-weight: 600;
}

.datatable td[data-label="Price"] {
  font-family: var(--font-mono);
  text-align: right;
}

.datatable-empty td {
  text-align: center;
  color: var(--text-muted);
}

/* === Settings === */
.settings-card {
  background: var(--surface-raised);
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1.5rem;
  margin-bottom: 1.5rem;
  max-width: 420px;
}

/* === Not found === */
.not-found {
  padding: 4rem 2rem;
  text-align: center;
}
"#;
