//! Global CSS styles for the Lumen gallery and widgets.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --surface: #ffffff;
  --surface-dark: #000000;
  --border: #dfe5eb;
  --text: #1f2326;
  --text-muted: #737577;
  --accent: #008eff;
  --accent-hover: #1b9cff;
  --overlay: rgba(31, 35, 38, 0.5);
  --toolbar-height: 56px;
  --sidebar-width: 240px;
}

* { box-sizing: border-box; }

body {
  margin: 0;
  font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
  font-size: 14px;
  color: var(--text);
  background: var(--surface);
}

/* === Gallery layout === */
.gallery { min-height: 100vh; outline: none; }

.gallery__toolbar {
  position: fixed;
  top: 0;
  left: 0;
  right: 0;
  height: var(--toolbar-height);
  display: flex;
  align-items: center;
  gap: 16px;
  padding: 0 16px;
  border-bottom: 1px solid var(--border);
  background: var(--surface);
  z-index: 2;
}

.gallery__title { flex: 1; margin: 0; font-size: 18px; font-weight: 600; }

.gallery__content { padding: calc(var(--toolbar-height) + 24px) 32px 32px; }

.gallery__section-title { font-size: 16px; font-weight: 600; }

.gallery__row { display: flex; gap: 24px; flex-wrap: wrap; }

.gallery__nav-title { color: var(--text-muted); text-transform: uppercase; font-size: 12px; }

.gallery__nav ul { list-style: none; margin: 0; padding: 0; }

.gallery__nav li { padding: 6px 0; }

/* === Loader === */
.loader-container { display: inline-block; padding: 60px; border: 1px solid var(--border); }

.loader-container_black { background-color: var(--surface-dark); }

.lumen-loader { display: inline-block; line-height: 0; }

.lumen-loader__canvas { display: block; overflow: visible; }

/* === Buttons === */
.lumen-btn {
  height: 28px;
  padding: 0 14px;
  border-radius: 3px;
  font: inherit;
  cursor: pointer;
}

.lumen-btn:disabled { opacity: 0.5; cursor: default; }

.lumen-btn_primary { color: #ffffff; background: var(--accent); border: 1px solid var(--accent); }

.lumen-btn_primary:hover { background: var(--accent-hover); }

.lumen-btn_secondary { color: var(--text); background: var(--surface); border: 1px solid var(--border); }

.lumen-btn_ghost { color: var(--text); background: transparent; border: 1px solid transparent; }

.lumen-btn_active { color: var(--accent); }

.lumen-icon-btn {
  border: none;
  background: transparent;
  font-size: 20px;
  line-height: 1;
  color: var(--text-muted);
  cursor: pointer;
}

/* === Sidebar === */
.lumen-sidebar {
  position: fixed;
  top: 0;
  bottom: 0;
  right: 0;
  width: var(--sidebar-width);
  padding: 16px;
  border-left: 1px solid var(--border);
  background: var(--surface);
  transform: translateX(100%);
  transition: transform 200ms ease-out;
  z-index: 1;
}

.lumen-sidebar_active { transform: translateX(0); }

/* === Shortcuts hint dialog === */
.modal-overlay {
  position: fixed;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--overlay);
  z-index: 10;
}

.hint-dialog {
  width: 400px;
  max-height: 80vh;
  display: flex;
  flex-direction: column;
  padding: 16px 24px;
  border-radius: 4px;
  background: var(--surface);
  outline: none;
  box-shadow: 0 4px 16px rgba(0, 0, 0, 0.25);
}

.hint-dialog_wide { width: 640px; }

.hint-dialog__header { display: flex; align-items: center; justify-content: space-between; }

.hint-dialog__title { margin: 0; font-size: 18px; }

.hint-dialog__search {
  margin: 12px 0;
  padding: 4px 8px;
  border: 1px solid var(--border);
  border-radius: 3px;
  font: inherit;
}

.hint-dialog__content { overflow-y: auto; }

.hint-dialog__mode-title { font-size: 14px; margin: 16px 0 8px; }

.hint-dialog__shortcut { display: flex; gap: 16px; padding: 4px 0; }

.hint-dialog__keys {
  flex: 0 0 160px;
  font-family: ui-monospace, monospace;
  color: var(--text-muted);
}

.hint-dialog__empty { color: var(--text-muted); }

.modal-actions { display: flex; justify-content: flex-end; gap: 8px; padding-top: 16px; }
"#;
