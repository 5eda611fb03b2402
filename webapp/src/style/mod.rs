use constcat::concat;

mod components;
mod sections;
mod variables;

pub use components::BASE_COMPONENTS;
pub use sections::SECTION_STYLES;
pub use variables::CSS_VARIABLES;

// everything static about the page; the token variables and generated utilities are
// layered on top of this by the root component
pub const SHOWCASE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  color: var(--text);
  background-color: var(--bg);
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    SECTION_STYLES,
    r#"
/* Application-specific styles */
.app-header {
  background-color: var(--surface);
  box-shadow: var(--ui-shadow-sm);
  position: sticky;
  top: 0;
  z-index: 10;
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  gap: var(--ui-space-4);
  padding: 0 var(--ui-space-4);
}

.nav-links {
  display: flex;
  gap: var(--ui-space-2);
}

.nav-link {
  color: var(--muted);
  background: none;
  border: none;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  padding: var(--ui-space-2) var(--ui-space-3);
  border-radius: var(--ui-radius-md);
  transition: color var(--transition-fast) var(--easing-standard),
  background-color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--text);
}

.nav-link.active {
  color: var(--primary);
  background-color: rgba(59, 130, 246, 0.1);
}

.page-content {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: var(--ui-space-6) var(--ui-space-4);
}

/* only the active tab's section is shown */
section {
  display: none;
}

section.active {
  display: block;
}

.section-title {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--ui-space-4);
}

.subsection-title {
  font-size: 1.125rem;
  font-weight: 600;
  margin: var(--ui-space-6) 0 var(--ui-space-3);
}

.app-footer {
  border-top: 1px solid var(--border);
  padding: var(--ui-space-4);
  font-size: 14px;
  color: var(--muted);
}
"#
);
