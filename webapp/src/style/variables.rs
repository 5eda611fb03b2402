// variables for the page chrome, kept out of the token namespace
//
// the theme block (--bg, --text, --border, --muted, --surface, --incoming, --outgoing)
// is installed separately by the root component
pub const CSS_VARIABLES: &str = r#"
:root {
  /* Brand */
  --primary: #3B82F6;          /* buttons, active tab */
  --primary-hover: #2563EB;
  --color-muted: var(--muted);

  /* Layout */
  --header-height: 60px;
  --container-width: 1280px;

  /* Spacing */
  --ui-space-1: 4px;
  --ui-space-2: 8px;
  --ui-space-3: 12px;
  --ui-space-4: 16px;
  --ui-space-5: 20px;
  --ui-space-6: 24px;

  /* Border Radius */
  --ui-radius-md: 6px;
  --ui-radius-lg: 10px;

  /* Shadows */
  --ui-shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);

  /* Animation */
  --transition-fast: 150ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);

  /* Type */
  --font-mono: ui-monospace, SFMono-Regular, Menlo, Consolas, monospace;
}"#;
