pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--ui-space-2) var(--ui-space-4);
  border-radius: var(--ui-radius-md);
  font-weight: 600;
  cursor: pointer;
  transition: background-color var(--transition-fast) var(--easing-standard),
              transform var(--transition-fast) var(--easing-standard);
  border: none;
  outline: none;
}

.btn:focus {
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
}

.btn:active {
  transform: translateY(1px);
}

.btn-primary {
  background-color: var(--primary);
  color: #fff;
}

.btn-primary:hover {
  background-color: var(--primary-hover);
}

.btn-secondary {
  background-color: var(--surface);
  color: var(--text);
  border: 1px solid var(--border);
}

.btn-sm {
  padding: 6px 12px;
  font-size: 0.875rem;
}

/* Form Elements */
.form-input {
  width: 100%;
  padding: var(--ui-space-2) var(--ui-space-3);
  border: 1px solid var(--border);
  border-radius: var(--ui-radius-md);
  background-color: var(--bg);
  color: var(--text);
  transition: border-color var(--transition-fast) var(--easing-standard);
}

.form-input:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.2);
  outline: none;
}

.search-bar {
  display: flex;
  align-items: center;
  gap: var(--ui-space-2);
  margin-bottom: var(--ui-space-3);
}

.search-status {
  color: var(--muted);
  font-size: 12px;
  white-space: nowrap;
}

/* Layout utilities */
.grid-demo {
  display: grid;
  gap: var(--ui-space-5);
  grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
}

.mono {
  font-family: var(--font-mono);
  font-size: 13px;
}

.label {
  font-size: 12px;
  color: var(--muted);
}

.missing {
  color: #E5245B;
}

.empty-state {
  padding: var(--ui-space-6);
  text-align: center;
  color: var(--muted);
}
"#;
