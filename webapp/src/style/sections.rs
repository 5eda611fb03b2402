// layout for the individual showcase sections
pub const SECTION_STYLES: &str = r#"
/* Spacing */
.space-row {
  display: grid;
  grid-template-columns: 120px 1fr 120px;
  align-items: center;
  gap: var(--ui-space-4);
  padding: var(--ui-space-2) 0;
  border-bottom: 1px solid var(--border);
}

.space-label {
  display: flex;
  justify-content: space-between;
}

.space-track {
  background: var(--surface);
  border-radius: 4px;
  height: 16px;
}

.space-bar {
  height: 16px;
  background: var(--primary);
  border-radius: 4px;
}

.space-meta {
  color: var(--muted);
  text-align: right;
}

/* Shadows */
.shadow-swatch {
  height: 160px;
  display: flex;
  flex-direction: column;
  justify-content: center;
  align-items: center;
  gap: var(--ui-space-1);
  border-radius: var(--ui-radius-lg);
  background: var(--bg);
}

.shadow-value {
  max-width: 90%;
  text-align: center;
}

/* Colors */
.color-group {
  margin-bottom: var(--ui-space-6);
}

.color-group-title {
  font-weight: 700;
  margin: var(--ui-space-5) 0;
}

.color-swatch {
  height: 180px;
  border-radius: 10px 10px 0 0;
  border: 1px solid var(--color-border);
  border-bottom: none;
}

.color-meta {
  border: 1px solid var(--color-border);
  padding: 12px 8px;
  border-radius: 0 0 10px 10px;
}

/* Typography */
.typo-details {
  border: 1px solid var(--border);
  border-radius: var(--ui-radius-lg);
  margin-bottom: var(--ui-space-4);
  background: var(--bg);
}

.typo-summary {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: var(--ui-space-4);
  cursor: pointer;
  list-style: none;
}

.typo-summary-left {
  display: flex;
  align-items: baseline;
  gap: var(--ui-space-3);
}

.typo-title {
  font-weight: 700;
  font-size: 1.125rem;
}

.typo-row {
  display: grid;
  grid-template-columns: 220px 1fr;
  gap: var(--ui-space-6);
  padding: var(--ui-space-4);
  border-top: 1px solid var(--border);
}

.typo-blurb {
  color: var(--muted);
  font-size: 14px;
}

.typo-sample {
  margin: var(--ui-space-3) 0;
  overflow-wrap: anywhere;
}

.typo-meta {
  display: grid;
  grid-template-columns: 180px 1fr;
  gap: 2px var(--ui-space-3);
  margin-top: var(--ui-space-2);
}

.typo-k {
  color: var(--muted);
}

.style-row {
  display: grid;
  grid-template-columns: 240px 1fr;
  align-items: baseline;
  gap: var(--ui-space-4);
  padding: var(--ui-space-3) 0;
  border-bottom: 1px solid var(--border);
}

/* Inbox */
.inbox {
  display: grid;
  grid-template-columns: 320px 1fr;
  height: 560px;
  border: 1px solid var(--border);
  border-radius: var(--ui-radius-lg);
  overflow: hidden;
}

.inbox-sidebar {
  border-right: 1px solid var(--border);
  padding: var(--ui-space-3);
  overflow-y: auto;
  background: var(--surface);
}

.conversation {
  display: flex;
  gap: var(--ui-space-3);
  padding: var(--ui-space-3);
  border-radius: var(--ui-radius-md);
  cursor: pointer;
}

.conversation.active {
  background: var(--incoming);
}

.conversation-name {
  font-weight: 600;
}

.conversation-preview {
  font-size: 12px;
  color: var(--muted);
  white-space: nowrap;
  overflow: hidden;
  text-overflow: ellipsis;
  max-width: 220px;
}

.avatar {
  width: 36px;
  height: 36px;
  flex: none;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-weight: 700;
  font-size: 12px;
  background: var(--outgoing);
}

.chat-pane {
  display: flex;
  flex-direction: column;
  min-height: 0;
}

.chat-header {
  display: flex;
  align-items: center;
  padding: var(--ui-space-3) var(--ui-space-4);
  border-bottom: 1px solid var(--border);
}

.chat-messages {
  flex: 1;
  overflow-y: auto;
  padding: var(--ui-space-4);
  display: flex;
  flex-direction: column;
  gap: var(--ui-space-2);
}

.message {
  max-width: 70%;
  padding: var(--ui-space-2) var(--ui-space-3);
  border-radius: 12px;
}

.message.incoming {
  align-self: flex-start;
  background: var(--incoming);
}

.message.outgoing {
  align-self: flex-end;
  background: var(--outgoing);
}

.chat-composer {
  display: flex;
  gap: var(--ui-space-2);
  padding: var(--ui-space-3);
  border-top: 1px solid var(--border);
}
"#;
