use std::sync::Arc;

use chrono::Local;
use dioxus::prelude::*;
use gloo_console::error as console_error;
use tracing::{info, warn};

use api::commit::{RepoRef, get_latest_commit};
use common::{
    commit::{LastUpdated, UNAVAILABLE},
    config::ShowcaseConfig,
};

async fn fetch_last_updated(repo: RepoRef) -> anyhow::Result<LastUpdated> {
    let resp = get_latest_commit(&repo).await?;
    LastUpdated::from_commit(&resp, &Local)
}

// one request at startup, never retried; any failure just reads "Unavailable"
#[component]
pub fn LastUpdatedFooter() -> Element {
    let config = use_context::<Arc<ShowcaseConfig>>();

    let last_updated = use_resource(move || {
        let repo = config.repo.clone();
        async move {
            match fetch_last_updated(repo).await {
                Ok(updated) => {
                    info!(author = %updated.author, "fetched latest commit");
                    Some(updated)
                }
                Err(err) => {
                    warn!(%err, "latest commit unavailable");
                    console_error!(format!("Failed to fetch latest commit: {err}"));
                    None
                }
            }
        }
    });

    let body = match &*last_updated.read_unchecked() {
        Some(Some(updated)) => rsx! {
            div { style: "font-weight: 600;", "{updated.headline}" }
            div { style: "margin-top:4px;",
                a {
                    href: "{updated.url}",
                    target: "_blank",
                    style: "text-decoration-color: var(--neutral-medium); text-decoration-style:dotted; color:var(--neutral-dark);",
                    "{updated.summary}"
                }
            }
            div { class: "label", style: "margin-top:4px;", "-- {updated.author}" }
        },
        Some(None) => rsx! { "{UNAVAILABLE}" },
        None => rsx! { span { class: "label", "loading..." } },
    };

    rsx! {
        footer { class: "app-footer",
            div { id: "lastUpdated", {body} }
        }
    }
}
