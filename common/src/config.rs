use std::sync::Arc;

use serde::{Deserialize, Serialize};
use toml;
use tracing::{Level, debug, instrument};

use api::commit::RepoRef;

// the config file is compiled into the wasm bundle, there is no filesystem to read from
const EMBEDDED_CONFIG: &str = include_str!("../showcase.toml");

// showcase configuration
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ShowcaseConfig {
    // where the token document is fetched from, relative to the page
    pub tokens_url: String,

    // repository whose latest commit is shown in the footer
    pub repo: RepoRef,
}

// everything lives under a [config] table
#[derive(Debug, Deserialize, Serialize)]
struct TomlConfigFile {
    config: ShowcaseConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<ShowcaseConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;
    Ok(data.config)
}

#[instrument(level = Level::DEBUG)]
pub fn read_config() -> anyhow::Result<Arc<ShowcaseConfig>> {
    debug!("parsing embedded config");

    let config = parse_config(EMBEDDED_CONFIG)?;

    debug!(tokens_url = %config.tokens_url, "successfully parsed config");
    Ok(Arc::new(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = read_config().unwrap();

        assert_eq!(config.tokens_url, "./tokens.json");
        assert_eq!(
            config.repo.latest_commit_url(),
            "https://api.github.com/repos/anokhee/design_system/commits/main"
        );
    }

    #[test]
    fn config_must_live_under_the_config_table() {
        assert!(parse_config("tokens_url = \"./tokens.json\"").is_err());
    }
}
