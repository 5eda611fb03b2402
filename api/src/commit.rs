use gloo_net::http::Request;
use serde::{Deserialize, Serialize};

// the subset of the github "get a commit" response that the footer displays
//
// every field is required, so a response missing any of them fails to decode
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommitResp {
    pub html_url: String,
    pub commit: CommitDetail,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommitDetail {
    pub author: CommitAuthor,
    pub committer: CommitCommitter,
    pub message: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommitAuthor {
    pub name: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CommitCommitter {
    // rfc 3339, parsed by the caller
    pub date: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RepoRef {
    pub api_root: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RepoRef {
    pub fn latest_commit_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/commits/{}",
            self.api_root.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.branch
        )
    }
}

pub async fn get_latest_commit(repo: &RepoRef) -> anyhow::Result<CommitResp> {
    let resp = Request::get(repo.latest_commit_url().as_str())
        .header("Accept", "application/vnd.github+json")
        .send()
        .await?;

    if resp.ok() {
        Ok(resp.json().await?)
    } else {
        Err(anyhow::Error::msg(resp.text().await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_is_built_from_repo_ref() {
        let repo = RepoRef {
            api_root: String::from("https://api.github.com/"),
            owner: String::from("anokhee"),
            repo: String::from("design_system"),
            branch: String::from("main"),
        };

        assert_eq!(
            repo.latest_commit_url(),
            "https://api.github.com/repos/anokhee/design_system/commits/main"
        );
    }

    #[test]
    fn missing_fields_fail_to_decode() {
        let body = r#"{ "html_url": "https://example.invalid", "commit": { "message": "m" } }"#;
        assert!(serde_json::from_str::<CommitResp>(body).is_err());
    }
}
