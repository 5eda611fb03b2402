use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use api::commit::CommitResp;

pub const UNAVAILABLE: &str = "Unavailable";

const SUMMARY_CHARS: usize = 80;

// the footer's "last updated" block, ready to render
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastUpdated {
    // "Last Updated Mar 4, 2025 at 3:07 PM"
    pub headline: String,
    pub summary: String,
    pub author: String,
    pub url: String,
}

impl LastUpdated {
    pub fn from_commit<Tz>(resp: &CommitResp, tz: &Tz) -> anyhow::Result<Self>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let date = DateTime::parse_from_rfc3339(&resp.commit.committer.date)?.with_timezone(tz);

        Ok(LastUpdated {
            headline: format!(
                "Last Updated {} at {}",
                date.format("%b %-d, %Y"),
                date.format("%-I:%M %p")
            ),
            summary: summarize(&resp.commit.message),
            author: resp.commit.author.name.clone(),
            url: resp.html_url.clone(),
        })
    }
}

// first line of the commit message, cut down to fit on one line of the footer
pub fn summarize(message: &str) -> String {
    let first = message.lines().next().unwrap_or("");

    if first.chars().count() > SUMMARY_CHARS {
        let mut cut: String = first.chars().take(SUMMARY_CHARS).collect();
        cut.push('…');
        cut
    } else {
        first.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn resp(date: &str, message: &str) -> CommitResp {
        serde_json::from_value(serde_json::json!({
            "html_url": "https://github.com/anokhee/design_system/commit/abc123",
            "commit": {
                "author": { "name": "Anokhee" },
                "committer": { "date": date },
                "message": message,
            },
        }))
        .unwrap()
    }

    #[test]
    fn formats_date_author_and_link() {
        let updated =
            LastUpdated::from_commit(&resp("2025-03-04T15:07:00Z", "Tweak tokens\n\nbody"), &Utc)
                .unwrap();

        assert_eq!(updated.headline, "Last Updated Mar 4, 2025 at 3:07 PM");
        assert_eq!(updated.summary, "Tweak tokens");
        assert_eq!(updated.author, "Anokhee");
        assert_eq!(
            updated.url,
            "https://github.com/anokhee/design_system/commit/abc123"
        );
    }

    #[test]
    fn converts_into_the_requested_zone() {
        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        let updated = LastUpdated::from_commit(&resp("2025-01-01T03:30:00Z", "x"), &pst).unwrap();

        assert_eq!(updated.headline, "Last Updated Dec 31, 2024 at 7:30 PM");
    }

    #[test]
    fn long_messages_are_truncated() {
        let long = "a".repeat(81);

        assert_eq!(summarize(&long), format!("{}…", "a".repeat(80)));
        assert_eq!(summarize(&"b".repeat(80)), "b".repeat(80));
        assert_eq!(summarize(""), "");
    }

    #[test]
    fn malformed_dates_are_errors() {
        assert!(LastUpdated::from_commit(&resp("yesterday", "x"), &Utc).is_err());
    }
}
