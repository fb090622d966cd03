use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::core::error::AppResult;
use crate::storage::StoreData;

#[derive(Parser)]
#[command(name = "vipgate")]
#[command(author, version, about = "Telegram onboarding bot with manual UID verification", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Show submissions waiting for verification and verified users
    Status {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Serialize)]
struct PendingEntry<'a> {
    user_id: &'a str,
    uid: &'a str,
    time: String,
}

#[derive(Debug, Serialize)]
struct StatusReport<'a> {
    submissions: usize,
    pending: Vec<PendingEntry<'a>>,
    verified: &'a [String],
}

/// Renders the `status` report for a loaded store
pub fn render_status(data: &StoreData, json: bool) -> AppResult<String> {
    let report = StatusReport {
        submissions: data.submissions.len(),
        pending: data
            .pending()
            .map(|(user_id, record)| PendingEntry {
                user_id,
                uid: &record.uid,
                time: record.submitted_at.to_rfc3339(),
            })
            .collect(),
        verified: &data.verified,
    };

    if json {
        return Ok(serde_json::to_string_pretty(&report)?);
    }

    let mut out = format!(
        "Submissions: {}\nPending: {}\nVerified: {}\n",
        report.submissions,
        report.pending.len(),
        report.verified.len()
    );
    if !report.pending.is_empty() {
        out.push_str("\nPending verification:\n");
        for entry in &report.pending {
            out.push_str(&format!("  {}  UID {}  ({})\n", entry.user_id, entry.uid, entry.time));
        }
    }
    if !report.verified.is_empty() {
        out.push_str("\nVerified:\n");
        for id in report.verified {
            out.push_str(&format!("  {}\n", id));
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn sample() -> StoreData {
        let mut data = StoreData::default();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        data.upsert_submission("42", "999888", at);
        data.upsert_submission("7", "123", at);
        data.verify("7");
        data
    }

    #[test]
    fn test_cli_parses_status() {
        let cli = Cli::try_parse_from(["vipgate", "status", "--json"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Status { json: true })));

        let cli = Cli::try_parse_from(["vipgate"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_render_status_text() {
        let out = render_status(&sample(), false).unwrap();
        assert_eq!(
            out,
            "Submissions: 2\nPending: 1\nVerified: 1\n\
             \nPending verification:\n  42  UID 999888  (2024-05-01T10:00:00+00:00)\n\
             \nVerified:\n  7\n"
        );
    }

    #[test]
    fn test_render_status_json() {
        let out = render_status(&sample(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["submissions"], 2);
        assert_eq!(value["pending"][0]["user_id"], "42");
        assert_eq!(value["pending"][0]["uid"], "999888");
        assert_eq!(value["verified"], serde_json::json!(["7"]));
    }

    #[test]
    fn test_render_status_empty() {
        let out = render_status(&StoreData::default(), false).unwrap();
        assert_eq!(out, "Submissions: 0\nPending: 0\nVerified: 0\n");
    }
}
