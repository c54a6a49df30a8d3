use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, instrument};

use crate::date_key::{DateKey, DateZone};
use crate::error::DispatchError;
use crate::model::fixture::MatchRecord;
use crate::model::invocation::Outcome;
use crate::rapidapi::MatchFeed;
use crate::sns::Publisher;

/// Fetches one day's fixtures and forwards a summary to the publisher.
#[derive(Clone)]
pub struct NotificationDispatcher {
    feed: Arc<dyn MatchFeed>,
    publisher: Arc<dyn Publisher>,
    zone: DateZone,
}

impl NotificationDispatcher {
    pub fn new(feed: Arc<dyn MatchFeed>, publisher: Arc<dyn Publisher>, zone: DateZone) -> Self {
        Self { feed, publisher, zone }
    }

    /// Run one fetch-and-notify pass for the calendar day containing `now`.
    /// Accepts the current time so the date key is deterministic under test.
    #[instrument(level = "info", skip(self))]
    pub async fn dispatch(&self, now: DateTime<Utc>) -> Result<Outcome, DispatchError> {
        let date = DateKey::for_instant(now, self.zone);
        let matches = self.feed.matches_for(&date).await?;

        if matches.is_empty() {
            info!(date = %date, "No matches found for {}", date);
            return Ok(Outcome::NoMatches { date });
        }

        let message = format_message(&date, &matches);
        info!(date = %date, match_count = matches.len(), "Prepared message");

        let message_id = self.publisher.publish(&message).await?;
        info!(
            message_id = message_id.as_deref().unwrap_or("none"),
            "Message sent successfully"
        );

        Ok(Outcome::Sent { date, match_count: matches.len(), message_id })
    }
}

/// Build the plain-text summary: a header line followed by one line per match.
pub fn format_message(date: &DateKey, matches: &[MatchRecord]) -> String {
    let mut lines = Vec::with_capacity(matches.len() + 1);
    lines.push(format!("Matches on {}:", date));
    lines.extend(
        matches
            .iter()
            .map(|m| format!("{} vs {} at {}", m.home.display_name(), m.away.display_name(), m.display_time())),
    );
    lines.join("\n")
}
