//! Pretty output formatting.

use huddle_core::event::{Event, EventSummary, RsvpCount, RsvpWithUser};
use huddle_core::service::{HealthReport, HealthStatus};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Format a freshly created event for display.
pub fn format_event(event: &Event) -> String {
    let mut output = format!(
        "{}\n  ID: {}\n  Date: {}",
        event.title,
        event.id,
        event.date.format(DATE_FORMAT)
    );
    if !event.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", event.description));
    }
    output
}

/// Format an event with its RSVP count.
pub fn format_event_summary(summary: &EventSummary) -> String {
    format!(
        "{}\n  RSVPs: {}",
        format_event(&summary.event),
        summary.rsvp_count
    )
}

/// Format events for display.
pub fn format_events(events: &[EventSummary]) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event_summary(event)));
        output.push('\n');
    }
    output
}

/// Format an RSVP for display.
pub fn format_rsvp(rsvp: &RsvpWithUser) -> String {
    format!(
        "{} <{}>: {}\n  ID: {}\n  Since: {}",
        rsvp.user.name,
        rsvp.user.email,
        rsvp.rsvp.response,
        rsvp.rsvp.id,
        rsvp.rsvp.created_at.format(DATE_FORMAT)
    )
}

/// Format RSVPs for display.
pub fn format_rsvps(rsvps: &[RsvpWithUser]) -> String {
    if rsvps.is_empty() {
        return "No RSVPs yet.".to_string();
    }
    let mut output = format!("RSVPS ({})\n", rsvps.len());
    output.push_str(&"-".repeat(40));
    for rsvp in rsvps {
        output.push_str(&format!("\n{}", format_rsvp(rsvp)));
        output.push('\n');
    }
    output
}

pub fn format_count(count: &RsvpCount) -> String {
    format!("{} RSVP(s) for event {}", count.count, count.event_id)
}

/// Format a health report for display.
pub fn format_health(report: &HealthReport) -> String {
    let status = match report.status {
        HealthStatus::Healthy => "healthy",
        HealthStatus::Unhealthy => "UNHEALTHY",
    };
    let mut output = format!(
        "Status: {}\n  Database: {:?}\n  Cache: {:?}\n  Checked: {}",
        status,
        report.database,
        report.cache,
        report.timestamp.to_rfc3339()
    );
    if let Some(error) = &report.error {
        output.push_str(&format!("\n  Error: {}", error));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use huddle_core::event::{Rsvp, RsvpResponse, User};
    use uuid::Uuid;

    fn standup() -> Event {
        Event::new(
            "Standup",
            "Daily sync",
            Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap(),
            Uuid::new_v4(),
        )
    }

    #[test]
    fn test_format_event_summary() {
        let summary = EventSummary {
            event: standup(),
            rsvp_count: 3,
        };

        let output = format_event_summary(&summary);

        assert!(output.starts_with("Standup\n"));
        assert!(output.contains("Date: 2025-01-10 09:00 UTC"));
        assert!(output.contains("Description: Daily sync"));
        assert!(output.ends_with("RSVPs: 3"));
    }

    #[test]
    fn test_empty_description_is_omitted() {
        let mut event = standup();
        event.description.clear();
        assert!(!format_event(&event).contains("Description"));
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_events(&[]), "No events found.");
        assert_eq!(format_rsvps(&[]), "No RSVPs yet.");
    }

    #[test]
    fn test_format_rsvp() {
        let user = User::new("Bob", "bob@x.com");
        let rsvp = RsvpWithUser {
            rsvp: Rsvp::new(Uuid::new_v4(), user.id, RsvpResponse::NotGoing),
            user,
        };

        let output = format_rsvps(std::slice::from_ref(&rsvp));

        assert!(output.starts_with("RSVPS (1)"));
        assert!(output.contains("Bob <bob@x.com>: not_going"));
    }

    #[test]
    fn test_format_unhealthy_report() {
        let report = HealthReport::from_probes(
            Ok(()),
            Err("Cache connection failed: refused".to_string()),
            Utc::now(),
        );

        let output = format_health(&report);

        assert!(output.starts_with("Status: UNHEALTHY"));
        assert!(output.contains("Cache: Disconnected"));
        assert!(output.contains("Error: Cache connection failed: refused"));
    }
}
