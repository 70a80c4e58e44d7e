//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Row;
use uuid::Uuid;

use huddle_core::event::{Event, EventSummary, Rsvp, RsvpResponse, RsvpWithUser, User};

/// Convert a SQLite row to a User, reading columns from `offset`.
///
/// Expected columns: id, name, email, created_at, updated_at
fn user_at(row: &Row, offset: usize) -> rusqlite::Result<User> {
    let id: String = row.get(offset)?;
    let name: String = row.get(offset + 1)?;
    let email: String = row.get(offset + 2)?;
    let created_at: String = row.get(offset + 3)?;
    let updated_at: String = row.get(offset + 4)?;

    Ok(User {
        id: parse_uuid(offset, &id)?,
        name,
        email,
        created_at: parse_datetime(offset + 3, &created_at)?,
        updated_at: parse_datetime(offset + 4, &updated_at)?,
    })
}

pub fn row_to_user(row: &Row) -> rusqlite::Result<User> {
    user_at(row, 0)
}

/// Convert a SQLite row to an EventSummary.
///
/// Expected columns: id, title, description, date, created_by, created_at, rsvp_count
pub fn row_to_event_summary(row: &Row) -> rusqlite::Result<EventSummary> {
    let id: String = row.get(0)?;
    let title: String = row.get(1)?;
    let description: String = row.get(2)?;
    let date: String = row.get(3)?;
    let created_by: String = row.get(4)?;
    let created_at: String = row.get(5)?;
    let rsvp_count: i64 = row.get(6)?;

    Ok(EventSummary {
        event: Event {
            id: parse_uuid(0, &id)?,
            title,
            description,
            date: parse_datetime(3, &date)?,
            created_by: parse_uuid(4, &created_by)?,
            created_at: parse_datetime(5, &created_at)?,
        },
        rsvp_count: rsvp_count.max(0) as u64,
    })
}

/// Convert a SQLite row to an Rsvp.
///
/// Expected columns: id, event_id, user_id, response, created_at
pub fn row_to_rsvp(row: &Row) -> rusqlite::Result<Rsvp> {
    let id: String = row.get(0)?;
    let event_id: String = row.get(1)?;
    let user_id: String = row.get(2)?;
    let response: String = row.get(3)?;
    let created_at: String = row.get(4)?;

    Ok(Rsvp {
        id: parse_uuid(0, &id)?,
        event_id: parse_uuid(1, &event_id)?,
        user_id: parse_uuid(2, &user_id)?,
        response: parse_response(3, &response)?,
        created_at: parse_datetime(4, &created_at)?,
    })
}

/// Convert a joined SQLite row to an RsvpWithUser.
///
/// Expected columns: the five RSVP columns followed by the five user columns.
pub fn row_to_rsvp_with_user(row: &Row) -> rusqlite::Result<RsvpWithUser> {
    Ok(RsvpWithUser {
        rsvp: row_to_rsvp(row)?,
        user: user_at(row, 5)?,
    })
}

/// Format a timestamp for SQLite storage.
///
/// Always nine fractional digits and a `Z` suffix, so text order is time order.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn conversion_error(
    column: usize,
    err: impl std::error::Error + Send + Sync + 'static,
) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_uuid(column: usize, s: &str) -> rusqlite::Result<Uuid> {
    Uuid::parse_str(s).map_err(|e| conversion_error(column, e))
}

fn parse_datetime(column: usize, s: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(column, e))
}

fn parse_response(column: usize, s: &str) -> rusqlite::Result<RsvpResponse> {
    s.parse::<RsvpResponse>()
        .map_err(|e| conversion_error(column, std::io::Error::other(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_is_fixed_width() {
        let whole = Utc.with_ymd_and_hms(2025, 1, 10, 9, 0, 0).unwrap();
        let fractional = whole + chrono::Duration::nanoseconds(1_500);

        let a = format_datetime(&whole);
        let b = format_datetime(&fractional);

        assert_eq!(a, "2025-01-10T09:00:00.000000000Z");
        assert_eq!(a.len(), b.len());
        assert!(a < b);
    }

    #[test]
    fn test_format_datetime_roundtrips() {
        let now = Utc::now();
        assert_eq!(parse_datetime(0, &format_datetime(&now)).unwrap(), now);
    }

    #[test]
    fn test_parse_response_rejects_unknown() {
        assert_eq!(parse_response(0, "going").unwrap(), RsvpResponse::Going);
        assert!(parse_response(0, "attending").is_err());
    }

    #[test]
    fn test_parse_uuid_reports_column() {
        match parse_uuid(4, "not-a-uuid") {
            Err(rusqlite::Error::FromSqlConversionFailure(column, _, _)) => assert_eq!(column, 4),
            other => panic!("Expected conversion failure, got {other:?}"),
        }
    }
}
