//! SQLite schema definitions and SQL query constants.
//!
//! Timestamps are stored as fixed-width RFC 3339 text in UTC, so ordering by
//! the text column orders by time.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
PRAGMA foreign_keys = ON;

-- Users table
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

-- Events table
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL DEFAULT '',
    date TEXT NOT NULL,
    created_by TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY (created_by) REFERENCES users(id)
);

-- RSVPs table: one row per (event, user)
CREATE TABLE IF NOT EXISTS rsvps (
    id TEXT PRIMARY KEY,
    event_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    response TEXT NOT NULL CHECK (response IN ('going', 'not_going', 'maybe')),
    created_at TEXT NOT NULL,
    UNIQUE (event_id, user_id),
    FOREIGN KEY (event_id) REFERENCES events(id) ON DELETE CASCADE,
    FOREIGN KEY (user_id) REFERENCES users(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
CREATE INDEX IF NOT EXISTS idx_rsvps_event_id ON rsvps(event_id);
"#;

pub const PING: &str = "SELECT 1";

// User queries
pub const INSERT_USER: &str = r#"
INSERT INTO users (id, name, email, created_at, updated_at)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_USER_BY_EMAIL: &str = r#"
SELECT id, name, email, created_at, updated_at
FROM users
WHERE email = ?1
"#;

pub const UPDATE_USER: &str = r#"
UPDATE users
SET name = ?2, email = ?3, updated_at = ?4
WHERE id = ?1
"#;

// Event queries
pub const INSERT_EVENT: &str = r#"
INSERT INTO events (id, title, description, date, created_by, created_at)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_EVENT_BY_ID: &str = r#"
SELECT e.id, e.title, e.description, e.date, e.created_by, e.created_at,
       (SELECT COUNT(*) FROM rsvps r WHERE r.event_id = e.id) AS rsvp_count
FROM events e
WHERE e.id = ?1
"#;

pub const SELECT_EVENTS: &str = r#"
SELECT e.id, e.title, e.description, e.date, e.created_by, e.created_at,
       (SELECT COUNT(*) FROM rsvps r WHERE r.event_id = e.id) AS rsvp_count
FROM events e
ORDER BY e.date ASC, e.created_at ASC
"#;

pub const DELETE_EVENT: &str = r#"
DELETE FROM events
WHERE id = ?1
"#;

// RSVP queries
pub const UPSERT_RSVP: &str = r#"
INSERT INTO rsvps (id, event_id, user_id, response, created_at)
VALUES (?1, ?2, ?3, ?4, ?5)
ON CONFLICT (event_id, user_id) DO UPDATE SET response = excluded.response
RETURNING id, event_id, user_id, response, created_at
"#;

pub const SELECT_RSVPS_FOR_EVENT: &str = r#"
SELECT r.id, r.event_id, r.user_id, r.response, r.created_at,
       u.id, u.name, u.email, u.created_at, u.updated_at
FROM rsvps r
INNER JOIN users u ON u.id = r.user_id
WHERE r.event_id = ?1
ORDER BY r.created_at DESC
"#;

pub const COUNT_RSVPS_FOR_EVENT: &str = r#"
SELECT COUNT(*)
FROM rsvps
WHERE event_id = ?1
"#;
