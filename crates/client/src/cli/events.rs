//! Events CLI commands.

use clap::{Parser, Subcommand};
use uuid::Uuid;

use huddle_core::event::RsvpResponse;

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List all events with their RSVP counts.
    List,
    /// Get event by ID.
    Get {
        /// Event ID.
        id: Uuid,
    },
    /// Create a new event.
    Create {
        /// Event title (1-200 characters).
        #[arg(long)]
        title: String,
        /// Event date and time (RFC 3339, e.g. 2025-01-10T09:00:00Z).
        #[arg(long)]
        date: String,
        /// Event description.
        #[arg(long, default_value = "")]
        description: String,
        /// Creator display name.
        #[arg(long)]
        name: String,
        /// Creator email.
        #[arg(long)]
        email: String,
    },
    /// Delete event by ID, with its RSVPs.
    Delete {
        /// Event ID.
        id: Uuid,
    },
    /// RSVP to an event, replacing any earlier answer.
    Rsvp {
        /// Event ID.
        id: Uuid,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Email.
        #[arg(long)]
        email: String,
        /// going, not_going or maybe.
        #[arg(long)]
        response: RsvpResponse,
    },
    /// List the RSVPs of an event.
    Rsvps {
        /// Event ID.
        id: Uuid,
    },
    /// Show the RSVP count of an event.
    Count {
        /// Event ID.
        id: Uuid,
    },
}
