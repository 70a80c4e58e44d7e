mod error;
mod requests;
mod types;
mod validation;

pub use error::ValidationError;
pub use requests::{CreateEventRequest, SubmitRsvpRequest};
pub use types::{
    Event, EventSummary, Identity, NewEvent, NewRsvp, Rsvp, RsvpCount, RsvpResponse, RsvpWithUser,
    UpsertOutcome, User,
};
pub use validation::{
    parse_event_date, validate_description, validate_email, validate_identity, validate_title,
    DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS,
};
