//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid requests against the seating model.
/// An unsatisfiable request is not an error; it yields a no-seat ticket.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid location: {0} (expected orchestra, parterre or balcony)")]
    InvalidLocation(String),

    #[error("invalid search preference: {0} (expected front-to-back or back-to-front)")]
    InvalidSearchPreference(String),

    #[error("invalid calendar day: {0} (expected MM-DD)")]
    InvalidMonthDay(String),
}
