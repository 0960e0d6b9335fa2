//! Application services
//!
//! Concrete service implementations that orchestrate domain logic.
//! Services depend on I/O boundary traits (SeatingSource, Clock, LinePrinter)
//! but are themselves concrete structs, not traits.

mod booking;

pub use booking::{BookingOrder, BookingService};
