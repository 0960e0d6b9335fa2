//! Seat allocation for a venue with orchestra, parterre and balcony.
//!
//! Layers, innermost first:
//! - [`domain`]: seats, rows, lodges, topologies and the reservation service
//! - [`application`]: the booking workflow over the I/O collaborators
//! - [`infrastructure`]: seating sources, clock, printers and DI wiring
//! - [`cli`]: argument parsing and command dispatch

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
