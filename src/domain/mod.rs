//! Domain layer: seating model and allocation rules
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod lodges;
pub mod reservation;
pub mod rows;
pub mod season;
pub mod topology;

pub use entities::*;
pub use error::DomainError;
pub use lodges::{LodgePolicy, Lodges};
pub use reservation::{ReservationService, ReservationTicket, Ticket};
pub use rows::Rows;
pub use season::{MonthDay, YouthWindow};
pub use topology::{BalconyTopology, OrchestraTopology, ParterreTopology, Topology};
