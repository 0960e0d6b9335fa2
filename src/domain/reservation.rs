//! Allocation entry point: turns a search into a ticket

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::{ReservableSeat, SearchRequest, Topology};

/// A complete block of seats for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReservationTicket {
    pub places: u32,
    pub seats: Vec<ReservableSeat>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Ticket {
    Reserved(ReservationTicket),
    NoSeat,
}

impl Ticket {
    pub fn seats(&self) -> &[ReservableSeat] {
        match self {
            Ticket::Reserved(ticket) => &ticket.seats,
            Ticket::NoSeat => &[],
        }
    }

    pub fn is_reserved(&self) -> bool {
        matches!(self, Ticket::Reserved(_))
    }

    /// Printed form: a header line, then one line per seat.
    pub fn report_lines(&self) -> Vec<String> {
        match self {
            Ticket::NoSeat => vec!["No seats available".to_string()],
            Ticket::Reserved(ticket) => std::iter::once("Reserved Seat:".to_string())
                .chain(ticket.seats.iter().map(|seat| format!("- {seat}")))
                .collect(),
        }
    }
}

/// Reserves seats against one topology snapshot.
pub struct ReservationService {
    topology: Box<dyn Topology>,
}

impl ReservationService {
    pub fn new(topology: Box<dyn Topology>) -> Self {
        Self { topology }
    }

    /// Reserve `request.quantity` contiguous seats.
    ///
    /// A request for zero places never reaches the topology.
    pub fn reserve(&self, request: &SearchRequest) -> Ticket {
        if request.quantity == 0 {
            debug!("zero places requested");
            return Ticket::NoSeat;
        }

        match self.topology.find_suitable_seats(request) {
            Some(seats) => {
                info!(
                    location = %self.topology.location(),
                    places = request.quantity,
                    "seats reserved"
                );
                Ticket::Reserved(ReservationTicket {
                    places: request.quantity,
                    seats,
                })
            }
            None => {
                info!(
                    location = %self.topology.location(),
                    places = request.quantity,
                    "no seats available"
                );
                Ticket::NoSeat
            }
        }
    }
}
