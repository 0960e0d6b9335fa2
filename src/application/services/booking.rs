//! Booking service
//!
//! Fetches the snapshot of the requested area, builds its topology for today
//! and reports the resulting ticket line by line.

use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{
    BalconyTopology, Location, OrchestraTopology, ParterreTopology, ReservationService,
    SearchPreference, SearchRequest, Ticket, Topology,
};
use crate::infrastructure::traits::{Clock, LinePrinter, SeatingSource};

/// A reservation order as entered by a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingOrder {
    pub places: u32,
    pub location: Location,
    /// Falls back to the configured preference when unset.
    pub search_preference: Option<SearchPreference>,
    pub lodge_only: bool,
}

impl BookingOrder {
    pub fn new(places: u32, location: Location) -> Self {
        Self {
            places,
            location,
            search_preference: None,
            lodge_only: false,
        }
    }

    /// Order for a location given by name; unknown names are rejected.
    pub fn parse(places: u32, location: &str) -> ApplicationResult<Self> {
        Ok(Self::new(places, location.parse()?))
    }

    pub fn with_preference(mut self, search_preference: SearchPreference) -> Self {
        self.search_preference = Some(search_preference);
        self
    }

    pub fn lodge_only(mut self, lodge_only: bool) -> Self {
        self.lodge_only = lodge_only;
        self
    }
}

/// Service running one reservation against freshly fetched seating data.
pub struct BookingService {
    settings: Arc<Settings>,
    source: Arc<dyn SeatingSource>,
    clock: Arc<dyn Clock>,
    printer: Arc<dyn LinePrinter>,
}

impl BookingService {
    pub fn new(
        settings: Arc<Settings>,
        source: Arc<dyn SeatingSource>,
        clock: Arc<dyn Clock>,
        printer: Arc<dyn LinePrinter>,
    ) -> Self {
        Self {
            settings,
            source,
            clock,
            printer,
        }
    }

    /// Reserve and print the outcome.
    ///
    /// Prints `Reserved Seat:` followed by one line per seat, or
    /// `No seats available`.
    pub fn book(&self, order: &BookingOrder) -> ApplicationResult<Ticket> {
        let ticket = self.find(order)?;
        for line in ticket.report_lines() {
            self.printer.print(&line);
        }
        Ok(ticket)
    }

    /// Reserve without printing anything.
    #[instrument(level = "debug", skip(self))]
    pub fn find(&self, order: &BookingOrder) -> ApplicationResult<Ticket> {
        if order.places == 0 {
            debug!("zero places requested, venue not consulted");
            return Ok(Ticket::NoSeat);
        }

        let topology = self.topology_for(order.location)?;
        let request = SearchRequest {
            quantity: order.places,
            search_preference: order
                .search_preference
                .unwrap_or(self.settings.search_preference),
            lodge_only: order.lodge_only,
        };
        debug!(?request, "searching");

        Ok(ReservationService::new(topology).reserve(&request))
    }

    /// Build the topology of `location` as it stands today.
    pub fn topology_for(&self, location: Location) -> ApplicationResult<Box<dyn Topology>> {
        let topology: Box<dyn Topology> = match location {
            Location::Orchestra => {
                let snapshot = self
                    .source
                    .fetch_orchestra_seats()
                    .with_context("fetch orchestra seats")?;
                Box::new(OrchestraTopology::new(snapshot.to_rows()))
            }
            Location::Parterre => {
                let snapshot = self
                    .source
                    .fetch_parterre_seats()
                    .with_context("fetch parterre seats")?;
                let today = self.clock.today();
                Box::new(ParterreTopology::new(
                    snapshot.to_rows(),
                    today,
                    &self.settings.parterre.youth_window(),
                ))
            }
            Location::Balcony => {
                let snapshot = self
                    .source
                    .fetch_balcony_seats()
                    .with_context("fetch balcony seats")?;
                Box::new(BalconyTopology::new(
                    snapshot.parterre.to_rows(),
                    snapshot.to_lodges(),
                    self.settings.lodges,
                ))
            }
        };
        Ok(topology)
    }
}
