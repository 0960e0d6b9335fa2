//! Service container for dependency injection
//!
//! Wires up the booking service with its collaborators.

use std::sync::Arc;

use crate::application::services::BookingService;
use crate::config::Settings;
use crate::infrastructure::traits::{
    Clock, JsonSeatingSource, LinePrinter, SeatingSource, StaticSeatingSource, StdoutPrinter,
    SystemClock,
};

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Seating data
    pub source: Arc<dyn SeatingSource>,

    /// Today's date
    pub clock: Arc<dyn Clock>,

    /// Report output
    pub printer: Arc<dyn LinePrinter>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    ///
    /// Without a configured venue file the venue is empty.
    pub fn new(settings: Settings) -> Self {
        let source: Arc<dyn SeatingSource> = match &settings.venue_file {
            Some(path) => Arc::new(JsonSeatingSource::new(path)),
            None => Arc::new(StaticSeatingSource::default()),
        };
        Self::with_deps(settings, source, Arc::new(SystemClock), Arc::new(StdoutPrinter))
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        source: Arc<dyn SeatingSource>,
        clock: Arc<dyn Clock>,
        printer: Arc<dyn LinePrinter>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            source,
            clock,
            printer,
        }
    }

    pub fn booking_service(&self) -> BookingService {
        BookingService::new(
            Arc::clone(&self.settings),
            Arc::clone(&self.source),
            Arc::clone(&self.clock),
            Arc::clone(&self.printer),
        )
    }
}
