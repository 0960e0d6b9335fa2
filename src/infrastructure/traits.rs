//! I/O boundary traits for testability
//!
//! These traits abstract the collaborators around the allocation engine
//! (seating data, today's date, line output), allowing services to be
//! tested with fixed implementations.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use tracing::debug;

use crate::infrastructure::snapshot::{BalconySnapshot, SeatingSnapshot, VenueSnapshot};

/// Source of seating snapshots, one fetch per area.
pub trait SeatingSource: Send + Sync {
    fn fetch_orchestra_seats(&self) -> io::Result<SeatingSnapshot>;

    fn fetch_parterre_seats(&self) -> io::Result<SeatingSnapshot>;

    fn fetch_balcony_seats(&self) -> io::Result<BalconySnapshot>;
}

/// Calendar abstraction.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Line-oriented output sink.
pub trait LinePrinter: Send + Sync {
    fn print(&self, line: &str);
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Venue file in JSON, read again on every fetch.
#[derive(Debug, Clone)]
pub struct JsonSeatingSource {
    path: PathBuf,
}

impl JsonSeatingSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> io::Result<VenueSnapshot> {
        debug!("load venue: {}", self.path.display());
        let content = std::fs::read_to_string(&self.path)?;
        let venue = serde_json::from_str(&content)?;
        Ok(venue)
    }
}

impl SeatingSource for JsonSeatingSource {
    fn fetch_orchestra_seats(&self) -> io::Result<SeatingSnapshot> {
        self.load().map(|v| v.orchestra)
    }

    fn fetch_parterre_seats(&self) -> io::Result<SeatingSnapshot> {
        self.load().map(|v| v.parterre)
    }

    fn fetch_balcony_seats(&self) -> io::Result<BalconySnapshot> {
        self.load().map(|v| v.balcony)
    }
}

/// In-memory venue; the default (empty) venue has no seats at all.
#[derive(Debug, Clone, Default)]
pub struct StaticSeatingSource {
    venue: VenueSnapshot,
}

impl StaticSeatingSource {
    pub fn new(venue: VenueSnapshot) -> Self {
        Self { venue }
    }
}

impl SeatingSource for StaticSeatingSource {
    fn fetch_orchestra_seats(&self) -> io::Result<SeatingSnapshot> {
        Ok(self.venue.orchestra.clone())
    }

    fn fetch_parterre_seats(&self) -> io::Result<SeatingSnapshot> {
        Ok(self.venue.parterre.clone())
    }

    fn fetch_balcony_seats(&self) -> io::Result<BalconySnapshot> {
        Ok(self.venue.balcony.clone())
    }
}

/// Local calendar date.
#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct StdoutPrinter;

impl LinePrinter for StdoutPrinter {
    fn print(&self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps every printed line in memory.
#[derive(Debug, Default)]
pub struct RecordingPrinter {
    lines: Mutex<Vec<String>>,
}

impl RecordingPrinter {
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|l| l.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl LinePrinter for RecordingPrinter {
    fn print(&self, line: &str) {
        let mut lines = self.lines.lock().unwrap_or_else(|p| p.into_inner());
        lines.push(line.to_string());
    }
}
