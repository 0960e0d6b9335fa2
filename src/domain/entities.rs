//! Domain entities: seats, rows, lodges and search requests

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Physical area of the venue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Orchestra,
    Parterre,
    Balcony,
}

impl Location {
    /// Capitalized name used in printed reservations.
    pub fn label(&self) -> &'static str {
        match self {
            Location::Orchestra => "Orchestra",
            Location::Parterre => "Parterre",
            Location::Balcony => "Balcony",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Location::Orchestra => "orchestra",
            Location::Parterre => "parterre",
            Location::Balcony => "balcony",
        };
        f.write_str(name)
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "orchestra" => Ok(Location::Orchestra),
            "parterre" => Ok(Location::Parterre),
            "balcony" => Ok(Location::Balcony),
            _ => Err(DomainError::InvalidLocation(s.to_string())),
        }
    }
}

/// Order in which the rows of an area are tried.
///
/// `BackToFront` walks rows in stored order, `FrontToBack` walks them reversed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchPreference {
    FrontToBack,
    #[default]
    BackToFront,
}

impl fmt::Display for SearchPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPreference::FrontToBack => f.write_str("front-to-back"),
            SearchPreference::BackToFront => f.write_str("back-to-front"),
        }
    }
}

impl FromStr for SearchPreference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "front-to-back" => Ok(SearchPreference::FrontToBack),
            "back-to-front" => Ok(SearchPreference::BackToFront),
            other => Err(DomainError::InvalidSearchPreference(other.to_string())),
        }
    }
}

/// What a caller is looking for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub quantity: u32,
    pub search_preference: SearchPreference,
    /// Balcony only: never fall back to rows.
    pub lodge_only: bool,
}

impl SearchRequest {
    pub fn new(quantity: u32) -> Self {
        Self {
            quantity,
            ..Self::default()
        }
    }

    pub fn with_preference(mut self, search_preference: SearchPreference) -> Self {
        self.search_preference = search_preference;
        self
    }

    pub fn lodge_only(mut self, lodge_only: bool) -> Self {
        self.lodge_only = lodge_only;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub position: u32,
    pub available: bool,
}

impl Seat {
    pub fn available(position: u32) -> Self {
        Self {
            position,
            available: true,
        }
    }

    pub fn unavailable(position: u32) -> Self {
        Self {
            position,
            available: false,
        }
    }
}

/// Collect the first run of `quantity` adjacent available seats.
///
/// Returns whatever the accumulator holds when the scan ends, so the result
/// may be shorter than requested.
fn contiguous_block(seats: &[Seat], quantity: u32) -> Vec<&Seat> {
    let quantity = quantity as usize;
    let mut block = Vec::new();
    if quantity == 0 {
        return block;
    }

    for seat in seats {
        if seat.available {
            block.push(seat);
            if block.len() == quantity {
                break;
            }
        } else {
            block.clear();
        }
    }
    block
}

/// A row of seats in fixed physical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub position: u32,
    pub seats: Vec<Seat>,
}

impl Row {
    pub fn new(position: u32, seats: Vec<Seat>) -> Self {
        Self { position, seats }
    }

    /// Find `quantity` contiguous available seats.
    ///
    /// The result can be shorter than `quantity` (or empty); callers check the length.
    pub fn find_available_seats(&self, quantity: u32) -> Vec<&Seat> {
        contiguous_block(&self.seats, quantity)
    }
}

/// A lodge: a small, separately governed block of balcony seats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lodge {
    pub position: u32,
    pub seats: Vec<Seat>,
}

impl Lodge {
    pub fn new(position: u32, seats: Vec<Seat>) -> Self {
        Self { position, seats }
    }

    /// Like [`Row::find_available_seats`], but `None` unless the block is complete.
    pub fn find_available_seats(&self, quantity: u32) -> Option<Vec<&Seat>> {
        let block = contiguous_block(&self.seats, quantity);
        if quantity > 0 && block.len() == quantity as usize {
            Some(block)
        } else {
            None
        }
    }

    pub fn has_available_seats(&self) -> bool {
        self.seats.iter().any(|s| s.available)
    }
}

/// A seat assigned to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReservableSeat {
    Row {
        location: Location,
        row: u32,
        position: u32,
    },
    Lodge {
        location: Location,
        lodge: u32,
        position: u32,
    },
}

impl ReservableSeat {
    pub fn position(&self) -> u32 {
        match self {
            ReservableSeat::Row { position, .. } | ReservableSeat::Lodge { position, .. } => {
                *position
            }
        }
    }
}

impl fmt::Display for ReservableSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReservableSeat::Row {
                location,
                row,
                position,
            } => write!(f, "{}, row {}, position {}", location.label(), row, position),
            ReservableSeat::Lodge {
                lodge, position, ..
            } => write!(f, "Lodge {}, position {}", lodge, position),
        }
    }
}
