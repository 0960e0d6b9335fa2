//! Wire shape of seating snapshots as delivered by the seating source
//!
//! The wire format flags seats as `reserved`; the domain model tracks
//! `available`. The negation happens here and nowhere else.

use serde::{Deserialize, Serialize};

use crate::domain::{Lodge, Row, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatRecord {
    pub position: u32,
    #[serde(default)]
    pub reserved: bool,
}

/// One row or one lodge: both share the same shape on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UnitRecord {
    pub position: u32,
    #[serde(default)]
    pub seats: Vec<SeatRecord>,
}

impl UnitRecord {
    fn seats(&self) -> Vec<Seat> {
        self.seats
            .iter()
            .map(|s| Seat {
                position: s.position,
                available: !s.reserved,
            })
            .collect()
    }

    pub fn to_row(&self) -> Row {
        Row::new(self.position, self.seats())
    }

    pub fn to_lodge(&self) -> Lodge {
        Lodge::new(self.position, self.seats())
    }
}

/// Rows of a single area (orchestra, parterre, or the balcony's own rows).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SeatingSnapshot {
    #[serde(default)]
    pub rows: Vec<UnitRecord>,
}

impl SeatingSnapshot {
    pub fn to_rows(&self) -> Vec<Row> {
        self.rows.iter().map(UnitRecord::to_row).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BalconySnapshot {
    /// Open rows of the balcony.
    #[serde(default)]
    pub parterre: SeatingSnapshot,
    #[serde(default)]
    pub lodges: Vec<UnitRecord>,
}

impl BalconySnapshot {
    pub fn to_lodges(&self) -> Vec<Lodge> {
        self.lodges.iter().map(UnitRecord::to_lodge).collect()
    }
}

/// A whole venue as stored in a venue file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VenueSnapshot {
    pub orchestra: SeatingSnapshot,
    pub parterre: SeatingSnapshot,
    pub balcony: BalconySnapshot,
}
