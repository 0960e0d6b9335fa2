//! Venue topologies: how each area composes its rows and lodges

use chrono::NaiveDate;
use tracing::debug;

use crate::domain::{
    Location, Lodge, LodgePolicy, Lodges, ReservableSeat, Row, Rows, SearchRequest, YouthWindow,
};

/// Seat search capability of one venue area.
///
/// Implementations are immutable snapshots; a search never changes them.
pub trait Topology: Send + Sync {
    fn location(&self) -> Location;

    /// Seats for `request`, all from the same row or lodge, or `None`.
    fn find_suitable_seats(&self, request: &SearchRequest) -> Option<Vec<ReservableSeat>>;
}

#[derive(Debug, Clone)]
pub struct OrchestraTopology {
    rows: Rows,
}

impl OrchestraTopology {
    pub fn new(rows: Vec<Row>) -> Self {
        Self {
            rows: Rows::new(Location::Orchestra, rows),
        }
    }
}

impl Topology for OrchestraTopology {
    fn location(&self) -> Location {
        Location::Orchestra
    }

    fn find_suitable_seats(&self, request: &SearchRequest) -> Option<Vec<ReservableSeat>> {
        self.rows.find_suitable_seats(request)
    }
}

/// Parterre rows, minus the front rows while the youth window is open.
#[derive(Debug, Clone)]
pub struct ParterreTopology {
    rows: Rows,
}

impl ParterreTopology {
    /// Build the parterre as it stands on `today`.
    pub fn new(rows: Vec<Row>, today: NaiveDate, window: &YouthWindow) -> Self {
        let excluded = window.excluded_rows_on(today);
        if excluded > 0 {
            debug!(%today, excluded, "youth window open, front parterre rows withheld");
        }
        Self {
            rows: Rows::new(Location::Parterre, rows).excluding_front(excluded),
        }
    }
}

impl Topology for ParterreTopology {
    fn location(&self) -> Location {
        Location::Parterre
    }

    fn find_suitable_seats(&self, request: &SearchRequest) -> Option<Vec<ReservableSeat>> {
        self.rows.find_suitable_seats(request)
    }
}

/// Balcony: lodges first, then the balcony rows unless the request is lodge-only.
#[derive(Debug, Clone)]
pub struct BalconyTopology {
    lodges: Lodges,
    rows: Rows,
}

impl BalconyTopology {
    pub fn new(rows: Vec<Row>, lodges: Vec<Lodge>, policy: LodgePolicy) -> Self {
        Self {
            lodges: Lodges::new(lodges, policy),
            rows: Rows::new(Location::Balcony, rows),
        }
    }
}

impl Topology for BalconyTopology {
    fn location(&self) -> Location {
        Location::Balcony
    }

    fn find_suitable_seats(&self, request: &SearchRequest) -> Option<Vec<ReservableSeat>> {
        if let Some(seats) = self.lodges.find_suitable_seats(request) {
            return Some(seats);
        }
        if request.lodge_only {
            debug!("no lodge available for lodge-only request");
            return None;
        }
        self.rows.find_suitable_seats(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Seat;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn single_seat_rows(count: u32) -> Vec<Row> {
        (1..=count)
            .map(|p| Row::new(p, vec![Seat::available(1)]))
            .collect()
    }

    fn free_lodges(count: u32) -> Vec<Lodge> {
        (1..=count)
            .map(|p| Lodge::new(p, vec![Seat::available(1)]))
            .collect()
    }

    #[test]
    fn given_summer_when_searching_parterre_then_row_four_is_first() {
        let topology =
            ParterreTopology::new(single_seat_rows(4), day("2021-07-14"), &YouthWindow::default());

        let seats = topology.find_suitable_seats(&SearchRequest::new(1)).unwrap();
        assert_eq!(
            seats,
            vec![ReservableSeat::Row {
                location: Location::Parterre,
                row: 4,
                position: 1
            }]
        );
    }

    #[test]
    fn given_winter_when_searching_parterre_then_row_one_is_first() {
        let topology =
            ParterreTopology::new(single_seat_rows(4), day("2021-12-01"), &YouthWindow::default());

        let seats = topology.find_suitable_seats(&SearchRequest::new(1)).unwrap();
        assert!(matches!(seats[0], ReservableSeat::Row { row: 1, .. }));
    }

    #[test]
    fn given_free_lodges_and_rows_when_searching_balcony_then_lodges_win() {
        let topology =
            BalconyTopology::new(single_seat_rows(1), free_lodges(5), LodgePolicy::default());

        let seats = topology.find_suitable_seats(&SearchRequest::new(1)).unwrap();
        assert!(matches!(seats[0], ReservableSeat::Lodge { lodge: 1, .. }));
    }

    #[test]
    fn given_vip_reserve_when_searching_balcony_then_rows_are_used() {
        let topology =
            BalconyTopology::new(single_seat_rows(1), free_lodges(4), LodgePolicy::default());

        let seats = topology.find_suitable_seats(&SearchRequest::new(1)).unwrap();
        assert!(matches!(seats[0], ReservableSeat::Row { row: 1, .. }));
        assert!(topology
            .find_suitable_seats(&SearchRequest::new(1).lodge_only(true))
            .is_none());
    }
}
