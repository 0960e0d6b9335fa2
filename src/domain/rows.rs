//! Row group: directional scan over the rows of one area

use tracing::{debug, trace};

use crate::domain::{Location, ReservableSeat, Row, SearchPreference, SearchRequest};

/// Ordered rows of one physical area.
#[derive(Debug, Clone)]
pub struct Rows {
    location: Location,
    rows: Vec<Row>,
    /// Leading rows (in stored order) that are never offered.
    excluded_front: usize,
}

impl Rows {
    pub fn new(location: Location, rows: Vec<Row>) -> Self {
        Self {
            location,
            rows,
            excluded_front: 0,
        }
    }

    /// Take the first `count` rows out of every scan, whatever their availability.
    pub fn excluding_front(mut self, count: usize) -> Self {
        self.excluded_front = count;
        self
    }

    /// First row holding `request.quantity` contiguous seats, in scan order.
    ///
    /// Blocks never span rows: a row that cannot complete the block is skipped
    /// and the next row starts from scratch.
    pub fn find_suitable_seats(&self, request: &SearchRequest) -> Option<Vec<ReservableSeat>> {
        let wanted = request.quantity as usize;
        if wanted == 0 {
            return None;
        }

        let candidates = self.rows.iter().skip(self.excluded_front);
        let ordered: Box<dyn Iterator<Item = &Row> + '_> = match request.search_preference {
            SearchPreference::BackToFront => Box::new(candidates),
            SearchPreference::FrontToBack => Box::new(candidates.rev()),
        };

        for row in ordered {
            let seats = row.find_available_seats(request.quantity);
            if seats.len() != wanted {
                trace!(row = row.position, found = seats.len(), "row cannot host block");
                continue;
            }
            debug!(
                location = %self.location,
                row = row.position,
                quantity = wanted,
                "found contiguous block"
            );
            return Some(
                seats
                    .into_iter()
                    .map(|seat| ReservableSeat::Row {
                        location: self.location,
                        row: row.position,
                        position: seat.position,
                    })
                    .collect(),
            );
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Seat;

    fn rows() -> Rows {
        Rows::new(
            Location::Orchestra,
            vec![
                Row::new(1, vec![Seat::available(1)]),
                Row::new(2, vec![Seat::unavailable(1), Seat::available(2)]),
                Row::new(3, vec![Seat::available(1)]),
            ],
        )
    }

    fn rows_of(seats: Option<Vec<ReservableSeat>>) -> Vec<u32> {
        seats
            .unwrap_or_default()
            .into_iter()
            .filter_map(|s| match s {
                ReservableSeat::Row { row, .. } => Some(row),
                ReservableSeat::Lodge { .. } => None,
            })
            .collect()
    }

    #[test]
    fn given_default_preference_when_scanning_then_stored_order_wins() {
        let found = rows().find_suitable_seats(&SearchRequest::new(1));
        assert_eq!(rows_of(found), vec![1]);
    }

    #[test]
    fn given_front_to_back_when_scanning_then_last_stored_row_wins() {
        let request = SearchRequest::new(1).with_preference(SearchPreference::FrontToBack);
        assert_eq!(rows_of(rows().find_suitable_seats(&request)), vec![3]);
    }

    #[test]
    fn given_excluded_front_rows_when_scanning_then_they_are_skipped() {
        let group = rows().excluding_front(2);
        assert_eq!(rows_of(group.find_suitable_seats(&SearchRequest::new(1))), vec![3]);

        let request = SearchRequest::new(1).with_preference(SearchPreference::FrontToBack);
        assert_eq!(rows_of(group.find_suitable_seats(&request)), vec![3]);
    }

    #[test]
    fn given_seats_in_separate_rows_when_requesting_block_then_none() {
        assert!(rows().find_suitable_seats(&SearchRequest::new(2)).is_none());
    }
}
