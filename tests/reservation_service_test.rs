//! Tests for ReservationService against hand-built topologies

use chrono::NaiveDate;
use rstest::rstest;

use seatalloc::domain::{
    BalconyTopology, Location, Lodge, LodgePolicy, OrchestraTopology, ParterreTopology,
    ReservableSeat, ReservationService, ReservationTicket, Row, SearchPreference, SearchRequest,
    Seat, Ticket, Topology, YouthWindow,
};
use seatalloc::util::testing;

fn row(position: u32, seats: Vec<Seat>) -> Row {
    Row::new(position, seats)
}

fn lodge(position: u32, seats: Vec<Seat>) -> Lodge {
    Lodge::new(position, seats)
}

fn available(position: u32) -> Seat {
    Seat::available(position)
}

fn unavailable(position: u32) -> Seat {
    Seat::unavailable(position)
}

fn orchestra(rows: Vec<Row>) -> ReservationService {
    ReservationService::new(Box::new(OrchestraTopology::new(rows)))
}

fn winter() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 1, 15).unwrap()
}

fn balcony(rows: Vec<Row>, lodges: Vec<Lodge>) -> ReservationService {
    ReservationService::new(Box::new(BalconyTopology::new(
        rows,
        lodges,
        LodgePolicy::default(),
    )))
}

/// Four lodges with a free seat each, placed after the lodges under test.
fn vip_lodges() -> Vec<Lodge> {
    (10..14).map(|p| lodge(p, vec![available(1)])).collect()
}

fn row_seat(location: Location, row: u32, position: u32) -> ReservableSeat {
    ReservableSeat::Row {
        location,
        row,
        position,
    }
}

fn lodge_seat(lodge: u32, position: u32) -> ReservableSeat {
    ReservableSeat::Lodge {
        location: Location::Balcony,
        lodge,
        position,
    }
}

fn reserved(places: u32, seats: Vec<ReservableSeat>) -> Ticket {
    Ticket::Reserved(ReservationTicket { places, seats })
}

// ============================================================
// Orchestra
// ============================================================

#[test]
fn given_empty_orchestra_when_reserving_then_no_seat() {
    testing::init_test_setup();
    assert_eq!(orchestra(vec![]).reserve(&SearchRequest::new(1)), Ticket::NoSeat);
}

#[test]
fn given_single_available_seat_when_reserving_then_it_is_reserved() {
    let service = orchestra(vec![row(1, vec![available(1)])]);

    assert_eq!(
        service.reserve(&SearchRequest::new(1)),
        reserved(1, vec![row_seat(Location::Orchestra, 1, 1)])
    );
}

#[test]
fn given_unavailable_first_seat_when_reserving_then_second_is_reserved() {
    let service = orchestra(vec![row(1, vec![unavailable(1), available(2)])]);

    assert_eq!(
        service.reserve(&SearchRequest::new(1)),
        reserved(1, vec![row_seat(Location::Orchestra, 1, 2)])
    );
}

#[test]
fn given_gap_when_reserving_two_then_block_after_gap_is_reserved() {
    let service = orchestra(vec![row(
        1,
        vec![available(1), unavailable(2), available(3), available(4)],
    )]);

    assert_eq!(
        service.reserve(&SearchRequest::new(2)),
        reserved(
            2,
            vec![
                row_seat(Location::Orchestra, 1, 3),
                row_seat(Location::Orchestra, 1, 4)
            ]
        )
    );
}

#[test]
fn given_no_contiguous_pair_when_reserving_two_then_no_seat() {
    let service = orchestra(vec![row(
        1,
        vec![available(1), unavailable(2), available(3), unavailable(4)],
    )]);

    assert_eq!(service.reserve(&SearchRequest::new(2)), Ticket::NoSeat);
}

#[test]
fn given_single_seats_in_two_rows_when_reserving_two_then_no_seat() {
    let service = orchestra(vec![row(1, vec![available(1)]), row(2, vec![available(1)])]);

    assert_eq!(service.reserve(&SearchRequest::new(2)), Ticket::NoSeat);
}

#[test]
fn given_empty_first_row_when_reserving_then_second_row_is_used() {
    let service = orchestra(vec![row(1, vec![]), row(2, vec![available(1), available(2)])]);

    assert_eq!(
        service.reserve(&SearchRequest::new(2)),
        reserved(
            2,
            vec![
                row_seat(Location::Orchestra, 2, 1),
                row_seat(Location::Orchestra, 2, 2)
            ]
        )
    );
}

#[test]
fn given_front_to_back_when_reserving_then_last_row_is_tried_first() {
    let service = orchestra(vec![row(1, vec![available(1)]), row(2, vec![available(1)])]);
    let request = SearchRequest::new(1).with_preference(SearchPreference::FrontToBack);

    assert_eq!(
        service.reserve(&request),
        reserved(1, vec![row_seat(Location::Orchestra, 2, 1)])
    );
}

#[test]
fn given_longer_run_when_reserving_then_first_seats_of_run_are_taken() {
    let service = orchestra(vec![row(
        1,
        vec![unavailable(1), available(2), available(3), available(4)],
    )]);

    let ticket = service.reserve(&SearchRequest::new(2));
    let positions: Vec<u32> = ticket.seats().iter().map(|s| s.position()).collect();
    assert_eq!(positions, vec![2, 3]);
}

#[rstest]
#[case(Location::Orchestra)]
#[case(Location::Parterre)]
#[case(Location::Balcony)]
fn given_zero_places_when_reserving_then_always_no_seat(#[case] location: Location) {
    let rows = vec![row(1, vec![available(1), available(2)])];
    let lodges: Vec<Lodge> = (1..=6).map(|p| lodge(p, vec![available(1)])).collect();
    let topology: Box<dyn Topology> = match location {
        Location::Orchestra => Box::new(OrchestraTopology::new(rows)),
        Location::Parterre => Box::new(ParterreTopology::new(
            rows,
            winter(),
            &YouthWindow::default(),
        )),
        Location::Balcony => Box::new(BalconyTopology::new(rows, lodges, LodgePolicy::default())),
    };

    let service = ReservationService::new(topology);
    assert_eq!(service.reserve(&SearchRequest::new(0)), Ticket::NoSeat);
}

// ============================================================
// Parterre
// ============================================================

#[test]
fn given_parterre_outside_window_when_reserving_then_first_row_is_used() {
    let service = ReservationService::new(Box::new(ParterreTopology::new(
        vec![row(1, vec![available(1)])],
        winter(),
        &YouthWindow::default(),
    )));

    assert_eq!(
        service.reserve(&SearchRequest::new(1)),
        reserved(1, vec![row_seat(Location::Parterre, 1, 1)])
    );
}

#[test]
fn given_parterre_in_window_when_reserving_front_to_back_then_front_rows_stay_excluded() {
    let rows = (1..=4).map(|p| row(p, vec![available(1)])).collect();
    let july = NaiveDate::from_ymd_opt(2021, 7, 1).unwrap();
    let service =
        ReservationService::new(Box::new(ParterreTopology::new(rows, july, &YouthWindow::default())));

    for preference in [SearchPreference::BackToFront, SearchPreference::FrontToBack] {
        assert_eq!(
            service.reserve(&SearchRequest::new(1).with_preference(preference)),
            reserved(1, vec![row_seat(Location::Parterre, 4, 1)])
        );
    }
}

// ============================================================
// Balcony
// ============================================================

#[test]
fn given_balcony_rows_only_when_reserving_then_row_seat_is_used() {
    let service = balcony(vec![row(1, vec![available(1)])], vec![]);

    assert_eq!(
        service.reserve(&SearchRequest::new(1)),
        reserved(1, vec![row_seat(Location::Balcony, 1, 1)])
    );
}

#[test]
fn given_enough_free_lodges_when_reserving_then_lodge_comes_before_rows() {
    let mut lodges = vec![lodge(1, vec![available(1)])];
    lodges.extend(vip_lodges());
    let service = balcony(vec![row(1, vec![available(1)])], lodges);

    assert_eq!(
        service.reserve(&SearchRequest::new(1)),
        reserved(1, vec![lodge_seat(1, 1)])
    );
}

#[test]
fn given_lodge_with_three_seats_when_reserving_three_then_same_lodge_is_used() {
    let mut lodges = vec![
        lodge(1, vec![available(1)]),
        lodge(2, vec![available(1), available(2), available(3)]),
    ];
    lodges.extend(vip_lodges());
    let service = balcony(vec![], lodges);

    assert_eq!(
        service.reserve(&SearchRequest::new(3)),
        reserved(3, vec![lodge_seat(2, 1), lodge_seat(2, 2), lodge_seat(2, 3)])
    );
}

#[test]
fn given_five_free_lodges_when_reserving_three_or_four_then_cap_applies() {
    let mut lodges = vec![lodge(
        1,
        vec![available(1), available(2), available(3), available(4)],
    )];
    lodges.extend(vip_lodges());
    let service = balcony(vec![], lodges);

    assert_eq!(
        service.reserve(&SearchRequest::new(3)),
        reserved(3, vec![lodge_seat(1, 1), lodge_seat(1, 2), lodge_seat(1, 3)])
    );
    assert_eq!(service.reserve(&SearchRequest::new(4)), Ticket::NoSeat);
}

#[test]
fn given_four_free_lodges_when_reserving_then_vip_reserve_blocks_lodges() {
    let service = balcony(vec![], vip_lodges());

    assert_eq!(service.reserve(&SearchRequest::new(1)), Ticket::NoSeat);
}

#[test]
fn given_exactly_five_free_lodges_when_reserving_then_first_lodge_is_used() {
    let lodges = (1..=5).map(|p| lodge(p, vec![available(1)])).collect();
    let service = balcony(vec![], lodges);

    assert_eq!(
        service.reserve(&SearchRequest::new(1)),
        reserved(1, vec![lodge_seat(1, 1)])
    );
}

#[test]
fn given_single_seats_in_five_lodges_when_reserving_two_then_no_seat() {
    let lodges = (1..=5).map(|p| lodge(p, vec![available(1)])).collect();
    let service = balcony(vec![], lodges);

    assert_eq!(service.reserve(&SearchRequest::new(2)), Ticket::NoSeat);
}

#[test]
fn given_lodge_only_when_lodges_are_blocked_then_rows_are_not_used() {
    let service = balcony(vec![row(1, vec![available(1)])], vip_lodges());

    assert_eq!(
        service.reserve(&SearchRequest::new(1).lodge_only(true)),
        Ticket::NoSeat
    );
    assert_eq!(
        service.reserve(&SearchRequest::new(1)),
        reserved(1, vec![row_seat(Location::Balcony, 1, 1)])
    );
}

#[test]
fn given_large_party_when_reserving_balcony_then_rows_take_it() {
    let mut lodges = vec![lodge(1, (1..=4).map(available).collect())];
    lodges.extend(vip_lodges());
    let service = balcony(vec![row(1, (1..=4).map(available).collect())], lodges);

    let ticket = service.reserve(&SearchRequest::new(4));
    assert!(ticket
        .seats()
        .iter()
        .all(|s| matches!(s, ReservableSeat::Row { row: 1, .. })));
    assert_eq!(ticket.seats().len(), 4);
}
