//! Lodge group: party-size cap and VIP reserve gate in front of the lodge scan

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Location, Lodge, ReservableSeat, SearchRequest};

/// Limits applied to the lodge pool as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LodgePolicy {
    /// Largest party a single lodge hosts.
    pub max_party_size: u32,
    /// Lodges kept free for VIP allocation. Lodge search only runs when
    /// strictly more lodges than this still have a free seat.
    pub vip_reserve: usize,
}

impl Default for LodgePolicy {
    fn default() -> Self {
        Self {
            max_party_size: 3,
            vip_reserve: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Lodges {
    lodges: Vec<Lodge>,
    policy: LodgePolicy,
}

impl Lodges {
    pub fn new(lodges: Vec<Lodge>, policy: LodgePolicy) -> Self {
        Self { lodges, policy }
    }

    /// Number of lodges that still have at least one free seat.
    pub fn free_lodges(&self) -> usize {
        self.lodges.iter().filter(|l| l.has_available_seats()).count()
    }

    pub fn find_suitable_seats(&self, request: &SearchRequest) -> Option<Vec<ReservableSeat>> {
        if request.quantity > self.policy.max_party_size {
            debug!(
                quantity = request.quantity,
                max = self.policy.max_party_size,
                "party too large for a lodge"
            );
            return None;
        }

        let free = self.free_lodges();
        if free <= self.policy.vip_reserve {
            debug!(free, reserve = self.policy.vip_reserve, "lodges held back for VIP");
            return None;
        }

        self.lodges.iter().find_map(|lodge| {
            lodge.find_available_seats(request.quantity).map(|seats| {
                seats
                    .into_iter()
                    .map(|seat| ReservableSeat::Lodge {
                        location: Location::Balcony,
                        lodge: lodge.position,
                        position: seat.position,
                    })
                    .collect()
            })
        })
    }
}
