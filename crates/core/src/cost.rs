//! Trip cost estimation.
//!
//! Plain integer arithmetic over whole currency units: given identical
//! inputs the breakdown is reproducible bit for bit. Two-decimal money
//! formatting happens only at the export boundary.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Default tariffs
// ---------------------------------------------------------------------------

/// Default accommodation cost per night, per trip.
pub const DEFAULT_NIGHTLY_ACCOMMODATION: i64 = 100;
/// Default flat transport cost per trip.
pub const DEFAULT_TRANSPORT_COST: i64 = 200;
/// Default daily food/incidental cost per traveler.
pub const DEFAULT_DAILY_COST_PER_PERSON: i64 = 75;

/// Tariff inputs for [`estimate_cost`].
#[derive(Debug, Clone, Copy)]
pub struct CostParams {
    pub nightly_accommodation: i64,
    pub transport: i64,
    pub daily_per_person: i64,
}

impl Default for CostParams {
    fn default() -> Self {
        Self {
            nightly_accommodation: DEFAULT_NIGHTLY_ACCOMMODATION,
            transport: DEFAULT_TRANSPORT_COST,
            daily_per_person: DEFAULT_DAILY_COST_PER_PERSON,
        }
    }
}

// ---------------------------------------------------------------------------
// Estimate
// ---------------------------------------------------------------------------

/// Cost breakdown in whole currency units. Derived and immutable; it is
/// recomputed whenever its inputs change and only ever stored as part
/// of a trip record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub accommodation_cost: i64,
    pub food_cost: i64,
    pub transport_cost: i64,
    pub total_cost: i64,
}

/// Estimate the cost of a trip.
///
/// ```text
/// accommodation = nightly_accommodation * nights
/// food          = daily_per_person * nights * travelers
/// total         = accommodation + transport + food
/// ```
///
/// Callers guarantee `travelers >= 1` and `nights >= 0` (enforced by
/// the dates stage validation).
pub fn estimate_cost(travelers: i64, nights: i64, params: CostParams) -> CostEstimate {
    let accommodation_cost = params.nightly_accommodation * nights;
    let food_cost = params.daily_per_person * nights * travelers;
    CostEstimate {
        accommodation_cost,
        food_cost,
        transport_cost: params.transport,
        total_cost: accommodation_cost + params.transport + food_cost,
    }
}
