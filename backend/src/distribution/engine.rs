//! Capacity-weighted allocation of students to rooms.
//!
//! Given a [`CapacityModel`] and a quantity `Q`:
//!
//! 1. If the school has no capacity, nothing is assigned and all of `Q` is residual.
//! 2. If `Q` meets or exceeds total capacity, every room is filled and the
//!    excess is residual.
//! 3. Otherwise each room receives `floor(Q * capacity / total)`, and the units
//!    lost to rounding are handed out one at a time in room order, skipping
//!    full rooms.
//!
//! The result depends only on the model and `Q`.

use super::capacity::{CapacityModel, CapacityRoom};
use super::error::{DistributionError, DistributionResult};

/// Assignment for a single room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationUnit<'m> {
    pub room: &'m CapacityRoom,
    pub assigned: u64,
}

impl AllocationUnit<'_> {
    pub fn capacity(&self) -> u64 {
        self.room.capacity
    }

    pub fn is_saturated(&self) -> bool {
        self.assigned == self.room.capacity
    }
}

/// Outcome of a distribution, in the model's room order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationResult<'m> {
    model: &'m CapacityModel,
    units: Vec<AllocationUnit<'m>>,
    requested: u64,
    residual: u64,
}

impl<'m> AllocationResult<'m> {
    pub fn model(&self) -> &'m CapacityModel {
        self.model
    }

    pub fn units(&self) -> &[AllocationUnit<'m>] {
        &self.units
    }

    pub fn requested(&self) -> u64 {
        self.requested
    }

    /// Students that could not be placed because capacity ran out.
    pub fn residual(&self) -> u64 {
        self.residual
    }

    pub fn total_assigned(&self) -> u64 {
        self.requested - self.residual
    }

    pub fn is_fully_satisfied(&self) -> bool {
        self.residual == 0
    }
}

/// Distribute `quantity` students across the rooms of `model`.
///
/// # Errors
/// `InvalidQuantity` when `quantity <= 0`.
pub fn allocate(model: &CapacityModel, quantity: i64) -> DistributionResult<AllocationResult<'_>> {
    let requested = u64::try_from(quantity)
        .ok()
        .filter(|q| *q > 0)
        .ok_or(DistributionError::InvalidQuantity { quantity })?;

    let rooms = model.rooms();
    let total = model.total_capacity();

    let (assigned, residual) = if total == 0 {
        (vec![0; rooms.len()], requested)
    } else if u128::from(requested) >= total {
        // total <= requested, so it fits in u64 here.
        let filled = rooms.iter().map(|r| r.capacity).collect();
        (filled, requested - total as u64)
    } else {
        let mut assigned = proportional_shares(rooms, requested, total);
        let distributed: u64 = assigned.iter().sum();
        let leftover = hand_out_remainder(rooms, &mut assigned, requested - distributed);
        (assigned, leftover)
    };

    let units = rooms
        .iter()
        .zip(assigned)
        .map(|(room, assigned)| AllocationUnit { room, assigned })
        .collect();

    Ok(AllocationResult {
        model,
        units,
        requested,
        residual,
    })
}

/// First pass: `floor(q * capacity / total)`, capped at capacity.
fn proportional_shares(rooms: &[CapacityRoom], q: u64, total: u128) -> Vec<u64> {
    rooms
        .iter()
        .map(|r| {
            let share = u128::from(q) * u128::from(r.capacity) / total;
            // share <= capacity whenever q <= total; the cap keeps it true regardless.
            share.min(u128::from(r.capacity)) as u64
        })
        .collect()
}

/// Hands out `remainder` one unit per room per pass, in room order, skipping
/// saturated rooms. Returns what could not be placed.
fn hand_out_remainder(rooms: &[CapacityRoom], assigned: &mut [u64], mut remainder: u64) -> u64 {
    while remainder > 0 {
        let mut placed_any = false;
        for (room, slot) in rooms.iter().zip(assigned.iter_mut()) {
            if remainder == 0 {
                break;
            }
            if *slot < room.capacity {
                *slot += 1;
                remainder -= 1;
                placed_any = true;
            }
        }
        if !placed_any {
            break;
        }
    }
    remainder
}
