//! Stock liquidation quantity reconciliation.
//!
//! A product's available stock is split into target liquidation quantities
//! per doctor. The split is valid when no doctor appears twice and the total
//! does not exceed what is available.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Target liquidation quantity assigned to one doctor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    pub doctor_id: String,
    pub quantity: u32,
}

impl Allocation {
    pub fn new(doctor_id: impl Into<String>, quantity: u32) -> Self {
        Self {
            doctor_id: doctor_id.into(),
            quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocationSummary {
    pub available: u32,
    pub allocated: u32,
    pub remaining: u32,
    /// Doctors with a non-zero quantity.
    pub doctors: usize,
}

/// Check that `allocations` fit inside `available`.
///
/// # Errors
///
/// Returns [`SlotError::DuplicateAllocation`] if a doctor appears twice, or
/// [`SlotError::OverAllocated`] if the quantities add up to more than
/// `available`.
pub fn reconcile_allocations(
    available: u32,
    allocations: &[Allocation],
) -> Result<AllocationSummary> {
    let mut seen = HashSet::new();
    for a in allocations {
        if !seen.insert(a.doctor_id.as_str()) {
            return Err(SlotError::DuplicateAllocation(a.doctor_id.clone()));
        }
    }

    let requested: u64 = allocations.iter().map(|a| u64::from(a.quantity)).sum();
    if requested > u64::from(available) {
        return Err(SlotError::OverAllocated {
            requested,
            available,
        });
    }

    // requested <= available, so it fits in u32
    let allocated = requested as u32;
    Ok(AllocationSummary {
        available,
        allocated,
        remaining: available - allocated,
        doctors: allocations.iter().filter(|a| a.quantity > 0).count(),
    })
}

/// Largest quantity `doctor_id` may be given without over-allocating,
/// counting every other doctor's current allocation.
pub fn remaining_for(available: u32, allocations: &[Allocation], doctor_id: &str) -> u32 {
    let others: u64 = allocations
        .iter()
        .filter(|a| a.doctor_id != doctor_id)
        .map(|a| u64::from(a.quantity))
        .sum();
    u64::from(available).saturating_sub(others) as u32
}
