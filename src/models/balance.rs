//! Leave balance figures derived from approved requests.

use serde::{Deserialize, Serialize};

/// Balance figures for a single leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBucket {
    /// The allotment from the employee record.
    pub total: u32,
    /// Sum of `days_requested` over approved requests of this type.
    pub used: u32,
    /// `total - used`. Negative when the allotment was reduced below usage
    /// that was already approved.
    pub remaining: i64,
}

impl LeaveBucket {
    pub fn new(total: u32, used: u32) -> Self {
        LeaveBucket {
            total,
            used,
            remaining: i64::from(total) - i64::from(used),
        }
    }
}

/// Per-employee balance across the tracked leave types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    pub annual: LeaveBucket,
    pub sick: LeaveBucket,
}
