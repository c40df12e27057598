//! Vendor ("rapid") DDS schema types for the outbound plan-status topic.

use serde::{Deserialize, Serialize};

use crate::msg::ExecState;

pub const PLAN_STATUS_TYPE_NAME: &str = "rapid::PlanStatus";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

/// One plan-status sample as it goes on the wire. `Default` yields the
/// zero-initialized sample handed out by the supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStatus {
    pub plan_name: String,
    pub current_point: i32,
    pub current_command: i32,
    pub current_status: ExecState,
    pub stamp: Time,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_sample_is_zeroed() {
        let sample = PlanStatus::default();
        assert!(sample.plan_name.is_empty());
        assert_eq!(sample.current_point, 0);
        assert_eq!(sample.current_command, 0);
        assert_eq!(sample.current_status, ExecState::Idle);
        assert_eq!(sample.stamp, Time { sec: 0, nanosec: 0 });
    }
}
