use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Time {
    pub sec: i32,
    pub nanosec: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub stamp: Time,
    pub frame_id: String,
}

/// Plan execution state. The numeric values are shared by both schemas, so
/// the status crosses the bridge without translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum ExecState {
    #[default]
    Idle = 0,
    Executing = 1,
    Paused = 2,
    Error = 3,
}

/// Timestamped plan-status update published by the executive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStatusStamped {
    pub header: Header,
    pub name: String,
    pub point: i32,
    pub command: i32,
    pub status: ExecState,
}

impl ros2_client::Message for PlanStatusStamped {}
