use anyhow::Result;
use ros2_client::{MessageTypeName, Name, Node};

use crate::{
    forward::Forward,
    msg::PlanStatusStamped,
    qos,
    rapid::{self, PlanStatus},
    supplier::RapidParticipant,
};

/// Bridges the executive's plan-status topic onto the rapid DDS topic.
///
/// Registers the subscription with the given history depth and creates the
/// dedicated writer for `pub_topic`. Fails if either side cannot be set up.
pub fn new(
    node: &mut Node,
    rapid: &RapidParticipant,
    sub_topic: &str,
    pub_topic: &str,
    queue_depth: i32,
) -> Result<Forward<PlanStatusStamped, PlanStatus, impl FnMut(PlanStatusStamped, &mut PlanStatus)>>
{
    let topic = node.create_topic(
        &Name::new("/", sub_topic)?,
        MessageTypeName::new("plan_msgs", "PlanStatusStamped"),
        &qos::ros_subscription(queue_depth),
    )?;
    let sub = node.create_subscription::<PlanStatusStamped>(&topic, None)?;
    let supplier = rapid.supplier::<PlanStatus>(
        pub_topic,
        rapid::PLAN_STATUS_TYPE_NAME,
        &qos::rapid_writer(),
    )?;
    Ok(Forward::new(sub, supplier, fill_sample))
}

/// Direct, lossless copy of the plan-status fields into an outbound sample.
pub fn fill_sample(msg: PlanStatusStamped, sample: &mut PlanStatus) {
    let PlanStatusStamped {
        header,
        name,
        point,
        command,
        status,
    } = msg;
    sample.plan_name = name;
    sample.current_point = point;
    sample.current_command = command;
    sample.current_status = status;
    sample.stamp = rapid::Time {
        sec: header.stamp.sec,
        nanosec: header.stamp.nanosec,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::msg::{ExecState, Header, PlanStatusStamped, Time};

    fn status_msg(status: ExecState, sec: i32, nanosec: u32) -> PlanStatusStamped {
        PlanStatusStamped {
            header: Header {
                stamp: Time { sec, nanosec },
                frame_id: "world".to_string(),
            },
            name: "plan_001".to_string(),
            point: 3,
            command: 1,
            status,
        }
    }

    #[test]
    fn copies_status_and_stamp() {
        let mut sample = PlanStatus::default();
        fill_sample(status_msg(ExecState::Executing, 100, 250), &mut sample);

        assert_eq!(sample.plan_name, "plan_001");
        assert_eq!(sample.current_point, 3);
        assert_eq!(sample.current_command, 1);
        assert_eq!(sample.current_status, ExecState::Executing);
        assert_eq!(sample.stamp, rapid::Time { sec: 100, nanosec: 250 });
    }

    #[test]
    fn later_message_overwrites_all_fields() {
        let mut sample = PlanStatus::default();
        fill_sample(status_msg(ExecState::Executing, 100, 250), &mut sample);
        fill_sample(status_msg(ExecState::Paused, 200, 500), &mut sample);

        assert_eq!(sample.current_status, ExecState::Paused);
        assert_eq!(sample.stamp, rapid::Time { sec: 200, nanosec: 500 });
    }

    #[test]
    fn mapping_is_stateless() {
        let mut first = PlanStatus::default();
        let mut second = PlanStatus::default();
        fill_sample(status_msg(ExecState::Error, 7, 8), &mut first);
        fill_sample(status_msg(ExecState::Error, 7, 8), &mut second);

        assert_eq!(first, second);
    }
}
