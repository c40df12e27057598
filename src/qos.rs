use rustdds::{
    policy::{Durability, History, Reliability},
    Duration, QosPolicies, QosPolicyBuilder,
};

/// Inbound subscription QoS. `depth` bounds how many undelivered messages the
/// subscription keeps before the oldest is dropped.
pub fn ros_subscription(depth: i32) -> QosPolicies {
    QosPolicyBuilder::new()
        .history(History::KeepLast { depth })
        .reliability(Reliability::Reliable {
            max_blocking_time: Duration::from_secs(1),
        })
        .durability(Durability::Volatile)
        .build()
}

pub fn rapid_writer() -> QosPolicies {
    QosPolicyBuilder::new()
        .history(History::KeepLast { depth: 1 })
        .reliability(Reliability::Reliable {
            max_blocking_time: Duration::from_secs(1),
        })
        .durability(Durability::Volatile)
        .build()
}
