use anyhow::{anyhow, Result};
use rustdds::{
    no_key::DataWriterCdr, DomainParticipant, DomainParticipantBuilder, Publisher, QosPolicies,
    Timestamp, TopicKind,
};
use serde::Serialize;

/// DDS-side endpoint shared by the suppliers: one domain participant and one
/// publisher for the whole process.
pub struct RapidParticipant {
    participant: DomainParticipant,
    publisher: Publisher,
}

impl RapidParticipant {
    pub fn new(domain_id: u16) -> Result<Self> {
        let participant = DomainParticipantBuilder::new(domain_id)
            .build()
            .map_err(|err| anyhow!("DDS participant creation failed: {err:?}"))?;
        let publisher = participant
            .create_publisher(&QosPolicies::qos_none())
            .map_err(|err| anyhow!("DDS publisher creation failed: {err:?}"))?;
        Ok(Self {
            participant,
            publisher,
        })
    }

    /// Creates the topic and a typed writer for it. On failure nothing stays
    /// allocated; the writer only exists inside the returned supplier.
    pub fn supplier<T>(
        &self,
        topic_name: &str,
        type_name: &str,
        qos: &QosPolicies,
    ) -> Result<TypedSupplier<T>>
    where
        T: Serialize,
    {
        let topic = self
            .participant
            .create_topic(
                topic_name.to_string(),
                type_name.to_string(),
                qos,
                TopicKind::NoKey,
            )
            .map_err(|err| anyhow!("creating topic '{topic_name}' failed: {err:?}"))?;
        let writer = self
            .publisher
            .create_datawriter_no_key_cdr::<T>(&topic, None)
            .map_err(|err| anyhow!("creating writer for '{topic_name}' failed: {err:?}"))?;
        Ok(TypedSupplier { writer })
    }
}

/// Exclusively-owned typed DDS writer. Dropping the supplier releases the
/// writer, after which no further publication is possible.
pub struct TypedSupplier<T>
where
    T: Serialize,
{
    writer: DataWriterCdr<T>,
}

impl<T> TypedSupplier<T>
where
    T: Serialize + Default,
{
    /// Fresh zero-initialized sample.
    pub fn new_sample(&self) -> T {
        T::default()
    }

    /// Publishes `sample`, stamping it with the transmission time. Write
    /// failures propagate; there is no retry at this layer.
    pub fn publish(&self, sample: T) -> Result<()> {
        self.writer
            .write(sample, Some(Timestamp::now()))
            .map_err(|err| anyhow!("DDS write failed: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        qos,
        rapid::{self, PlanStatus},
    };

    #[test]
    fn supplier_publishes_without_readers() {
        let rapid_side = RapidParticipant::new(99).unwrap();
        let supplier = rapid_side
            .supplier::<PlanStatus>(
                "rapid_plan_status_test",
                rapid::PLAN_STATUS_TYPE_NAME,
                &qos::rapid_writer(),
            )
            .unwrap();

        let sample = supplier.new_sample();
        assert_eq!(sample, PlanStatus::default());
        supplier.publish(sample).unwrap();
    }
}
