mod forward;
mod msg;
mod params;
mod plan_status;
mod qos;
mod rapid;
mod supplier;

use anyhow::Result;
use futures::try_join;
use ros2_client::{Context, NodeName, NodeOptions};

use crate::{params::Params, supplier::RapidParticipant};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let params = Params::load()?;

    let context = Context::new()?;
    let mut node = context.new_node(
        NodeName::new("/bridge", "plan_status_bridge")?,
        NodeOptions::new().enable_rosout(true),
    )?;

    let rapid = RapidParticipant::new(params.domain_id)?;
    let adapter = plan_status::new(
        &mut node,
        &rapid,
        &params.sub_topic,
        &params.pub_topic,
        params.queue_depth,
    )?;

    let spinner = node.spinner()?;
    let spin_task = async move { spinner.spin().await.map_err(anyhow::Error::from) };
    let forward_task = adapter.run();

    try_join!(spin_task, forward_task)?;

    Ok(())
}
