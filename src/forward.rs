use anyhow::{Context, Result};
use ros2_client::{Message, Subscription};
use serde::Serialize;

use crate::supplier::TypedSupplier;

/// Generic subscribe-and-forward stage: takes each inbound message, maps it
/// into a fresh sample, and publishes the sample. One publication per
/// received message; nothing is retained between messages.
pub struct Forward<M, T, F>
where
    T: Serialize,
{
    sub: Subscription<M>,
    supplier: TypedSupplier<T>,
    map: F,
}

impl<M, T, F> Forward<M, T, F>
where
    M: Message + 'static,
    T: Serialize + Default,
    F: FnMut(M, &mut T),
{
    pub fn new(sub: Subscription<M>, supplier: TypedSupplier<T>, map: F) -> Self {
        Self { sub, supplier, map }
    }

    /// Runs until the subscription or the writer fails.
    pub async fn run(mut self) -> Result<()> {
        loop {
            let (msg, _info) = self
                .sub
                .async_take()
                .await
                .context("taking from subscription")?;
            let mut sample = self.supplier.new_sample();
            (self.map)(msg, &mut sample);
            self.supplier.publish(sample)?;
        }
    }
}
