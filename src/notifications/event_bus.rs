//! Broadcast of booking events
//!
//! Publishing never blocks, so the state machine stays synchronous; slow
//! listeners skip what they missed.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError, error::TryRecvError};
use tracing::{debug, warn};

use super::events::{BookingEvent, EventMessage};

/// Events buffered per listener before it starts lagging
const DEFAULT_CAPACITY: usize = 256;

/// Shared handle held by the state machine and the listeners' owner
pub type SharedEventBus = Arc<EventBus>;

#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<EventMessage>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// A new bus behind an `Arc`
    pub fn shared() -> SharedEventBus {
        Arc::new(Self::new())
    }

    /// Stamp and send an event. Returns how many listeners it reached.
    pub fn publish(&self, event: BookingEvent) -> usize {
        let event_type = event.event_type();
        let spot_id = event.spot_id();
        let reached = self.sender.send(EventMessage::new(event)).unwrap_or(0);
        debug!(event_type, ?spot_id, listeners = reached, "Booking event published");
        reached
    }

    pub fn subscribe(&self) -> EventSubscriber {
        EventSubscriber {
            receiver: self.sender.subscribe(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving end of the bus
pub struct EventSubscriber {
    receiver: broadcast::Receiver<EventMessage>,
}

impl EventSubscriber {
    /// Wait for the next event; `None` once every bus handle is dropped
    pub async fn recv(&mut self) -> Option<EventMessage> {
        loop {
            match self.receiver.recv().await {
                Ok(message) => return Some(message),
                Err(RecvError::Lagged(missed)) => warn!(missed, "Event listener fell behind"),
                Err(RecvError::Closed) => return None,
            }
        }
    }

    /// Next queued event, without waiting
    pub fn try_recv(&mut self) -> Option<EventMessage> {
        loop {
            match self.receiver.try_recv() {
                Ok(message) => return Some(message),
                Err(TryRecvError::Lagged(missed)) => warn!(missed, "Event listener fell behind"),
                Err(TryRecvError::Empty | TryRecvError::Closed) => return None,
            }
        }
    }
}
