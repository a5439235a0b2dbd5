//! Exposed channels which can be used to deliver events to the triplex processor

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::processor::TriplexEvent;
use crate::{EVENT_CHANNEL_SIZE, RawMutex};

/// Channel for key position and layer events
pub static TRIPLEX_EVENT_CHANNEL: Channel<RawMutex, TriplexEvent, EVENT_CHANNEL_SIZE> = Channel::new();

/// Send `event` to [`TRIPLEX_EVENT_CHANNEL`] without waiting, the event is dropped if the channel is full.
pub fn publish_event(event: TriplexEvent) {
    if TRIPLEX_EVENT_CHANNEL.try_send(event).is_err() {
        error!("Send event to TRIPLEX_EVENT_CHANNEL error, channel is full");
    }
}
