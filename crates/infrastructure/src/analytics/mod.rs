mod recording_client;
mod slot;

pub use recording_client::{LoadCall, RecordingAnalyticsClient};
pub use slot::AnalyticsSlot;
