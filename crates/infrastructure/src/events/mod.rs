mod emitter;

pub use emitter::{LoadExternalDestinationsEmitter, Subscription};
