//! Consent Manager Infrastructure Layer
pub mod analytics;
pub mod catalog;
pub mod events;
pub mod navigation;
