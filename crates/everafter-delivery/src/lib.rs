//! Write-only HTTP delivery for the everafter RSVP pipeline.
//!
//! The submission sink (a spreadsheet web-app endpoint) accepts a JSON
//! `POST` and exposes no readable response contract. This crate models
//! that boundary honestly: [`SinkClient::deliver`] reports only whether
//! the local write succeeded — there is no "server accepted" signal to
//! surface, so none is invented.

pub mod error;
pub mod sink;
pub mod transport;

pub use error::Error;
pub use sink::SinkClient;
pub use transport::TransportConfig;
