//! # Services
//!
//! Network and decoding concerns, kept out of the models and views.

pub mod agent;
pub mod decode;

pub use agent::{AgentResponse, AgentService, FETCH_FAILED_MESSAGE};
pub use decode::decode_document;
