//! # Scoutline - Terminal Company Research Client
//!
//! A single-screen terminal client for looking up structured company
//! profiles from a local research agent service.
//!
//! ## Architecture
//!
//! The interactive surface follows an MVVM-lite layout:
//!
//! ```text
//! ┌─────────────┐   renders    ┌──────────────┐   mutates    ┌─────────┐
//! │    Views    │◄─────────────│  ViewModel   │─────────────▶│ Models  │
//! │             │              │              │              │         │
//! │ - Terminal  │              │ - Submission │              │ - Query │
//! │ - Card      │              │   gating     │              │ - State │
//! └─────────────┘              └──────────────┘              └─────────┘
//!                                      ▲
//!                                      │ responses
//!                               ┌──────────────┐
//!                               │  Controller  │──▶ AgentService ──▶ HTTP
//!                               │  event loop  │
//!                               └──────────────┘
//! ```
//!
//! The controller polls keyboard input and the agent service's response
//! channel from a single loop; fetches run on spawned tokio tasks and
//! report back with a sequence number so a stale response can never
//! overwrite a fresher one.

pub mod app;
pub mod cmd_args;
pub mod config;
pub mod profile;

// Re-export main types for easy access
pub use app::*;
