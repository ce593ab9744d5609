//! # Application Modules
//!
//! The interactive client, organized MVVM-lite: models hold state,
//! services talk to the network, views render, the view model coordinates
//! and the controller runs the loop over injected I/O streams.

pub mod controller;
pub mod io;
pub mod models;
pub mod oneshot;
pub mod services;
pub mod view_model;
pub mod views;

// Re-export core types
pub use controller::AppController;
pub use models::{CompanyProfile, HttpStatus, QueryModel, RequestState, SessionModel};
pub use services::{AgentResponse, AgentService, FETCH_FAILED_MESSAGE};
pub use view_model::AppViewModel;
pub use views::ProfileScreen;
