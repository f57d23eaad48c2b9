//! Activity Roster
//!
//! A small signup service: a catalog of named activities that participants,
//! identified by email, can join or leave over a REST API.
//!
//! # Modules
//!
//! - `types`: Activity record and roster errors
//! - `roster`: In-memory Roster Store with enroll/withdraw
//! - `api`: Axum router and REST handlers
//! - `config`: Environment-based server configuration
//! - `telemetry`: tracing subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use activity_roster::{create_router, AppState, Roster};
//!
//! #[tokio::main]
//! async fn main() {
//!     let roster = Arc::new(Roster::seeded());
//!     let app = create_router(Arc::new(AppState::new(roster)));
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

pub mod api;
pub mod config;
pub mod roster;
pub mod telemetry;
pub mod types;

// Re-export commonly used items at crate root
pub use api::{create_router, AppState};
pub use config::Config;
pub use roster::Roster;
pub use types::{Activity, RosterError, RosterResult, WithdrawOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
