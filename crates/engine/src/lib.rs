//! Rumble Engine library.
//!
//! Server-side composition around the pure combat rules in `rumble-domain`:
//!
//! - `infrastructure/` - port traits and their adapters (storage, clock,
//!   randomness)
//! - `use_cases/` - the operations a transport layer calls into
//! - `app` - application composition
//!
//! Transports and persistence backends live outside this crate; they
//! implement against the ports and the `rumble-shared` wire contracts.

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
