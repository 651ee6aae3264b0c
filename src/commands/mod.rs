//! Command handlers.
//!
//! Each handler is an async fn taking its parsed options and returning
//! `anyhow::Result`; classification and recovery of API errors happens
//! below this layer, in the seeder.

pub mod down;
pub mod generate;
pub mod seed;
pub mod status;
pub mod up;

pub use down::run_down;
pub use generate::run_generate;
pub use seed::run_seed;
pub use status::run_status;
pub use up::run_up;
