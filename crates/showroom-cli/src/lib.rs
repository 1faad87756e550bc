//! Showroom - interactive vehicle inventory console
//!
//! Menu-driven session: add fossil-fuel, electric, or hybrid vehicles,
//! then exit to get the listing, the maximum-range report, and one
//! speed-optimization round.

pub mod cli;
pub mod output;
pub mod prompt;
pub mod session;
