//! Library surface of the posadmin CLI: the JSON record store, CSV export,
//! and logging setup. The binary's argument parsing and command dispatch
//! live in `main.rs`.

pub mod export;
pub mod logging;
pub mod store;
