#![deny(warnings)]
#![deny(dead_code)]
#![deny(unused_variables)]
#![deny(unused_imports)]

pub mod classify;
pub mod config;
pub mod error;
pub mod geo;
pub mod loader;
pub mod store;
pub mod traits;
pub mod types;
