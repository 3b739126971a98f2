// #![deny(unused_crate_dependencies)]

mod adapters;
mod data_provider;
mod generic;

pub use adapters::*;
pub use data_provider::*;
pub use generic::*;
