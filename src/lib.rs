// #![deny(unused_crate_dependencies)]

mod controller;
mod error;
mod generic;
mod input;
mod terminal;

pub use controller::*;
pub use error::*;
pub use generic::*;
pub use input::*;
pub use terminal::*;
