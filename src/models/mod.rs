//! Domain models for the atelier stock core

mod alert;
mod contact;
mod material;
mod order;

pub use alert::*;
pub use contact::*;
pub use material::*;
pub use order::*;
