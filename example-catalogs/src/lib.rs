//! Ready-made survey catalogs used by the examples and as living
//! documentation of catalog construction.

pub mod fitness_intake;
pub mod home_move;

pub use fitness_intake::fitness_intake;
pub use home_move::home_move;
