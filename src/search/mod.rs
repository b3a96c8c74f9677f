//! the exhaustive power-throttling search: configuration enumeration,
//! propagation simulation, and minimization

pub mod color_sets;
pub mod propagation;
pub mod throttling;

pub use color_sets::{enumerate_color_sets, ColorSet, MAX_ORDER};
pub use propagation::propagation_time;
pub use throttling::{power_throttling_number, power_throttling_number_with_sets};
