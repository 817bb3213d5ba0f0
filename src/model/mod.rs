//! Pure data structures shared by the screens and the country source.

pub mod country;

pub use country::*;
