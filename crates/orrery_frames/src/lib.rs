//! Reference-frame corrections: nutation of the ecliptic.

pub mod nutation;

pub use nutation::{fundamental_arguments, nutation, Nutation};
