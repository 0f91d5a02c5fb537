//! Layer 0: type-level primitives.
//!
//! Only the boolean lattice lives here; everything above composes it.

pub mod bool;

pub use bool::{Absent, Bool, BoolNot, Elif, If, Present, SelectBool};
