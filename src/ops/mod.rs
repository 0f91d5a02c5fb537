//! Capability axis: the operations a pointer-like type may expose.
//!
//! These traits are the crate's operation vocabulary. The capability
//! detectors (`has_reset!` and friends) probe conformance to them, and a
//! generic adapter can use the same traits to call the native operation when
//! it exists and synthesize one when it does not.
//!
//! Orthogonal to identity: a plain value holder can implement any subset of
//! these while every shape predicate stays false.

mod canonical;

pub use canonical::BoxDeleter;

/// Drop the current referent and install a freshly constructed one.
///
/// The no-argument form is the contract signature; owners in Rust are never
/// null, so resetting means renewal, not emptying.
pub trait Reset {
    fn reset(&mut self);
}

/// Relinquish ownership of the referent to the caller.
///
/// Consumes the pointer; shared-ownership types deliberately do not
/// implement this.
pub trait Release {
    type Inner;

    fn release(self) -> Self::Inner;
}

/// Access the destruction policy paired with the pointer.
pub trait GetDeleter {
    type Deleter;

    fn get_deleter(&self) -> Self::Deleter;
}

/// Exchange referents with another pointer of the same type.
pub trait Swap {
    fn swap(&mut self, other: &mut Self);
}

// Reference lifting, where the receiver form allows it. `Release` consumes
// self and therefore never lifts.

impl<'a, P: ?Sized + Reset> Reset for &'a mut P {
    fn reset(&mut self) {
        (**self).reset();
    }
}

impl<'a, P: ?Sized + GetDeleter> GetDeleter for &'a P {
    type Deleter = P::Deleter;

    fn get_deleter(&self) -> P::Deleter {
        (**self).get_deleter()
    }
}

impl<'a, P: ?Sized + GetDeleter> GetDeleter for &'a mut P {
    type Deleter = P::Deleter;

    fn get_deleter(&self) -> P::Deleter {
        (**self).get_deleter()
    }
}

impl<'a, P: ?Sized + Swap> Swap for &'a mut P {
    fn swap(&mut self, other: &mut Self) {
        (**self).swap(&mut **other);
    }
}
