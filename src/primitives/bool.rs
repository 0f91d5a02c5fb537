//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.
//!
//! Classification results are `bool` constants; `SelectBool` bridges them
//! into the type level so consumers can pick implementation types without a
//! runtime branch.

use crate::dispatch::StaticMethodImpl;

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;

    /// Type-level conditional: If<Then, Else> (general type selector).
    type If<Then, Else>;

    /// Strict conditional: both arms are `Bool`, result is `Bool`.
    type Elif<Then: Bool, Else: Bool>: Bool;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Call a static method based on this boolean value.
    /// If true (Present), calls Then::call().
    /// If false (Absent), calls Else::call().
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>;
}

/// Type-level True.
#[derive(Debug)]
pub struct Present;

/// Type-level False.
#[derive(Debug)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;
    type Elif<Then: Bool, Else: Bool> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Then::call()
    }
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;
    type Elif<Then: Bool, Else: Bool> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;

    #[inline(always)]
    fn static_dispatch<Then, Else, Output>() -> Output
    where
        Then: StaticMethodImpl<Output>,
        Else: StaticMethodImpl<Output>,
    {
        Else::call()
    }
}

/// Type-level NOT.
pub trait BoolNot: Bool {
    type Out: Bool;
}

impl BoolNot for Present {
    type Out = Absent;
}

impl BoolNot for Absent {
    type Out = Present;
}

/// Convert const bool to type-level Bool.
pub trait SelectBool<const B: bool> {
    type Out: Bool;
}

impl SelectBool<true> for () {
    type Out = Present;
}

impl SelectBool<false> for () {
    type Out = Absent;
}

/// Conditional type alias.
pub type If<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::If<T, E>;

/// Strict conditional type alias (result is Bool).
pub type Elif<const C: bool, T, E> = <<() as SelectBool<C>>::Out as Bool>::Elif<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert!(Present::VALUE);
        assert!(!Absent::VALUE);
        assert!(!<<Present as Bool>::And<Absent> as Bool>::VALUE);
        assert!(<<Absent as Bool>::Or<Present> as Bool>::VALUE);
        assert!(!<<Present as BoolNot>::Out as Bool>::VALUE);
    }

    #[test]
    fn test_select() {
        assert!(<<() as SelectBool<true>>::Out as Bool>::VALUE);
        assert!(!<Elif<false, Present, Absent>>::VALUE);
    }

    #[test]
    fn test_if_selects_arbitrary_types() {
        // general selector: the arms need not be Bool
        let picked: If<true, u8, ()> = 7;
        assert_eq!(picked, 7);
        let unpicked: If<false, u8, ()> = ();
        assert_eq!(unpicked, ());

        assert!(<If<true, Present, Absent> as Bool>::VALUE);
        assert!(!<If<false, Present, Absent> as Bool>::VALUE);
    }
}
