//! Capability detection: structural, orthogonal to identity, and total
//! (absence resolves to false, never to a compile error).

use std::rc::Rc;
use std::sync::Arc;

use ptr_caps::ops::Release;
use ptr_caps::{
    has_deleter, has_release, has_reset, has_swap, is_pointable, is_smart_ptr, is_smart_ptr_soft,
};
use static_assertions::const_assert;

// =============================================================================
// Canonical profiles
// =============================================================================

// Exclusive ownership supports all four operations.
const_assert!(has_reset!(Box<i32>));
const_assert!(has_release!(Box<i32>));
const_assert!(has_deleter!(Box<i32>));
const_assert!(has_swap!(Box<i32>));

// Shared ownership never relinquishes to the caller and never exposes a
// deleter accessor.
const_assert!(has_reset!(Rc<i32>));
const_assert!(!has_release!(Rc<i32>));
const_assert!(!has_deleter!(Rc<i32>));
const_assert!(has_swap!(Rc<i32>));

const_assert!(has_reset!(Arc<String>));
const_assert!(!has_release!(Arc<String>));
const_assert!(!has_deleter!(Arc<String>));
const_assert!(has_swap!(Arc<String>));

// The no-argument reset renews the referent via Default; a referent
// without Default has no native reset, while the other capabilities are
// unaffected.
struct NoDefault;

const_assert!(!has_reset!(Box<NoDefault>));
const_assert!(!has_reset!(Rc<NoDefault>));
const_assert!(has_release!(Box<NoDefault>));
const_assert!(has_deleter!(Box<NoDefault>));
const_assert!(has_swap!(Box<NoDefault>));

// =============================================================================
// Partially-overlapping method sets
// =============================================================================

// Exposes only release(): a one-shot token. The other three capability
// predicates and every identity predicate must stay false.
struct Token(u32);

impl Release for Token {
    type Inner = u32;

    fn release(self) -> u32 {
        self.0
    }
}

const_assert!(has_release!(Token));
const_assert!(!has_reset!(Token));
const_assert!(!has_swap!(Token));
const_assert!(!has_deleter!(Token));
const_assert!(!is_smart_ptr!(Token));
const_assert!(!is_smart_ptr_soft!(Token));
const_assert!(!is_pointable!(Token));

// A type with no capabilities at all.
struct Inert;

const_assert!(!has_reset!(Inert));
const_assert!(!has_release!(Inert));
const_assert!(!has_deleter!(Inert));
const_assert!(!has_swap!(Inert));

#[test]
fn test_release_only_token_behaves() {
    let token = Token(17);
    assert_eq!(token.release(), 17);
}

#[test]
fn test_box_operations_behave() {
    use ptr_caps::ops::{GetDeleter, Reset, Swap};

    let mut a = Box::new(1);
    let mut b = Box::new(2);
    a.swap(&mut b);
    assert_eq!((*a, *b), (2, 1));

    a.reset();
    assert_eq!(*a, 0);

    let deleter = b.get_deleter();
    deleter.delete(b);

    assert_eq!(a.release(), 0);
}

#[test]
fn test_shared_reset_renews_referent() {
    use ptr_caps::ops::Reset;

    let mut shared = Rc::new(String::from("old"));
    let witness = Rc::clone(&shared);
    shared.reset();
    assert_eq!(*shared, "");
    // the other owner keeps the previous referent alive
    assert_eq!(*witness, "old");
}
