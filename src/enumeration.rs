//! Membership lists for fieldless enums.
//!
//! Rust offers no runtime reflection over enum variants, so a type opts in to random selection by
//! listing its members through [`Enumeration`]. The [`enumeration!`](crate::enumeration) macro
//! writes that list for a fieldless enum:
//!
//! ```
//! use randomizer::{enumeration, Randomizer};
//!
//! #[derive(Clone, Copy, Debug, PartialEq)]
//! enum Suit {
//!     Clubs,
//!     Diamonds,
//!     Hearts,
//!     Spades,
//! }
//!
//! enumeration!(Suit { Clubs, Diamonds, Hearts, Spades });
//!
//! let mut r = Randomizer::new();
//! let suit = r.enumeration::<Suit>().unwrap();
//! assert!(<Suit as randomizer::Enumeration>::MEMBERS.contains(&suit));
//! ```

/// A type whose values form a fixed, declared list of members.
pub trait Enumeration: Copy + 'static {
    /// Every member of the type, in declaration order.
    const MEMBERS: &'static [Self];
}

/// Implement [`Enumeration`] for a fieldless enum by listing its variants.
#[macro_export]
macro_rules! enumeration {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl $crate::Enumeration for $ty {
            const MEMBERS: &'static [Self] = &[$($ty::$variant),*];
        }
    };
}
