//! Color space enumeration and the seeded placement order.
//!
//! - [`NBitColors`] enumerates every color representable at `b` bits per
//!   channel exactly once (a bijection between `[0, 2^(3b))` and the color
//!   space).
//! - [`PlacementOrder`] shuffles that enumeration with a seeded Fisher–Yates
//!   pass; the same seed always yields the same permutation.

pub mod nbit;
pub mod order;

pub use self::nbit::{NBitColors, MAX_BITS, MIN_BITS};
pub use self::order::PlacementOrder;
