//! # optica
//!
//! Composable accessors for immutable data, together with the effect
//! values they report through.
//!
//! ## Overview
//!
//! This library provides a small functional-programming core:
//!
//! - **Effect values**: [`Optional`](effect::Optional) for expected
//!   presence/absence, [`Outcome`](effect::Outcome) for fallible
//!   computations with a captured failure cause
//! - **Optics**: polymorphic and monomorphic lenses (total accessors)
//!   and prisms (partial accessors), composable into accessor chains
//! - **Function Composition**: plain combinators (`identity`, `constant`,
//!   `flip`, `compose`, `pipe`) over ordinary closures
//!
//! Every operation is a pure function over immutable values: accessors
//! consume a whole and return a fresh whole, and failure is a value, not
//! an exception.
//!
//! ## Feature Flags
//!
//! - `effect`: effect value types (`Optional`, `Outcome`)
//! - `optics`: lens and prism accessors (implies `effect`)
//! - `compose`: function composition combinators
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::lens;
//! use optica::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//! let point = Point { x: 1, y: 2 };
//! let moved = x_lens.over(point, |x| x * 10);
//! assert_eq!(moved, Point { x: 10, y: 2 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        // Basic smoke test to ensure the library compiles
        assert!(true);
    }
}
