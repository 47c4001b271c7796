//! Composable accessors for immutable data.
//!
//! This module provides optics: data accessors that focus on a part of
//! a larger structure and support type-safe reading and immutable
//! updating of deeply nested values. Accessors are plain values; leaf
//! accessors for individual fields and variants compose into accessor
//! chains, and a chain is itself an accessor.
//!
//! # Accessor Families
//!
//! - [`PolyLens`] / [`Lens`]: total accessors for a part that always
//!   exists (struct fields); `get` never fails
//! - [`PolyPrism`] / [`Prism`]: partial accessors for a part that may
//!   not exist (enum variants); `try_get` reports mismatch through
//!   [`Optional`](crate::effect::Optional)
//! - [`ElementLens`] / [`Lens::at`]: the indexed specialization
//!   focusing one element of a sequence-valued focus by position
//!
//! Each family comes in a polymorphic four-parameter form (the whole
//! and part types may change across a replacement) and a monomorphic
//! two-parameter form, narrowed from the polymorphic one with an
//! explicit constructor.
//!
//! # Example with Lens
//!
//! ```
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(*person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use optica::effect::Optional;
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.try_get(&Shape::Circle(3.0)), Optional::Present(&3.0));
//! assert_eq!(circle.try_get(&Shape::Square(3.0)), Optional::Absent);
//! assert_eq!(circle.over(Shape::Circle(3.0), |r| r * 2.0), Optional::Present(Shape::Circle(6.0)));
//! ```
//!
//! # Failure Semantics
//!
//! Lens operations never fail. Prism operations encode mismatch as
//! `Absent`: an expected, recoverable answer, not an error. Misuse
//! (composing accessors whose types don't line up, indexing out of
//! range) is a contract violation surfacing as a compile error or a
//! panic at the point of access; it is never represented as an effect
//! value.

mod lens;
mod prism;

// Re-export the lens family
pub use lens::ComposedLens;
pub use lens::ElementLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::PolyLens;

// Re-export the prism family
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::PolyPrism;
pub use prism::Prism;
