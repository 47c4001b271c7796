//! Outcome type - the result of a fallible computation.
//!
//! This module provides the `Outcome<A>` type, which represents a
//! computation that either `Succeeded(A)` or `Failed(Cause)`, and the
//! [`of_try`](Outcome::of_try) boundary that converts a panic into a
//! `Failed` value exactly once.
//!
//! Failure causes are captured diagnostics, never re-raised faults:
//! once a chain enters the failed state, [`map`](Outcome::map) and
//! [`flat_map`](Outcome::flat_map) propagate the original cause
//! unchanged and no subsequent step executes.
//!
//! # Examples
//!
//! ```rust
//! use optica::effect::Outcome;
//!
//! fn divide(numerator: i32, denominator: i32) -> i32 {
//!     numerator / denominator
//! }
//!
//! let succeeded = Outcome::of_try(|| divide(10, 2));
//! assert_eq!(succeeded, Outcome::Succeeded(5));
//!
//! let failed = Outcome::of_try(|| divide(10, 0));
//! assert!(failed.is_failed());
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};

/// The captured diagnostic of a failed computation.
///
/// A `Cause` records the message of the fault that produced it. It is an
/// ordinary immutable value: comparable, clonable, and printable, but
/// never re-raised.
///
/// # Examples
///
/// ```rust
/// use optica::effect::Cause;
///
/// let cause = Cause::new("connection refused");
/// assert_eq!(cause.message(), "connection refused");
/// assert_eq!(cause.to_string(), "connection refused");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Cause {
    message: String,
}

impl Cause {
    /// Creates a new `Cause` with the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the captured diagnostic message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Extracts a message from a caught panic payload.
    ///
    /// Panic payloads are `&str` or `String` in practice; anything else
    /// is reported as an unknown panic.
    fn from_panic(payload: &(dyn Any + Send)) -> Self {
        let message = payload.downcast_ref::<&str>().map_or_else(
            || {
                payload
                    .downcast_ref::<String>()
                    .cloned()
                    .unwrap_or_else(|| "unknown panic".to_string())
            },
            |string| (*string).to_string(),
        );
        Self { message }
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message)
    }
}

/// The result of a fallible computation.
///
/// `Outcome<A>` is either `Succeeded(A)` or `Failed(Cause)`. It is the
/// result channel for multi-step pipelines: each step returns an
/// `Outcome`, the chain short-circuits at the first failure, and the
/// original cause survives to the end of the chain untouched.
///
/// Extraction goes through [`fold`](Outcome::fold), which forces both
/// branches to be handled.
///
/// # Type Parameters
///
/// * `A` - The type of the value when the computation succeeded
///
/// # Examples
///
/// ```rust
/// use optica::effect::{Cause, Outcome};
///
/// let pipeline = Outcome::Succeeded(2)
///     .map(|value| value * 10)
///     .flat_map(|value| {
///         if value > 0 { Outcome::Succeeded(value) } else { Outcome::Failed(Cause::new("not positive")) }
///     });
/// assert_eq!(pipeline, Outcome::Succeeded(20));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Outcome<A> {
    /// The computation produced a value.
    Succeeded(A),
    /// The computation failed with a captured cause.
    Failed(Cause),
}

impl<A> Outcome<A> {
    // =========================================================================
    // The Try Boundary
    // =========================================================================

    /// Runs a computation once, converting a panic into a `Failed` value.
    ///
    /// This is the sole conversion boundary between code that may panic
    /// and the effect type. The computation is executed synchronously to
    /// completion; a panic is caught exactly once, its message captured
    /// into a [`Cause`], and never re-raised. There is no retry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::effect::Outcome;
    ///
    /// let succeeded = Outcome::of_try(|| 21 * 2);
    /// assert_eq!(succeeded, Outcome::Succeeded(42));
    ///
    /// let failed: Outcome<i32> = Outcome::of_try(|| panic!("boom"));
    /// assert_eq!(failed.fold(|_| String::new(), |cause| cause.message().to_string()), "boom");
    /// ```
    #[inline]
    pub fn of_try<F>(computation: F) -> Self
    where
        F: FnOnce() -> A,
    {
        match catch_unwind(AssertUnwindSafe(computation)) {
            Ok(value) => Self::Succeeded(value),
            Err(payload) => Self::Failed(Cause::from_panic(payload.as_ref())),
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if the computation succeeded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::effect::{Cause, Outcome};
    ///
    /// assert!(Outcome::Succeeded(42).is_succeeded());
    /// assert!(!Outcome::<i32>::Failed(Cause::new("nope")).is_succeeded());
    /// ```
    #[inline]
    pub const fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` if the computation failed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::effect::{Cause, Outcome};
    ///
    /// assert!(Outcome::<i32>::Failed(Cause::new("nope")).is_failed());
    /// assert!(!Outcome::Succeeded(42).is_failed());
    /// ```
    #[inline]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    // =========================================================================
    // Functor Mapping
    // =========================================================================

    /// Applies a function to the value if the computation succeeded.
    ///
    /// A `Failed` outcome passes through untouched: `map` never observes
    /// the failed branch and never alters the cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::effect::{Cause, Outcome};
    ///
    /// assert_eq!(Outcome::Succeeded(2).map(|value| value + 1), Outcome::Succeeded(3));
    ///
    /// let failed: Outcome<i32> = Outcome::Failed(Cause::new("nope"));
    /// assert_eq!(failed.map(|value| value + 1), Outcome::Failed(Cause::new("nope")));
    /// ```
    #[inline]
    pub fn map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(function(value)),
            Self::Failed(cause) => Outcome::Failed(cause),
        }
    }

    // =========================================================================
    // Monadic Chaining
    // =========================================================================

    /// Chains a computation that may itself fail.
    ///
    /// Short-circuits on the first `Failed`: the original cause
    /// propagates unchanged and no subsequent step executes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::effect::{Cause, Outcome};
    ///
    /// fn checked_half(value: i32) -> Outcome<i32> {
    ///     if value % 2 == 0 { Outcome::Succeeded(value / 2) } else { Outcome::Failed(Cause::new("odd")) }
    /// }
    ///
    /// assert_eq!(Outcome::Succeeded(8).flat_map(checked_half), Outcome::Succeeded(4));
    /// assert_eq!(Outcome::Succeeded(3).flat_map(checked_half), Outcome::Failed(Cause::new("odd")));
    ///
    /// let failed: Outcome<i32> = Outcome::Failed(Cause::new("earlier"));
    /// assert_eq!(failed.flat_map(checked_half), Outcome::Failed(Cause::new("earlier")));
    /// ```
    #[inline]
    pub fn flat_map<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        match self {
            Self::Succeeded(value) => function(value),
            Self::Failed(cause) => Outcome::Failed(cause),
        }
    }

    /// Alias for [`flat_map`](Outcome::flat_map).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::effect::Outcome;
    ///
    /// let outcome = Outcome::Succeeded(2).and_then(|value| Outcome::Succeeded(value * 3));
    /// assert_eq!(outcome, Outcome::Succeeded(6));
    /// ```
    #[inline]
    pub fn and_then<B, F>(self, function: F) -> Outcome<B>
    where
        F: FnOnce(A) -> Outcome<B>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the `Outcome` by applying one of two functions.
    ///
    /// This is case analysis as a function, and the only sanctioned way
    /// to extract the payload: both branches must be provided, so a
    /// failure cannot be silently discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::effect::{Cause, Outcome};
    ///
    /// let succeeded = Outcome::Succeeded(42);
    /// assert_eq!(succeeded.fold(|value| value.to_string(), |cause| cause.to_string()), "42");
    ///
    /// let failed: Outcome<i32> = Outcome::Failed(Cause::new("nope"));
    /// assert_eq!(failed.fold(|value| value.to_string(), |cause| cause.to_string()), "nope");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, on_succeeded: F, on_failed: G) -> T
    where
        F: FnOnce(A) -> T,
        G: FnOnce(Cause) -> T,
    {
        match self {
            Self::Succeeded(value) => on_succeeded(value),
            Self::Failed(cause) => on_failed(cause),
        }
    }
}

// =============================================================================
// Kleisli Composition
// =============================================================================

/// Composes two fallible functions into one, left to right.
///
/// The resulting function runs `first`; on success it feeds the value to
/// `second`, and on failure it short-circuits with the original cause.
/// This is the composition the excluded I/O collaborators use to build
/// connect-bind-execute style pipelines.
///
/// # Examples
///
/// ```rust
/// use optica::effect::{Cause, Outcome, kleisli};
///
/// fn parse(input: &str) -> Outcome<i32> {
///     input.parse().map_or_else(
///         |_| Outcome::Failed(Cause::new("not a number")),
///         Outcome::Succeeded,
///     )
/// }
///
/// fn reciprocal(value: i32) -> Outcome<f64> {
///     if value == 0 {
///         Outcome::Failed(Cause::new("zero"))
///     } else {
///         Outcome::Succeeded(1.0 / f64::from(value))
///     }
/// }
///
/// let parse_reciprocal = kleisli(parse, reciprocal);
/// assert_eq!(parse_reciprocal("4"), Outcome::Succeeded(0.25));
/// assert!(parse_reciprocal("oops").is_failed());
/// assert!(parse_reciprocal("0").is_failed());
/// ```
#[inline]
pub fn kleisli<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> Outcome<C>
where
    F: Fn(A) -> Outcome<B>,
    G: Fn(B) -> Outcome<C>,
{
    move |input| first(input).flat_map(|value| second(value))
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: fmt::Debug> fmt::Debug for Outcome<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded(value) => formatter.debug_tuple("Succeeded").field(value).finish(),
            Self::Failed(cause) => formatter.debug_tuple("Failed").field(cause).finish(),
        }
    }
}

// Safe to share across threads whenever the payload is.
static_assertions::assert_impl_all!(Cause: Send, Sync);
static_assertions::assert_impl_all!(Outcome<i32>: Send, Sync);
static_assertions::assert_impl_all!(Outcome<String>: Send, Sync);
