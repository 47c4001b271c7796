//! Prism accessors for parts that may or may not exist within a whole.
//!
//! A prism pairs a partial read with a total construction: `try_get`
//! matches one case of a sum type and reports mismatch through
//! [`Optional`], while `inject` builds the whole from the part and
//! always succeeds by construction of the target variant. Prisms
//! compose, and a composed prism short-circuits to `Absent` as soon as
//! an outer match fails.
//!
//! The polymorphic form [`PolyPrism<S, T, A, B>`] allows injection to
//! change the part type; the common monomorphic form
//! [`Prism<S, A>`](Prism) narrows it to `S = T`, `A = B`.
//!
//! # Law
//!
//! Every prism must satisfy the inject-match round trip:
//!
//! ```text
//! prism.try_get_owned(prism.inject(value)) == Present(value)
//! ```
//!
//! Composition of law-abiding prisms is law-abiding, and composition is
//! associative for every operation.
//!
//! # Examples
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
//!
//! let doubled = circle.over(Shape::Circle(3.0), |radius| radius * 2.0);
//! assert_eq!(doubled, Optional::Present(Shape::Circle(6.0)));
//! ```

use std::marker::PhantomData;

use crate::effect::Optional;

/// A polymorphic prism: a partial accessor whose injection may change
/// the focused type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole before injection)
/// - `T`: The target type (the whole after injection)
/// - `A`: The focused part before injection
/// - `B`: The focused part after injection
///
/// "`S` may be a case carrying an `A`; building from a `B` produces a
/// `T`." Reading is partial and signals mismatch through
/// [`Optional`]; injection is total. The monomorphic [`Prism`] wraps
/// the `S = T`, `A = B` case.
///
/// # Law
///
/// Constructors do not verify the inject-match round trip (see the
/// module documentation); supplying a lawful pair is the caller's
/// obligation.
pub trait PolyPrism<S, T, A, B> {
    /// Attempts to match the focused case, borrowing the part.
    ///
    /// Total as a function: it always returns an `Optional`, with
    /// `Absent` reporting an expected, recoverable mismatch.
    fn try_get<'a>(&self, source: &'a S) -> Optional<&'a A>;

    /// Attempts to match the focused case, taking ownership.
    fn try_get_owned(&self, source: S) -> Optional<A>;

    /// Builds the whole from a part.
    ///
    /// Always succeeds: the target case is constructed directly.
    fn inject(&self, value: B) -> T;

    /// Transforms the focused part if the case matches.
    ///
    /// Returns `Present` with the rebuilt whole on a match and `Absent`
    /// on a mismatch; unlike a lens, the result type itself signals
    /// that no transformation took place.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::effect::Optional;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle);
    ///
    /// assert_eq!(
    ///     circle.over(Shape::Circle(3.0), |radius| radius * 2.0),
    ///     Optional::Present(Shape::Circle(6.0)),
    /// );
    /// assert_eq!(
    ///     circle.over(Shape::Square(3.0), |radius| radius * 2.0),
    ///     Optional::Absent,
    /// );
    /// ```
    fn over<F>(&self, source: S, function: F) -> Optional<T>
    where
        F: FnOnce(A) -> B,
    {
        self.try_get_owned(source)
            .map(|value| self.inject(function(value)))
    }

    /// Composes this prism with an inner prism focused within its part.
    ///
    /// The composed match flat-maps the outer read into the inner one,
    /// short-circuiting to `Absent` if the outer case fails; the
    /// composed injection builds inside out.
    fn compose<C, D, P>(self, inner: P) -> ComposedPrism<Self, P, A, B>
    where
        Self: Sized,
        P: PolyPrism<A, B, C, D>,
    {
        ComposedPrism::new(self, inner)
    }

    /// Alias for [`compose`](PolyPrism::compose).
    fn then<C, D, P>(self, inner: P) -> ComposedPrism<Self, P, A, B>
    where
        Self: Sized,
        P: PolyPrism<A, B, C, D>,
    {
        self.compose(inner)
    }
}

/// A polymorphic prism implemented by a match/inject function triple.
///
/// This is the `of` constructor of the prism family: pair the two
/// partial reads (borrowing and owning) with a total injection. The
/// [`prism!`](crate::prism) macro generates the monomorphic wrapper
/// around a `FunctionPrism` for a single-payload enum variant.
///
/// # Type Parameters
///
/// - `S`, `T`, `A`, `B`: As on [`PolyPrism`]
/// - `Tg`: The borrowing match function type
/// - `In`: The injection function type
/// - `TgO`: The owning match function type
///
/// # Example
///
/// ```
/// use optica::effect::Optional;
/// use optica::optics::{FunctionPrism, PolyPrism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape { Circle(f64), Square(f64) }
///
/// let circle = FunctionPrism::new(
///     |shape: &Shape| match shape {
///         Shape::Circle(radius) => Optional::Present(radius),
///         Shape::Square(_) => Optional::Absent,
///     },
///     Shape::Circle,
///     |shape: Shape| match shape {
///         Shape::Circle(radius) => Optional::Present(radius),
///         Shape::Square(_) => Optional::Absent,
///     },
/// );
///
/// assert_eq!(circle.try_get(&Shape::Circle(5.0)), Optional::Present(&5.0));
/// assert_eq!(circle.inject(10.0), Shape::Circle(10.0));
/// ```
pub struct FunctionPrism<S, T, A, B, Tg, In, TgO>
where
    Tg: Fn(&S) -> Optional<&A>,
    In: Fn(B) -> T,
    TgO: Fn(S) -> Optional<A>,
{
    try_get_function: Tg,
    inject_function: In,
    try_get_owned_function: TgO,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, Tg, In, TgO> FunctionPrism<S, T, A, B, Tg, In, TgO>
where
    Tg: Fn(&S) -> Optional<&A>,
    In: Fn(B) -> T,
    TgO: Fn(S) -> Optional<A>,
{
    /// Creates a new `FunctionPrism` from the match/inject triple.
    ///
    /// The triple must satisfy the inject-match round trip; the
    /// constructor does not verify it.
    #[must_use]
    pub const fn new(try_get_function: Tg, inject_function: In, try_get_owned_function: TgO) -> Self {
        Self {
            try_get_function,
            inject_function,
            try_get_owned_function,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, Tg, In, TgO> PolyPrism<S, T, A, B> for FunctionPrism<S, T, A, B, Tg, In, TgO>
where
    Tg: Fn(&S) -> Optional<&A>,
    In: Fn(B) -> T,
    TgO: Fn(S) -> Optional<A>,
{
    fn try_get<'a>(&self, source: &'a S) -> Optional<&'a A> {
        (self.try_get_function)(source)
    }

    fn try_get_owned(&self, source: S) -> Optional<A> {
        (self.try_get_owned_function)(source)
    }

    fn inject(&self, value: B) -> T {
        (self.inject_function)(value)
    }
}

impl<S, T, A, B, Tg, In, TgO> Clone for FunctionPrism<S, T, A, B, Tg, In, TgO>
where
    Tg: Fn(&S) -> Optional<&A> + Clone,
    In: Fn(B) -> T + Clone,
    TgO: Fn(S) -> Optional<A> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            try_get_function: self.try_get_function.clone(),
            inject_function: self.inject_function.clone(),
            try_get_owned_function: self.try_get_owned_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, Tg, In, TgO> std::fmt::Debug for FunctionPrism<S, T, A, B, Tg, In, TgO>
where
    Tg: Fn(&S) -> Optional<&A>,
    In: Fn(B) -> T,
    TgO: Fn(S) -> Optional<A>,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of an outer and an inner prism.
///
/// The composed match reads through the outer prism and, on success,
/// through the inner one; a mismatch anywhere short-circuits to
/// `Absent`. The composed injection builds the intermediate case first
/// and wraps it in the outer case. Composition owns its two components
/// (shared, never mutated) and is cheap to construct and discard.
///
/// # Type Parameters
///
/// - `P1`: The outer prism type
/// - `P2`: The inner prism type
/// - `A`, `B`: The intermediate part before/after injection
///
/// # Example
///
/// ```
/// use optica::effect::Optional;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Inner { Value(i32), Nothing }
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Outer { Wrapped(Inner), Empty }
///
/// let wrapped_value = prism!(Outer, Wrapped).compose(prism!(Inner, Value));
///
/// let data = Outer::Wrapped(Inner::Value(42));
/// assert_eq!(wrapped_value.try_get(&data), Optional::Present(&42));
/// assert_eq!(wrapped_value.inject(7), Outer::Wrapped(Inner::Value(7)));
/// ```
pub struct ComposedPrism<P1, P2, A, B> {
    outer: P1,
    inner: P2,
    _marker: PhantomData<(A, B)>,
}

impl<P1, P2, A, B> ComposedPrism<P1, P2, A, B> {
    /// Creates a new composed prism from an outer and an inner prism.
    #[must_use]
    pub const fn new(outer: P1, inner: P2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, C, D, P1, P2> PolyPrism<S, T, C, D> for ComposedPrism<P1, P2, A, B>
where
    P1: PolyPrism<S, T, A, B>,
    P2: PolyPrism<A, B, C, D>,
    A: 'static,
{
    fn try_get<'a>(&self, source: &'a S) -> Optional<&'a C> {
        self.outer
            .try_get(source)
            .flat_map(|intermediate| self.inner.try_get(intermediate))
    }

    fn try_get_owned(&self, source: S) -> Optional<C> {
        self.outer
            .try_get_owned(source)
            .flat_map(|intermediate| self.inner.try_get_owned(intermediate))
    }

    fn inject(&self, value: D) -> T {
        self.outer.inject(self.inner.inject(value))
    }
}

impl<P1: Clone, P2: Clone, A, B> Clone for ComposedPrism<P1, P2, A, B> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A, B> std::fmt::Debug for ComposedPrism<P1, P2, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// A monomorphic prism: the common case where injection keeps types.
///
/// `Prism<S, A>` is backed by a [`PolyPrism<S, S, A, A>`]; the explicit
/// narrowing constructor is [`Prism::of`], and [`Prism::into_poly`]
/// hands the backing polymorphic prism back. It exists purely as an
/// ergonomic specialization with simplified signatures.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused part type
/// - `P`: The backing polymorphic prism type
///
/// # Example
///
/// ```
/// use optica::effect::Optional;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape { Circle(f64), Square(f64) }
///
/// let circle = prism!(Shape, Circle);
///
/// assert_eq!(circle.try_get_owned(Shape::Circle(5.0)), Optional::Present(5.0));
/// assert_eq!(circle.inject(10.0), Shape::Circle(10.0));
/// ```
pub struct Prism<S, A, P> {
    poly: P,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, P> Prism<S, A, P>
where
    P: PolyPrism<S, S, A, A>,
{
    /// Narrows a polymorphic prism with identical before/after types.
    ///
    /// This is the only way a polymorphic prism becomes a monomorphic
    /// one; there is no implicit conversion.
    #[must_use]
    pub const fn of(poly: P) -> Self {
        Self {
            poly,
            _marker: PhantomData,
        }
    }

    /// Returns the backing polymorphic prism.
    #[must_use]
    pub fn into_poly(self) -> P {
        self.poly
    }

    /// Attempts to match the focused case, borrowing the part.
    pub fn try_get<'a>(&self, source: &'a S) -> Optional<&'a A> {
        self.poly.try_get(source)
    }

    /// Attempts to match the focused case, taking ownership.
    pub fn try_get_owned(&self, source: S) -> Optional<A> {
        self.poly.try_get_owned(source)
    }

    /// Builds the whole from a part.
    pub fn inject(&self, value: A) -> S {
        self.poly.inject(value)
    }

    /// Transforms the focused part if the case matches.
    pub fn over<F>(&self, source: S, function: F) -> Optional<S>
    where
        F: FnOnce(A) -> A,
    {
        self.poly.over(source, function)
    }

    /// Transforms the focused part if the case matches, or returns the
    /// source unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// let circle = prism!(Shape, Circle);
    ///
    /// let doubled = circle.over_or_identity(Shape::Circle(3.0), |radius| radius * 2.0);
    /// assert_eq!(doubled, Shape::Circle(6.0));
    ///
    /// let unchanged = circle.over_or_identity(Shape::Square(3.0), |radius| radius * 2.0);
    /// assert_eq!(unchanged, Shape::Square(3.0));
    /// ```
    pub fn over_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        S: Clone,
    {
        self.poly
            .over(source.clone(), function)
            .fold(|updated| updated, || source)
    }

    /// Composes this prism with an inner prism focused within its part.
    pub fn compose<B, Q>(self, inner: Prism<A, B, Q>) -> Prism<S, B, ComposedPrism<P, Q, A, A>>
    where
        Q: PolyPrism<A, A, B, B>,
        A: 'static,
    {
        Prism::of(ComposedPrism::new(self.poly, inner.poly))
    }

    /// Alias for [`compose`](Prism::compose).
    pub fn then<B, Q>(self, inner: Prism<A, B, Q>) -> Prism<S, B, ComposedPrism<P, Q, A, A>>
    where
        Q: PolyPrism<A, A, B, B>,
        A: 'static,
    {
        self.compose(inner)
    }
}

impl<S, A, Tg, In, TgO> Prism<S, A, FunctionPrism<S, S, A, A, Tg, In, TgO>>
where
    Tg: Fn(&S) -> Optional<&A>,
    In: Fn(A) -> S,
    TgO: Fn(S) -> Optional<A>,
{
    /// Creates a monomorphic prism directly from the match/inject
    /// triple.
    ///
    /// Shorthand for narrowing a fresh [`FunctionPrism`] with
    /// [`Prism::of`].
    #[must_use]
    pub const fn new(try_get: Tg, inject: In, try_get_owned: TgO) -> Self {
        Self::of(FunctionPrism::new(try_get, inject, try_get_owned))
    }
}

impl<S, A, P: Clone> Clone for Prism<S, A, P> {
    fn clone(&self) -> Self {
        Self {
            poly: self.poly.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P: std::fmt::Debug> std::fmt::Debug for Prism<S, A, P> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Prism")
            .field("poly", &self.poly)
            .finish()
    }
}

/// Creates a monomorphic prism for an enum variant.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Limitations
///
/// This macro only works with tuple variants that carry a single value.
/// For variants with multiple fields or named fields, use
/// [`Prism::new`](crate::optics::Prism::new) directly.
///
/// # Example
///
/// ```
/// use optica::effect::Optional;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape { Circle(f64), Square(f64) }
///
/// let circle = prism!(Shape, Circle);
///
/// assert_eq!(circle.try_get(&Shape::Circle(5.0)), Optional::Present(&5.0));
/// assert_eq!(circle.try_get(&Shape::Square(4.0)), Optional::Absent);
/// assert_eq!(circle.inject(10.0), Shape::Circle(10.0));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type| match *source {
                $enum_type::$variant(ref value) => $crate::effect::Optional::Present(value),
                #[allow(unreachable_patterns)]
                _ => $crate::effect::Optional::Absent,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::effect::Optional::Present(value),
                #[allow(unreachable_patterns)]
                _ => $crate::effect::Optional::Absent,
            },
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type<$($generic),+>| match *source {
                $enum_type::$variant(ref value) => $crate::effect::Optional::Present(value),
                #[allow(unreachable_patterns)]
                _ => $crate::effect::Optional::Absent,
            },
            |value| $enum_type::$variant(value),
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::effect::Optional::Present(value),
                #[allow(unreachable_patterns)]
                _ => $crate::effect::Optional::Absent,
            },
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::Prism::new(
            |source: &$enum_type| match *source {
                <$enum_type>::$variant(ref value) => $crate::effect::Optional::Present(value),
                #[allow(unreachable_patterns)]
                _ => $crate::effect::Optional::Absent,
            },
            |value| <$enum_type>::$variant(value),
            |source: $enum_type| match source {
                <$enum_type>::$variant(value) => $crate::effect::Optional::Present(value),
                #[allow(unreachable_patterns)]
                _ => $crate::effect::Optional::Absent,
            },
        )
    };
}
