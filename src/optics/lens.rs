//! Lens accessors for parts that always exist within a whole.
//!
//! A lens pairs a total read with an immutable replacement: `get`
//! focuses a part inside a larger structure, `set` consumes the whole
//! and returns a fresh whole with the part replaced. Lenses compose, so
//! an accessor chain built from leaf lenses is itself a lens.
//!
//! The polymorphic form [`PolyLens<S, T, A, B>`] allows the replacement
//! to change the part type (and with it the whole type); the common
//! monomorphic form [`Lens<S, A>`](Lens) narrows it to `S = T`, `A = B`.
//!
//! # Laws
//!
//! Every lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source).clone()) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == &value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! Composition of law-abiding lenses is law-abiding, and composition is
//! associative for every operation.
//!
//! # Examples
//!
//! ```
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//!
//! let doubled = x_lens.over(updated, |x| x * 2);
//! assert_eq!(doubled.x, 200);
//! ```

use std::marker::PhantomData;

/// A polymorphic lens: a total accessor whose replacement may change
/// the focused type.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole before replacement)
/// - `T`: The target type (the whole after replacement)
/// - `A`: The focused part before replacement
/// - `B`: The focused part after replacement
///
/// "`S` contains an `A`; replacing it with a `B` yields `T`." The
/// monomorphic [`Lens`] wraps the `S = T`, `A = B` case.
///
/// # Laws
///
/// Constructors do not verify the three lens laws (see the module
/// documentation); supplying a lawful getter/setter pair is the
/// caller's obligation.
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionLens, PolyLens};
///
/// // Focus the first component of a pair, replacing its type.
/// let first = FunctionLens::new(
///     |pair: &(i32, bool)| &pair.0,
///     |pair: (i32, bool), value: String| (value, pair.1),
/// );
///
/// let labeled = first.over_ref((10, true), |value| value.to_string());
/// assert_eq!(labeled, ("10".to_string(), true));
/// ```
pub trait PolyLens<S, T, A, B> {
    /// Gets a reference to the focused part.
    ///
    /// Total: never fails, never mutates the source.
    fn get<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focused part, returning a fresh whole.
    ///
    /// The source is consumed; no value observable through another
    /// reference is ever mutated.
    fn set(&self, source: S, value: B) -> T;

    /// Transforms the focused part in one read-replace step.
    ///
    /// This is the primary ergonomic entry point: equivalent to getting
    /// the current part, applying the function, and setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{FunctionLens, PolyLens};
    ///
    /// let first = FunctionLens::new(
    ///     |pair: &(i32, bool)| &pair.0,
    ///     |pair: (i32, bool), value: i32| (value, pair.1),
    /// );
    /// assert_eq!(first.over((10, true), |value| value + 1), (11, true));
    /// ```
    fn over<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
        A: Clone,
    {
        let current = self.get(&source).clone();
        self.set(source, function(current))
    }

    /// Transforms the focused part through a reference.
    ///
    /// Useful when the transformation only needs to read the current
    /// part to compute its replacement.
    fn over_ref<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(&A) -> B,
    {
        let value = function(self.get(&source));
        self.set(source, value)
    }

    /// Composes this lens with an inner lens focused within its part.
    ///
    /// The composed `get` reads through both lenses; the composed `set`
    /// focuses down through this lens, delegates the replacement to the
    /// inner lens, then writes the rebuilt part back up.
    fn compose<C, D, L>(self, inner: L) -> ComposedLens<Self, L, A, B>
    where
        Self: Sized,
        L: PolyLens<A, B, C, D>,
    {
        ComposedLens::new(self, inner)
    }

    /// Alias for [`compose`](PolyLens::compose).
    fn then<C, D, L>(self, inner: L) -> ComposedLens<Self, L, A, B>
    where
        Self: Sized,
        L: PolyLens<A, B, C, D>,
    {
        self.compose(inner)
    }
}

/// A polymorphic lens implemented by a getter/setter function pair.
///
/// This is the `of` constructor of the lens family: pair a getter with
/// a setter and the result is a lens. The [`lens!`](crate::lens) macro
/// generates the monomorphic wrapper around a `FunctionLens` for a
/// named struct field.
///
/// # Type Parameters
///
/// - `S`, `T`, `A`, `B`: As on [`PolyLens`]
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionLens, PolyLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| &point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// assert_eq!(*x_lens.get(&Point { x: 10, y: 20 }), 10);
/// ```
pub struct FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, B) -> T,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, St> FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, B) -> T,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// The pair must satisfy the lens laws; the constructor does not
    /// verify them.
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> PolyLens<S, T, A, B> for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, B) -> T,
{
    fn get<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: B) -> T {
        (self.setter)(source, value)
    }
}

impl<S, T, A, B, G, St> Clone for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, B) -> T + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> std::fmt::Debug for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, B) -> T,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of an outer and an inner lens.
///
/// The composed `set` is the load-bearing algorithm of the accessor
/// family: clone the intermediate part out of the source, delegate the
/// replacement to the inner lens, then write the rebuilt intermediate
/// back through the outer lens. Composition owns its two components
/// (shared, never mutated) and is cheap to construct and discard.
///
/// # Type Parameters
///
/// - `L1`: The outer lens type
/// - `L2`: The inner lens type
/// - `A`, `B`: The intermediate part before/after replacement
///
/// # Example
///
/// ```
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Inner { value: i32 }
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Outer { inner: Inner }
///
/// let composed = lens!(Outer, inner).compose(lens!(Inner, value));
///
/// let data = Outer { inner: Inner { value: 42 } };
/// assert_eq!(*composed.get(&data), 42);
///
/// let updated = composed.set(data, 100);
/// assert_eq!(updated.inner.value, 100);
/// ```
pub struct ComposedLens<L1, L2, A, B> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<(A, B)>,
}

impl<L1, L2, A, B> ComposedLens<L1, L2, A, B> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, C, D, L1, L2> PolyLens<S, T, C, D> for ComposedLens<L1, L2, A, B>
where
    L1: PolyLens<S, T, A, B>,
    L2: PolyLens<A, B, C, D>,
    A: Clone + 'static,
{
    fn get<'a>(&self, source: &'a S) -> &'a C {
        self.inner.get(self.outer.get(source))
    }

    fn set(&self, source: S, value: D) -> T {
        let intermediate = self.outer.get(&source).clone();
        let replaced = self.inner.set(intermediate, value);
        self.outer.set(source, replaced)
    }
}

impl<L1: Clone, L2: Clone, A, B> Clone for ComposedLens<L1, L2, A, B> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A, B> std::fmt::Debug for ComposedLens<L1, L2, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// A lens focusing one element of a vector by position.
///
/// This is the indexed accessor: composing any lens with a
/// sequence-valued focus against an `ElementLens` (or calling
/// [`Lens::at`]) focuses a single element. The replacement writes into
/// the owned vector passed to `set`, so a copy of the original held
/// elsewhere is never disturbed.
///
/// An index outside the vector is a contract violation, not an expected
/// absence, and is not represented as an effect value.
///
/// # Panics
///
/// Both `get` and `set` panic if the index is out of range.
///
/// # Example
///
/// ```
/// use optica::optics::{ElementLens, PolyLens};
///
/// let second = ElementLens::new(1);
/// let values = vec![1, 2, 3];
///
/// assert_eq!(*second.get(&values), 2);
/// assert_eq!(second.set(values, 20), vec![1, 20, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct ElementLens<X> {
    index: usize,
    _marker: PhantomData<X>,
}

impl<X> ElementLens<X> {
    /// Creates a new `ElementLens` for the given position.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

impl<X> PolyLens<Vec<X>, Vec<X>, X, X> for ElementLens<X> {
    fn get<'a>(&self, source: &'a Vec<X>) -> &'a X {
        &source[self.index]
    }

    fn set(&self, mut source: Vec<X>, value: X) -> Vec<X> {
        source[self.index] = value;
        source
    }
}

/// A monomorphic lens: the common case where replacement keeps types.
///
/// `Lens<S, A>` is backed by a [`PolyLens<S, S, A, A>`]; the explicit
/// narrowing constructor is [`Lens::of`], and [`Lens::into_poly`] hands
/// the backing polymorphic lens back. It exists purely as an ergonomic
/// specialization with simplified signatures; every algorithm lives in
/// the polymorphic family.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focused part type
/// - `L`: The backing polymorphic lens type
///
/// # Example
///
/// ```
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Person { name: String, age: u32 }
///
/// let age_lens = lens!(Person, age);
/// let person = Person { name: "alice".to_string(), age: 30 };
///
/// let older = age_lens.over(person, |age| age + 1);
/// assert_eq!(older.age, 31);
/// ```
pub struct Lens<S, A, L> {
    poly: L,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, L> Lens<S, A, L>
where
    L: PolyLens<S, S, A, A>,
{
    /// Narrows a polymorphic lens with identical before/after types.
    ///
    /// This is the only way a polymorphic lens becomes a monomorphic
    /// one; there is no implicit conversion.
    #[must_use]
    pub const fn of(poly: L) -> Self {
        Self {
            poly,
            _marker: PhantomData,
        }
    }

    /// Returns the backing polymorphic lens.
    #[must_use]
    pub fn into_poly(self) -> L {
        self.poly
    }

    /// Gets a reference to the focused part.
    pub fn get<'a>(&self, source: &'a S) -> &'a A {
        self.poly.get(source)
    }

    /// Replaces the focused part, returning a fresh whole.
    pub fn set(&self, source: S, value: A) -> S {
        self.poly.set(source, value)
    }

    /// Transforms the focused part in one read-replace step.
    pub fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        self.poly.over(source, function)
    }

    /// Transforms the focused part through a reference.
    pub fn over_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        self.poly.over_ref(source, function)
    }

    /// Composes this lens with an inner lens focused within its part.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(*person_street.get(&person), "Main St");
    /// ```
    pub fn compose<B, M>(self, inner: Lens<A, B, M>) -> Lens<S, B, ComposedLens<L, M, A, A>>
    where
        M: PolyLens<A, A, B, B>,
        A: Clone + 'static,
    {
        Lens::of(ComposedLens::new(self.poly, inner.poly))
    }

    /// Alias for [`compose`](Lens::compose).
    pub fn then<B, M>(self, inner: Lens<A, B, M>) -> Lens<S, B, ComposedLens<L, M, A, A>>
    where
        M: PolyLens<A, A, B, B>,
        A: Clone + 'static,
    {
        self.compose(inner)
    }
}

impl<S, X, L> Lens<S, Vec<X>, L>
where
    L: PolyLens<S, S, Vec<X>, Vec<X>>,
{
    /// Specializes a sequence-valued focus to one element by position.
    ///
    /// Equivalent to composing with an [`ElementLens`]. The index is a
    /// caller contract: an out-of-range access panics at the point of
    /// misuse rather than returning an effect value.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Roster { names: Vec<String> }
    ///
    /// let second_name = lens!(Roster, names).at(1);
    /// let roster = Roster { names: vec!["ada".to_string(), "grace".to_string()] };
    ///
    /// assert_eq!(*second_name.get(&roster), "grace");
    ///
    /// let renamed = second_name.set(roster, "katherine".to_string());
    /// assert_eq!(renamed.names, vec!["ada".to_string(), "katherine".to_string()]);
    /// ```
    pub fn at(self, index: usize) -> Lens<S, X, ComposedLens<L, ElementLens<X>, Vec<X>, Vec<X>>>
    where
        X: Clone + 'static,
    {
        Lens::of(ComposedLens::new(self.poly, ElementLens::new(index)))
    }
}

impl<S, A, G, St> Lens<S, A, FunctionLens<S, S, A, A, G, St>>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a monomorphic lens directly from a getter and setter.
    ///
    /// Shorthand for narrowing a fresh [`FunctionLens`] with
    /// [`Lens::of`].
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self::of(FunctionLens::new(getter, setter))
    }
}

impl<S, A, L: Clone> Clone for Lens<S, A, L> {
    fn clone(&self) -> Self {
        Self {
            poly: self.poly.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, L: std::fmt::Debug> std::fmt::Debug for Lens<S, A, L> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Lens")
            .field("poly", &self.poly)
            .finish()
    }
}

/// Creates a monomorphic lens for a struct field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// lens!(StructType<T, ...>, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
/// let y_lens = lens!(Point, y);
///
/// let point = Point { x: 10, y: 20 };
///
/// assert_eq!(*x_lens.get(&point), 10);
/// assert_eq!(*y_lens.get(&point), 20);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type<$($generic),+>| &source.$field,
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::Lens::new(
            |source: &$struct_type| &source.$field,
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}

// Indexed access never shares the buffer it writes into.
static_assertions::assert_impl_all!(ElementLens<i32>: Send, Sync);
