//! Constructing values from argument tuples.
//!
//! [`Construct`] is the construction capability behind [`factory`],
//! [`factory_map`] and [`error_type`](crate::conditional::error_type). It
//! can be derived with `#[derive(Construct)]`, which takes the arguments in
//! field declaration order.
//!
//! [`Registry`] adds construction by name on top.

use std::fmt;
use std::marker::PhantomData;

use crate::collection::AssocMap;
use crate::combinator::compose;
use crate::error::FnError;
use crate::function::{BoxedFunction, Function};

/// A type constructible from the argument tuple `Args`.
///
/// A type may implement `Construct` for several argument tuples, one per
/// constructor shape.
///
/// # Examples
///
/// ```rust
/// use fnkit::object::Construct;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// impl Construct<(i32, i32)> for Point {
///     fn construct((x, y): (i32, i32)) -> Self {
///         Self { x, y }
///     }
/// }
///
/// let point = Point::construct((1, 2));
/// assert_eq!((point.x, point.y), (1, 2));
/// ```
pub trait Construct<Args>: Sized {
    /// Builds a value from `arguments`.
    fn construct(arguments: Args) -> Self;
}

/// A function constructing `T` from its arguments.
///
/// Created by [`factory`].
pub struct Factory<T>(PhantomData<fn() -> T>);

/// Returns a function `(arguments...) -> T` for a constructible `T`.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Function;
/// use fnkit::object::{Construct, factory};
///
/// #[derive(Debug, PartialEq)]
/// struct Tag(String);
///
/// impl Construct<(&str,)> for Tag {
///     fn construct((name,): (&str,)) -> Self {
///         Self(name.to_string())
///     }
/// }
///
/// assert_eq!(factory::<Tag>().call(("urgent",)), Tag("urgent".to_string()));
/// ```
pub const fn factory<T>() -> Factory<T> {
    Factory(PhantomData)
}

impl<T, Args> Function<Args> for Factory<T>
where
    T: Construct<Args>,
{
    type Output = T;

    #[inline]
    fn call(&self, arguments: Args) -> T {
        T::construct(arguments)
    }
}

/// A function constructing one `T` per element of a sequence.
///
/// Created by [`factory_map`].
pub struct FactoryMap<T>(PhantomData<fn() -> T>);

/// Returns a function mapping a sequence to one `T` per element, each
/// element being the sole constructor argument.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Function;
/// use fnkit::object::{Construct, factory_map};
///
/// #[derive(Debug, PartialEq)]
/// struct Id(u32);
///
/// impl Construct<(u32,)> for Id {
///     fn construct((value,): (u32,)) -> Self {
///         Self(value)
///     }
/// }
///
/// assert_eq!(factory_map::<Id>().call((vec![1, 2],)), vec![Id(1), Id(2)]);
/// ```
pub const fn factory_map<T>() -> FactoryMap<T> {
    FactoryMap(PhantomData)
}

impl<T, I> Function<(I,)> for FactoryMap<T>
where
    I: IntoIterator,
    T: Construct<(I::Item,)>,
{
    type Output = Vec<T>;

    fn call(&self, (items,): (I,)) -> Vec<T> {
        let make = factory::<T>();
        items.into_iter().map(|item| make.call((item,))).collect()
    }
}

macro_rules! impl_marker_traits {
    ($name:ident) => {
        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    formatter,
                    concat!(stringify!($name), "<{}>"),
                    std::any::type_name::<T>()
                )
            }
        }
    };
}

impl_marker_traits!(Factory);
impl_marker_traits!(FactoryMap);

// =============================================================================
// Registry
// =============================================================================

/// Constructors of `T` looked up by name.
///
/// Every constructor takes the same argument tuple `Args`. Registering a
/// name twice replaces the earlier constructor.
///
/// # Examples
///
/// ```rust
/// use fnkit::object::{Construct, Registry};
///
/// #[derive(Debug, PartialEq)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// struct Circle(f64);
///
/// impl Construct<(f64,)> for Circle {
///     fn construct((radius,): (f64,)) -> Self {
///         Self(radius)
///     }
/// }
///
/// impl From<Circle> for Shape {
///     fn from(circle: Circle) -> Self {
///         Self::Circle(circle.0)
///     }
/// }
///
/// let mut shapes: Registry<(f64,), Shape> = Registry::new();
/// shapes
///     .register_type::<Circle>("circle")
///     .register("square", Shape::Square);
///
/// assert_eq!(shapes.construct("circle", (1.5,)), Ok(Shape::Circle(1.5)));
/// assert_eq!(shapes.construct("square", (2.0,)), Ok(Shape::Square(2.0)));
/// assert!(shapes.construct("hexagon", (1.0,)).is_err());
/// ```
pub struct Registry<Args, T> {
    constructors: AssocMap<String, BoxedFunction<'static, Args, T>>,
}

impl<Args, T> Registry<Args, T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            constructors: AssocMap::new(),
        }
    }

    /// Registers `constructor` under `name`.
    pub fn register<F>(&mut self, name: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Function<Args, Output = T> + 'static,
    {
        let name = name.into();
        tracing::debug!(name = %name, "registering constructor");
        self.constructors
            .insert(name, BoxedFunction::new(constructor));
        self
    }

    /// Registers the constructor of `S` under `name`, converting the built
    /// value into `T`.
    pub fn register_type<S>(&mut self, name: impl Into<String>) -> &mut Self
    where
        S: Construct<Args> + Into<T> + 'static,
        Args: 'static,
        T: 'static,
    {
        self.register(name, compose(<S as Into<T>>::into as fn(S) -> T, factory::<S>()))
    }

    /// Returns the constructor registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`FnError::UnknownType`] if nothing is registered under `name`.
    pub fn factory(&self, name: &str) -> Result<&BoxedFunction<'static, Args, T>, FnError> {
        self.constructors.get(name).ok_or_else(|| {
            tracing::debug!(name, "no constructor registered");
            FnError::unknown_type(name)
        })
    }

    /// Constructs the value registered under `name` from `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`FnError::UnknownType`] if nothing is registered under `name`.
    pub fn construct(&self, name: &str, arguments: Args) -> Result<T, FnError> {
        self.factory(name)
            .map(|constructor| constructor.call(arguments))
    }

    /// Returns `true` if a constructor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Returns the registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.constructors.keys().map(String::as_str)
    }
}

impl<Args, T> Default for Registry<Args, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args, T> fmt::Debug for Registry<Args, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registry")
            .field("names", &self.names().collect::<Vec<_>>())
            .finish()
    }
}
