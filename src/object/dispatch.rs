//! Calling methods by name.
//!
//! Types opt in by implementing [`Dispatch`], an explicit table from method
//! names to methods. A type may implement it once per argument tuple.

use std::borrow::Borrow;
use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;

use crate::collection::AssocMap;
use crate::error::FnError;
use crate::function::Function;

/// A name-to-method table for one argument tuple.
///
/// # Examples
///
/// ```rust
/// use fnkit::FnError;
/// use fnkit::object::Dispatch;
///
/// struct Counter {
///     count: i32,
/// }
///
/// impl Dispatch<(i32,)> for Counter {
///     type Output = i32;
///
///     fn dispatch(&mut self, method: &str, (amount,): (i32,)) -> Result<i32, FnError> {
///         match method {
///             "add" => {
///                 self.count += amount;
///                 Ok(self.count)
///             }
///             _ => Err(FnError::unknown_method("Counter", method)),
///         }
///     }
/// }
///
/// let mut counter = Counter { count: 0 };
/// assert_eq!(counter.dispatch("add", (5,)), Ok(5));
/// assert!(counter.dispatch("subtract", (5,)).is_err());
/// ```
pub trait Dispatch<Args> {
    /// The value returned by the dispatched methods.
    type Output;

    /// Invokes the method named `method` with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`FnError::UnknownMethod`] if no method of that name accepts
    /// `Args`. Errors raised by the method itself are returned unchanged.
    fn dispatch(&mut self, method: &str, arguments: Args) -> Result<Self::Output, FnError>;
}

/// A function calling one named method on the object it is given.
///
/// Created by [`caller`]. The object comes first in the argument tuple,
/// followed by the method's own arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    method: String,
}

/// Returns a function `(object, arguments...)` calling `method` on `object`.
///
/// # Examples
///
/// ```rust
/// use fnkit::FnError;
/// use fnkit::function::Function;
/// use fnkit::object::{Dispatch, caller};
///
/// struct Greeter;
///
/// impl Dispatch<(String,)> for Greeter {
///     type Output = String;
///
///     fn dispatch(&mut self, method: &str, (name,): (String,)) -> Result<String, FnError> {
///         match method {
///             "greet" => Ok(format!("hello, {name}")),
///             _ => Err(FnError::unknown_method("Greeter", method)),
///         }
///     }
/// }
///
/// let greet = caller("greet");
/// assert_eq!(greet.call((&mut Greeter, "moe".to_string())), Ok("hello, moe".to_string()));
/// ```
pub fn caller(method: &str) -> Caller {
    Caller {
        method: method.to_owned(),
    }
}

impl Caller {
    /// Returns the name of the method this caller invokes.
    pub fn method(&self) -> &str {
        &self.method
    }

    fn invoke_on<O, Args>(&self, object: &mut O, arguments: Args) -> Result<O::Output, FnError>
    where
        O: Dispatch<Args> + ?Sized,
    {
        object
            .dispatch(&self.method, arguments)
            .inspect_err(|error| {
                tracing::debug!(method = %self.method, %error, "caller: dispatch failed");
            })
    }
}

macro_rules! impl_function_for_caller {
    ($($argument:ident),*) => {
        paste::paste! {
            impl<'o, O, $($argument),*> Function<(&'o mut O, $($argument,)*)> for Caller
            where
                O: Dispatch<($($argument,)*)> + ?Sized,
            {
                type Output = Result<O::Output, FnError>;

                fn call(
                    &self,
                    (object, $([<$argument:lower>],)*): (&'o mut O, $($argument,)*),
                ) -> Self::Output {
                    self.invoke_on(object, ($([<$argument:lower>],)*))
                }
            }
        }
    };
}

impl_function_for_caller!();
impl_function_for_caller!(A1);
impl_function_for_caller!(A1, A2);
impl_function_for_caller!(A1, A2, A3);
impl_function_for_caller!(A1, A2, A3, A4);
impl_function_for_caller!(A1, A2, A3, A4, A5);

// =============================================================================
// Guarded invocation
// =============================================================================

/// A function `(callback, key)` calling `callback(map[key])` when `key` is set.
///
/// Created by [`when_set_invoker`].
pub struct WhenSetInvoker<'m, K, V> {
    map: &'m AssocMap<K, V>,
}

/// Returns a function that feeds `map[key]` to a callback, but only when
/// `key` is present.
///
/// The callback receives a clone of the value and the call returns `Some`
/// with its result. For an absent key the call returns `None` and the
/// callback is not invoked.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
///
/// use fnkit::collection::AssocMap;
/// use fnkit::function::Function;
/// use fnkit::object::when_set_invoker;
///
/// let config = AssocMap::from([("title", "Report")]);
/// let title = RefCell::new(String::from("untitled"));
/// let set_title = |value: &str| *title.borrow_mut() = value.to_string();
///
/// let when_set = when_set_invoker(&config);
/// when_set.call((set_title, "subtitle"));
/// assert_eq!(*title.borrow(), "untitled");
///
/// when_set.call((set_title, "title"));
/// assert_eq!(*title.borrow(), "Report");
///
/// assert_eq!(when_set.call((str::len, "title")), Some(6));
/// ```
pub const fn when_set_invoker<K, V>(map: &AssocMap<K, V>) -> WhenSetInvoker<'_, K, V> {
    WhenSetInvoker { map }
}

impl<K, V> Clone for WhenSetInvoker<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for WhenSetInvoker<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for WhenSetInvoker<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WhenSetInvoker")
            .field("map", self.map)
            .finish()
    }
}

impl<'q, K, V, F, Q> Function<(F, &'q Q)> for WhenSetInvoker<'_, K, V>
where
    K: Hash + Eq + Borrow<Q>,
    V: Clone,
    Q: Hash + Eq + ?Sized,
    F: Function<(V,)>,
{
    type Output = Option<F::Output>;

    fn call(&self, (callback, key): (F, &'q Q)) -> Self::Output {
        self.map
            .get(key)
            .map(|value| callback.call((value.clone(),)))
    }
}

/// A function `(method, key)` calling `target.method(map[key])` when `key`
/// is set.
///
/// Created by [`when_set_invoker_on`].
pub struct BoundWhenSetInvoker<'m, 'o, K, V, O: ?Sized> {
    map: &'m AssocMap<K, V>,
    target: RefCell<&'o mut O>,
}

/// Returns a function that dispatches `map[key]` to a named method of
/// `target`, but only when `key` is present.
///
/// # Examples
///
/// ```rust
/// use fnkit::FnError;
/// use fnkit::collection::AssocMap;
/// use fnkit::function::Function;
/// use fnkit::object::{Dispatch, when_set_invoker_on};
///
/// #[derive(Default)]
/// struct Window {
///     width: u32,
/// }
///
/// impl Dispatch<(u32,)> for Window {
///     type Output = ();
///
///     fn dispatch(&mut self, method: &str, (value,): (u32,)) -> Result<(), FnError> {
///         match method {
///             "set_width" => {
///                 self.width = value;
///                 Ok(())
///             }
///             _ => Err(FnError::unknown_method("Window", method)),
///         }
///     }
/// }
///
/// let config = AssocMap::from([("width", 640_u32)]);
/// let mut window = Window::default();
///
/// let wire = when_set_invoker_on(&config, &mut window);
/// assert_eq!(wire.call(("set_width", "width")), Ok(()));
/// assert_eq!(wire.call(("set_width", "height")), Ok(()));
/// assert!(wire.call(("set_depth", "width")).is_err());
/// drop(wire);
///
/// assert_eq!(window.width, 640);
/// ```
pub fn when_set_invoker_on<'m, 'o, K, V, O>(
    map: &'m AssocMap<K, V>,
    target: &'o mut O,
) -> BoundWhenSetInvoker<'m, 'o, K, V, O>
where
    O: ?Sized,
{
    BoundWhenSetInvoker {
        map,
        target: RefCell::new(target),
    }
}

impl<'o, K, V, O: ?Sized> BoundWhenSetInvoker<'_, 'o, K, V, O> {
    /// Gives the target object back.
    pub fn into_target(self) -> &'o mut O {
        self.target.into_inner()
    }
}

impl<K, V, O: ?Sized> fmt::Debug for BoundWhenSetInvoker<'_, '_, K, V, O>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BoundWhenSetInvoker")
            .field("map", self.map)
            .finish_non_exhaustive()
    }
}

impl<'n, 'q, K, V, O, Q> Function<(&'n str, &'q Q)> for BoundWhenSetInvoker<'_, '_, K, V, O>
where
    K: Hash + Eq + Borrow<Q>,
    V: Clone,
    O: Dispatch<(V,)> + ?Sized,
    Q: Hash + Eq + ?Sized,
{
    type Output = Result<(), FnError>;

    fn call(&self, (method, key): (&'n str, &'q Q)) -> Self::Output {
        let Some(value) = self.map.get(key) else {
            return Ok(());
        };
        let mut target = self.target.borrow_mut();
        caller(method).invoke_on(&mut **target, (value.clone(),))?;
        Ok(())
    }
}
