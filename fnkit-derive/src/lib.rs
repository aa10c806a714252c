//! Derive macros for fnkit.
//!
//! # Available Derive Macros
//!
//! - [`Construct`]: Implements `fnkit::object::Construct` taking the
//!   struct's fields, in declaration order, as the argument tuple
//!
//! # Example
//!
//! ```rust,ignore
//! use fnkit::Construct;
//! use fnkit::function::Function;
//! use fnkit::object::factory;
//!
//! #[derive(Debug, PartialEq, Construct)]
//! struct Endpoint {
//!     host: String,
//!     port: u16,
//! }
//!
//! let endpoint = factory::<Endpoint>().call(("localhost".to_string(), 8080));
//! assert_eq!(endpoint.port, 8080);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod construct;

use proc_macro::TokenStream;

/// Derive macro implementing `Construct` for a struct.
///
/// The argument tuple lists the field types in declaration order, so
/// `factory::<T>()` and `factory_map::<T>()` work on the derived type.
///
/// # Supported Shapes
///
/// - **Named structs**: `struct Point { x: i32, y: i32 }` gets
///   `Construct<(i32, i32)>`
/// - **Tuple structs**: `struct Meters(f64)` gets `Construct<(f64,)>`
/// - **Unit structs**: `struct Marker;` gets `Construct<()>`
///
/// Enums and unions are rejected: they have no single constructor.
///
/// # Generated Code
///
/// ```rust,ignore
/// impl ::fnkit::object::Construct<(T1, T2)> for StructName {
///     fn construct((field_0, field_1): (T1, T2)) -> Self {
///         Self { first: field_0, second: field_1 }
///     }
/// }
/// ```
///
/// # Generics
///
/// Generic parameters and where clauses are carried over unchanged:
///
/// ```rust,ignore
/// #[derive(Construct)]
/// struct Wrapper<T> {
///     value: T,
/// }
///
/// let wrapper = Wrapper::<i32>::construct((42,));
/// assert_eq!(wrapper.value, 42);
/// ```
#[proc_macro_derive(Construct)]
pub fn derive_construct(input: TokenStream) -> TokenStream {
    construct::derive_construct_impl(input)
}
