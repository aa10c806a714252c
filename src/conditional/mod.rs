//! Guarded execution and error throwers.
//!
//! [`conditional`] and [`do_when`] run a function only when a predicate
//! holds, returning `None` when it does not. The throwers build on them to raise caller-defined errors: a
//! raised error is an `Err` returned from the guarded call, and it is never
//! swallowed by a wrapper.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::conditional::{conditional_thrower, throw_when};
//! use fnkit::function::Function;
//!
//! #[derive(Debug, PartialEq)]
//! enum PortError {
//!     Reserved,
//! }
//!
//! let check_port = conditional_thrower(|port: u16| port < 1024, || PortError::Reserved, None);
//!
//! assert_eq!(check_port.call((8080,)), Ok(()));
//! assert_eq!(check_port.call((80,)), Err(PortError::Reserved));
//! assert_eq!(throw_when(false, || PortError::Reserved, None), Ok(()));
//! ```

mod guard;
mod thrower;

pub use guard::{Conditional, conditional, do_when};
pub use thrower::{
    ConditionalThrower, ErrorKind, ErrorThrower, ErrorType, conditional_thrower, error_thrower, error_type,
    throw_error, throw_when,
};
