//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use fnkit::FnError;
use fnkit::object::{Construct, Dispatch};

/// Records its constructor arguments and answers two methods by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SomeClass {
    pub constructor_arguments: Vec<String>,
}

impl Construct<()> for SomeClass {
    fn construct((): ()) -> Self {
        Self::default()
    }
}

impl Construct<(&str,)> for SomeClass {
    fn construct((first,): (&str,)) -> Self {
        Self {
            constructor_arguments: vec![first.to_string()],
        }
    }
}

impl Construct<(&str, &str)> for SomeClass {
    fn construct((first, second): (&str, &str)) -> Self {
        Self {
            constructor_arguments: vec![first.to_string(), second.to_string()],
        }
    }
}

impl Construct<(&str, &str, &str)> for SomeClass {
    fn construct((first, second, third): (&str, &str, &str)) -> Self {
        Self {
            constructor_arguments: vec![first.to_string(), second.to_string(), third.to_string()],
        }
    }
}

impl Dispatch<()> for SomeClass {
    type Output = String;

    fn dispatch(&mut self, method: &str, (): ()) -> Result<String, FnError> {
        match method {
            "get_some_prop" => Ok("someVal".to_string()),
            _ => Err(FnError::unknown_method("SomeClass", method)),
        }
    }
}

impl<'a> Dispatch<(&'a str,)> for SomeClass {
    type Output = &'a str;

    fn dispatch(&mut self, method: &str, (argument,): (&'a str,)) -> Result<&'a str, FnError> {
        match method {
            "pass_thru" => Ok(argument),
            _ => Err(FnError::unknown_method("SomeClass", method)),
        }
    }
}

/// Receives configuration values through named setters.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub title: Option<String>,
    pub subtitle: Option<String>,
}

impl Dispatch<(String,)> for Settings {
    type Output = ();

    fn dispatch(&mut self, method: &str, (value,): (String,)) -> Result<(), FnError> {
        match method {
            "set_title" => self.title = Some(value),
            "set_subtitle" => self.subtitle = Some(value),
            _ => return Err(FnError::unknown_method("Settings", method)),
        }
        Ok(())
    }
}
