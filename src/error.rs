use std::io::ErrorKind;

use thiserror::Error;

use crate::Place;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum GraphError {
    #[error("Place {0} already exists")]
    DuplicateIdentifier(Place),
    #[error("Place {0} does not exist")]
    UnknownPlace(Place),
    #[error("Route distance is not valid, expected a finite non-negative number: {0}")]
    InvalidWeight(f64),
    #[error("Route cannot connect {0} to itself")]
    SelfRoute(Place),
    #[error("No route exists between {0} and {1}")]
    RouteNotFound(Place, Place),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum ShellError {
    #[error("Shell I/O error: {0:?}")]
    IO(ErrorKind),
    #[error("Shell input ended")]
    EndOfInput,
}

impl From<std::io::Error> for ShellError {
    fn from(error: std::io::Error) -> Self {
        Self::IO(error.kind())
    }
}
