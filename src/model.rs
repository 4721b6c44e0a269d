use std::borrow::Borrow;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use ordered_float::OrderedFloat;

use crate::GraphError;

/// A named location, uniquely identified in the graph by its name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Place(String);

impl Place {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Place {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for Place {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Place {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Place {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Place {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Place {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Length of a route, or of a sequence of routes, in kilometers.
/// Distances are never negative and never NaN, which makes them totally ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(OrderedFloat<f64>);

impl Distance {
    pub const ZERO: Self = Self(OrderedFloat(0.0));
    /// Distance to a place that cannot be reached.
    pub const INFINITY: Self = Self(OrderedFloat(f64::INFINITY));

    /// Creates a distance without validating it.
    /// Use [`Distance::try_from_km`] for values that come from outside the crate.
    pub const fn from_km(km: f64) -> Self {
        Self(OrderedFloat(km))
    }

    /// Creates a route distance, rejecting negative, NaN and infinite values.
    pub fn try_from_km(km: f64) -> Result<Self, GraphError> {
        if km.is_finite() && km >= 0.0 {
            // normalize -0.0 so that equal distances also hash equally
            Ok(Self::from_km(km + 0.0))
        } else {
            Err(GraphError::InvalidWeight(km))
        }
    }

    pub const fn km(&self) -> f64 {
        self.0.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |total, distance| total + distance)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.km())
    }
}
