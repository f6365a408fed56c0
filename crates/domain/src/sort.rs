//! Sort order a listing may request, parsed from `property[,direction]`.
//!
//! Generic over the record's sortable key `K` so every record type names its
//! own closed set of sortable properties.

use std::str::FromStr;

use crate::error::ValidationError;

/// Ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

/// A single-property sort order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sort<K> {
    pub property: K,
    pub direction: Direction,
}

impl<K> Sort<K> {
    #[must_use]
    pub fn asc(property: K) -> Self {
        Self {
            property,
            direction: Direction::Asc,
        }
    }

    #[must_use]
    pub fn desc(property: K) -> Self {
        Self {
            property,
            direction: Direction::Desc,
        }
    }
}

impl<K: FromStr> FromStr for Sort<K> {
    type Err = ValidationError;

    /// Parse `id`, `name,desc`, `ID,ASC`, …
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidSort(s.to_string());

        let (property, direction) = match s.split_once(',') {
            Some((property, direction)) => (property, Some(direction)),
            None => (s, None),
        };

        let property = K::from_str(property.trim()).map_err(|_| invalid())?;

        let direction = match direction.map(|d| d.trim().to_ascii_lowercase()) {
            None => Direction::Asc,
            Some(d) if d == "asc" => Direction::Asc,
            Some(d) if d == "desc" => Direction::Desc,
            Some(_) => return Err(invalid()),
        };

        Ok(Self {
            property,
            direction,
        })
    }
}
