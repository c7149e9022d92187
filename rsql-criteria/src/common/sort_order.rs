use std::fmt::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Specifies the direction of an order by clause.
///
/// # Variants
/// - `Ascending`: rendered as `asc`
/// - `Descending`: rendered as `desc`
///
/// # Usage
/// ```text
/// let criteria = Criteria::new().order_by("name", SortOrder::Ascending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z, oldest to newest)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "asc"))]
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A, newest to oldest)
    #[cfg_attr(feature = "serde", serde(rename = "desc"))]
    Descending,
}

impl SortOrder {
    /// The direction keyword as it appears in the query string.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
