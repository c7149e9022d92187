//! Filter expressions and their AND/OR composition.
//!
//! An expression pairs a field with an operator and a value and renders to
//! an RSQL fragment such as `code==%22*a*%22`. Expressions and nested lists
//! are combined with [`FilterList`], which joins them with percent-encoded
//! `and`/`or` connectives.
//!
//! # Creating Filters
//!
//! - `field("age").gt(30)` - comparison operators
//! - `field("name").eq("Alice")` - equality checks
//! - `field("code").contains("a")` - wildcard patterns
//! - `field("id").is_in(vec![1, 2])` - membership
//! - `field("age").gt(30).and(field("name").eq("Alice"))` - logical AND
//!
//! # Examples
//!
//! ```rust
//! use rsql_criteria::{field, FilterList};
//!
//! let adults = field("age").gte(18);
//! let named = field("name").starts_with("A");
//! let list = adults.and(named);
//! assert_eq!(list.build(), "age%3E%3D18%20and%20name==%22A*%22");
//!
//! let either = FilterList::new()
//!     .and(list)
//!     .or(field("admin").eq(true));
//! assert_eq!(
//!     either.build(),
//!     "(age%3E%3D18%20and%20name==%22A*%22)%20or%20admin=in=true"
//! );
//! ```
//!
//! # Supported Operators
//!
//! - **Equality**: `eq`, `ne`, `like`
//! - **Comparison**: `gt`, `gte`, `lt`, `lte`
//! - **Pattern**: `starts_with`, `ends_with`, `contains`, `does_not_contain`
//! - **Membership**: `is_in`, `not_in`
//! - **Presence**: `is_empty`, `is_not_empty`, `is_null`, `is_not_null`
//! - **Extension**: `custom` with any [`CustomOperator`]

mod expression;
mod filter_list;
mod fluent;
mod operator;

pub use expression::*;
pub use filter_list::*;
pub use fluent::*;
pub use operator::*;
