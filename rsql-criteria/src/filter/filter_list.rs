use std::fmt::Display;

use crate::common::encoding::percent_encode;

use super::FilterExpression;

/// The boolean word joining an entry to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Connective {
    And,
    Or,
}

impl Connective {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connective::And => "and",
            Connective::Or => "or",
        }
    }

    /// The connective as it is written between two rendered entries.
    pub fn encoded(&self) -> String {
        percent_encode(&format!(" {} ", self.as_str()))
    }
}

impl Display for Connective {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An entry of a filter list: a single expression or a nested list.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterNode {
    Expression(FilterExpression),
    List(FilterList),
}

impl FilterNode {
    fn has_content(&self) -> bool {
        match self {
            FilterNode::Expression(_) => true,
            FilterNode::List(list) => list.has_content(),
        }
    }

    // the fragment, and whether it must be parenthesized next to siblings
    fn render_part(&self) -> (String, bool) {
        match self {
            FilterNode::Expression(expression) => (expression.build(), false),
            FilterNode::List(list) => list.render(),
        }
    }
}

impl From<FilterExpression> for FilterNode {
    fn from(expression: FilterExpression) -> Self {
        FilterNode::Expression(expression)
    }
}

impl From<FilterList> for FilterNode {
    fn from(list: FilterList) -> Self {
        FilterNode::List(list)
    }
}

/// One entry of a [`FilterList`] with the connective that joins it to its
/// predecessor. The first entry carries no connective.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterEntry {
    pub connective: Option<Connective>,
    pub node: FilterNode,
}

/// An ordered AND/OR composition of expressions and nested lists.
///
/// Rendering joins the non-empty entries with their percent-encoded
/// connectives. A list never parenthesizes itself when it is rendered on its
/// own; nested lists of two or more parts are parenthesized by the list that
/// contains them, and lists produced by [`FilterList::group`] wrap
/// themselves.
///
/// # Examples
///
/// ```rust
/// use rsql_criteria::{field, FilterList};
///
/// let list = FilterList::new()
///     .and(field("a").eq(1))
///     .or(field("b").eq(2));
/// assert_eq!(list.build(), "a=in=1%20or%20b=in=2");
/// assert_eq!(FilterList::new().build(), "");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterList {
    entries: Vec<FilterEntry>,
    grouped: bool,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the two-entry composite `(left connective right)`.
    ///
    /// The composite renders wrapped in parentheses whenever both sides
    /// render something; an empty side is dropped along with the connective.
    pub fn group(left: FilterList, connective: Connective, right: FilterList) -> Self {
        FilterList {
            entries: vec![
                FilterEntry { connective: None, node: FilterNode::List(left) },
                FilterEntry { connective: Some(connective), node: FilterNode::List(right) },
            ],
            grouped: true,
        }
    }

    /// Appends `node` joined with AND.
    pub fn and<T: Into<FilterNode>>(self, node: T) -> Self {
        self.add(Connective::And, node)
    }

    /// Appends `node` joined with OR.
    pub fn or<T: Into<FilterNode>>(self, node: T) -> Self {
        self.add(Connective::Or, node)
    }

    /// Appends `node` joined with `connective`.
    pub fn add<T: Into<FilterNode>>(mut self, connective: Connective, node: T) -> Self {
        self.push(connective, node);
        self
    }

    /// Appends `node` joined with `connective` in place.
    pub fn push<T: Into<FilterNode>>(&mut self, connective: Connective, node: T) {
        let connective = if self.entries.is_empty() { None } else { Some(connective) };
        self.entries.push(FilterEntry { connective, node: node.into() });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[FilterEntry] {
        &self.entries
    }

    /// Whether the list renders anything at all.
    pub fn has_content(&self) -> bool {
        self.entries.iter().any(|entry| entry.node.has_content())
    }

    /// Renders the list as an RSQL fragment; an empty list renders `""`.
    pub fn build(&self) -> String {
        self.render().0
    }

    // a compound fragment joins two or more parts without enclosing parentheses
    fn render(&self) -> (String, bool) {
        let parts: Vec<(Option<Connective>, String, bool)> = self
            .entries
            .iter()
            .map(|entry| {
                let (fragment, compound) = entry.node.render_part();
                (entry.connective, fragment, compound)
            })
            .filter(|(_, fragment, _)| !fragment.is_empty())
            .collect();

        match parts.as_slice() {
            [] => return (String::new(), false),
            [(_, fragment, compound)] => return (fragment.clone(), *compound),
            _ => {}
        }

        let mut rendered = String::new();
        for (i, (connective, fragment, compound)) in parts.iter().enumerate() {
            if i > 0 {
                rendered.push_str(&connective.unwrap_or(Connective::And).encoded());
            }
            if *compound {
                rendered.push_str(&format!("({})", fragment));
            } else {
                rendered.push_str(fragment);
            }
        }

        if self.grouped {
            (format!("({})", rendered), false)
        } else {
            (rendered, true)
        }
    }
}

impl From<FilterExpression> for FilterList {
    fn from(expression: FilterExpression) -> Self {
        FilterList::new().and(expression)
    }
}

impl Display for FilterList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.build())
    }
}
