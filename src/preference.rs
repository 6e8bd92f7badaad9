use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::render::{indented, indented_list};

/// A node selector term: the match criteria a preferred scheduling term
/// prefers. The requirements of each list are ANDed.
///
/// Rendered field names are the wire keys (`matchExpressions`, `matchFields`).
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    /// A list of node selector requirements by node's labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    match_expressions: Option<Vec<NodeSelectorRequirement>>,

    /// A list of node selector requirements by node's fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    match_fields: Option<Vec<NodeSelectorRequirement>>,
}

impl Preference {
    pub const SERIALIZED_NAME_MATCH_EXPRESSIONS: &'static str = "matchExpressions";
    pub const SERIALIZED_NAME_MATCH_FIELDS: &'static str = "matchFields";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_expressions(mut self, match_expressions: Vec<NodeSelectorRequirement>) -> Self {
        self.match_expressions = Some(match_expressions);
        self
    }

    /// Appends one requirement, creating the list if it is absent.
    pub fn add_match_expression(mut self, requirement: NodeSelectorRequirement) -> Self {
        self.match_expressions
            .get_or_insert_with(Vec::new)
            .push(requirement);
        self
    }

    pub fn with_match_fields(mut self, match_fields: Vec<NodeSelectorRequirement>) -> Self {
        self.match_fields = Some(match_fields);
        self
    }

    pub fn add_match_field(mut self, requirement: NodeSelectorRequirement) -> Self {
        self.match_fields.get_or_insert_with(Vec::new).push(requirement);
        self
    }

    pub fn match_expressions(&self) -> Option<&[NodeSelectorRequirement]> {
        self.match_expressions.as_deref()
    }

    pub fn set_match_expressions(&mut self, match_expressions: Option<Vec<NodeSelectorRequirement>>) {
        self.match_expressions = match_expressions;
    }

    pub fn match_fields(&self) -> Option<&[NodeSelectorRequirement]> {
        self.match_fields.as_deref()
    }

    pub fn set_match_fields(&mut self, match_fields: Option<Vec<NodeSelectorRequirement>>) {
        self.match_fields = match_fields;
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class Preference {{")?;
        writeln!(
            f,
            "    {}: {}",
            Self::SERIALIZED_NAME_MATCH_EXPRESSIONS,
            indented_list(self.match_expressions())
        )?;
        writeln!(
            f,
            "    {}: {}",
            Self::SERIALIZED_NAME_MATCH_FIELDS,
            indented_list(self.match_fields())
        )?;
        write!(f, "}}")
    }
}

/// A selector that relates a key to a set of values through an operator.
///
/// `operator` is one of `In`, `NotIn`, `Exists`, `DoesNotExist`, `Gt` or `Lt`,
/// stored as given; `validate` checks it against the values.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeSelectorRequirement {
    /// The label key that the selector applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    operator: Option<String>,

    /// Must be non-empty for `In` and `NotIn`, empty for `Exists` and
    /// `DoesNotExist`, and a single integer for `Gt` and `Lt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values: Option<Vec<String>>,
}

impl NodeSelectorRequirement {
    pub const SERIALIZED_NAME_KEY: &'static str = "key";
    pub const SERIALIZED_NAME_OPERATOR: &'static str = "operator";
    pub const SERIALIZED_NAME_VALUES: &'static str = "values";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_operator(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    pub fn with_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn add_value(mut self, value: impl Into<String>) -> Self {
        self.values.get_or_insert_with(Vec::new).push(value.into());
        self
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn set_key(&mut self, key: Option<String>) {
        self.key = key;
    }

    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    pub fn set_operator(&mut self, operator: Option<String>) {
        self.operator = operator;
    }

    pub fn values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    pub fn set_values(&mut self, values: Option<Vec<String>>) {
        self.values = values;
    }
}

impl fmt::Display for NodeSelectorRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class NodeSelectorRequirement {{")?;
        writeln!(f, "    {}: {}", Self::SERIALIZED_NAME_KEY, indented(self.key()))?;
        writeln!(
            f,
            "    {}: {}",
            Self::SERIALIZED_NAME_OPERATOR,
            indented(self.operator())
        )?;
        writeln!(
            f,
            "    {}: {}",
            Self::SERIALIZED_NAME_VALUES,
            indented_list(self.values())
        )?;
        write!(f, "}}")
    }
}
