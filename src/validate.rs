//! Schema constraints for scheduling terms.
//!
//! The containers accept any value; callers that want the API server's view
//! of a term run these checks explicitly.

use thiserror::Error;

use crate::preference::{NodeSelectorRequirement, Preference};
use crate::preferred_scheduling_term::PreferredSchedulingTerm;

pub const MIN_WEIGHT: i32 = 1;
pub const MAX_WEIGHT: i32 = 100;

/// A scheduling term that violates its schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("weight {0} is outside the range 1-100")]
    WeightOutOfRange(i32),

    #[error("unknown node selector operator `{0}`")]
    UnknownOperator(String),

    #[error("operator `{operator}` requires {expected}")]
    InvalidValues {
        operator: String,
        expected: &'static str,
    },

    #[error("operator `{operator}` requires an integer value, got `{value}`")]
    NotAnInteger { operator: String, value: String },

    #[error("{field}[{index}]: {source}")]
    Requirement {
        field: &'static str,
        index: usize,
        #[source]
        source: Box<ValidationError>,
    },
}

impl PreferredSchedulingTerm {
    /// Checks that both fields are present, the weight is within 1-100 and
    /// every requirement of the preference is well-formed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let preference = self
            .preference()
            .ok_or(ValidationError::MissingField(Self::SERIALIZED_NAME_PREFERENCE))?;
        let weight = self
            .weight()
            .ok_or(ValidationError::MissingField(Self::SERIALIZED_NAME_WEIGHT))?;
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(ValidationError::WeightOutOfRange(weight));
        }
        preference.validate()
    }
}

impl Preference {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_all(
            Self::SERIALIZED_NAME_MATCH_EXPRESSIONS,
            self.match_expressions(),
        )?;
        validate_all(Self::SERIALIZED_NAME_MATCH_FIELDS, self.match_fields())
    }
}

fn validate_all(
    field: &'static str,
    requirements: Option<&[NodeSelectorRequirement]>,
) -> Result<(), ValidationError> {
    for (index, requirement) in requirements.unwrap_or_default().iter().enumerate() {
        requirement
            .validate()
            .map_err(|source| ValidationError::Requirement {
                field,
                index,
                source: Box::new(source),
            })?;
    }
    Ok(())
}

impl NodeSelectorRequirement {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key().is_none() {
            return Err(ValidationError::MissingField(Self::SERIALIZED_NAME_KEY));
        }
        let operator = self
            .operator()
            .ok_or(ValidationError::MissingField(Self::SERIALIZED_NAME_OPERATOR))?;
        let values = self.values().unwrap_or_default();
        let invalid = |expected| ValidationError::InvalidValues {
            operator: operator.to_owned(),
            expected,
        };
        match operator {
            "In" | "NotIn" if values.is_empty() => Err(invalid("a non-empty values list")),
            "In" | "NotIn" => Ok(()),
            "Exists" | "DoesNotExist" if !values.is_empty() => Err(invalid("no values")),
            "Exists" | "DoesNotExist" => Ok(()),
            "Gt" | "Lt" => match values {
                [value] => value.parse::<i64>().map(|_| ()).map_err(|_| {
                    ValidationError::NotAnInteger {
                        operator: operator.to_owned(),
                        value: value.clone(),
                    }
                }),
                _ => Err(invalid("exactly one value")),
            },
            other => Err(ValidationError::UnknownOperator(other.to_owned())),
        }
    }
}
