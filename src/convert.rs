//! Conversions to and from the `k8s-openapi` core/v1 types, for handing terms
//! to a `kube` client or reading them out of a `Pod`.

use k8s_openapi::api::core::v1 as corev1;
use thiserror::Error;

use crate::preference::{NodeSelectorRequirement, Preference};
use crate::preferred_scheduling_term::PreferredSchedulingTerm;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// A field that `k8s-openapi` models as required is absent.
    #[error("cannot convert {kind}: missing required field `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },
}

fn required<T>(value: Option<T>, kind: &'static str, field: &'static str) -> Result<T, ConvertError> {
    value.ok_or(ConvertError::MissingField { kind, field })
}

impl From<corev1::NodeSelectorRequirement> for NodeSelectorRequirement {
    fn from(requirement: corev1::NodeSelectorRequirement) -> Self {
        let mut converted = NodeSelectorRequirement::new()
            .with_key(requirement.key)
            .with_operator(requirement.operator);
        converted.set_values(requirement.values);
        converted
    }
}

impl TryFrom<NodeSelectorRequirement> for corev1::NodeSelectorRequirement {
    type Error = ConvertError;

    fn try_from(requirement: NodeSelectorRequirement) -> Result<Self, Self::Error> {
        const KIND: &str = "NodeSelectorRequirement";
        Ok(corev1::NodeSelectorRequirement {
            key: required(
                requirement.key().map(str::to_owned),
                KIND,
                NodeSelectorRequirement::SERIALIZED_NAME_KEY,
            )?,
            operator: required(
                requirement.operator().map(str::to_owned),
                KIND,
                NodeSelectorRequirement::SERIALIZED_NAME_OPERATOR,
            )?,
            values: requirement.values().map(<[String]>::to_vec),
        })
    }
}

fn from_core_list(list: Option<Vec<corev1::NodeSelectorRequirement>>) -> Option<Vec<NodeSelectorRequirement>> {
    list.map(|requirements| requirements.into_iter().map(Into::into).collect())
}

fn to_core_list(
    list: Option<&[NodeSelectorRequirement]>,
) -> Result<Option<Vec<corev1::NodeSelectorRequirement>>, ConvertError> {
    list.map(|requirements| {
        requirements
            .iter()
            .cloned()
            .map(corev1::NodeSelectorRequirement::try_from)
            .collect::<Result<Vec<_>, _>>()
    })
    .transpose()
}

impl From<corev1::NodeSelectorTerm> for Preference {
    fn from(term: corev1::NodeSelectorTerm) -> Self {
        let mut preference = Preference::new();
        preference.set_match_expressions(from_core_list(term.match_expressions));
        preference.set_match_fields(from_core_list(term.match_fields));
        preference
    }
}

impl TryFrom<Preference> for corev1::NodeSelectorTerm {
    type Error = ConvertError;

    fn try_from(preference: Preference) -> Result<Self, Self::Error> {
        Ok(corev1::NodeSelectorTerm {
            match_expressions: to_core_list(preference.match_expressions())?,
            match_fields: to_core_list(preference.match_fields())?,
        })
    }
}

impl From<corev1::PreferredSchedulingTerm> for PreferredSchedulingTerm {
    fn from(term: corev1::PreferredSchedulingTerm) -> Self {
        PreferredSchedulingTerm::new()
            .with_preference(term.preference.into())
            .with_weight(term.weight)
    }
}

impl TryFrom<PreferredSchedulingTerm> for corev1::PreferredSchedulingTerm {
    type Error = ConvertError;

    fn try_from(term: PreferredSchedulingTerm) -> Result<Self, Self::Error> {
        const KIND: &str = "PreferredSchedulingTerm";
        let weight = required(
            term.weight(),
            KIND,
            PreferredSchedulingTerm::SERIALIZED_NAME_WEIGHT,
        )?;
        let preference = required(
            term.preference().cloned(),
            KIND,
            PreferredSchedulingTerm::SERIALIZED_NAME_PREFERENCE,
        )?;
        Ok(corev1::PreferredSchedulingTerm {
            preference: preference.try_into()?,
            weight,
        })
    }
}
