use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::preference::Preference;
use crate::render::indented;

/// An empty preferred scheduling term matches all objects with implicit
/// weight 0 (i.e. it's a no-op). A null preferred scheduling term matches no
/// objects (i.e. is also a no-op).
///
/// Both fields are required by the schema but stored as optional, so a
/// document missing either key round-trips unchanged. Setters never validate;
/// see [`PreferredSchedulingTerm::validate`] for the schema's constraints.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(
    description = "An empty preferred scheduling term matches all objects with implicit weight 0 (i.e. it's a no-op). A null preferred scheduling term matches no objects (i.e. is also a no-op)."
)]
pub struct PreferredSchedulingTerm {
    /// A node selector term, associated with the corresponding weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preference: Option<Preference>,

    /// Weight associated with matching the corresponding node selector term,
    /// in the range 1-100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    weight: Option<i32>,
}

impl PreferredSchedulingTerm {
    pub const SERIALIZED_NAME_PREFERENCE: &'static str = "preference";
    pub const SERIALIZED_NAME_WEIGHT: &'static str = "weight";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.preference = Some(preference);
        self
    }

    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn preference(&self) -> Option<&Preference> {
        self.preference.as_ref()
    }

    pub fn preference_mut(&mut self) -> Option<&mut Preference> {
        self.preference.as_mut()
    }

    pub fn set_preference(&mut self, preference: Option<Preference>) {
        self.preference = preference;
    }

    pub fn weight(&self) -> Option<i32> {
        self.weight
    }

    pub fn set_weight(&mut self, weight: Option<i32>) {
        self.weight = weight;
    }
}

impl fmt::Display for PreferredSchedulingTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "class PreferredSchedulingTerm {{")?;
        writeln!(
            f,
            "    {}: {}",
            Self::SERIALIZED_NAME_PREFERENCE,
            indented(self.preference())
        )?;
        writeln!(
            f,
            "    {}: {}",
            Self::SERIALIZED_NAME_WEIGHT,
            indented(self.weight.as_ref())
        )?;
        write!(f, "}}")
    }
}
