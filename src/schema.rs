//! Structural OpenAPI v3 schema for embedding a scheduling term in a CRD.

use schemars::gen::SchemaSettings;
use schemars::schema::RootSchema;

use crate::preferred_scheduling_term::PreferredSchedulingTerm;

/// Generates the schema of [`PreferredSchedulingTerm`] with the settings
/// kube uses for `CustomResource` schemas: OpenAPI v3 `nullable` instead of
/// `null` types, subschemas inlined rather than referenced through
/// `definitions`, and no `$schema` key.
///
/// Both keys are marked `required`, even though the Rust type stores them as
/// optional.
pub fn structural_schema() -> RootSchema {
    let generator = SchemaSettings::openapi3()
        .with(|s| {
            s.inline_subschemas = true;
            s.meta_schema = None;
        })
        .into_generator();
    let mut root = generator.into_root_schema_for::<PreferredSchedulingTerm>();
    let required = &mut root.schema.object().required;
    required.insert(PreferredSchedulingTerm::SERIALIZED_NAME_PREFERENCE.to_owned());
    required.insert(PreferredSchedulingTerm::SERIALIZED_NAME_WEIGHT.to_owned());
    root
}
