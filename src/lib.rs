//! Typed bindings for the node-affinity preferred scheduling term of a
//! Function Mesh `Function` pod spec
//! (`spec.pod.affinity.nodeAffinity.preferredDuringSchedulingIgnoredDuringExecution`).

mod convert;
mod preference;
mod preferred_scheduling_term;
mod render;
mod schema;
mod validate;

pub use convert::ConvertError;
pub use preference::{NodeSelectorRequirement, Preference};
pub use preferred_scheduling_term::PreferredSchedulingTerm;
pub use schema::structural_schema;
pub use validate::{ValidationError, MAX_WEIGHT, MIN_WEIGHT};
