use function_affinity::structural_schema;

/// Prints the structural schema of a preferred scheduling term as YAML,
/// ready to paste into a CRD's `openAPIV3Schema`.
fn main() -> anyhow::Result<()> {
    print!("{}", serde_yaml::to_string(&structural_schema())?);
    Ok(())
}
