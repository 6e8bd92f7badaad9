use std::io::Read;
use std::{env, fs, io};

use anyhow::{bail, Context};
use function_affinity::PreferredSchedulingTerm;
use serde_yaml::Value;
use tracing::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let (source, input) = match env::args().nth(1) {
        Some(path) => {
            let input = fs::read_to_string(&path).with_context(|| format!("reading {}", path))?;
            (path, input)
        }
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("reading stdin")?;
            ("<stdin>".to_owned(), input)
        }
    };

    let terms = parse(&input).with_context(|| format!("decoding {}", source))?;
    info!("decoded {} scheduling term(s) from {}", terms.len(), source);

    for (i, term) in terms.iter().enumerate() {
        match term.validate() {
            Ok(()) => debug!("term {} is valid", i),
            Err(err) => warn!("term {}: {}", i, err),
        }
        println!("{}", term);
    }
    Ok(())
}

/// Decodes YAML or JSON holding either one scheduling term or a list of them,
/// as found under `preferredDuringSchedulingIgnoredDuringExecution`. JSON
/// documents are valid YAML.
fn parse(input: &str) -> anyhow::Result<Vec<PreferredSchedulingTerm>> {
    let document: Value = serde_yaml::from_str(input)?;
    let is_list = match &document {
        Value::Sequence(_) => true,
        Value::Mapping(map) => {
            let known = [
                PreferredSchedulingTerm::SERIALIZED_NAME_PREFERENCE,
                PreferredSchedulingTerm::SERIALIZED_NAME_WEIGHT,
            ];
            if !known.iter().any(|key| map.contains_key(&Value::from(*key))) {
                bail!("expected a scheduling term or a list of them, found a mapping without `preference` or `weight`");
            }
            false
        }
        _ => bail!("expected a scheduling term or a list of them"),
    };

    if is_list {
        serde_yaml::from_value(document).context("decoding list of scheduling terms")
    } else {
        let term: PreferredSchedulingTerm = serde_yaml::from_value(document).context("decoding scheduling term")?;
        Ok(vec![term])
    }
}
