//! YAML encoding of configurations.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use yaml_rust_davvid::{Yaml, YamlEmitter};

/// Serializes a value to YAML through the yaml-rust emitter.
///
/// Going through the emitter rather than `serde_yaml::to_string` keeps rule
/// tuples as block sequences, which is how hand-written `.commitlintrc.yaml`
/// files lay them out.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    let serde_value = serde_yaml::to_value(data).context("Failed to serialize to serde value")?;
    let yaml_value = convert_serde_to_yaml_rust(&serde_value)?;

    let mut output = String::new();
    let mut emitter = YamlEmitter::new(&mut output);
    emitter.multiline_strings(true);
    emitter.dump(&yaml_value).context("Failed to emit YAML")?;

    output.push('\n');
    Ok(output)
}

fn convert_serde_to_yaml_rust(value: &serde_yaml::Value) -> Result<Yaml> {
    match value {
        serde_yaml::Value::Null => Ok(Yaml::Null),
        serde_yaml::Value::Bool(b) => Ok(Yaml::Boolean(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Yaml::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(Yaml::Real(f.to_string()))
            } else {
                Ok(Yaml::String(n.to_string()))
            }
        }
        serde_yaml::Value::String(s) => Ok(Yaml::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<_>> = seq.iter().map(convert_serde_to_yaml_rust).collect();
            Ok(Yaml::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut hash = yaml_rust_davvid::yaml::Hash::new();
            for (k, v) in map {
                hash.insert(convert_serde_to_yaml_rust(k)?, convert_serde_to_yaml_rust(v)?);
            }
            Ok(Yaml::Hash(hash))
        }
        serde_yaml::Value::Tagged(tagged) => convert_serde_to_yaml_rust(&tagged.value),
    }
}

/// Deserializes a value from YAML.
pub fn from_yaml<T: for<'de> Deserialize<'de>>(yaml: &str) -> Result<T> {
    serde_yaml::from_str(yaml).context("Failed to deserialize YAML")
}
