//! Maps keyed by non-string types (seats) go over the wire as `[key, value]` pairs.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::hash::Hash;

pub fn serialize<K, V, S>(map: &HashMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
where
    K: Serialize + Clone,
    V: Serialize + Clone,
    S: Serializer,
{
    let vec: Vec<(K, V)> = map.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    vec.serialize(serializer)
}

pub fn deserialize<'de, K, V, D>(deserializer: D) -> Result<HashMap<K, V>, D::Error>
where
    K: Deserialize<'de> + Eq + Hash,
    V: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let vec: Vec<(K, V)> = Vec::deserialize(deserializer)?;
    Ok(vec.into_iter().collect())
}
