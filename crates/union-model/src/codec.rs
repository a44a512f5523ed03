//! Shared split/join plumbing for the delimited identifier format.

use crate::blockchain::Blockchain;
use crate::errors::IdParseError;

/// Delimiter separating identifier segments.
pub(crate) const DELIMITER: char = ':';

/// Splits `raw` into exactly `arity` segments and parses the leading
/// blockchain tag.
///
/// The split is bounded left-to-right, so the final segment keeps any extra
/// delimiters; variants whose last component is free-form accept structured
/// text there. Too few segments (including the empty string) fail with
/// [`IdParseError::Malformed`].
pub(crate) fn split_tagged(
    raw: &str,
    arity: usize,
) -> Result<(Blockchain, Vec<&str>), IdParseError> {
    let segments: Vec<&str> = raw.splitn(arity, DELIMITER).collect();
    if segments.len() < arity {
        return Err(IdParseError::Malformed {
            value: raw.to_string(),
            expected_segments: arity,
        });
    }
    let blockchain: Blockchain = segments[0].parse()?;
    Ok((blockchain, segments[1..].to_vec()))
}

/// Generates the JSON-string wire form for a type with `Display` + `FromStr`.
macro_rules! string_wire {
    ($name:ident) => {
        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use string_wire;
