use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Identifier of a beatmap as it appears in a result file.
///
/// The calculator emits either numeric online ids or file names, so both are kept
/// verbatim. Numeric ids order before names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BeatmapId {
    Id(i64),
    Name(String),
}

impl BeatmapId {
    /// Read an identifier from a JSON value.
    ///
    /// Integral floats (`123.0`) inside the `i64` range are accepted as ids. Unsigned
    /// integers above `i64::MAX` are kept verbatim as names so they cannot collide
    /// with a real id.
    pub fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Number(n) => {
                if let Some(id) = n.as_i64() {
                    return Some(Self::Id(id));
                }
                if n.is_u64() {
                    return Some(Self::Name(n.to_string()));
                }
                let f = n.as_f64()?;
                // i64::MAX as f64 rounds up to 2^63, which is out of range.
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
                    Some(Self::Id(f as i64))
                } else {
                    None
                }
            }
            JsonValue::String(s) => Some(Self::Name(s.clone())),
            _ => None,
        }
    }

    /// Parse a user-supplied identifier; anything numeric becomes an id.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        match value.parse::<i64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Name(value.to_string()),
        }
    }
}

impl From<i64> for BeatmapId {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for BeatmapId {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl std::fmt::Display for BeatmapId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{}", id),
            Self::Name(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_integer_and_string() {
        assert_eq!(BeatmapId::from_json(&json!(100)), Some(BeatmapId::Id(100)));
        assert_eq!(
            BeatmapId::from_json(&json!("map.osu")),
            Some(BeatmapId::Name("map.osu".to_string()))
        );
    }

    #[test]
    fn test_from_json_integral_float() {
        assert_eq!(BeatmapId::from_json(&json!(42.0)), Some(BeatmapId::Id(42)));
        assert_eq!(BeatmapId::from_json(&json!(42.5)), None);
    }

    #[test]
    fn test_from_json_values_beyond_i64() {
        let above_max = serde_json::from_str::<JsonValue>("9223372036854775808").unwrap();
        assert_eq!(
            BeatmapId::from_json(&above_max),
            Some(BeatmapId::Name("9223372036854775808".to_string()))
        );
        assert_ne!(BeatmapId::from_json(&above_max), Some(BeatmapId::Id(i64::MAX)));

        assert_eq!(BeatmapId::from_json(&json!(9.3e18)), None);
        assert_eq!(BeatmapId::from_json(&json!(-1.0e19)), None);
        assert_eq!(
            BeatmapId::from_json(&json!(i64::MAX)),
            Some(BeatmapId::Id(i64::MAX))
        );
    }

    #[test]
    fn test_from_json_rejects_other_types() {
        assert_eq!(BeatmapId::from_json(&json!(null)), None);
        assert_eq!(BeatmapId::from_json(&json!([1])), None);
        assert_eq!(BeatmapId::from_json(&json!(true)), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(BeatmapId::parse("3469849"), BeatmapId::Id(3469849));
        assert_eq!(BeatmapId::parse("abc"), BeatmapId::Name("abc".to_string()));
    }

    #[test]
    fn test_ids_order_before_names() {
        assert!(BeatmapId::Id(i64::MAX) < BeatmapId::Name(String::new()));
        assert!(BeatmapId::Id(1) < BeatmapId::Id(2));
    }

    #[test]
    fn test_serialize_untagged() {
        assert_eq!(serde_json::to_string(&BeatmapId::Id(7)).unwrap(), "7");
        assert_eq!(
            serde_json::to_string(&BeatmapId::from("x")).unwrap(),
            "\"x\""
        );
    }
}
