use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

use super::{BeatmapId, Modifier};
use crate::error::{Error, Result};

/// Field holding the calculator's per-map attributes.
pub const ATTRIBUTES_FIELD: &str = "attributes";
/// Field the loader writes the modifier tag into.
pub const MODS_FIELD: &str = "mods";

const MODIFIER_FIELD: &str = "modifier";
const BEATMAP_FIELD: &str = "beatmap";
const STAR_RATING_FIELD: &str = "star_rating";
const STRAINS_FIELD: &str = "strains";

pub type FlatRecord = Map<String, JsonValue>;

/// Merge the nested `attributes` object into the top level of a result entry.
///
/// Nested fields overwrite outer fields with the same name. An entry without an
/// `attributes` object keeps its outer fields, and a non-object `attributes`
/// value is passed through untouched.
pub fn flatten(record: &FlatRecord) -> FlatRecord {
    let nested = match record.get(ATTRIBUTES_FIELD) {
        Some(JsonValue::Object(nested)) => nested,
        _ => return record.clone(),
    };

    let mut flat: FlatRecord = record
        .iter()
        .filter(|(key, _)| key.as_str() != ATTRIBUTES_FIELD)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    for (key, value) in nested {
        flat.insert(key.clone(), value.clone());
    }

    flat
}

/// Stamp a flat record with the modifier of the file it came from.
pub fn tag_modifier(record: &mut FlatRecord, modifier: Modifier) {
    record.remove(MODIFIER_FIELD);
    record.insert(
        MODS_FIELD.to_string(),
        JsonValue::String(modifier.short_name().to_string()),
    );
}

/// One rated beatmap + modifier combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRecord {
    pub beatmap: BeatmapId,
    #[serde(rename = "mods")]
    pub modifier: Modifier,
    pub star_rating: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strains: Option<Vec<f64>>,
    /// Every other field of the flat record, unused by the comparison.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extra: FlatRecord,
}

impl ResultRecord {
    pub fn new(beatmap: impl Into<BeatmapId>, modifier: Modifier, star_rating: f64) -> Self {
        Self {
            beatmap: beatmap.into(),
            modifier,
            star_rating,
            strains: None,
            extra: Map::new(),
        }
    }

    pub fn with_strains(mut self, strains: Vec<f64>) -> Self {
        self.strains = Some(strains);
        self
    }

    pub fn key(&self) -> ResultKey {
        ResultKey {
            beatmap: self.beatmap.clone(),
            modifier: self.modifier,
        }
    }

    /// Project a tagged flat record onto the typed columns.
    ///
    /// `source` names the file (or document) for error messages.
    pub fn from_flat(mut flat: FlatRecord, modifier: Modifier, source: &str) -> Result<Self> {
        let beatmap_value = flat
            .remove(BEATMAP_FIELD)
            .ok_or_else(|| Error::malformed(source, "record has no 'beatmap' field"))?;
        let beatmap = BeatmapId::from_json(&beatmap_value).ok_or_else(|| {
            Error::malformed(source, format!("invalid beatmap identifier: {}", beatmap_value))
        })?;

        let star_rating = match flat.remove(STAR_RATING_FIELD) {
            Some(value) => value.as_f64().ok_or_else(|| {
                Error::malformed(
                    source,
                    format!("beatmap {}: 'star_rating' is not a number", beatmap),
                )
            })?,
            None => {
                return Err(Error::malformed(
                    source,
                    format!("beatmap {}: record has no 'star_rating' field", beatmap),
                ));
            }
        };

        let strains = match flat.remove(STRAINS_FIELD) {
            None | Some(JsonValue::Null) => None,
            Some(JsonValue::Array(values)) => Some(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        v.as_f64().ok_or_else(|| {
                            Error::malformed(
                                source,
                                format!("beatmap {}: strains[{}] is not a number", beatmap, i),
                            )
                        })
                    })
                    .collect::<Result<Vec<f64>>>()?,
            ),
            Some(_) => {
                return Err(Error::malformed(
                    source,
                    format!("beatmap {}: 'strains' is not an array", beatmap),
                ));
            }
        };

        flat.remove(MODS_FIELD);

        Ok(Self {
            beatmap,
            modifier,
            star_rating,
            strains,
            extra: flat,
        })
    }
}

/// Composite key every normalized table is indexed by.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ResultKey {
    pub beatmap: BeatmapId,
    #[serde(rename = "mods")]
    pub modifier: Modifier,
}

impl ResultKey {
    pub fn new(beatmap: impl Into<BeatmapId>, modifier: Modifier) -> Self {
        Self {
            beatmap: beatmap.into(),
            modifier,
        }
    }
}

impl std::fmt::Display for ResultKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.beatmap, self.modifier)
    }
}
