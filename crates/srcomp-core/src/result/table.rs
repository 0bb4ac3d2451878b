use std::collections::BTreeMap;

use tracing::warn;

use super::{BeatmapId, ResultKey, ResultRecord};

/// All results of one variant, indexed by `(beatmap, modifier)`.
///
/// Keys are unique. When a key is inserted twice the later record replaces the
/// earlier one and the key is remembered in [`NormalizedTable::duplicates`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedTable {
    name: String,
    records: BTreeMap<ResultKey, ResultRecord>,
    duplicates: Vec<ResultKey>,
}

impl NormalizedTable {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Build a table from records in load order.
    pub fn from_records(
        name: impl Into<String>,
        records: impl IntoIterator<Item = ResultRecord>,
    ) -> Self {
        let mut table = Self::new(name);
        for record in records {
            table.insert(record);
        }
        table
    }

    /// Variant name, used for labelling and log messages.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert a record, replacing any record with the same key.
    ///
    /// Returns the replaced record.
    pub fn insert(&mut self, record: ResultRecord) -> Option<ResultRecord> {
        let key = record.key();
        let replaced = self.records.insert(key.clone(), record);
        if replaced.is_some() {
            warn!(
                "Duplicate result for {} in variant '{}', keeping the later record",
                key, self.name
            );
            self.duplicates.push(key);
        }
        replaced
    }

    pub fn get(&self, key: &ResultKey) -> Option<&ResultRecord> {
        self.records.get(key)
    }

    pub fn star_rating(&self, key: &ResultKey) -> Option<f64> {
        self.records.get(key).map(|r| r.star_rating)
    }

    pub fn strains(&self, key: &ResultKey) -> Option<&[f64]> {
        self.records.get(key).and_then(|r| r.strains.as_deref())
    }

    pub fn contains_key(&self, key: &ResultKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys in ascending `(beatmap, modifier)` order.
    pub fn keys(&self) -> impl Iterator<Item = &ResultKey> {
        self.records.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResultKey, &ResultRecord)> {
        self.records.iter()
    }

    /// Distinct beatmaps in the table, in key order.
    pub fn beatmaps(&self) -> Vec<&BeatmapId> {
        let mut beatmaps: Vec<&BeatmapId> = self.records.keys().map(|k| &k.beatmap).collect();
        beatmaps.dedup();
        beatmaps
    }

    /// Find the beatmap a user-typed identifier refers to.
    ///
    /// An exact match of the parsed identifier wins; otherwise a beatmap whose
    /// displayed form equals the query is returned, so `"3469849"` finds a map
    /// stored under a string id as well as a numeric one.
    pub fn find_beatmap(&self, query: &str) -> Option<&BeatmapId> {
        let query = query.trim();
        let parsed = BeatmapId::parse(query);
        let mut by_display = None;

        for key in self.records.keys() {
            if key.beatmap == parsed {
                return Some(&key.beatmap);
            }
            if by_display.is_none() && key.beatmap.to_string() == query {
                by_display = Some(&key.beatmap);
            }
        }
        by_display
    }

    /// Keys that were seen more than once while loading, in the order they were replaced.
    pub fn duplicates(&self) -> &[ResultKey] {
        &self.duplicates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::Modifier;

    #[test]
    fn test_insert_and_get() {
        let mut table = NormalizedTable::new("master");
        table.insert(ResultRecord::new(100, Modifier::NoMod, 3.0));

        let key = ResultKey::new(100, Modifier::NoMod);
        assert_eq!(table.star_rating(&key), Some(3.0));
        assert_eq!(table.len(), 1);
        assert!(table.duplicates().is_empty());
    }

    #[test]
    fn test_same_beatmap_different_modifier_are_distinct() {
        let table = NormalizedTable::from_records(
            "master",
            [
                ResultRecord::new(100, Modifier::NoMod, 3.0),
                ResultRecord::new(100, Modifier::DoubleTime, 4.2),
            ],
        );
        assert_eq!(table.len(), 2);
        assert!(table.duplicates().is_empty());
        assert_eq!(table.beatmaps(), vec![&BeatmapId::Id(100)]);
    }

    #[test]
    fn test_duplicate_key_last_wins_and_is_recorded() {
        let mut table = NormalizedTable::new("master");
        assert!(table.insert(ResultRecord::new(100, Modifier::NoMod, 3.0)).is_none());
        let replaced = table.insert(ResultRecord::new(100, Modifier::NoMod, 3.7));

        let key = ResultKey::new(100, Modifier::NoMod);
        assert_eq!(replaced.map(|r| r.star_rating), Some(3.0));
        assert_eq!(table.star_rating(&key), Some(3.7));
        assert_eq!(table.len(), 1);
        assert_eq!(table.duplicates(), &[key]);
    }

    #[test]
    fn test_keys_are_ordered() {
        let table = NormalizedTable::from_records(
            "master",
            [
                ResultRecord::new(200, Modifier::NoMod, 1.0),
                ResultRecord::new(100, Modifier::HalfTime, 1.0),
                ResultRecord::new(100, Modifier::NoMod, 1.0),
            ],
        );
        let keys: Vec<String> = table.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["100 [NT]", "100 [HT]", "200 [NT]"]);
    }

    #[test]
    fn test_find_beatmap_numeric_and_string_ids() {
        let table = NormalizedTable::from_records(
            "master",
            [
                ResultRecord::new(100, Modifier::NoMod, 1.0),
                ResultRecord::new(BeatmapId::from("3469849"), Modifier::NoMod, 2.0),
                ResultRecord::new(BeatmapId::from("map.osu"), Modifier::NoMod, 3.0),
            ],
        );

        assert_eq!(table.find_beatmap("100"), Some(&BeatmapId::Id(100)));
        assert_eq!(
            table.find_beatmap("3469849"),
            Some(&BeatmapId::Name("3469849".to_string()))
        );
        assert_eq!(
            table.find_beatmap(" map.osu "),
            Some(&BeatmapId::Name("map.osu".to_string()))
        );
        assert_eq!(table.find_beatmap("404"), None);
    }

    #[test]
    fn test_find_beatmap_prefers_exact_id() {
        let table = NormalizedTable::from_records(
            "master",
            [
                ResultRecord::new(BeatmapId::from("7"), Modifier::NoMod, 1.0),
                ResultRecord::new(7, Modifier::DoubleTime, 2.0),
            ],
        );
        assert_eq!(table.find_beatmap("7"), Some(&BeatmapId::Id(7)));
    }

    #[test]
    fn test_strains_lookup() {
        let table = NormalizedTable::from_records(
            "master",
            [ResultRecord::new(1, Modifier::NoMod, 1.0).with_strains(vec![0.5, 1.5])],
        );
        assert_eq!(
            table.strains(&ResultKey::new(1, Modifier::NoMod)),
            Some(&[0.5, 1.5][..])
        );
        assert_eq!(table.strains(&ResultKey::new(1, Modifier::DoubleTime)), None);
    }
}
