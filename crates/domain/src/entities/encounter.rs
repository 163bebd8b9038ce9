//! Encounter statistics and the duplicate-merging engine.
//!
//! A location reports many encounter slots per creature, one per table
//! entry, so the same (edition, method) pair repeats. `merge_encounters`
//! folds those into one record per pair.

use std::collections::HashMap;

/// Upper bound of an encounter chance, in percent.
pub const MAX_CHANCE: u32 = 100;

/// A single validated encounter slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterSlot {
    pub method: String,
    pub min_level: u32,
    pub max_level: u32,
    pub chance: u32,
}

impl EncounterSlot {
    /// Validate a slot from possibly-missing parts.
    ///
    /// Returns `None` when the method name, either level bound, or the
    /// chance is missing. Reversed level bounds are put back in order.
    pub fn from_parts(
        method: Option<String>,
        min_level: Option<u32>,
        max_level: Option<u32>,
        chance: Option<u32>,
    ) -> Option<Self> {
        let method = method.filter(|m| !m.is_empty())?;
        let (min_level, max_level) = (min_level?, max_level?);
        Some(Self {
            method,
            min_level: min_level.min(max_level),
            max_level: min_level.max(max_level),
            chance: chance?,
        })
    }
}

/// Slots reported for one edition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEncounters {
    pub version: String,
    pub slots: Vec<EncounterSlot>,
}

/// Everything a location reports for one creature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatureEncounters {
    pub creature: String,
    pub versions: Vec<VersionEncounters>,
}

/// A flattened encounter tuple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncounterRecord {
    pub version: String,
    pub method: String,
    pub min_level: u32,
    pub max_level: u32,
    pub chance: u32,
}

/// One record per (edition, method) after merging.
///
/// Invariants: `min_level <= max_level` and `chance <= MAX_CHANCE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedEncounter {
    pub version: String,
    pub method: String,
    pub min_level: u32,
    pub max_level: u32,
    pub chance: u32,
}

impl MergedEncounter {
    fn seed(record: EncounterRecord) -> Self {
        Self {
            version: record.version,
            method: record.method,
            min_level: record.min_level.min(record.max_level),
            max_level: record.min_level.max(record.max_level),
            chance: record.chance.min(MAX_CHANCE),
        }
    }

    fn absorb(&mut self, record: &EncounterRecord) {
        self.chance = self.chance.saturating_add(record.chance).min(MAX_CHANCE);
        self.min_level = self.min_level.min(record.min_level);
        self.max_level = self.max_level.max(record.max_level);
    }

    /// `"7"` when both bounds agree, `"5-8"` otherwise.
    pub fn level_label(&self) -> String {
        if self.min_level == self.max_level {
            self.min_level.to_string()
        } else {
            format!("{}-{}", self.min_level, self.max_level)
        }
    }
}

/// Flatten the slots reported for `creature` into encounter tuples.
pub fn flatten_encounters(payload: &[CreatureEncounters], creature: &str) -> Vec<EncounterRecord> {
    payload
        .iter()
        .filter(|entry| entry.creature == creature)
        .flat_map(|entry| entry.versions.iter())
        .flat_map(|version| {
            version.slots.iter().map(move |slot| EncounterRecord {
                version: version.version.clone(),
                method: slot.method.clone(),
                min_level: slot.min_level,
                max_level: slot.max_level,
                chance: slot.chance,
            })
        })
        .collect()
}

/// Merge tuples sharing an (edition, method) key.
///
/// The first tuple of a key seeds the group; later ones add their chance
/// (capped at `MAX_CHANCE`) and widen the level bounds. Groups come out in
/// first-occurrence order.
pub fn merge_records(records: impl IntoIterator<Item = EncounterRecord>) -> Vec<MergedEncounter> {
    let mut merged: Vec<MergedEncounter> = Vec::new();
    let mut index: HashMap<(String, String), usize> = HashMap::new();

    for record in records {
        let key = (record.version.clone(), record.method.clone());
        match index.get(&key) {
            Some(&position) => merged[position].absorb(&record),
            None => {
                index.insert(key, merged.len());
                merged.push(MergedEncounter::seed(record));
            }
        }
    }

    merged
}

/// Merged encounter records for `creature` at a location.
///
/// An empty payload, or one without the creature, yields an empty list.
pub fn merge_encounters(payload: &[CreatureEncounters], creature: &str) -> Vec<MergedEncounter> {
    merge_records(flatten_encounters(payload, creature))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(method: &str, min: u32, max: u32, chance: u32) -> EncounterSlot {
        EncounterSlot {
            method: method.to_string(),
            min_level: min,
            max_level: max,
            chance,
        }
    }

    fn creature(name: &str, versions: Vec<(&str, Vec<EncounterSlot>)>) -> CreatureEncounters {
        CreatureEncounters {
            creature: name.to_string(),
            versions: versions
                .into_iter()
                .map(|(version, slots)| VersionEncounters {
                    version: version.to_string(),
                    slots,
                })
                .collect(),
        }
    }

    #[test]
    fn sums_chances_for_the_same_version_and_method() {
        let payload = vec![creature(
            "zigzagoon",
            vec![("ruby", vec![slot("walk", 2, 2, 30), slot("walk", 3, 3, 40)])],
        )];

        let merged = merge_encounters(&payload, "zigzagoon");

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].chance, 70);
        assert_eq!(merged[0].min_level, 2);
        assert_eq!(merged[0].max_level, 3);
    }

    #[test]
    fn caps_summed_chance_at_one_hundred() {
        let payload = vec![creature(
            "magikarp",
            vec![(
                "emerald",
                vec![
                    slot("old-rod", 5, 10, 70),
                    slot("old-rod", 5, 10, 30),
                    slot("old-rod", 5, 10, 30),
                ],
            )],
        )];

        let merged = merge_encounters(&payload, "magikarp");

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].chance, 100);
    }

    #[test]
    fn single_slot_chance_is_capped_on_seed() {
        let merged = merge_records(vec![EncounterRecord {
            version: "ruby".to_string(),
            method: "gift".to_string(),
            min_level: 5,
            max_level: 5,
            chance: 250,
        }]);

        assert_eq!(merged[0].chance, MAX_CHANCE);
    }

    #[test]
    fn keeps_versions_and_methods_apart_in_first_occurrence_order() {
        let payload = vec![creature(
            "tentacool",
            vec![
                ("sapphire", vec![slot("surf", 5, 35, 60), slot("good-rod", 10, 30, 20)]),
                ("ruby", vec![slot("surf", 5, 35, 60)]),
                ("sapphire", vec![slot("surf", 30, 35, 30)]),
            ],
        )];

        let merged = merge_encounters(&payload, "tentacool");
        let keys: Vec<(&str, &str)> = merged
            .iter()
            .map(|m| (m.version.as_str(), m.method.as_str()))
            .collect();

        assert_eq!(
            keys,
            vec![("sapphire", "surf"), ("sapphire", "good-rod"), ("ruby", "surf")]
        );
        assert_eq!(merged[0].chance, 90);
        assert_eq!(merged[0].min_level, 5);
        assert_eq!(merged[0].max_level, 35);
    }

    #[test]
    fn ignores_other_creatures() {
        let payload = vec![
            creature("wingull", vec![("ruby", vec![slot("surf", 10, 30, 35)])]),
            creature("pelipper", vec![("ruby", vec![slot("surf", 25, 30, 5)])]),
        ];

        let merged = merge_encounters(&payload, "pelipper");

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].chance, 5);
    }

    #[test]
    fn missing_creature_or_empty_payload_yields_nothing() {
        let payload = vec![creature("wingull", vec![("ruby", vec![slot("surf", 10, 30, 35)])])];

        assert!(merge_encounters(&payload, "kyogre").is_empty());
        assert!(merge_encounters(&[], "wingull").is_empty());
    }

    #[test]
    fn merged_records_hold_their_invariants() {
        let payload = vec![creature(
            "wurmple",
            vec![(
                "emerald",
                vec![
                    slot("walk", 3, 3, 45),
                    slot("walk", 2, 4, 45),
                    slot("walk", 5, 5, 45),
                ],
            )],
        )];

        for merged in merge_encounters(&payload, "wurmple") {
            assert!(merged.min_level <= merged.max_level);
            assert!(merged.chance <= MAX_CHANCE);
        }
    }

    #[test]
    fn slot_validation_drops_incomplete_parts() {
        assert!(EncounterSlot::from_parts(None, Some(1), Some(2), Some(10)).is_none());
        assert!(EncounterSlot::from_parts(Some(String::new()), Some(1), Some(2), Some(10)).is_none());
        assert!(EncounterSlot::from_parts(Some("walk".into()), None, Some(2), Some(10)).is_none());
        assert!(EncounterSlot::from_parts(Some("walk".into()), Some(1), None, Some(10)).is_none());
        assert!(EncounterSlot::from_parts(Some("walk".into()), Some(1), Some(2), None).is_none());
    }

    #[test]
    fn slot_validation_orders_reversed_levels() {
        let slot = EncounterSlot::from_parts(Some("walk".into()), Some(9), Some(4), Some(10))
            .expect("complete slot");

        assert_eq!((slot.min_level, slot.max_level), (4, 9));
    }

    #[test]
    fn level_label_collapses_equal_bounds() {
        let merged = merge_records(vec![
            EncounterRecord {
                version: "ruby".into(),
                method: "walk".into(),
                min_level: 4,
                max_level: 4,
                chance: 20,
            },
            EncounterRecord {
                version: "emerald".into(),
                method: "walk".into(),
                min_level: 3,
                max_level: 5,
                chance: 20,
            },
        ]);

        assert_eq!(merged[0].level_label(), "4");
        assert_eq!(merged[1].level_label(), "3-5");
    }
}
