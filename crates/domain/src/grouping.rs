//! Grouping creature records by capture method.

use crate::entities::CreatureRecord;
use crate::value_objects::CaptureMethod;

/// Records sharing one capture method, in the order they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodGroup {
    pub method: CaptureMethod,
    pub records: Vec<CreatureRecord>,
}

/// Partition `records` by capture method.
///
/// Groups follow `CaptureMethod::display_order()`; methods with no records
/// are skipped. Methods outside that order are appended afterwards in the
/// order they first appear. Record order inside a group is never changed.
pub fn group_by_method(records: Vec<CreatureRecord>) -> Vec<MethodGroup> {
    let mut ordered: Vec<Vec<CreatureRecord>> =
        CaptureMethod::display_order().iter().map(|_| Vec::new()).collect();
    let mut unordered: Vec<MethodGroup> = Vec::new();

    for record in records {
        let method = record.method();
        match method.priority() {
            Some(position) => ordered[position].push(record),
            None => match unordered.iter_mut().find(|g| g.method == method) {
                Some(group) => group.records.push(record),
                None => {
                    tracing::debug!(
                        method = %method,
                        "Capture method outside the display order, appending as trailing group"
                    );
                    unordered.push(MethodGroup {
                        method,
                        records: vec![record],
                    });
                }
            },
        }
    }

    CaptureMethod::display_order()
        .into_iter()
        .zip(ordered)
        .filter(|(_, records)| !records.is_empty())
        .map(|(method, records)| MethodGroup { method, records })
        .chain(unordered)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::RosterEntry;
    use crate::value_objects::SpriteUrls;

    fn record(name: &str, method: Option<&str>) -> CreatureRecord {
        let mut entry = RosterEntry::new(name);
        entry.method = method.map(CaptureMethod::parse);
        CreatureRecord::unavailable(&entry, &SpriteUrls::default())
    }

    fn summary(groups: &[MethodGroup]) -> Vec<(String, Vec<String>)> {
        groups
            .iter()
            .map(|g| {
                (
                    g.method.as_str().to_string(),
                    g.records.iter().map(|r| r.name.clone()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn groups_follow_fixed_priority_not_input_order() {
        let groups = group_by_method(vec![
            record("wingull", Some("surf")),
            record("zigzagoon", Some("walk")),
            record("poochyena", Some("walk")),
        ]);

        assert_eq!(
            summary(&groups),
            vec![
                ("walk".to_string(), vec!["zigzagoon".to_string(), "poochyena".to_string()]),
                ("surf".to_string(), vec!["wingull".to_string()]),
            ]
        );
    }

    #[test]
    fn missing_method_defaults_to_walk() {
        let groups = group_by_method(vec![record("wurmple", None), record("treecko", Some("starter"))]);

        assert_eq!(groups[0].method, CaptureMethod::Starter);
        assert_eq!(groups[1].method, CaptureMethod::Walk);
        assert_eq!(groups[1].records[0].name, "wurmple");
    }

    #[test]
    fn blank_catalog_method_groups_as_walk() {
        let entry: RosterEntry = serde_json::from_str(
            r#"{"name":"zigzagoon","versions":["ruby"],"method":""}"#,
        )
        .expect("roster entry");
        let blank = CreatureRecord::unavailable(&entry, &SpriteUrls::default());

        let groups = group_by_method(vec![blank, record("wurmple", Some("walk"))]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].method, CaptureMethod::Walk);
        assert_eq!(groups[0].method.label(), "Tall Grass");
        assert_eq!(groups[0].records.len(), 2);
    }

    #[test]
    fn unordered_methods_trail_in_first_occurrence_order() {
        let groups = group_by_method(vec![
            record("geodude", Some("rock-smash")),
            record("deoxys", Some("event")),
            record("magikarp", Some("old-rod")),
            record("nosepass", Some("rock-smash")),
        ]);

        let methods: Vec<&str> = groups.iter().map(|g| g.method.as_str()).collect();
        assert_eq!(methods, vec!["old-rod", "rock-smash", "event"]);
        assert_eq!(groups[1].records.len(), 2);
    }

    #[test]
    fn no_records_means_no_groups() {
        assert!(group_by_method(Vec::new()).is_empty());
    }
}
