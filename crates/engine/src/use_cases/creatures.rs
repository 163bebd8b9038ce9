//! Creature aggregation use case.
//!
//! Turns roster entries into display-ready creature records. Every entry
//! yields exactly one record: directory failures degrade to the fallback
//! table or to a minimal error record, never to an error.

use std::sync::Arc;

use futures_util::future::join_all;
use zonedex_domain::{fallback_for, CreatureRecord, RosterEntry, SpriteUrls};

use crate::infrastructure::ports::CreatureDirectoryPort;

/// Aggregate roster entries with live directory attributes.
pub struct AggregateCreatures {
    directory: Arc<dyn CreatureDirectoryPort>,
    sprites: SpriteUrls,
}

impl AggregateCreatures {
    pub fn new(directory: Arc<dyn CreatureDirectoryPort>, sprites: SpriteUrls) -> Self {
        Self { directory, sprites }
    }

    /// Build the record for one roster entry.
    pub async fn aggregate(&self, entry: &RosterEntry) -> CreatureRecord {
        let attributes = match self.directory.fetch_creature(&entry.name).await {
            Ok(attributes) => attributes,
            Err(e) => return self.degrade(entry, &e.to_string()),
        };

        match attributes.species_url.as_deref() {
            Some(url) => {
                if let Err(e) = self.directory.check_species(url).await {
                    tracing::warn!(creature = %entry.name, error = %e, "Species lookup failed");
                }
            }
            None => tracing::debug!(creature = %entry.name, "No species link in directory response"),
        }

        CreatureRecord::from_attributes(attributes, entry, &self.sprites)
    }

    /// Build records for every entry concurrently, in roster order.
    ///
    /// Waits for all lookups; there are no partial results.
    pub async fn execute(&self, entries: Vec<&RosterEntry>) -> Vec<CreatureRecord> {
        join_all(entries.into_iter().map(|entry| self.aggregate(entry))).await
    }

    fn degrade(&self, entry: &RosterEntry, error: &str) -> CreatureRecord {
        match fallback_for(&entry.name) {
            Some(fallback) => {
                tracing::warn!(creature = %entry.name, error = %error, "Creature lookup failed, using fallback attributes");
                CreatureRecord::from_fallback(fallback, entry, &self.sprites)
            }
            None => {
                tracing::warn!(creature = %entry.name, error = %error, "Creature lookup failed");
                CreatureRecord::unavailable(entry, &self.sprites)
            }
        }
    }
}
