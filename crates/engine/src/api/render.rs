//! Text rendering of catalog views.
//!
//! Produces the overview, zone and creature detail screens as plain text.
//! When writing to a terminal, type badges are coloured with the catalog's
//! type colours; the theme picks foreground or background colouring.

use zonedex_domain::{
    CreatureRecord, MergedEncounter, SpeciesDetail, Theme, Zone, ZoneCatalog, DEFAULT_TYPE_COLOR,
};

use crate::use_cases::{CreatureDetail, ZoneView};

/// Append a formatted line to a `String` buffer.
macro_rules! push_line {
    ($out:expr, $($arg:tt)*) => {{
        $out.push_str(&format!($($arg)*));
        $out.push('\n');
    }};
}

/// Append formatted text to a `String` buffer.
macro_rules! push_text {
    ($out:expr, $($arg:tt)*) => {
        $out.push_str(&format!($($arg)*))
    };
}

/// Rarity shown when a roster entry has none.
const DEFAULT_RARITY: &str = "common";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Plain,
    Ansi(Theme),
}

pub struct Renderer<'a> {
    catalog: &'a ZoneCatalog,
    style: Style,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a ZoneCatalog, style: Style) -> Self {
        Self { catalog, style }
    }

    /// Persistent error shown in place of the catalog.
    pub fn catalog_error(&self, message: &str) -> String {
        format!("Error loading zone data: {message}\n")
    }

    pub fn zone_not_found(&self, zone_id: &str) -> String {
        format!("Zone not found: {zone_id}\n")
    }

    pub fn overview(&self, zones: &[Zone], zone_type: &str) -> String {
        let mut out = String::new();
        push_line!(out, "Zones ({zone_type}): {}", zones.len());
        if zones.is_empty() {
            out.push_str("  No zones match this filter\n");
            return out;
        }
        for zone in zones {
            let marker = if zone.is_town { " [town]" } else { "" };
            push_text!(out, "  {:<20} {}{}", zone.id.as_str(), zone.name, marker);
            if zone.shows_creatures() {
                push_text!(out, " ({} creatures)", zone.roster_len());
            }
            out.push('\n');
        }
        let types = self.catalog.zone_types();
        if !types.is_empty() {
            push_line!(out, "Types: all, {}", types.join(", "));
        }
        out
    }

    pub fn zone(&self, view: &ZoneView) -> String {
        let zone = &view.zone;
        let mut out = String::new();

        push_line!(out, "{}", zone.name);
        push_line!(out, "{}", "=".repeat(zone.name.chars().count()));
        if !zone.description.is_empty() {
            push_line!(out, "{}", zone.description);
        }
        push_line!(out, "Type: {}", zone.zone_type);
        if !zone.connections.is_empty() {
            let connections: Vec<&str> = zone.connections.iter().map(|c| c.as_str()).collect();
            push_line!(out, "Connections: {}", connections.join(", "));
        }
        if let Some(image) = &zone.image {
            push_line!(out, "Image: {image}");
        }
        if zone.is_town {
            out.push_str("Town\n");
        }
        let nested: Vec<&str> = zone.nested_groups().iter().map(|a| a.name.as_str()).collect();
        if !nested.is_empty() {
            push_line!(out, "Areas: {}", nested.join(", "));
        }

        if !zone.shows_creatures() {
            return out;
        }

        push_line!(
            out,
            "\nCreatures found here: {} (version: {})",
            zone.roster_len(),
            view.version
        );

        if view.groups.is_empty() {
            out.push_str("No creatures available for this version\n");
            return out;
        }

        for group in &view.groups {
            push_line!(out, "\n== {} ==", group.method.label());
            for record in &group.records {
                out.push_str(&self.creature_card(record));
            }
        }
        out
    }

    fn creature_card(&self, record: &CreatureRecord) -> String {
        let mut out = String::new();
        let badges: Vec<String> = record.types.iter().map(|t| self.type_badge(t)).collect();

        push_text!(out, "  #{:<4} {}", record.id, record.display_name);
        if !badges.is_empty() {
            push_text!(out, "  {}", badges.join(" "));
        }
        if !record.error {
            push_text!(out, "  {:.1} m  {:.1} kg", record.height_m, record.weight_kg);
        }
        if record.entry.is_starter {
            out.push_str("  [starter]");
        }
        out.push('\n');

        let entry = &record.entry;
        let mut details = vec![
            format!(
                "rarity: {}",
                entry.rarity.as_deref().unwrap_or(DEFAULT_RARITY)
            ),
            format!("method: {}", record.method().label()),
        ];
        if let Some(levels) = &entry.level_range {
            details.push(format!("levels: {levels}"));
        }
        if let Some(rate) = &entry.encounter_rate {
            details.push(format!("rate: {rate}"));
        }
        push_line!(out, "        {}", details.join(" | "));
        if let Some(note) = &entry.note {
            push_line!(out, "        note: {note}");
        }
        out
    }

    pub fn detail(&self, detail: &CreatureDetail) -> String {
        let mut out = String::new();
        let record = &detail.record;

        push_line!(out, "{} #{}", record.display_name, record.id);
        if !record.abilities.is_empty() {
            push_line!(out, "Abilities: {}", record.abilities.join(", "));
        }
        if let Some(exp) = record.base_experience {
            push_line!(out, "Base experience: {exp}");
        }
        for stat in &record.stats {
            push_line!(out, "  {:<16} {}", stat.name, stat.base_stat);
        }

        out.push_str("\nEncounters\n");
        out.push_str(&self.encounter_table(&detail.encounters));

        out.push_str("\nSpecies\n");
        out.push_str(&species_lines(&detail.species));
        out
    }

    fn encounter_table(&self, encounters: &[MergedEncounter]) -> String {
        if encounters.is_empty() {
            return "  No encounter data\n".to_string();
        }
        let mut out = String::new();
        push_line!(out, "  {:<16} {:<12} {:<8} {}", "Version", "Method", "Level", "Chance");
        for encounter in encounters {
            push_line!(
                out,
                "  {:<16} {:<12} {:<8} {}%",
                self.catalog.version_label(&encounter.version),
                encounter.method,
                encounter.level_label(),
                encounter.chance
            );
        }
        out
    }

    pub fn theme(&self, theme: Theme) -> String {
        format!("Theme: {theme}\n")
    }

    fn type_badge(&self, type_name: &str) -> String {
        let Style::Ansi(theme) = self.style else {
            return format!("[{type_name}]");
        };
        let (r, g, b) = parse_hex_color(self.catalog.type_color(type_name))
            .or_else(|| parse_hex_color(DEFAULT_TYPE_COLOR))
            .unwrap_or((168, 168, 120));
        match theme {
            Theme::Light => format!("\x1b[1;38;2;{r};{g};{b}m{type_name}\x1b[0m"),
            Theme::Dark => format!("\x1b[1;30;48;2;{r};{g};{b}m {type_name} \x1b[0m"),
        }
    }
}

fn species_lines(species: &SpeciesDetail) -> String {
    format!(
        "  Gender: {}\n  Capture rate: {}/255\n  Hatch cycles: {}\n",
        species.gender_ratio_label(),
        species.capture_rate,
        species.hatch_counter
    )
}

/// Parse `#RRGGBB`.
fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
