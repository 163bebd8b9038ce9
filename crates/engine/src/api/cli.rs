//! Command line entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use zonedex_domain::{Theme, VersionKey, ZoneId, ALL_ZONE_TYPES};

use super::browse::browse;
use super::render::{Renderer, Style};
use crate::app::App;
use crate::use_cases::ZoneError;

#[derive(Parser, Debug)]
#[command(name = "zonedex")]
#[command(about = "Browse catalog zones and the creatures found in them")]
#[command(version)]
pub struct Cli {
    /// Zone catalog document (overrides ZONEDEX_CATALOG_PATH)
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List zones, optionally narrowed to one zone type
    Zones {
        #[arg(short = 't', long = "type", default_value = ALL_ZONE_TYPES)]
        zone_type: String,
    },
    /// Show a zone and its creatures grouped by capture method
    Zone {
        id: String,
        #[arg(short, long, default_value_t = VersionKey::All)]
        version: VersionKey,
    },
    /// Show encounter and species detail for a creature in a zone
    Inspect {
        zone: String,
        creature: String,
        #[arg(short, long, default_value_t = VersionKey::All)]
        version: VersionKey,
    },
    /// Show or change the display theme
    Theme {
        theme: Option<Theme>,
        /// Switch between light and dark
        #[arg(long, conflicts_with = "theme")]
        toggle: bool,
    },
    /// Browse interactively, one command per line
    Browse,
}

/// Rendered result of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub success: bool,
}

impl CommandOutput {
    fn ok(text: String) -> Self {
        Self {
            text,
            success: true,
        }
    }

    fn failed(text: String) -> Self {
        Self {
            text,
            success: false,
        }
    }
}

/// Run one command against the application.
///
/// `color` enables ANSI badges in the stored theme.
pub async fn run(app: &App, command: Command, color: bool) -> anyhow::Result<CommandOutput> {
    let theme = app.use_cases.theme.current();
    let style = if color { Style::Ansi(theme) } else { Style::Plain };
    let renderer = Renderer::new(&app.catalog, style);

    if let Some(message) = &app.catalog_error {
        if !matches!(command, Command::Theme { .. }) {
            return Ok(CommandOutput::failed(renderer.catalog_error(message)));
        }
    }

    match command {
        Command::Zones { zone_type } => {
            let zones = app.use_cases.zones.list.execute(&zone_type);
            Ok(CommandOutput::ok(renderer.overview(&zones, &zone_type)))
        }
        Command::Zone { id, version } => {
            let zone_id = ZoneId::from(id);
            match app
                .use_cases
                .zones
                .open
                .execute(&app.session, &zone_id, version)
                .await
            {
                Ok(view) => Ok(CommandOutput::ok(renderer.zone(&view))),
                Err(e) => Ok(zone_failure(app, &renderer, e).await),
            }
        }
        Command::Inspect {
            zone,
            creature,
            version,
        } => {
            let zone_id = ZoneId::from(zone);
            if let Err(e) = app
                .use_cases
                .zones
                .open
                .execute(&app.session, &zone_id, version)
                .await
            {
                return Ok(zone_failure(app, &renderer, e).await);
            }
            match app
                .use_cases
                .inspect
                .execute(&app.session, &creature)
                .await
            {
                Ok(detail) => Ok(CommandOutput::ok(renderer.detail(&detail))),
                Err(e) => Ok(CommandOutput::failed(format!("{e}\n"))),
            }
        }
        Command::Theme {
            theme: requested,
            toggle,
        } => {
            let theme = match (requested, toggle) {
                (_, true) => app.use_cases.theme.toggle()?,
                (Some(requested), false) => {
                    app.use_cases.theme.set(requested)?;
                    requested
                }
                (None, false) => theme,
            };
            Ok(CommandOutput::ok(renderer.theme(theme)))
        }
        Command::Browse => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            browse(app, stdin, &mut tokio::io::stdout(), color).await?;
            Ok(CommandOutput::ok(String::new()))
        }
    }
}

/// Unknown zones keep the user on the overview.
pub(super) async fn zone_failure(app: &App, renderer: &Renderer<'_>, error: ZoneError) -> CommandOutput {
    match error {
        ZoneError::NotFound(zone_id) => {
            app.use_cases
                .zones
                .return_to_overview
                .execute(&app.session)
                .await;
            let zones = app.use_cases.zones.list.execute(ALL_ZONE_TYPES);
            let mut text = renderer.zone_not_found(zone_id.as_str());
            text.push_str(&renderer.overview(&zones, ALL_ZONE_TYPES));
            CommandOutput::failed(text)
        }
        other => CommandOutput::failed(format!("{other}\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{DirectoryError, MockCreatureDirectoryPort, MockStoragePort};
    use crate::use_cases::LoadedCatalog;
    use std::sync::Arc;
    use zonedex_domain::{
        BaseStat, CaptureMethod, CreatureAttributes, RosterEntry, SpriteUrls, Zone, ZoneCatalog,
        ZoneContent,
    };

    fn catalog() -> ZoneCatalog {
        let mut town = Zone::new("littleroot-town", "Littleroot Town").with_type("town");
        town.is_town = true;
        let route = Zone::new("route-101", "Route 101")
            .with_type("route")
            .with_content(ZoneContent::Roster(vec![
                RosterEntry::new("treecko")
                    .with_versions(&["ruby", "sapphire", "emerald"])
                    .with_method(CaptureMethod::Starter)
                    .starter(),
                RosterEntry::new("wurmple").with_versions(&["ruby", "sapphire", "emerald"]),
            ]));
        ZoneCatalog::from_zones([town, route])
    }

    fn directory() -> MockCreatureDirectoryPort {
        let mut directory = MockCreatureDirectoryPort::new();
        directory.expect_fetch_creature().returning(|name| match name {
            "treecko" => Ok(CreatureAttributes {
                id: 252,
                name: "treecko".to_string(),
                species_url: None,
                types: vec!["grass".to_string()],
                abilities: vec!["overgrow".to_string()],
                base_experience: Some(62),
                height_dm: 5,
                weight_hg: 50,
                stats: vec![BaseStat::new("hp", 40)],
            }),
            other => Err(DirectoryError::not_found(other, 404)),
        });
        directory
            .expect_fetch_species()
            .returning(|_| Err(DirectoryError::request_failed("offline")));
        directory
    }

    fn app(loaded: LoadedCatalog) -> App {
        let mut storage = MockStoragePort::new();
        storage.expect_load().returning(|_| None);
        storage.expect_save().returning(|_, _| Ok(()));
        App::new(
            loaded,
            Arc::new(directory()),
            Arc::new(storage),
            SpriteUrls::default(),
        )
    }

    fn loaded() -> LoadedCatalog {
        LoadedCatalog {
            catalog: catalog(),
            error: None,
        }
    }

    #[test]
    fn parses_subcommands() {
        let cli = Cli::try_parse_from(["zonedex", "zone", "route-101", "--version", "ruby"])
            .expect("valid arguments");
        assert_eq!(
            cli.command,
            Command::Zone {
                id: "route-101".to_string(),
                version: VersionKey::Ruby
            }
        );

        let cli = Cli::try_parse_from(["zonedex", "--catalog", "zones.json", "zones"])
            .expect("valid arguments");
        assert_eq!(cli.catalog, Some(PathBuf::from("zones.json")));
        assert_eq!(
            cli.command,
            Command::Zones {
                zone_type: "all".to_string()
            }
        );

        let cli = Cli::try_parse_from(["zonedex", "browse"]).expect("valid arguments");
        assert_eq!(cli.command, Command::Browse);

        assert!(Cli::try_parse_from(["zonedex", "zone", "route-101", "--version", "gold"]).is_err());
        assert!(Cli::try_parse_from(["zonedex", "theme", "dark", "--toggle"]).is_err());
    }

    #[tokio::test]
    async fn zone_command_renders_groups() {
        let app = app(loaded());

        let output = run(
            &app,
            Command::Zone {
                id: "route-101".to_string(),
                version: VersionKey::All,
            },
            false,
        )
        .await
        .expect("command runs");

        assert!(output.success);
        assert!(output.text.contains("== Starter Pokémon =="));
        assert!(output.text.contains("== Tall Grass =="));
        assert!(output.text.contains("[starter]"));
    }

    #[tokio::test]
    async fn unknown_zone_reports_not_found_and_shows_overview() {
        let app = app(loaded());

        let output = run(
            &app,
            Command::Zone {
                id: "route-999".to_string(),
                version: VersionKey::All,
            },
            false,
        )
        .await
        .expect("command runs");

        assert!(!output.success);
        assert!(output.text.starts_with("Zone not found: route-999"));
        assert!(output.text.contains("littleroot-town"));
        assert_eq!(app.session.current_zone().await, None);
    }

    #[tokio::test]
    async fn inspect_shows_detail_with_placeholders() {
        let app = app(loaded());

        let output = run(
            &app,
            Command::Inspect {
                zone: "route-101".to_string(),
                creature: "treecko".to_string(),
                version: VersionKey::All,
            },
            false,
        )
        .await
        .expect("command runs");

        assert!(output.success);
        assert!(output.text.starts_with("Treecko #252"));
        assert!(output.text.contains("No encounter data"));
        assert!(output.text.contains("Gender: Genderless"));
    }

    #[tokio::test]
    async fn catalog_error_is_persistent() {
        let app = app(LoadedCatalog {
            catalog: ZoneCatalog::empty(),
            error: Some("Malformed catalog document: expected value".to_string()),
        });

        let output = run(
            &app,
            Command::Zones {
                zone_type: "all".to_string(),
            },
            false,
        )
        .await
        .expect("command runs");

        assert!(!output.success);
        assert!(output.text.starts_with("Error loading zone data"));
    }

    #[tokio::test]
    async fn theme_command_persists_choice() {
        let app = app(loaded());

        let output = run(
            &app,
            Command::Theme {
                theme: Some(Theme::Dark),
                toggle: false,
            },
            false,
        )
        .await
        .expect("command runs");

        assert_eq!(output.text, "Theme: dark\n");
    }
}
