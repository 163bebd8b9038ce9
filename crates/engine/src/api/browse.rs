//! Interactive browsing: one command per line until `quit` or end of input.
//!
//! The session outlives each command here, so the selected version carries
//! over from one zone to the next and `version` re-aggregates the open zone.

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use zonedex_domain::{DomainError, Theme, VersionKey, ZoneId, ALL_ZONE_TYPES};

use super::cli::zone_failure;
use super::render::{Renderer, Style};
use crate::app::App;

const PROMPT: &str = "> ";

const HELP: &str = "\
Commands:
  zones [type]         list zones, optionally of one type
  open <zone>          open a zone with the selected version
  version <key>        all, ruby, sapphire or emerald
  inspect <creature>   detail for a creature in the open zone
  back                 return to the overview
  theme [light|dark|toggle]
  quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Zones(String),
    Open(ZoneId),
    Version(VersionKey),
    Inspect(String),
    Back,
    Theme(Option<ThemeChange>),
    Help,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeChange {
    Set(Theme),
    Toggle,
}

/// `Ok(None)` for a blank line.
fn parse_line(line: &str) -> Result<Option<Line>, String> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let argument = words.next();

    let parsed = match (word, argument) {
        ("zones", zone_type) => Line::Zones(zone_type.unwrap_or(ALL_ZONE_TYPES).to_string()),
        ("open", Some(zone)) => Line::Open(ZoneId::from(zone)),
        ("version", Some(key)) => Line::Version(
            key.parse()
                .map_err(|e: DomainError| e.to_string())?,
        ),
        ("inspect", Some(creature)) => Line::Inspect(creature.to_string()),
        ("open" | "version" | "inspect", None) => {
            return Err(format!("{word} needs an argument"));
        }
        ("back", _) => Line::Back,
        ("theme", None) => Line::Theme(None),
        ("theme", Some("toggle")) => Line::Theme(Some(ThemeChange::Toggle)),
        ("theme", Some(theme)) => Line::Theme(Some(ThemeChange::Set(
            theme.parse().map_err(|e: DomainError| e.to_string())?,
        ))),
        ("help", _) => Line::Help,
        ("quit" | "exit", _) => Line::Quit,
        (other, _) => return Err(format!("Unknown command: {other} (try help)")),
    };
    Ok(Some(parsed))
}

fn renderer(app: &App, color: bool) -> Renderer<'_> {
    let style = if color {
        Style::Ansi(app.use_cases.theme.current())
    } else {
        Style::Plain
    };
    Renderer::new(&app.catalog, style)
}

async fn emit<W: AsyncWrite + Unpin>(writer: &mut W, text: &str) -> anyhow::Result<()> {
    writer
        .write_all(text.as_bytes())
        .await
        .context("Failed to write output")?;
    writer.flush().await.context("Failed to flush output")
}

/// Run commands read from `reader` until `quit` or end of input.
///
/// A broken catalog is reported once and nothing is read.
pub async fn browse<R, W>(app: &App, mut reader: R, writer: &mut W, color: bool) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    if let Some(message) = &app.catalog_error {
        return emit(writer, &renderer(app, color).catalog_error(message)).await;
    }

    let zones = app.use_cases.zones.list.execute(ALL_ZONE_TYPES);
    emit(writer, &renderer(app, color).overview(&zones, ALL_ZONE_TYPES)).await?;

    let mut line = String::new();
    loop {
        emit(writer, PROMPT).await?;
        line.clear();
        if reader
            .read_line(&mut line)
            .await
            .context("Failed to read command")?
            == 0
        {
            break;
        }

        let text = match parse_line(&line) {
            Ok(None) => continue,
            Ok(Some(Line::Quit)) => break,
            Ok(Some(command)) => handle(app, command, color).await,
            Err(message) => format!("{message}\n"),
        };
        emit(writer, &text).await?;
    }

    tracing::debug!("Browse session ended");
    Ok(())
}

async fn handle(app: &App, command: Line, color: bool) -> String {
    let renderer = renderer(app, color);
    let zones = &app.use_cases.zones;

    match command {
        Line::Zones(zone_type) => renderer.overview(&zones.list.execute(&zone_type), &zone_type),
        Line::Open(zone_id) => {
            let version = app.session.version().await;
            match zones.open.execute(&app.session, &zone_id, version).await {
                Ok(view) => renderer.zone(&view),
                Err(e) => zone_failure(app, &renderer, e).await.text,
            }
        }
        Line::Version(version) => match zones.set_version.execute(&app.session, version).await {
            Ok(Some(view)) => renderer.zone(&view),
            Ok(None) => format!("Version: {version}\n"),
            Err(e) => zone_failure(app, &renderer, e).await.text,
        },
        Line::Inspect(creature) => match app.use_cases.inspect.execute(&app.session, &creature).await {
            Ok(detail) => renderer.detail(&detail),
            Err(e) => format!("{e}\n"),
        },
        Line::Back => {
            zones.return_to_overview.execute(&app.session).await;
            renderer.overview(&zones.list.execute(ALL_ZONE_TYPES), ALL_ZONE_TYPES)
        }
        Line::Theme(change) => {
            let theme = &app.use_cases.theme;
            let result = match change {
                None => Ok(theme.current()),
                Some(ThemeChange::Toggle) => theme.toggle(),
                Some(ThemeChange::Set(requested)) => theme.set(requested).map(|()| requested),
            };
            match result {
                Ok(current) => renderer.theme(current),
                Err(e) => format!("{e}\n"),
            }
        }
        Line::Help => HELP.to_string(),
        Line::Quit => String::new(),
    }
}
