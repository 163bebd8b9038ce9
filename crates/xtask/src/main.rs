use std::path::{Path, PathBuf};

use anyhow::Context;
use zonedex_domain::{CatalogDocument, CatalogIssue};

const DEFAULT_CATALOG_PATH: &str = "data/zones.json";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("check-catalog") => {
            let path = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| workspace_root().join(DEFAULT_CATALOG_PATH));
            check_catalog(&path)
        }
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!(
            "Usage: cargo xtask <command>\n\nCommands:\n  check-catalog [path]"
        ),
    }
}

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn check_catalog(path: &Path) -> anyhow::Result<()> {
    let issues = catalog_issues(path)?;

    if issues.is_empty() {
        println!("{}: ok", path.display());
        return Ok(());
    }

    for issue in &issues {
        println!("{}: {issue}", path.display());
    }
    anyhow::bail!("{} catalog issue(s) found", issues.len())
}

fn catalog_issues(path: &Path) -> anyhow::Result<Vec<CatalogIssue>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let document: CatalogDocument = serde_json::from_str(&data)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    Ok(document.check())
}
