//! # check_image_sync — image catalog / registry probe
//!
//! Fetches the image catalog, looks every image up in the site's LDAP
//! registry, and prints one status line with a plugin-style exit status.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

mod cli;
mod output;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use imagesync_catalog::fetch::fetch_catalog;
use imagesync_common::config::ProbeConfig;
use imagesync_common::error::{ImageSyncError, Result};
use imagesync_reconcile::check::run_check;
use imagesync_reconcile::verdict::Verdict;
use imagesync_registry::ldap::LdapProber;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            e.print()?;
            return match usage_failure(&e) {
                Some(verdict) => report(&verdict, false),
                None => Ok(ExitCode::SUCCESS),
            };
        }
    };

    let config = cli.to_config();
    init_tracing(config.debug);

    let verdict = probe(&config).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "run aborted");
        Verdict::from_error(&e)
    });
    report(&verdict, cli.json)
}

/// Maps a clap error to an UNKNOWN verdict. Help and version requests are
/// not failures and yield `None`.
fn usage_failure(error: &clap::Error) -> Option<Verdict> {
    if matches!(
        error.kind(),
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
    ) {
        return None;
    }
    let error = ImageSyncError::Config {
        message: usage_summary(&error.to_string()),
    };
    Some(Verdict::from_error(&error))
}

/// Logs go to stderr; stdout carries only the verdict.
fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs one check: configuration, catalog, registry, verdict.
fn probe(config: &ProbeConfig) -> Result<Verdict> {
    config.validate()?;
    tracing::debug!(?config, base_dn = %config.base_dn(), "starting image sync check");

    let catalog = fetch_catalog(&config.catalog_url, config.timeout())?;
    reconcile(config, &catalog)
}

/// Checks `catalog` against the registry, closing the session whether or
/// not the check succeeded.
fn reconcile(config: &ProbeConfig, catalog: &str) -> Result<Verdict> {
    let mut prober = LdapProber::new(config.ldap_url.as_str(), config.timeout());
    let outcome = run_check(config, catalog, &mut prober);
    if let Err(e) = prober.close() {
        tracing::debug!(error = %e, "ignoring failed unbind");
    }
    outcome
}

fn report(verdict: &Verdict, json: bool) -> anyhow::Result<ExitCode> {
    let line = if json {
        output::render_json(verdict)?
    } else {
        output::render_line(verdict)
    };
    writeln!(std::io::stdout().lock(), "{line}")?;
    Ok(ExitCode::from(verdict.status.exit_code()))
}

/// First line of a clap error, without its `error: ` prefix.
fn usage_summary(rendered: &str) -> String {
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
