//! Application entry point and dispatch.

use anyhow::{Context, Result};

use unitconv_cli::output::write_to_file;
use unitconv_cli::CliPresenter;
use unitconv_core::ConversionRequest;
use unitconv_session::{ResultPresenter, Session};
use unitconv_tui::TuiApp;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        unitconv_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let session = Session::new();
    let presenter = CliPresenter::new(config.verbose, config.quiet, config.json);

    if config.list {
        presenter.present_catalog(session.registry());
        return Ok(());
    }

    if config.tui {
        return run_tui(session);
    }

    run_cli(config, session, &presenter)
}

fn run_cli(
    config: &AppConfig,
    mut session: Session,
    presenter: &dyn ResultPresenter,
) -> Result<()> {
    let (from, to) = config.resolve_units(session.registry());

    let mut last = None;
    for value in config.values() {
        let request = ConversionRequest::new(&config.category, &from, &to, value);
        match session.convert(&request) {
            Ok(record) => {
                presenter.present_result(&record);
                last = Some(record);
            }
            Err(e) => {
                presenter.present_error(&e.to_string());
                // Every value shares the same units, so the rest would fail too
                return Err(e.into());
            }
        }
    }

    if config.history {
        presenter.present_history(session.history());
    }

    if let (Some(path), Some(record)) = (&config.output, &last) {
        write_to_file(path, record).with_context(|| format!("writing {path}"))?;
        tracing::debug!(path = %path, "result written");
    }

    Ok(())
}

fn run_tui(session: Session) -> Result<()> {
    let mut app = TuiApp::new(session);
    app.run().context("TUI error")?;
    Ok(())
}
