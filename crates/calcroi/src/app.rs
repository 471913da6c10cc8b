//! Application entry point and dispatch.

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use calcroi_cli::{CliPresenter, OutputFormat, PendingSpinner};
use calcroi_client::{ClientConfig, HttpRatesClient};
use calcroi_core::{run_cycle, Action, Endpoint, FormState};
use calcroi_tui::{RequestBridge, TuiApp};

use crate::config::AppConfig;
use crate::errors::{client_exit_code, request_exit_code, to_exit_code};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<ExitCode> {
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        calcroi_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(ExitCode::SUCCESS);
    }

    let client = match HttpRatesClient::new(&ClientConfig {
        base_url: config.api_url.clone(),
    }) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: {err}");
            return Ok(to_exit_code(client_exit_code(&err)));
        }
    };

    if config.tui {
        return run_tui(config, client);
    }

    run_cli(config, &client)
}

fn run_cli(config: &AppConfig, client: &HttpRatesClient) -> Result<ExitCode> {
    let mut state = FormState::with_input(config.input());
    let action = Action::from(config.action);
    let endpoint = Endpoint::route(action, state.bank());

    let spinner = PendingSpinner::start(
        format!("{}: consultando {endpoint}", action.label()),
        config.quiet || config.format == OutputFormat::Json,
    );
    let resolution = run_cycle(&mut state, client, action);
    spinner.finish();
    debug!(?resolution, %endpoint, "one-shot request finished");

    let presenter = CliPresenter::new(config.format, config.quiet);
    presenter.present(&state, &mut io::stdout().lock(), &mut io::stderr().lock())?;

    Ok(to_exit_code(request_exit_code(&state)))
}

fn run_tui(config: &AppConfig, client: HttpRatesClient) -> Result<ExitCode> {
    let api_url = client.base_url().to_string();
    let (tx, rx) = crossbeam_channel::unbounded();
    let bridge = RequestBridge::new(Arc::new(client), tx);

    let mut app = TuiApp::new(
        rx,
        Box::new(bridge),
        FormState::with_input(config.input()),
        api_url,
    );
    app.run()?;

    Ok(ExitCode::SUCCESS)
}
