//! A TUI for logging into a server

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Sending logs somewhere other than the terminal
mod logging;

use app::{App, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use std::{io, process::ExitCode, sync::Arc};
use tokio::{sync::mpsc::unbounded_channel, task::JoinHandle};

/// Problems that stop the app from starting or running
#[derive(Debug, thiserror::Error)]
enum Problem {
    /// We couldn't set up logging
    #[error(transparent)]
    Logging(#[from] logging::Error),

    /// We couldn't build an HTTP client
    #[error("could not set up HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    /// Something went wrong drawing to or reading from the terminal
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
}

#[tokio::main]
async fn main() -> Result<ExitCode, Problem> {
    let config = config::Config::parse();

    let _guard = logging::init(&config)?;

    let http = reqwest::Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, config, http).await;
    ratatui::restore();

    if let Err(err) = &res {
        tracing::error!(?err, "exiting with error");
    }

    Ok(res?)
}

/// Manage the lifecycle of the app
async fn run(
    mut terminal: DefaultTerminal,
    config: config::Config,
    http: reqwest::Client,
) -> io::Result<ExitCode> {
    let mut app = App::new(config.server.clone());

    // Logins run in async tasks. The handler reports what happened (navigate
    // or alert) by sending actions down this channel, which we read alongside
    // terminal input. We keep track of outstanding effects so we can exit
    // cleanly.
    let (action_tx, mut action_rx) = unbounded_channel();
    let ctx = Arc::new(EffectContext::new(config.server, http, action_tx));
    let mut outstanding_effects: Vec<JoinHandle<()>> = Vec::with_capacity(1);

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    loop {
        // Wait for either external input or something an effect reported.
        // This is an `Option<_>` because we don't need to pay attention to
        // every single piece of external input.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => Some(app::Action::Key(key_event)),
                    Some(Err(err)) => Some(app::Action::Problem(err.to_string())),
                    Some(Ok(_)) => None,
                    None => break,
                }
            },

            action_opt = action_rx.recv() => action_opt,
        };

        // Nothing stops overlapping logins: every submit gets its own task,
        // and whichever finishes last decides what's on screen.
        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                let ctx = Arc::clone(&ctx);
                outstanding_effects.push(tokio::spawn(async move { effect.run(&ctx).await }));
            }
        }

        terminal.draw(|frame| app.render(frame))?;

        outstanding_effects.retain(|handle| !handle.is_finished());

        if let Some(code) = app.should_exit() {
            // Logins in flight have nothing left to report to, so there's no
            // point waiting for them.
            for effect in outstanding_effects.drain(..) {
                effect.abort();
            }

            return Ok(code);
        }
    }

    tracing::info!("terminal input closed");
    Ok(ExitCode::SUCCESS)
}
