//! Portfolio showcase for the giostra widget toolkit.

mod app;
mod celebration;
mod contact;
mod data;
mod screens;
mod terminal;
mod typewriter;

use std::process::ExitCode;

fn main() -> ExitCode {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("giostra-showcase: {err}");
            ExitCode::FAILURE
        }
    }
}
