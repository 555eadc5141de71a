use std::sync::Arc;

use agent_demo_core::session::SessionRegistry;
use agent_demo_core::{DemoConfig, run_demo};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "agent-demo")]
#[command(version, about = "GitHub Agent v2.0 - narrated automation showcase", long_about = None)]
struct Cli {}

/// Installs the Ctrl-C handler now and returns a future that resolves on
/// the first Ctrl-C.
///
/// `tokio::signal::ctrl_c` only registers its handler when first polled, so
/// it is polled once here before anything is printed. If the handler cannot
/// be installed the returned future never resolves and the demo runs to
/// completion.
async fn install_interrupt_listener() -> impl std::future::Future<Output = ()> {
    let mut ctrl_c = Box::pin(tokio::signal::ctrl_c());
    let early = tokio::select! {
        biased;
        received = &mut ctrl_c => Some(received),
        _ = std::future::ready(()) => None,
    };

    async move {
        let received = match early {
            Some(received) => received,
            None => ctrl_c.await,
        };
        if let Err(e) = received {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only the demo transcript.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let interrupt = install_interrupt_listener().await;

    // The outcome is reported on stdout by run_demo; the exit status is 0
    // whatever happened.
    let _ = run_demo(
        DemoConfig::default(),
        Arc::new(SessionRegistry::new()),
        std::io::stdout().lock(),
        interrupt,
    )
    .await;

    Ok(())
}
