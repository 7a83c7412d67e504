//! Booking Form - command-line driver
//!
//! Reads form events as JSON lines from stdin, runs them through the form
//! controller, and writes view updates as JSON lines to stdout.

use anyhow::Result;
use booking_form::{
    AsyncEmailJsClient, Config, ConsoleView, EmailJsClient, EmailTransport, EventReader,
    FormController, FormEvent, FormView, Metrics, SubmissionSettings,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env();

    // Logs go to stderr; stdout carries view updates
    let fallback = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&fallback))
        .unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let metrics = Metrics::new();

    // Without configuration the form still validates; submit shows a notice.
    let (settings, transport) = match config {
        Ok(config) => {
            info!(
                "Configuration loaded, EmailJS API URL: {}",
                config.emailjs_api_url
            );
            let client = EmailJsClient::new(&config, metrics.clone());
            let transport = Arc::new(AsyncEmailJsClient::new(client)) as Arc<dyn EmailTransport>;
            (SubmissionSettings::from(&config), Some(transport))
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            (SubmissionSettings::default(), None)
        }
    };

    let close_delay = settings.auto_close_delay;
    let (tx, mut rx) = mpsc::unbounded_channel();
    let view = Arc::new(ConsoleView::new(tx)) as Arc<dyn FormView>;
    let mut controller = FormController::new(view, transport, settings, metrics.clone());

    let mut events = EventReader::new(BufReader::new(tokio::io::stdin()));

    info!("Booking form driver started");

    loop {
        tokio::select! {
            next = events.next_event() => match next {
                Ok(Some(Ok(event))) => dispatch(&mut controller, event).await,
                Ok(Some(Err(e))) => warn!("Skipping event line: {}", e),
                Ok(None) => break,
                Err(e) => {
                    error!("Failed to read stdin: {}", e);
                    break;
                }
            },
            Some(event) = rx.recv() => dispatch(&mut controller, event).await,
        }
    }

    // A close scheduled just before input ended still gets delivered.
    let grace = close_delay + Duration::from_millis(250);
    while let Ok(Some(event)) = tokio::time::timeout(grace, rx.recv()).await {
        dispatch(&mut controller, event).await;
    }

    info!("Booking form driver shutdown: {:?}", metrics.summary());
    Ok(())
}

async fn dispatch(controller: &mut FormController, event: FormEvent) {
    if let Some(outcome) = controller.handle(event).await {
        info!("Submission finished: {:?}", outcome);
    }
}
