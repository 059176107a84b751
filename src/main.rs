//! xpdesk
//!
//! Reads desktop inputs as JSON lines (stdin or a script file), drives the
//! window manager and writes its events to stdout as JSON lines.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use xpdesk::shared::events::{decode_input, encode_event, DesktopInput};
use xpdesk::{Config, Desktop};

/// Command line options
#[derive(Debug, Default)]
struct Args {
    script: Option<PathBuf>,
    snapshot: bool,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Self::default();
        let mut iter = std::env::args().skip(1);
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--script" | "-s" => {
                    let path = iter.next().context("--script needs a file path")?;
                    args.script = Some(PathBuf::from(path));
                }
                "--snapshot" => args.snapshot = true,
                other => anyhow::bail!("Unknown argument: {}", other),
            }
        }
        Ok(args)
    }
}

struct DesktopApp {
    desktop: Desktop,
    clock_tick: Duration,
    stdout: tokio::io::Stdout,
}

impl DesktopApp {
    fn new(config: &Config) -> Self {
        Self {
            desktop: Desktop::new(config),
            clock_tick: Duration::from_millis(config.clock.tick_ms.max(1)),
            stdout: tokio::io::stdout(),
        }
    }

    async fn run(&mut self, mut inputs: mpsc::Receiver<DesktopInput>) -> Result<()> {
        info!("Starting desktop event loop");

        let mut clock_interval = tokio::time::interval(self.clock_tick);
        clock_interval.tick().await; // Skip first immediate tick

        loop {
            tokio::select! {
                input = inputs.recv() => {
                    let Some(input) = input else {
                        info!("Input closed");
                        return Ok(());
                    };
                    self.handle(input).await?;
                    if self.desktop.shell().is_shut_down() {
                        info!("Desktop shut down, leaving event loop");
                        return Ok(());
                    }
                }

                _ = clock_interval.tick() => {
                    if self.desktop.tick_clock() {
                        debug!("Clock: {}", self.desktop.shell().clock.text());
                    }
                }

                _ = tokio::signal::ctrl_c() => {
                    info!("Received Ctrl-C, shutting down");
                    return Ok(());
                }
            }
        }
    }

    async fn handle(&mut self, input: DesktopInput) -> Result<()> {
        debug!("Input: {:?}", input);
        for event in self.desktop.handle_input(input) {
            let mut line = encode_event(&event).context("Failed to encode event")?;
            line.push('\n');
            self.stdout
                .write_all(line.as_bytes())
                .await
                .context("Failed to write event")?;
        }
        self.stdout.flush().await.context("Failed to flush stdout")?;
        Ok(())
    }

    async fn print_snapshot(&mut self) -> Result<()> {
        let snapshot = self.desktop.snapshot();
        self.stdout
            .write_all(snapshot.as_bytes())
            .await
            .context("Failed to write snapshot")?;
        self.stdout.flush().await?;
        Ok(())
    }
}

/// Decode input lines and forward them until EOF
async fn read_inputs<R>(reader: R, tx: mpsc::Sender<DesktopInput>)
where
    R: AsyncRead + Unpin,
{
    let mut lines = BufReader::new(reader).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match decode_input(&line) {
                Ok(Some(input)) => {
                    if tx.send(input).await.is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => warn!("Skipping input: {}", e),
            },
            Ok(None) => return,
            Err(e) => {
                error!("Failed to read input: {}", e);
                return;
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the event stream
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "xpdesk=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting xpdesk");

    let args = Args::parse()?;
    let config = Config::load().context("Failed to load configuration")?;

    let (tx, rx) = mpsc::channel::<DesktopInput>(64);
    match &args.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            info!("Reading inputs from {}", path.display());
            tokio::spawn(read_inputs(file, tx));
        }
        None => {
            tokio::spawn(read_inputs(tokio::io::stdin(), tx));
        }
    }

    let mut app = DesktopApp::new(&config);
    if let Err(e) = app.run(rx).await {
        error!("Application error: {}", e);
        return Err(e);
    }

    if args.snapshot {
        app.print_snapshot().await?;
    }
    Ok(())
}
