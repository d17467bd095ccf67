use clap::Parser;
use controller::sim::{SimServo, SimThermocouple};
use controller::{Controller, ControllerConfig, WrappingResponder};
use core_types::ByteSource;
use eyre::{Context, Result};
use log::{debug, info};
use std::collections::VecDeque;
use std::io::Read;
use std::path::PathBuf;

/// Run the hotplate controller against simulated hardware.
///
/// Requests come from `--script` or stdin; replies go to stdout.
#[derive(Parser, Debug)]
#[command(name = "hotplate-sim", version, about)]
struct Cli {
    /// Request bytes to send, e.g. '!p,90\r?p\r' (\r and \n escapes honoured)
    #[arg(short, long)]
    script: Option<String>,

    /// JSON controller config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reject malformed instructions instead of reading them as zero
    #[arg(long)]
    strict: bool,

    /// Simulated thermocouple reading in °C
    #[arg(short, long, default_value_t = 22.0)]
    temperature: f32,

    /// Bytes delivered per loop iteration
    #[arg(long, default_value_t = 8)]
    chunk: usize,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Feeds the controller a fixed number of bytes per iteration, like a UART
/// FIFO being refilled between polls.
struct ChunkedSource {
    pending: VecDeque<u8>,
    window: VecDeque<u8>,
    chunk: usize,
}

impl ChunkedSource {
    fn new(bytes: Vec<u8>, chunk: usize) -> Self {
        Self {
            pending: bytes.into(),
            window: VecDeque::new(),
            chunk: chunk.max(1),
        }
    }

    fn refill(&mut self) {
        let n = self.chunk.min(self.pending.len());
        self.window.extend(self.pending.drain(..n));
    }

    fn exhausted(&self) -> bool {
        self.pending.is_empty() && self.window.is_empty()
    }
}

impl ByteSource for ChunkedSource {
    fn available(&self) -> bool {
        self.window.available()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.window.read_byte()
    }
}

fn unescape(script: &str) -> Vec<u8> {
    script
        .replace("\\r", "\r")
        .replace("\\n", "\n")
        .into_bytes()
}

fn load_config(cli: &Cli) -> Result<ControllerConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            ControllerConfig::from_json(&text).context("Failed to load configuration")?
        }
        None => ControllerConfig::default(),
    };
    if cli.strict {
        config.parser.strict = true;
    }
    Ok(config)
}

fn read_input(cli: &Cli) -> Result<Vec<u8>> {
    match &cli.script {
        Some(script) => Ok(unescape(script)),
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let config = load_config(&cli)?;
    let input = read_input(&cli)?;
    info!("Replaying {} bytes in chunks of {}", input.len(), cli.chunk);

    let mut device = Controller::new(
        &config,
        ChunkedSource::new(input, cli.chunk),
        WrappingResponder::new(std::io::stdout()),
        SimThermocouple::new(cli.temperature),
        (SimServo::default(), SimServo::default()),
    )
    .context("Invalid controller configuration")?;
    device.begin().context("Controller failed to start")?;

    let mut iterations = 0u64;
    loop {
        device.source_mut().refill();
        let executed = device.poll().context("Loop iteration failed")?;
        for cmd in &executed {
            debug!("Executed {:?}", cmd);
        }
        iterations += 1;
        if device.source_mut().exhausted() {
            break;
        }
    }

    info!("Input exhausted after {} iterations", iterations);
    if !device.framer().is_idle() {
        info!(
            "Unterminated {:?} frame left with {} bytes",
            device.framer().kind(),
            device.framer().len()
        );
    }
    Ok(())
}
