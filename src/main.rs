//! Trains an N-input parity network and uses it to drive a simulated LED
//! from simulated buttons.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use dense_mlp::device::{run_cycle, VirtualButton, VirtualLed, VirtualLine};
use dense_mlp::logging::setup_logging;
use dense_mlp::{NetworkSpec, NnError, Result};

/// Widest parity table the binary will generate.
const MAX_TABLE_WIDTH: usize = 16;

#[derive(Parser)]
#[command(name = "dense-mlp")]
#[command(about = "Train a dense network on the parity table and drive virtual I/O", long_about = None)]
struct Cli {
    /// Path to a JSON network spec; defaults to the built-in 5-input parity network
    #[arg(short, long)]
    config: Option<String>,

    /// Override the number of training epochs
    #[arg(short, long)]
    epochs: Option<usize>,

    /// Override the learning rate
    #[arg(short, long)]
    learning_rate: Option<f64>,

    /// Seed for parameter initialisation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Write the effective spec to this path and exit
    #[arg(long)]
    write_config: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(&cli.log_level);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            error!("failed to train the network");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let mut spec = match cli.config {
        Some(ref path) => NetworkSpec::load_json(path)?,
        None => NetworkSpec::default(),
    };
    if let Some(epochs) = cli.epochs {
        spec.training.epochs = epochs;
    }
    if let Some(lr) = cli.learning_rate {
        spec.training.learning_rate = lr;
    }
    if cli.seed.is_some() {
        spec.seed = cli.seed;
    }

    if let Some(ref path) = cli.write_config {
        spec.save_json(path)?;
        info!(path = %path, "wrote network spec");
        return Ok(true);
    }

    if spec.input_count > MAX_TABLE_WIDTH {
        return Err(NnError::InvalidConfig(format!(
            "parity table supports at most {MAX_TABLE_WIDTH} inputs, got {}",
            spec.input_count
        )));
    }

    let mut network = spec.build()?;
    let (inputs, outputs) = parity_table(spec.input_count);
    network.add_training_data(&inputs, &outputs);

    info!(
        name = %spec.name,
        inputs = network.input_count(),
        hidden_layers = network.hidden_layers().len(),
        outputs = network.output_count(),
        pairs = network.training_set_count(),
        "network ready"
    );

    if network.train_with(&spec.training)?.is_none() {
        return Ok(false);
    }
    network.print_results(&mut std::io::stdout().lock())?;

    // Walk the virtual buttons through every combination once.
    let lines: Vec<VirtualLine> = (0..spec.input_count).map(|_| VirtualLine::default()).collect();
    let mut buttons: Vec<VirtualButton> =
        lines.iter().map(|line| VirtualButton::new(line.clone(), true)).collect();
    let mut led = VirtualLed::new(false);

    for pattern in &inputs {
        for (line, &bit) in lines.iter().zip(pattern) {
            line.set(bit > 0.0);
        }
        let enabled = run_cycle(&mut network, &mut buttons, &mut led)?;
        info!(pattern = ?pattern, led = enabled, "inference cycle");
    }
    Ok(true)
}

/// Every combination of `width` bits, most significant bit first, labelled
/// `1.0` when an odd number of bits is set.
fn parity_table(width: usize) -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let rows = 1usize << width;
    let inputs: Vec<Vec<f64>> = (0..rows)
        .map(|r| (0..width).rev().map(|bit| ((r >> bit) & 1) as f64).collect())
        .collect();
    let outputs = (0..rows)
        .map(|r| vec![(r.count_ones() % 2) as f64])
        .collect();
    (inputs, outputs)
}
