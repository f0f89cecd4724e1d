use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use elementary_signals::config::{
    CompositionConfig, ImpulseConfig, SamplingRate, SineConfig, StepConfig, TransformConfig,
};
use elementary_signals::output::{OutputFormat, SignalSummary, create_formatter, write_signal};
use elementary_signals::transforms::apply_transform;
use elementary_signals::{
    Signal, add_signals, compose, generate_impulse, generate_sine, generate_step, time_scale,
    time_shift,
};

#[derive(Parser, Debug)]
#[command(name = "elementary-signals")]
#[command(about = "Generate and transform elementary test signals", long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// amplitude * sin(2π·frequency·t + phase)
    Sine {
        /// Frequency in Hz
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        frequency: f64,

        #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true)]
        amplitude: f64,

        /// Phase in radians
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        phase: f64,

        #[command(flatten)]
        timing: TimingArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// amplitude from step_time onwards, zero before
    Step {
        /// Step time in seconds
        #[arg(short = 't', long, default_value_t = 0.5, allow_hyphen_values = true)]
        step_time: f64,

        #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true)]
        amplitude: f64,

        #[command(flatten)]
        timing: TimingArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// A single non-zero sample nearest impulse_time
    Impulse {
        /// Impulse time in seconds
        #[arg(short = 't', long, default_value_t = 0.0, allow_hyphen_values = true)]
        impulse_time: f64,

        #[arg(short, long, default_value_t = 1.0, allow_hyphen_values = true)]
        amplitude: f64,

        #[command(flatten)]
        timing: TimingArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Sum the components of a TOML composition file
    Compose {
        /// TOML composition file
        #[arg(short, long)]
        config: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Shift/scale a sine, then combine sine, step and impulse
    Demo {
        /// Summary format: text, csv, json
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(clap::Args, Debug)]
struct TimingArgs {
    /// Signal duration in seconds
    #[arg(short, long, default_value_t = 1.0)]
    duration: f64,

    /// Sampling rate (e.g. "1000", "8khz", "125us")
    #[arg(short = 'r', long, default_value = "1000")]
    sampling_rate: SamplingRate,
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output format: text, csv, json
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Seconds added to every timestamp
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    shift: f64,

    /// Factor applied to every timestamp (after the shift)
    #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
    scale: f64,

    /// Print a one-line summary instead of every sample
    #[arg(long)]
    summary: bool,
}

impl OutputArgs {
    fn transform(&self) -> TransformConfig {
        TransformConfig {
            shift: self.shift,
            scale: self.scale,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_composition(path: &Path) -> Result<CompositionConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read composition file {}", path.display()))?;
    CompositionConfig::from_toml_str(&content)
        .with_context(|| format!("Failed to parse composition file {}", path.display()))
}

fn emit(signal: &Signal, output: &OutputArgs) -> Result<()> {
    let transform = output.transform();
    let signal = if transform.is_identity() {
        signal.clone()
    } else {
        log::debug!("Applying shift {} s, scale {}", transform.shift, transform.scale);
        apply_transform(signal, &transform)
    };

    if !signal.is_monotonic() {
        log::info!("Time axis is not increasing (negative scale)");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if output.summary {
        write_summaries(&mut out, &[("signal", &signal)], output.format)?;
    } else {
        let formatter = create_formatter(output.format, log::log_enabled!(log::Level::Debug));
        write_signal(formatter.as_ref(), &signal, &mut out).context("Failed to write samples")?;
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}

const SUMMARY_CSV_HEADER: &str = "label,samples,start,end,min,max,peak_index";

fn write_summary<W: Write>(
    out: &mut W,
    label: &str,
    summary: &SignalSummary,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{:<10} {}", label, summary)?,
        OutputFormat::Csv => writeln!(
            out,
            "{},{},{},{},{},{},{}",
            label,
            summary.samples,
            summary.start,
            summary.end,
            summary.min,
            summary.max,
            summary.peak_index
        )?,
        OutputFormat::Json => {
            let line = serde_json::json!({ "label": label, "summary": summary });
            writeln!(out, "{}", line)?
        }
    }
    Ok(())
}

/// One summary line per labelled signal, preceded by a header in CSV mode.
fn write_summaries<W: Write>(
    out: &mut W,
    signals: &[(&str, &Signal)],
    format: OutputFormat,
) -> Result<()> {
    if format == OutputFormat::Csv {
        writeln!(out, "{}", SUMMARY_CSV_HEADER)?;
    }
    for &(label, signal) in signals {
        if let Some(summary) = SignalSummary::of(signal) {
            write_summary(out, label, &summary, format)?;
        }
    }
    Ok(())
}

fn run_demo(format: OutputFormat) -> Result<()> {
    let original = generate_sine(&SineConfig::default()).context("Failed to generate sine")?;
    let shifted = time_shift(&original, 0.2);
    let scaled = time_scale(&original, 2.0);

    let sine = generate_sine(&SineConfig::default().with_frequency(5.0))?;
    let step = generate_step(
        &StepConfig::default()
            .with_step_time(0.3)
            .with_amplitude(0.5),
    )?;
    let impulse = generate_impulse(
        &ImpulseConfig::default()
            .with_impulse_time(0.7)
            .with_amplitude(-1.0),
    )?;
    let combined = add_signals(sine.samples(), step.samples())
        .and_then(|sum| add_signals(&sum, impulse.samples()))
        .context("Failed to combine demo signals")?;
    let combined = Signal::new(sine.time().to_vec(), combined)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    write_summaries(
        &mut out,
        &[
            ("original", &original),
            ("shifted", &shifted),
            ("scaled", &scaled),
            ("sine", &sine),
            ("step", &step),
            ("impulse", &impulse),
            ("combined", &combined),
        ],
        format,
    )?;

    out.flush().context("Failed to flush output")?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match args.command {
        Command::Sine {
            frequency,
            amplitude,
            phase,
            timing,
            output,
        } => {
            log::info!(
                "Sine: {} Hz for {} s at {}",
                frequency,
                timing.duration,
                timing.sampling_rate
            );
            let config = SineConfig {
                frequency,
                amplitude,
                phase,
                duration: timing.duration,
                sampling_rate: timing.sampling_rate.as_hz(),
            };
            let signal = generate_sine(&config).context("Failed to generate sine")?;
            emit(&signal, &output)
        }
        Command::Step {
            step_time,
            amplitude,
            timing,
            output,
        } => {
            log::info!(
                "Step: at {} s for {} s at {}",
                step_time,
                timing.duration,
                timing.sampling_rate
            );
            let config = StepConfig {
                duration: timing.duration,
                step_time,
                amplitude,
                sampling_rate: timing.sampling_rate.as_hz(),
            };
            let signal = generate_step(&config).context("Failed to generate step")?;
            emit(&signal, &output)
        }
        Command::Impulse {
            impulse_time,
            amplitude,
            timing,
            output,
        } => {
            log::info!(
                "Impulse: at {} s for {} s at {}",
                impulse_time,
                timing.duration,
                timing.sampling_rate
            );
            let config = ImpulseConfig {
                duration: timing.duration,
                impulse_time,
                amplitude,
                sampling_rate: timing.sampling_rate.as_hz(),
            };
            let signal = generate_impulse(&config).context("Failed to generate impulse")?;
            emit(&signal, &output)
        }
        Command::Compose { config, output } => {
            let composition = load_composition(&config)?;
            log::info!(
                "Composing {} components from {}",
                composition.components.len(),
                config.display()
            );
            let signal = compose(&composition).context("Failed to compose signal")?;
            emit(&signal, &output)
        }
        Command::Demo { format } => run_demo(format),
    }
}
