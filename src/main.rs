use anyhow::Context;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bi::config::CONFIG_ENV;
use bi::{BiConfig, Format, Image, ModelRegistry};

#[derive(Parser)]
#[command(name = "bi")]
#[command(about = "Convert images to and from the BI text raster format")]
struct Cli {
    /// Configuration file (defaults to $BI_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a PNG as a BI stream
    Encode {
        /// Input PNG file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (a .biz extension implies --compress)
        #[arg(short, long)]
        output: PathBuf,

        /// Color model name (e.g. "v1", "hex")
        #[arg(short, long)]
        model: Option<String>,

        /// Wrap the stream in gzip
        #[arg(long)]
        compress: bool,
    },
    /// Decode a plain or compressed BI stream to PNG
    Decode {
        /// Input BI file path
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Print format, model and dimensions of a BI file
    Info {
        /// BI file path
        file: PathBuf,
    },
    /// List registered color models
    Models,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bi=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = BiConfig::resolve(cli.config.as_deref());
    let registry = Arc::new(ModelRegistry::with_builtins());

    match cli.command {
        Some(Commands::Encode {
            input,
            output,
            model,
            compress,
        }) => run_encode_command(&config, &registry, &input, &output, model, compress),
        Some(Commands::Decode { input, output }) => {
            run_decode_command(&config, &registry, &input, &output)
        }
        Some(Commands::Info { file }) => run_info_command(&config, &registry, &file),
        Some(Commands::Models) => {
            for name in registry.names() {
                println!("{name}");
            }
            Ok(())
        }
        None => {
            run_status_command(&config, &registry, cli.config.as_deref());
            Ok(())
        }
    }
}

/// Encode a PNG file to BI
fn run_encode_command(
    config: &BiConfig,
    registry: &ModelRegistry,
    input: &Path,
    output: &Path,
    model: Option<String>,
    compress: bool,
) -> anyhow::Result<()> {
    let model_name = model.unwrap_or_else(|| config.model.clone());
    let model = registry.lookup(&model_name).with_context(|| {
        format!(
            "Unknown color model {model_name:?} (available: {})",
            registry.names().join(", ")
        )
    })?;

    let file = File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let image = bi::raster::read_png(BufReader::new(file))
        .with_context(|| format!("Failed to read PNG {}", input.display()))?;

    let compress =
        compress || config.compress || Format::from_path(output) == Some(Format::Compressed);

    let file =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    let writer = BufWriter::new(file);
    if compress {
        bi::encode_compressed(writer, &image, model.as_ref(), flate2::Compression::default())?;
    } else {
        bi::encode(writer, &image, model.as_ref())?;
    }

    println!(
        "Encoded {} ({}x{}, model {}{})",
        output.display(),
        image.width(),
        image.height(),
        model.name(),
        if compress { ", compressed" } else { "" }
    );
    Ok(())
}

/// Decode a BI file to PNG
fn run_decode_command(
    config: &BiConfig,
    registry: &Arc<ModelRegistry>,
    input: &Path,
    output: &Path,
) -> anyhow::Result<()> {
    let file = File::open(input).with_context(|| format!("Failed to open {}", input.display()))?;
    let image: Image = config
        .decoder(registry.clone())
        .decode_any(file)
        .with_context(|| format!("Failed to decode {}", input.display()))?;

    let file =
        File::create(output).with_context(|| format!("Failed to create {}", output.display()))?;
    bi::raster::write_png(BufWriter::new(file), &image)
        .with_context(|| format!("Failed to write PNG {}", output.display()))?;

    println!(
        "Decoded {} ({}x{})",
        output.display(),
        image.width(),
        image.height()
    );
    Ok(())
}

/// Print what a BI file holds without resolving its pixels
fn run_info_command(
    config: &BiConfig,
    registry: &Arc<ModelRegistry>,
    path: &Path,
) -> anyhow::Result<()> {
    let mut prefix = [0u8; 5];
    let mut file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let n = read_prefix(&mut file, &mut prefix)?;
    let format = Format::detect(&prefix[..n])
        .with_context(|| format!("{} is not a BI stream", path.display()))?;

    let file = File::open(path)?;
    let info = config
        .decoder(registry.clone())
        .decode_config_any(file)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    println!("Format: {format}");
    println!("Model:  {}", info.model.name());
    println!("Width:  {}", info.width);
    println!("Height: {}", info.height);
    Ok(())
}

/// Fill `buf` from the start of `reader`, stopping early at end of stream
fn read_prefix(reader: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Show version, configuration and available commands
fn run_status_command(config: &BiConfig, registry: &ModelRegistry, explicit: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("bi v{VERSION} - text raster image codec\n");

    println!("Configuration:");
    let source = match explicit.map(Path::to_path_buf).or_else(BiConfig::env_path) {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not found, using defaults)", path.display()),
        None => format!("defaults ({CONFIG_ENV} not set)"),
    };
    println!("  Source:         {source}");
    println!("  Model:          {}", config.model);
    println!("  Compress:       {}", config.compress);
    println!("  Parallel:       {}", config.parallel);
    println!("  Max header len: {}", config.max_header_len);

    println!("\nColor Models:");
    for name in registry.names() {
        println!("  {name}");
    }

    println!("\nCommands:");
    println!("  bi encode   Encode a PNG as BI");
    println!("  bi decode   Decode BI to PNG");
    println!("  bi info     Show model and dimensions of a BI file");
    println!("  bi models   List color models");
    println!("\nRun 'bi --help' for more details.");
}
