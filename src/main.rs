//! # asciiraster CLI
//!
//! Command-line front end for the conversion pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Render a text file (writes ascii_<timestamp>.png to the current directory)
//! asciiraster text art.txt
//!
//! # Rebuild an image from a pixel DAT file
//! asciiraster dat art.dat --output art.png
//!
//! # Render text and tint it with a DAT colour hint grid
//! asciiraster overlay art.txt art.dat --tint --out-dir renders/
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use asciiraster::{
    Canvas, Converter, RasterError, RenderConfig, output,
    render::composite::OverlayMode,
};

/// asciiraster - render text and pixel DAT files to PNG
#[derive(Parser, Debug)]
#[command(name = "asciiraster")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a plain text file as monospace glyphs
    Text {
        /// Text file to render
        text: PathBuf,

        #[command(flatten)]
        opts: RenderOpts,
    },

    /// Rebuild an image 1:1 from a pixel DAT file
    Dat {
        /// DAT file with one `X,Y:R,G,B` record per line
        dat: PathBuf,

        #[command(flatten)]
        opts: RenderOpts,
    },

    /// Render text, then composite DAT colours scaled to the text canvas
    Overlay {
        /// Text file to render
        text: PathBuf,

        /// DAT file with the colour hint grid
        dat: PathBuf,

        /// Blend each record's colour into the sampled canvas instead of sampling only
        #[arg(long)]
        tint: bool,

        #[command(flatten)]
        opts: RenderOpts,
    },
}

#[derive(Args, Debug)]
struct RenderOpts {
    /// Directory for the generated ascii_<timestamp>.png
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Exact output path (overrides --out-dir)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// JSON render configuration
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Font size in pixels
    #[arg(long)]
    font_size: Option<u32>,

    /// Extra pixels between lines
    #[arg(long)]
    line_gap: Option<u32>,
}

impl RenderOpts {
    fn load_config(&self) -> Result<RenderConfig, RasterError> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::from_json_file(path)?,
            None => RenderConfig::default(),
        };
        if let Some(size) = self.font_size {
            config.font_size = size;
        }
        if let Some(gap) = self.line_gap {
            config.line_gap = gap;
        }
        Ok(config)
    }

    fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => output::timestamped_path(&self.out_dir),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), RasterError> {
    let (canvas, opts) = match command {
        Commands::Text { text, opts } => {
            let converter = Converter::new(opts.load_config()?)?;
            (converter.render_text_from_reader(open(&text)?)?, opts)
        }
        Commands::Dat { dat, opts } => {
            let converter = Converter::new(opts.load_config()?)?;
            (converter.reconstruct_from_reader(open(&dat)?)?, opts)
        }
        Commands::Overlay {
            text,
            dat,
            tint,
            opts,
        } => {
            let mut config = opts.load_config()?;
            if tint {
                config.overlay_mode = OverlayMode::Tint;
            }
            let converter = Converter::new(config)?;
            (
                converter.render_overlay_from_readers(open(&text)?, open(&dat)?)?,
                opts,
            )
        }
    };

    save(&canvas, &opts.output_path())
}

fn open(path: &Path) -> Result<File, RasterError> {
    File::open(path).map_err(|e| {
        RasterError::Io(std::io::Error::new(
            e.kind(),
            format!("{}: {}", path.display(), e),
        ))
    })
}

fn save(canvas: &Canvas, path: &Path) -> Result<(), RasterError> {
    output::save_png(canvas, path)?;
    println!(
        "Saved {}x{} image to {}",
        canvas.width(),
        canvas.height(),
        path.display()
    );
    Ok(())
}
