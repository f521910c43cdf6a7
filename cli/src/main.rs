use anyhow::{Result, bail};
use ascii2png::{RenderConfig, convert};
use clap::Parser;
use clap::error::ErrorKind;
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "convert-ascii-to-png",
    version,
    about = "Convert ASCII art to a PNG with a transparent background"
)]
struct Cli {
    /// Text file containing the ASCII art
    input: PathBuf,
    /// Where to write the PNG
    output: PathBuf,
    /// Glyph size in pixels (ignored by the built-in font)
    #[arg(default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..=512))]
    font_size: u32,
    /// Transparent border around the text, in pixels
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=4096))]
    padding: u32,
    /// Font file to try before the system defaults (repeatable)
    #[arg(long = "font", value_name = "PATH")]
    fonts: Vec<PathBuf>,
    /// Skip font discovery and use the built-in 8x8 font
    #[arg(long, conflicts_with = "fonts")]
    builtin_font: bool,
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        let mut config = RenderConfig::default()
            .with_font_size(self.font_size as f32)
            .with_padding(self.padding);

        if self.builtin_font {
            return config.builtin_only();
        }
        // keep the order given on the command line
        for font in self.fonts.iter().rev() {
            config = config.with_font_path(font);
        }
        config
    }
}

fn run(cli: &Cli) -> Result<()> {
    if !cli.input.exists() {
        bail!("File not found: {}", cli.input.display());
    }

    let config = cli.render_config();
    debug!("Render config: {:?}", config);

    let summary = convert(&cli.input, &cli.output, &config)?;
    println!(
        "Created {} ({}x{})",
        summary.output.display(),
        summary.width,
        summary.height
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // usage goes to stdout, same as every other diagnostic
            print!("{}", e.render());
            return ExitCode::FAILURE;
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
