use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context as _, Result};
use clap::{error::ErrorKind, ArgAction, Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tilemap_padder::{image, pad, CornerMode, PadParam, TileSize};

/// adds padding to tilemaps
#[derive(Parser, Debug)]
#[command(
    name = "tilemap-padder",
    version,
    about,
    override_usage = "tilemap-padder -w $WIDTH -h $HEIGHT -p $PADDING -i $FILENAME.png -o $FILENAME_padding.png",
    disable_help_flag = true
)]
struct Args {
    /// width of tile in pixels [default: 32]
    #[arg(short = 'w', long, value_name = "WIDTH", value_parser = clap::value_parser!(u32).range(1..))]
    tile_width: u32,

    /// height of tile in pixels [default: 32]
    #[arg(short = 'h', long, value_name = "HEIGHT", value_parser = clap::value_parser!(u32).range(1..))]
    tile_height: u32,

    /// padding in pixels [default: 0]
    #[arg(short, long, value_name = "PADDING")]
    padding: u32,

    /// input image (PNG)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// output image (PNG)
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,

    /// how to fill the corner squares of each padded tile
    #[arg(long, value_enum, default_value_t = Corners::Transparent)]
    corners: Corners,

    /// raise log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// show help
    #[arg(long, action = ArgAction::Help)]
    help: Option<bool>,
}

/// `--corners` で選べる四隅の埋め方.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Corners {
    /// leave corners transparent
    Transparent,
    /// fill corners with the nearest corner pixel of the tile
    Extend,
}

impl From<Corners> for CornerMode {
    fn from(corners: Corners) -> Self {
        match corners {
            Corners::Transparent => CornerMode::Transparent,
            Corners::Extend => CornerMode::Extend,
        }
    }
}

impl Args {
    fn param(&self) -> Result<PadParam> {
        let tile = TileSize::new(self.tile_width, self.tile_height)
            .context("tile width and height must be at least 1")?;
        Ok(PadParam {
            tile,
            padding: self.padding,
            corners: self.corners.into(),
        })
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let rendered = e.to_string();
            let message = rendered.strip_prefix("error: ").unwrap_or(&rendered);
            report(message.trim_end());
            return ExitCode::FAILURE;
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let param = args.param()?;

    // 入力を読み切ってから出力ファイルを作る
    let source = image::read_png(&args.input)?;
    let padded = pad(&source, &param)?;
    image::write_png(&args.output, &padded)?;

    info!(
        input = %args.input.display(),
        output = %args.output.display(),
        width = padded.width(),
        height = padded.height(),
        "wrote padded tile sheet"
    );
    Ok(())
}

fn report(message: &str) {
    eprintln!(
        "{}",
        console::style(format!("Error: {}", message))
            .for_stderr()
            .red()
    );
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
