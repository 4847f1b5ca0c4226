//! 動作確認用のタイルシートを作る.
//!
//! 各タイルは別々の色で塗られ, 縁の 1 ピクセルだけ暗くなっている. 余白付け後に縁が正しく複製されているか目で確かめられる.

use std::path::PathBuf;

use anyhow::{ensure, Context as _, Result};
use clap::Parser;
use image::{Rgba, RgbaImage};

use tilemap_padder::image::write_png;

#[derive(Parser, Debug)]
#[command(about = "writes a sample tile sheet for tilemap-padder")]
struct Args {
    /// number of tiles across
    #[arg(long, default_value_t = 4)]
    across: u32,
    /// number of tiles down
    #[arg(long, default_value_t = 4)]
    down: u32,
    /// tile width in pixels
    #[arg(long, default_value_t = 32)]
    tile_width: u32,
    /// tile height in pixels
    #[arg(long, default_value_t = 32)]
    tile_height: u32,
    #[arg(short, long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    ensure!(args.across > 0 && args.down > 0, "the sheet must have at least one tile");
    ensure!(
        args.tile_width > 0 && args.tile_height > 0,
        "tiles must be at least 1x1"
    );

    let (width, height) = sheet_dimensions(&args).with_context(|| {
        format!(
            "a sheet of {}x{} tiles of {}x{} is too large",
            args.across, args.down, args.tile_width, args.tile_height
        )
    })?;

    let sheet = RgbaImage::from_fn(width, height, |x, y| {
        let (tx, px) = (x / args.tile_width, x % args.tile_width);
        let (ty, py) = (y / args.tile_height, y % args.tile_height);
        let index = (ty as u64 * args.across as u64 + tx as u64) % 256;

        let on_border =
            px == 0 || py == 0 || px + 1 == args.tile_width || py + 1 == args.tile_height;
        let shade = if on_border { 2 } else { 1 };

        // 隣り合うタイルの色が近くならないように適当な係数で散らす
        let r = (index * 97 % 256) as u8 / shade;
        let g = (index * 57 % 256) as u8 / shade;
        let b = (index * 151 % 256) as u8 / shade;
        Rgba([r, g, b, 255])
    });

    write_png(&args.output, &sheet)
        .with_context(|| format!("failed to write sample sheet to {}", args.output.display()))?;
    println!("saved sample sheet to {}", args.output.display());

    Ok(())
}

/// シート全体の大きさ. `u32` に収まらなければ `None`.
fn sheet_dimensions(args: &Args) -> Option<(u32, u32)> {
    Some((
        args.across.checked_mul(args.tile_width)?,
        args.down.checked_mul(args.tile_height)?,
    ))
}

#[test]
fn test_sheet_dimensions() {
    let args = Args::parse_from(["gen_sheet", "--across", "3", "-o", "a.png"]);
    assert_eq!(sheet_dimensions(&args), Some((96, 128)));

    let args = Args::parse_from([
        "gen_sheet",
        "--across",
        "65536",
        "--tile-width",
        "65536",
        "-o",
        "a.png",
    ]);
    assert_eq!(sheet_dimensions(&args), None);
}
