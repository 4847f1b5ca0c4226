use image::{Rgba, RgbaImage};
use tracing::{info, trace};

use crate::{
    basis::{CornerMode, Dir, TileSize},
    error::{PadError, Result},
    fragment::{Edge, Fragment},
    grid::Grid,
};


/// `PadParam` は余白付けの設定を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadParam {
    pub tile: TileSize,
    pub padding: u32,
    pub corners: CornerMode,
}

/// `source` をタイルに分け, 各タイルの周りに `padding` ピクセルの余白を付けて並べ直した画像を作る.
///
/// 余白はタイル自身の一番外側の行と列を複製して埋める. タイルに収まらない右端と下端は捨てる.
/// 四隅の `padding × padding` の領域は `CornerMode::Extend` の時だけ塗られ, それ以外は透明のまま.
/// 出力画像の幅か高さが `u32` に収まらない時は `PadError::TooLarge` を返す.
pub fn pad(source: &RgbaImage, param: &PadParam) -> Result<RgbaImage> {
    let grid = Grid::for_image(source.width(), source.height(), param.tile);
    let (width, height) = grid
        .padded_dimensions(param.tile, param.padding)
        // RGBA のバッファ長が isize に収まらなければ確保できない
        .filter(|&(w, h)| w as u64 * h as u64 * 4 <= isize::MAX as u64)
        .ok_or(PadError::TooLarge {
            tiles_across: grid.width(),
            tiles_down: grid.height(),
            tile_width: param.tile.width(),
            tile_height: param.tile.height(),
            padding: param.padding,
        })?;

    info!(
        tiles_across = grid.width(),
        tiles_down = grid.height(),
        padding = param.padding,
        width,
        height,
        "padding tile sheet"
    );

    let mut canvas = RgbaImage::new(width, height);

    for fragment in Fragment::new_all(source, &grid, param.tile) {
        let origin = grid.padded_origin(fragment.pos, param.tile, param.padding);
        trace!(pos = ?fragment.pos, x = origin.0, y = origin.1, "placing tile");

        // 西, 北, 東, 南 の順に余白を塗り, 最後に中央を塗る
        for dir in Dir::PAINT_ORDER {
            paint_edge(&mut canvas, &fragment.edge(dir), origin, param.tile, param.padding);
        }
        if param.corners == CornerMode::Extend {
            paint_corners(&mut canvas, &fragment, origin, param.padding);
        }
        paint_center(&mut canvas, &fragment, origin);
    }

    Ok(canvas)
}

/// `edge` を余白の幅だけ外側へ並べて塗る.
fn paint_edge(
    canvas: &mut RgbaImage,
    edge: &Edge,
    (ox, oy): (u32, u32),
    size: TileSize,
    padding: u32,
) {
    for k in 1..=padding {
        let (x0, y0) = match edge.dir {
            Dir::North => (ox, oy - k),
            Dir::East => (ox + size.width() - 1 + k, oy),
            Dir::South => (ox, oy + size.height() - 1 + k),
            Dir::West => (ox - k, oy),
        };
        for (i, &px) in edge.pixels.iter().enumerate() {
            let i = i as u32;
            if edge.dir.is_horizontal() {
                canvas.put_pixel(x0 + i, y0, px);
            } else {
                canvas.put_pixel(x0, y0 + i, px);
            }
        }
    }
}

fn paint_corners(canvas: &mut RgbaImage, fragment: &Fragment, (ox, oy): (u32, u32), padding: u32) {
    let size = fragment.size();
    let (left, top) = (ox - padding, oy - padding);
    let (right, bottom) = (ox + size.width(), oy + size.height());
    let [nw, ne, se, sw] = fragment.corners();

    for (x0, y0, px) in [
        (left, top, nw),
        (right, top, ne),
        (right, bottom, se),
        (left, bottom, sw),
    ] {
        fill(canvas, (x0, y0), padding, px);
    }
}

fn fill(canvas: &mut RgbaImage, (x0, y0): (u32, u32), side: u32, px: Rgba<u8>) {
    for y in y0..y0 + side {
        for x in x0..x0 + side {
            canvas.put_pixel(x, y, px);
        }
    }
}

/// タイル本体を行ごとにそのままコピーする.
fn paint_center(canvas: &mut RgbaImage, fragment: &Fragment, (ox, oy): (u32, u32)) {
    let stride = canvas.width() as usize * 4;
    let row_len = fragment.size().width() as usize * 4;
    let raw: &mut [u8] = canvas;

    for y in 0..fragment.size().height() {
        let start = (oy + y) as usize * stride + ox as usize * 4;
        raw[start..start + row_len].copy_from_slice(fragment.row(y));
    }
}
