use image::{Rgba, RgbaImage};

use crate::{
    basis::{Dir, TileSize},
    grid::{Grid, Pos},
};


/// `Edge` はタイルにおける辺のピクセル列を表す.
///
/// 北と南の辺は左から右へ, 東と西の辺は上から下へ並ぶ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub dir: Dir,
    pub pixels: Vec<Rgba<u8>>,
}

/// `Fragment` は原画像から切り取ったタイルを表す. 画像はコピーせずに借用する.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    pub pos: Pos,
    image: &'a RgbaImage,
    origin: (u32, u32),
    size: TileSize,
}

impl<'a> Fragment<'a> {
    /// `grid` 上の全てのタイルを行優先の順で切り出す.
    pub fn new_all(image: &'a RgbaImage, grid: &Grid, size: TileSize) -> Vec<Self> {
        grid.all_pos()
            .map(|pos| Self::new(image, grid, pos, size))
            .collect()
    }

    pub fn new(image: &'a RgbaImage, grid: &Grid, pos: Pos, size: TileSize) -> Self {
        let origin = grid.source_origin(pos, size);
        assert!(
            origin.0 + size.width() <= image.width() && origin.1 + size.height() <= image.height(),
            "tile {:?} is outside of the {}x{} image",
            pos,
            image.width(),
            image.height()
        );
        Self {
            pos,
            image,
            origin,
            size,
        }
    }

    pub fn size(&self) -> TileSize {
        self.size
    }

    /// タイル内の座標 `(x, y)` のピクセル.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        debug_assert!(x < self.size.width() && y < self.size.height());
        *self.image.get_pixel(self.origin.0 + x, self.origin.1 + y)
    }

    /// タイル内の `y` 行目のピクセル列.
    pub fn row(&self, y: u32) -> &'a [u8] {
        debug_assert!(y < self.size.height());
        let stride = self.image.width() as usize * 4;
        let start = (self.origin.1 + y) as usize * stride + self.origin.0 as usize * 4;
        &self.image.as_raw()[start..start + self.size.width() as usize * 4]
    }

    /// `dir` 側の一番外側の行または列を取り出す.
    pub fn edge(&self, dir: Dir) -> Edge {
        let (w, h) = (self.size.width(), self.size.height());
        let pixels = match dir {
            Dir::North => (0..w).map(|x| self.pixel(x, 0)).collect(),
            Dir::East => (0..h).map(|y| self.pixel(w - 1, y)).collect(),
            Dir::South => (0..w).map(|x| self.pixel(x, h - 1)).collect(),
            Dir::West => (0..h).map(|y| self.pixel(0, y)).collect(),
        };
        Edge { dir, pixels }
    }

    /// 北西, 北東, 南東, 南西 の順に四隅のピクセルを返す.
    pub fn corners(&self) -> [Rgba<u8>; 4] {
        let (w, h) = (self.size.width(), self.size.height());
        [
            self.pixel(0, 0),
            self.pixel(w - 1, 0),
            self.pixel(w - 1, h - 1),
            self.pixel(0, h - 1),
        ]
    }
}
