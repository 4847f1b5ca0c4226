use crate::basis::TileSize;

/// `Pos` は `Grid` に存在するタイルの座標を表す.
///
/// X 座標と Y 座標は必ず `Grid` の `width` と `height` 未満になる.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Pos {
    x: u32,
    y: u32,
}

impl std::fmt::Debug for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

impl Pos {
    fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> u32 {
        self.x
    }

    pub fn y(&self) -> u32 {
        self.y
    }
}

/// `RangePos` は `Grid` 上の全ての `Pos` を行優先で走査する `Iterator`.
pub struct RangePos {
    width: u32,
    height: u32,
    x: u32,
    y: u32,
}

impl Iterator for RangePos {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.width == 0 || self.height <= self.y {
            return None;
        }
        let ret = Pos::new(self.x, self.y);
        self.x += 1;
        if self.width <= self.x {
            self.y += 1;
            self.x = 0;
        }
        Some(ret)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let total = self.width as usize * self.height as usize;
        let done = self.y as usize * self.width as usize + self.x as usize;
        let rest = total.saturating_sub(done);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for RangePos {}

/// `Grid` は原画像をタイルに分ける時の分割グリッドを表す. `Pos` はこれを介してのみ作成できる.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `image_width × image_height` の画像を `tile` の大きさで分割したグリッドを作る.
    ///
    /// 割り切れずに余った右端と下端のピクセルは捨てられる.
    pub fn for_image(image_width: u32, image_height: u32, tile: TileSize) -> Self {
        Self::new(image_width / tile.width(), image_height / tile.height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn is_pos_valid(&self, pos: Pos) -> bool {
        pos.x() < self.width && pos.y() < self.height
    }

    pub fn pos(&self, x: u32, y: u32) -> Pos {
        debug_assert!(x < self.width);
        debug_assert!(y < self.height);
        Pos::new(x, y)
    }

    pub fn all_pos(&self) -> RangePos {
        RangePos {
            width: self.width,
            height: self.height,
            x: 0,
            y: 0,
        }
    }

    /// 原画像における `pos` のタイルの左上の座標.
    pub fn source_origin(&self, pos: Pos, tile: TileSize) -> (u32, u32) {
        debug_assert!(self.is_pos_valid(pos));
        (pos.x() * tile.width(), pos.y() * tile.height())
    }

    /// 出力画像における `pos` のタイル本体 (余白を除く) の左上の座標.
    ///
    /// `padded_dimensions` が `Some` を返す組み合わせでしか呼んではいけない.
    pub fn padded_origin(&self, pos: Pos, tile: TileSize, padding: u32) -> (u32, u32) {
        debug_assert!(self.is_pos_valid(pos));
        debug_assert!(self.padded_dimensions(tile, padding).is_some());
        let border = padding * 2;
        (
            pos.x() * (tile.width() + border) + padding,
            pos.y() * (tile.height() + border) + padding,
        )
    }

    /// 全てのタイルに余白を付けて並べた出力画像の大きさ. `u32` に収まらなければ `None`.
    pub fn padded_dimensions(&self, tile: TileSize, padding: u32) -> Option<(u32, u32)> {
        let cell = tile.padded(padding)?;
        Some((
            self.width.checked_mul(cell.width())?,
            self.height.checked_mul(cell.height())?,
        ))
    }
}
