/// `Dir` はタイルの辺の向きを表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    North,
    East,
    South,
    West,
}

impl Dir {
    /// 余白を塗る順番. 西, 北, 東, 南 の順に塗ってから最後に中央を塗る.
    pub const PAINT_ORDER: [Dir; 4] = [Dir::West, Dir::North, Dir::East, Dir::South];

    /// 辺が横方向 (北と南) に伸びているかどうか.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Dir::North | Dir::South)
    }
}

/// `TileSize` は 1 枚のタイルの大きさをピクセル単位で表す.
///
/// 幅と高さはどちらも必ず 1 以上になる.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    width: u32,
    height: u32,
}

impl TileSize {
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        Some(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// 四方に `padding` ピクセルの余白を付けたセルの大きさを返す. `u32` に収まらなければ `None`.
    pub fn padded(&self, padding: u32) -> Option<Self> {
        let border = padding.checked_mul(2)?;
        Some(Self {
            width: self.width.checked_add(border)?,
            height: self.height.checked_add(border)?,
        })
    }
}

/// `CornerMode` はセルの四隅にある `padding × padding` の領域の埋め方を表す.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerMode {
    /// 辺の複製だけを行い, 四隅は透明のまま残す.
    #[default]
    Transparent,
    /// 四隅をタイルの一番近い角のピクセルで埋める.
    Extend,
}

#[test]
fn test_tile_size_rejects_zero() {
    assert!(TileSize::new(0, 32).is_none());
    assert!(TileSize::new(32, 0).is_none());
    assert!(TileSize::new(1, 1).is_some());
}

#[test]
fn test_tile_size_padded() {
    let tile = TileSize::new(32, 16).unwrap();
    assert_eq!(tile.padded(0), Some(tile));
    assert_eq!(tile.padded(2), TileSize::new(36, 20));
}

#[test]
fn test_tile_size_padded_overflow() {
    let tile = TileSize::new(32, 32).unwrap();
    assert_eq!(tile.padded(1 << 31), None);
    assert_eq!(tile.padded(u32::MAX / 2 - 15), None);
    assert_eq!(
        tile.padded(u32::MAX / 2 - 16),
        TileSize::new(u32::MAX - 1, u32::MAX - 1)
    );
}
