use std::{io, path::PathBuf};

use thiserror::Error;

/// `PadError` はタイルシートの読み込み, 書き出しで起こりうるエラーを表す.
///
/// どれも回復できないエラーで, 検出した場所からそのまま呼び出し元に伝播させる.
#[derive(Debug, Error)]
pub enum PadError {
    /// ファイルを開けない, 作れない, 書き込めない.
    #[error("cannot {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// 入力が PNG 画像として解釈できない.
    #[error("cannot decode {} as PNG", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// 余白を付けた出力画像の大きさが `u32` に収まらない.
    #[error(
        "padding {padding} around {tiles_across}x{tiles_down} tiles of {tile_width}x{tile_height} makes the output image too large"
    )]
    TooLarge {
        tiles_across: u32,
        tiles_down: u32,
        tile_width: u32,
        tile_height: u32,
        padding: u32,
    },

    /// 出力画像を PNG にエンコードできない.
    #[error("cannot encode {} as PNG", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: png::EncodingError,
    },
}

pub type Result<T, E = PadError> = std::result::Result<T, E>;

#[test]
fn test_messages_do_not_repeat_source() {
    let err = PadError::Io {
        action: "open",
        path: PathBuf::from("missing.png"),
        source: io::Error::new(io::ErrorKind::NotFound, "not found"),
    };
    assert_eq!(err.to_string(), "cannot open missing.png");
    assert_eq!(
        std::error::Error::source(&err).map(|e| e.to_string()),
        Some("not found".to_string())
    );
}
