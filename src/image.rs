use {
    crate::error::{PadError, Result},
    image::{ImageFormat, ImageReader, RgbaImage},
    png::{BitDepth, ColorType, Compression, Encoder},
    std::{
        fs::File,
        io::{BufRead, BufReader, BufWriter, Seek, Write},
        path::Path,
    },
    tracing::debug,
};

/// PNG 画像を読み込み, 8 ビット RGBA に変換する.
///
/// グレースケールやパレット, 16 ビットの画像も RGBA に揃える.
pub fn decode_png(data: impl BufRead + Seek) -> image::ImageResult<RgbaImage> {
    let img = ImageReader::with_format(data, ImageFormat::Png).decode()?;
    Ok(img.to_rgba8())
}

/// RGBA 画像を PNG として `out` に書き出す.
pub fn encode_png(out: impl Write, img: &RgbaImage) -> Result<(), png::EncodingError> {
    let mut encoder = Encoder::new(out, img.width(), img.height());

    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(img.as_raw())?;
    writer.finish()
}

pub fn read_png(path: impl AsRef<Path>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PadError::Io {
        action: "open",
        path: path.to_owned(),
        source,
    })?;

    let img = decode_png(BufReader::new(file)).map_err(|source| match source {
        image::ImageError::IoError(source) => PadError::Io {
            action: "read",
            path: path.to_owned(),
            source,
        },
        source => PadError::Decode {
            path: path.to_owned(),
            source,
        },
    })?;

    debug!(path = %path.display(), width = img.width(), height = img.height(), "decoded image");
    Ok(img)
}

/// `img` を `path` に書き出す.
///
/// ファイルを作ってからエンコードするので, エンコードに失敗すると中途半端なファイルが残る.
pub fn write_png(path: impl AsRef<Path>, img: &RgbaImage) -> Result<()> {
    let path = path.as_ref();
    let io_error = |action: &'static str| {
        let path = path.to_owned();
        move |source| PadError::Io {
            action,
            path,
            source,
        }
    };

    let file = File::create(path).map_err(io_error("create"))?;
    let mut out = BufWriter::new(file);

    encode_png(&mut out, img).map_err(|source| match source {
        png::EncodingError::IoError(source) => io_error("write")(source),
        source => PadError::Encode {
            path: path.to_owned(),
            source,
        },
    })?;
    out.flush().map_err(io_error("write"))?;

    debug!(path = %path.display(), width = img.width(), height = img.height(), "encoded image");
    Ok(())
}
