use image::{Rgba, RgbaImage};
use rand::prelude::*;

/// シードを固定したランダムな画像を作る. 透明なピクセルと区別できるようアルファは 0 にしない.
pub(crate) fn random_image(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut rng = StdRng::seed_from_u64(seed);
    RgbaImage::from_fn(width, height, |_, _| {
        let [r, g, b]: [u8; 3] = rng.gen();
        Rgba([r, g, b, rng.gen_range(1..=255)])
    })
}
