/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::str::FromStr;

use image::codecs::webp::WebPEncoder;
use image::{imageops, ExtendedColorType, RgbaImage};
use oxipng::internal_tests::Headers::Safe;
use oxipng::optimize_from_memory;
use png::BitDepth::Eight;
use png::ColorType::Rgba;
use serde::Deserialize;

use crate::images::error::ImageError;
use crate::images::loader::ImageLoader;
use crate::pages::sprite_page::SpritePage;
use crate::sprites::error::SheetError;

/// The largest width/height of a WebP image, also applied to PNG sheets
pub const MAX_SHEET_DIMENSION: u32 = 16383;

/// The image format of the sheets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SheetFormat {
    /// Lossless WebP, which is what the Android client expects
    Webp,
    Png,
}

impl SheetFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            SheetFormat::Webp => "webp",
            SheetFormat::Png => "png",
        }
    }
}

impl Default for SheetFormat {
    fn default() -> Self {
        SheetFormat::Webp
    }
}

impl FromStr for SheetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "webp" => Ok(SheetFormat::Webp),
            "png" => Ok(SheetFormat::Png),
            other => Err(other.to_owned())
        }
    }
}

impl Display for SheetFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Where a sprite ends up on its sheet (in cells, not pixels)
pub fn cell_position(index: usize, columns: u32) -> (u32, u32) {
    let columns = columns.max(1) as usize;
    ((index % columns) as u32, (index / columns) as u32)
}

/// Draws all sprites of a page onto a transparent sheet, `columns` sprites per row.
///
/// Sprites that fail to load leave an empty cell; the failures are returned together with the
/// sheet so the caller can report them.
/// Fails without loading anything if the sheet would exceed [MAX_SHEET_DIMENSION].
pub fn compose(page: &SpritePage,
               loader: &ImageLoader,
               columns: u32) -> Result<(RgbaImage, Vec<(Vec<u32>, ImageError)>), SheetError> {
    let size = loader.size();
    let width = columns as u64 * size as u64;
    let height = page.rows(columns) as u64 * size as u64;
    if width > MAX_SHEET_DIMENSION as u64 || height > MAX_SHEET_DIMENSION as u64 {
        return Err(SheetError::TooLarge(width, height));
    }
    let mut sheet = RgbaImage::new(width as u32, height as u32);
    let mut failures = vec![];

    for (index, emoji) in page.sprites().enumerate() {
        match loader.load(&emoji.sequence) {
            Ok(sprite) => {
                let (column, row) = cell_position(index, columns);
                imageops::replace(&mut sheet, &sprite, (column * size) as i64, (row * size) as i64);
            }
            Err(err) => {
                warn!("Leaving an empty cell for {} ({}): {:?}", emoji, emoji.codepoints_string(), err);
                failures.push((emoji.sequence.clone(), err));
            }
        }
    }

    Ok((sheet, failures))
}

pub fn pixels_to_png(image: &RgbaImage) -> Result<Vec<u8>, SheetError> {
    // PNG files have a header of 8 bytes
    let mut png_target = Vec::with_capacity(image.as_raw().len() + 8);
    let mut encoder = png::Encoder::new(&mut png_target, image.width(), image.height());
    encoder.set_color(Rgba);
    encoder.set_depth(Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(image.as_raw())?;
    // writer still borrows png_target
    drop(writer);
    Ok(png_target)
}

/// Runs `oxipng` on an already encoded PNG file
pub fn optimize_png(png: &[u8]) -> Result<Vec<u8>, SheetError> {
    let opt = oxipng::Options {
        fix_errors: true,
        strip: Safe,
        color_type_reduction: true,
        palette_reduction: true,
        bit_depth_reduction: true,
        ..Default::default()
    };

    Ok(optimize_from_memory(png, &opt)?)
}

pub fn pixels_to_webp(image: &RgbaImage) -> Result<Vec<u8>, SheetError> {
    let mut webp_target = vec![];
    WebPEncoder::new_lossless(&mut webp_target)
        .encode(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)?;
    Ok(webp_target)
}

/// Encodes the sheet. `optimize` only has an effect on PNG files, WebP is always lossless.
pub fn encode(image: &RgbaImage, format: SheetFormat, optimize: bool) -> Result<Vec<u8>, SheetError> {
    match format {
        SheetFormat::Webp => pixels_to_webp(image),
        SheetFormat::Png if optimize => optimize_png(&pixels_to_png(image)?),
        SheetFormat::Png => pixels_to_png(image),
    }
}

/// Saves the already encoded sheet
pub fn write_sheet(path: &Path, data: &[u8]) -> Result<(), SheetError> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn test_cell_position() {
        assert_eq!(cell_position(0, 32), (0, 0));
        assert_eq!(cell_position(31, 32), (31, 0));
        assert_eq!(cell_position(32, 32), (0, 1));
        assert_eq!(cell_position(383, 32), (31, 11));
    }

    #[test]
    fn test_sheet_too_large() {
        use crate::emojis::emoji::Emoji;
        use crate::emojis::emoji_group::EmojiGroup;
        use crate::naming::EmojiSet;
        use crate::pages::family::EmojiFamily;

        let mut family = EmojiFamily::new(Emoji::from(vec![0x1f44b]));
        family.variants = (0..300).map(|i| Emoji::from(vec![0x1f44b, i])).collect();
        let page = SpritePage { group: EmojiGroup::PeopleAndBody, index: 0, families: vec![family] };
        let loader = ImageLoader::new("does-not-exist", EmojiSet::Twemoji, 64);

        // 301 rows of 64px
        match compose(&page, &loader, 1) {
            Err(SheetError::TooLarge(width, height)) => assert_eq!((width, height), (64, 301 * 64)),
            other => panic!("Expected TooLarge, got {:?}", other.map(|(sheet, _)| sheet.dimensions())),
        }
        assert_eq!(page.rows(u32::MAX), 1);
    }

    #[test]
    fn test_encode_png() {
        let image = RgbaImage::from_pixel(8, 4, Rgba([12, 34, 56, 255]));
        for optimize in [false, true].iter() {
            let png = encode(&image, SheetFormat::Png, *optimize).unwrap();
            let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
            assert_eq!(decoded, image);
        }
    }

    #[test]
    fn test_encode_webp() {
        let mut image = RgbaImage::new(4, 4);
        image.put_pixel(1, 2, Rgba([200, 100, 50, 255]));
        let webp = encode(&image, SheetFormat::Webp, false).unwrap();
        assert_eq!(&webp[0..4], b"RIFF");
        assert_eq!(&webp[8..12], b"WEBP");
        let decoded = image::load_from_memory(&webp).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(1, 2), &Rgba([200, 100, 50, 255]));
    }
}
