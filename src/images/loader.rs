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

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use image::{imageops, RgbaImage};

use crate::images::error::ImageError;
use crate::naming::EmojiSet;

/// Finds and decodes the image for an emoji sequence and fits it into a square cell
#[derive(Debug, Clone)]
pub struct ImageLoader {
    dir: PathBuf,
    set: EmojiSet,
    size: u32,
}

impl ImageLoader {
    pub fn new<P: AsRef<Path>>(dir: P, set: EmojiSet, size: u32) -> ImageLoader {
        ImageLoader {
            dir: dir.as_ref().to_path_buf(),
            set,
            size,
        }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// The first candidate file that exists, pre-rendered images before SVG sources
    pub fn locate(&self, sequence: &[u32]) -> Option<PathBuf> {
        let candidates = self.set.candidate_filenames(sequence);
        #[cfg(feature = "svg")]
        let candidates = candidates.into_iter()
            .chain(self.set.candidate_svg_filenames(sequence));
        #[cfg(not(feature = "svg"))]
        let candidates = candidates.into_iter();

        candidates
            .map(|name| self.dir.join(name))
            .find(|path| path.is_file())
    }

    /// Loads the image for a sequence, already fitted into a `size`x`size` cell
    pub fn load(&self, sequence: &[u32]) -> Result<RgbaImage, ImageError> {
        let path = match self.locate(sequence) {
            Some(path) => path,
            None => return Err(ImageError::NotFound(
                sequence.to_vec(),
                self.set.candidate_filenames(sequence),
            ))
        };

        let image = self.decode(&path)?;
        Ok(fit_into_cell(image, self.size))
    }

    #[cfg(feature = "svg")]
    fn decode(&self, path: &Path) -> Result<RgbaImage, ImageError> {
        let is_svg = path.extension()
            .map(|extension| extension.eq_ignore_ascii_case("svg"))
            .unwrap_or(false);
        if is_svg {
            let (pixmap, (width, height)) = crate::images::rendering::render_svg(path, self.size)?;
            let mut pixels = pixmap.take();
            crate::images::rendering::demultiply(&mut pixels);
            RgbaImage::from_raw(width, height, pixels)
                .ok_or_else(|| ImageError::Render(path.to_path_buf(), String::from("Invalid buffer size")))
        } else {
            decode_raster(path)
        }
    }

    #[cfg(not(feature = "svg"))]
    fn decode(&self, path: &Path) -> Result<RgbaImage, ImageError> {
        decode_raster(path)
    }
}

fn decode_raster(path: &Path) -> Result<RgbaImage, ImageError> {
    image::open(path)
        .map(|image| image.to_rgba8())
        .map_err(|err| ImageError::Decode(path.to_path_buf(), err))
}

/// Scales the image (keeping its aspect ratio) so that its larger dimension is `size` and puts
/// it into the center of a transparent square.
/// If the remaining space is odd, the image will be positioned 1 pixel left/top of the center.
pub fn fit_into_cell(image: RgbaImage, size: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    if width == size && height == size {
        return image;
    }

    let (target_width, target_height) = if width >= height {
        (size, ((height as u64 * size as u64) / width.max(1) as u64).max(1) as u32)
    } else {
        (((width as u64 * size as u64) / height.max(1) as u64).max(1) as u32, size)
    };

    let scaled = if (target_width, target_height) == (width, height) {
        image
    } else {
        imageops::resize(&image, target_width, target_height, FilterType::Lanczos3)
    };

    let mut cell = RgbaImage::new(size, size);
    let x = (size - target_width) / 2;
    let y = (size - target_height) / 2;
    imageops::overlay(&mut cell, &scaled, x as i64, y as i64);
    cell
}

#[cfg(test)]
mod tests {
    use image::Rgba;

    use super::*;

    #[test]
    fn test_fit_square() {
        let image = RgbaImage::from_pixel(128, 128, Rgba([255, 0, 0, 255]));
        let cell = fit_into_cell(image, 64);
        assert_eq!(cell.dimensions(), (64, 64));
        assert_eq!(cell.get_pixel(32, 32)[0], 255);
    }

    #[test]
    fn test_fit_wide() {
        let image = RgbaImage::from_pixel(64, 32, Rgba([0, 0, 255, 255]));
        let cell = fit_into_cell(image, 64);
        assert_eq!(cell.dimensions(), (64, 64));
        // 16px of transparent padding at the top and at the bottom
        assert_eq!(cell.get_pixel(10, 15)[3], 0);
        assert_eq!(cell.get_pixel(10, 16), &Rgba([0, 0, 255, 255]));
        assert_eq!(cell.get_pixel(10, 47), &Rgba([0, 0, 255, 255]));
        assert_eq!(cell.get_pixel(10, 48)[3], 0);
    }

    #[test]
    fn test_fit_odd_padding() {
        let image = RgbaImage::from_pixel(3, 4, Rgba([0, 255, 0, 255]));
        let cell = fit_into_cell(image, 4);
        // 1px left over: it goes to the right
        assert_eq!(cell.get_pixel(0, 0), &Rgba([0, 255, 0, 255]));
        assert_eq!(cell.get_pixel(3, 0)[3], 0);
    }
}
