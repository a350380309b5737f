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

use std::path::Path;

use tiny_skia::Pixmap;
use usvg::FitTo;

use crate::images::error::ImageError;

/// Renders an SVG file so that its larger dimension is `size` px.
/// It will not pad the image; that's left to the caller.
/// # Returns
/// The pixmap (premultiplied RGBA) together with its dimensions
pub fn render_svg(path: &Path, size: u32) -> Result<(Pixmap, (u32, u32)), ImageError> {
    let data = std::fs::read(path)?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
        .map_err(|err| ImageError::Render(path.to_path_buf(), format!("{:?}", err)))?;

    let svg_size = tree.svg_node().size;
    let fit_to = if svg_size.height() > svg_size.width() {
        FitTo::Height(size)
    } else {
        FitTo::Width(size)
    };

    let rendered_size = fit_to.fit_to(svg_size.to_screen_size())
        .ok_or_else(|| ImageError::Render(path.to_path_buf(), String::from("Invalid size")))?;
    let mut pixmap = Pixmap::new(rendered_size.width(), rendered_size.height())
        .ok_or_else(|| ImageError::Render(path.to_path_buf(), String::from("Empty image")))?;

    resvg::render(&tree, fit_to, pixmap.as_mut())
        .ok_or_else(|| ImageError::Render(path.to_path_buf(), String::from("Rendering failed")))?;

    Ok((pixmap, rendered_size.dimensions()))
}

/// tiny-skia works with premultiplied alpha, but `image` expects straight alpha
pub fn demultiply(pixels: &mut [u8]) {
    for pixel in pixels.chunks_exact_mut(4) {
        let alpha = pixel[3] as u32;
        if alpha != 0 && alpha != 255 {
            for channel in pixel.iter_mut().take(3) {
                *channel = ((*channel as u32 * 255 + alpha / 2) / alpha).min(255) as u8;
            }
        }
    }
}

#[test]
fn test_demultiply() {
    let mut pixels = vec![
        0, 0, 0, 0,
        64, 32, 0, 128,
        10, 20, 30, 255,
    ];
    demultiply(&mut pixels);
    assert_eq!(pixels, vec![
        0, 0, 0, 0,
        128, 64, 0, 128,
        10, 20, 30, 255,
    ]);
}
