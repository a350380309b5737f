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

use png::EncodingError;

/// Errors while encoding or saving a sprite sheet
#[derive(Debug)]
pub enum SheetError {
    PngError(EncodingError),
    OptimizationError(oxipng::PngError),
    WebpError(image::ImageError),
    IoError(std::io::Error),
    /// The sheet would be larger (width, height) than the format allows
    TooLarge(u64, u64),
}

impl From<EncodingError> for SheetError {
    fn from(error: EncodingError) -> Self {
        SheetError::PngError(error)
    }
}

impl From<oxipng::PngError> for SheetError {
    fn from(error: oxipng::PngError) -> Self {
        SheetError::OptimizationError(error)
    }
}

impl From<image::ImageError> for SheetError {
    fn from(error: image::ImageError) -> Self {
        SheetError::WebpError(error)
    }
}

impl From<std::io::Error> for SheetError {
    fn from(error: std::io::Error) -> Self {
        SheetError::IoError(error)
    }
}
