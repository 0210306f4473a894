//
// Copyright 2022-Present (c) Raja Lehtihet & Wael El Oraiby
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice,
// this list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
// this list of conditions and the following disclaimer in the documentation
// and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its contributors
// may be used to endorse or promote products derived from this software without
// specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE
// ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE
// LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR
// CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF
// SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS
// INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN
// CONTRACT, STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE)
// ARISING IN ANY WAY OUT OF THE USE OF THIS SOFTWARE, EVEN IF ADVISED OF THE
// POSSIBILITY OF SUCH DAMAGE.
//
use crate::{vec2, Vec2f};
use std::collections::HashMap;

#[derive(Copy, Clone, Debug)]
/// Metrics and atlas placement of a single baked glyph.
pub struct Glyph {
    /// Horizontal pen advance in pixels.
    pub advance: f32,
    /// Offset from the line's top-left pen position to the quad's top-left.
    pub offset: Vec2f,
    /// Pixel size of the quad.
    pub size: Vec2f,
    /// Normalized top-left texture coordinate.
    pub uv_min: Vec2f,
    /// Normalized bottom-right texture coordinate.
    pub uv_max: Vec2f,
}

#[derive(Clone)]
/// Baked font data the runtime measures and renders text with.
///
/// The atlas is a plain value: RGBA pixels the caller uploads to a texture,
/// a glyph table, and an optional kerning table keyed by character pairs.
pub struct FontAtlas {
    /// Texture width in pixels.
    pub width: usize,
    /// Texture height in pixels.
    pub height: usize,
    /// RGBA8888 pixel data, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
    /// Glyph table for every baked character.
    pub glyphs: HashMap<char, Glyph>,
    /// Distance between baselines in pixels.
    pub line_height: f32,
    /// Offset from the line top to the baseline.
    pub ascent: f32,
    /// Kerning adjustments keyed by [`kerning_key`].
    pub kerning: HashMap<u32, f32>,
    /// Texture coordinate of a solid white texel, used by untextured fills.
    pub white_uv: Vec2f,
}

/// Packs a character pair into the kerning table key.
pub fn kerning_key(left: char, right: char) -> u32 { ((left as u32 & 0xFFFF) << 16) | (right as u32 & 0xFFFF) }

impl FontAtlas {
    /// Returns the glyph for `c`, or `None` when it was not baked.
    pub fn glyph(&self, c: char) -> Option<&Glyph> { self.glyphs.get(&c) }

    /// Returns the kerning adjustment between two consecutive characters.
    pub fn kerning(&self, left: char, right: char) -> f32 { self.kerning.get(&kerning_key(left, right)).copied().unwrap_or(0.0) }

    /// Builds a fixed-metric placeholder atlas covering printable ASCII.
    ///
    /// Every glyph advances 7 pixels on a 13 pixel line and renders as a
    /// solid block, which keeps a fresh [`Context`](crate::Context) usable
    /// for measurement and testing without baking a real font.
    pub fn monospace() -> Self {
        let mut glyphs = HashMap::new();
        for i in 32u8..127 {
            glyphs.insert(
                i as char,
                Glyph {
                    advance: 7.0,
                    offset: vec2(0.5, 1.5),
                    size: vec2(6.0, 10.0),
                    uv_min: vec2(0.25, 0.25),
                    uv_max: vec2(0.75, 0.75),
                },
            );
        }
        Self {
            width: 2,
            height: 2,
            pixels: vec![0xFF; 2 * 2 * 4],
            glyphs,
            line_height: 13.0,
            ascent: 10.0,
            kerning: HashMap::new(),
            white_uv: vec2(0.5, 0.5),
        }
    }
}

#[cfg(feature = "builder")]
/// Bakes a [`FontAtlas`] from TrueType bytes.
pub mod builder {
    use super::*;
    use fontdue::{Font, FontSettings};
    use std::io::{Error, ErrorKind, Result};

    /// Pixel padding between packed glyphs.
    const PADDING: usize = 1;

    /// Rasterizes printable ASCII at `size` pixels into a `width` x `height`
    /// RGBA texture, including the kerning table and a white texel for
    /// untextured fills.
    pub fn bake(font_bytes: &[u8], size: f32, width: usize, height: usize) -> Result<FontAtlas> {
        let font = Font::from_bytes(font_bytes.to_vec(), FontSettings::default()).map_err(|error| Error::new(ErrorKind::Other, format!("{}", error)))?;

        let mut atlas = FontAtlas {
            width,
            height,
            pixels: vec![0u8; width * height * 4],
            glyphs: HashMap::new(),
            line_height: size,
            ascent: size,
            kerning: HashMap::new(),
            white_uv: vec2(0.0, 0.0),
        };

        if let Some(m) = font.horizontal_line_metrics(size) {
            atlas.line_height = m.new_line_size.round();
            atlas.ascent = m.ascent.round();
        }

        // Shelf packing, starting with a 2x2 white block at the origin.
        blit(&mut atlas, 0, 0, 2, 2, &[0xFF; 16]);
        let mut pen_x = 2 + PADDING;
        let mut pen_y = 0usize;
        let mut row_h = 2usize;
        atlas.white_uv = vec2(1.0 / width as f32, 1.0 / height as f32);

        for i in 32u8..127 {
            let ch = i as char;
            let (metrics, bitmap) = font.rasterize(ch, size);
            if pen_x + metrics.width + PADDING > width {
                pen_y += row_h + PADDING;
                pen_x = 0;
                row_h = 0;
            }
            if pen_y + metrics.height > height {
                let error = format!("Bitmap size of {}x{} is not enough to hold the atlas, please resize", width, height);
                return Err(Error::new(ErrorKind::Other, error));
            }
            let coverage: Vec<u8> = bitmap.iter().flat_map(|a| [0xFF, 0xFF, 0xFF, *a]).collect();
            blit(&mut atlas, pen_x, pen_y, metrics.width, metrics.height, &coverage);
            atlas.glyphs.insert(
                ch,
                Glyph {
                    advance: metrics.advance_width,
                    offset: vec2(metrics.xmin as f32, atlas.ascent - metrics.height as f32 - metrics.ymin as f32),
                    size: vec2(metrics.width as f32, metrics.height as f32),
                    uv_min: vec2(pen_x as f32 / width as f32, pen_y as f32 / height as f32),
                    uv_max: vec2((pen_x + metrics.width) as f32 / width as f32, (pen_y + metrics.height) as f32 / height as f32),
                },
            );
            pen_x += metrics.width + PADDING;
            row_h = row_h.max(metrics.height);
        }

        for l in 32u8..127 {
            for r in 32u8..127 {
                if let Some(kern) = font.horizontal_kern(l as char, r as char, size) {
                    if kern != 0.0 {
                        atlas.kerning.insert(kerning_key(l as char, r as char), kern);
                    }
                }
            }
        }

        Ok(atlas)
    }

    fn blit(atlas: &mut FontAtlas, x: usize, y: usize, w: usize, h: usize, rgba: &[u8]) {
        for row in 0..h {
            for col in 0..w {
                let src = (row * w + col) * 4;
                let dst = ((y + row) * atlas.width + x + col) * 4;
                atlas.pixels[dst..dst + 4].copy_from_slice(&rgba[src..src + 4]);
            }
        }
    }
}
