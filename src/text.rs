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
use crate::FontAtlas;

#[derive(Clone, Copy)]
pub(crate) struct TextLine {
    pub start: usize,
    pub end: usize,
    pub width: f32,
}

/// Strips the `##` hidden suffix. The full label still feeds the id hash.
pub(crate) fn visible_label(label: &str) -> &str {
    match label.find("##") {
        Some(idx) => &label[..idx],
        None => label,
    }
}

/// Sums glyph advances plus pair kerning. Characters without a baked glyph
/// contribute nothing, including their kerning pairs.
pub(crate) fn measure_width(atlas: &FontAtlas, text: &str) -> f32 {
    let mut width = 0.0;
    let mut prev: Option<char> = None;
    for c in text.chars() {
        let glyph = match atlas.glyph(c) {
            Some(g) => g,
            None => continue,
        };
        if let Some(p) = prev {
            width += atlas.kerning(p, c);
        }
        width += glyph.advance;
        prev = Some(c);
    }
    width
}

fn push_wrapped_line(lines: &mut Vec<TextLine>, buf: &str, line_start: usize, line_end: usize, max_width: Option<f32>, atlas: &FontAtlas) {
    let line = &buf[line_start..line_end];
    if line.is_empty() {
        lines.push(TextLine {
            start: line_start,
            end: line_start,
            width: 0.0,
        });
        return;
    }

    let max_width = match max_width {
        Some(w) if w > 0.0 => w,
        _ => {
            lines.push(TextLine {
                start: line_start,
                end: line_end,
                width: measure_width(atlas, line),
            });
            return;
        }
    };

    let mut offset = 0;
    let mut seg_start = 0;
    let mut seg_width = 0.0;
    for word in line.split_inclusive(' ') {
        let word_width = measure_width(atlas, word);
        if seg_width > 0.0 && seg_width + word_width > max_width {
            lines.push(TextLine {
                start: line_start + seg_start,
                end: line_start + offset,
                width: seg_width,
            });
            seg_start = offset;
            seg_width = 0.0;
        }
        if word_width > max_width {
            // Oversize token, break it character by character.
            let mut ch_start = offset;
            let mut prev: Option<char> = None;
            for (idx, ch) in word.char_indices() {
                let mut step = match atlas.glyph(ch) {
                    Some(g) => g.advance,
                    None => 0.0,
                };
                if let Some(p) = prev {
                    step += atlas.kerning(p, ch);
                }
                if seg_width > 0.0 && seg_width + step > max_width {
                    lines.push(TextLine {
                        start: line_start + ch_start,
                        end: line_start + offset + idx,
                        width: seg_width,
                    });
                    ch_start = offset + idx;
                    seg_width = 0.0;
                    step = match atlas.glyph(ch) {
                        Some(g) => g.advance,
                        None => 0.0,
                    };
                }
                seg_width += step;
                prev = Some(ch);
            }
            seg_start = ch_start;
        } else {
            seg_width += word_width;
        }
        offset += word.len();
    }

    lines.push(TextLine {
        start: line_start + seg_start,
        end: line_start + line.len(),
        width: seg_width,
    });
}

/// Splits `buf` into rendered lines. Newlines always break; with a wrap width
/// a greedy word wrap applies and oversize tokens fall back to character
/// breaking.
pub(crate) fn build_text_lines(buf: &str, max_width: Option<f32>, atlas: &FontAtlas) -> Vec<TextLine> {
    let mut lines = Vec::new();
    if buf.is_empty() {
        lines.push(TextLine { start: 0, end: 0, width: 0.0 });
        return lines;
    }

    let mut line_start = 0;
    for (idx, ch) in buf.char_indices() {
        if ch == '\n' {
            push_wrapped_line(&mut lines, buf, line_start, idx, max_width, atlas);
            line_start = idx + ch.len_utf8();
        }
    }

    if line_start <= buf.len() {
        push_wrapped_line(&mut lines, buf, line_start, buf.len(), max_width, atlas);
    }

    lines
}

/// Bounding size of `text`, optionally wrapped at `max_width`.
pub(crate) fn calc_size(buf: &str, max_width: Option<f32>, atlas: &FontAtlas) -> crate::Vec2f {
    let lines = build_text_lines(buf, max_width, atlas);
    let mut width: f32 = 0.0;
    for line in &lines {
        width = width.max(line.width);
    }
    crate::vec2(width, lines.len() as f32 * atlas.line_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every monospace glyph advances 7 pixels with no kerning.
    fn atlas() -> FontAtlas { FontAtlas::monospace() }

    #[test]
    fn width_is_the_sum_of_advances() {
        assert_eq!(measure_width(&atlas(), "hello"), 35.0);
        assert_eq!(measure_width(&atlas(), ""), 0.0);
    }

    #[test]
    fn kerning_adjusts_pairs() {
        let mut a = atlas();
        a.kerning.insert(crate::kerning_key('A', 'V'), -2.0);
        assert_eq!(measure_width(&a, "AV"), 12.0);
        assert_eq!(measure_width(&a, "VA"), 14.0);
    }

    #[test]
    fn missing_glyphs_contribute_nothing() {
        assert_eq!(measure_width(&atlas(), "a\u{3042}b"), 14.0);
    }

    #[test]
    fn hidden_suffix_is_invisible() {
        assert_eq!(visible_label("Save##toolbar"), "Save");
        assert_eq!(visible_label("Save"), "Save");
        assert_eq!(visible_label("##bare"), "");
    }

    #[test]
    fn newlines_always_break() {
        let lines = build_text_lines("ab\ncd\n", None, &atlas());
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].width, 14.0);
        assert_eq!(lines[2].width, 0.0);
    }

    #[test]
    fn greedy_wrap_keeps_lines_under_the_target() {
        // "aaa bbb ccc" at 7px a glyph: each word+space is 28, bare word 21.
        let lines = build_text_lines("aaa bbb ccc", Some(56.0), &atlas());
        assert_eq!(lines.len(), 2);
        assert!(lines[0].width <= 56.0);
        assert!(lines[1].width <= 56.0);
    }

    #[test]
    fn oversize_token_breaks_per_character() {
        let lines = build_text_lines("aaaaaaaaaa", Some(21.0), &atlas());
        assert_eq!(lines.len(), 4);
        for line in &lines[..3] {
            assert_eq!(line.width, 21.0);
        }
        assert_eq!(lines[3].width, 7.0);
    }

    #[test]
    fn wrapped_size_is_line_count_times_line_height() {
        let size = calc_size("aaa bbb", Some(28.0), &atlas());
        assert_eq!(size.y, 2.0 * 13.0);
        assert!(size.x <= 28.0);
        let size = calc_size("abc", None, &atlas());
        assert_eq!(size.x, 21.0);
        assert_eq!(size.y, 13.0);
    }
}
