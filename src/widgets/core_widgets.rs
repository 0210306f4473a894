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
use crate::text;
use crate::{rect, vec2, Col, Context, ItemStatus, Rect, Vec2f};

impl Context {
    /// Background fill plus the optional 1-unit style border.
    pub(crate) fn draw_frame(&mut self, r: Rect, fill: crate::Color) {
        self.draw.add_rect_filled(r, fill);
        if self.style.frame_border_size > 0.0 {
            self.draw.add_rect(r, self.style.color(Col::Border), self.style.frame_border_size);
        }
    }

    /// Outline around the keyboard-focused item.
    pub(crate) fn draw_nav_highlight(&mut self, r: Rect, status: ItemStatus) {
        if status.is_focused() {
            self.draw.add_rect(r.expand(1.0), self.style.color(Col::NavHighlight), 1.0);
        }
    }

    /// Marks the last submitted item as having changed its bound value.
    pub(crate) fn mark_edited(&mut self) { self.last_item_status |= ItemStatus::EDITED }

    /// Frame background color for the interaction state of a framed item.
    pub(crate) fn frame_color(&self, status: ItemStatus) -> crate::Color {
        if status.is_held() {
            self.style.color(Col::FrameBgActive)
        } else if status.is_hovered() {
            self.style.color(Col::FrameBgHovered)
        } else {
            self.style.color(Col::FrameBg)
        }
    }

    // ------------------------------------------------------------------
    // text
    // ------------------------------------------------------------------

    /// Static text. `\n` breaks lines; no wrapping.
    pub fn text(&mut self, buf: &str) {
        self.assert_frame();
        self.text_lines(buf, None);
    }

    /// Static text, word-wrapped at the pushed wrap position or the right
    /// edge of the content region.
    pub fn text_wrapped(&mut self, buf: &str) {
        self.assert_frame();
        let used = self.cursor.x - self.content_min_x();
        let width = match self.wrap_pos_stack.last() {
            Some(&wrap_x) => wrap_x - used,
            None => self.content_width() - used,
        };
        self.text_lines(buf, Some(width.max(1.0)));
    }

    fn text_lines(&mut self, buf: &str, max_width: Option<f32>) {
        let lines = text::build_text_lines(buf, max_width, &self.atlas);
        let width = lines.iter().fold(0.0f32, |w, l| w.max(l.width));
        let height = lines.len() as f32 * self.atlas.line_height;
        let r = self.advance_cursor(vec2(width, height));
        let col = self.style.color(Col::Text);
        for (i, line) in lines.iter().enumerate() {
            let pos = vec2(r.min_x, r.min_y + i as f32 * self.atlas.line_height);
            self.draw_text(pos, col, &buf[line.start..line.end]);
        }
    }

    // ------------------------------------------------------------------
    // buttons
    // ------------------------------------------------------------------

    /// A push button sized to its label. Returns `true` on the frame the
    /// pointer is released over it.
    pub fn button(&mut self, label: &str) -> bool {
        let text_size = self.calc_text_size(label, None);
        let pad = self.style.frame_padding;
        self.button_with_size(label, vec2(text_size.x + pad.x * 2.0, text_size.y + pad.y * 2.0))
    }

    /// A push button with an explicit size.
    pub fn button_with_size(&mut self, label: &str, size: Vec2f) -> bool {
        self.assert_frame();
        let id = self.get_id(label);
        let r = self.advance_cursor(size);
        self.register_focusable(id);
        let status = self.item_behavior(r, id);

        let fill = if status.is_held() && status.is_hovered() {
            self.style.color(Col::ButtonActive)
        } else if status.is_hovered() {
            self.style.color(Col::ButtonHovered)
        } else {
            self.style.color(Col::Button)
        };
        self.draw_frame(r, fill);
        self.draw_nav_highlight(r, status);

        let text_size = self.calc_text_size(label, None);
        let align = self.style.button_text_align;
        let pos = vec2(r.min_x + (r.width() - text_size.x) * align.x, r.min_y + (r.height() - text_size.y) * align.y);
        let col = self.style.color(Col::Text);
        self.draw_text(pos, col, text::visible_label(label));
        status.is_pressed()
    }

    // ------------------------------------------------------------------
    // toggles
    // ------------------------------------------------------------------

    /// A checkbox bound to a bool. Returns `true` when the value toggled.
    pub fn checkbox(&mut self, label: &str, v: &mut bool) -> bool {
        self.assert_frame();
        let id = self.get_id(label);
        let square = self.atlas.line_height + self.style.frame_padding.y * 2.0;
        let text_size = self.calc_text_size(label, None);
        let r = self.advance_cursor(vec2(square + self.style.item_spacing.x + text_size.x, square));
        self.register_focusable(id);
        let status = self.item_behavior(r, id);

        let changed = status.is_pressed();
        if changed {
            *v = !*v;
            self.mark_edited();
        }

        let box_r = rect(r.min_x, r.min_y, r.min_x + square, r.min_y + square);
        let fill = self.frame_color(status);
        self.draw_frame(box_r, fill);
        self.draw_nav_highlight(box_r, status);
        if *v {
            let mark = box_r.expand(-(square * 0.25));
            self.draw.add_rect_filled(mark, self.style.color(Col::CheckMark));
        }
        let col = self.style.color(Col::Text);
        let pad_y = self.style.frame_padding.y;
        let spacing_x = self.style.item_spacing.x;
        self.draw_text(vec2(box_r.max_x + spacing_x, r.min_y + pad_y), col, text::visible_label(label));
        changed
    }

    /// One radio button of a group bound to an int. Returns `true` when
    /// clicked; the bound value takes `value`.
    pub fn radio_button(&mut self, label: &str, v: &mut i32, value: i32) -> bool {
        self.assert_frame();
        let id = self.get_id(label);
        let square = self.atlas.line_height + self.style.frame_padding.y * 2.0;
        let text_size = self.calc_text_size(label, None);
        let r = self.advance_cursor(vec2(square + self.style.item_spacing.x + text_size.x, square));
        self.register_focusable(id);
        let status = self.item_behavior(r, id);

        let pressed = status.is_pressed();
        if pressed && *v != value {
            *v = value;
            self.mark_edited();
        }

        let radius = square * 0.5;
        let center = vec2(r.min_x + radius, r.min_y + radius);
        let fill = self.frame_color(status);
        self.draw.add_circle_filled(center, radius, fill, 16);
        if *v == value {
            let mark = self.style.color(Col::CheckMark);
            self.draw.add_circle_filled(center, radius * 0.5, mark, 16);
        }
        let box_r = rect(r.min_x, r.min_y, r.min_x + square, r.min_y + square);
        self.draw_nav_highlight(box_r, status);
        let col = self.style.color(Col::Text);
        let pad_y = self.style.frame_padding.y;
        let spacing_x = self.style.item_spacing.x;
        self.draw_text(vec2(box_r.max_x + spacing_x, r.min_y + pad_y), col, text::visible_label(label));
        pressed
    }

    // ------------------------------------------------------------------
    // separators
    // ------------------------------------------------------------------

    /// A 1-unit horizontal rule across the content region.
    pub fn separator(&mut self) {
        self.assert_frame();
        let x0 = self.content_min_x();
        let x1 = x0 + self.content_width();
        let y = self.cursor.y + self.style.item_spacing.y;
        let rule = rect(x0, y, x1, y + 1.0);
        self.draw.add_rect_filled(rule, self.style.color(Col::Separator));
        self.prev_item_rect = rule;
        self.cursor = vec2(self.cursor.x, y + 1.0 + self.style.item_spacing.y);
    }

    /// A horizontal rule with a centered label. An empty visible label falls
    /// back to a plain separator.
    pub fn separator_text(&mut self, label: &str) {
        self.assert_frame();
        let visible = text::visible_label(label);
        if visible.is_empty() {
            self.separator();
            return;
        }

        let x0 = self.content_min_x();
        let x1 = x0 + self.content_width();
        let text_w = self.measure_text_width(label);
        let top = self.cursor.y + self.style.item_spacing.y;
        let mid = top + self.atlas.line_height * 0.5;
        let tx = x0 + ((x1 - x0 - text_w) * 0.5).max(0.0);
        let gap = self.style.item_spacing.x;

        let sep = self.style.color(Col::Separator);
        if tx - gap > x0 {
            self.draw.add_rect_filled(rect(x0, mid, tx - gap, mid + 1.0), sep);
        }
        if tx + text_w + gap < x1 {
            self.draw.add_rect_filled(rect(tx + text_w + gap, mid, x1, mid + 1.0), sep);
        }
        let col = self.style.color(Col::Text);
        self.draw_text(vec2(tx, top), col, visible);

        self.prev_item_rect = rect(x0, top, x1, top + self.atlas.line_height);
        self.cursor = vec2(self.cursor.x, top + self.atlas.line_height + self.style.item_spacing.y);
    }
}
