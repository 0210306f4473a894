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
use crate::idmngr::hash_str;
use crate::scrollbar;
use crate::{vec2, Col, Context, Rect, Vec2f};

/// Number of pixels one wheel line scrolls.
const WHEEL_LINE_FACTOR: f32 = 3.0;

/// Per-window state pushed by `begin` and popped by `end`.
pub struct WindowState {
    pub(crate) id: u32,
    pub(crate) name: String,
    pub(crate) pos: Vec2f,
    pub(crate) size: Vec2f,
    pub(crate) scroll: f32,
    pub(crate) content_start_y: f32,
    pub(crate) is_child: bool,
    saved_cursor: Vec2f,
    saved_prev_item: Rect,
}

impl Context {
    // ------------------------------------------------------------------
    // cursor
    // ------------------------------------------------------------------

    /// Current layout cursor in screen coordinates.
    pub fn get_cursor_pos(&self) -> Vec2f { self.cursor }

    /// Moves the layout cursor to an absolute screen position.
    pub fn set_cursor_pos(&mut self, pos: Vec2f) { self.cursor = pos }

    /// Claims a `size` rectangle at the cursor and moves the cursor below
    /// it. Only Y advances; X stays for the next item on a fresh row.
    pub(crate) fn advance_cursor(&mut self, size: Vec2f) -> Rect {
        let r = Rect::from_pos_size(self.cursor, size);
        self.prev_item_rect = r;
        self.cursor = vec2(r.min_x, r.max_y + self.style.item_spacing.y);
        r
    }

    /// Puts the next item on the previous item's row, one spacing to its right.
    pub fn same_line(&mut self) {
        self.cursor = vec2(self.prev_item_rect.max_x + self.style.item_spacing.x, self.prev_item_rect.min_y);
    }

    /// Puts the next item on the previous item's row at an explicit offset
    /// from the previous item's left edge.
    pub fn same_line_with_offset(&mut self, x_offset: f32) {
        self.cursor = vec2(self.prev_item_rect.min_x + x_offset, self.prev_item_rect.min_y);
    }

    /// Moves the cursor down one empty text line.
    pub fn new_line(&mut self) {
        self.cursor = vec2(self.content_min_x(), self.cursor.y + self.atlas.line_height + self.style.item_spacing.y);
    }

    /// Inserts one item spacing of vertical blank space.
    pub fn spacing(&mut self) { self.cursor = vec2(self.cursor.x, self.cursor.y + self.style.item_spacing.y) }

    /// Left edge of the current content region.
    pub(crate) fn content_min_x(&self) -> f32 {
        match self.windows.last() {
            Some(w) => w.pos.x + self.style.window_padding.x,
            None => self.style.window_padding.x,
        }
    }

    /// Usable width of the current content region.
    pub(crate) fn content_width(&self) -> f32 {
        match self.windows.last() {
            Some(w) => (w.size.x - self.style.window_padding.x * 2.0).max(0.0),
            None => 200.0,
        }
    }

    // ------------------------------------------------------------------
    // windows
    // ------------------------------------------------------------------

    /// Opens a window at a fixed position and size. Widgets submitted before
    /// the matching [`Context::end`] lay out inside it, clipped to its
    /// bounds. Scroll offset persists across frames under the window name.
    pub fn begin(&mut self, name: &str, pos: Vec2f, size: Vec2f) {
        self.assert_frame();
        let id = hash_str(name);
        self.open_window(id, name.to_string(), pos, size, false);
    }

    /// Closes the innermost window opened with [`Context::begin`].
    pub fn end(&mut self) {
        match self.windows.last() {
            Some(w) if !w.is_child => {}
            Some(_) => panic!("end called while a child region is open, call end_child first"),
            None => panic!("end called without a matching begin"),
        }
        self.close_window();
    }

    /// Opens an embedded scrolling region at the cursor. IDs inside are
    /// scoped under the parent window, and the clip rectangle is the
    /// intersection with the parent's.
    pub fn begin_child(&mut self, name: &str, size: Vec2f) {
        self.assert_frame();
        let parent = match self.windows.last() {
            Some(w) => w,
            None => panic!("begin_child called outside a window"),
        };
        let id = self.ids.get_id(parent.id, name);
        let path = format!("{}/{}", parent.name, name);
        let pos = self.cursor;
        self.open_window(id, path, pos, size, true);
    }

    /// Closes the innermost child region and advances the parent cursor
    /// past it.
    pub fn end_child(&mut self) {
        let size = match self.windows.last() {
            Some(w) if w.is_child => w.size,
            Some(_) => panic!("end_child called without a matching begin_child"),
            None => panic!("end_child called without a matching begin_child"),
        };
        self.close_window();
        self.advance_cursor(size);
    }

    /// Persisted scroll offset for a window name, 0 when never scrolled.
    pub fn window_scroll(&self, name: &str) -> f32 { self.scroll_map.get(name).copied().unwrap_or(0.0) }

    fn open_window(&mut self, id: u32, name: String, pos: Vec2f, size: Vec2f, is_child: bool) {
        let bounds = Rect::from_pos_size(pos, size);
        let scroll = self.scroll_map.get(&name).copied().unwrap_or(0.0);

        self.draw.add_rect_filled(bounds, self.style.color(Col::WindowBg));
        let clip = if is_child { self.draw.current_clip().intersect(&bounds) } else { bounds };
        self.draw.push_clip_rect(clip);

        let cursor = vec2(pos.x + self.style.window_padding.x, pos.y + self.style.window_padding.y - scroll);
        self.windows.push(WindowState {
            id,
            name,
            pos,
            size,
            scroll,
            content_start_y: cursor.y,
            is_child,
            saved_cursor: self.cursor,
            saved_prev_item: self.prev_item_rect,
        });
        self.cursor = cursor;
        self.prev_item_rect = Rect::from_pos_size(cursor, vec2(0.0, 0.0));
    }

    fn close_window(&mut self) {
        let w = match self.windows.pop() {
            Some(w) => w,
            None => panic!("end called without a matching begin"),
        };

        let bounds = Rect::from_pos_size(w.pos, w.size);
        let content_len = self.cursor.y - w.content_start_y;
        let view_len = (w.size.y - self.style.window_padding.y * 2.0).max(0.0);
        let limit = scrollbar::max_scroll(content_len, view_len);
        let mut scroll = w.scroll.clamp(0.0, limit);

        // Windows close innermost-first, so a hovered child region with
        // overflow takes the wheel before its parent sees it. Regions
        // without overflow leave the wheel for an enclosing window.
        if !self.wheel_consumed
            && self.io.wheel_delta != 0.0
            && limit > 0.0
            && bounds.contains(self.io.mouse_pos)
        {
            scroll -= self.io.wheel_delta * self.atlas.line_height * WHEEL_LINE_FACTOR;
            scroll = scroll.clamp(0.0, limit);
            self.wheel_consumed = true;
        }

        if limit > 0.0 {
            let track = scrollbar::scrollbar_track(bounds, self.style.scrollbar_size);
            let thumb = scrollbar::thumb(track, view_len, content_len, scroll, self.style.grab_min_size);
            let thumb_id = self.ids.get_id(w.id, "##scrollbar");
            let status = self.item_behavior(thumb, thumb_id);
            if status.is_held() {
                scroll += scrollbar::drag_delta(self.io.mouse_delta.y, content_len, track);
                scroll = scroll.clamp(0.0, limit);
            }
            self.draw.add_rect_filled(track, self.style.color(Col::ScrollbarBg));
            let thumb = scrollbar::thumb(track, view_len, content_len, scroll, self.style.grab_min_size);
            self.draw.add_rect_filled(thumb, self.style.color(Col::ScrollbarGrab));
        }

        self.scroll_map.insert(w.name, scroll);
        self.draw.pop_clip_rect();
        self.cursor = w.saved_cursor;
        self.prev_item_rect = w.saved_prev_item;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MouseButton;

    fn ctx() -> Context { Context::new() }

    #[test]
    fn cursor_starts_at_padded_origin() {
        let mut c = ctx();
        c.new_frame();
        c.begin("w", vec2(100.0, 50.0), vec2(300.0, 200.0));
        let cur = c.get_cursor_pos();
        assert_eq!(cur.x, 108.0);
        assert_eq!(cur.y, 58.0);
        c.end();
        c.end_frame();
    }

    #[test]
    fn advance_moves_only_down() {
        let mut c = ctx();
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 200.0));
        let start = c.get_cursor_pos();
        let r = c.advance_cursor(vec2(120.0, 20.0));
        let after = c.get_cursor_pos();
        assert_eq!(after.x, start.x);
        assert_eq!(after.y, start.y + 20.0 + c.style().item_spacing.y);
        assert_eq!(r.width(), 120.0);
        c.end();
        c.end_frame();
    }

    #[test]
    fn same_line_continues_the_previous_row() {
        let mut c = ctx();
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 200.0));
        let r = c.advance_cursor(vec2(80.0, 20.0));
        c.same_line();
        let cur = c.get_cursor_pos();
        assert_eq!(cur.x, r.max_x + c.style().item_spacing.x);
        assert_eq!(cur.y, r.min_y);
        c.same_line_with_offset(50.0);
        let cur = c.get_cursor_pos();
        assert_eq!(cur.x, r.min_x + 50.0);
        assert_eq!(cur.y, r.min_y);
        c.end();
        c.end_frame();
    }

    #[test]
    fn new_line_advances_one_text_line() {
        let mut c = ctx();
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 200.0));
        let before = c.get_cursor_pos();
        c.new_line();
        let after = c.get_cursor_pos();
        assert_eq!(after.y, before.y + 13.0 + c.style().item_spacing.y);
        c.end();
        c.end_frame();
    }

    #[test]
    fn wheel_scroll_persists_under_the_window_name() {
        let mut c = ctx();
        c.io_mut().set_mouse_position(100.0, 50.0);
        c.io_mut().set_mouse_wheel(-1.0);
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 100.0));
        // Enough content to overflow the 100px window.
        for _ in 0..20 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end();
        c.end_frame();
        let scrolled = c.window_scroll("w");
        assert_eq!(scrolled, 39.0);

        // Re-opening the window sees the same offset.
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 100.0));
        let cur = c.get_cursor_pos();
        assert_eq!(cur.y, 8.0 - scrolled);
        for _ in 0..20 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end();
        c.end_frame();
        assert_eq!(c.window_scroll("w"), scrolled);
    }

    #[test]
    fn scroll_clamps_to_the_overflow() {
        let mut c = ctx();
        c.io_mut().set_mouse_position(100.0, 50.0);
        c.io_mut().set_mouse_wheel(-100.0);
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 100.0));
        for _ in 0..5 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end();
        c.end_frame();
        // content 5*24 = 120, view 84, so at most 36 of scroll.
        assert_eq!(c.window_scroll("w"), 36.0);
    }

    #[test]
    fn wheel_over_a_child_leaves_the_parent_alone() {
        let mut c = ctx();
        c.io_mut().set_mouse_position(50.0, 30.0);
        c.io_mut().set_mouse_wheel(-1.0);
        c.new_frame();
        c.begin("outer", vec2(0.0, 0.0), vec2(300.0, 100.0));
        c.begin_child("inner", vec2(200.0, 50.0));
        for _ in 0..20 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end_child();
        // The parent overflows too, it just is not the wheel target.
        for _ in 0..20 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end();
        c.end_frame();
        assert_eq!(c.window_scroll("outer/inner"), 39.0);
        assert_eq!(c.window_scroll("outer"), 0.0);
    }

    #[test]
    fn wheel_passes_through_a_child_that_cannot_scroll() {
        let mut c = ctx();
        c.io_mut().set_mouse_position(50.0, 30.0);
        c.io_mut().set_mouse_wheel(-1.0);
        c.new_frame();
        c.begin("outer", vec2(0.0, 0.0), vec2(300.0, 100.0));
        c.begin_child("inner", vec2(200.0, 50.0));
        c.advance_cursor(vec2(100.0, 20.0));
        c.end_child();
        for _ in 0..20 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end();
        c.end_frame();
        assert_eq!(c.window_scroll("outer/inner"), 0.0);
        assert_eq!(c.window_scroll("outer"), 39.0);
    }

    #[test]
    fn windows_without_overflow_never_scroll() {
        let mut c = ctx();
        c.io_mut().set_mouse_position(100.0, 50.0);
        c.io_mut().set_mouse_wheel(-3.0);
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 200.0));
        c.advance_cursor(vec2(100.0, 20.0));
        c.end();
        c.end_frame();
        assert_eq!(c.window_scroll("w"), 0.0);
    }

    #[test]
    fn scrollbar_thumb_drag_uses_the_pointer_capture() {
        let mut c = ctx();
        // Window 0..100 on y, content 480: the thumb starts at the top and
        // is grabbed at (295, 10).
        c.io_mut().set_mouse_position(295.0, 10.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 100.0));
        for _ in 0..20 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end();
        c.end_frame();

        c.io_mut().set_mouse_position(295.0, 20.0);
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(300.0, 100.0));
        for _ in 0..20 {
            c.advance_cursor(vec2(100.0, 20.0));
        }
        c.end();
        c.end_frame();
        assert!(c.window_scroll("w") > 0.0);
    }

    #[test]
    fn child_regions_scope_ids_and_clip_to_the_parent() {
        let mut c = ctx();
        c.new_frame();
        c.begin("outer", vec2(0.0, 0.0), vec2(300.0, 200.0));
        let outer_id = c.get_id("item");
        c.begin_child("inner", vec2(100.0, 50.0));
        let inner_id = c.get_id("item");
        c.end_child();
        c.end();
        c.end_frame();
        assert_ne!(outer_id, inner_id);
    }

    #[test]
    fn end_child_advances_the_parent_cursor() {
        let mut c = ctx();
        c.new_frame();
        c.begin("outer", vec2(0.0, 0.0), vec2(300.0, 200.0));
        let before = c.get_cursor_pos();
        c.begin_child("inner", vec2(100.0, 50.0));
        c.end_child();
        let after = c.get_cursor_pos();
        assert_eq!(after.y, before.y + 50.0 + c.style().item_spacing.y);
        c.end();
        c.end_frame();
    }

    #[test]
    #[should_panic]
    fn unbalanced_begin_panics_at_end_frame() {
        let mut c = ctx();
        c.new_frame();
        c.begin("w", vec2(0.0, 0.0), vec2(100.0, 100.0));
        c.end_frame();
    }

    #[test]
    #[should_panic]
    fn end_without_begin_panics() {
        let mut c = ctx();
        c.new_frame();
        c.end();
    }
}
