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
use crate::draw_list::DrawListBuilder;
use crate::idmngr::{IdManager, ID_SEED};
use crate::text;
use crate::widgets::EditState;
use crate::window::WindowState;
use crate::{nav, vec2, Col, Color, DrawData, FontAtlas, Io, ItemStatus, Key, Rect, Style, StyleValue, StyleVar, TextureId, Vec2f};
use std::collections::HashMap;
use tracing::trace;

/// Central state of the runtime. One instance per UI; all interaction state
/// lives here, so independent contexts never interfere.
///
/// A frame is bracketed by [`Context::new_frame`] and [`Context::end_frame`];
/// widget calls are only legal in between. After `end_frame`,
/// [`Context::draw_data`] exposes the geometry for the backend.
pub struct Context {
    pub(crate) io: Io,
    pub(crate) style: Style,
    pub(crate) atlas: FontAtlas,
    pub(crate) font_texture: TextureId,
    pub(crate) draw: DrawListBuilder,
    draw_data: DrawData,
    pub(crate) ids: IdManager,
    frame_started: bool,
    frame_count: u64,

    pub(crate) active_id: u32,
    pub(crate) focused_id: u32,
    pub(crate) hovered_id: u32,
    pub(crate) last_item_id: u32,
    pub(crate) last_item_rect: Rect,
    pub(crate) last_item_status: ItemStatus,

    pub(crate) cursor: Vec2f,
    pub(crate) prev_item_rect: Rect,
    pub(crate) focusable: Vec<u32>,
    pub(crate) tab_consumed: bool,
    pub(crate) wheel_consumed: bool,
    pub(crate) windows: Vec<WindowState>,
    pub(crate) scroll_map: HashMap<String, f32>,

    color_stack: Vec<(Col, Color)>,
    var_stack: Vec<(StyleVar, StyleValue)>,
    pub(crate) wrap_pos_stack: Vec<f32>,
    measure_cache: HashMap<String, f32>,

    pub(crate) edit: EditState,
    pub(crate) drag_accum: f32,
}

impl Context {
    /// Creates a context with the built-in monospace placeholder atlas.
    pub fn new() -> Self { Self::with_atlas(FontAtlas::monospace(), TextureId(0)) }

    /// Creates a context rendering text from a baked atlas uploaded by the
    /// caller to `font_texture`.
    pub fn with_atlas(atlas: FontAtlas, font_texture: TextureId) -> Self {
        trace!(glyphs = atlas.glyphs.len(), line_height = atlas.line_height, "installing font atlas");
        let white_uv = atlas.white_uv;
        Self {
            io: Io::default(),
            style: Style::default(),
            atlas,
            font_texture,
            draw: DrawListBuilder::new(font_texture, white_uv),
            draw_data: DrawData::default(),
            ids: IdManager::new(),
            frame_started: false,
            frame_count: 0,
            active_id: 0,
            focused_id: 0,
            hovered_id: 0,
            last_item_id: 0,
            last_item_rect: Rect::default(),
            last_item_status: ItemStatus::empty(),
            cursor: vec2(0.0, 0.0),
            prev_item_rect: Rect::default(),
            focusable: Vec::new(),
            tab_consumed: false,
            wheel_consumed: false,
            windows: Vec::new(),
            scroll_map: HashMap::new(),
            color_stack: Vec::new(),
            var_stack: Vec::new(),
            wrap_pos_stack: Vec::new(),
            measure_cache: HashMap::new(),
            edit: EditState::default(),
            drag_accum: 0.0,
        }
    }

    /// Shared access to the input/output state.
    pub fn io(&self) -> &Io { &self.io }

    /// Mutable access to the input/output state.
    pub fn io_mut(&mut self) -> &mut Io { &mut self.io }

    /// Shared access to the style.
    pub fn style(&self) -> &Style { &self.style }

    /// Mutable access to the style.
    pub fn style_mut(&mut self) -> &mut Style { &mut self.style }

    /// The installed font atlas.
    pub fn atlas(&self) -> &FontAtlas { &self.atlas }

    /// Current line height of the installed atlas.
    pub fn line_height(&self) -> f32 { self.atlas.line_height }

    // ------------------------------------------------------------------
    // frame lifecycle
    // ------------------------------------------------------------------

    /// Starts a frame. Panics when the previous frame was not ended.
    pub fn new_frame(&mut self) {
        if self.frame_started {
            panic!("new_frame called while a frame is already open");
        }
        self.frame_started = true;
        self.frame_count += 1;
        self.io.prelude();
        self.hovered_id = 0;
        self.last_item_id = 0;
        self.last_item_rect = Rect::default();
        self.last_item_status = ItemStatus::empty();
        self.focusable.clear();
        self.tab_consumed = false;
        self.wheel_consumed = false;
        self.measure_cache.clear();
        self.draw.clear();
        self.draw.set_texture(self.font_texture);
        self.draw.set_white_uv(self.atlas.white_uv);
        self.cursor = self.style.window_padding;
        self.prev_item_rect = Rect::default();
        trace!(frame = self.frame_count, "new frame");
    }

    /// Ends the frame: runs keyboard navigation, verifies stack balance, and
    /// publishes the draw data. Panics on bracket or stack misuse.
    pub fn end_frame(&mut self) {
        if !self.frame_started {
            panic!("end_frame called without a matching new_frame");
        }
        if !self.windows.is_empty() {
            panic!("begin/end imbalance: {} window(s) left open", self.windows.len());
        }
        if self.ids.len() != 0 {
            panic!("push_id/pop_id imbalance at end of frame");
        }
        if !self.color_stack.is_empty() {
            panic!("push_style_color/pop_style_color imbalance at end of frame");
        }
        if !self.var_stack.is_empty() {
            panic!("push_style_var/pop_style_var imbalance at end of frame");
        }
        if !self.wrap_pos_stack.is_empty() {
            panic!("push_text_wrap_pos/pop_text_wrap_pos imbalance at end of frame");
        }
        if self.draw.clip_depth() != 0 {
            panic!("push_clip_rect/pop_clip_rect imbalance at end of frame");
        }

        if self.io.key_pressed(Key::TAB) && !self.tab_consumed {
            let backward = self.io.keys().is_shift();
            if let Some(next) = nav::cycle_focus(self.focused_id, &self.focusable, backward) {
                self.focused_id = next;
            }
        }

        self.io.epilogue();
        self.draw_data.lists.clear();
        let list = self.draw.take();
        self.draw_data.lists.push(list);
        self.frame_started = false;
        trace!(
            frame = self.frame_count,
            vertices = self.draw_data.total_vtx_count(),
            indices = self.draw_data.total_idx_count(),
            "end frame"
        );
    }

    /// Geometry produced by the last completed frame.
    pub fn draw_data(&self) -> &DrawData { &self.draw_data }

    pub(crate) fn assert_frame(&self) {
        if !self.frame_started {
            panic!("widget call outside a new_frame/end_frame bracket");
        }
    }

    // ------------------------------------------------------------------
    // interaction state machine
    // ------------------------------------------------------------------

    /// Runs the shared pointer state machine for one item. Every interactive
    /// widget funnels through here, including the scrollbar thumb.
    pub fn item_behavior(&mut self, r: Rect, id: u32) -> ItemStatus {
        self.assert_frame();
        let mut status = ItemStatus::empty();

        // First registrant on a pixel wins the hover for the frame.
        let hovered = self.hovered_id == 0 && r.contains(self.io.mouse_pos);
        if hovered {
            self.hovered_id = id;
            status |= ItemStatus::HOVERED;
        }

        if hovered && self.io.mouse_pressed.is_left() && self.active_id == 0 {
            self.active_id = id;
        }

        if self.active_id == id {
            status |= ItemStatus::ACTIVE;
            if self.io.mouse_down.is_left() {
                status |= ItemStatus::HELD;
            } else {
                status |= ItemStatus::RELEASED | ItemStatus::DEACTIVATED;
                if hovered {
                    status |= ItemStatus::PRESSED;
                }
                self.active_id = 0;
                self.focused_id = id;
            }
        }

        if self.focused_id == id {
            status |= ItemStatus::FOCUSED;
        }

        self.last_item_id = id;
        self.last_item_rect = r;
        self.last_item_status = status;
        status
    }

    /// Registers an item for Tab navigation, in call order.
    pub(crate) fn register_focusable(&mut self, id: u32) { self.focusable.push(id) }

    /// ID of the item currently capturing the mouse, 0 when none.
    pub fn active_id(&self) -> u32 { self.active_id }

    /// ID of the item owning keyboard focus, 0 when none.
    pub fn focused_id(&self) -> u32 { self.focused_id }

    /// ID of the item under the pointer this frame, 0 when none.
    pub fn hovered_id(&self) -> u32 { self.hovered_id }

    /// Moves keyboard focus to the given item.
    pub fn set_focus(&mut self, id: u32) { self.focused_id = id }

    /// ID of the most recently submitted item.
    pub fn last_item_id(&self) -> u32 { self.last_item_id }

    /// Screen rectangle of the most recently submitted item.
    pub fn last_item_rect(&self) -> Rect { self.last_item_rect }

    /// Interaction status of the most recently submitted item.
    pub fn last_item_status(&self) -> ItemStatus { self.last_item_status }

    /// Returns `true` if the last item is hovered.
    pub fn is_item_hovered(&self) -> bool { self.last_item_status.is_hovered() }

    /// Returns `true` if the last item is active.
    pub fn is_item_active(&self) -> bool { self.last_item_status.is_active() }

    /// Returns `true` if the last item owns keyboard focus.
    pub fn is_item_focused(&self) -> bool { self.last_item_status.is_focused() }

    /// Returns `true` if the last item's bound value changed this frame.
    pub fn is_item_edited(&self) -> bool { self.last_item_status.is_edited() }

    // ------------------------------------------------------------------
    // identifiers
    // ------------------------------------------------------------------

    /// Seed for item hashing: the innermost window's id, or the global seed.
    pub(crate) fn id_seed(&self) -> u32 { self.windows.last().map(|w| w.id).unwrap_or(ID_SEED) }

    /// Derives the stable id for a label in the current window and id scope.
    pub fn get_id(&self, label: &str) -> u32 { self.ids.get_id(self.id_seed(), label) }

    /// Opens a string id scope for disambiguating repeated labels.
    pub fn push_id_str(&mut self, s: &str) { self.ids.push_id_str(s) }

    /// Opens an integer id scope, typically a loop index.
    pub fn push_id_int(&mut self, n: i32) { self.ids.push_id_int(n) }

    /// Closes the innermost id scope. Panics when none is open.
    pub fn pop_id(&mut self) { self.ids.pop_id() }

    // ------------------------------------------------------------------
    // style stacks
    // ------------------------------------------------------------------

    /// Overrides a style color until the matching pop.
    pub fn push_style_color(&mut self, idx: Col, color: Color) {
        self.color_stack.push((idx, self.style.colors[idx as usize]));
        self.style.colors[idx as usize] = color;
    }

    /// Restores the most recently pushed style color.
    pub fn pop_style_color(&mut self) {
        match self.color_stack.pop() {
            Some((idx, prev)) => self.style.colors[idx as usize] = prev,
            None => panic!("pop_style_color called with an empty color stack"),
        }
    }

    /// Overrides a style variable until the matching pop.
    pub fn push_style_var(&mut self, var: StyleVar, value: StyleValue) {
        self.var_stack.push((var, self.style.var(var)));
        self.style.set_var(var, value);
    }

    /// Restores the most recently pushed style variable.
    pub fn pop_style_var(&mut self) {
        match self.var_stack.pop() {
            Some((var, prev)) => self.style.set_var(var, prev),
            None => panic!("pop_style_var called with an empty variable stack"),
        }
    }

    /// Sets the wrap position, in window content coordinates, for
    /// [`Context::text_wrapped`] until the matching pop.
    pub fn push_text_wrap_pos(&mut self, wrap_x: f32) { self.wrap_pos_stack.push(wrap_x) }

    /// Restores the most recently pushed wrap position.
    pub fn pop_text_wrap_pos(&mut self) {
        match self.wrap_pos_stack.pop() {
            Some(_) => {}
            None => panic!("pop_text_wrap_pos called with an empty wrap stack"),
        }
    }

    // ------------------------------------------------------------------
    // text
    // ------------------------------------------------------------------

    /// Width of `text` in pixels, memoized for the rest of the frame.
    pub fn measure_text_width(&mut self, text: &str) -> f32 {
        if let Some(w) = self.measure_cache.get(text) {
            return *w;
        }
        let w = text::measure_width(&self.atlas, text);
        self.measure_cache.insert(text.to_string(), w);
        w
    }

    /// Bounding size of a label, without any `##` hidden suffix, optionally
    /// wrapped at `wrap_width` pixels.
    pub fn calc_text_size(&self, label: &str, wrap_width: Option<f32>) -> Vec2f {
        text::calc_size(text::visible_label(label), wrap_width, &self.atlas)
    }

    /// Emits one textured quad per glyph at `pos` (top-left of the line).
    /// Characters without a baked glyph are skipped.
    pub(crate) fn draw_text(&mut self, pos: Vec2f, col: Color, text: &str) {
        let mut pen_x = pos.x;
        let mut prev: Option<char> = None;
        for c in text.chars() {
            let glyph = match self.atlas.glyph(c) {
                Some(g) => *g,
                None => continue,
            };
            if let Some(p) = prev {
                pen_x += self.atlas.kerning(p, c);
            }
            if glyph.size.x > 0.0 && glyph.size.y > 0.0 {
                let min = vec2(pen_x + glyph.offset.x, pos.y + glyph.offset.y);
                self.draw.add_quad(
                    Rect {
                        min_x: min.x,
                        min_y: min.y,
                        max_x: min.x + glyph.size.x,
                        max_y: min.y + glyph.size.y,
                    },
                    Rect {
                        min_x: glyph.uv_min.x,
                        min_y: glyph.uv_min.y,
                        max_x: glyph.uv_max.x,
                        max_y: glyph.uv_max.y,
                    },
                    col,
                );
            }
            pen_x += glyph.advance;
            prev = Some(c);
        }
    }
}

impl Default for Context {
    fn default() -> Self { Self::new() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{rect, MouseButton};

    fn frame(ctx: &mut Context, f: impl FnOnce(&mut Context)) {
        ctx.new_frame();
        f(ctx);
        ctx.end_frame();
    }

    #[test]
    fn press_and_release_over_the_item_is_a_click() {
        let mut ctx = Context::new();
        let r = rect(0.0, 0.0, 100.0, 20.0);
        ctx.io_mut().set_mouse_position(50.0, 10.0);
        frame(&mut ctx, |c| {
            assert!(c.item_behavior(r, 1).is_hovered());
        });

        ctx.io_mut().set_mouse_button(MouseButton::LEFT, true);
        frame(&mut ctx, |c| {
            let s = c.item_behavior(r, 1);
            assert!(s.is_held());
            assert!(!s.is_pressed());
            assert_eq!(c.active_id(), 1);
        });

        ctx.io_mut().set_mouse_button(MouseButton::LEFT, false);
        frame(&mut ctx, |c| {
            let s = c.item_behavior(r, 1);
            assert!(s.is_pressed());
            assert!(s.is_released());
            assert!(s.is_deactivated());
            assert_eq!(c.active_id(), 0);
            assert_eq!(c.focused_id(), 1);
        });
    }

    #[test]
    fn release_away_from_the_item_is_not_a_click() {
        let mut ctx = Context::new();
        let r = rect(0.0, 0.0, 100.0, 20.0);
        ctx.io_mut().set_mouse_position(50.0, 10.0);
        ctx.io_mut().set_mouse_button(MouseButton::LEFT, true);
        frame(&mut ctx, |c| {
            assert!(c.item_behavior(r, 1).is_held());
        });

        ctx.io_mut().set_mouse_position(300.0, 300.0);
        ctx.io_mut().set_mouse_button(MouseButton::LEFT, false);
        frame(&mut ctx, |c| {
            let s = c.item_behavior(r, 1);
            assert!(!s.is_pressed());
            assert!(s.is_released());
            assert_eq!(c.active_id(), 0);
        });
    }

    #[test]
    fn first_registrant_wins_the_hover() {
        let mut ctx = Context::new();
        let r = rect(0.0, 0.0, 100.0, 20.0);
        ctx.io_mut().set_mouse_position(50.0, 10.0);
        frame(&mut ctx, |c| {
            assert!(c.item_behavior(r, 1).is_hovered());
            assert!(!c.item_behavior(r, 2).is_hovered());
            assert_eq!(c.hovered_id(), 1);
        });
    }

    #[test]
    fn active_item_keeps_the_capture_while_held() {
        let mut ctx = Context::new();
        let a = rect(0.0, 0.0, 100.0, 20.0);
        let b = rect(0.0, 30.0, 100.0, 50.0);
        ctx.io_mut().set_mouse_position(50.0, 10.0);
        ctx.io_mut().set_mouse_button(MouseButton::LEFT, true);
        frame(&mut ctx, |c| {
            c.item_behavior(a, 1);
        });

        // Dragging over the other item must not transfer the capture.
        ctx.io_mut().set_mouse_position(50.0, 40.0);
        frame(&mut ctx, |c| {
            assert!(c.item_behavior(a, 1).is_held());
            let s = c.item_behavior(b, 2);
            assert!(s.is_hovered());
            assert!(!s.is_active());
            assert_eq!(c.active_id(), 1);
        });
    }

    #[test]
    fn last_item_state_tracks_the_latest_registration() {
        let mut ctx = Context::new();
        let r = rect(0.0, 0.0, 10.0, 10.0);
        ctx.io_mut().set_mouse_position(5.0, 5.0);
        frame(&mut ctx, |c| {
            c.item_behavior(r, 7);
            assert_eq!(c.last_item_id(), 7);
            assert_eq!(c.last_item_rect(), r);
            assert!(c.is_item_hovered());
        });
    }

    #[test]
    fn style_color_stack_restores_previous_values() {
        let mut ctx = Context::new();
        let before = ctx.style().color(Col::Button);
        frame(&mut ctx, |c| {
            c.push_style_color(Col::Button, crate::color(1.0, 0.0, 0.0, 1.0));
            assert_eq!(c.style().color(Col::Button), crate::color(1.0, 0.0, 0.0, 1.0));
            c.pop_style_color();
            assert_eq!(c.style().color(Col::Button), before);
        });
    }

    #[test]
    #[should_panic]
    fn nested_new_frame_panics() {
        let mut ctx = Context::new();
        ctx.new_frame();
        ctx.new_frame();
    }

    #[test]
    #[should_panic]
    fn end_frame_without_new_frame_panics() {
        let mut ctx = Context::new();
        ctx.end_frame();
    }

    #[test]
    #[should_panic]
    fn leaking_an_id_scope_panics() {
        let mut ctx = Context::new();
        ctx.new_frame();
        ctx.push_id_str("scope");
        ctx.end_frame();
    }

    #[test]
    fn draw_data_is_published_at_end_frame() {
        let mut ctx = Context::new();
        frame(&mut ctx, |c| {
            let col = c.style().color(Col::Text);
            c.draw_text(vec2(0.0, 0.0), col, "hi");
        });
        assert_eq!(ctx.draw_data().total_vtx_count(), 8);
        assert_eq!(ctx.draw_data().total_idx_count(), 12);
    }

    #[test]
    fn measure_is_memoized_per_frame() {
        let mut ctx = Context::new();
        ctx.new_frame();
        let a = ctx.measure_text_width("cache me");
        let b = ctx.measure_text_width("cache me");
        assert_eq!(a, b);
        assert_eq!(a, 56.0);
        ctx.end_frame();
    }
}
