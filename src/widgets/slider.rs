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
use crate::{rect, vec2, Col, Context, ItemStatus, Key, Rect, Vec2f};

/// Fraction of the content width a value widget's frame takes by default.
const VALUE_WIDGET_WIDTH: f32 = 0.65;

impl Context {
    fn value_frame_size(&self) -> Vec2f {
        vec2(self.content_width() * VALUE_WIDGET_WIDTH, self.atlas.line_height + self.style.frame_padding.y * 2.0)
    }

    /// Keyboard modifier applied to slider steps: Shift coarser, Ctrl finer.
    fn slider_step_modifier(&self) -> f32 {
        let keys = self.io.keys();
        let mut m = 1.0;
        if keys.is_shift() {
            m *= 10.0;
        }
        if keys.is_ctrl() {
            m /= 10.0;
        }
        m
    }

    // ------------------------------------------------------------------
    // sliders
    // ------------------------------------------------------------------

    /// A bounded float slider with the default frame size. Returns `true`
    /// when the value changed this frame.
    pub fn slider_float(&mut self, label: &str, v: &mut f32, min: f32, max: f32) -> bool {
        let size = self.value_frame_size();
        self.slider_impl(label, v, min, max, size, false)
    }

    /// A bounded float slider with an explicit frame size.
    pub fn slider_float_with_size(&mut self, label: &str, v: &mut f32, min: f32, max: f32, size: Vec2f) -> bool {
        self.slider_impl(label, v, min, max, size, false)
    }

    /// A bounded int slider.
    pub fn slider_int(&mut self, label: &str, v: &mut i32, min: i32, max: i32) -> bool {
        let old = *v;
        let mut f = *v as f32;
        let size = self.value_frame_size();
        self.slider_impl(label, &mut f, min as f32, max as f32, size, true);
        *v = f.round() as i32;
        let changed = *v != old;
        if !changed && self.last_item_status.is_edited() {
            // A sub-integer keyboard step landed on the same value.
            self.last_item_status.remove(ItemStatus::EDITED);
        }
        changed
    }

    fn slider_impl(&mut self, label: &str, v: &mut f32, min: f32, max: f32, size: Vec2f, whole: bool) -> bool {
        self.assert_frame();
        let id = self.get_id(label);
        let frame = self.advance_cursor(size);
        self.register_focusable(id);
        let status = self.item_behavior(frame, id);
        let range = max - min;
        let old = *v;

        if (status.is_hovered() || status.is_focused()) && !status.is_held() && range > 0.0 {
            let modifier = self.slider_step_modifier();
            let mut step = 0.0;
            if self.io.key_pressed(Key::LEFT) {
                step -= range / 100.0;
            }
            if self.io.key_pressed(Key::RIGHT) {
                step += range / 100.0;
            }
            if self.io.key_pressed(Key::PAGE_DOWN) {
                step -= range / 10.0;
            }
            if self.io.key_pressed(Key::PAGE_UP) {
                step += range / 10.0;
            }
            *v += step * modifier;
            if self.io.key_pressed(Key::HOME) {
                *v = min;
            }
            if self.io.key_pressed(Key::END) {
                *v = max;
            }
        }

        // Pointer drag wins over keyboard while the grab is held.
        if status.is_held() && range > 0.0 {
            let track_min = frame.min_x + self.style.frame_padding.x;
            let track_w = (frame.width() - self.style.frame_padding.x * 2.0).max(1.0);
            let t = ((self.io.mouse_pos.x - track_min) / track_w).clamp(0.0, 1.0);
            *v = min + t * range;
        }

        *v = v.clamp(min, max);
        if whole {
            *v = v.round();
        }
        let changed = *v != old;
        if changed {
            self.mark_edited();
        }

        let fill = self.frame_color(status);
        self.draw_frame(frame, fill);
        self.draw_nav_highlight(frame, status);

        let t = if range > 0.0 { ((*v - min) / range).clamp(0.0, 1.0) } else { 0.0 };
        let grab_w = self.style.grab_min_size;
        let track_min = frame.min_x + self.style.frame_padding.x;
        let track_w = (frame.width() - self.style.frame_padding.x * 2.0 - grab_w).max(0.0);
        let grab_x = track_min + t * track_w;
        let grab = rect(grab_x, frame.min_y + 2.0, grab_x + grab_w, frame.max_y - 2.0);
        let grab_col = if status.is_held() { self.style.color(Col::SliderGrabActive) } else { self.style.color(Col::SliderGrab) };
        self.draw.add_rect_filled(grab, grab_col);

        let value_text = if whole { format!("{}", *v as i32) } else { format!("{:.3}", *v) };
        let value_w = self.measure_text_width(&value_text);
        let col = self.style.color(Col::Text);
        let pad_y = self.style.frame_padding.y;
        self.draw_text(vec2(frame.min_x + (frame.width() - value_w) * 0.5, frame.min_y + pad_y), col, &value_text);
        let spacing_x = self.style.item_spacing.x;
        self.draw_text(vec2(frame.max_x + spacing_x, frame.min_y + pad_y), col, text::visible_label(label));
        changed
    }

    // ------------------------------------------------------------------
    // drags
    // ------------------------------------------------------------------

    /// An unbounded float drag at 1 unit per pixel.
    pub fn drag_float(&mut self, label: &str, v: &mut f32) -> bool { self.drag_float_with(label, v, 1.0, 0.0, 0.0) }

    /// A float drag: `speed` units per pixel of pointer travel, clamped to
    /// `[min, max]` when `min < max`. Shift scales by 10, Ctrl by 0.1.
    pub fn drag_float_with(&mut self, label: &str, v: &mut f32, speed: f32, min: f32, max: f32) -> bool {
        self.assert_frame();
        let id = self.get_id(label);
        let size = self.value_frame_size();
        let frame = self.advance_cursor(size);
        self.register_focusable(id);
        let status = self.item_behavior(frame, id);
        let old = *v;

        if status.is_held() {
            *v += self.io.mouse_delta.x * speed * self.drag_modifier();
            if min < max {
                *v = v.clamp(min, max);
            }
        }
        let changed = *v != old;
        if changed {
            self.mark_edited();
        }

        let value_text = format!("{:.3}", *v);
        self.draw_value_frame(frame, status, &value_text, label);
        changed
    }

    /// An unbounded int drag at 1 unit per pixel.
    pub fn drag_int(&mut self, label: &str, v: &mut i32) -> bool { self.drag_int_with(label, v, 1.0, 0, 0) }

    /// An int drag. Sub-integer pointer travel accumulates across frames so
    /// slow drags still move the value.
    pub fn drag_int_with(&mut self, label: &str, v: &mut i32, speed: f32, min: i32, max: i32) -> bool {
        self.assert_frame();
        let id = self.get_id(label);
        let size = self.value_frame_size();
        let frame = self.advance_cursor(size);
        self.register_focusable(id);
        let status = self.item_behavior(frame, id);
        let old = *v;

        if status.is_held() {
            self.drag_accum += self.io.mouse_delta.x * speed * self.drag_modifier();
            let whole = self.drag_accum.trunc();
            if whole != 0.0 {
                self.drag_accum -= whole;
                *v += whole as i32;
                if min < max {
                    *v = (*v).clamp(min, max);
                }
            }
        }
        if status.is_deactivated() {
            self.drag_accum = 0.0;
        }
        let changed = *v != old;
        if changed {
            self.mark_edited();
        }

        let value_text = format!("{}", *v);
        self.draw_value_frame(frame, status, &value_text, label);
        changed
    }

    fn drag_modifier(&self) -> f32 {
        let keys = self.io.keys();
        let mut m = 1.0;
        if keys.is_shift() {
            m *= 10.0;
        }
        if keys.is_ctrl() {
            m *= 0.1;
        }
        m
    }

    fn draw_value_frame(&mut self, frame: Rect, status: ItemStatus, value_text: &str, label: &str) {
        let fill = self.frame_color(status);
        self.draw_frame(frame, fill);
        self.draw_nav_highlight(frame, status);
        let value_w = self.measure_text_width(value_text);
        let col = self.style.color(Col::Text);
        let pad_y = self.style.frame_padding.y;
        self.draw_text(vec2(frame.min_x + (frame.width() - value_w) * 0.5, frame.min_y + pad_y), col, value_text);
        let spacing_x = self.style.item_spacing.x;
        self.draw_text(vec2(frame.max_x + spacing_x, frame.min_y + pad_y), col, text::visible_label(label));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MouseButton;

    // All tests run outside a window: the frame spans x 8..138 and the
    // inner track, with 4 units of frame padding, x 12..134.

    #[test]
    fn grab_follows_the_pointer() {
        let mut c = Context::new();
        let mut v = 0.0f32;
        // Midpoint of the 122-unit track.
        c.io_mut().set_mouse_position(73.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        assert!(c.slider_float("s", &mut v, 0.0, 10.0));
        c.end_frame();
        assert_eq!(v, 5.0);
    }

    #[test]
    fn pointer_positions_outside_the_track_clamp() {
        let mut c = Context::new();
        let mut v = 5.0f32;
        c.io_mut().set_mouse_position(10.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        c.end_frame();
        assert_eq!(v, 0.0);
    }

    #[test]
    fn arrow_keys_step_a_hundredth_of_the_range() {
        let mut c = Context::new();
        let mut v = 5.0f32;
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        let id = c.last_item_id();
        c.end_frame();
        c.set_focus(id);

        c.io_mut().set_key(Key::RIGHT, true);
        c.new_frame();
        assert!(c.slider_float("s", &mut v, 0.0, 10.0));
        c.end_frame();
        assert!((v - 5.1).abs() < 1e-5);
    }

    #[test]
    fn shift_and_ctrl_scale_the_keyboard_step() {
        let mut c = Context::new();
        let mut v = 5.0f32;
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        let id = c.last_item_id();
        c.end_frame();
        c.set_focus(id);

        c.io_mut().set_key(Key::SHIFT, true);
        c.io_mut().set_key(Key::RIGHT, true);
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        c.end_frame();
        assert_eq!(v, 6.0);

        c.io_mut().set_key(Key::SHIFT, false);
        c.io_mut().set_key(Key::CTRL, true);
        c.io_mut().set_key(Key::RIGHT, false);
        c.io_mut().set_key(Key::RIGHT, true);
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        c.end_frame();
        assert!((v - 6.01).abs() < 1e-5);
    }

    #[test]
    fn page_and_home_end_jump() {
        let mut c = Context::new();
        let mut v = 5.0f32;
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        let id = c.last_item_id();
        c.end_frame();
        c.set_focus(id);

        c.io_mut().set_key(Key::PAGE_UP, true);
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        c.end_frame();
        assert_eq!(v, 6.0);

        c.io_mut().set_key(Key::PAGE_UP, false);
        c.io_mut().set_key(Key::HOME, true);
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        c.end_frame();
        assert_eq!(v, 0.0);

        c.io_mut().set_key(Key::HOME, false);
        c.io_mut().set_key(Key::END, true);
        c.new_frame();
        c.slider_float("s", &mut v, 0.0, 10.0);
        c.end_frame();
        assert_eq!(v, 10.0);
    }

    #[test]
    fn int_slider_lands_on_whole_values() {
        let mut c = Context::new();
        let mut v = 0i32;
        c.io_mut().set_mouse_position(73.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        assert!(c.slider_int("s", &mut v, 0, 9));
        c.end_frame();
        // t = 0.5 over a 0..9 range rounds 4.5 up.
        assert_eq!(v, 5);
    }

    #[test]
    fn drag_moves_by_pointer_delta_times_speed() {
        let mut c = Context::new();
        let mut v = 0.0f32;
        c.io_mut().set_mouse_position(50.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.drag_float_with("d", &mut v, 0.5, 0.0, 0.0);
        c.end_frame();
        assert_eq!(v, 0.0);

        c.io_mut().set_mouse_position(60.0, 15.0);
        c.new_frame();
        assert!(c.drag_float_with("d", &mut v, 0.5, 0.0, 0.0));
        c.end_frame();
        assert_eq!(v, 5.0);
    }

    #[test]
    fn drag_modifiers_scale_the_speed() {
        let mut c = Context::new();
        let mut v = 0.0f32;
        c.io_mut().set_mouse_position(50.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.drag_float_with("d", &mut v, 0.5, 0.0, 0.0);
        c.end_frame();

        // Shift makes the same travel ten times coarser.
        c.io_mut().set_key(Key::SHIFT, true);
        c.io_mut().set_mouse_position(60.0, 15.0);
        c.new_frame();
        c.drag_float_with("d", &mut v, 0.5, 0.0, 0.0);
        c.end_frame();
        assert_eq!(v, 50.0);

        // Ctrl makes it ten times finer.
        c.io_mut().set_key(Key::SHIFT, false);
        c.io_mut().set_key(Key::CTRL, true);
        c.io_mut().set_mouse_position(70.0, 15.0);
        c.new_frame();
        c.drag_float_with("d", &mut v, 0.5, 0.0, 0.0);
        c.end_frame();
        assert!((v - 50.5).abs() < 1e-4);
    }

    #[test]
    fn drag_clamps_only_with_a_real_range() {
        let mut c = Context::new();
        let mut v = 0.0f32;
        c.io_mut().set_mouse_position(50.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.drag_float_with("d", &mut v, 1.0, -1.0, 1.0);
        c.end_frame();

        c.io_mut().set_mouse_position(150.0, 15.0);
        c.new_frame();
        c.drag_float_with("d", &mut v, 1.0, -1.0, 1.0);
        c.end_frame();
        assert_eq!(v, 1.0);
    }

    #[test]
    fn int_drag_accumulates_sub_integer_travel() {
        let mut c = Context::new();
        let mut v = 0i32;
        c.io_mut().set_mouse_position(50.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.drag_int_with("d", &mut v, 0.3, 0, 0);
        c.end_frame();

        let mut x = 50.0;
        for _ in 0..3 {
            x += 1.0;
            c.io_mut().set_mouse_position(x, 15.0);
            c.new_frame();
            assert!(!c.drag_int_with("d", &mut v, 0.3, 0, 0));
            c.end_frame();
        }
        x += 1.0;
        c.io_mut().set_mouse_position(x, 15.0);
        c.new_frame();
        assert!(c.drag_int_with("d", &mut v, 0.3, 0, 0));
        c.end_frame();
        assert_eq!(v, 1);
    }

    #[test]
    fn int_drag_accumulator_resets_on_release() {
        let mut c = Context::new();
        let mut v = 0i32;
        c.io_mut().set_mouse_position(50.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.drag_int_with("d", &mut v, 0.3, 0, 0);
        c.end_frame();

        c.io_mut().set_mouse_position(52.0, 15.0);
        c.new_frame();
        c.drag_int_with("d", &mut v, 0.3, 0, 0);
        c.end_frame();

        c.io_mut().set_mouse_button(MouseButton::LEFT, false);
        c.new_frame();
        c.drag_int_with("d", &mut v, 0.3, 0, 0);
        c.end_frame();

        // A fresh grab starts from an empty accumulator.
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.drag_int_with("d", &mut v, 0.3, 0, 0);
        c.end_frame();
        c.io_mut().set_mouse_position(53.0, 15.0);
        c.new_frame();
        c.drag_int_with("d", &mut v, 0.3, 0, 0);
        c.end_frame();
        assert_eq!(v, 0);
    }
}
