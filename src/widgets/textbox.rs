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
use crate::{rect, vec2, Col, Context, FontAtlas, InputTextFlags, Key};

/// Fraction of the content width the text frame takes.
const TEXT_FRAME_WIDTH: f32 = 0.65;
/// Caret blink period in seconds; the caret is lit for the first half.
const CARET_BLINK_PERIOD: f32 = 1.06;

/// What the field shows: the text itself, or one mask per character.
fn display_of(buf: &str, password: bool) -> String {
    if password { "*".repeat(buf.chars().count()) } else { buf.to_string() }
}

/// Byte length of the display prefix matching `cursor` bytes of `buf`.
fn display_prefix_len(buf: &str, cursor: usize, password: bool) -> usize {
    if password { buf[..cursor].chars().count() } else { cursor }
}

/// Byte position in `buf` nearest a click `rel_x` units into the text,
/// splitting each character at its midpoint.
fn caret_from_click(atlas: &FontAtlas, buf: &str, password: bool, rel_x: f32) -> usize {
    let mut x = 0.0;
    let mut prev: Option<char> = None;
    let mut idx = 0;
    for c in buf.chars() {
        let shown = if password { '*' } else { c };
        let advance = match atlas.glyph(shown) {
            Some(g) => g.advance,
            None => {
                idx += c.len_utf8();
                continue;
            }
        };
        let kern = prev.map(|p| atlas.kerning(p, shown)).unwrap_or(0.0);
        if rel_x < x + kern + advance * 0.5 {
            return idx;
        }
        x += kern + advance;
        idx += c.len_utf8();
        prev = Some(shown);
    }
    buf.len()
}

impl Context {
    /// A single-line text field bound to a string. Returns `true` when the
    /// string changed this frame.
    pub fn input_text(&mut self, label: &str, buf: &mut String) -> bool { self.input_text_with_flags(label, buf, InputTextFlags::NONE) }

    /// A single-line text field with behavior flags.
    pub fn input_text_with_flags(&mut self, label: &str, buf: &mut String, flags: InputTextFlags) -> bool {
        self.assert_frame();
        let id = self.get_id(label);
        let pad = self.style.frame_padding;
        let size = vec2(self.content_width() * TEXT_FRAME_WIDTH, self.atlas.line_height + pad.y * 2.0);
        let frame = self.advance_cursor(size);
        self.register_focusable(id);
        let status = self.item_behavior(frame, id);
        let inner = rect(frame.min_x + pad.x, frame.min_y + pad.y, frame.max_x - pad.x, frame.max_y - pad.y);
        let password = flags.is_password();
        let read_only = flags.is_read_only();

        let was_editing = self.edit.id == id;
        if status.is_pressed() {
            if !was_editing {
                self.edit.activate(id, buf, flags.is_auto_select_all());
            }
            if was_editing || !flags.is_auto_select_all() {
                let rel_x = self.io.mouse_pos.x - inner.min_x + self.edit.scroll_x;
                self.edit.cursor = caret_from_click(&self.atlas, &self.edit.text, password, rel_x);
                self.edit.anchor = self.edit.cursor;
            }
        }

        let mut changed = false;
        let mut submitted = false;
        if self.edit.id == id {
            let keys = self.io.keys();
            let shift = keys.is_shift();
            let ctrl = keys.is_ctrl();

            if !read_only {
                let chars: Vec<char> = self.io.input_chars.clone();
                for c in chars {
                    if c.is_control() {
                        continue;
                    }
                    let c = if flags.is_uppercase() { c.to_ascii_uppercase() } else { c };
                    if flags.is_no_blank() && c.is_whitespace() {
                        continue;
                    }
                    self.edit.insert_char(c);
                    changed = true;
                }
            }

            if self.io.key_pressed(Key::LEFT) {
                self.edit.move_cursor_left(shift, ctrl);
            }
            if self.io.key_pressed(Key::RIGHT) {
                self.edit.move_cursor_right(shift, ctrl);
            }
            if self.io.key_pressed(Key::HOME) {
                self.edit.move_cursor_home(shift);
            }
            if self.io.key_pressed(Key::END) {
                self.edit.move_cursor_end(shift);
            }
            if ctrl && self.io.key_pressed(Key::A) {
                self.edit.select_all();
            }
            if !read_only && self.io.key_pressed(Key::BACKSPACE) {
                changed |= self.edit.delete_prev(ctrl);
            }
            if !read_only && self.io.key_pressed(Key::DELETE) {
                changed |= self.edit.delete_next(ctrl);
            }

            if self.io.key_pressed(Key::ESCAPE) {
                // Abandon the session; the bound string reverts wholesale.
                *buf = self.edit.initial.clone();
                self.edit.deactivate();
                changed = false;
            } else {
                let mut deactivate = false;
                if self.io.key_pressed(Key::RETURN) {
                    submitted = true;
                    deactivate = true;
                }
                if self.io.key_pressed(Key::TAB) {
                    if flags.is_allow_tab_input() && !read_only {
                        self.edit.insert_char('\t');
                        changed = true;
                        self.tab_consumed = true;
                    } else {
                        deactivate = true;
                    }
                }
                if self.io.mouse_pressed.is_left() && !frame.contains(self.io.mouse_pos) {
                    deactivate = true;
                }

                if *buf != self.edit.text {
                    *buf = self.edit.text.clone();
                }
                if deactivate {
                    self.edit.deactivate();
                }
            }
        }
        if changed {
            self.mark_edited();
        }

        let editing = self.edit.id == id;
        let fill = if editing {
            self.style.color(Col::FrameBgActive)
        } else if status.is_hovered() {
            self.style.color(Col::FrameBgHovered)
        } else {
            self.style.color(Col::FrameBg)
        };
        self.draw_frame(frame, fill);
        self.draw_nav_highlight(frame, status);

        let display = if editing { display_of(&self.edit.text, password) } else { display_of(buf, password) };
        if editing {
            let caret_prefix = display_prefix_len(&self.edit.text, self.edit.cursor, password);
            let caret_x = text::measure_width(&self.atlas, &display[..caret_prefix]);
            if caret_x - self.edit.scroll_x > inner.width() {
                self.edit.scroll_x = caret_x - inner.width();
            }
            if caret_x < self.edit.scroll_x {
                self.edit.scroll_x = caret_x;
            }
        }
        let scroll_x = if editing { self.edit.scroll_x } else { 0.0 };
        let text_x = inner.min_x - scroll_x;

        self.draw.push_clip_rect(self.draw.current_clip().intersect(&inner));
        if editing && self.edit.has_selection() {
            let (sel_min, sel_max) = self.edit.selection_range();
            let x0 = text::measure_width(&self.atlas, &display[..display_prefix_len(&self.edit.text, sel_min, password)]);
            let x1 = text::measure_width(&self.atlas, &display[..display_prefix_len(&self.edit.text, sel_max, password)]);
            let band = rect(text_x + x0, inner.min_y, text_x + x1, inner.min_y + self.atlas.line_height);
            self.draw.add_rect_filled(band, self.style.color(Col::TextSelectedBg));
        }
        let col = self.style.color(Col::Text);
        self.draw_text(vec2(text_x, inner.min_y), col, &display);
        if editing && self.io.time % CARET_BLINK_PERIOD < CARET_BLINK_PERIOD * 0.5 {
            let caret_prefix = display_prefix_len(&self.edit.text, self.edit.cursor, password);
            let caret_x = text_x + text::measure_width(&self.atlas, &display[..caret_prefix]);
            let caret = rect(caret_x, inner.min_y, caret_x + 1.0, inner.min_y + self.atlas.line_height);
            self.draw.add_rect_filled(caret, col);
        }
        self.draw.pop_clip_rect();

        let spacing_x = self.style.item_spacing.x;
        self.draw_text(vec2(frame.max_x + spacing_x, frame.min_y + pad.y), col, text::visible_label(label));

        if flags.is_enter_returns_true() { submitted } else { changed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MouseButton;

    // The field frame spans x 8..138 outside a window; a click at (20, 15)
    // lands inside it.

    fn activate(c: &mut Context, buf: &mut String, flags: InputTextFlags) {
        c.io_mut().set_mouse_position(20.0, 15.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.input_text_with_flags("t", buf, flags);
        c.end_frame();
        c.io_mut().set_mouse_button(MouseButton::LEFT, false);
        c.new_frame();
        c.input_text_with_flags("t", buf, flags);
        c.end_frame();
    }

    #[test]
    fn typing_appends_to_an_empty_field() {
        let mut c = Context::new();
        let mut s = String::new();
        activate(&mut c, &mut s, InputTextFlags::NONE);
        c.io_mut().add_input_char('h');
        c.io_mut().add_input_char('i');
        c.new_frame();
        assert!(c.input_text("t", &mut s));
        assert!(c.is_item_edited());
        c.end_frame();
        assert_eq!(s, "hi");
    }

    #[test]
    fn typing_without_activation_is_ignored() {
        let mut c = Context::new();
        let mut s = String::new();
        c.io_mut().add_input_char('x');
        c.new_frame();
        assert!(!c.input_text("t", &mut s));
        c.end_frame();
        assert_eq!(s, "");
    }

    #[test]
    fn escape_reverts_to_the_activation_snapshot() {
        let mut c = Context::new();
        let mut s = String::from("abc");
        activate(&mut c, &mut s, InputTextFlags::NONE);
        c.io_mut().add_input_char('x');
        c.new_frame();
        c.input_text("t", &mut s);
        c.end_frame();
        assert_ne!(s, "abc");

        c.io_mut().set_key(Key::ESCAPE, true);
        c.new_frame();
        assert!(!c.input_text("t", &mut s));
        c.end_frame();
        assert_eq!(s, "abc");
        assert_eq!(c.edit.id, 0);
    }

    #[test]
    fn auto_select_all_replaces_on_first_keystroke() {
        let mut c = Context::new();
        let mut s = String::from("abc");
        activate(&mut c, &mut s, InputTextFlags::AUTO_SELECT_ALL);
        c.io_mut().add_input_char('z');
        c.new_frame();
        c.input_text_with_flags("t", &mut s, InputTextFlags::AUTO_SELECT_ALL);
        c.end_frame();
        assert_eq!(s, "z");
    }

    #[test]
    fn tab_inserts_when_allowed_and_keeps_focus() {
        let mut c = Context::new();
        let mut s = String::new();
        activate(&mut c, &mut s, InputTextFlags::ALLOW_TAB_INPUT);
        let id = c.last_item_id();
        c.io_mut().set_key(Key::TAB, true);
        c.new_frame();
        assert!(c.input_text_with_flags("t", &mut s, InputTextFlags::ALLOW_TAB_INPUT));
        c.end_frame();
        assert_eq!(s, "\t");
        assert_eq!(c.edit.id, id);
    }

    #[test]
    fn tab_deactivates_when_insertion_is_not_allowed() {
        let mut c = Context::new();
        let mut s = String::new();
        activate(&mut c, &mut s, InputTextFlags::NONE);
        c.io_mut().set_key(Key::TAB, true);
        c.new_frame();
        c.input_text("t", &mut s);
        c.end_frame();
        assert_eq!(c.edit.id, 0);

        // With the session gone, characters no longer land in the field.
        c.io_mut().set_key(Key::TAB, false);
        c.io_mut().add_input_char('x');
        c.new_frame();
        assert!(!c.input_text("t", &mut s));
        c.end_frame();
        assert_eq!(s, "");
    }

    #[test]
    fn select_all_then_backspace_clears_the_field() {
        let mut c = Context::new();
        let mut s = String::from("hello");
        activate(&mut c, &mut s, InputTextFlags::NONE);
        c.io_mut().set_key(Key::CTRL, true);
        c.io_mut().set_key(Key::A, true);
        c.new_frame();
        c.input_text("t", &mut s);
        c.end_frame();

        c.io_mut().set_key(Key::CTRL, false);
        c.io_mut().set_key(Key::A, false);
        c.io_mut().set_key(Key::BACKSPACE, true);
        c.new_frame();
        assert!(c.input_text("t", &mut s));
        c.end_frame();
        assert_eq!(s, "");
    }

    #[test]
    fn ctrl_backspace_removes_the_trailing_word() {
        let mut c = Context::new();
        let mut s = String::from("hello world");
        activate(&mut c, &mut s, InputTextFlags::NONE);
        c.io_mut().set_key(Key::END, true);
        c.new_frame();
        c.input_text("t", &mut s);
        c.end_frame();

        c.io_mut().set_key(Key::END, false);
        c.io_mut().set_key(Key::CTRL, true);
        c.io_mut().set_key(Key::BACKSPACE, true);
        c.new_frame();
        assert!(c.input_text("t", &mut s));
        c.end_frame();
        assert_eq!(s, "hello ");
    }

    #[test]
    fn read_only_fields_never_change() {
        let mut c = Context::new();
        let mut s = String::from("abc");
        activate(&mut c, &mut s, InputTextFlags::READ_ONLY);
        c.io_mut().add_input_char('x');
        c.io_mut().set_key(Key::BACKSPACE, true);
        c.new_frame();
        assert!(!c.input_text_with_flags("t", &mut s, InputTextFlags::READ_ONLY));
        c.end_frame();
        assert_eq!(s, "abc");
    }

    #[test]
    fn uppercase_and_no_blank_filters_apply() {
        let mut c = Context::new();
        let mut s = String::new();
        let flags = InputTextFlags::CHARS_UPPERCASE | InputTextFlags::CHARS_NO_BLANK;
        activate(&mut c, &mut s, flags);
        c.io_mut().add_input_char('a');
        c.io_mut().add_input_char(' ');
        c.io_mut().add_input_char('b');
        c.new_frame();
        c.input_text_with_flags("t", &mut s, flags);
        c.end_frame();
        assert_eq!(s, "AB");
    }

    #[test]
    fn enter_commits_and_reports_a_submit() {
        let mut c = Context::new();
        let mut s = String::new();
        activate(&mut c, &mut s, InputTextFlags::ENTER_RETURNS_TRUE);
        c.io_mut().add_input_char('o');
        c.io_mut().add_input_char('k');
        c.new_frame();
        // With the submit flag, plain edits report false.
        assert!(!c.input_text_with_flags("t", &mut s, InputTextFlags::ENTER_RETURNS_TRUE));
        c.end_frame();

        c.io_mut().set_key(Key::RETURN, true);
        c.new_frame();
        assert!(c.input_text_with_flags("t", &mut s, InputTextFlags::ENTER_RETURNS_TRUE));
        c.end_frame();
        assert_eq!(s, "ok");
        assert_eq!(c.edit.id, 0);
    }

    #[test]
    fn clicking_away_commits_the_session() {
        let mut c = Context::new();
        let mut s = String::new();
        activate(&mut c, &mut s, InputTextFlags::NONE);
        c.io_mut().add_input_char('q');
        c.new_frame();
        c.input_text("t", &mut s);
        c.end_frame();

        c.io_mut().set_mouse_position(300.0, 300.0);
        c.io_mut().set_mouse_button(MouseButton::LEFT, true);
        c.new_frame();
        c.input_text("t", &mut s);
        c.end_frame();
        assert_eq!(s, "q");
        assert_eq!(c.edit.id, 0);
    }

    #[test]
    fn click_position_places_the_caret_between_characters() {
        // 7-unit glyphs: 10 units in is past "a" (3.5) and before the
        // midpoint of "b" (10.5).
        let atlas = FontAtlas::monospace();
        assert_eq!(caret_from_click(&atlas, "abc", false, 10.0), 1);
        assert_eq!(caret_from_click(&atlas, "abc", false, 100.0), 3);
        assert_eq!(caret_from_click(&atlas, "abc", false, -5.0), 0);
    }

    #[test]
    fn password_fields_mask_every_character() {
        assert_eq!(display_of("secret", true), "******");
        assert_eq!(display_of("secret", false), "secret");
        assert_eq!(display_prefix_len("héllo", 3, true), 2);
    }
}
