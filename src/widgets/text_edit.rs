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

/// Steps one character left, staying on a char boundary.
pub(crate) fn move_left(buf: &str, cursor: usize) -> usize {
    if cursor == 0 {
        return 0;
    }
    let mut new_cursor = cursor - 1;
    while new_cursor > 0 && !buf.is_char_boundary(new_cursor) {
        new_cursor -= 1;
    }
    new_cursor
}

/// Steps one character right, staying on a char boundary.
pub(crate) fn move_right(buf: &str, cursor: usize) -> usize {
    if cursor >= buf.len() {
        return buf.len();
    }
    let mut new_cursor = cursor + 1;
    while new_cursor < buf.len() && !buf.is_char_boundary(new_cursor) {
        new_cursor += 1;
    }
    new_cursor
}

fn char_before(buf: &str, pos: usize) -> Option<char> { buf[..pos].chars().next_back() }

fn char_at(buf: &str, pos: usize) -> Option<char> { buf[pos..].chars().next() }

/// Start of the word left of the cursor: whitespace is skipped first, then
/// the word itself.
pub(crate) fn prev_word_boundary(buf: &str, cursor: usize) -> usize {
    let mut pos = cursor.min(buf.len());
    while pos > 0 && char_before(buf, pos).is_some_and(|c| c.is_whitespace()) {
        pos = move_left(buf, pos);
    }
    while pos > 0 && char_before(buf, pos).is_some_and(|c| !c.is_whitespace()) {
        pos = move_left(buf, pos);
    }
    pos
}

/// End of the word right of the cursor plus trailing whitespace.
pub(crate) fn next_word_boundary(buf: &str, cursor: usize) -> usize {
    let mut pos = cursor.min(buf.len());
    while pos < buf.len() && char_at(buf, pos).is_some_and(|c| !c.is_whitespace()) {
        pos = move_right(buf, pos);
    }
    while pos < buf.len() && char_at(buf, pos).is_some_and(|c| c.is_whitespace()) {
        pos = move_right(buf, pos);
    }
    pos
}

#[derive(Default, Clone)]
/// The single text editing session. At most one field owns it at a time;
/// activating another field replaces the whole state.
pub(crate) struct EditState {
    /// Item owning the session, 0 when no field is active.
    pub id: u32,
    /// Working copy of the field's text.
    pub text: String,
    /// Text captured at activation, restored by Escape.
    pub initial: String,
    /// Caret byte position.
    pub cursor: usize,
    /// Selection anchor byte position, equal to `cursor` without a selection.
    pub anchor: usize,
    /// Horizontal scroll keeping the caret visible.
    pub scroll_x: f32,
}

impl EditState {
    pub fn activate(&mut self, id: u32, text: &str, select_all: bool) {
        self.id = id;
        self.text = text.to_string();
        self.initial = text.to_string();
        self.cursor = text.len();
        self.anchor = if select_all { 0 } else { text.len() };
        self.scroll_x = 0.0;
    }

    pub fn deactivate(&mut self) { *self = Self::default() }

    pub fn has_selection(&self) -> bool { self.cursor != self.anchor }

    pub fn selection_range(&self) -> (usize, usize) { (self.cursor.min(self.anchor), self.cursor.max(self.anchor)) }

    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.text.len();
    }

    /// Removes the selected range. Returns `true` when text was removed.
    pub fn delete_selection(&mut self) -> bool {
        if !self.has_selection() {
            return false;
        }
        let (start, end) = self.selection_range();
        self.text.replace_range(start..end, "");
        self.cursor = start;
        self.anchor = start;
        true
    }

    /// Inserts at the caret, replacing any selection.
    pub fn insert_char(&mut self, c: char) {
        self.delete_selection();
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        self.anchor = self.cursor;
    }

    fn place_cursor(&mut self, pos: usize, extend: bool) {
        self.cursor = pos;
        if !extend {
            self.anchor = pos;
        }
    }

    pub fn move_cursor_left(&mut self, extend: bool, word: bool) {
        if self.has_selection() && !extend && !word {
            let (start, _) = self.selection_range();
            self.place_cursor(start, false);
            return;
        }
        let pos = if word { prev_word_boundary(&self.text, self.cursor) } else { move_left(&self.text, self.cursor) };
        self.place_cursor(pos, extend);
    }

    pub fn move_cursor_right(&mut self, extend: bool, word: bool) {
        if self.has_selection() && !extend && !word {
            let (_, end) = self.selection_range();
            self.place_cursor(end, false);
            return;
        }
        let pos = if word { next_word_boundary(&self.text, self.cursor) } else { move_right(&self.text, self.cursor) };
        self.place_cursor(pos, extend);
    }

    pub fn move_cursor_home(&mut self, extend: bool) { self.place_cursor(0, extend) }

    pub fn move_cursor_end(&mut self, extend: bool) { self.place_cursor(self.text.len(), extend) }

    /// Backspace: selection first, then one character or word.
    pub fn delete_prev(&mut self, word: bool) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor == 0 {
            return false;
        }
        let start = if word { prev_word_boundary(&self.text, self.cursor) } else { move_left(&self.text, self.cursor) };
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.anchor = start;
        true
    }

    /// Delete: selection first, then one character or word.
    pub fn delete_next(&mut self, word: bool) -> bool {
        if self.delete_selection() {
            return true;
        }
        if self.cursor >= self.text.len() {
            return false;
        }
        let end = if word { next_word_boundary(&self.text, self.cursor) } else { move_right(&self.text, self.cursor) };
        self.text.replace_range(self.cursor..end, "");
        self.anchor = self.cursor;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active(text: &str) -> EditState {
        let mut e = EditState::default();
        e.activate(1, text, false);
        e
    }

    #[test]
    fn activation_places_the_caret_at_the_end() {
        let e = active("hello");
        assert_eq!(e.cursor, 5);
        assert!(!e.has_selection());
        assert_eq!(e.initial, "hello");
    }

    #[test]
    fn select_all_on_activation() {
        let mut e = EditState::default();
        e.activate(1, "hello", true);
        assert!(e.has_selection());
        assert_eq!(e.selection_range(), (0, 5));
    }

    #[test]
    fn insert_replaces_the_selection() {
        let mut e = active("hello");
        e.select_all();
        e.insert_char('x');
        assert_eq!(e.text, "x");
        assert_eq!(e.cursor, 1);
        assert!(!e.has_selection());
    }

    #[test]
    fn word_boundaries_skip_runs_of_whitespace() {
        let buf = "hello  world foo";
        assert_eq!(prev_word_boundary(buf, 13), 7);
        assert_eq!(prev_word_boundary(buf, 7), 0);
        assert_eq!(next_word_boundary(buf, 0), 7);
        assert_eq!(next_word_boundary(buf, 7), 13);
        assert_eq!(next_word_boundary(buf, 13), 16);
    }

    #[test]
    fn ctrl_backspace_removes_a_word() {
        let mut e = active("hello world");
        assert!(e.delete_prev(true));
        assert_eq!(e.text, "hello ");
        assert_eq!(e.cursor, 6);
    }

    #[test]
    fn plain_left_collapses_a_selection_to_its_start() {
        let mut e = active("hello");
        e.select_all();
        e.move_cursor_left(false, false);
        assert_eq!(e.cursor, 0);
        assert!(!e.has_selection());
    }

    #[test]
    fn shift_arrows_extend_the_selection() {
        let mut e = active("ab");
        e.move_cursor_left(true, false);
        assert_eq!(e.selection_range(), (1, 2));
        e.move_cursor_left(true, false);
        assert_eq!(e.selection_range(), (0, 2));
    }

    #[test]
    fn moves_stay_on_char_boundaries() {
        let mut e = active("aé");
        e.move_cursor_left(false, false);
        assert_eq!(e.cursor, 1);
        e.move_cursor_left(false, false);
        assert_eq!(e.cursor, 0);
        e.move_cursor_right(false, false);
        assert_eq!(e.cursor, 1);
    }

    #[test]
    fn delete_next_removes_forward() {
        let mut e = active("abc");
        e.move_cursor_home(false);
        assert!(e.delete_next(false));
        assert_eq!(e.text, "bc");
        assert!(!e.delete_prev(false));
    }
}
