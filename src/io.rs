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
use crate::{vec2, InputEvent, Key, MouseButton, Vec2f};

#[derive(Clone, Debug)]
/// Aggregates raw input and exposes the per-frame view widgets consume.
///
/// Events queued through [`Io::add_event`] (or the convenience setters) are
/// applied at the start of the next frame; pressed/released edges are derived
/// against the state snapshotted when the previous frame ended.
pub struct Io {
    /// Size of the display surface in pixels.
    pub display_size: Vec2f,
    /// Seconds elapsed since the previous frame.
    pub delta_time: f32,

    pub(crate) time: f32,
    pub(crate) events: Vec<InputEvent>,
    pub(crate) mouse_pos: Vec2f,
    pub(crate) last_mouse_pos: Vec2f,
    pub(crate) mouse_delta: Vec2f,
    pub(crate) wheel_delta: f32,
    pub(crate) mouse_down: MouseButton,
    pub(crate) mouse_pressed: MouseButton,
    pub(crate) mouse_released: MouseButton,
    pub(crate) key_down: Key,
    pub(crate) key_pressed: Key,
    pub(crate) input_chars: Vec<char>,
}

impl Default for Io {
    fn default() -> Self {
        Self {
            display_size: vec2(0.0, 0.0),
            delta_time: 1.0 / 60.0,
            time: 0.0,
            events: Vec::new(),
            mouse_pos: vec2(-f32::MAX, -f32::MAX),
            last_mouse_pos: vec2(-f32::MAX, -f32::MAX),
            mouse_delta: vec2(0.0, 0.0),
            wheel_delta: 0.0,
            mouse_down: MouseButton::NONE,
            mouse_pressed: MouseButton::NONE,
            mouse_released: MouseButton::NONE,
            key_down: Key::NONE,
            key_pressed: Key::NONE,
            input_chars: Vec::new(),
        }
    }
}

impl Io {
    /// Queues a raw input event for the next frame.
    pub fn add_event(&mut self, event: InputEvent) { self.events.push(event) }

    /// Queues a pointer move to an absolute position.
    pub fn set_mouse_position(&mut self, x: f32, y: f32) { self.add_event(InputEvent::MousePos(vec2(x, y))) }

    /// Queues a mouse button transition.
    pub fn set_mouse_button(&mut self, button: MouseButton, down: bool) { self.add_event(InputEvent::MouseButton { button, down }) }

    /// Queues a scroll wheel movement in lines.
    pub fn set_mouse_wheel(&mut self, lines: f32) { self.add_event(InputEvent::MouseWheel(lines)) }

    /// Queues a key transition.
    pub fn set_key(&mut self, key: Key, down: bool) { self.add_event(InputEvent::Key { key, down }) }

    /// Queues an entered unicode character.
    pub fn add_input_char(&mut self, c: char) { self.add_event(InputEvent::Text(c)) }

    /// Accumulates elapsed time for the next frame.
    pub fn update_delta_time(&mut self, dt: f32) { self.delta_time = dt }

    /// Returns the current pointer position.
    pub fn mouse_position(&self) -> Vec2f { self.mouse_pos }

    /// Returns the pointer movement since the previous frame.
    pub fn mouse_delta(&self) -> Vec2f { self.mouse_delta }

    /// Returns the currently held mouse buttons.
    pub fn mouse_buttons(&self) -> MouseButton { self.mouse_down }

    /// Returns the buttons released this frame.
    pub fn mouse_released(&self) -> MouseButton { self.mouse_released }

    /// Returns the currently held keys.
    pub fn keys(&self) -> Key { self.key_down }

    /// Returns `true` on the frame the key transitioned to down.
    pub fn key_pressed(&self, key: Key) -> bool { self.key_pressed.intersects(key) }

    /// Returns the characters entered this frame.
    pub fn input_chars(&self) -> &[char] { &self.input_chars }

    /// Drains the event queue into the per-frame view. Called by `new_frame`.
    pub(crate) fn prelude(&mut self) {
        self.time += self.delta_time;
        for event in std::mem::take(&mut self.events) {
            match event {
                InputEvent::MousePos(p) => self.mouse_pos = p,
                InputEvent::MouseButton { button, down } => {
                    if down {
                        if !self.mouse_down.intersects(button) {
                            self.mouse_pressed |= button;
                        }
                        self.mouse_down |= button;
                    } else {
                        if self.mouse_down.intersects(button) {
                            self.mouse_released |= button;
                        }
                        self.mouse_down &= !button;
                    }
                }
                InputEvent::MouseWheel(lines) => self.wheel_delta += lines,
                InputEvent::Key { key, down } => {
                    if down {
                        if !self.key_down.intersects(key) {
                            self.key_pressed |= key;
                        }
                        self.key_down |= key;
                    } else {
                        self.key_down &= !key;
                    }
                }
                InputEvent::Text(c) => self.input_chars.push(c),
            }
        }
        if self.last_mouse_pos.x == -f32::MAX {
            self.last_mouse_pos = self.mouse_pos;
        }
        self.mouse_delta = vec2(self.mouse_pos.x - self.last_mouse_pos.x, self.mouse_pos.y - self.last_mouse_pos.y);
    }

    /// Snapshots state for the next frame's edge detection. Called by `end_frame`.
    pub(crate) fn epilogue(&mut self) {
        self.mouse_pressed = MouseButton::NONE;
        self.mouse_released = MouseButton::NONE;
        self.key_pressed = Key::NONE;
        self.wheel_delta = 0.0;
        self.input_chars.clear();
        self.last_mouse_pos = self.mouse_pos;
    }
}
