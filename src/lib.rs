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
#![deny(missing_docs)]
//! `imgui-redux` is an immediate-mode GUI runtime. Application code calls
//! widget methods on a [`Context`] every frame; the runtime reconstructs
//! hover, press, drag, and focus state and emits a batched list of textured
//! triangles ([`DrawData`]) that any render backend can consume with
//! scissored indexed draws. Windowing, GPU submission, and font
//! rasterization stay outside the crate (an optional `builder` feature bakes
//! a [`FontAtlas`] from TrueType bytes).

mod atlas;
mod context;
mod draw_list;
mod idmngr;
mod io;
mod nav;
mod scrollbar;
mod style;
mod text;
mod widgets;
mod window;

pub use atlas::*;
pub use context::Context;
pub use draw_list::*;
pub use io::Io;
pub use rs_math3d::*;
pub use style::*;
pub use widgets::*;
pub use window::WindowState;

use bitflags::*;

/// Axis-aligned rectangle stored as min/max corners, Y down.
#[derive(Default, Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub min_x: f32,
    /// Top edge.
    pub min_y: f32,
    /// Right edge.
    pub max_x: f32,
    /// Bottom edge.
    pub max_y: f32,
}

impl Rect {
    /// Builds a rectangle from a top-left corner and a size.
    pub fn from_pos_size(pos: Vec2f, size: Vec2f) -> Self {
        Self {
            min_x: pos.x,
            min_y: pos.y,
            max_x: pos.x + size.x,
            max_y: pos.y + size.y,
        }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 { self.max_x - self.min_x }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 { self.max_y - self.min_y }

    /// Top-left corner.
    pub fn min(&self) -> Vec2f { vec2(self.min_x, self.min_y) }

    /// Bottom-right corner.
    pub fn max(&self) -> Vec2f { vec2(self.max_x, self.max_y) }

    /// Returns `true` if the point lies inside the rectangle (edges inclusive).
    pub fn contains(&self, p: Vec2f) -> bool { p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y }

    /// Intersection of two rectangles. Degenerate when they do not overlap.
    pub fn intersect(&self, other: &Rect) -> Rect {
        Rect {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        }
    }

    /// Expands (or shrinks) the rectangle uniformly on all sides.
    pub fn expand(&self, n: f32) -> Rect {
        Rect {
            min_x: self.min_x - n,
            min_y: self.min_y - n,
            max_x: self.max_x + n,
            max_y: self.max_y + n,
        }
    }
}

/// Rectangle used for primitives recorded outside any clip scope.
pub(crate) const UNCLIPPED_RECT: Rect = Rect {
    min_x: -f32::MAX,
    min_y: -f32::MAX,
    max_x: f32::MAX,
    max_y: f32::MAX,
};

#[derive(Default, Copy, Clone, Debug, PartialEq)]
/// RGBA color with normalized floating-point components.
pub struct Color {
    /// Red channel in [0, 1].
    pub r: f32,
    /// Green channel in [0, 1].
    pub g: f32,
    /// Blue channel in [0, 1].
    pub b: f32,
    /// Alpha channel in [0, 1].
    pub a: f32,
}

impl Color {
    /// Packs the color into a `0xAABBGGRR` integer as stored in [`DrawVertex`].
    pub fn pack_abgr(&self) -> u32 {
        let r = (self.r.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        let g = (self.g.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        let b = (self.b.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        let a = (self.a.clamp(0.0, 1.0) * 255.0 + 0.5) as u32;
        (a << 24) | (b << 16) | (g << 8) | r
    }
}

/// Convenience constructor for [`Vec2f`].
pub fn vec2(x: f32, y: f32) -> Vec2f { Vec2f { x, y } }

/// Convenience constructor for [`Rect`].
pub fn rect(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Rect { Rect { min_x, min_y, max_x, max_y } }

/// Convenience constructor for [`Color`].
pub fn color(r: f32, g: f32, b: f32, a: f32) -> Color { Color { r, g, b, a } }

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
/// Handle referencing a backend-owned texture.
pub struct TextureId(pub u32);

impl TextureId {
    /// Returns the raw numeric identifier stored inside the handle.
    pub fn raw(self) -> u32 { self.0 }
}

bitflags! {
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    /// State bits describing the interaction outcome of the last item.
    pub struct ItemStatus : u32 {
        /// The pointer is over the item and no earlier item claimed it.
        const HOVERED = 1;
        /// The item owns the active ID and the mouse button is held.
        const HELD = 2;
        /// The mouse was released over the item this frame (a click).
        const PRESSED = 4;
        /// The mouse was released this frame, over the item or not.
        const RELEASED = 8;
        /// The item owns the active ID.
        const ACTIVE = 16;
        /// The item owns keyboard focus.
        const FOCUSED = 32;
        /// The item stopped being active this frame.
        const DEACTIVATED = 64;
        /// The item's bound value changed this frame.
        const EDITED = 128;
    }
}

impl ItemStatus {
    /// Returns `true` if the pointer hovers the item.
    pub fn is_hovered(&self) -> bool { self.intersects(Self::HOVERED) }
    /// Returns `true` if the item is held down.
    pub fn is_held(&self) -> bool { self.intersects(Self::HELD) }
    /// Returns `true` if the item was clicked this frame.
    pub fn is_pressed(&self) -> bool { self.intersects(Self::PRESSED) }
    /// Returns `true` if the mouse was released from the item this frame.
    pub fn is_released(&self) -> bool { self.intersects(Self::RELEASED) }
    /// Returns `true` if the item owns the active ID.
    pub fn is_active(&self) -> bool { self.intersects(Self::ACTIVE) }
    /// Returns `true` if the item owns keyboard focus.
    pub fn is_focused(&self) -> bool { self.intersects(Self::FOCUSED) }
    /// Returns `true` if the item stopped being active this frame.
    pub fn is_deactivated(&self) -> bool { self.intersects(Self::DEACTIVATED) }
    /// Returns `true` if the item's bound value changed this frame.
    pub fn is_edited(&self) -> bool { self.intersects(Self::EDITED) }
}

bitflags! {
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    /// Options that alter text input behavior.
    pub struct InputTextFlags : u32 {
        /// Uppercases every inserted character.
        const CHARS_UPPERCASE = 1;
        /// Rejects whitespace characters.
        const CHARS_NO_BLANK = 2;
        /// Renders every character as `*`.
        const PASSWORD = 4;
        /// Displays the text but rejects all edits.
        const READ_ONLY = 8;
        /// Reports `true` only when Enter is pressed instead of on each edit.
        const ENTER_RETURNS_TRUE = 16;
        /// Selects the whole buffer when the field activates.
        const AUTO_SELECT_ALL = 32;
        /// Inserts a tab character instead of moving focus.
        const ALLOW_TAB_INPUT = 64;
        /// No options.
        const NONE = 0;
    }
}

impl InputTextFlags {
    /// Returns `true` if inserted characters are uppercased.
    pub fn is_uppercase(&self) -> bool { self.intersects(Self::CHARS_UPPERCASE) }
    /// Returns `true` if whitespace is rejected.
    pub fn is_no_blank(&self) -> bool { self.intersects(Self::CHARS_NO_BLANK) }
    /// Returns `true` if the field renders masked characters.
    pub fn is_password(&self) -> bool { self.intersects(Self::PASSWORD) }
    /// Returns `true` if edits are rejected.
    pub fn is_read_only(&self) -> bool { self.intersects(Self::READ_ONLY) }
    /// Returns `true` if the field reports only on Enter.
    pub fn is_enter_returns_true(&self) -> bool { self.intersects(Self::ENTER_RETURNS_TRUE) }
    /// Returns `true` if the whole buffer is selected on activation.
    pub fn is_auto_select_all(&self) -> bool { self.intersects(Self::AUTO_SELECT_ALL) }
    /// Returns `true` if Tab inserts a character.
    pub fn is_allow_tab_input(&self) -> bool { self.intersects(Self::ALLOW_TAB_INPUT) }
}

bitflags! {
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    /// Mouse button state as reported by the input system.
    pub struct MouseButton : u32 {
        /// Middle mouse button.
        const MIDDLE = 4;
        /// Right mouse button.
        const RIGHT = 2;
        /// Left mouse button.
        const LEFT = 1;
        /// No buttons pressed.
        const NONE = 0;
    }
}

impl MouseButton {
    /// Returns `true` if the middle mouse button is pressed.
    pub fn is_middle(&self) -> bool { self.intersects(Self::MIDDLE) }
    /// Returns `true` if the right mouse button is pressed.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if the left mouse button is pressed.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if no mouse buttons are pressed.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
}

bitflags! {
    #[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
    /// Logical keys handled by the runtime.
    pub struct Key : u32 {
        /// Tab key.
        const TAB = 1;
        /// Left arrow key.
        const LEFT = 2;
        /// Right arrow key.
        const RIGHT = 4;
        /// Up arrow key.
        const UP = 8;
        /// Down arrow key.
        const DOWN = 16;
        /// Page Up key.
        const PAGE_UP = 32;
        /// Page Down key.
        const PAGE_DOWN = 64;
        /// Home key.
        const HOME = 128;
        /// End key.
        const END = 256;
        /// Backspace key.
        const BACKSPACE = 512;
        /// Delete key.
        const DELETE = 1024;
        /// Return/Enter key.
        const RETURN = 2048;
        /// Escape key.
        const ESCAPE = 4096;
        /// The letter A, used for select-all.
        const A = 8192;
        /// Control modifier.
        const CTRL = 16384;
        /// Shift modifier.
        const SHIFT = 32768;
        /// Alt modifier.
        const ALT = 65536;
        /// No keys.
        const NONE = 0;
    }
}

impl Key {
    /// Returns `true` if no keys are set.
    pub fn is_none(&self) -> bool { self.bits() == 0 }
    /// Returns `true` if Tab is set.
    pub fn is_tab(&self) -> bool { self.intersects(Self::TAB) }
    /// Returns `true` if the left arrow is set.
    pub fn is_left(&self) -> bool { self.intersects(Self::LEFT) }
    /// Returns `true` if the right arrow is set.
    pub fn is_right(&self) -> bool { self.intersects(Self::RIGHT) }
    /// Returns `true` if the up arrow is set.
    pub fn is_up(&self) -> bool { self.intersects(Self::UP) }
    /// Returns `true` if the down arrow is set.
    pub fn is_down(&self) -> bool { self.intersects(Self::DOWN) }
    /// Returns `true` if Page Up is set.
    pub fn is_page_up(&self) -> bool { self.intersects(Self::PAGE_UP) }
    /// Returns `true` if Page Down is set.
    pub fn is_page_down(&self) -> bool { self.intersects(Self::PAGE_DOWN) }
    /// Returns `true` if Home is set.
    pub fn is_home(&self) -> bool { self.intersects(Self::HOME) }
    /// Returns `true` if End is set.
    pub fn is_end(&self) -> bool { self.intersects(Self::END) }
    /// Returns `true` if Backspace is set.
    pub fn is_backspace(&self) -> bool { self.intersects(Self::BACKSPACE) }
    /// Returns `true` if Delete is set.
    pub fn is_delete(&self) -> bool { self.intersects(Self::DELETE) }
    /// Returns `true` if Return/Enter is set.
    pub fn is_return(&self) -> bool { self.intersects(Self::RETURN) }
    /// Returns `true` if Escape is set.
    pub fn is_escape(&self) -> bool { self.intersects(Self::ESCAPE) }
    /// Returns `true` if the letter A is set.
    pub fn is_a(&self) -> bool { self.intersects(Self::A) }
    /// Returns `true` if Control is set.
    pub fn is_ctrl(&self) -> bool { self.intersects(Self::CTRL) }
    /// Returns `true` if Shift is set.
    pub fn is_shift(&self) -> bool { self.intersects(Self::SHIFT) }
    /// Returns `true` if Alt is set.
    pub fn is_alt(&self) -> bool { self.intersects(Self::ALT) }
}

#[derive(Copy, Clone, Debug)]
/// Raw input event queued by the windowing backend.
pub enum InputEvent {
    /// A key transitioned up or down.
    Key {
        /// The logical key.
        key: Key,
        /// `true` on press, `false` on release.
        down: bool,
    },
    /// A unicode character was entered.
    Text(char),
    /// A mouse button transitioned up or down.
    MouseButton {
        /// The button.
        button: MouseButton,
        /// `true` on press, `false` on release.
        down: bool,
    },
    /// The scroll wheel moved by the given number of lines.
    MouseWheel(f32),
    /// The pointer moved to an absolute position.
    MousePos(Vec2f),
}

// Vec2f carries no PartialEq, compare components by hand.
impl PartialEq for InputEvent {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Key { key: a, down: ad }, Self::Key { key: b, down: bd }) => a == b && ad == bd,
            (Self::Text(a), Self::Text(b)) => a == b,
            (
                Self::MouseButton { button: a, down: ad },
                Self::MouseButton { button: b, down: bd },
            ) => a == b && ad == bd,
            (Self::MouseWheel(a), Self::MouseWheel(b)) => a == b,
            (Self::MousePos(a), Self::MousePos(b)) => a.x == b.x && a.y == b.y,
            _ => false,
        }
    }
}
