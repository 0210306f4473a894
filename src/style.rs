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
use crate::{color, vec2, Color, Vec2f};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(usize)]
/// Identifiers for each of the built-in style colors.
pub enum Col {
    /// Default text color.
    Text = 0,
    /// Dimmed text such as the unfocused caret.
    TextDisabled = 1,
    /// Window background.
    WindowBg = 2,
    /// Outline/border color.
    Border = 3,
    /// Background of framed widgets (input, slider, checkbox).
    FrameBg = 4,
    /// Framed widget background while hovered.
    FrameBgHovered = 5,
    /// Framed widget background while active.
    FrameBgActive = 6,
    /// Default button color.
    Button = 7,
    /// Button color while hovered.
    ButtonHovered = 8,
    /// Button color while held.
    ButtonActive = 9,
    /// Checkbox and radio marks.
    CheckMark = 10,
    /// Slider thumb.
    SliderGrab = 11,
    /// Slider thumb while dragged.
    SliderGrabActive = 12,
    /// Border drawn on the keyboard-focused widget.
    NavHighlight = 13,
    /// Scrollbar track.
    ScrollbarBg = 14,
    /// Scrollbar thumb.
    ScrollbarGrab = 15,
    /// Separator rules.
    Separator = 16,
    /// Background of selected text.
    TextSelectedBg = 17,
}

/// Number of entries in [`Style::colors`].
pub const COL_COUNT: usize = 18;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
/// Identifiers for the pushable style variables.
pub enum StyleVar {
    /// [`Style::item_spacing`].
    ItemSpacing,
    /// [`Style::frame_padding`].
    FramePadding,
    /// [`Style::window_padding`].
    WindowPadding,
    /// [`Style::frame_border_size`].
    FrameBorderSize,
    /// [`Style::scrollbar_size`].
    ScrollbarSize,
    /// [`Style::grab_min_size`].
    GrabMinSize,
}

#[derive(Copy, Clone, Debug)]
/// Value accepted by [`Context::push_style_var`](crate::Context::push_style_var).
pub enum StyleValue {
    /// Scalar variable.
    Float(f32),
    /// Two-component variable.
    Vec2(Vec2f),
}

// Vec2f carries no PartialEq, compare components by hand.
impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Vec2(a), Self::Vec2(b)) => a.x == b.x && a.y == b.y,
            _ => false,
        }
    }
}

#[derive(Copy, Clone)]
/// Collection of visual constants that drive widget appearance.
pub struct Style {
    /// Vertical and horizontal gap between consecutive items.
    pub item_spacing: Vec2f,
    /// Padding between a widget frame and its label.
    pub frame_padding: Vec2f,
    /// Padding between a window edge and its content.
    pub window_padding: Vec2f,
    /// Thickness of the optional frame border (0 disables it).
    pub frame_border_size: f32,
    /// Label alignment inside buttons, 0.5 centers.
    pub button_text_align: Vec2f,
    /// Width of vertical scrollbars.
    pub scrollbar_size: f32,
    /// Minimum length of scrollbar and slider thumbs.
    pub grab_min_size: f32,
    /// Palette of [`Col`] entries.
    pub colors: [Color; COL_COUNT],
}

impl Style {
    /// Returns the current color for the given slot.
    pub fn color(&self, idx: Col) -> Color { self.colors[idx as usize] }

    /// Reads the current value of a style variable.
    pub fn var(&self, var: StyleVar) -> StyleValue {
        match var {
            StyleVar::ItemSpacing => StyleValue::Vec2(self.item_spacing),
            StyleVar::FramePadding => StyleValue::Vec2(self.frame_padding),
            StyleVar::WindowPadding => StyleValue::Vec2(self.window_padding),
            StyleVar::FrameBorderSize => StyleValue::Float(self.frame_border_size),
            StyleVar::ScrollbarSize => StyleValue::Float(self.scrollbar_size),
            StyleVar::GrabMinSize => StyleValue::Float(self.grab_min_size),
        }
    }

    /// Writes a style variable. Panics when the value kind does not match.
    pub fn set_var(&mut self, var: StyleVar, value: StyleValue) {
        match (var, value) {
            (StyleVar::ItemSpacing, StyleValue::Vec2(v)) => self.item_spacing = v,
            (StyleVar::FramePadding, StyleValue::Vec2(v)) => self.frame_padding = v,
            (StyleVar::WindowPadding, StyleValue::Vec2(v)) => self.window_padding = v,
            (StyleVar::FrameBorderSize, StyleValue::Float(v)) => self.frame_border_size = v,
            (StyleVar::ScrollbarSize, StyleValue::Float(v)) => self.scrollbar_size = v,
            (StyleVar::GrabMinSize, StyleValue::Float(v)) => self.grab_min_size = v,
            (var, value) => panic!("style variable {:?} does not accept {:?}", var, value),
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            item_spacing: vec2(8.0, 4.0),
            frame_padding: vec2(4.0, 3.0),
            window_padding: vec2(8.0, 8.0),
            frame_border_size: 0.0,
            button_text_align: vec2(0.5, 0.5),
            scrollbar_size: 14.0,
            grab_min_size: 10.0,
            colors: [
                color(1.00, 1.00, 1.00, 1.00),
                color(0.50, 0.50, 0.50, 1.00),
                color(0.06, 0.06, 0.06, 0.94),
                color(0.43, 0.43, 0.50, 0.50),
                color(0.16, 0.29, 0.48, 0.54),
                color(0.26, 0.59, 0.98, 0.40),
                color(0.26, 0.59, 0.98, 0.67),
                color(0.26, 0.59, 0.98, 0.40),
                color(0.26, 0.59, 0.98, 1.00),
                color(0.06, 0.53, 0.98, 1.00),
                color(0.26, 0.59, 0.98, 1.00),
                color(0.24, 0.52, 0.88, 1.00),
                color(0.26, 0.59, 0.98, 1.00),
                color(0.26, 0.59, 0.98, 1.00),
                color(0.02, 0.02, 0.02, 0.53),
                color(0.31, 0.31, 0.31, 1.00),
                color(0.43, 0.43, 0.50, 0.50),
                color(0.26, 0.59, 0.98, 0.35),
            ],
        }
    }
}
