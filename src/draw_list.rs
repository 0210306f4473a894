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
use crate::{rect, vec2, Color, Rect, TextureId, Vec2f, UNCLIPPED_RECT};

#[derive(Copy, Clone, Debug)]
#[repr(C)]
/// Single vertex of the emitted geometry.
pub struct DrawVertex {
    /// Position in pixels, origin top-left, Y down.
    pub pos: Vec2f,
    /// Normalized texture coordinate.
    pub uv: Vec2f,
    /// Packed `0xAABBGGRR` color.
    pub color: u32,
}

#[derive(Copy, Clone, Debug)]
/// One scissored, texture-bound indexed draw.
pub struct DrawCommand {
    /// Number of indices covered by this command.
    pub elem_count: u32,
    /// Scissor rectangle in pixels.
    pub clip_rect: Rect,
    /// Texture bound for this command.
    pub texture: TextureId,
}

#[derive(Default, Clone)]
/// Flat geometry buffers plus the ordered command list that walks them.
pub struct DrawList {
    /// Vertex buffer shared by every command.
    pub vertices: Vec<DrawVertex>,
    /// 16-bit index buffer shared by every command.
    pub indices: Vec<u16>,
    /// Commands in submission order. Each consumes the next
    /// [`DrawCommand::elem_count`] indices.
    pub commands: Vec<DrawCommand>,
}

impl Default for DrawCommand {
    fn default() -> Self {
        Self {
            elem_count: 0,
            clip_rect: UNCLIPPED_RECT,
            texture: TextureId(0),
        }
    }
}

#[derive(Default, Clone)]
/// Per-frame output of the runtime, consumed by the render backend.
pub struct DrawData {
    /// Draw lists in back-to-front order.
    pub lists: Vec<DrawList>,
}

impl DrawData {
    /// Total number of vertices across all lists.
    pub fn total_vtx_count(&self) -> usize { self.lists.iter().map(|l| l.vertices.len()).sum() }

    /// Total number of indices across all lists.
    pub fn total_idx_count(&self) -> usize { self.lists.iter().map(|l| l.indices.len()).sum() }
}

/// Accumulates primitives for the current frame. Commands are split whenever
/// the clip rectangle or bound texture changes and merged when consecutive
/// primitives share both.
pub(crate) struct DrawListBuilder {
    list: DrawList,
    clip_stack: Vec<Rect>,
    texture: TextureId,
    white_uv: Vec2f,
}

impl DrawListBuilder {
    pub fn new(texture: TextureId, white_uv: Vec2f) -> Self {
        Self {
            list: DrawList::default(),
            clip_stack: Vec::new(),
            texture,
            white_uv,
        }
    }

    pub fn clear(&mut self) {
        self.list.vertices.clear();
        self.list.indices.clear();
        self.list.commands.clear();
    }

    pub fn clip_depth(&self) -> usize { self.clip_stack.len() }

    pub fn set_texture(&mut self, texture: TextureId) { self.texture = texture }

    pub fn set_white_uv(&mut self, uv: Vec2f) { self.white_uv = uv }

    pub fn push_clip_rect(&mut self, clip: Rect) { self.clip_stack.push(clip) }

    pub fn pop_clip_rect(&mut self) {
        match self.clip_stack.pop() {
            Some(_) => {}
            None => panic!("pop_clip_rect called with an empty clip stack"),
        }
    }

    pub fn current_clip(&self) -> Rect { *self.clip_stack.last().unwrap_or(&UNCLIPPED_RECT) }

    /// Starts or extends the command for the current clip/texture state and
    /// checks that the new vertices stay addressable with 16-bit indices.
    /// With an empty clip stack the command is scissored to the primitive's
    /// own bounds so backends never see an unbounded rectangle.
    fn reserve(&mut self, vtx_count: usize, idx_count: u32, bounds: Rect) -> u16 {
        let base = self.list.vertices.len();
        if base + vtx_count > u16::MAX as usize + 1 {
            panic!("draw list exceeds the 16-bit index range, flush the frame or split the geometry across lists");
        }
        let clip = match self.clip_stack.last() {
            Some(c) => *c,
            None => bounds,
        };
        match self.list.commands.last_mut() {
            Some(cmd) if cmd.clip_rect == clip && cmd.texture == self.texture => cmd.elem_count += idx_count,
            _ => self.list.commands.push(DrawCommand {
                elem_count: idx_count,
                clip_rect: clip,
                texture: self.texture,
            }),
        }
        base as u16
    }

    fn push_quad(&mut self, corners: [Vec2f; 4], uvs: [Vec2f; 4], color: u32) {
        let mut bounds = rect(corners[0].x, corners[0].y, corners[0].x, corners[0].y);
        for c in &corners[1..] {
            bounds.min_x = bounds.min_x.min(c.x);
            bounds.min_y = bounds.min_y.min(c.y);
            bounds.max_x = bounds.max_x.max(c.x);
            bounds.max_y = bounds.max_y.max(c.y);
        }
        let base = self.reserve(4, 6, bounds);
        for i in 0..4 {
            self.list.vertices.push(DrawVertex {
                pos: corners[i],
                uv: uvs[i],
                color,
            });
        }
        for i in [0u16, 1, 2, 0, 2, 3] {
            self.list.indices.push(base + i);
        }
    }

    pub fn add_rect_filled(&mut self, r: Rect, color: Color) {
        if r.width() <= 0.0 || r.height() <= 0.0 {
            return;
        }
        let uv = self.white_uv;
        self.push_quad(
            [vec2(r.min_x, r.min_y), vec2(r.max_x, r.min_y), vec2(r.max_x, r.max_y), vec2(r.min_x, r.max_y)],
            [uv; 4],
            color.pack_abgr(),
        );
    }

    /// Strokes a rectangle outline as four filled strips of `thickness`.
    pub fn add_rect(&mut self, r: Rect, color: Color, thickness: f32) {
        if thickness <= 0.0 {
            return;
        }
        let t = thickness;
        self.add_rect_filled(rect(r.min_x, r.min_y, r.max_x, r.min_y + t), color);
        self.add_rect_filled(rect(r.min_x, r.max_y - t, r.max_x, r.max_y), color);
        self.add_rect_filled(rect(r.min_x, r.min_y + t, r.min_x + t, r.max_y - t), color);
        self.add_rect_filled(rect(r.max_x - t, r.min_y + t, r.max_x, r.max_y - t), color);
    }

    /// Fills a circle with a triangle fan. Segment count is clamped to [3, 64].
    pub fn add_circle_filled(&mut self, center: Vec2f, radius: f32, color: Color, segments: u32) {
        if radius <= 0.0 {
            return;
        }
        let segments = segments.clamp(3, 64);
        let bounds = rect(center.x - radius, center.y - radius, center.x + radius, center.y + radius);
        let base = self.reserve(segments as usize + 1, segments * 3, bounds);
        let packed = color.pack_abgr();
        let uv = self.white_uv;
        self.list.vertices.push(DrawVertex { pos: center, uv, color: packed });
        for i in 0..segments {
            let a = (i as f32 / segments as f32) * std::f32::consts::TAU;
            self.list.vertices.push(DrawVertex {
                pos: vec2(center.x + a.cos() * radius, center.y + a.sin() * radius),
                uv,
                color: packed,
            });
        }
        for i in 0..segments as u16 {
            let next = (i + 1) % segments as u16;
            self.list.indices.push(base);
            self.list.indices.push(base + 1 + i);
            self.list.indices.push(base + 1 + next);
        }
    }

    /// Emits one textured quad, used for glyphs.
    pub fn add_quad(&mut self, r: Rect, uv: Rect, color: Color) {
        self.push_quad(
            [vec2(r.min_x, r.min_y), vec2(r.max_x, r.min_y), vec2(r.max_x, r.max_y), vec2(r.min_x, r.max_y)],
            [vec2(uv.min_x, uv.min_y), vec2(uv.max_x, uv.min_y), vec2(uv.max_x, uv.max_y), vec2(uv.min_x, uv.max_y)],
            color.pack_abgr(),
        );
    }

    pub fn take(&mut self) -> DrawList { std::mem::take(&mut self.list) }

    #[cfg(test)]
    pub fn list(&self) -> &DrawList { &self.list }
}
