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
use crate::Rect;

/// Track rectangle occupying the right margin of a window.
pub(crate) fn scrollbar_track(window: Rect, scrollbar_size: f32) -> Rect {
    Rect {
        min_x: window.max_x - scrollbar_size,
        min_y: window.min_y,
        max_x: window.max_x,
        max_y: window.max_y,
    }
}

pub(crate) fn max_scroll(content_len: f32, view_len: f32) -> f32 { (content_len - view_len).max(0.0) }

/// Converts a pointer drag along the track into a content scroll delta.
pub(crate) fn drag_delta(pointer_delta: f32, content_len: f32, track: Rect) -> f32 {
    let track_len = track.height();
    if track_len <= 0.0 {
        return 0.0;
    }
    pointer_delta * content_len / track_len
}

/// Thumb rectangle inside the track for the given scroll position.
pub(crate) fn thumb(track: Rect, view_len: f32, content_len: f32, scroll: f32, min_thumb: f32) -> Rect {
    let mut out = track;
    let track_len = track.height();
    if track_len <= 0.0 || content_len <= 0.0 || view_len <= 0.0 {
        return out;
    }

    let mut thumb_len = track_len * view_len / content_len;
    if thumb_len < min_thumb {
        thumb_len = min_thumb;
    }
    if thumb_len > track_len {
        thumb_len = track_len;
    }
    out.max_y = out.min_y + thumb_len;

    let limit = max_scroll(content_len, view_len);
    if limit > 0.0 {
        let travel = track_len - thumb_len;
        if travel > 0.0 {
            let offset = scroll.clamp(0.0, limit) * travel / limit;
            out.min_y += offset;
            out.max_y += offset;
        }
    }

    out
}
