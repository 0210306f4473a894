//! Keyboard focus cycling over the widgets registered this frame.

/// Next focus target for a Tab (or Shift+Tab) press, wrapping at both ends.
/// Falls back to the first (or last) entry when the current focus is unset or
/// was not registered this frame.
pub(crate) fn cycle_focus(current: u32, items: &[u32], backward: bool) -> Option<u32> {
    if items.is_empty() {
        return None;
    }
    let pos = items.iter().position(|id| *id == current);
    let next = match (pos, backward) {
        (Some(i), false) => (i + 1) % items.len(),
        (Some(i), true) => (i + items.len() - 1) % items.len(),
        (None, false) => 0,
        (None, true) => items.len() - 1,
    };
    Some(items[next])
}
