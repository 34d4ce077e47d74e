pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }

    (index + 1) % len
}

/// Moves `index` by `delta`, staying inside `0..len`.
pub fn clamped_step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    index.saturating_add_signed(delta).min(len - 1)
}

/// Steps an optional cursor through `len` items, wrapping at both ends.
pub const fn cycle_cursor(cursor: Option<usize>, forward: bool, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match cursor {
        None if forward => Some(0),
        None => Some(len - 1),
        Some(index) if forward => Some(wrap_increment(index, len)),
        Some(index) => Some(wrap_decrement(index, len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapping() {
        assert_eq!(wrap_increment(2, 3), 0);
        assert_eq!(wrap_decrement(0, 3), 2);
        assert_eq!(wrap_increment(0, 0), 0);
    }

    #[test]
    fn test_clamped_step() {
        assert_eq!(clamped_step(0, -5, 10), 0);
        assert_eq!(clamped_step(8, 5, 10), 9);
        assert_eq!(clamped_step(3, 1, 0), 0);
    }

    #[test]
    fn test_cycle_cursor_starts_at_either_end() {
        assert_eq!(cycle_cursor(None, true, 4), Some(0));
        assert_eq!(cycle_cursor(None, false, 4), Some(3));
        assert_eq!(cycle_cursor(Some(3), true, 4), Some(0));
        assert_eq!(cycle_cursor(Some(1), true, 0), None);
    }
}
