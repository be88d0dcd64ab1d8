/// Moves an index one step back, wrapping to the end of the list.
pub const fn wrap_decrement(index: usize, len: usize) -> usize {
    match len {
        0 => 0,
        _ if index == 0 => len - 1,
        _ => index - 1,
    }
}

/// Moves an index one step forward, wrapping to the start of the list.
pub const fn wrap_increment(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapping_covers_both_edges() {
        assert_eq!(wrap_decrement(0, 4), 3);
        assert_eq!(wrap_increment(3, 4), 0);
        assert_eq!(wrap_increment(1, 4), 2);
        assert_eq!(wrap_decrement(0, 0), 0);
        assert_eq!(wrap_increment(0, 0), 0);
    }
}
