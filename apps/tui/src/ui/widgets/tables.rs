/// First row to show so the selected row stays inside the viewport.
pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows || selected_index < max_visible_rows {
        return 0;
    }

    selected_index + 1 - max_visible_rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_visible() {
        assert_eq!(scroll_offset(17, 20, 10), 0);
        assert_eq!(scroll_offset(17, 10, 3), 0);
        assert_eq!(scroll_offset(17, 10, 10), 1);
        assert_eq!(scroll_offset(17, 10, 16), 7);
    }
}
