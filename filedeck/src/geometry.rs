use iced::{Point, Size};

/// Compute a context menu anchor position near the cursor, clamped to bounds.
pub(crate) fn anchor_position(
    cursor: Point,
    bounds: Size,
    menu_width: f32,
    menu_height: f32,
    margin: f32,
) -> Point {
    let cursor = Point::new(
        cursor.x.clamp(0.0, bounds.width),
        cursor.y.clamp(0.0, bounds.height),
    );

    let x = if cursor.x + menu_width + margin <= bounds.width {
        cursor.x + margin
    } else {
        cursor.x - menu_width - margin
    };

    let y = if cursor.y + menu_height + margin <= bounds.height {
        cursor.y + margin
    } else {
        cursor.y - menu_height - margin
    };

    let max_x = (bounds.width - menu_width - margin).max(margin);
    let max_y = (bounds.height - menu_height - margin).max(margin);

    Point::new(x.clamp(margin, max_x), y.clamp(margin, max_y))
}

/// Total menu height for a given number of items.
pub(crate) fn menu_height_for_items(
    item_count: usize,
    item_height: f32,
    vertical_padding: f32,
) -> f32 {
    vertical_padding + item_height * item_count as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    const MENU_WIDTH: f32 = 220.0;
    const MENU_MARGIN: f32 = 6.0;

    #[test]
    fn given_cursor_outside_bounds_when_anchoring_then_menu_is_clamped() {
        let bounds = Size::new(400.0, 300.0);
        let cursor = Point::new(420.0, 310.0);
        let menu_height = menu_height_for_items(6, 24.0, 8.0);

        let anchor = anchor_position(
            cursor,
            bounds,
            MENU_WIDTH,
            menu_height,
            MENU_MARGIN,
        );

        assert!(anchor.x >= MENU_MARGIN);
        assert!(anchor.y >= MENU_MARGIN);
        assert!(anchor.x + MENU_WIDTH <= bounds.width - MENU_MARGIN + 0.1);
        assert!(anchor.y + menu_height <= bounds.height - MENU_MARGIN + 0.1);
    }

    #[test]
    fn given_space_available_when_anchor_position_then_stays_near_cursor() {
        let bounds = Size::new(800.0, 600.0);
        let cursor = Point::new(100.0, 120.0);

        let anchor =
            anchor_position(cursor, bounds, MENU_WIDTH, 140.0, MENU_MARGIN);

        assert!((anchor.x - (cursor.x + MENU_MARGIN)).abs() < 0.1);
        assert!((anchor.y - (cursor.y + MENU_MARGIN)).abs() < 0.1);
    }

    #[test]
    fn given_cursor_near_bottom_edge_when_anchor_position_then_flips_up() {
        let bounds = Size::new(800.0, 400.0);
        let cursor = Point::new(100.0, 390.0);

        let anchor =
            anchor_position(cursor, bounds, MENU_WIDTH, 140.0, MENU_MARGIN);

        assert!(anchor.y + 140.0 <= cursor.y);
    }

    #[test]
    fn given_item_count_when_menu_height_then_padding_is_included() {
        assert_eq!(menu_height_for_items(3, 24.0, 8.0), 80.0);
    }
}
