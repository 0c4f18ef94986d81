use ratatui::layout::Rect;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Rect of `width` x `height` centered horizontally in `area`, top at `y`.
/// Rows outside `area` are cut off; `None` when nothing remains visible.
pub fn column_rect(area: Rect, width: u16, height: u16, y: i32) -> Option<Rect> {
    let top = i32::from(area.y) + y;
    let bottom = top + i32::from(height);
    let visible_top = top.max(i32::from(area.y));
    let visible_bottom = bottom.min(i32::from(area.y) + i32::from(area.height));
    if visible_bottom <= visible_top {
        return None;
    }
    let width = width.min(area.width);
    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: u16::try_from(visible_top).ok()?,
        width,
        height: u16::try_from(visible_bottom - visible_top).ok()?,
    })
}
