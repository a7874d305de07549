use crate::ui::keypad::keypad_height;
use ratatui::layout::Rect;

/// Preferred width of the calculator body.
pub const CALCULATOR_WIDTH: u16 = 36;
/// Two display lines plus borders.
pub const DISPLAY_HEIGHT: u16 = 4;
pub const FOOTER_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub display: Rect,
    pub keypad: Rect,
    pub footer: Rect,
}

/// Places the calculator in the middle of `area`: display on top, keypad
/// below it, key hints at the bottom. The keypad gets whatever height is
/// left once display and footer fit, and none when hidden.
pub fn layout_regions(area: Rect, show_keypad: bool) -> Regions {
    let wanted_keypad = if show_keypad { keypad_height() } else { 0 };
    let body = centered_rect_by_size(
        area,
        CALCULATOR_WIDTH,
        DISPLAY_HEIGHT + wanted_keypad + FOOTER_HEIGHT,
    );

    let display_height = body.height.min(DISPLAY_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(body.height.saturating_sub(display_height));
    let keypad_height = body
        .height
        .saturating_sub(display_height + footer_height)
        .min(wanted_keypad);

    let display = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: display_height,
    };
    let keypad = Rect {
        x: body.x,
        y: body.y + display_height,
        width: body.width,
        height: keypad_height,
    };
    let footer = Rect {
        x: body.x,
        y: body.y + display_height + keypad_height,
        width: body.width,
        height: footer_height,
    };
    Regions {
        display,
        keypad,
        footer,
    }
}

/// Rect of at most `width` x `height` centered in `area`.
pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
