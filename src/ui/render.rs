use crate::ui::app::App;
use crate::ui::footer::footer_widget;
use crate::ui::keypad::button_rects;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT_ORANGE, ACTIVE_HIGHLIGHT, DIGIT_BORDER, DISPLAY_TEXT, GLOBAL_BORDER, PREVIOUS_TEXT,
    STATUS_ERROR,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = layout_regions(area, app.show_keypad());

    frame.render_widget(Clear, area);
    draw_display(frame, app, regions.display);
    if regions.keypad.height > 0 {
        draw_keypad(frame, app, regions.keypad);
    }
    frame.render_widget(footer_widget(regions.footer), regions.footer);
}

fn draw_display(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let current = app.current_display();
    let current_style = if is_non_finite(&current) {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(DISPLAY_TEXT)
    };

    let lines = vec![
        Line::from(Span::styled(
            fit_right(&app.previous_display(), inner_width),
            Style::default().fg(PREVIOUS_TEXT),
        )),
        Line::from(Span::styled(
            fit_right(&current, inner_width),
            current_style.add_modifier(Modifier::BOLD),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(" calcterm ", Style::default().fg(ACCENT_ORANGE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Right).block(block),
        area,
    );
}

fn draw_keypad(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let pressed = app.pressed();
    for (rect, button) in button_rects(area) {
        let is_digit = button
            .label
            .chars()
            .all(|ch| ch.is_ascii_digit() || ch == '.');
        let border = if is_digit { DIGIT_BORDER } else { ACCENT_ORANGE };
        let mut label_style = Style::default().fg(DISPLAY_TEXT);
        if pressed == Some(button) {
            label_style = label_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }

        let widget = Paragraph::new(Span::styled(button.label, label_style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        frame.render_widget(widget, rect);
    }
}

fn is_non_finite(display: &str) -> bool {
    display.ends_with('∞') || display == "NaN"
}

/// Keeps the rightmost `width` chars of `text`, marking the cut with `…`.
/// Long numbers lose their leading digits first, like a pocket calculator
/// scrolling left.
fn fit_right(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let keep = width - 1;
    let tail: String = text.chars().skip(len - keep).collect();
    format!("…{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_right_keeps_short_text() {
        assert_eq!(fit_right("1,234", 10), "1,234");
    }

    #[test]
    fn fit_right_truncates_from_left() {
        assert_eq!(fit_right("1,234,567", 6), "…4,567");
        assert_eq!(fit_right("123", 0), "");
    }

    #[test]
    fn detects_non_finite_results() {
        assert!(is_non_finite("∞"));
        assert!(is_non_finite("-∞"));
        assert!(is_non_finite("NaN"));
        assert!(!is_non_finite("8"));
    }
}
