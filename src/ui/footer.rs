use crate::ui::theme::{DISPLAY_TEXT, GLOBAL_BORDER};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const HINTS: &str = " ⏎ = │ ⌫ DEL │ Esc AC │ q quit";

/// Key hints on the left, crate version on the right. The version is
/// dropped when the row is too narrow for both.
pub fn footer_widget(area: Rect) -> Paragraph<'static> {
    let version = format!("v{} ", VERSION);

    // Char count, not bytes: the hints contain multi-byte symbols.
    let hints_width = HINTS.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;

    let text_style = Style::default().fg(DISPLAY_TEXT).add_modifier(Modifier::DIM);
    let mut spans = vec![Span::styled(HINTS, text_style)];
    if hints_width + version_width <= content_width {
        let padding = content_width - hints_width - version_width;
        spans.push(Span::styled(" ".repeat(padding), text_style));
        spans.push(Span::styled(version, text_style));
    }

    Paragraph::new(Line::from(spans))
        .style(text_style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::widgets::Widget;

    fn rendered_row(width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buffer = Buffer::empty(area);
        footer_widget(area).render(area, &mut buffer);
        (0..width)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn wide_footer_shows_version_at_right_edge() {
        let row = rendered_row(60);
        assert!(row.contains("q quit"), "row: {row}");
        assert!(row.trim_end_matches('│').trim_end().ends_with(&format!("v{VERSION}")));
    }

    #[test]
    fn narrow_footer_drops_version() {
        let row = rendered_row(36);
        assert!(!row.contains(&format!("v{VERSION}")), "row: {row}");
    }
}
