//! Transient save acknowledgment shown in the bottom-right corner.

use std::time::Duration;
use std::time::Instant;

use contract_core::SaveAck;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;

const TOAST_WIDTH: u16 = 46;
const TOAST_HEIGHT: u16 = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Toast {
    ack: SaveAck,
    shown_at: Instant,
    ttl: Duration,
}

impl Toast {
    pub(crate) fn new(ack: SaveAck, shown_at: Instant, ttl: Duration) -> Self {
        Self { ack, shown_at, ttl }
    }

    #[cfg(test)]
    pub(crate) fn ack(&self) -> SaveAck {
        self.ack
    }

    pub(crate) fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }

    /// Bottom-right placement inside `area`, shrunk to fit small terminals.
    pub(crate) fn area(area: Rect) -> Rect {
        let width = TOAST_WIDTH.min(area.width);
        let height = TOAST_HEIGHT.min(area.height);
        Rect {
            x: area.x + area.width - width,
            y: area.y + area.height - height,
            width,
            height,
        }
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        let area = Toast::area(area);
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green))
            .title(Line::styled(
                format!(" {} ", self.ack.title),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.ack.description)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;
    use pretty_assertions::assert_eq;

    #[test]
    fn expires_after_ttl() {
        let start = Instant::now();
        let toast = Toast::new(SaveAck::SAVED, start, Duration::from_millis(3_000));
        assert!(!toast.is_expired(start));
        assert!(!toast.is_expired(start + Duration::from_millis(2_999)));
        assert!(toast.is_expired(start + Duration::from_millis(3_000)));
    }

    #[test]
    fn sits_in_the_bottom_right_corner() {
        let area = Toast::area(Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(54, 26, 46, 4));

        let tiny = Toast::area(Rect::new(0, 0, 20, 3));
        assert_eq!(tiny, Rect::new(0, 0, 20, 3));
    }

    #[test]
    fn renders_title_and_description() {
        let toast = Toast::new(SaveAck::SAVED, Instant::now(), Duration::from_secs(3));
        let output = render_to_string(60, 6, |area, buf| toast.render(area, buf));
        assert!(output.contains("Contract Saved"), "{output}");
        assert!(output.contains("All changes have been saved"), "{output}");
    }
}
