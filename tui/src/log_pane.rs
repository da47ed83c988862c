//! Tail of the captured diagnostic log, toggled with ctrl + l.

use contract_feedback::LogBuffer;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

/// Rows the pane takes when visible, borders included.
pub(crate) const LOG_PANE_HEIGHT: u16 = 10;

pub(crate) struct LogPane {
    log: LogBuffer,
}

impl LogPane {
    pub(crate) fn new(log: LogBuffer) -> Self {
        Self { log }
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Diagnostic Log ");
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = self
            .log
            .tail_lines(usize::from(inner.height))
            .into_iter()
            .map(Line::from)
            .collect();
        let lines = if lines.is_empty() {
            vec![Line::styled("(no log output yet)", Style::default().fg(Color::DarkGray))]
        } else {
            lines
        };
        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;
    use std::io::Write;
    use tracing_subscriber::fmt::writer::MakeWriter;

    #[test]
    fn shows_latest_lines() {
        let log = LogBuffer::with_capacity(1024);
        let mut writer = log.make_writer().make_writer();
        writer.write_all(b"first\nsecond\nthird\n").unwrap();

        let pane = LogPane::new(log);
        let output = render_to_string(40, 3, |area, buf| pane.render(area, buf));

        assert!(output.contains("Diagnostic Log"), "{output}");
        assert!(output.contains("second"), "{output}");
        assert!(output.contains("third"), "{output}");
        assert!(!output.contains("first"), "{output}");
    }

    #[test]
    fn empty_log_shows_placeholder() {
        let pane = LogPane::new(LogBuffer::with_capacity(16));
        let output = render_to_string(40, 3, |area, buf| pane.render(area, buf));
        assert!(output.contains("(no log output yet)"), "{output}");
    }
}
