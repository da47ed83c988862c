//! One-line footer listing the keys that apply to the current screen.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;

use crate::key_hint::KeyBinding;

const FOOTER_INDENT_COLS: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FooterHint {
    pub(crate) key: KeyBinding,
    pub(crate) label: &'static str,
}

pub(crate) const fn hint(key: KeyBinding, label: &'static str) -> FooterHint {
    FooterHint { key, label }
}

pub(crate) fn footer_line(hints: &[FooterHint]) -> Line<'static> {
    let mut spans: Vec<Span<'static>> = vec![" ".repeat(FOOTER_INDENT_COLS).into()];
    for (i, hint) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(" · ".dim());
        }
        spans.push(hint.key.into());
        spans.push(format!(" {}", hint.label).dim());
    }
    Line::from(spans)
}

pub(crate) fn render_footer(area: Rect, buf: &mut Buffer, hints: &[FooterHint]) {
    Paragraph::new(footer_line(hints)).render(area, buf);
}
