//! Renders one section card of the editor form.
//!
//! The card is a pure function of the record, the section, and the focused
//! input. Inputs are packed into rows of [`SectionId::columns`] cells; a
//! wide input takes a row of its own. When the card is shorter than its
//! rows, it scrolls just far enough to keep the focused input on screen.

use contract_core::BoundField;
use contract_core::ContractRecord;
use contract_core::InputKind;
use contract_core::SectionId;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;

/// Label line plus value line.
const CELL_HEIGHT: u16 = 2;
const ROW_GAP: u16 = 1;
const COLUMN_SPACING: u16 = 2;
const CURSOR: &str = "▌";

pub(crate) fn render_section(
    record: &ContractRecord,
    section: SectionId,
    focused: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(format!(" {} ", section.title())).bold());
    let inner = block.inner(area);
    block.render(area, buf);
    if inner.is_empty() {
        return;
    }

    // The description gives way when the card is too short for it and a row.
    let mut y = inner.y;
    if inner.height >= 2 + CELL_HEIGHT {
        Line::from(section.description())
            .dim()
            .render(Rect { height: 1, ..inner }, buf);
        y += 2;
    }

    let items = layout_items(section);
    let bottom = inner.bottom();
    let start = first_visible(&items, focused, bottom - y);
    for item in &items[start..] {
        if y + item.height() > bottom {
            break;
        }
        match item {
            Item::Heading(heading) => {
                Line::from(*heading)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
                    .render(Rect::new(inner.x, y, inner.width, 1), buf);
            }
            Item::Row {
                fields,
                first,
                slots,
            } => {
                let cells = Layout::horizontal(vec![Constraint::Ratio(1, *slots as u32); *slots])
                    .spacing(COLUMN_SPACING)
                    .split(Rect::new(inner.x, y, inner.width, CELL_HEIGHT));
                for (offset, (bound, cell)) in fields.iter().zip(cells.iter()).enumerate() {
                    let value = record.value(bound.field);
                    render_cell(bound, value, focused == Some(first + offset), *cell, buf);
                }
            }
        }
        y += item.extent();
    }
}

/// One vertical slot of the card: a group heading or a row of inputs.
enum Item {
    Heading(&'static str),
    Row {
        fields: &'static [BoundField],
        /// Section-wide index of the first input in the row.
        first: usize,
        slots: usize,
    },
}

impl Item {
    fn height(&self) -> u16 {
        match self {
            Item::Heading(_) => 1,
            Item::Row { .. } => CELL_HEIGHT,
        }
    }

    /// Height plus the gap that follows it.
    fn extent(&self) -> u16 {
        match self {
            Item::Heading(_) => 1,
            Item::Row { .. } => CELL_HEIGHT + ROW_GAP,
        }
    }

    fn holds(&self, index: usize) -> bool {
        match self {
            Item::Heading(_) => false,
            Item::Row { fields, first, .. } => (*first..first + fields.len()).contains(&index),
        }
    }
}

fn layout_items(section: SectionId) -> Vec<Item> {
    let mut items = Vec::new();
    let mut index = 0;
    for group in section.groups() {
        if let Some(heading) = group.heading {
            items.push(Item::Heading(heading));
        }
        for fields in pack_rows(group.fields, section.columns()) {
            let slots = if fields.len() == 1 && fields[0].wide {
                1
            } else {
                section.columns()
            };
            items.push(Item::Row {
                fields,
                first: index,
                slots,
            });
            index += fields.len();
        }
    }
    items
}

/// First item to draw so the row holding `focused` ends inside `height`
/// rows. Scrolls no further than needed; without focus the card starts at
/// the top.
fn first_visible(items: &[Item], focused: Option<usize>, height: u16) -> usize {
    let Some(target) = focused.and_then(|index| items.iter().position(|item| item.holds(index)))
    else {
        return 0;
    };
    let mut used = items[target].height();
    let mut start = target;
    while start > 0 {
        let extent = items[start - 1].extent();
        if used + extent > height {
            break;
        }
        used += extent;
        start -= 1;
    }
    start
}

/// Split `fields` into display rows: wide inputs alone, the rest up to
/// `columns` per row.
fn pack_rows(fields: &'static [BoundField], columns: usize) -> Vec<&'static [BoundField]> {
    let mut rows = Vec::new();
    let mut start = 0;
    while start < fields.len() {
        let end = if fields[start].wide {
            start + 1
        } else {
            let run = fields[start..]
                .iter()
                .take(columns.max(1))
                .take_while(|bound| !bound.wide)
                .count();
            start + run
        };
        rows.push(&fields[start..end]);
        start = end;
    }
    rows
}

fn render_cell(bound: &BoundField, value: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let mut label = vec![Span::from(bound.label).bold()];
    if bound.kind != InputKind::Text {
        label.push(Span::from(format!(" ({})", bound.kind)).dim());
    }
    if focused {
        label.push(Span::from(format!(" #{}", bound.field.input_id())).dim());
    }
    Line::from(label).render(Rect { height: 1, ..area }, buf);

    let value_area = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    let (style, reserved) = if focused {
        (Style::default().fg(Color::Black).bg(Color::Cyan), 1)
    } else {
        (Style::default().bg(Color::DarkGray), 0)
    };
    buf.set_style(value_area, style);

    let shown = visible_tail(value, usize::from(value_area.width).saturating_sub(reserved));
    let mut spans = vec![Span::from(shown)];
    if focused {
        spans.push(Span::from(CURSOR));
    }
    Line::from(spans).style(style).render(value_area, buf);
}

/// Longest suffix of `value` that fits in `width` columns, so the end being
/// typed stays visible.
fn visible_tail(value: &str, width: usize) -> &str {
    let mut used = 0;
    let mut start = value.len();
    for (i, c) in value.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = i;
    }
    &value[start..]
}
