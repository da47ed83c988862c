//! Admin contract editor: header, section sidebar, section card and save.

use std::rc::Rc;

use contract_core::BoundField;
use contract_core::EditorState;
use contract_core::SaveSink;
use contract_core::SectionId;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyModifiers;
use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
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
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use strum::IntoEnumIterator;

use crate::app_event::Route;
use crate::app_event_sender::AppEventSender;
use crate::footer::FooterHint;
use crate::footer::hint;
use crate::key_hint;
use crate::section_view::render_section;

const HEADER_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 24;
const SAVE_BUTTON_HEIGHT: u16 = 3;

/// Where keystrokes go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Sidebar,
    /// Index into the active section's inputs.
    Field(usize),
    Save,
}

pub(crate) struct EditorView {
    state: EditorState,
    focus: Focus,
    sink: Rc<dyn SaveSink>,
    app_event_tx: AppEventSender,
}

impl EditorView {
    /// A fresh session over the seed record.
    pub(crate) fn new(app_event_tx: AppEventSender, sink: Rc<dyn SaveSink>) -> Self {
        Self {
            state: EditorState::new(),
            focus: Focus::Sidebar,
            sink,
            app_event_tx,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &EditorState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn focus(&self) -> Focus {
        self.focus
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if key_hint::SAVE.is_press(key) {
            self.save();
            return;
        }
        if key_hint::CLEAR_FIELD.is_press(key) {
            if let Some(bound) = self.focused_field() {
                self.state.update_field(bound.field, "");
            }
            return;
        }

        match self.focus {
            Focus::Sidebar => self.handle_sidebar_key(key),
            Focus::Field(index) => self.handle_field_key(index, key),
            Focus::Save => self.handle_save_key(key),
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        let active = self.state.active_section();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.state.select_section(active.prev()),
            KeyCode::Down | KeyCode::Char('j') => self.state.select_section(active.next()),
            KeyCode::Char(c @ '1'..='6') => {
                let position = c as usize - '1' as usize;
                if let Some(section) = SectionId::iter().nth(position) {
                    self.state.select_section(section);
                }
            }
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right => {
                self.focus = Focus::Field(0);
            }
            KeyCode::Esc => self.app_event_tx.navigate(Route::Landing),
            _ => {}
        }
    }

    fn handle_field_key(&mut self, index: usize, key: KeyEvent) {
        let count = self.state.active_section().field_count();
        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = Focus::Field(index.saturating_sub(1));
            }
            KeyCode::Down | KeyCode::Tab | KeyCode::Enter => {
                self.focus = if index + 1 < count {
                    Focus::Field(index + 1)
                } else {
                    Focus::Save
                };
            }
            KeyCode::Esc | KeyCode::Left => self.focus = Focus::Sidebar,
            KeyCode::Backspace => {
                if let Some(bound) = self.focused_field() {
                    let mut value = self.state.value(bound.field).to_string();
                    if value.pop().is_some() {
                        self.state.update_field(bound.field, value);
                    }
                }
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if let Some(bound) = self.focused_field()
                    && bound.kind.accepts(c)
                {
                    let mut value = self.state.value(bound.field).to_string();
                    value.push(c);
                    self.state.update_field(bound.field, value);
                }
            }
            _ => {}
        }
    }

    fn handle_save_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.save(),
            KeyCode::Up | KeyCode::BackTab => {
                let count = self.state.active_section().field_count();
                self.focus = Focus::Field(count.saturating_sub(1));
            }
            KeyCode::Esc | KeyCode::Left => self.focus = Focus::Sidebar,
            _ => {}
        }
    }

    fn focused_field(&self) -> Option<&'static BoundField> {
        match self.focus {
            Focus::Field(index) => self.state.active_section().fields().nth(index),
            Focus::Sidebar | Focus::Save => None,
        }
    }

    fn save(&self) {
        let ack = self.state.save(self.sink.as_ref());
        self.app_event_tx.contract_saved(ack);
    }

    pub(crate) fn footer_hints(&self) -> Vec<FooterHint> {
        let plain = key_hint::plain;
        match self.focus {
            Focus::Sidebar => vec![
                hint(plain(KeyCode::Enter), "edit fields"),
                hint(key_hint::SAVE, "save"),
                hint(key_hint::TOGGLE_LOG, "log"),
                hint(plain(KeyCode::Esc), "back"),
            ],
            Focus::Field(_) => vec![
                hint(plain(KeyCode::Tab), "next"),
                hint(key_hint::CLEAR_FIELD, "clear"),
                hint(key_hint::SAVE, "save"),
                hint(plain(KeyCode::Esc), "sections"),
            ],
            Focus::Save => vec![
                hint(plain(KeyCode::Enter), "save"),
                hint(plain(KeyCode::Esc), "sections"),
            ],
        }
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        let [header, body] =
            Layout::vertical([Constraint::Length(HEADER_HEIGHT), Constraint::Min(0)]).areas(area);
        self.render_header(header, buf);

        let [sidebar, main] =
            Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
                .spacing(1)
                .areas(body);
        self.render_sidebar(sidebar, buf);

        let [card, button] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(SAVE_BUTTON_HEIGHT)])
                .areas(main);
        let focused = match self.focus {
            Focus::Field(index) => Some(index),
            Focus::Sidebar | Focus::Save => None,
        };
        render_section(
            self.state.record(),
            self.state.active_section(),
            focused,
            card,
            buf,
        );
        self.render_save_button(button, buf);
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let record = self.state.record();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        block.render(area, buf);

        let badge = |label: &str, value: &str| {
            Span::styled(
                format!(" {label}: {value} "),
                Style::default().fg(Color::Black).bg(Color::Gray),
            )
        };
        let lines = vec![
            Line::from("Admin Contract Editor").bold(),
            Line::from(vec![
                badge("Contract ID", &record.contract_identifier),
                " ".into(),
                badge("Status", &record.contract_status),
                " ".into(),
                badge("Type", &record.contract_type),
            ]),
        ];
        Paragraph::new(lines).render(inner, buf);
    }

    fn render_sidebar(&self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focus == Focus::Sidebar {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(" Sections ");

        let active = self.state.active_section();
        let lines: Vec<Line> = SectionId::iter()
            .map(|section| {
                let text = format!("{} {}", section.index() + 1, section.label());
                if section == active {
                    Line::from(format!("› {text}"))
                        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                } else {
                    Line::from(format!("  {text}"))
                }
            })
            .collect();
        Paragraph::new(lines).block(block).render(area, buf);
    }

    fn render_save_button(&self, area: Rect, buf: &mut Buffer) {
        let style = if self.focus == Focus::Save {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
        Paragraph::new(Line::from("Save Changes").style(style))
            .alignment(Alignment::Center)
            .block(block)
            .render(area, buf);
    }
}
