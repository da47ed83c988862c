//! Landing page: three destination cards and a features overview.

use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
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
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use ratatui::widgets::Wrap;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

use crate::app_event::AppEvent;
use crate::app_event::Route;
use crate::app_event_sender::AppEventSender;
use crate::footer::FooterHint;
use crate::footer::hint;
use crate::key_hint;

const TITLE: &str = "Contract Management System";
const SUBTITLE: &str = "A comprehensive admin interface for viewing and editing contract \
                        details, managing payment plans, and tracking contract progress.";
const CARD_HEIGHT: u16 = 9;

const CONTRACT_FEATURES: &[&str] = &[
    "Edit sender and receiver information",
    "Manage addresses and contact details",
    "Category selection and signatures",
    "Contract dates and recurrence rules",
];
const PAYMENT_FEATURES: &[&str] = &[
    "Dynamic payment tranche creation",
    "Working dates and hours tracking",
    "Payment status management",
    "Notes and comments system",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub(crate) enum Destination {
    Editor,
    Viewer,
    Templates,
}

impl Destination {
    fn title(self) -> &'static str {
        match self {
            Destination::Editor => "Contract Editor",
            Destination::Viewer => "Contract Viewer",
            Destination::Templates => "Contract Templates",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Destination::Editor => {
                "Edit all aspects of contracts including parties, dates, rates, and payment plans"
            }
            Destination::Viewer => {
                "View contract details in a read-only format with beautiful formatting"
            }
            Destination::Templates => {
                "Manage and create reusable contract templates for different scenarios"
            }
        }
    }

    fn button(self) -> &'static str {
        if self.enabled() {
            "Open Editor"
        } else {
            "Coming Soon"
        }
    }

    /// Only the editor is wired; the other cards are placeholders.
    pub(crate) fn enabled(self) -> bool {
        matches!(self, Destination::Editor)
    }
}

pub(crate) struct LandingView {
    selected: Destination,
    app_event_tx: AppEventSender,
}

impl LandingView {
    pub(crate) fn new(app_event_tx: AppEventSender) -> Self {
        Self {
            selected: Destination::Editor,
            app_event_tx,
        }
    }

    #[cfg(test)]
    pub(crate) fn selected(&self) -> Destination {
        self.selected
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::BackTab => self.move_selection(-1),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.move_selection(1),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.selected),
            KeyCode::Char('e') => self.activate(Destination::Editor),
            KeyCode::Char('q') | KeyCode::Esc => self.app_event_tx.send(AppEvent::ExitRequest),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let all: Vec<Destination> = Destination::iter().collect();
        let current = all.iter().position(|d| *d == self.selected).unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(all.len() - 1);
        self.selected = all[next];
    }

    fn activate(&self, destination: Destination) {
        if destination.enabled() {
            self.app_event_tx.navigate(Route::Editor);
        } else {
            tracing::debug!("{} is not available yet", destination.title());
        }
    }

    pub(crate) fn footer_hints(&self) -> Vec<FooterHint> {
        vec![
            hint(key_hint::plain(KeyCode::Tab), "move"),
            hint(key_hint::plain(KeyCode::Enter), "open"),
            hint(key_hint::plain(KeyCode::Char('e')), "editor"),
            hint(key_hint::plain(KeyCode::Char('q')), "quit"),
        ]
    }

    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        let [heading, cards, features] = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .spacing(1)
        .areas(area);

        Paragraph::new(vec![
            Line::from(TITLE).bold(),
            Line::from(SUBTITLE).dim(),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(heading, buf);

        let slots = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(2)
            .split(cards);
        for (destination, slot) in Destination::iter().zip(slots.iter()) {
            self.render_card(destination, *slot, buf);
        }

        render_features(features, buf);
    }

    fn render_card(&self, destination: Destination, area: Rect, buf: &mut Buffer) {
        let selected = destination == self.selected;
        let border_style = match (selected, destination.enabled()) {
            (true, _) => Style::default().fg(Color::Cyan),
            (false, true) => Style::default(),
            (false, false) => Style::default().fg(Color::DarkGray),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(Line::from(format!(" {} ", destination.title())).bold());
        let inner = block.inner(area);
        block.render(area, buf);

        let [description, button] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);
        Paragraph::new(destination.description())
            .wrap(Wrap { trim: true })
            .render(description, buf);

        let button_style = if !destination.enabled() {
            Style::default().fg(Color::DarkGray)
        } else if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        Paragraph::new(Line::from(format!("[ {} ]", destination.button())).style(button_style))
            .alignment(Alignment::Center)
            .render(button, buf);
    }
}

fn render_features(area: Rect, buf: &mut Buffer) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(Line::from(" Features ").bold());
    let inner = block.inner(area);
    block.render(area, buf);

    let columns = Layout::horizontal([Constraint::Ratio(1, 2); 2])
        .spacing(2)
        .split(inner);
    let lists = [
        ("Contract Management", CONTRACT_FEATURES),
        ("Payment Management", PAYMENT_FEATURES),
    ];
    for ((heading, items), column) in lists.into_iter().zip(columns.iter()) {
        let mut lines = vec![Line::from(heading).bold()];
        lines.extend(items.iter().map(|item| Line::from(format!("• {item}"))));
        Paragraph::new(lines).render(*column, buf);
    }
}
