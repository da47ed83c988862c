use std::rc::Rc;
use std::sync::mpsc::Receiver;
use std::sync::mpsc::channel;
use std::time::Duration;
use std::time::Instant;

use contract_core::SaveSink;
use contract_core::config::EditorConfig;
use contract_feedback::LogBuffer;
use crossterm::event;
use crossterm::event::Event;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;

use crate::app_event::AppEvent;
use crate::app_event::Route;
use crate::app_event_sender::AppEventSender;
use crate::editor_view::EditorView;
use crate::footer::FooterHint;
use crate::footer::render_footer;
use crate::key_hint;
use crate::landing::LandingView;
use crate::log_pane::LOG_PANE_HEIGHT;
use crate::log_pane::LogPane;
use crate::toast::Toast;

enum Screen {
    Landing(LandingView),
    Editor(EditorView),
}

/// Top-level state: the current screen plus the overlays shared by all
/// screens.
pub(crate) struct App {
    screen: Screen,
    app_event_tx: AppEventSender,
    app_event_rx: Receiver<AppEvent>,
    sink: Rc<dyn SaveSink>,
    toast: Option<Toast>,
    log_pane: LogPane,
    show_log: bool,
    toast_duration: Duration,
    tick_rate: Duration,
    exit: bool,
}

impl App {
    pub(crate) fn new(
        start: Route,
        config: &EditorConfig,
        log: LogBuffer,
        sink: Rc<dyn SaveSink>,
    ) -> Self {
        let (tx, app_event_rx) = channel();
        let app_event_tx = AppEventSender::new(tx);
        let screen = make_screen(start, &app_event_tx, &sink);
        Self {
            screen,
            app_event_tx,
            app_event_rx,
            sink,
            toast: None,
            log_pane: LogPane::new(log),
            show_log: false,
            toast_duration: Duration::from_millis(config.toast_duration_ms),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            exit: false,
        }
    }

    /// Draw, wait up to one tick for input, repeat until exit is requested.
    pub(crate) fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> color_eyre::Result<()> {
        while !self.exit {
            terminal.draw(|frame| self.render(frame.area(), frame.buffer_mut()))?;
            if event::poll(self.tick_rate)?
                && let Event::Key(key) = event::read()?
                && key.kind != KeyEventKind::Release
            {
                self.handle_key_event(key);
            }
            self.tick(Instant::now());
        }
        Ok(())
    }

    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        if key_hint::QUIT.is_press(key) {
            self.app_event_tx.send(AppEvent::ExitRequest);
        } else if key_hint::TOGGLE_LOG.is_press(key) {
            self.app_event_tx.send(AppEvent::ToggleLogPane);
        } else {
            match &mut self.screen {
                Screen::Landing(view) => view.handle_key_event(key),
                Screen::Editor(view) => view.handle_key_event(key),
            }
        }
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.app_event_rx.try_recv() {
            self.handle_app_event(event);
        }
    }

    fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Navigate(route) => {
                tracing::info!(?route, "navigate");
                self.screen = make_screen(route, &self.app_event_tx, &self.sink);
            }
            AppEvent::ContractSaved(ack) => {
                self.toast = Some(Toast::new(ack, Instant::now(), self.toast_duration));
            }
            AppEvent::ToggleLogPane => self.show_log = !self.show_log,
            AppEvent::ExitRequest => {
                tracing::info!("exit requested");
                self.exit = true;
            }
        }
    }

    /// Expire the toast once its time is up.
    pub(crate) fn tick(&mut self, now: Instant) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    fn footer_hints(&self) -> Vec<FooterHint> {
        match &self.screen {
            Screen::Landing(view) => view.footer_hints(),
            Screen::Editor(view) => view.footer_hints(),
        }
    }

    /// The log pane takes at most a third of the screen so the editor keeps
    /// room for its focused input.
    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) {
        let log_height = if self.show_log {
            LOG_PANE_HEIGHT.min(area.height / 3)
        } else {
            0
        };
        let [main, log, footer] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .areas(area);

        match &self.screen {
            Screen::Landing(view) => view.render(main, buf),
            Screen::Editor(view) => view.render(main, buf),
        }
        if self.show_log {
            self.log_pane.render(log, buf);
        }
        render_footer(footer, buf, &self.footer_hints());
        if let Some(toast) = &self.toast {
            toast.render(main, buf);
        }
    }
}

/// Each visit to a screen starts from scratch; the editor reloads the seed.
fn make_screen(route: Route, app_event_tx: &AppEventSender, sink: &Rc<dyn SaveSink>) -> Screen {
    match route {
        Route::Landing => Screen::Landing(LandingView::new(app_event_tx.clone())),
        Route::Editor => Screen::Editor(EditorView::new(app_event_tx.clone(), Rc::clone(sink))),
    }
}

#[cfg(test)]
impl App {
    fn editor_state(&self) -> Option<&contract_core::EditorState> {
        match &self.screen {
            Screen::Editor(view) => Some(view.state()),
            Screen::Landing(_) => None,
        }
    }

    fn toast(&self) -> Option<&Toast> {
        self.toast.as_ref()
    }

    fn should_exit(&self) -> bool {
        self.exit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render_to_string;
    use contract_core::ContractRecord;
    use contract_core::Field;
    use contract_core::SaveAck;
    use contract_core::SectionId;
    use contract_core::field::MiscField;
    use crossterm::event::KeyCode;
    use crossterm::event::KeyModifiers;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        saved: RefCell<Vec<ContractRecord>>,
    }

    impl SaveSink for RecordingSink {
        fn contract_saved(&self, record: &ContractRecord) {
            self.saved.borrow_mut().push(record.clone());
        }
    }

    fn make_app(start: Route) -> (App, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::default());
        let app = App::new(
            start,
            &EditorConfig::default(),
            LogBuffer::with_capacity(4096),
            sink.clone(),
        );
        (app, sink)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn edit_misc_notes(app: &mut App, text: &str) {
        press(app, KeyCode::Char('6'));
        press(app, KeyCode::Enter);
        ctrl(app, 'u');
        type_text(app, text);
    }

    #[test]
    fn landing_enter_opens_a_fresh_editor() {
        let (mut app, _) = make_app(Route::Landing);
        assert!(app.editor_state().is_none());
        press(&mut app, KeyCode::Enter);
        let state = app.editor_state().expect("editor open");
        assert_eq!(state.record(), &ContractRecord::seed());
        assert_eq!(state.active_section(), SectionId::Parties);
    }

    #[test]
    fn leaving_the_editor_discards_edits() {
        let (mut app, _) = make_app(Route::Landing);
        press(&mut app, KeyCode::Enter);
        edit_misc_notes(&mut app, "Updated");
        assert_eq!(
            app.editor_state().map(|s| s.value(Field::Misc(MiscField::Notes))),
            Some("Updated")
        );

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Esc);
        assert!(app.editor_state().is_none());

        press(&mut app, KeyCode::Enter);
        assert_eq!(
            app.editor_state().map(|s| s.value(Field::Misc(MiscField::Notes))),
            Some("Standard contract terms apply")
        );
    }

    #[test]
    fn save_shows_toast_and_keeps_record() {
        let (mut app, sink) = make_app(Route::Editor);
        edit_misc_notes(&mut app, "Updated");
        let before = app.editor_state().cloned();

        ctrl(&mut app, 's');

        assert_eq!(app.toast().map(Toast::ack), Some(SaveAck::SAVED));
        assert_eq!(app.editor_state().cloned(), before);
        let saved = sink.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].misc.notes, "Updated");
    }

    #[test]
    fn toast_expires_on_tick() {
        let (mut app, _) = make_app(Route::Editor);
        ctrl(&mut app, 's');
        app.tick(Instant::now());
        assert!(app.toast().is_some());
        app.tick(Instant::now() + Duration::from_secs(10));
        assert!(app.toast().is_none());
    }

    #[test]
    fn repeated_saves_replace_the_toast() {
        let (mut app, sink) = make_app(Route::Editor);
        ctrl(&mut app, 's');
        ctrl(&mut app, 's');
        assert!(app.toast().is_some());
        assert_eq!(sink.saved.borrow().len(), 2);
    }

    #[test]
    fn ctrl_c_and_q_exit() {
        let (mut app, _) = make_app(Route::Editor);
        ctrl(&mut app, 'c');
        assert!(app.should_exit());

        let (mut app, _) = make_app(Route::Landing);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_exit());
    }

    #[test]
    fn q_in_the_editor_is_typed_not_quit() {
        let (mut app, _) = make_app(Route::Editor);
        edit_misc_notes(&mut app, "q");
        assert!(!app.should_exit());
        assert_eq!(
            app.editor_state().map(|s| s.value(Field::Misc(MiscField::Notes))),
            Some("q")
        );
    }

    #[test]
    fn log_pane_toggles_and_renders() {
        let (mut app, _) = make_app(Route::Editor);
        let hidden = render_to_string(100, 40, |area, buf| app.render(area, buf));
        assert!(!hidden.contains("Diagnostic Log"), "{hidden}");

        ctrl(&mut app, 'l');
        let shown = render_to_string(100, 40, |area, buf| app.render(area, buf));
        assert!(shown.contains("Diagnostic Log"), "{shown}");

        ctrl(&mut app, 'l');
        let hidden = render_to_string(100, 40, |area, buf| app.render(area, buf));
        assert!(!hidden.contains("Diagnostic Log"), "{hidden}");
    }

    #[test]
    fn focused_receiver_email_stays_visible_with_log_open() {
        for height in [24, 20] {
            let (mut app, _) = make_app(Route::Editor);
            press(&mut app, KeyCode::Enter);
            for _ in 0..5 {
                press(&mut app, KeyCode::Tab);
            }
            ctrl(&mut app, 'l');

            let output = render_to_string(80, height, |area, buf| app.render(area, buf));
            assert!(output.contains("Diagnostic Log"), "{output}");
            assert!(output.contains("samjose@gmail.com▌"), "{output}");
            assert!(output.contains("#receiverEmail"), "{output}");
        }
    }

    #[test]
    fn render_overlays_toast_and_footer() {
        let (mut app, _) = make_app(Route::Editor);
        ctrl(&mut app, 's');
        let output = render_to_string(100, 32, |area, buf| app.render(area, buf));
        assert!(output.contains("Contract Saved"), "{output}");
        let footer = output.lines().last().unwrap_or_default();
        assert!(footer.contains("enter edit fields"), "{footer}");
    }
}
