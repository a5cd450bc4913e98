//! Application state machine: which screen is shown and what a submitted line does.
//!
//! Kept free of terminal I/O so every screen transition can be tested by feeding
//! lines. The binary only turns key events into [`LineAction`]s and draws
//! [`App::render_into`] after each one.

use tracing::{error, info, warn};

use crate::core::{MoveError, Session, SimpleRng};
use crate::input::{
    parse_menu_choice, parse_move_line, parse_settings_command, LineAction, LineEditor, LineEvent,
    MenuChoice,
};
use crate::settings::SettingsStore;
use crate::term::{FrameBuffer, GameView, PromptView, TextScreen, Viewport};

/// The page currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Rules,
    Settings,
    Playing,
    FinalScore,
    Credits,
}

/// Whether the main loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    screen: Screen,
    store: SettingsStore,
    /// Seeds each new session, so one `--seed` replays a whole run of games.
    seeds: SimpleRng,
    session: Option<Session>,
    editor: LineEditor,
    message: String,
    error: bool,
    view: GameView,
}

impl App {
    pub fn new(store: SettingsStore, seed: u32) -> Self {
        Self {
            screen: Screen::Menu,
            store,
            seeds: SimpleRng::new(seed),
            session: None,
            editor: LineEditor::new(),
            message: String::new(),
            error: false,
            view: GameView::default(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn store(&self) -> &SettingsStore {
        &self.store
    }

    pub fn input(&self) -> &str {
        self.editor.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Feed one key action to the prompt.
    pub fn handle_action(&mut self, action: LineAction) -> Flow {
        match self.editor.apply(action) {
            Some(LineEvent::Submitted(line)) => self.submit(&line),
            Some(LineEvent::Cancelled) => self.cancel(),
            None => Flow::Continue,
        }
    }

    /// Handle a submitted line on the current screen.
    pub fn submit(&mut self, line: &str) -> Flow {
        self.clear_message();
        match self.screen {
            Screen::Menu => self.submit_menu(line),
            Screen::Rules | Screen::FinalScore => self.go(Screen::Menu),
            Screen::Settings => self.submit_setting(line),
            Screen::Playing => self.submit_move(line),
            Screen::Credits => Flow::Quit,
        }
    }

    /// Escape: back to the menu, or out of the credits.
    pub fn cancel(&mut self) -> Flow {
        self.clear_message();
        match self.screen {
            Screen::Menu => Flow::Continue,
            Screen::Credits => Flow::Quit,
            Screen::Playing => {
                if let Some(session) = self.session.take() {
                    info!(score = session.total_score(), "game abandoned");
                }
                self.go(Screen::Menu)
            }
            _ => self.go(Screen::Menu),
        }
    }

    fn go(&mut self, screen: Screen) -> Flow {
        self.screen = screen;
        Flow::Continue
    }

    fn clear_message(&mut self) {
        self.message.clear();
        self.error = false;
    }

    fn set_message(&mut self, message: impl Into<String>, error: bool) {
        self.message = message.into();
        self.error = error;
    }

    fn submit_menu(&mut self, line: &str) -> Flow {
        match parse_menu_choice(line) {
            Some(MenuChoice::Play) => self.start_game(),
            Some(MenuChoice::Rules) => self.go(Screen::Rules),
            Some(MenuChoice::Settings) => self.go(Screen::Settings),
            Some(MenuChoice::Quit) => self.go(Screen::Credits),
            None => {
                self.set_message("invalid choice (type 1, 2, 3 or 4)", true);
                Flow::Continue
            }
        }
    }

    fn start_game(&mut self) -> Flow {
        let config = self.store.config();
        match Session::new(config, SimpleRng::new(self.seeds.next_u32())) {
            Ok(session) => {
                self.session = Some(session);
                self.go(Screen::Playing)
            }
            Err(err) => {
                error!(%err, "could not start a game");
                self.set_message(format!("could not start a game: {}", err), true);
                Flow::Continue
            }
        }
    }

    fn submit_setting(&mut self, line: &str) -> Flow {
        let line = line.trim();
        if line.is_empty() || line.eq_ignore_ascii_case("q") {
            return self.go(Screen::Menu);
        }

        let result = parse_settings_command(line)
            .and_then(|(key, value)| self.store.update(key, value).map(|()| (key, value)));
        match result {
            Ok((key, value)) => self.set_message(format!("{} set to {}", key.name(), value), false),
            Err(err) => {
                warn!(%err, "settings command rejected");
                self.set_message(err.to_string(), true);
            }
        }
        Flow::Continue
    }

    fn submit_move(&mut self, line: &str) -> Flow {
        let Some(session) = self.session.as_mut() else {
            return self.go(Screen::Menu);
        };
        if session.is_over() {
            return self.go(Screen::FinalScore);
        }

        match session.play(parse_move_line(line)) {
            Ok(report) if report.gained > 0 => {
                let turn = report.resolution.turn;
                self.set_message(
                    format!(
                        "+{} x{} = {}",
                        turn.turn_score, turn.multiplier, report.gained
                    ),
                    false,
                );
            }
            Ok(_) => self.set_message("no run", false),
            Err(err) if !err.is_recoverable() => return self.end_on_fault(&err),
            Err(err) => {
                let text = match err {
                    MoveError::NoChange => "both candies are identical, nothing to swap".to_string(),
                    other => other.to_string(),
                };
                self.set_message(text, true);
            }
        }
        Flow::Continue
    }

    /// Drop a session the engine can no longer vouch for and return to the menu.
    fn end_on_fault(&mut self, err: &MoveError) -> Flow {
        let score = self.session.take().map(|s| s.total_score()).unwrap_or(0);
        error!(%err, score, "game ended by an engine fault");
        self.set_message(format!("game ended: {}", err), true);
        self.go(Screen::Menu)
    }

    /// Draw the current screen.
    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let prompt = PromptView::new(self.editor.as_str()).with_message(&self.message, self.error);

        match (self.screen, self.session.as_ref()) {
            (Screen::Playing, Some(session)) => {
                self.view
                    .render_into(&session.snapshot(), &prompt, viewport, fb);
            }
            (Screen::FinalScore, Some(session)) => {
                let snap = session.snapshot();
                TextScreen::final_score(snap.total_score, snap.moves_played())
                    .render_into(&prompt, viewport, fb);
            }
            (Screen::Rules, _) => TextScreen::rules().render_into(&prompt, viewport, fb),
            (Screen::Settings, _) => {
                TextScreen::settings(&self.store.config()).render_into(&prompt, viewport, fb)
            }
            (Screen::Credits, _) => TextScreen::credits().render_into(&prompt, viewport, fb),
            _ => TextScreen::main_menu().render_into(&prompt, viewport, fb),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EngineError;
    use crate::settings::{default_contents, SettingKey};

    fn app() -> App {
        let store = SettingsStore::from_text("unused.cfg", &default_contents());
        App::new(store, 7)
    }

    fn type_line(app: &mut App, line: &str) -> Flow {
        for c in line.chars() {
            app.handle_action(LineAction::Insert(c));
        }
        app.handle_action(LineAction::Submit)
    }

    #[test]
    fn test_menu_navigation() {
        let mut app = app();
        assert_eq!(app.screen(), Screen::Menu);

        type_line(&mut app, "2");
        assert_eq!(app.screen(), Screen::Rules);
        type_line(&mut app, "");
        assert_eq!(app.screen(), Screen::Menu);

        type_line(&mut app, "9");
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.is_error());

        type_line(&mut app, "4");
        assert_eq!(app.screen(), Screen::Credits);
        assert_eq!(type_line(&mut app, ""), Flow::Quit);
    }

    #[test]
    fn test_play_starts_a_session_from_settings() {
        let mut app = app();
        type_line(&mut app, "1");
        assert_eq!(app.screen(), Screen::Playing);
        let session = app.session().unwrap();
        assert_eq!(session.moves_left(), 20);
        assert!(session.grid().is_dense());
    }

    #[test]
    fn test_bad_move_reports_without_using_a_move() {
        let mut app = app();
        type_line(&mut app, "1");
        type_line(&mut app, "1 1 x");
        assert!(app.is_error());
        assert!(app.message().contains("invalid direction"));
        assert_eq!(app.session().unwrap().moves_left(), 20);

        type_line(&mut app, "0 4 d");
        assert_eq!(app.message(), "invalid position (0, 4)");
    }

    #[test]
    fn test_engine_fault_ends_the_game() {
        let mut app = app();
        type_line(&mut app, "1");
        let flow = app.end_on_fault(&MoveError::from(EngineError::CascadeLimit(10_000)));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.session().is_none());
        assert!(app.is_error());
        assert_eq!(
            app.message(),
            "game ended: engine error: grid did not settle after 10000 passes"
        );

        // The next game starts from scratch.
        type_line(&mut app, "1");
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.session().unwrap().moves_left(), 20);
    }

    #[test]
    fn test_escape_abandons_game() {
        let mut app = app();
        type_line(&mut app, "1");
        app.handle_action(LineAction::Cancel);
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.session().is_none());
    }

    #[test]
    fn test_settings_screen_edits_in_memory_store() {
        let mut app = app();
        type_line(&mut app, "3");
        assert_eq!(app.screen(), Screen::Settings);

        type_line(&mut app, "candies 9");
        assert!(app.is_error());
        assert_eq!(app.store().config().candy_count, 5);

        type_line(&mut app, "q");
        assert_eq!(app.screen(), Screen::Menu);
        assert_eq!(app.store().get(SettingKey::Width), Some(10));
    }

    #[test]
    fn test_render_each_screen() {
        let mut app = app();
        let mut fb = FrameBuffer::new(80, 30);
        let viewport = Viewport::new(80, 30);

        app.render_into(viewport, &mut fb);
        assert!(fb.contains_text("choice> _"));

        type_line(&mut app, "1");
        app.render_into(viewport, &mut fb);
        assert!(fb.contains_text("SCORE"));
        assert!(fb.contains_text("move> _"));

        app.handle_action(LineAction::Cancel);
        type_line(&mut app, "3");
        app.render_into(viewport, &mut fb);
        assert!(fb.contains_text("width    = 10"));
    }
}
