//! # Application Controller
//!
//! Orchestrates the interactive mode: a single loop that polls keyboard
//! input with a timeout, drains the agent service's response channel and
//! re-renders when the view model changed. Fetches never block the loop;
//! they run on spawned tasks and come back as sequence-tagged messages.

use crate::app::io::{EventStream, RenderStream, TerminalEventStream, TerminalRenderStream};
use crate::app::services::AgentService;
use crate::app::view_model::AppViewModel;
use crate::app::views::ProfileScreen;
use crate::cmd_args::CommandLineArgs;
use crate::{config, profile};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// The main application controller wiring input, state and rendering
pub struct AppController<ES: EventStream, RS: RenderStream> {
    view_model: AppViewModel,
    screen: ProfileScreen<RS>,
    service: AgentService,
    event_stream: ES,
    should_quit: bool,
}

impl AppController<TerminalEventStream, TerminalRenderStream<std::io::Stdout>> {
    /// Create a controller bound to the real terminal
    pub fn new(cmd_args: CommandLineArgs) -> Result<Self> {
        Self::with_io_streams(
            cmd_args,
            TerminalEventStream::new(),
            TerminalRenderStream::new(),
        )
    }
}

impl<ES: EventStream, RS: RenderStream> AppController<ES, RS> {
    /// Create a controller with injected I/O streams (dependency injection)
    pub fn with_io_streams(
        cmd_args: CommandLineArgs,
        event_stream: ES,
        render_stream: RS,
    ) -> Result<Self> {
        let profile_path = config::get_profile_path();
        let connection = profile::load_profile(cmd_args.profile(), &profile_path)?;
        let service = AgentService::new(&connection)?;

        let mut view_model = AppViewModel::new();
        view_model.set_profile_name(cmd_args.profile().clone());
        view_model.set_verbose(cmd_args.verbose());

        let screen = ProfileScreen::new(render_stream)?;

        Ok(Self {
            view_model,
            screen,
            service,
            event_stream,
            should_quit: false,
        })
    }

    pub fn view_model(&self) -> &AppViewModel {
        &self.view_model
    }

    /// Run the main application loop
    pub async fn run(&mut self) -> Result<()> {
        self.screen.initialize()?;
        self.view_model.mark_dirty();

        while !self.should_quit {
            if self.event_stream.poll(Duration::from_millis(100))? {
                match self.event_stream.read()? {
                    Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                        tracing::debug!("Received key event: {:?}", key_event);
                        self.handle_key(key_event);
                    }
                    Event::Resize(width, height) => {
                        self.screen.update_size(width, height);
                        self.view_model.mark_dirty();
                    }
                    _ => {}
                }
            }

            // Drain completed fetches; stale ones are discarded inside
            while let Some(response) = self.service.poll_response() {
                self.view_model.apply_response(response);
            }

            if self.view_model.take_dirty() {
                self.screen.render(&self.view_model)?;
            }
        }

        self.screen.cleanup()?;
        Ok(())
    }

    fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.modifiers.contains(KeyModifiers::CONTROL) {
            if let KeyCode::Char('c') = key_event.code {
                self.should_quit = true;
            }
            return;
        }

        match key_event.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(ch) => self.view_model.insert_char(ch),
            KeyCode::Backspace => self.view_model.delete_char_before_cursor(),
            KeyCode::Left => self.view_model.move_cursor_left(),
            KeyCode::Right => self.view_model.move_cursor_right(),
            KeyCode::Home => self.view_model.move_cursor_to_start(),
            KeyCode::End => self.view_model.move_cursor_to_end(),
            _ => {}
        }
    }

    /// Submit the current query if the gate allows it
    fn submit(&mut self) {
        let Some((seq, query)) = self.view_model.begin_request() else {
            tracing::debug!("Submit ignored: gate closed");
            return;
        };
        self.service.execute_async(seq, query);
    }
}
