//! # Mock I/O Implementations for Testing
//!
//! Mock implementations of the EventStream and RenderStream traits for
//! driving the controller and views without a terminal.

use super::{EventStream, RenderStream, TerminalSize};
use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock event stream replaying a pre-programmed script
pub struct MockEventStream {
    events: VecDeque<Event>,
}

impl MockEventStream {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    pub fn push_event(&mut self, event: Event) {
        self.events.push_back(event);
    }

    /// Queue a plain key press
    pub fn push_key(&mut self, code: KeyCode) {
        self.push_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    /// Queue key presses for every character of `text`
    pub fn push_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.push_key(KeyCode::Char(ch));
        }
    }
}

impl EventStream for MockEventStream {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        Ok(!self.events.is_empty())
    }

    fn read(&mut self) -> Result<Event> {
        self.events
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("No events available"))
    }
}

/// State captured by a [`MockRenderStream`]
///
/// Held behind a shared handle so tests can inspect output after the
/// stream itself has been moved into the controller.
#[derive(Debug, Default)]
pub struct CapturedRender {
    pub output: Vec<u8>,
    pub clear_count: usize,
    pub cursor_position: (u16, u16),
    pub cursor_visible: bool,
    pub raw_mode: bool,
    pub alternate_screen: bool,
}

impl CapturedRender {
    /// Everything written so far, lossily decoded
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Type alias for the shared capture handle
pub type CaptureHandle = Arc<Mutex<CapturedRender>>;

/// Mock render stream recording output and screen manipulation
pub struct MockRenderStream {
    captured: CaptureHandle,
    terminal_size: TerminalSize,
}

impl MockRenderStream {
    pub fn new() -> Self {
        Self::with_size((80, 24))
    }

    pub fn with_size(size: TerminalSize) -> Self {
        Self {
            captured: Arc::new(Mutex::new(CapturedRender {
                cursor_visible: true,
                ..Default::default()
            })),
            terminal_size: size,
        }
    }

    /// Shared handle to the captured state
    pub fn capture_handle(&self) -> CaptureHandle {
        Arc::clone(&self.captured)
    }
}

impl Write for MockRenderStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let mut captured = self.captured.lock().unwrap();
        captured.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl RenderStream for MockRenderStream {
    fn clear_screen(&mut self) -> Result<()> {
        self.captured.lock().unwrap().clear_count += 1;
        Ok(())
    }

    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()> {
        self.captured.lock().unwrap().cursor_position = (x, y);
        Ok(())
    }

    fn hide_cursor(&mut self) -> Result<()> {
        self.captured.lock().unwrap().cursor_visible = false;
        Ok(())
    }

    fn show_cursor(&mut self) -> Result<()> {
        self.captured.lock().unwrap().cursor_visible = true;
        Ok(())
    }

    fn get_size(&self) -> Result<TerminalSize> {
        Ok(self.terminal_size)
    }

    fn enter_alternate_screen(&mut self) -> Result<()> {
        self.captured.lock().unwrap().alternate_screen = true;
        Ok(())
    }

    fn leave_alternate_screen(&mut self) -> Result<()> {
        self.captured.lock().unwrap().alternate_screen = false;
        Ok(())
    }

    fn enable_raw_mode(&mut self) -> Result<()> {
        self.captured.lock().unwrap().raw_mode = true;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> Result<()> {
        self.captured.lock().unwrap().raw_mode = false;
        Ok(())
    }
}

impl Default for MockRenderStream {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_event_stream_should_replay_script_in_order() {
        let mut stream = MockEventStream::empty();
        stream.push_text("ab");
        stream.push_key(KeyCode::Enter);

        assert!(stream.poll(Duration::from_millis(0)).unwrap());
        assert_eq!(
            stream.read().unwrap(),
            Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE))
        );
        stream.read().unwrap();
        stream.read().unwrap();
        assert!(!stream.poll(Duration::from_millis(0)).unwrap());
        assert!(stream.read().is_err());
    }

    #[test]
    fn mock_render_stream_should_capture_output_and_state() {
        let mut stream = MockRenderStream::with_size((40, 10));
        let handle = stream.capture_handle();

        stream.enable_raw_mode().unwrap();
        stream.clear_screen().unwrap();
        stream.move_cursor(3, 1).unwrap();
        write!(stream, "hello").unwrap();

        let captured = handle.lock().unwrap();
        assert!(captured.raw_mode);
        assert_eq!(captured.clear_count, 1);
        assert_eq!(captured.cursor_position, (3, 1));
        assert_eq!(captured.text(), "hello");
        assert_eq!(stream.get_size().unwrap(), (40, 10));
    }
}
