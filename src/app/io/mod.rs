//! # I/O Abstraction Layer
//!
//! Trait abstractions for terminal input and output so the controller and
//! views can be driven headlessly in tests.
//!
//! ```text
//! Production:  AppController ──▶ TerminalEventStream ──▶ crossterm::event::read()
//!                            ──▶ TerminalRenderStream ──▶ crossterm::execute!()
//!
//! Testing:     AppController ──▶ MockEventStream     ──▶ VecDeque<Event>
//!                            ──▶ MockRenderStream    ──▶ Vec<u8>
//! ```

use anyhow::Result;
use crossterm::event::Event;
use std::io::Write;
use std::time::Duration;

pub mod mock;
pub mod terminal;

pub use mock::{MockEventStream, MockRenderStream};
pub use terminal::{TerminalEventStream, TerminalRenderStream};

/// Type alias for terminal size (width, height)
pub type TerminalSize = (u16, u16);

/// Input event stream abstraction
///
/// Production implementations use crossterm for real terminal input.
/// Test implementations provide pre-programmed event sequences.
pub trait EventStream: Send {
    /// Check if events are available without blocking
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next available event; only call after poll() returns true
    fn read(&mut self) -> Result<Event>;
}

/// Output render stream abstraction
///
/// Styled text goes through the `Write` impl as ANSI-annotated UTF-8;
/// screen and cursor manipulation go through dedicated methods.
pub trait RenderStream: Write + Send {
    /// Clear the entire screen
    fn clear_screen(&mut self) -> Result<()>;

    /// Move cursor to specific position (column, row)
    fn move_cursor(&mut self, x: u16, y: u16) -> Result<()>;

    /// Hide the cursor
    fn hide_cursor(&mut self) -> Result<()>;

    /// Show the cursor
    fn show_cursor(&mut self) -> Result<()>;

    /// Get terminal size as (width, height)
    fn get_size(&self) -> Result<TerminalSize>;

    /// Enter alternate screen buffer
    fn enter_alternate_screen(&mut self) -> Result<()>;

    /// Leave alternate screen buffer
    fn leave_alternate_screen(&mut self) -> Result<()>;

    /// Enable terminal raw mode
    fn enable_raw_mode(&mut self) -> Result<()>;

    /// Disable terminal raw mode
    fn disable_raw_mode(&mut self) -> Result<()>;
}
