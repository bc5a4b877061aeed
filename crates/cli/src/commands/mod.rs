//! Command implementations.
//!
//! Each command takes the store and an output writer so it can be exercised
//! against in-memory storage and a byte buffer.

use eshopper_cart::{CartError, CartEvent, CartObserver};
use thiserror::Error;

pub mod items;
pub mod report;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Cart storage failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// Writing to stdout failed.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// No row at the given 1-based position.
    #[error("No cart item at position {0}")]
    NotFound(usize),
}

/// Convert a 1-based position from the command line to a cart index.
fn to_index(position: usize) -> Result<usize, CommandError> {
    position
        .checked_sub(1)
        .ok_or(CommandError::NotFound(position))
}

/// Logs cart events to the terminal.
#[derive(Debug, Default)]
pub struct TerminalObserver;

impl CartObserver for TerminalObserver {
    fn on_event(&self, event: &CartEvent) {
        match event {
            CartEvent::Changed { item_count } => {
                tracing::debug!(item_count, "Cart badge updated");
            }
            CartEvent::Notification { message } => tracing::info!("{message}"),
        }
    }
}
