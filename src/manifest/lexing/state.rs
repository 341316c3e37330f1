//! Lexer context, serialized to the integer an incremental re-lexer stores

use serde::Serialize;

/// The lexer's only piece of context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LexerState {
    /// At a line start, or anywhere a colon carries no structural meaning
    #[default]
    Default,
    /// A header name was just read and the colon has not been consumed yet
    AwaitingColon,
}

impl LexerState {
    pub fn as_raw(self) -> u32 {
        match self {
            LexerState::Default => 0,
            LexerState::AwaitingColon => 1,
        }
    }

    pub fn is_default(self) -> bool {
        self == LexerState::Default
    }
}

/// Any non-zero value means "awaiting colon".
impl From<u32> for LexerState {
    fn from(raw: u32) -> Self {
        if raw == 0 {
            LexerState::Default
        } else {
            LexerState::AwaitingColon
        }
    }
}

impl From<LexerState> for u32 {
    fn from(state: LexerState) -> Self {
        state.as_raw()
    }
}
