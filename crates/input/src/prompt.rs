//! Name entry after a scoring run.
//!
//! While the prompt is open every printable key edits the name, so the
//! normal key map must not see them. Enter confirms and Esc skips.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::types::MAX_NAME_LEN;

/// One edit to the name being typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptEdit {
    Insert(char),
    Backspace,
    Confirm,
    Skip,
}

/// Map keyboard input to prompt edits.
pub fn handle_prompt_key(key: KeyEvent) -> Option<PromptEdit> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        KeyCode::Enter => Some(PromptEdit::Confirm),
        KeyCode::Esc => Some(PromptEdit::Skip),
        KeyCode::Backspace => Some(PromptEdit::Backspace),
        KeyCode::Char(c) if !c.is_control() => Some(PromptEdit::Insert(c)),
        _ => None,
    }
}

/// Where the prompt ended up after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    Editing,
    Submit { name: String, score: u32 },
    Skipped,
}

/// Name being typed for a finished run's score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePrompt {
    score: u32,
    name: String,
}

impl NamePrompt {
    /// Open a prompt for `score`, prefilled with `name` (cut to the name limit).
    pub fn new(score: u32, name: &str) -> Self {
        Self {
            score,
            name: name.chars().take(MAX_NAME_LEN).collect(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn apply(&mut self, edit: PromptEdit) -> PromptResult {
        match edit {
            PromptEdit::Insert(c) => {
                if self.name.chars().count() < MAX_NAME_LEN {
                    self.name.push(c);
                }
                PromptResult::Editing
            }
            PromptEdit::Backspace => {
                self.name.pop();
                PromptResult::Editing
            }
            PromptEdit::Confirm => PromptResult::Submit {
                name: self.name.clone(),
                score: self.score,
            },
            PromptEdit::Skip => PromptResult::Skipped,
        }
    }
}
