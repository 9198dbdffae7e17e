//! Key event handlers for different UI modes

use gitguide_core::GuideTab;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Normal => handle_key_normal(state, key),
        UiMode::Search => handle_key_search(state, key),
        UiMode::Settings => handle_key_settings(key),
        UiMode::Progress => handle_key_progress(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let tab = state.guide.tab;

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::CharCtrl('k') => Some(Message::ToggleSearch),

        // ─────────────────────────────────────────────────────────
        // Panels & Preferences
        // ─────────────────────────────────────────────────────────
        InputKey::Char('t') => Some(Message::CycleTheme),
        InputKey::Char('s') => Some(Message::OpenSettings),
        InputKey::Char('p') => Some(Message::OpenProgress),
        InputKey::Char('x') => Some(Message::DismissNotice),

        // ─────────────────────────────────────────────────────────
        // Tabs (1-7 select directly)
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::NextTab),
        InputKey::BackTab => Some(Message::PreviousTab),
        InputKey::Char(c @ '1'..='7') => {
            let index = c.to_digit(10)? as usize - 1;
            GuideTab::from_index(index).map(Message::SelectTab)
        }

        // ─────────────────────────────────────────────────────────
        // Vertical movement depends on the tab
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(match tab {
            GuideTab::Faq => Message::FaqPrevious,
            GuideTab::Introduction | GuideTab::AdvancedViz => Message::ScrollUp,
            _ => Message::PreviousCard,
        }),
        InputKey::Down | InputKey::Char('j') => Some(match tab {
            GuideTab::Faq => Message::FaqNext,
            GuideTab::Introduction | GuideTab::AdvancedViz => Message::ScrollDown,
            _ => Message::NextCard,
        }),
        InputKey::PageUp => Some(Message::ScrollUp),
        InputKey::PageDown => Some(Message::ScrollDown),
        InputKey::Home => Some(match tab {
            GuideTab::Faq => Message::FaqFirst,
            GuideTab::Introduction | GuideTab::AdvancedViz => Message::ScrollToTop,
            _ => Message::FirstCard,
        }),
        InputKey::End => match tab {
            GuideTab::Faq => Some(Message::FaqLast),
            GuideTab::Introduction | GuideTab::AdvancedViz => None,
            _ => Some(Message::LastCard),
        },

        InputKey::Enter => match tab {
            GuideTab::Faq => Some(Message::ToggleFaq),
            GuideTab::AdvancedViz => Some(Message::SelectDiagramNode),
            _ => None,
        },
        InputKey::Char('e') => Some(Message::ToggleExamples),

        // ─────────────────────────────────────────────────────────
        // Interactive diagrams: arrows move the node cursor
        // ─────────────────────────────────────────────────────────
        InputKey::Char('[') if tab == GuideTab::AdvancedViz => {
            Some(Message::PreviousDiagramPreset)
        }
        InputKey::Char(']') if tab == GuideTab::AdvancedViz => Some(Message::NextDiagramPreset),
        InputKey::Left if tab == GuideTab::AdvancedViz => Some(Message::DiagramCursorLeft),
        InputKey::Right if tab == GuideTab::AdvancedViz => Some(Message::DiagramCursorRight),

        // ─────────────────────────────────────────────────────────
        // Animation playback
        // ─────────────────────────────────────────────────────────
        InputKey::Char('m') => Some(Message::ToggleAnimationMode),
        InputKey::Right | InputKey::Char('n') => Some(Message::StepForward),
        InputKey::Left | InputKey::Char('b') => Some(Message::StepBackward),
        InputKey::Char('R') => Some(Message::ResetAnimation),
        InputKey::Char(' ') => Some(Message::TogglePlayback),

        _ => None,
    }
}

/// Handle key events in the command palette
fn handle_key_search(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CloseSearch),
        InputKey::CharCtrl('k') => Some(Message::ToggleSearch),
        InputKey::Enter => Some(Message::CopySelectedCommand),
        InputKey::Down => Some(Message::SearchSelectNext),
        InputKey::Up => Some(Message::SearchSelectPrevious),
        InputKey::Home => Some(Message::SearchSelectFirst),
        InputKey::End => Some(Message::SearchSelectLast),

        // Delete character
        InputKey::Backspace => {
            let mut query = state.search.query.clone();
            query.pop();
            Some(Message::SearchInput { text: query })
        }

        // Clear all input
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),

        // Type character (regular chars)
        InputKey::Char(c) => {
            let mut query = state.search.query.clone();
            query.push(c);
            Some(Message::SearchInput { text: query })
        }

        // Force quit even in search mode
        InputKey::CharCtrl('c') => Some(Message::Quit),

        _ => None,
    }
}

/// Handle key events in the animation settings panel
fn handle_key_settings(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('s' | 'q') => Some(Message::CloseSettings),
        InputKey::Up | InputKey::Char('k') => Some(Message::SettingsPreviousItem),
        InputKey::Down | InputKey::Char('j') => Some(Message::SettingsNextItem),
        InputKey::Left | InputKey::Char('h') => Some(Message::SettingsAdjust { forward: false }),
        InputKey::Right | InputKey::Char('l' | ' ') | InputKey::Enter => {
            Some(Message::SettingsAdjust { forward: true })
        }
        InputKey::Char('t') => Some(Message::CycleTheme),
        InputKey::CharCtrl('k') => Some(Message::ToggleSearch),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the progress checklist
fn handle_key_progress(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Char('p' | 'q') => Some(Message::CloseProgress),
        InputKey::Up | InputKey::Char('k') => Some(Message::ProgressPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::ProgressNext),
        InputKey::Char(' ') | InputKey::Enter => Some(Message::ToggleProgressAtCursor),
        InputKey::Char('r') => Some(Message::RequestResetProgress),
        InputKey::CharCtrl('k') => Some(Message::ToggleSearch),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the reset confirmation dialog
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('y' | 'Y') => Some(Message::ConfirmResetProgress),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelResetProgress),
        InputKey::Left | InputKey::BackTab => Some(Message::ConfirmDialogPrevious),
        InputKey::Right | InputKey::Tab => Some(Message::ConfirmDialogNext),
        InputKey::Enter => Some(Message::ConfirmDialogSubmit),
        // Force quit with Ctrl+C even in dialog
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}
