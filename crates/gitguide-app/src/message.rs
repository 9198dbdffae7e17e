//! Message types for the application (TEA pattern)

use gitguide_core::{AnimationComplexity, AnimationSpeed, GuideTab};

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (timers, acknowledgements)
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Quit (q, Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Guide Navigation
    // ─────────────────────────────────────────────────────────
    NextTab,
    PreviousTab,
    SelectTab(GuideTab),
    NextCard,
    PreviousCard,
    FirstCard,
    LastCard,
    /// Expand/collapse real-world examples of the focused card
    ToggleExamples,
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    FaqNext,
    FaqPrevious,
    FaqFirst,
    FaqLast,
    ToggleFaq,

    // ─────────────────────────────────────────────────────────
    // Animation Playback
    // ─────────────────────────────────────────────────────────
    /// Switch the focused timeline between autoplay and manual
    ToggleAnimationMode,
    StepForward,
    StepBackward,
    ResetAnimation,
    /// Pause/resume autoplay
    TogglePlayback,

    // ─────────────────────────────────────────────────────────
    // Interactive Diagrams
    // ─────────────────────────────────────────────────────────
    NextDiagramPreset,
    PreviousDiagramPreset,
    DiagramCursorLeft,
    DiagramCursorRight,
    /// Select the node under the cursor, or clear it if already selected
    SelectDiagramNode,

    // ─────────────────────────────────────────────────────────
    // Preferences
    // ─────────────────────────────────────────────────────────
    /// dark → light → system → dark
    CycleTheme,
    OpenSettings,
    CloseSettings,
    SettingsNextItem,
    SettingsPreviousItem,
    /// Change the selected setting (left/right or space)
    SettingsAdjust { forward: bool },
    ToggleAnimationsEnabled,
    SetAnimationSpeed(AnimationSpeed),
    SetAnimationComplexity(AnimationComplexity),

    // ─────────────────────────────────────────────────────────
    // Command Search
    // ─────────────────────────────────────────────────────────
    /// Ctrl+K: open or close the palette
    ToggleSearch,
    CloseSearch,
    /// Replace the query text
    SearchInput { text: String },
    SearchSelectNext,
    SearchSelectPrevious,
    SearchSelectFirst,
    SearchSelectLast,
    /// Copy the highlighted command to the clipboard
    CopySelectedCommand,
    /// Clipboard write succeeded
    CommandCopied { command: &'static str },
    /// Clipboard write failed; nothing is acknowledged
    CopyFailed { reason: String },

    // ─────────────────────────────────────────────────────────
    // Progress
    // ─────────────────────────────────────────────────────────
    OpenProgress,
    CloseProgress,
    ProgressNext,
    ProgressPrevious,
    /// Toggle the checklist item under the cursor
    ToggleProgressAtCursor,
    ToggleProgressItem {
        section_id: &'static str,
        index: usize,
    },
    /// Show the reset confirmation dialog
    RequestResetProgress,
    ConfirmResetProgress,
    CancelResetProgress,
    ConfirmDialogNext,
    ConfirmDialogPrevious,
    ConfirmDialogSubmit,

    // ─────────────────────────────────────────────────────────
    // Environment
    // ─────────────────────────────────────────────────────────
    DismissNotice,
    /// The storage file was modified by another instance
    StorageChanged,
    /// The storage watcher stopped with an error
    WatcherError { message: String },
}
