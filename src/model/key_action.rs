//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Plain character input goes to the identifier field and is not an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Validate the identifier field and look the member up. Default: Enter
    SubmitSearch,
    /// Look up the preset example member at this index. Default: F1..F9
    RunExample(usize),

    // Field editing
    /// Delete the character before the cursor. Default: Backspace
    DeleteBack,
    /// Delete the character under the cursor. Default: Delete
    DeleteForward,
    /// Move the cursor one position left. Default: ←
    CursorLeft,
    /// Move the cursor one position right. Default: →
    CursorRight,
    /// Move the cursor to the start of the field. Default: Home/Ctrl+a
    CursorHome,
    /// Move the cursor to the end of the field. Default: End/Ctrl+e
    CursorEnd,
    /// Empty the identifier field. Default: Esc
    ClearInput,

    /// Exit the application. Default: Ctrl+q (Ctrl+c always quits)
    Quit,
}
