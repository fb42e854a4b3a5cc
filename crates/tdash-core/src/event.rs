#![forbid(unsafe_code)]

//! Typed input events.
//!
//! Decoding terminal escape sequences into these types is the job of a
//! terminal backend; the core only defines the vocabulary the host's
//! dispatch loop matches on. [`Event::id`] renders an event as a short
//! string identifier (`"q"`, `"<C-c>"`, `"<Resize>"`, `"<MouseLeft>"`) so
//! simple hosts can dispatch with a `match` on `&str`.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A keyboard event.
    Key(KeyEvent),

    /// A mouse event.
    Mouse(MouseEvent),

    /// Terminal was resized.
    Resize {
        /// New terminal width in columns.
        width: u16,
        /// New terminal height in rows.
        height: u16,
    },
}

impl Event {
    /// Short identifier used for string-based dispatch.
    #[must_use]
    pub fn id(&self) -> String {
        match self {
            Self::Key(key) => key.id(),
            Self::Mouse(mouse) => mouse.id().to_string(),
            Self::Resize { .. } => "<Resize>".to_string(),
        }
    }

    /// Shorthand for a plain character key press.
    #[must_use]
    pub const fn char(c: char) -> Self {
        Self::Key(KeyEvent::new(KeyCode::Char(c)))
    }
}

/// A keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code that was pressed.
    pub code: KeyCode,

    /// Modifier keys held during the event.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event without modifiers.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key event with modifiers.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Check if this is a specific character key.
    #[must_use]
    pub fn is_char(&self, c: char) -> bool {
        matches!(self.code, KeyCode::Char(ch) if ch == c)
    }

    /// Check if Ctrl modifier is held.
    #[must_use]
    pub const fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    fn id(&self) -> String {
        let base = match self.code {
            KeyCode::Char(' ') => "<Space>".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "<Enter>".to_string(),
            KeyCode::Escape => "<Escape>".to_string(),
            KeyCode::Backspace => "<Backspace>".to_string(),
            KeyCode::Tab => "<Tab>".to_string(),
            KeyCode::Up => "<Up>".to_string(),
            KeyCode::Down => "<Down>".to_string(),
            KeyCode::Left => "<Left>".to_string(),
            KeyCode::Right => "<Right>".to_string(),
            KeyCode::Home => "<Home>".to_string(),
            KeyCode::End => "<End>".to_string(),
            KeyCode::PageUp => "<PageUp>".to_string(),
            KeyCode::PageDown => "<PageDown>".to_string(),
            KeyCode::F(n) => format!("<F{n}>"),
        };

        let mut prefix = String::new();
        if self.modifiers.contains(Modifiers::CTRL) {
            prefix.push_str("C-");
        }
        if self.modifiers.contains(Modifiers::ALT) {
            prefix.push_str("M-");
        }
        if prefix.is_empty() {
            return base;
        }

        // "<Up>" + Ctrl -> "<C-Up>", "c" + Ctrl -> "<C-c>"
        let inner = base
            .strip_prefix('<')
            .and_then(|s| s.strip_suffix('>'))
            .unwrap_or(&base);
        format!("<{prefix}{inner}>")
    }
}

/// Key codes for keyboard events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A regular character key.
    Char(char),
    Enter,
    Escape,
    Backspace,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    /// Function key `F1`..`F12`.
    F(u8),
}

bitflags! {
    /// Modifier keys held during a key or mouse event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const NONE  = 0b0000;
        const SHIFT = 0b0001;
        const ALT   = 0b0010;
        const CTRL  = 0b0100;
    }
}

/// A mouse event at a 0-indexed cell position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub kind: MouseKind,
    pub x: u16,
    pub y: u16,
}

impl MouseEvent {
    #[must_use]
    pub const fn new(kind: MouseKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    fn id(&self) -> &'static str {
        match self.kind {
            MouseKind::Down(MouseButton::Left) => "<MouseLeft>",
            MouseKind::Down(MouseButton::Middle) => "<MouseMiddle>",
            MouseKind::Down(MouseButton::Right) => "<MouseRight>",
            MouseKind::Up => "<MouseRelease>",
            MouseKind::ScrollUp => "<MouseWheelUp>",
            MouseKind::ScrollDown => "<MouseWheelDown>",
        }
    }
}

/// What happened with the mouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseKind {
    Down(MouseButton),
    Up,
    ScrollUp,
    ScrollDown,
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_char_id() {
        assert_eq!(Event::char('q').id(), "q");
    }

    #[test]
    fn ctrl_char_id() {
        let ev = Event::Key(KeyEvent::new(KeyCode::Char('c')).with_modifiers(Modifiers::CTRL));
        assert_eq!(ev.id(), "<C-c>");
    }

    #[test]
    fn named_key_ids() {
        assert_eq!(Event::Key(KeyEvent::new(KeyCode::Enter)).id(), "<Enter>");
        assert_eq!(Event::Key(KeyEvent::new(KeyCode::F(5))).id(), "<F5>");
        assert_eq!(Event::char(' ').id(), "<Space>");
        let ctrl_up = KeyEvent::new(KeyCode::Up).with_modifiers(Modifiers::CTRL);
        assert_eq!(Event::Key(ctrl_up).id(), "<C-Up>");
    }

    #[test]
    fn alt_and_ctrl_combine() {
        let key = KeyEvent::new(KeyCode::Char('x')).with_modifiers(Modifiers::CTRL | Modifiers::ALT);
        assert_eq!(Event::Key(key).id(), "<C-M-x>");
    }

    #[test]
    fn resize_and_mouse_ids() {
        assert_eq!(
            Event::Resize {
                width: 80,
                height: 24
            }
            .id(),
            "<Resize>"
        );
        let click = MouseEvent::new(MouseKind::Down(MouseButton::Left), 3, 4);
        assert_eq!(Event::Mouse(click).id(), "<MouseLeft>");
    }

    #[test]
    fn key_helpers() {
        let key = KeyEvent::new(KeyCode::Char('a')).with_modifiers(Modifiers::CTRL);
        assert!(key.is_char('a'));
        assert!(!key.is_char('b'));
        assert!(key.ctrl());
    }
}
