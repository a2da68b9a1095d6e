use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use filmstrip_core::{Interaction, NavKey};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    /// Arrow keys, offered to the carousel first
    Navigate(NavKey),
    /// Free scroll by a number of wheel notches (negative = left)
    Scroll(i32),
    /// Pointer or touch interaction that pauses or resumes autoplay
    Interact(Interaction),
    /// Mouse button pressed on the strip at a column
    Press(u16),
    /// Mouse dragged to a column
    DragTo(u16),
    /// Mouse button released
    Release,
    /// Move keyboard focus onto or off the strip
    ToggleFocus,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Tab, _) | (KeyCode::BackTab, _) => Action::ToggleFocus,

        (KeyCode::Left, KeyModifiers::NONE) => Action::Navigate(NavKey::ArrowLeft),
        (KeyCode::Right, KeyModifiers::NONE) => Action::Navigate(NavKey::ArrowRight),

        (KeyCode::Char('h'), KeyModifiers::NONE) => Action::Scroll(-1),
        (KeyCode::Char('l'), KeyModifiers::NONE) => Action::Scroll(1),
        (KeyCode::Char('H'), KeyModifiers::SHIFT) => Action::Scroll(-4),
        (KeyCode::Char('L'), KeyModifiers::SHIFT) => Action::Scroll(4),

        _ => Action::None,
    }
}

/// Handle a mouse event relative to the strip area
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    let inside = app.strip_area().is_some_and(|area| {
        mouse.column >= area.x
            && mouse.column < area.x + area.width
            && mouse.row >= area.y
            && mouse.row < area.y + area.height
    });

    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight if inside => Action::Scroll(1),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft if inside => Action::Scroll(-1),
        MouseEventKind::Down(MouseButton::Left) if inside => Action::Press(mouse.column),
        MouseEventKind::Drag(MouseButton::Left) if app.is_dragging() => Action::DragTo(mouse.column),
        MouseEventKind::Up(MouseButton::Left) if app.is_dragging() => Action::Release,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            match (app.pointer_inside(), inside) {
                (false, true) => Action::Interact(Interaction::PointerEnter),
                (true, false) => Action::Interact(Interaction::PointerLeave),
                _ => Action::None,
            }
        }
        _ => Action::None,
    }
}
