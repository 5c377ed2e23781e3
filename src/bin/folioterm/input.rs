//! Input thread: blocking crossterm reads mapped to semantic events.
//!
//! The reader thread owns the blocking `event::read` call and forwards only
//! events the loop cares about over a bounded channel, so the loop itself
//! never blocks on the terminal.

use std::thread;

use crossbeam_channel::Sender;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub(crate) const INPUT_CHANNEL_CAPACITY: usize = 256;

/// Wheel scroll step in document rows per notch.
const WHEEL_STEP_ROWS: i32 = 3;

/// What the user did, stripped of crossterm's event surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputEvent {
    MouseClick { x: u16, y: u16 },
    ScrollRows(i32),
    Escape,
    Enter,
    Tab,
    BackTab,
    Backspace,
    Char(char),
    Resize { cols: u16, rows: u16 },
    Exit,
}

/// Spawn the reader thread. It exits when the receiving side hangs up or the
/// terminal stream ends.
pub(crate) fn spawn_input_thread(tx: Sender<InputEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || loop {
        let event = match crossterm::event::read() {
            Ok(event) => event,
            Err(_) => break,
        };
        let Some(mapped) = map_event(event) else {
            continue;
        };
        if tx.send(mapped).is_err() {
            break;
        }
    })
}

fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(cols, rows) => Some(InputEvent::Resize { cols, rows }),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(InputEvent::Exit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Esc => Some(InputEvent::Escape),
        KeyCode::Enter => Some(InputEvent::Enter),
        KeyCode::Tab => Some(InputEvent::Tab),
        KeyCode::BackTab => Some(InputEvent::BackTab),
        KeyCode::Backspace => Some(InputEvent::Backspace),
        KeyCode::Up => Some(InputEvent::ScrollRows(-1)),
        KeyCode::Down => Some(InputEvent::ScrollRows(1)),
        KeyCode::PageUp => Some(InputEvent::ScrollRows(-20)),
        KeyCode::PageDown => Some(InputEvent::ScrollRows(20)),
        KeyCode::Char(c) => Some(InputEvent::Char(c)),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent) -> Option<InputEvent> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::MouseClick {
            x: mouse.column,
            y: mouse.row,
        }),
        MouseEventKind::ScrollUp => Some(InputEvent::ScrollRows(-WHEEL_STEP_ROWS)),
        MouseEventKind::ScrollDown => Some(InputEvent::ScrollRows(WHEEL_STEP_ROWS)),
        _ => None,
    }
}
