//! Logical controls and their held state

use crate::Side;

const CONTROL_COUNT: usize = 5;

/// Logical controls, decoupled from physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    Start,
}

impl Control {
    pub const ALL: [Control; CONTROL_COUNT] = [
        Control::LeftUp,
        Control::LeftDown,
        Control::RightUp,
        Control::RightDown,
        Control::Start,
    ];

    pub fn up(side: Side) -> Control {
        match side {
            Side::Left => Control::LeftUp,
            Side::Right => Control::RightUp,
        }
    }

    pub fn down(side: Side) -> Control {
        match side {
            Side::Left => Control::LeftDown,
            Side::Right => Control::RightDown,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Read-only probe of the current held state of each control
pub trait ControlProbe {
    fn is_pressed(&self, control: Control) -> bool;

    /// Net paddle direction for a side: -1 up, 0 none or both, 1 down
    fn paddle_dir(&self, side: Side) -> i8 {
        let up = self.is_pressed(Control::up(side)) as i8;
        let down = self.is_pressed(Control::down(side)) as i8;
        down - up
    }
}

/// Held state for every control, owned by whoever receives key events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    held: [bool; CONTROL_COUNT],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, control: Control) {
        self.held[control.index()] = true;
    }

    pub fn release(&mut self, control: Control) {
        self.held[control.index()] = false;
    }

    /// Drop every held key (e.g. when the window loses focus)
    pub fn release_all(&mut self) {
        self.held = [false; CONTROL_COUNT];
    }

}

impl ControlProbe for InputState {
    fn is_pressed(&self, control: Control) -> bool {
        self.held[control.index()]
    }
}

/// Browser key name to control binding
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMap;

impl KeyMap {
    pub fn control_for(&self, key: &str) -> Option<Control> {
        match key {
            "w" | "W" => Some(Control::LeftUp),
            "s" | "S" => Some(Control::LeftDown),
            "ArrowUp" => Some(Control::RightUp),
            "ArrowDown" => Some(Control::RightDown),
            " " => Some(Control::Start),
            _ => None,
        }
    }

    /// Handle key down event; returns whether the key is bound
    pub fn key_down(&self, input: &mut InputState, key: &str) -> bool {
        match self.control_for(key) {
            Some(control) => {
                input.press(control);
                true
            }
            None => false,
        }
    }

    /// Handle key up event; returns whether the key is bound
    pub fn key_up(&self, input: &mut InputState, key: &str) -> bool {
        match self.control_for(key) {
            Some(control) => {
                input.release(control);
                true
            }
            None => false,
        }
    }
}
