use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use crate::player::Steer;

// Actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    None,
    TogglePause,
    ToggleStatistics,
    NewTrack,
    Exit,
}

pub struct InputHandler {
    key_states: [bool; 4], // Up, Down, Left, Right
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            key_states: [false; 4],
        }
    }

    // Process keyboard events and return the action to take
    pub fn process_event(&mut self, event: &Event) -> InputAction {
        match event {
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => {
                match keycode {
                    Keycode::Up => self.key_states[0] = true,
                    Keycode::Down => self.key_states[1] = true,
                    Keycode::Left => self.key_states[2] = true,
                    Keycode::Right => self.key_states[3] = true,
                    _ => {}
                }

                // Ignore key repeat events for edge-triggered actions
                if *repeat {
                    return InputAction::None;
                }

                match keycode {
                    Keycode::P => InputAction::TogglePause,
                    Keycode::Space => InputAction::ToggleStatistics,
                    Keycode::T => InputAction::NewTrack,
                    Keycode::Escape => InputAction::Exit,
                    _ => InputAction::None,
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                match keycode {
                    Keycode::Up => self.key_states[0] = false,
                    Keycode::Down => self.key_states[1] = false,
                    Keycode::Left => self.key_states[2] = false,
                    Keycode::Right => self.key_states[3] = false,
                    _ => {}
                }
                InputAction::None
            }
            _ => InputAction::None,
        }
    }

    pub fn throttle(&self) -> bool {
        self.key_states[0]
    }

    pub fn braking(&self) -> bool {
        self.key_states[1]
    }

    // Holding both directions cancels out to straight ahead
    pub fn steer(&self) -> Steer {
        match (self.key_states[2], self.key_states[3]) {
            (true, false) => Steer::Left,
            (false, true) => Steer::Right,
            _ => Steer::None,
        }
    }
}

// Helper function to print control instructions
pub fn print_controls() {
    println!("╔══════════════════════════════════════╗");
    println!("║            GAME CONTROLS             ║");
    println!("╠══════════════════════════════════════╣");
    println!("║ ↑ Arrow Up    │ Accelerate           ║");
    println!("║ ↓ Arrow Down  │ Brake                ║");
    println!("║ ← Arrow Left  │ Steer left           ║");
    println!("║ → Arrow Right │ Steer right          ║");
    println!("║ T             │ New random track     ║");
    println!("║ P             │ Toggle pause         ║");
    println!("║ Space         │ Toggle statistics    ║");
    println!("║ Esc           │ Exit                 ║");
    println!("╚══════════════════════════════════════╝");
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdl2::keyboard::Mod;

    fn key_down(keycode: Keycode, repeat: bool) -> Event {
        Event::KeyDown {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::empty(),
            repeat,
        }
    }

    fn key_up(keycode: Keycode) -> Event {
        Event::KeyUp {
            timestamp: 0,
            window_id: 0,
            keycode: Some(keycode),
            scancode: None,
            keymod: Mod::empty(),
            repeat: false,
        }
    }

    #[test]
    fn test_held_arrows_drive_axes() {
        let mut input = InputHandler::new();
        input.process_event(&key_down(Keycode::Up, false));
        input.process_event(&key_down(Keycode::Right, false));
        assert!(input.throttle());
        assert!(!input.braking());
        assert_eq!(input.steer(), Steer::Right);

        input.process_event(&key_up(Keycode::Up));
        input.process_event(&key_up(Keycode::Right));
        assert!(!input.throttle());
        assert_eq!(input.steer(), Steer::None);
    }

    #[test]
    fn test_opposite_steering_cancels() {
        let mut input = InputHandler::new();
        input.process_event(&key_down(Keycode::Left, false));
        input.process_event(&key_down(Keycode::Right, false));
        assert_eq!(input.steer(), Steer::None);
    }

    #[test]
    fn test_edge_triggered_actions() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.process_event(&key_down(Keycode::P, false)),
            InputAction::TogglePause
        );
        assert_eq!(
            input.process_event(&key_down(Keycode::Space, false)),
            InputAction::ToggleStatistics
        );
        assert_eq!(
            input.process_event(&key_down(Keycode::T, false)),
            InputAction::NewTrack
        );
        assert_eq!(
            input.process_event(&key_down(Keycode::Escape, false)),
            InputAction::Exit
        );
    }

    #[test]
    fn test_key_repeat_is_ignored_for_actions() {
        let mut input = InputHandler::new();
        assert_eq!(
            input.process_event(&key_down(Keycode::P, true)),
            InputAction::None
        );
        // But held arrows still register through repeats
        input.process_event(&key_down(Keycode::Up, true));
        assert!(input.throttle());
    }
}
