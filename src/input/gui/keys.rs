use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::controllers::explorer::ports::input_source::BackendInput;
use crate::core::navigation::NavigationCommand;

/// Maps a key event to an explorer input. Releases are ignored; auto-repeat
/// presses map like any other press.
#[must_use]
pub fn input_for_key(key_code: KeyCode, state: ElementState) -> Option<BackendInput> {
    if state != ElementState::Pressed {
        return None;
    }

    let command = match key_code {
        KeyCode::ArrowUp => NavigationCommand::PanUp,
        KeyCode::ArrowDown => NavigationCommand::PanDown,
        KeyCode::ArrowLeft => NavigationCommand::PanLeft,
        KeyCode::ArrowRight => NavigationCommand::PanRight,
        KeyCode::Enter | KeyCode::NumpadEnter => NavigationCommand::ZoomIn,
        KeyCode::Minus | KeyCode::NumpadSubtract | KeyCode::Backspace => {
            NavigationCommand::ZoomOut
        }
        KeyCode::KeyR => NavigationCommand::Reset,
        KeyCode::Escape => return Some(BackendInput::Quit),
        _ => return None,
    };

    Some(BackendInput::Command(command))
}

#[cfg(test)]
mod tests {
    use super::input_for_key;
    use crate::controllers::explorer::ports::input_source::BackendInput;
    use crate::core::navigation::NavigationCommand;
    use winit::{event::ElementState, keyboard::KeyCode};

    #[test]
    fn arrows_pan_and_enter_zooms() {
        let cases = [
            (KeyCode::ArrowUp, NavigationCommand::PanUp),
            (KeyCode::ArrowDown, NavigationCommand::PanDown),
            (KeyCode::ArrowLeft, NavigationCommand::PanLeft),
            (KeyCode::ArrowRight, NavigationCommand::PanRight),
            (KeyCode::Enter, NavigationCommand::ZoomIn),
            (KeyCode::Minus, NavigationCommand::ZoomOut),
            (KeyCode::Backspace, NavigationCommand::ZoomOut),
            (KeyCode::KeyR, NavigationCommand::Reset),
        ];

        for (key_code, command) in cases {
            assert_eq!(
                input_for_key(key_code, ElementState::Pressed),
                Some(BackendInput::Command(command))
            );
        }
    }

    #[test]
    fn escape_quits() {
        assert_eq!(
            input_for_key(KeyCode::Escape, ElementState::Pressed),
            Some(BackendInput::Quit)
        );
    }

    #[test]
    fn releases_and_unbound_keys_are_ignored() {
        assert_eq!(input_for_key(KeyCode::ArrowUp, ElementState::Released), None);
        assert_eq!(input_for_key(KeyCode::KeyQ, ElementState::Pressed), None);
    }
}
