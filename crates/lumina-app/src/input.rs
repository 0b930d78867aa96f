use lumina_core::{Family, Mode, Palette};

// ---------------------------------------------------------------------------
// Key: windowing-library-independent key representation
// ---------------------------------------------------------------------------

/// A keyboard key, independent of any windowing library.
///
/// `main.rs` maps `winit::keyboard::KeyCode` → `Key`; everything else in the
/// input pipeline works purely with this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Space,
    Tab,
    Up,
    Down,
    BracketLeft,
    BracketRight,
    P,
    R,
    S,
    Q,
    Escape,
}

// ---------------------------------------------------------------------------
// InputAction: what the app does in response to input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    LoadPalette(Palette),
    NextMode,
    SwitchFamily,
    SpeedUp,
    SpeedDown,
    ScaleDown,
    ScaleUp,
    ToggleAnimate,
    Reset,
    Screenshot,
    Quit,
}

/// Translate a key press into an action, if the key is mapped.
pub fn action_for(key: Key) -> Option<InputAction> {
    match key {
        Key::Digit(d @ 1..=8) => Some(InputAction::LoadPalette(Palette::ALL[d as usize - 1])),
        Key::Digit(_) => None,
        Key::Space => Some(InputAction::NextMode),
        Key::Tab => Some(InputAction::SwitchFamily),
        Key::Up => Some(InputAction::SpeedUp),
        Key::Down => Some(InputAction::SpeedDown),
        Key::BracketLeft => Some(InputAction::ScaleDown),
        Key::BracketRight => Some(InputAction::ScaleUp),
        Key::P => Some(InputAction::ToggleAnimate),
        Key::R => Some(InputAction::Reset),
        Key::S => Some(InputAction::Screenshot),
        Key::Q | Key::Escape => Some(InputAction::Quit),
    }
}

/// Whether holding the key down should keep applying the action.
pub fn repeats(action: InputAction) -> bool {
    matches!(
        action,
        InputAction::SpeedUp | InputAction::SpeedDown | InputAction::ScaleUp | InputAction::ScaleDown
    )
}

// ---------------------------------------------------------------------------
// Control stepping (pure, testable)
// ---------------------------------------------------------------------------

pub const SPEED_STEP: f32 = 0.25;
pub const SPEED_RANGE: (f32, f32) = (0.0, 5.0);
pub const SCALE_FACTOR: f32 = 1.25;
pub const SCALE_RANGE: (f32, f32) = (0.1, 10.0);

/// Step the animation speed by `steps` increments, clamped to `SPEED_RANGE`.
pub fn step_speed(speed: f32, steps: i32) -> f32 {
    (speed + steps as f32 * SPEED_STEP).clamp(SPEED_RANGE.0, SPEED_RANGE.1)
}

/// Multiply the scale by `SCALE_FACTOR` per step, clamped to `SCALE_RANGE`.
pub fn step_scale(scale: f32, steps: i32) -> f32 {
    (scale * SCALE_FACTOR.powi(steps)).clamp(SCALE_RANGE.0, SCALE_RANGE.1)
}

/// The mode of the same name in the other family, or that family's first
/// mode when it has no such mode.
pub fn switch_family(mode: Mode) -> Mode {
    let other = match mode.family() {
        Family::Lumina => Family::Studio,
        Family::Studio => Family::Lumina,
    };
    Mode::parse(other, mode.name())
        .or_else(|_| Mode::from_index(other, 0))
        .unwrap_or(mode)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
