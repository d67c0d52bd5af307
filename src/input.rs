/// Input state - held keys and accumulated mouse motion between ticks
/// Window-system independent: the binary maps its key codes onto [`Key`].
use glam::{Vec2, Vec3};

/// Per-session tuning, toggled at runtime by the binary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameOptions {
    /// Degrees of rotation per pixel of mouse motion.
    pub sensitivity: f32,
    /// World units moved per tick per held key.
    pub move_step: f32,
    pub show_debug_info: bool,
    pub debug_normals: bool,
    pub outline: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            sensitivity: 0.2,
            move_step: 0.1,
            show_debug_info: false,
            debug_normals: false,
            outline: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Arrow keys: raw world-axis moves.
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// WASD: walk relative to yaw.
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    Up,
    Down,
    /// Jump back to the origin.
    Home,
    /// Cycle first/third person.
    ToggleView,
}

/// Everything a session needs to advance one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// World-axis move, already scaled by the move step.
    pub axis_move: Vec3,
    /// Yaw-relative walk (forward, right), already scaled.
    pub walk: Vec2,
    /// Mouse delta in pixels since the previous tick.
    pub look: Vec2,
    pub teleport_home: bool,
    pub toggle_view: bool,
}

impl TickInput {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub arrow_up: bool,
    pub arrow_down: bool,
    pub arrow_left: bool,
    pub arrow_right: bool,
    pub forward_pressed: bool,
    pub backward_pressed: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub up_pressed: bool,
    pub down_pressed: bool,
    mouse_delta: Vec2,
    home_requested: bool,
    view_toggle_requested: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition. One-shot keys fire on press only.
    pub fn set_key(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ArrowUp => self.arrow_up = pressed,
            Key::ArrowDown => self.arrow_down = pressed,
            Key::ArrowLeft => self.arrow_left = pressed,
            Key::ArrowRight => self.arrow_right = pressed,
            Key::Forward => self.forward_pressed = pressed,
            Key::Backward => self.backward_pressed = pressed,
            Key::StrafeLeft => self.left_pressed = pressed,
            Key::StrafeRight => self.right_pressed = pressed,
            Key::Up => self.up_pressed = pressed,
            Key::Down => self.down_pressed = pressed,
            Key::Home => self.home_requested |= pressed,
            Key::ToggleView => self.view_toggle_requested |= pressed,
        }
    }

    pub fn add_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta += Vec2::new(dx, dy);
    }

    /// Drop all held keys and pending motion (e.g. on focus loss).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot the held keys for one tick, draining mouse motion and
    /// one-shot requests.
    pub fn take_tick(&mut self, options: &GameOptions) -> TickInput {
        let step = options.move_step;
        let axis = |pos: bool, neg: bool| (pos as i32 - neg as i32) as f32 * step;

        let tick = TickInput {
            axis_move: Vec3::new(
                axis(self.arrow_right, self.arrow_left),
                axis(self.up_pressed, self.down_pressed),
                axis(self.arrow_up, self.arrow_down),
            ),
            walk: Vec2::new(
                axis(self.forward_pressed, self.backward_pressed),
                axis(self.right_pressed, self.left_pressed),
            ),
            look: self.mouse_delta,
            teleport_home: self.home_requested,
            toggle_view: self.view_toggle_requested,
        };

        self.mouse_delta = Vec2::ZERO;
        self.home_requested = false;
        self.view_toggle_requested = false;
        tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn held_keys_scale_by_move_step() {
        let mut input = InputState::new();
        input.set_key(Key::ArrowUp, true);
        input.set_key(Key::ArrowLeft, true);
        input.set_key(Key::Up, true);
        input.set_key(Key::Forward, true);
        input.set_key(Key::StrafeLeft, true);

        let tick = input.take_tick(&GameOptions::default());
        assert_eq!(tick.axis_move, Vec3::new(-0.1, 0.1, 0.1));
        assert_eq!(tick.walk, Vec2::new(0.1, -0.1));

        // Held keys persist across ticks
        assert_eq!(input.take_tick(&GameOptions::default()).axis_move, tick.axis_move);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputState::new();
        input.set_key(Key::Forward, true);
        input.set_key(Key::Backward, true);
        input.set_key(Key::Up, true);
        input.set_key(Key::Down, true);
        assert!(input.take_tick(&GameOptions::default()).is_idle());
    }

    #[test]
    fn mouse_and_one_shots_are_drained() {
        let mut input = InputState::new();
        input.add_mouse_delta(3.0, -1.0);
        input.add_mouse_delta(2.0, 4.0);
        input.set_key(Key::Home, true);
        input.set_key(Key::Home, false);
        input.set_key(Key::ToggleView, true);

        let tick = input.take_tick(&GameOptions::default());
        assert_eq!(tick.look, Vec2::new(5.0, 3.0));
        assert!(tick.teleport_home);
        assert!(tick.toggle_view);

        let next = input.take_tick(&GameOptions::default());
        assert!(next.is_idle());
    }

    #[test]
    fn release_stops_motion() {
        let mut input = InputState::new();
        input.set_key(Key::ArrowRight, true);
        input.set_key(Key::ArrowRight, false);
        assert!(input.take_tick(&GameOptions::default()).is_idle());
    }
}
