use glam::{Mat4, Vec3};

use crate::input::{InputFrame, InputState, Key, MouseButton};

const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Starting pose and speeds of a [`FlyCamera`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraConfig {
    pub position: Vec3,
    /// Rotation about +Y; 0 looks down -Z.
    pub yaw_degrees: f32,
    /// Positive looks up.
    pub pitch_degrees: f32,
    /// World units per second.
    pub move_speed: f32,
    /// Degrees per second for arrow-key turning.
    pub turn_speed_degrees: f32,
    /// Degrees per pixel of right-button drag.
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 3.0, 12.0),
            yaw_degrees: 0.0,
            pitch_degrees: -14.0,
            move_speed: 6.0,
            turn_speed_degrees: 90.0,
            mouse_sensitivity: 0.15,
        }
    }
}

/// Free-flying camera.
///
/// Controls:
/// - W/S forward/back, A/D strafe, Space/Shift up/down
/// - arrow keys turn
/// - right-button drag looks around
#[derive(Debug, Clone)]
pub struct FlyCamera {
    config: CameraConfig,
    position: Vec3,
    yaw: f32,
    pitch: f32,
    view: Mat4,
}

impl FlyCamera {
    pub fn new(config: CameraConfig) -> Self {
        let mut camera = Self {
            config,
            position: config.position,
            yaw: config.yaw_degrees.to_radians(),
            pitch: 0.0,
            view: Mat4::IDENTITY,
        };
        camera.set_pitch(config.pitch_degrees.to_radians());
        camera.rebuild_view();
        camera
    }

    /// Advances the camera by `dt` seconds of input.
    pub fn update(&mut self, input: &InputState, frame: &InputFrame, dt: f32) {
        let axis = |pos: Key, neg: Key| {
            (input.key_down(pos) as i32 - input.key_down(neg) as i32) as f32
        };

        let turn = self.config.turn_speed_degrees.to_radians() * dt;
        let mut yaw = self.yaw + axis(Key::ArrowRight, Key::ArrowLeft) * turn;
        let mut pitch = self.pitch + axis(Key::ArrowUp, Key::ArrowDown) * turn;

        if input.button_down(MouseButton::Right) {
            let (dx, dy) = frame.pointer_delta;
            let sensitivity = self.config.mouse_sensitivity.to_radians();
            yaw += dx * sensitivity;
            pitch -= dy * sensitivity;
        }

        self.yaw = yaw;
        self.set_pitch(pitch);

        let forward = self.forward();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let motion = forward * axis(Key::W, Key::S)
            + right * axis(Key::D, Key::A)
            + Vec3::Y * axis(Key::Space, Key::Shift);

        self.position += motion.normalize_or_zero() * self.config.move_speed * dt;
        self.rebuild_view();
    }

    /// The current view matrix.
    pub fn view_matrix(&self) -> &Mat4 {
        &self.view
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    pub fn forward(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cp * sy, sp, -cp * cy)
    }

    pub fn pitch_degrees(&self) -> f32 {
        self.pitch.to_degrees()
    }

    fn set_pitch(&mut self, pitch: f32) {
        let limit = PITCH_LIMIT_DEGREES.to_radians();
        self.pitch = pitch.clamp(-limit, limit);
    }

    fn rebuild_view(&mut self) {
        self.view = Mat4::look_to_rh(self.position, self.forward(), Vec3::Y);
    }
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ButtonState, InputEvent};

    fn level_camera() -> FlyCamera {
        FlyCamera::new(CameraConfig {
            position: Vec3::ZERO,
            pitch_degrees: 0.0,
            ..CameraConfig::default()
        })
    }

    fn holding(keys: &[Key]) -> InputState {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        for key in keys {
            state.apply_event(&mut frame, InputEvent::Key {
                key: *key,
                state: ButtonState::Pressed,
                repeat: false,
            });
        }
        state
    }

    #[test]
    fn view_moves_eye_to_origin() {
        let camera = FlyCamera::default();
        let eye = camera.view_matrix().transform_point3(camera.position());
        assert!(eye.abs_diff_eq(Vec3::ZERO, 1e-5));
    }

    #[test]
    fn default_camera_looks_toward_ring() {
        let camera = FlyCamera::default();
        // The ring's centre is in front of the camera (negative view-space z).
        let centre = camera.view_matrix().transform_point3(Vec3::ZERO);
        assert!(centre.z < 0.0);
    }

    #[test]
    fn forward_key_moves_along_minus_z() {
        let mut camera = level_camera();
        camera.update(&holding(&[Key::W]), &InputFrame::default(), 0.5);

        let p = camera.position();
        assert!((p.z + 3.0).abs() < 1e-5);
        assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
    }

    #[test]
    fn diagonal_motion_is_not_faster() {
        let mut camera = level_camera();
        camera.update(&holding(&[Key::W, Key::D]), &InputFrame::default(), 1.0);
        assert!((camera.position().length() - 6.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_is_clamped() {
        let mut camera = level_camera();
        let up = holding(&[Key::ArrowUp]);
        for _ in 0..10 {
            camera.update(&up, &InputFrame::default(), 1.0);
        }
        assert!((camera.pitch_degrees() - 89.0).abs() < 1e-3);
    }

    #[test]
    fn drag_turns_only_with_right_button() {
        let mut camera = level_camera();
        let mut frame = InputFrame::default();
        frame.pointer_delta = (100.0, 0.0);

        camera.update(&InputState::default(), &frame, 0.016);
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, 1e-5));

        let mut input = InputState::default();
        input.buttons_down.insert(MouseButton::Right);
        camera.update(&input, &frame, 0.016);
        assert!(camera.forward().x > 0.0);
    }
}
