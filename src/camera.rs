use raylib::prelude::*;

use crate::config::CameraConfig;

/// Pointer input gathered for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrbitInput {
    /// Drag in pixels while the rotate button is held.
    pub drag: Vector2,
    /// Wheel notches, positive away from the user.
    pub wheel: f32,
}

/// Orbit around the origin with optional damping. No panning.
pub struct OrbitCamera {
    pub yaw: f32,   // radians
    pub pitch: f32, // radians
    pub distance: f32,
    yaw_vel: f32,
    pitch_vel: f32,
    pub fov_deg: f32,
    min_distance: f32,
    max_distance: f32,
    damping: bool,
    damping_factor: f32,
    rotate_speed: f32,
    zoom_step: f32,
}

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.001;
const REST_EPS: f32 = 1e-5;
/// Pending rotation below this is dropped so damping comes to rest.
const VEL_EPS: f32 = 1e-3;

impl OrbitCamera {
    pub fn new(cfg: &CameraConfig) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            distance: cfg.distance.clamp(cfg.min_distance, cfg.max_distance),
            yaw_vel: 0.0,
            pitch_vel: 0.0,
            fov_deg: cfg.fov_deg,
            min_distance: cfg.min_distance,
            max_distance: cfg.max_distance,
            damping: cfg.damping,
            damping_factor: cfg.damping_factor.clamp(0.0, 1.0),
            rotate_speed: cfg.rotate_speed,
            zoom_step: cfg.zoom_step,
        }
    }

    pub fn position(&self) -> Vector3 {
        Vector3::new(
            self.distance * self.pitch.cos() * self.yaw.sin(),
            self.distance * self.pitch.sin(),
            self.distance * self.pitch.cos() * self.yaw.cos(),
        )
    }

    pub fn to_camera3d(&self) -> Camera3D {
        Camera3D::perspective(
            self.position(),
            Vector3::zero(),
            Vector3::new(0.0, 1.0, 0.0),
            self.fov_deg,
        )
    }

    /// True while damped motion is still carrying the camera.
    pub fn is_moving(&self) -> bool {
        self.yaw_vel != 0.0 || self.pitch_vel != 0.0
    }

    /// Applies one tick of input and damping. Returns whether the view
    /// changed, which is the cue to request a redraw.
    pub fn apply(&mut self, input: OrbitInput, dt: f32) -> bool {
        let before = (self.yaw, self.pitch, self.distance);

        let dyaw = -input.drag.x * self.rotate_speed;
        let dpitch = input.drag.y * self.rotate_speed;
        if self.damping {
            self.yaw_vel += dyaw;
            self.pitch_vel += dpitch;
            // Damping factor is tuned per 60 Hz frame; rescale for dt.
            let frames = (dt * 60.0).max(0.0);
            let applied = 1.0 - (1.0 - self.damping_factor).powf(frames);
            self.yaw += self.yaw_vel * applied;
            self.pitch += self.pitch_vel * applied;
            self.yaw_vel *= 1.0 - applied;
            self.pitch_vel *= 1.0 - applied;
            if self.yaw_vel.abs() < VEL_EPS && self.pitch_vel.abs() < VEL_EPS {
                self.yaw_vel = 0.0;
                self.pitch_vel = 0.0;
            }
        } else {
            self.yaw += dyaw;
            self.pitch += dpitch;
        }
        self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.yaw = self.yaw.rem_euclid(std::f32::consts::TAU);

        if input.wheel != 0.0 {
            self.distance *= self.zoom_step.powf(input.wheel);
        }
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);

        let after = (self.yaw, self.pitch, self.distance);
        (before.0 - after.0).abs() > REST_EPS
            || (before.1 - after.1).abs() > REST_EPS
            || (before.2 - after.2).abs() > REST_EPS
    }

    /// Reads mouse drag and wheel from raylib and applies them.
    pub fn update(&mut self, rl: &RaylibHandle, dt: f32, pointer_captured: bool) -> bool {
        let mut input = OrbitInput::default();
        if !pointer_captured {
            if rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT) {
                input.drag = rl.get_mouse_delta();
            }
            input.wheel = rl.get_mouse_wheel_move();
        }
        self.apply(input, dt)
    }
}
