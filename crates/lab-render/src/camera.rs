use lab_core::{LabError, Result, Tolerance, Validate};
use lab_math::{DMat4, Point3, Vector3};

use crate::config::CameraSettings;

/// Fixed world-space up reference for the orientation basis.
pub const WORLD_UP: Vector3 = Vector3::Y;
/// Pitch stays inside `[-PITCH_LIMIT, PITCH_LIMIT]` degrees so `front` never
/// becomes parallel to [`WORLD_UP`].
pub const PITCH_LIMIT: f64 = 89.0;
pub const MIN_FIELD_OF_VIEW: f64 = 1.0;
pub const MAX_FIELD_OF_VIEW: f64 = 60.0;

pub const DEFAULT_POSITION: Point3 = Point3::new(0.0, 0.0, 7.0);
pub const DEFAULT_YAW: f64 = -90.0;
pub const DEFAULT_PITCH: f64 = 0.0;
pub const DEFAULT_MOVE_SPEED: f64 = 2.5;
pub const DEFAULT_LOOK_SENSITIVITY: f64 = 0.05;
pub const DEFAULT_FIELD_OF_VIEW: f64 = 60.0;

/// Keyboard-driven movement directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// First-person camera driven by yaw/pitch Euler angles (degrees).
///
/// `front`, `right` and `up` are derived from the angles and cached; every
/// operation that changes the angles recomputes all three before returning,
/// so callers only ever observe an orthonormal basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Point3,
    yaw: f64,
    pitch: f64,
    front: Vector3,
    right: Vector3,
    up: Vector3,
    move_speed: f64,
    look_sensitivity: f64,
    field_of_view: f64,
}

impl Camera {
    /// Camera at `position` looking along the given angles. Pitch is clamped;
    /// non-finite arguments fall back to the defaults.
    pub fn new(position: Point3, yaw: f64, pitch: f64) -> Self {
        let position = if position.is_finite() {
            position
        } else {
            log::warn!("ignoring non-finite camera position {position}");
            DEFAULT_POSITION
        };
        let yaw = if yaw.is_finite() {
            yaw
        } else {
            log::warn!("ignoring non-finite yaw {yaw}");
            DEFAULT_YAW
        };
        let pitch = if pitch.is_finite() {
            pitch
        } else {
            log::warn!("ignoring non-finite pitch {pitch}");
            DEFAULT_PITCH
        };

        let mut camera = Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            front: -Vector3::Z,
            right: Vector3::X,
            up: WORLD_UP,
            move_speed: DEFAULT_MOVE_SPEED,
            look_sensitivity: DEFAULT_LOOK_SENSITIVITY,
            field_of_view: DEFAULT_FIELD_OF_VIEW,
        };
        camera.update_vectors();
        camera
    }

    /// Default pose with tuning taken from settings.
    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::default()
            .with_move_speed(settings.move_speed)
            .with_look_sensitivity(settings.look_sensitivity)
            .with_field_of_view(settings.fov)
    }

    pub fn with_move_speed(mut self, move_speed: f64) -> Self {
        if move_speed.is_finite() {
            self.move_speed = move_speed;
        } else {
            log::warn!("ignoring non-finite move speed {move_speed}");
        }
        self
    }

    pub fn with_look_sensitivity(mut self, look_sensitivity: f64) -> Self {
        if look_sensitivity.is_finite() {
            self.look_sensitivity = look_sensitivity;
        } else {
            log::warn!("ignoring non-finite look sensitivity {look_sensitivity}");
        }
        self
    }

    /// Field of view in degrees, clamped to the zoom range.
    pub fn with_field_of_view(mut self, field_of_view: f64) -> Self {
        if field_of_view.is_finite() {
            self.field_of_view = field_of_view.clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW);
        } else {
            log::warn!("ignoring non-finite field of view {field_of_view}");
        }
        self
    }

    pub fn position(&self) -> Point3 {
        self.position
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    pub fn front(&self) -> Vector3 {
        self.front
    }

    pub fn right(&self) -> Vector3 {
        self.right
    }

    pub fn up(&self) -> Vector3 {
        self.up
    }

    pub fn move_speed(&self) -> f64 {
        self.move_speed
    }

    pub fn look_sensitivity(&self) -> f64 {
        self.look_sensitivity
    }

    /// Vertical field of view in degrees.
    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    /// Translate along `front` or `right` by `move_speed * elapsed_seconds`.
    pub fn move_by(&mut self, direction: Movement, elapsed_seconds: f64) {
        if !elapsed_seconds.is_finite() {
            log::warn!("ignoring movement with non-finite elapsed time {elapsed_seconds}");
            return;
        }

        let distance = self.move_speed * elapsed_seconds;
        match direction {
            Movement::Forward => self.position += self.front * distance,
            Movement::Backward => self.position -= self.front * distance,
            Movement::Left => self.position -= self.right * distance,
            Movement::Right => self.position += self.right * distance,
        }
    }

    /// Apply a pointer delta (pixels) to yaw and pitch.
    ///
    /// Yaw is wrapped to a single turn so repeated turning never overflows.
    pub fn look(&mut self, x_offset: f64, y_offset: f64) {
        let (yaw_delta, pitch_delta) = (
            x_offset * self.look_sensitivity,
            y_offset * self.look_sensitivity,
        );
        if !(yaw_delta.is_finite() && pitch_delta.is_finite()) {
            log::warn!("ignoring non-finite look offset ({x_offset}, {y_offset})");
            return;
        }

        self.yaw = (self.yaw.rem_euclid(360.0) + yaw_delta.rem_euclid(360.0)).rem_euclid(360.0);
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Narrow (positive delta) or widen the field of view.
    pub fn zoom(&mut self, scroll_delta: f64) {
        if !scroll_delta.is_finite() {
            log::warn!("ignoring non-finite scroll delta {scroll_delta}");
            return;
        }

        self.field_of_view =
            (self.field_of_view - scroll_delta).clamp(MIN_FIELD_OF_VIEW, MAX_FIELD_OF_VIEW);
    }

    /// Right-handed look-at matrix from `position` towards `position + front`.
    pub fn view_transform(&self) -> DMat4 {
        DMat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Perspective projection (OpenGL clip space) using the current field of view.
    pub fn projection_transform(&self, aspect: f64, near: f64, far: f64) -> DMat4 {
        DMat4::perspective_rh_gl(self.field_of_view.to_radians(), aspect, near, far)
    }

    pub fn view_projection(&self, aspect: f64, near: f64, far: f64) -> DMat4 {
        self.projection_transform(aspect, near, far) * self.view_transform()
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        let direction = Vector3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        self.front = direction.normalize();
        self.right = self.front.cross(WORLD_UP).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION, DEFAULT_YAW, DEFAULT_PITCH)
    }
}

impl Validate for Camera {
    fn validate(&self) -> Result<()> {
        let tol = Tolerance::default();
        for (name, v) in [("front", self.front), ("right", self.right), ("up", self.up)] {
            if !tol.linear_eq(v.length(), 1.0) {
                return Err(LabError::Geometry(format!(
                    "{name} vector {v} is not unit length"
                )));
            }
        }
        for (name, a, b) in [
            ("front/right", self.front, self.right),
            ("front/up", self.front, self.up),
            ("right/up", self.right, self.up),
        ] {
            if !tol.is_orthogonal(a.dot(b)) {
                return Err(LabError::Geometry(format!(
                    "{name} are not orthogonal (dot = {})",
                    a.dot(b)
                )));
            }
        }
        Ok(())
    }
}
