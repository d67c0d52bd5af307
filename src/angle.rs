//! Degree-based trigonometry and orientation limits shared by cameras and entities.

pub const FULL_TURN: f32 = 360.0;
pub const MAX_PITCH: f32 = 90.0;

#[inline]
pub fn cos(degrees: f32) -> f32 {
    degrees.to_radians().cos()
}

#[inline]
pub fn sin(degrees: f32) -> f32 {
    degrees.to_radians().sin()
}

#[inline]
pub fn tan(degrees: f32) -> f32 {
    degrees.to_radians().tan()
}

/// Wrap a yaw into [0, 360).
#[inline]
pub fn wrap_yaw(yaw: f32) -> f32 {
    let wrapped = yaw.rem_euclid(FULL_TURN);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped
    }
}

#[inline]
pub fn clamp_pitch(pitch: f32) -> f32 {
    pitch.clamp(-MAX_PITCH, MAX_PITCH)
}
