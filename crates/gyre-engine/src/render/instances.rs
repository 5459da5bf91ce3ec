use std::f64::consts::TAU;

use glam::{Mat4, Vec3};

/// Ring of mesh instances drawn every frame.
///
/// Instance `i` of `count` sits at angle `i / count * 2pi` on a circle of
/// `orbit_radius` in the XZ plane and spins about +Y at
/// `(i + 1) * spin_degrees_per_second`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InstanceLayout {
    pub count: u32,
    pub orbit_radius: f32,
    pub spin_degrees_per_second: f32,
}

impl Default for InstanceLayout {
    fn default() -> Self {
        Self {
            count: 8,
            orbit_radius: 4.0,
            spin_degrees_per_second: 15.0,
        }
    }
}

impl InstanceLayout {
    /// Model matrix of instance `index` at `time` seconds.
    ///
    /// Translation is applied after the spin, so each instance turns in place.
    pub fn transform(&self, index: u32, time: f64) -> Mat4 {
        let phase = f64::from(index) / f64::from(self.count.max(1)) * TAU;
        let radius = f64::from(self.orbit_radius);
        let offset = Vec3::new(
            (phase.sin() * radius) as f32,
            0.0,
            (phase.cos() * radius) as f32,
        );

        // Angle is reduced in f64 so large `time` values keep their precision.
        let degrees = time * f64::from(index + 1) * f64::from(self.spin_degrees_per_second);
        let angle = degrees.to_radians() % TAU;

        Mat4::from_translation(offset) * Mat4::from_rotation_y(angle as f32)
    }

    /// Model matrices of all instances at `time`.
    pub fn transforms(&self, time: f64) -> impl Iterator<Item = Mat4> + '_ {
        (0..self.count).map(move |i| self.transform(i, time))
    }
}
