use glam::Vec3;

/// Spherical coordinates with Y up.
///
/// `phi` is the polar angle from +Y, `theta` the azimuth around Y measured
/// from +Z toward +X.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    pub radius: f32,
    pub phi: f32,
    pub theta: f32,
}

impl Spherical {
    const EPS: f32 = 1e-6;

    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            theta: v.x.atan2(v.z),
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
        }
    }

    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }

    /// Keep `phi` strictly inside (0, π) so the view never flips over a pole.
    pub fn make_safe(&mut self) {
        self.phi = self.phi.clamp(Self::EPS, std::f32::consts::PI - Self::EPS);
    }
}
