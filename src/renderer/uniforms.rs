//! Typed shader parameters

use bytemuck::{Pod, Zeroable};

/// Uniforms of the scrolling background shader
///
/// Layout matches the shader's uniform block, so the host can upload
/// [`as_bytes`](Self::as_bytes) directly.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BackgroundUniforms {
    /// Position within the current meter, `[0, 1)`
    pub pos: f32,
    /// Velocity in km/h
    pub velocity: f32,
    /// Layer opacity, `[0, 1]`
    pub alpha: f32,
    _pad: f32,
}

impl BackgroundUniforms {
    /// Build from simulation units (mm, m/h)
    pub fn new(position_mm: i64, velocity_mph: i64, alpha: f64) -> Self {
        Self {
            pos: position_mm.rem_euclid(1000) as f32 / 1000.0,
            velocity: velocity_mph.max(0) as f32 / 1000.0,
            alpha: alpha.clamp(0.0, 1.0) as f32,
            _pad: 0.0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniforms_from_sim_units() {
        let u = BackgroundUniforms::new(12_250, 120_000, 0.5);
        assert_eq!(u.pos, 0.25);
        assert_eq!(u.velocity, 120.0);
        assert_eq!(u.alpha, 0.5);
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert_eq!(BackgroundUniforms::new(0, 0, 1.7).alpha, 1.0);
        assert_eq!(BackgroundUniforms::new(0, 0, -0.2).alpha, 0.0);
    }

    #[test]
    fn test_byte_layout() {
        let u = BackgroundUniforms::new(500, 0, 1.0);
        assert_eq!(u.as_bytes().len(), 16);
        assert_eq!(&u.as_bytes()[0..4], &0.5f32.to_ne_bytes());
    }
}
