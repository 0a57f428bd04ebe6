use crate::Real;
use serde::{Deserialize, Serialize};

/// Normalized screen coordinate, (u, v) both nominally in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

impl<T> Vec2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Real> Vec2<T> {
    /// Center of pixel (`px`, `py`) in an image of `width` x `height`.
    pub fn pixel_center(px: u32, py: u32, width: u32, height: u32) -> Self {
        Self {
            x: (T::from_u32(px) + T::HALF) / T::from_u32(width),
            y: (T::from_u32(py) + T::HALF) / T::from_u32(height),
        }
    }
}

/// Eye-space position after the perspective divide.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Real> Vec3<T> {
    pub fn scale(&self, factor: T) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }

    pub fn magnitude_squared(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn magnitude(&self) -> T {
        self.magnitude_squared().sqrt()
    }
}

/// Homogeneous point (x, y, z, w).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

impl<T> Vec4<T> {
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }
}

impl<T: Real> Vec4<T> {
    /// Divide every component by `w`, so `w` becomes 1.
    ///
    /// A zero or non-finite `w` is not special-cased.
    pub fn perspective_divide(&self) -> Self {
        Self {
            x: self.x / self.w,
            y: self.y / self.w,
            z: self.z / self.w,
            w: self.w / self.w,
        }
    }

    /// Drop `w`.
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_center_is_offset_by_half() {
        let uv = Vec2::<f64>::pixel_center(0, 0, 4, 2);
        assert_eq!(uv, Vec2::new(0.125, 0.25));

        let uv = Vec2::<f64>::pixel_center(3, 1, 4, 2);
        assert_eq!(uv, Vec2::new(0.875, 0.75));
    }

    #[test]
    fn test_pixel_center_single_pixel_is_image_center() {
        let uv = Vec2::<f32>::pixel_center(0, 0, 1, 1);
        assert_eq!(uv, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_magnitude_of_3_4_12() {
        let v = Vec3::new(3.0_f64, 4.0, 12.0);
        assert_eq!(v.magnitude_squared(), 169.0);
        assert_eq!(v.magnitude(), 13.0);
    }

    #[test]
    fn test_scale_multiplies_each_component() {
        let v = Vec3::new(1000.0_f64, -2000.0, 500.0).scale(0.5);
        assert_eq!(v, Vec3::new(500.0, -1000.0, 250.0));
    }

    #[test]
    fn test_perspective_divide_normalizes_w() {
        let p = Vec4::new(2.0_f64, 4.0, -8.0, 2.0).perspective_divide();
        assert_eq!(p, Vec4::new(1.0, 2.0, -4.0, 1.0));
    }

    #[test]
    fn test_perspective_divide_by_zero_propagates_infinities() {
        let p = Vec4::new(1.0_f32, -1.0, 0.0, 0.0).perspective_divide();
        assert_eq!(p.x, f32::INFINITY);
        assert_eq!(p.y, f32::NEG_INFINITY);
        assert!(p.z.is_nan());
        assert!(p.w.is_nan());
    }
}
