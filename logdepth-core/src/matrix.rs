use crate::{Real, Vec4};

/// A 4x4 matrix stored column-major: entry (column, row) lives at
/// `column * 4 + row`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4<T> {
    m: [T; 16],
}

impl<T: Real> Mat4<T> {
    /// Returns the identity matrix
    pub fn identity() -> Self {
        let mut m = [T::ZERO; 16];
        m[0] = T::ONE;
        m[5] = T::ONE;
        m[10] = T::ONE;
        m[15] = T::ONE;
        Self { m }
    }

    /// Wraps 16 entries already laid out column-major.
    pub fn from_column_major(m: [T; 16]) -> Self {
        Self { m }
    }

    /// Builds a matrix from its rows, the order matrices are written on paper.
    pub fn from_rows(r0: [T; 4], r1: [T; 4], r2: [T; 4], r3: [T; 4]) -> Self {
        let rows = [r0, r1, r2, r3];
        let mut m = [T::ZERO; 16];
        for (row, values) in rows.iter().enumerate() {
            for (column, value) in values.iter().enumerate() {
                m[column * 4 + row] = *value;
            }
        }
        Self { m }
    }

    pub fn column_major(&self) -> &[T; 16] {
        &self.m
    }

    pub fn get(&self, column: usize, row: usize) -> T {
        self.m[column * 4 + row]
    }

    /// Converts every entry independently to another width.
    ///
    /// Narrowing `Mat4<f64>` to `Mat4<f32>` rounds each entry on its own;
    /// nothing is re-derived from the narrowed values.
    pub fn cast<U: Real>(&self) -> Mat4<U> {
        Mat4 {
            m: self.m.map(|v| U::from_f64(v.to_f64())),
        }
    }

    /// `self * v` with `out[row] = sum over column of m[column * 4 + row] * v[column]`.
    pub fn mul_vec4(&self, v: Vec4<T>) -> Vec4<T> {
        let m = &self.m;
        Vec4 {
            x: m[0] * v.x + m[4] * v.y + m[8] * v.z + m[12] * v.w,
            y: m[1] * v.x + m[5] * v.y + m[9] * v.z + m[13] * v.w,
            z: m[2] * v.x + m[6] * v.y + m[10] * v.z + m[14] * v.w,
            w: m[3] * v.x + m[7] * v.y + m[11] * v.z + m[15] * v.w,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_leaves_vector_unchanged() {
        let id = Mat4::<f64>::identity();
        let samples = [
            Vec4::new(1.0, 2.0, 3.0, 4.0),
            Vec4::new(-1.5e6, 3.25e-7, 0.0, 1.0),
            Vec4::new(123.456, -789.0, 1e300, -1e-300),
        ];
        for v in samples {
            assert_eq!(id.mul_vec4(v), v);
        }
    }

    #[test]
    fn test_from_rows_stores_column_major() {
        let m = Mat4::<f64>::from_rows(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        );
        assert_eq!(
            m.column_major(),
            &[1.0, 5.0, 9.0, 13.0, 2.0, 6.0, 10.0, 14.0, 3.0, 7.0, 11.0, 15.0, 4.0, 8.0, 12.0, 16.0]
        );
        assert_eq!(m.get(3, 0), 4.0);
        assert_eq!(m.get(0, 3), 13.0);
    }

    #[test]
    fn test_mul_vec4_uses_column_major_convention() {
        let m = Mat4::<f64>::from_rows(
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        );
        let out = m.mul_vec4(Vec4::new(1.0, 0.0, -1.0, 2.0));
        assert_eq!(out, Vec4::new(6.0, 14.0, 22.0, 30.0));
    }

    #[test]
    fn test_translation_column_moves_points() {
        let mut m = [0.0_f32; 16];
        m[0] = 1.0;
        m[5] = 1.0;
        m[10] = 1.0;
        m[15] = 1.0;
        m[12] = 10.0;
        m[13] = -5.0;
        let t = Mat4::from_column_major(m);
        let out = t.mul_vec4(Vec4::new(1.0, 1.0, 1.0, 1.0));
        assert_eq!(out, Vec4::new(11.0, -4.0, 1.0, 1.0));
    }

    #[test]
    fn test_mul_vec4_does_not_touch_inputs() {
        let m = Mat4::<f64>::identity();
        let v = Vec4::new(1.0, 2.0, 3.0, 1.0);
        let _ = m.mul_vec4(v);
        assert_eq!(m, Mat4::identity());
        assert_eq!(v, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn test_cast_narrows_each_entry_independently() {
        let mut entries = [0.0_f64; 16];
        entries[11] = -4.999999938724671;
        entries[15] = 5.000000061275326;
        let narrowed: Mat4<f32> = Mat4::from_column_major(entries).cast();
        assert_eq!(narrowed.get(2, 3), -5.0);
        assert_eq!(narrowed.get(3, 3), 5.0);
        assert_eq!(narrowed.get(0, 0), 0.0);
    }
}
