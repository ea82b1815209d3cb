use crate::Error;

/// Sample storage for a [`ScalarGrid`].
///
/// Borrowed grids share a caller-owned buffer and are read-only through the
/// grid; owned grids allocate their own.
#[derive(Clone, Debug)]
pub enum Samples<'a> {
    Owned(Vec<f32>),
    Borrowed(&'a [f32]),
}

/// Dense row-major scalar field, x fastest.
///
/// Out-of-range coordinates are a programming error and panic via slice
/// indexing.
#[derive(Clone, Debug)]
pub struct ScalarGrid<'a> {
    size_x: usize,
    size_y: usize,
    size_z: usize,
    samples: Samples<'a>,
}

impl<'a> ScalarGrid<'a> {
    /// Allocates a zero-filled grid.
    pub fn owned(size_x: usize, size_y: usize, size_z: usize) -> Self {
        Self {
            size_x,
            size_y,
            size_z,
            samples: Samples::Owned(vec![0.0; size_x * size_y * size_z]),
        }
    }

    /// Wraps a caller-owned buffer of exactly `size_x * size_y * size_z`
    /// samples.
    pub fn borrowed(
        size_x: usize,
        size_y: usize,
        size_z: usize,
        data: &'a [f32],
    ) -> Result<Self, Error> {
        let expected = size_x * size_y * size_z;
        if data.len() != expected {
            return Err(Error::ResolutionMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            size_x,
            size_y,
            size_z,
            samples: Samples::Borrowed(data),
        })
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    pub fn size_z(&self) -> usize {
        self.size_z
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        match &self.samples {
            Samples::Owned(v) => v,
            Samples::Borrowed(s) => s,
        }
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        x + y * self.size_x + z * self.size_x * self.size_y
    }

    #[inline]
    pub fn value(&self, x: usize, y: usize, z: usize) -> f32 {
        self.as_slice()[self.offset(x, y, z)]
    }

    /// Writes one sample. Fails on borrowed grids.
    pub fn set_value(&mut self, x: usize, y: usize, z: usize, value: f32) -> Result<(), Error> {
        let offset = self.offset(x, y, z);
        match &mut self.samples {
            Samples::Owned(v) => {
                v[offset] = value;
                Ok(())
            }
            Samples::Borrowed(_) => Err(Error::BorrowedGrid),
        }
    }

    /// Fills the whole grid from a field function of the lattice coordinate.
    pub fn fill_with(&mut self, mut f: impl FnMut(usize, usize, usize) -> f32) -> Result<(), Error> {
        let (sx, sy, sz) = (self.size_x, self.size_y, self.size_z);
        match &mut self.samples {
            Samples::Owned(v) => {
                let mut n = 0;
                for z in 0..sz {
                    for y in 0..sy {
                        for x in 0..sx {
                            v[n] = f(x, y, z);
                            n += 1;
                        }
                    }
                }
                Ok(())
            }
            Samples::Borrowed(_) => Err(Error::BorrowedGrid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owned_grid_round_trips_values() {
        let mut grid = ScalarGrid::owned(3, 4, 5);
        assert_eq!(grid.len(), 60);
        grid.set_value(2, 3, 4, 7.5).unwrap();
        assert_eq!(grid.value(2, 3, 4), 7.5);
        assert_eq!(grid.value(0, 0, 0), 0.0);
        // Last slot of the flat buffer is the max coordinate.
        assert_eq!(grid.as_slice()[59], 7.5);
    }

    #[test]
    fn borrowed_grid_rejects_writes() {
        let data = vec![1.0; 8];
        let mut grid = ScalarGrid::borrowed(2, 2, 2, &data).unwrap();
        assert_eq!(grid.value(1, 1, 1), 1.0);
        assert_eq!(grid.set_value(0, 0, 0, 2.0), Err(Error::BorrowedGrid));
    }

    #[test]
    fn borrowed_grid_checks_length() {
        let data = vec![0.0; 7];
        assert_eq!(
            ScalarGrid::borrowed(2, 2, 2, &data).unwrap_err(),
            Error::ResolutionMismatch {
                expected: 8,
                got: 7
            }
        );
    }

    #[test]
    fn fill_with_uses_x_fastest_order() {
        let mut grid = ScalarGrid::owned(2, 2, 2);
        grid.fill_with(|x, y, z| (x + 2 * y + 4 * z) as f32).unwrap();
        for (n, &v) in grid.as_slice().iter().enumerate() {
            assert_eq!(v, n as f32);
        }
    }
}
