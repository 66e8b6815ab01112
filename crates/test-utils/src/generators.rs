//! Synthetic field generators with predictable values.
//!
//! Values encode their own indices, so any extracted slice can be
//! verified cell-by-cell: a 4-D cell at `(t, z, y, x)` holds
//! `t*1000 + z*100 + y*10 + x`. Digits stay distinct for grids up to
//! ten points per axis, which is all the fixtures use.

use ndarray::ArrayD;

/// 2-D field over (y, x); cell value `y*10 + x`.
pub fn ramp_2d(ny: usize, nx: usize) -> ArrayD<f64> {
    ArrayD::from_shape_fn(vec![ny, nx], |idx| (idx[0] * 10 + idx[1]) as f64)
}

/// 3-D field over (outer, y, x); cell value `outer*100 + y*10 + x`.
pub fn ramp_3d(n0: usize, ny: usize, nx: usize) -> ArrayD<f64> {
    ArrayD::from_shape_fn(vec![n0, ny, nx], |idx| {
        (idx[0] * 100 + idx[1] * 10 + idx[2]) as f64
    })
}

/// 4-D field over (t, z, y, x); cell value `t*1000 + z*100 + y*10 + x`.
pub fn ramp_4d(nt: usize, nz: usize, ny: usize, nx: usize) -> ArrayD<f64> {
    ArrayD::from_shape_fn(vec![nt, nz, ny, nx], |idx| {
        (idx[0] * 1000 + idx[1] * 100 + idx[2] * 10 + idx[3]) as f64
    })
}
