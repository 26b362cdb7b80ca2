//! Upstream point sources for keypoint generation. A source hands back an
//! oversampled, approximately uniform scatter of points on a closed surface
//! along with the volume that surface encloses; the elimination core treats
//! it as opaque and does not check the quality of the distribution.

use crate::{Point3, Result};
use parry3d_f64::shape::{Shape, TriMesh};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::{PI, TAU};

pub trait SurfaceSource {
    /// Produce `count` points approximately uniformly distributed over the
    /// surface. The same seed must reproduce the same points.
    fn sample_surface(&self, count: usize, seed: u64) -> Result<Vec<Point3>>;

    /// The volume enclosed by the surface, a positive scalar.
    fn volume(&self) -> f64;
}

/// A closed triangle mesh sampled by area-weighted triangle selection and a
/// uniform barycentric draw within the chosen triangle.
pub struct MeshSurface {
    mesh: TriMesh,
}

impl MeshSurface {
    pub fn new(mesh: TriMesh) -> Self {
        Self { mesh }
    }
}

impl SurfaceSource for MeshSurface {
    fn sample_surface(&self, count: usize, seed: u64) -> Result<Vec<Point3>> {
        let mut cumulative_areas = Vec::new();
        let mut total_area = 0.0;
        for tri in self.mesh.triangles() {
            total_area += tri.area();
            cumulative_areas.push(total_area);
        }
        if total_area <= 0.0 {
            return Err("mesh has no surface area to sample".into());
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut result = Vec::with_capacity(count);
        for _ in 0..count {
            let r = rng.random::<f64>() * total_area;
            let tri_id = cumulative_areas
                .binary_search_by(|a| a.partial_cmp(&r).unwrap())
                .unwrap_or_else(|i| i);
            let tri = self.mesh.triangle(tri_id as u32);
            let r1 = rng.random::<f64>();
            let r2 = rng.random::<f64>();
            let a = 1.0 - r1.sqrt();
            let b = r1.sqrt() * (1.0 - r2);
            let c = r1.sqrt() * r2;
            let v = tri.a.coords * a + tri.b.coords * b + tri.c.coords * c;
            result.push(Point3::from(v));
        }

        Ok(result)
    }

    fn volume(&self) -> f64 {
        self.mesh.mass_properties(1.0).mass()
    }
}

/// An analytic sphere, mostly useful for testing and calibration since its
/// surface can be sampled exactly uniformly.
pub struct SphereSurface {
    pub center: Point3,
    pub radius: f64,
}

impl SphereSurface {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl SurfaceSource for SphereSurface {
    fn sample_surface(&self, count: usize, seed: u64) -> Result<Vec<Point3>> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut result = Vec::with_capacity(count);
        for _ in 0..count {
            // Uniform over the sphere: z uniform in [-1, 1], azimuth uniform
            let z = rng.random::<f64>() * 2.0 - 1.0;
            let azimuth = rng.random::<f64>() * TAU;
            let r_xy = (1.0 - z * z).sqrt();
            result.push(
                self.center
                    + crate::Vector3::new(r_xy * azimuth.cos(), r_xy * azimuth.sin(), z)
                        * self.radius,
            );
        }
        Ok(result)
    }

    fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::points::{dist, mean_point};

    fn unit_cube() -> TriMesh {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(1.0, 0.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(0.0, 1.0, 1.0),
        ];
        let indices = vec![
            [0u32, 2, 1],
            [0, 3, 2],
            [4, 5, 6],
            [4, 6, 7],
            [0, 1, 5],
            [0, 5, 4],
            [1, 2, 6],
            [1, 6, 5],
            [2, 3, 7],
            [2, 7, 6],
            [3, 0, 4],
            [3, 4, 7],
        ];
        TriMesh::new(vertices, indices).unwrap()
    }

    #[test]
    fn cube_volume_from_mass_properties() {
        let surface = MeshSurface::new(unit_cube());
        assert!((surface.volume() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn cube_samples_lie_on_the_surface() {
        let surface = MeshSurface::new(unit_cube());
        let points = surface.sample_surface(500, 3).unwrap();
        assert_eq!(points.len(), 500);
        for p in &points {
            let on_face = [p.x, p.y, p.z]
                .iter()
                .any(|&c| c.abs() < 1e-9 || (c - 1.0).abs() < 1e-9);
            assert!(on_face, "point {:?} is not on a cube face", p);
            assert!((-1e-9..=1.0 + 1e-9).contains(&p.x));
            assert!((-1e-9..=1.0 + 1e-9).contains(&p.y));
            assert!((-1e-9..=1.0 + 1e-9).contains(&p.z));
        }
    }

    #[test]
    fn mesh_sampling_is_seed_deterministic() {
        let surface = MeshSurface::new(unit_cube());
        let a = surface.sample_surface(100, 11).unwrap();
        let b = surface.sample_surface(100, 11).unwrap();
        let c = surface.sample_surface(100, 12).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn sphere_samples_have_unit_radius_and_balanced_centroid() {
        let surface = SphereSurface::new(Point3::new(1.0, -2.0, 0.5), 2.0);
        let points = surface.sample_surface(2000, 4).unwrap();
        for p in &points {
            assert!((dist(p, &surface.center) - 2.0).abs() < 1e-9);
        }
        // The centroid of a uniform spherical scatter collapses to the center
        let centroid = mean_point(&points);
        assert!(dist(&centroid, &surface.center) < 0.2);
    }
}
