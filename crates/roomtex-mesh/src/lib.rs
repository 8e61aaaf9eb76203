//! Textured triangle meshes for room texturing.
//!
//! A [`Mesh`] holds vertex positions, triangle indices, and the optional
//! UV atlas the texturing stage paints into: per-vertex UV coordinates
//! plus a face-to-UV index table when the source file indexes UVs
//! separately from positions.

/// Mesh file import (`.obj` via `tobj`, `.off` parsed directly).
pub mod import;

pub use import::MeshError;

use roomtex_core::{Pt2, Pt3, Real, Vec3};

/// A triangle mesh with an optional UV atlas.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Pt3>,
    /// Triangle vertex indices.
    pub faces: Vec<[u32; 3]>,
    /// UV coordinates, when the source carries a texture atlas.
    pub uvs: Option<Vec<Pt2>>,
    /// Per-face indices into `uvs`, when UVs are indexed separately from
    /// positions.
    pub face_uvs: Option<Vec<[u32; 3]>>,
}

impl Mesh {
    /// Per-face unit normals and face areas.
    ///
    /// Degenerate faces (collinear vertices) get a zero normal and zero
    /// area rather than NaN.
    pub fn face_normals(&self) -> (Vec<Vec3>, Vec<Real>) {
        let mut normals = Vec::with_capacity(self.faces.len());
        let mut areas = Vec::with_capacity(self.faces.len());

        for face in &self.faces {
            let v0 = self.vertices[face[0] as usize];
            let v1 = self.vertices[face[1] as usize];
            let v2 = self.vertices[face[2] as usize];

            let normal = (v1 - v0).cross(&(v2 - v0));
            let twice_area = normal.norm();
            if twice_area > Real::EPSILON {
                normals.push(normal / twice_area);
                areas.push(twice_area / 2.0);
            } else {
                normals.push(Vec3::zeros());
                areas.push(0.0);
            }
        }

        (normals, areas)
    }

    /// Centroid of the vertex positions.
    pub fn centroid(&self) -> Vec3 {
        if self.vertices.is_empty() {
            return Vec3::zeros();
        }
        let sum = self
            .vertices
            .iter()
            .fold(Vec3::zeros(), |acc, v| acc + v.coords);
        sum / self.vertices.len() as Real
    }

    /// Center the mesh and scale the farthest vertex to `target_scale`,
    /// then lift every y coordinate by `dy`.
    pub fn normalize(&mut self, target_scale: Real, dy: Real) {
        let center = self.centroid();
        for vertex in &mut self.vertices {
            vertex.coords -= center;
        }

        let max_norm = self
            .vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, Real::max);
        if max_norm > Real::EPSILON {
            for vertex in &mut self.vertices {
                vertex.coords *= target_scale / max_norm;
            }
        }

        for vertex in &mut self.vertices {
            vertex.y += dy;
        }
    }

    /// Center the mesh and scale by the standard deviation of the vertex
    /// norms.
    pub fn standardize(&mut self) {
        let center = self.centroid();
        for vertex in &mut self.vertices {
            vertex.coords -= center;
        }

        let n = self.vertices.len();
        if n < 2 {
            return;
        }
        let norms: Vec<Real> = self.vertices.iter().map(|v| v.coords.norm()).collect();
        let mean = norms.iter().sum::<Real>() / n as Real;
        let variance = norms.iter().map(|x| (x - mean) * (x - mean)).sum::<Real>() / (n - 1) as Real;
        let std = variance.sqrt();
        if std > Real::EPSILON {
            for vertex in &mut self.vertices {
                vertex.coords /= std;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        Mesh {
            vertices: vec![
                Pt3::new(0.0, 0.0, 0.0),
                Pt3::new(1.0, 0.0, 0.0),
                Pt3::new(0.0, 1.0, 0.0),
            ],
            faces: vec![[0, 1, 2]],
            uvs: None,
            face_uvs: None,
        }
    }

    #[test]
    fn unit_triangle_normal_and_area() {
        let (normals, areas) = unit_triangle().face_normals();
        assert_eq!(normals.len(), 1);
        assert!((normals[0] - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
        assert!((areas[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn degenerate_face_gets_zero_normal() {
        let mesh = Mesh {
            vertices: vec![
                Pt3::new(0.0, 0.0, 0.0),
                Pt3::new(1.0, 0.0, 0.0),
                Pt3::new(2.0, 0.0, 0.0),
            ],
            faces: vec![[0, 1, 2]],
            uvs: None,
            face_uvs: None,
        };
        let (normals, areas) = mesh.face_normals();
        assert_eq!(normals[0], Vec3::zeros());
        assert_eq!(areas[0], 0.0);
    }

    #[test]
    fn normalize_centers_and_bounds_the_mesh() {
        let mut mesh = unit_triangle();
        mesh.normalize(1.0, 0.5);

        let center = mesh.centroid();
        assert!((center.y - 0.5).abs() < 1e-12);
        assert!(center.x.abs() < 1e-12);
        assert!(center.z.abs() < 1e-12);

        let max_norm = mesh
            .vertices
            .iter()
            .map(|v| (v.coords - Vec3::new(0.0, 0.5, 0.0)).norm())
            .fold(0.0, Real::max);
        assert!((max_norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn standardize_centers_the_mesh() {
        let mut mesh = unit_triangle();
        mesh.standardize();
        assert!(mesh.centroid().norm() < 1e-12);
    }
}
