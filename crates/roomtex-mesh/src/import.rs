//! Mesh file import.
//!
//! Wavefront OBJ goes through `tobj` (triangulated, with the separate
//! face-to-UV index table preserved when the file carries one). OFF is a
//! plain whitespace text format and is parsed directly. Any other
//! extension is a typed error so callers can retry with a corrected
//! path.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use roomtex_core::{Pt2, Pt3, Real};

use crate::Mesh;

/// Errors raised while importing a mesh file.
#[derive(Debug, Error)]
pub enum MeshError {
    #[error("unsupported mesh extension: {}", path.display())]
    UnsupportedExtension { path: PathBuf },
    #[error("failed to read mesh file")]
    Io(#[from] io::Error),
    #[error("failed to parse OBJ: {0}")]
    Obj(#[from] tobj::LoadError),
    #[error("malformed OFF data at line {line}")]
    Malformed { line: usize },
    #[error("OFF face at line {line} is not a triangle")]
    NonTriangular { line: usize },
}

impl Mesh {
    /// Import a mesh from a `.obj` or `.off` file.
    pub fn load(path: &Path) -> Result<Self, MeshError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("obj") => load_obj(path),
            Some(ext) if ext.eq_ignore_ascii_case("off") => load_off(path),
            _ => Err(MeshError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

fn load_obj(path: &Path) -> Result<Mesh, MeshError> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            ..Default::default()
        },
    )?;

    let mut vertices = Vec::new();
    let mut faces = Vec::new();
    let mut uvs = Vec::new();
    let mut face_uvs = Vec::new();

    for model in models {
        let mesh = model.mesh;
        let vertex_offset = vertices.len() as u32;
        let uv_offset = uvs.len() as u32;

        for i in (0..mesh.positions.len()).step_by(3) {
            vertices.push(Pt3::new(
                mesh.positions[i] as Real,
                mesh.positions[i + 1] as Real,
                mesh.positions[i + 2] as Real,
            ));
        }
        for i in (0..mesh.texcoords.len()).step_by(2) {
            uvs.push(Pt2::new(
                mesh.texcoords[i] as Real,
                mesh.texcoords[i + 1] as Real,
            ));
        }
        for i in (0..mesh.indices.len()).step_by(3) {
            faces.push([
                mesh.indices[i] + vertex_offset,
                mesh.indices[i + 1] + vertex_offset,
                mesh.indices[i + 2] + vertex_offset,
            ]);
        }
        for i in (0..mesh.texcoord_indices.len()).step_by(3) {
            face_uvs.push([
                mesh.texcoord_indices[i] + uv_offset,
                mesh.texcoord_indices[i + 1] + uv_offset,
                mesh.texcoord_indices[i + 2] + uv_offset,
            ]);
        }
    }

    Ok(Mesh {
        vertices,
        faces,
        uvs: (!uvs.is_empty()).then_some(uvs),
        face_uvs: (!face_uvs.is_empty()).then_some(face_uvs),
    })
}

fn load_off(path: &Path) -> Result<Mesh, MeshError> {
    let text = std::fs::read_to_string(path)?;
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'));

    let (line, header) = lines.next().ok_or(MeshError::Malformed { line: 1 })?;
    if header != "OFF" {
        return Err(MeshError::Malformed { line });
    }

    let (line, counts) = lines.next().ok_or(MeshError::Malformed { line })?;
    let counts: Vec<usize> = counts
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| MeshError::Malformed { line })?;
    let (n_vertices, n_faces) = match counts[..] {
        [n_vertices, n_faces] | [n_vertices, n_faces, _] => (n_vertices, n_faces),
        _ => return Err(MeshError::Malformed { line }),
    };

    let mut vertices = Vec::with_capacity(n_vertices);
    for _ in 0..n_vertices {
        let (line, row) = lines.next().ok_or(MeshError::Malformed { line })?;
        let coords: Vec<Real> = row
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| MeshError::Malformed { line })?;
        let [x, y, z] = coords[..] else {
            return Err(MeshError::Malformed { line });
        };
        vertices.push(Pt3::new(x, y, z));
    }

    let mut faces = Vec::with_capacity(n_faces);
    for _ in 0..n_faces {
        let (line, row) = lines.next().ok_or(MeshError::Malformed { line })?;
        let indices: Vec<u32> = row
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| MeshError::Malformed { line })?;
        let [arity, a, b, c] = indices[..] else {
            return Err(MeshError::NonTriangular { line });
        };
        if arity != 3 {
            return Err(MeshError::NonTriangular { line });
        }
        faces.push([a, b, c]);
    }

    Ok(Mesh {
        vertices,
        faces,
        uvs: None,
        face_uvs: None,
    })
}
