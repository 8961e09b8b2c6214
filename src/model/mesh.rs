use std::path::PathBuf;

use crate::model::Category;

/// Triangle mesh parsed from a model file.
///
/// Owned exclusively by the viewer unit that displays it.
#[derive(Debug, Clone, Default)]
pub struct MeshModel {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 3]>,
}

impl MeshModel {
    pub fn new(vertices: Vec<[f32; 3]>, faces: Vec<[u32; 3]>) -> Self {
        MeshModel { vertices, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Axis-aligned bounding box, `None` for an empty mesh.
    pub fn bounds(&self) -> Option<([f32; 3], [f32; 3])> {
        let mut vertices = self.vertices.iter();
        let first = *vertices.next()?;
        let mut min = first;
        let mut max = first;
        for v in vertices {
            for axis in 0..3 {
                min[axis] = min[axis].min(v[axis]);
                max[axis] = max[axis].max(v[axis]);
            }
        }
        Some((min, max))
    }
}

/// A successfully parsed model, ready to hand to a viewer.
#[derive(Debug, Clone)]
pub struct LoadedModel {
    pub category: Category,
    pub path: PathBuf,
    pub mesh: MeshModel,
}

impl LoadedModel {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Counts retained by the control window after the mesh moves into
    /// its viewer thread.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            category: self.category,
            file_name: self.file_name(),
            vertices: self.mesh.vertex_count(),
            triangles: self.mesh.triangle_count(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ModelSummary {
    pub category: Category,
    pub file_name: String,
    pub vertices: usize,
    pub triangles: usize,
}
