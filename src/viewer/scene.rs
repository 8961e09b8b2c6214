use crate::model::{LoadedModel, MeshModel};

/// Caption drawn in the upper-left corner of every viewer window.
pub const MODEL_CAPTION: &str = "High-Detail 3D Model";

/// Framing used when a mesh carries no vertices at all.
const FALLBACK_BOUNDS: ([f32; 3], [f32; 3]) = ([0.0, 0.0, 0.0], [1.0, 1.0, 1.0]);

/// How far above the model the default camera sits, relative to its
/// largest extent.
const DISTANCE_FACTOR: f32 = 2.2;

const MIN_DISTANCE: f32 = 1.0;

/// Everything one viewer unit needs: the mesh, its caption, and the
/// default top-down framing. Owns the mesh for the unit's lifetime.
#[derive(Debug, Clone)]
pub struct ViewerScene {
    pub title: String,
    pub mesh: MeshModel,
}

impl ViewerScene {
    pub fn new(model: LoadedModel) -> Self {
        let title = format!("{} - {}", model.category, model.file_name());
        ViewerScene {
            title,
            mesh: model.mesh,
        }
    }

    fn bounds(&self) -> ([f32; 3], [f32; 3]) {
        self.mesh.bounds().unwrap_or(FALLBACK_BOUNDS)
    }

    /// Centre of the mesh bounding box; the camera looks here.
    pub fn camera_target(&self) -> [f32; 3] {
        let (min, max) = self.bounds();
        [
            (min[0] + max[0]) / 2.0,
            (min[1] + max[1]) / 2.0,
            (min[2] + max[2]) / 2.0,
        ]
    }

    /// Default eye position: straight above the target on the Z axis, so
    /// the window opens on a top-down view of the XY plane.
    pub fn camera_eye(&self) -> [f32; 3] {
        let (min, max) = self.bounds();
        let extent = (max[0] - min[0])
            .max(max[1] - min[1])
            .max(max[2] - min[2]);
        let distance = (extent * DISTANCE_FACTOR).max(MIN_DISTANCE);
        let target = self.camera_target();
        [target[0], target[1], target[2] + distance]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use std::path::PathBuf;

    fn scene_for(mesh: MeshModel) -> ViewerScene {
        ViewerScene::new(LoadedModel {
            category: Category::Heart,
            path: PathBuf::from("valve.stl"),
            mesh,
        })
    }

    #[test]
    fn title_names_category_and_file() {
        let scene = scene_for(MeshModel::default());
        assert_eq!(scene.title, "Heart - valve.stl");
    }

    #[test]
    fn camera_looks_straight_down_the_z_axis() {
        let scene = scene_for(MeshModel::new(
            vec![[0.0, 0.0, 0.0], [4.0, 0.0, 0.0], [0.0, 2.0, 1.0]],
            vec![[0, 1, 2]],
        ));
        let target = scene.camera_target();
        let eye = scene.camera_eye();
        assert_eq!(target, [2.0, 1.0, 0.5]);
        assert_eq!(eye[0], target[0]);
        assert_eq!(eye[1], target[1]);
        assert!(eye[2] > 1.0, "eye must sit above the mesh");
    }

    #[test]
    fn empty_mesh_uses_the_fallback_framing() {
        let scene = scene_for(MeshModel::default());
        assert_eq!(scene.camera_target(), [0.5, 0.5, 0.5]);
        assert!(scene.camera_eye()[2] > 0.5);
    }
}
