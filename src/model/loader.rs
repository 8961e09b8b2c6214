use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use obj::{load_obj, Obj, Position};

use crate::error::LoadError;
use crate::model::{Category, LoadedModel, MeshModel};

/// Outcome of one browse-and-load cycle, carried back to the event loop.
#[derive(Debug, Clone)]
pub enum BrowseOutcome {
    /// The file dialog was dismissed without a choice. Not an error.
    Cancelled,
    Loaded(LoadedModel),
    Failed(String),
}

/// Boundary adapter for the browse task: parses the chosen file and folds
/// any failure into a user-facing message.
pub fn open_model(category: Category, path: PathBuf) -> BrowseOutcome {
    match load_model(category, path) {
        Ok(model) => BrowseOutcome::Loaded(model),
        Err(err) => {
            log::error!("{err}");
            BrowseOutcome::Failed(err.to_string())
        }
    }
}

/// Parses `path` into a model, dispatching on the file extension.
pub fn load_model(category: Category, path: PathBuf) -> Result<LoadedModel, LoadError> {
    log::info!("loading {category} model: {}", path.display());

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let mesh = match extension.as_deref() {
        Some("stl") => read_stl_mesh(&path)?,
        Some("obj") => read_obj_mesh(&path)?,
        _ => return Err(LoadError::UnsupportedFormat(path)),
    };

    log::info!(
        "loaded {} ({} vertices, {} triangles)",
        path.display(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(LoadedModel {
        category,
        path,
        mesh,
    })
}

fn read_stl_mesh(path: &Path) -> Result<MeshModel, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let stl = stl_io::read_stl(&mut file).map_err(|source| LoadError::Stl {
        path: path.to_path_buf(),
        source,
    })?;
    stl.validate().map_err(|source| LoadError::Stl {
        path: path.to_path_buf(),
        source,
    })?;

    let vertices = stl
        .vertices
        .iter()
        .map(|v| [v[0], v[1], v[2]])
        .collect();
    let faces = stl
        .faces
        .iter()
        .map(|f| {
            [
                f.vertices[0] as u32,
                f.vertices[1] as u32,
                f.vertices[2] as u32,
            ]
        })
        .collect();

    Ok(MeshModel::new(vertices, faces))
}

fn read_obj_mesh(path: &Path) -> Result<MeshModel, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let model: Obj<Position, u32> =
        load_obj(BufReader::new(file)).map_err(|source| LoadError::Obj {
            path: path.to_path_buf(),
            source,
        })?;

    let vertices = model.vertices.iter().map(|v| v.position).collect();
    let faces = model
        .indices
        .chunks_exact(3)
        .map(|face| [face[0], face[1], face[2]])
        .collect();

    Ok(MeshModel::new(vertices, faces))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const UNIT_TRIANGLE_STL: &str = "\
solid triangle
facet normal 0 0 1
 outer loop
  vertex 0 0 0
  vertex 1 0 0
  vertex 0 1 0
 endloop
endfacet
endsolid triangle
";

    const UNIT_QUAD_OBJ: &str = "\
v 0 0 0
v 1 0 0
v 1 1 0
v 0 1 0
f 1 2 3
f 1 3 4
";

    #[test]
    fn ascii_stl_parses_into_one_triangle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.stl");
        fs::write(&path, UNIT_TRIANGLE_STL).unwrap();

        let model = load_model(Category::Heart, path).unwrap();
        assert_eq!(model.mesh.triangle_count(), 1);
        assert_eq!(model.mesh.vertex_count(), 3);
        assert_eq!(model.category, Category::Heart);
    }

    #[test]
    fn obj_parses_vertices_and_faces() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.obj");
        fs::write(&path, UNIT_QUAD_OBJ).unwrap();

        let model = load_model(Category::Lungs, path).unwrap();
        assert_eq!(model.mesh.vertex_count(), 4);
        assert_eq!(model.mesh.triangle_count(), 2);
    }

    #[test]
    fn extension_dispatch_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("TRIANGLE.STL");
        fs::write(&path, UNIT_TRIANGLE_STL).unwrap();

        assert!(load_model(Category::Foot, path).is_ok());
    }

    #[test]
    fn text_renamed_to_stl_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.stl");
        fs::write(&path, "this is not a mesh").unwrap();

        assert!(matches!(
            load_model(Category::Heart, path),
            Err(LoadError::Stl { .. })
        ));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.gltf");
        fs::write(&path, "{}").unwrap();

        assert!(matches!(
            load_model(Category::Heart, path),
            Err(LoadError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn missing_file_is_an_open_error() {
        assert!(matches!(
            load_model(Category::Foot, PathBuf::from("/no/such/file.stl")),
            Err(LoadError::Open { .. })
        ));
    }

    #[test]
    fn failed_load_folds_into_a_user_message() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.stl");
        fs::write(&path, "garbage").unwrap();

        match open_model(Category::Heart, path.clone()) {
            BrowseOutcome::Failed(message) => {
                assert!(message.contains("notes.stl"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
