use kiss3d::camera::ArcBall;
use kiss3d::light::Light;
use kiss3d::nalgebra::{Point2, Point3, Vector3};
use kiss3d::ncollide3d::procedural::{IndexBuffer, TriMesh};
use kiss3d::text::Font;
use kiss3d::window::Window;

use crate::model::MeshModel;
use crate::viewer::scene::{ViewerScene, MODEL_CAPTION};

const CAPTION_POSITION: (f32, f32) = (10.0, 10.0);
const CAPTION_SCALE: f32 = 48.0;

/// Opens the viewer window for one scene and runs its render loop.
/// Blocks the calling thread until the user closes the window.
pub fn run(scene: ViewerScene) {
    let mut window = Window::new(&scene.title);
    window.set_light(Light::StickToCamera);
    window.set_framerate_limit(Some(60));

    if !scene.mesh.vertices.is_empty() {
        let scale = Vector3::new(1.0, 1.0, 1.0);
        let trimesh = build_trimesh(&scene.mesh);

        let mut surface = window.add_trimesh(trimesh.clone(), scale);
        surface.set_color(1.0, 1.0, 1.0);

        // Second pass with surface rendering off gives the visible edges.
        let mut edges = window.add_trimesh(trimesh, scale);
        edges.set_surface_rendering_activation(false);
        edges.set_lines_width(1.0);
        edges.set_color(0.15, 0.15, 0.15);
    }

    let eye = scene.camera_eye();
    let target = scene.camera_target();
    let mut camera = ArcBall::new(
        Point3::new(eye[0], eye[1], eye[2]),
        Point3::new(target[0], target[1], target[2]),
    );

    let font = Font::default();
    while window.render_with_camera(&mut camera) {
        window.draw_text(
            MODEL_CAPTION,
            &Point2::new(CAPTION_POSITION.0, CAPTION_POSITION.1),
            CAPTION_SCALE,
            &font,
            &Point3::new(1.0, 1.0, 1.0),
        );
    }

    log::debug!("viewer window closed: {}", scene.title);
}

fn build_trimesh(mesh: &MeshModel) -> TriMesh<f32> {
    let vertices: Vec<Point3<f32>> = mesh
        .vertices
        .iter()
        .map(|v| Point3::new(v[0], v[1], v[2]))
        .collect();

    // Drop faces referencing out-of-range vertices instead of panicking
    // inside the renderer.
    let faces: Vec<Point3<u32>> = mesh
        .faces
        .iter()
        .filter(|face| face.iter().all(|&index| (index as usize) < vertices.len()))
        .map(|face| Point3::new(face[0], face[1], face[2]))
        .collect();

    TriMesh::new(
        vertices,
        None,
        None,
        Some(IndexBuffer::Unified(faces)),
    )
}
