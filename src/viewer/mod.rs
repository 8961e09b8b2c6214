pub mod registry;
pub mod scene;
pub mod window;

pub use registry::ViewerRegistry;
pub use scene::ViewerScene;
