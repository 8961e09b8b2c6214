use std::panic::{self, AssertUnwindSafe};
use std::thread::{self, JoinHandle};

use crate::error::DisplayError;
use crate::viewer::scene::ViewerScene;
use crate::viewer::window;

/// Back-references to the viewer units spawned so far.
///
/// Each successful load starts exactly one fire-and-forget thread; the
/// registry keeps its join handle for observability only. The main flow
/// never waits on, reads from, or cancels a unit.
#[derive(Default)]
pub struct ViewerRegistry {
    tasks: Vec<ViewerTask>,
    spawned: usize,
}

struct ViewerTask {
    title: String,
    handle: JoinHandle<()>,
}

impl ViewerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns one background viewer unit for `scene`.
    ///
    /// The scene moves into the thread, which owns it until the window is
    /// closed. A panic inside the unit (kiss3d aborts window creation
    /// that way when no graphics context is available) is caught and
    /// logged; it never reaches the host process.
    pub fn spawn(&mut self, scene: ViewerScene) -> Result<(), DisplayError> {
        let title = scene.title.clone();
        self.spawn_task(title, move || window::run(scene))
    }

    fn spawn_task(
        &mut self,
        title: String,
        body: impl FnOnce() + Send + 'static,
    ) -> Result<(), DisplayError> {
        let thread_name = format!("viewer-{}", self.spawned);
        let log_title = title.clone();
        let handle = thread::Builder::new()
            .name(thread_name)
            .spawn(move || {
                if panic::catch_unwind(AssertUnwindSafe(body)).is_err() {
                    log::error!("viewer terminated abnormally: {log_title}");
                }
            })
            .map_err(DisplayError::Spawn)?;

        self.spawned += 1;
        self.tasks.push(ViewerTask { title, handle });
        Ok(())
    }

    /// Drops handles of units whose window has been closed.
    pub fn reap_finished(&mut self) {
        self.tasks.retain(|task| {
            if task.handle.is_finished() {
                log::debug!("reaped finished viewer: {}", task.title);
                false
            } else {
                true
            }
        });
    }

    pub fn open_count(&self) -> usize {
        self.tasks.len()
    }
}
