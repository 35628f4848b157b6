//! Test camera surfaces: record the commands a controller issues.

use std::sync::{Arc, Mutex};

use geoquiz_core::camera::{
    CameraCommand, CameraSurface, FitBoundsOptions, FlyToOptions, SurfaceFactory,
};
use geoquiz_core::geo::Bounds;

type CommandLog = Arc<Mutex<Vec<(u64, CameraCommand)>>>;

/// A camera surface that appends every command it receives, tagged with
/// the mount key of the surface instance, to a shared log.
#[derive(Debug)]
pub struct RecordingCameraSurface {
    mount_key: u64,
    log: CommandLog,
}

impl CameraSurface for RecordingCameraSurface {
    fn fly_to(&self, options: &FlyToOptions) {
        self.log
            .lock()
            .unwrap()
            .push((self.mount_key, CameraCommand::FlyTo(*options)));
    }

    fn fit_bounds(&self, bounds: &Bounds, options: &FitBoundsOptions) {
        self.log.lock().unwrap().push((
            self.mount_key,
            CameraCommand::FitBounds {
                bounds: *bounds,
                options: *options,
            },
        ));
    }
}

/// A surface factory whose surfaces all share one command log, so a test
/// can see commands across remounts.
#[derive(Debug, Default)]
pub struct RecordingSurfaceFactory {
    log: CommandLog,
    mounts: Mutex<Vec<u64>>,
}

impl RecordingSurfaceFactory {
    /// Create a factory with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every command received, with its mount key.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn commands(&self) -> Vec<(u64, CameraCommand)> {
        self.log.lock().unwrap().clone()
    }

    /// Returns the commands only, dropping mount keys.
    pub fn command_values(&self) -> Vec<CameraCommand> {
        self.commands().into_iter().map(|(_, c)| c).collect()
    }

    /// Returns the mount keys of every surface built so far.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn mounts(&self) -> Vec<u64> {
        self.mounts.lock().unwrap().clone()
    }
}

impl SurfaceFactory for RecordingSurfaceFactory {
    fn mount(&self, mount_key: u64) -> Arc<dyn CameraSurface> {
        self.mounts.lock().unwrap().push(mount_key);
        Arc::new(RecordingCameraSurface {
            mount_key,
            log: Arc::clone(&self.log),
        })
    }
}
