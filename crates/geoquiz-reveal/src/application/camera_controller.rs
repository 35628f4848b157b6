//! Camera controller bound to the currently mounted map surface.
//!
//! Commands complete only once their animation duration has elapsed on the
//! injected clock. A command issued while no surface is attached is dropped,
//! not queued; the caller gets `DomainError::CameraUnavailable` back without
//! waiting. Callers that must not lose a command wait on `wait_ready` first.

use std::sync::{Arc, Mutex, PoisonError};

use geoquiz_core::camera::{CameraCommand, CameraSurface, FitBoundsOptions, FlyToOptions};
use geoquiz_core::clock::Clock;
use geoquiz_core::error::DomainError;
use geoquiz_core::geo::Bounds;
use tokio::sync::watch;
use tracing::{debug, warn};

struct MountedSurface {
    mount_key: u64,
    surface: Arc<dyn CameraSurface>,
    attached: bool,
}

/// Issues animated camera commands against one map surface at a time.
pub struct CameraController {
    clock: Arc<dyn Clock>,
    single_point_zoom: f64,
    slot: Mutex<Option<MountedSurface>>,
    /// Mount key of the attached surface, `None` while detached.
    attached: watch::Sender<Option<u64>>,
}

impl CameraController {
    /// Creates a controller with no surface mounted. `single_point_zoom` is
    /// used when a bounds-fit collapses to a single point.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, single_point_zoom: f64) -> Self {
        Self {
            clock,
            single_point_zoom,
            slot: Mutex::new(None),
            attached: watch::Sender::new(None),
        }
    }

    /// Replaces the current surface with a freshly built one. The new surface
    /// is not attached until `attach` is called with the same key.
    pub fn mount(&self, mount_key: u64, surface: Arc<dyn CameraSurface>) {
        debug!(mount_key, "map surface mounted");
        *self.lock() = Some(MountedSurface {
            mount_key,
            surface,
            attached: false,
        });
        self.attached.send_replace(None);
    }

    /// Marks the surface mounted under `mount_key` as ready for commands.
    /// Returns `false` if a later mount has replaced it.
    pub fn attach(&self, mount_key: u64) -> bool {
        let attached = match self.lock().as_mut() {
            Some(mounted) if mounted.mount_key == mount_key => {
                mounted.attached = true;
                true
            }
            _ => false,
        };
        if attached {
            debug!(mount_key, "map surface attached");
            self.attached.send_replace(Some(mount_key));
        }
        attached
    }

    /// Waits until the surface mounted under `mount_key`, or any later one,
    /// is attached.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CameraUnavailable` if the readiness channel
    /// has closed.
    pub async fn wait_ready(&self, mount_key: u64) -> Result<(), DomainError> {
        let mut ready = self.attached.subscribe();
        ready
            .wait_for(|attached| attached.is_some_and(|key| key >= mount_key))
            .await
            .map(|_| ())
            .map_err(|_| DomainError::CameraUnavailable)
    }

    #[cfg(test)]
    fn is_ready(&self) -> bool {
        self.attached_surface().is_some()
    }

    /// Animates to a new center and/or zoom and waits for it to finish.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CameraUnavailable` if no surface is attached.
    pub async fn fly_to(&self, options: FlyToOptions) -> Result<CameraCommand, DomainError> {
        let surface = self.require_surface("camera.fly_to")?;
        surface.fly_to(&options);
        self.clock.sleep(options.duration).await;
        Ok(CameraCommand::FlyTo(options))
    }

    /// Animates so that `bounds` is fully visible and waits for it to finish.
    ///
    /// Degenerate bounds are flown to instead, centered at the configured
    /// single-point zoom.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CameraUnavailable` if no surface is attached.
    pub async fn fit_bounds(
        &self,
        bounds: Bounds,
        options: FitBoundsOptions,
    ) -> Result<CameraCommand, DomainError> {
        if bounds.is_degenerate() {
            debug!("degenerate bounds, flying to center instead");
            return self
                .fly_to(FlyToOptions {
                    center: Some(bounds.center()),
                    zoom: Some(self.single_point_zoom),
                    duration: options.duration,
                })
                .await;
        }

        let surface = self.require_surface("camera.fit_bounds")?;
        surface.fit_bounds(&bounds, &options);
        self.clock.sleep(options.duration).await;
        Ok(CameraCommand::FitBounds { bounds, options })
    }

    /// Dispatches a command value to `fly_to` or `fit_bounds`. Returns the
    /// command that actually reached the surface.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::CameraUnavailable` if no surface is attached.
    pub async fn issue(&self, command: CameraCommand) -> Result<CameraCommand, DomainError> {
        debug!(
            command_type = command.command_type(),
            duration = ?command.duration(),
            "issuing camera command"
        );
        match command {
            CameraCommand::FlyTo(options) => self.fly_to(options).await,
            CameraCommand::FitBounds { bounds, options } => self.fit_bounds(bounds, options).await,
        }
    }

    fn require_surface(&self, command_type: &str) -> Result<Arc<dyn CameraSurface>, DomainError> {
        self.attached_surface().ok_or_else(|| {
            warn!(command_type, "camera command dropped, no surface attached");
            DomainError::CameraUnavailable
        })
    }

    fn attached_surface(&self) -> Option<Arc<dyn CameraSurface>> {
        self.lock()
            .as_ref()
            .filter(|mounted| mounted.attached)
            .map(|mounted| Arc::clone(&mounted.surface))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<MountedSurface>> {
        // The slot is replaced wholesale, so a poisoned guard is still consistent.
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
