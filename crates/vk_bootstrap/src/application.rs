//! Application lifecycle
//!
//! Drives the fixed startup and shutdown order:
//!
//! ```text
//! Uninitialized ─▶ WindowReady ─▶ BackendReady ─▶ Running ─▶ Terminated
//!        │               │                                      ▲
//!        └───────────────┴──────────── on error ────────────────┘
//! ```
//!
//! Teardown always releases the instance first, then the window, then the
//! windowing subsystem, and runs exactly once whichever path reached it.

use crate::core::config::ApplicationConfig;
use crate::capabilities::platform::PlatformTag;
use crate::render::bootstrap::{AppMetadata, BootstrapError, GraphicsBackend, InstanceBootstrapper};
use crate::render::window::{PlatformWindow, WindowError, WindowResult, WindowSystem};
use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Windowing could not be brought up
    #[error(transparent)]
    WindowInit(#[from] WindowError),

    /// Instance bootstrap failed
    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    /// `run` was called on a lifecycle that already left `Uninitialized`
    #[error("Application lifecycle already started (state {state:?})")]
    AlreadyStarted {
        /// State the lifecycle was in when `run` was called
        state: LifecycleState,
    },
}

/// Lifecycle states in the order they are entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Nothing acquired yet
    Uninitialized,
    /// Windowing initialized and window created
    WindowReady,
    /// Instance created
    BackendReady,
    /// Pumping window events
    Running,
    /// Everything released
    Terminated,
}

/// Owns the window and the instance and sequences their lifetimes
///
/// Field order is the release order used when teardown is reached through
/// `Drop`; [`Application::terminate`] releases them explicitly in the same order.
pub struct Application<W: WindowSystem, B: GraphicsBackend> {
    instance: Option<B::Instance>,
    backend: Option<B>,
    window: Option<W::Window>,
    windowing: Option<W>,
    config: ApplicationConfig,
    platform: PlatformTag,
    lifecycle: Lifecycle,
}

impl<W: WindowSystem, B: GraphicsBackend> Application<W, B> {
    /// Create an application in the `Uninitialized` state
    pub fn new(config: ApplicationConfig) -> Self {
        Self {
            instance: None,
            backend: None,
            window: None,
            windowing: None,
            config,
            platform: PlatformTag::current(),
            lifecycle: Lifecycle::new(),
        }
    }

    /// Override the platform used for instance augmentation
    pub fn with_platform(mut self, platform: PlatformTag) -> Self {
        self.platform = platform;
        self
    }

    /// Current lifecycle state
    pub const fn state(&self) -> LifecycleState {
        self.lifecycle.state
    }

    /// Every state entered so far, in order
    pub fn history(&self) -> &[LifecycleState] {
        &self.lifecycle.history
    }

    /// Application configuration
    pub const fn config(&self) -> &ApplicationConfig {
        &self.config
    }

    /// Live instance, if the backend is ready and not yet released
    pub const fn instance(&self) -> Option<&B::Instance> {
        self.instance.as_ref()
    }

    /// Run the whole lifecycle
    ///
    /// `init_windowing` brings up the windowing subsystem and `connect_backend`
    /// loads the graphics backend. Both are called at most once. Whatever was
    /// acquired is released before this returns, on success and on failure.
    ///
    /// The lifecycle runs once. Later calls return [`AppError::AlreadyStarted`]
    /// without calling either closure.
    pub fn run<FW, FB>(&mut self, init_windowing: FW, connect_backend: FB) -> Result<(), AppError>
    where
        FW: FnOnce() -> WindowResult<W>,
        FB: FnOnce() -> Result<B, B::Error>,
    {
        let result = self.start(init_windowing, connect_backend);
        if result.is_ok() {
            self.main_loop();
        }
        self.terminate();
        result
    }

    fn start<FW, FB>(&mut self, init_windowing: FW, connect_backend: FB) -> Result<(), AppError>
    where
        FW: FnOnce() -> WindowResult<W>,
        FB: FnOnce() -> Result<B, B::Error>,
    {
        if self.lifecycle.state != LifecycleState::Uninitialized {
            return Err(AppError::AlreadyStarted { state: self.lifecycle.state });
        }

        log::info!("Initializing windowing...");
        let windowing = self.windowing.insert(init_windowing()?);
        self.window = Some(windowing.create_window(&self.config.window)?);
        self.lifecycle.enter(LifecycleState::WindowReady);

        log::info!("Connecting graphics backend...");
        let backend = connect_backend().map_err(|e| BootstrapError::CapabilityQuery(Box::new(e)))?;
        let backend = self.backend.insert(backend);

        let metadata = AppMetadata::from(&self.config.instance);
        let instance = InstanceBootstrapper::for_platform(backend, self.platform)
            .bootstrap(&metadata, &*windowing)?;
        self.instance = Some(instance);
        self.lifecycle.enter(LifecycleState::BackendReady);
        Ok(())
    }

    fn main_loop(&mut self) {
        let (Some(windowing), Some(window)) = (self.windowing.as_mut(), self.window.as_mut()) else {
            return;
        };

        self.lifecycle.enter(LifecycleState::Running);
        while !window.should_close() {
            windowing.poll_events();
            window.process_events();
        }
        log::info!("Close requested");
    }

    /// Release everything acquired so far: instance, window, then windowing
    ///
    /// Safe to call more than once; only the first call does anything.
    pub fn terminate(&mut self) {
        if self.lifecycle.state == LifecycleState::Terminated {
            return;
        }

        if let Some(instance) = self.instance.take() {
            log::info!("Releasing instance");
            drop(instance);
        }
        self.backend.take();
        if let Some(window) = self.window.take() {
            log::info!("Destroying window");
            drop(window);
        }
        if let Some(windowing) = self.windowing.take() {
            log::info!("Shutting down windowing");
            drop(windowing);
        }

        self.lifecycle.enter(LifecycleState::Terminated);
    }
}

/// Current state plus every state entered so far
struct Lifecycle {
    state: LifecycleState,
    history: Vec<LifecycleState>,
}

impl Lifecycle {
    fn new() -> Self {
        Self {
            state: LifecycleState::Uninitialized,
            history: vec![LifecycleState::Uninitialized],
        }
    }

    fn enter(&mut self, next: LifecycleState) {
        log::info!("Lifecycle {:?} -> {:?}", self.state, next);
        self.state = next;
        self.history.push(next);
    }
}

impl<W: WindowSystem, B: GraphicsBackend> Drop for Application<W, B> {
    fn drop(&mut self) {
        self.terminate();
    }
}
