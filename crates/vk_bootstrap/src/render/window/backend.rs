//! Backend-agnostic windowing traits
//!
//! Resource release is tied to `Drop`: dropping a [`PlatformWindow`] destroys
//! the window and dropping a [`WindowSystem`] shuts the subsystem down. The
//! application lifecycle owns both and drops them in a fixed order.

use crate::capabilities::RequirementSource;
use crate::core::config::WindowConfig;
use super::WindowResult;

/// Process-wide windowing subsystem
///
/// Also acts as the [`RequirementSource`]: the windowing layer is the party
/// that knows which instance extensions its surfaces need.
///
/// # Thread Safety
/// Windowing calls must stay on the main thread, so no `Send` bound.
pub trait WindowSystem: RequirementSource {
    /// Concrete window type created by this subsystem
    type Window: PlatformWindow;

    /// Create a window without any client graphics API attached
    fn create_window(&mut self, config: &WindowConfig) -> WindowResult<Self::Window>;

    /// Process pending platform events without blocking
    fn poll_events(&mut self);
}

/// A single platform window
pub trait PlatformWindow {
    /// Whether the platform (or the application) has asked the window to close
    fn should_close(&self) -> bool;

    /// Request or cancel window closure
    fn set_should_close(&mut self, should_close: bool);

    /// Handle events delivered to this window by the last poll
    ///
    /// Implementations translate close-style input (e.g. Escape) into
    /// `set_should_close(true)`.
    fn process_events(&mut self);
}
