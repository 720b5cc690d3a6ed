//! Window management subsystem
//!
//! The bootstrap never talks to GLFW directly. It drives two traits:
//!
//! ```text
//! ┌─────────────────────────────────┐
//! │     Application lifecycle       │
//! └─────────────┬───────────────────┘
//!               │ Uses
//!      ┌────────▼────────┐
//!      │ WindowSystem    │ ← process-wide windowing state (backend.rs)
//!      │ PlatformWindow  │ ← one window
//!      └────────┬────────┘
//!               │ Implemented by
//!   ┌───────────▼───────────┐
//!   │ vulkan::GlfwWindow…   │ ← ../backends/vulkan/window.rs
//!   │ test doubles          │
//!   └───────────────────────┘
//! ```

pub mod backend;

pub use backend::{PlatformWindow, WindowSystem};

use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The platform windowing subsystem could not be initialized
    #[error("Windowing initialization failed: {0}")]
    InitializationFailed(String),

    /// The subsystem is up but refused to create the window
    #[error("Window creation failed: {title}")]
    CreationFailed {
        /// Title of the window that could not be created
        title: String,
    },
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;
