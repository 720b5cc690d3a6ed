//! Windowing and graphics backend plumbing
//!
//! - **`window`**: backend-agnostic window traits and errors
//! - **`bootstrap`**: instance bootstrap against any [`bootstrap::GraphicsBackend`]
//! - **`backends`**: concrete GLFW and Vulkan (ash) implementations

pub mod window;
pub mod bootstrap;
pub mod backends;

pub use window::{PlatformWindow, WindowError, WindowResult, WindowSystem};
pub use bootstrap::{AppMetadata, BootstrapError, GraphicsBackend, InstanceBootstrapper, InstanceRequest};
