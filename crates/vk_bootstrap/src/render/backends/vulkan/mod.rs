//! Vulkan backend: GLFW windows and an ash-loaded instance

pub mod instance;
pub mod window;

pub use instance::{AshBackend, VulkanError, VulkanInstance, VulkanResult};
pub use window::{GlfwWindow, GlfwWindowSystem};
