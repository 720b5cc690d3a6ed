//! Concrete windowing and graphics backends

pub mod vulkan;
