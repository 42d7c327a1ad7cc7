//! GPU device + surface management.
//!
//! This module is responsible for:
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - creating & configuring the Surface (swapchain)
//! - acquiring frames and providing encoders/views for rendering
//! - tracking whether device-bound resources exist, through [`Lifecycle`]

mod error;
mod frame;
mod gpu;
mod init;
mod lifecycle;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use lifecycle::{Acquired, Lifecycle, Phase};
