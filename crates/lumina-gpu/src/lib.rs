pub mod context;
pub mod present;

pub use context::{GpuContext, SetupError};
pub use present::FramePresenter;
