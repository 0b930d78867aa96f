pub mod clock;
pub mod color;
pub mod error;
pub mod export;
pub mod math;
pub mod mode;
pub mod noise;
pub mod palette;
pub mod params;
pub mod raster;
pub mod scene;
pub mod shade;

pub use clock::AnimationClock;
pub use color::ColorStop;
pub use error::{Error, Result};
pub use export::{ExportMode, ExportRequest, ExportShape, GradientDescription, OutputFormat};
pub use mode::{Family, LuminaMode, Mode, StudioMode};
pub use palette::Palette;
pub use params::{Degenerate, RenderParams, RenderRequest, Uniforms, Validated};
pub use raster::{render_frame, render_frame_scaled, Frame};
pub use scene::Scene;
pub use shade::{shade, Coordinate};
