//! glint renderer - recursive whitted-style ray tracing on the CPU.
//!
//! One primary ray per pixel, nearest-hit search by linear scan, direct
//! lighting with binary shadows, and mirror reflection up to a fixed depth.

mod bucket;
mod error;
mod output;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use error::{RenderError, RenderResult};
pub use output::{save_image, save_png, save_ppm};
pub use renderer::{
    render, render_parallel, render_pixel, view_direction, ImageBuffer, PixelSink, RenderConfig,
};
pub use tracer::{RayTracer, DEFAULT_MAX_DEPTH};

/// Re-export the math and scene types the renderer API speaks in
pub use glint_core::{Intersection, Primitive, Scene};
pub use glint_math::{Color, DrawingColor, Ray, Vector};
