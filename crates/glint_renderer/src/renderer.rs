//! Image-space loop: camera rays per pixel, written to a pixel sink.

use glint_core::{Camera, Scene};
use glint_math::{to_drawing_color, DrawingColor, Ray, Vector, VectorExt};
use rayon::prelude::*;

use crate::bucket::{generate_buckets, render_bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{RayTracer, RenderError, RenderResult, DEFAULT_MAX_DEPTH};

/// Destination for finished pixels.
///
/// Every pixel of a render is written exactly once.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, color: DrawingColor);
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Reflection bounces before the grey fallback
    pub max_depth: u32,
    /// Edge length of a parallel render bucket in pixels
    pub bucket_size: u32,
    /// Worker threads; `None` uses rayon's global pool
    pub threads: Option<usize>,
    /// Render buckets on the thread pool instead of a single row-major loop
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            bucket_size: DEFAULT_BUCKET_SIZE,
            threads: None,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn tracer(&self) -> RayTracer {
        RayTracer::new().with_max_depth(self.max_depth)
    }
}

/// Normalized direction of the primary ray through pixel (x, y).
///
/// Pixel coordinates map to offsets in roughly [-0.25, 0.25] along the
/// camera's right and up vectors, independently per axis.
pub fn view_direction(camera: &Camera, x: u32, y: u32, width: u32, height: u32) -> Vector {
    let (w, h) = (width as f64, height as f64);
    let recenter_x = (x as f64 - (w / 2.0)) / 2.0 / w;
    let recenter_y = -(y as f64 - (h / 2.0)) / 2.0 / h;
    (camera.forward + (recenter_x * camera.right + recenter_y * camera.up)).norm()
}

/// Trace the primary ray for one pixel and convert it for display.
pub fn render_pixel(
    tracer: &RayTracer,
    scene: &Scene,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
) -> DrawingColor {
    let camera = &scene.camera;
    let ray = Ray::new(camera.pos, view_direction(camera, x, y, width, height));
    to_drawing_color(tracer.trace_ray(&ray, scene, 0))
}

impl RayTracer {
    /// Render the whole image row by row on the calling thread.
    pub fn render<S: PixelSink + ?Sized>(&self, scene: &Scene, sink: &mut S, width: u32, height: u32) {
        for y in 0..height {
            for x in 0..width {
                sink.set_pixel(x, y, render_pixel(self, scene, x, y, width, height));
            }
        }
    }
}

/// Render with the default tracer, row-major, single-threaded.
pub fn render<S: PixelSink + ?Sized>(scene: &Scene, sink: &mut S, width: u32, height: u32) {
    RayTracer::new().render(scene, sink, width, height);
}

/// Render buckets in parallel, then hand every pixel to `sink`.
///
/// Buckets are traced on the rayon pool into private buffers; only the
/// calling thread touches the sink. Pixel values do not depend on
/// scheduling, so the result matches `render` exactly.
pub fn render_parallel<S: PixelSink + ?Sized>(
    scene: &Scene,
    sink: &mut S,
    width: u32,
    height: u32,
    config: &RenderConfig,
) -> RenderResult<()> {
    if width == 0 || height == 0 {
        return Err(RenderError::InvalidSize { width, height });
    }

    let tracer = config.tracer();
    let buckets = generate_buckets(width, height, config.bucket_size.max(1));
    log::debug!(
        "Rendering {}x{} in {} buckets (max depth {})",
        width,
        height,
        buckets.len(),
        tracer.max_depth()
    );

    let trace_all = || -> Vec<BucketResult> {
        buckets
            .par_iter()
            .map(|bucket| {
                BucketResult::new(*bucket, render_bucket(bucket, &tracer, scene, width, height))
            })
            .collect()
    };

    let results = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()?
            .install(trace_all),
        None => trace_all(),
    };

    for result in &results {
        result.write_to(sink);
    }

    Ok(())
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<DrawingColor>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![DrawingColor::default(); (width as usize) * (height as usize)],
        }
    }

    /// Render `scene` into a fresh buffer using `config`.
    pub fn render(scene: &Scene, width: u32, height: u32, config: &RenderConfig) -> RenderResult<Self> {
        let mut image = Self::new(width, height);
        if config.parallel {
            render_parallel(scene, &mut image, width, height, config)?;
        } else {
            if width == 0 || height == 0 {
                return Err(RenderError::InvalidSize { width, height });
            }
            config.tracer().render(scene, &mut image, width, height);
        }
        Ok(image)
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> DrawingColor {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: DrawingColor) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes, saturating out-of-range channels.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color.to_rgb8());
        }
        bytes
    }
}

impl PixelSink for ImageBuffer {
    fn set_pixel(&mut self, x: u32, y: u32, color: DrawingColor) {
        self.set(x, y, color);
    }
}
