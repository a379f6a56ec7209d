#![deny(unsafe_code)]
//! WASM bindings for the drift-engine particle animation system.
//!
//! The browser owns the frame clock: the host registers a
//! requestAnimationFrame callback that calls [`FieldAnimation::frame`]
//! and blits the pixel buffer into a canvas `ImageData`. Pixels are
//! exposed by pointer and length so the blit is zero-copy.
//!
//! ```js
//! const anim = new FieldAnimation(canvas.width, canvas.height, "arcade", 42n);
//! anim.start();
//! canvas.addEventListener("click", (e) => anim.spawn_burst(e.offsetX, e.offsetY, 5));
//! (function loop() {
//!   anim.frame();
//!   const pixels = new Uint8ClampedArray(memory.buffer, anim.pixels_ptr(), anim.pixels_len());
//!   ctx.putImageData(new ImageData(pixels, anim.width(), anim.height()), 0, 0);
//!   requestAnimationFrame(loop);
//! })();
//! ```

use drift_engine_core::{FieldDriver, ManualClock, Srgb};
use drift_engine_field::ParticleField;
use drift_engine_runtime::{build_field, Raster};
use glam::DVec2;
use wasm_bindgen::prelude::*;

/// A scene-preset particle field bound to an RGBA pixel buffer.
#[wasm_bindgen]
pub struct FieldAnimation {
    driver: FieldDriver<ParticleField>,
    raster: Raster,
    clock: ManualClock,
}

#[wasm_bindgen]
impl FieldAnimation {
    /// Creates a stopped animation for the named scene.
    ///
    /// Errors on unknown scene names or zero dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, scene: &str, seed: u64) -> Result<FieldAnimation, JsError> {
        let field = build_field(
            scene,
            width as f64,
            height as f64,
            seed,
            &serde_json::Value::Null,
        )
        .map_err(|e| JsError::new(&e.to_string()))?;
        let mut raster = Raster::new(width, height).map_err(|e| JsError::new(&e.to_string()))?;
        raster.clear(Srgb::BLACK);
        Ok(FieldAnimation {
            driver: FieldDriver::new(field),
            raster,
            clock: ManualClock::new(),
        })
    }

    /// Begins advancing on `frame()` calls. Idempotent.
    pub fn start(&mut self) {
        self.driver.start();
    }

    /// Stops advancing; `frame()` calls become no-ops. Safe to repeat.
    pub fn stop(&mut self) {
        self.driver.stop();
    }

    /// True while the animation advances.
    pub fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    /// Runs one tick-render cycle if running; returns whether a frame ran.
    ///
    /// Call once per requestAnimationFrame callback.
    pub fn frame(&mut self) -> Result<bool, JsError> {
        self.driver
            .frame(&mut self.raster, &mut self.clock)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Appends `count` particles at `(x, y)` in response to a click.
    pub fn spawn_burst(&mut self, x: f64, y: f64, count: usize) {
        self.driver.spawn_burst(DVec2::new(x, y), count);
    }

    /// Current particle population.
    pub fn population(&self) -> usize {
        self.driver.sim().population()
    }

    /// Pointer to the RGBA pixel buffer in WASM memory.
    pub fn pixels_ptr(&self) -> *const u8 {
        self.raster.pixels().as_ptr()
    }

    /// Length of the pixel buffer in bytes (`width * height * 4`).
    pub fn pixels_len(&self) -> usize {
        self.raster.pixels().len()
    }

    /// Surface width in pixels.
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> u32 {
        self.raster.height()
    }
}
