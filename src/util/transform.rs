// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Coordinate transformation between image space and screen space.
//!
//! The image is letterboxed into the container ("contain" fit), then
//! zoomed by `image_scale` about its own centre and panned by
//! `image_position`, which is measured from the container centre.
//!
//! ```text
//! screen = container_center + pan + (image - image_center) * fit * scale
//! image  = image_center + (screen - container_center - pan) / (fit * scale)
//! ```
//!
//! Without an image size or a container rectangle no mapping exists. Both
//! directions then return their input unchanged and log a warning, at
//! most once per cooldown window.

use crate::models::annotation::{Point, Size};
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Default cooldown between degraded-mode warnings.
pub const DEFAULT_WARN_COOLDOWN: Duration = Duration::from_secs(5);

/// Zoom limits applied by [`TransformContext::zoom_at`].
pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 50.0;

/// Source of the current time for the warning throttle.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Remembers when a warning was last let through.
#[derive(Debug)]
pub struct WarnThrottle {
    cooldown: Duration,
    last_warned: Cell<Option<Instant>>,
}

impl WarnThrottle {
    pub fn new(cooldown: Duration) -> Self {
        Self {
            cooldown,
            last_warned: Cell::new(None),
        }
    }

    /// Returns true (and records `now`) if a warning may be emitted.
    pub fn try_acquire(&self, now: Instant) -> bool {
        let allowed = match self.last_warned.get() {
            Some(last) => now.saturating_duration_since(last) >= self.cooldown,
            None => true,
        };
        if allowed {
            self.last_warned.set(Some(now));
        }
        allowed
    }
}

/// View state needed to map between the two coordinate spaces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformContext {
    /// Natural size of the image bitmap; `None` until the image has loaded.
    pub image_natural_size: Option<Size>,
    /// Pan offset in screen pixels, relative to the container centre.
    pub image_position: Point,
    /// Zoom multiplier (1.0 = fit).
    pub image_scale: f64,
}

impl Default for TransformContext {
    fn default() -> Self {
        Self {
            image_natural_size: None,
            image_position: Point::default(),
            image_scale: 1.0,
        }
    }
}

impl TransformContext {
    /// Context for a loaded image with no pan or zoom.
    pub fn new(image_natural_size: Size) -> Self {
        Self {
            image_natural_size: Some(image_natural_size),
            ..Self::default()
        }
    }

    /// Pan by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.image_position = self.image_position.offset(dx, dy);
    }

    /// Zoom to `new_scale`, keeping the image point under `cursor` fixed.
    ///
    /// `cursor` is in screen space; `container` is the current container
    /// size. The new scale is clamped to [`MIN_ZOOM`, `MAX_ZOOM`].
    pub fn zoom_at(&mut self, new_scale: f64, cursor: &Point, container: &Size) {
        if self.image_scale <= 0.0 {
            return;
        }
        let new_scale = new_scale.clamp(MIN_ZOOM, MAX_ZOOM);
        let rel_x = cursor.x - container.width / 2.0;
        let rel_y = cursor.y - container.height / 2.0;
        let ratio = new_scale / self.image_scale;

        self.image_position = Point::new(
            rel_x - (rel_x - self.image_position.x) * ratio,
            rel_y - (rel_y - self.image_position.y) * ratio,
        );
        self.image_scale = new_scale;
    }

    /// Return to fit with no pan.
    pub fn reset_view(&mut self) {
        self.image_position = Point::default();
        self.image_scale = 1.0;
    }
}

/// Displayed size of `image` when fit inside `container`, keeping its aspect ratio.
pub fn display_size(image: &Size, container: &Size) -> Size {
    let fit = fit_scale(image, container);
    Size::new(image.width * fit, image.height * fit)
}

/// Image pixels to displayed pixels at zoom 1.0.
pub fn fit_scale(image: &Size, container: &Size) -> f64 {
    (container.width / image.width).min(container.height / image.height)
}

#[derive(Debug, Clone, Copy)]
struct Layout {
    image: Size,
    container: Size,
    fit: f64,
}

/// Maps points between image space and screen space.
///
/// Owns the degraded-mode warning throttle, so each instance warns on its
/// own schedule.
#[derive(Debug)]
pub struct CoordinateTransform<C: Clock = SystemClock> {
    clock: C,
    throttle: WarnThrottle,
    warnings: Cell<usize>,
}

impl Default for CoordinateTransform<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinateTransform<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock, DEFAULT_WARN_COOLDOWN)
    }
}

impl<C: Clock> CoordinateTransform<C> {
    /// Create a transform with an explicit clock and warning cooldown.
    pub fn with_clock(clock: C, cooldown: Duration) -> Self {
        Self {
            clock,
            throttle: WarnThrottle::new(cooldown),
            warnings: Cell::new(0),
        }
    }

    /// Number of degraded-mode warnings emitted so far.
    pub fn warnings_emitted(&self) -> usize {
        self.warnings.get()
    }

    /// Convert an image-space point to screen space.
    pub fn image_to_screen(
        &self,
        point: &Point,
        context: &TransformContext,
        container: Option<Size>,
    ) -> Point {
        let Some(layout) = self.layout(context, container) else {
            return *point;
        };

        let k = layout.fit * context.image_scale;
        Point::new(
            (point.x - layout.image.width / 2.0) * k
                + context.image_position.x
                + layout.container.width / 2.0,
            (point.y - layout.image.height / 2.0) * k
                + context.image_position.y
                + layout.container.height / 2.0,
        )
    }

    /// Convert a screen-space position to image space.
    pub fn screen_to_image(
        &self,
        x: f64,
        y: f64,
        context: &TransformContext,
        container: Option<Size>,
    ) -> Point {
        let Some(layout) = self.layout(context, container) else {
            return Point::new(x, y);
        };

        let k = layout.fit * context.image_scale;
        Point::new(
            (x - layout.container.width / 2.0 - context.image_position.x) / k
                + layout.image.width / 2.0,
            (y - layout.container.height / 2.0 - context.image_position.y) / k
                + layout.image.height / 2.0,
        )
    }

    /// Convert every point of a slice to screen space.
    pub fn points_to_screen(
        &self,
        points: &[Point],
        context: &TransformContext,
        container: Option<Size>,
    ) -> Vec<Point> {
        points
            .iter()
            .map(|p| self.image_to_screen(p, context, container))
            .collect()
    }

    /// Length of `image_length` image pixels on screen.
    pub fn image_to_screen_distance(
        &self,
        image_length: f64,
        context: &TransformContext,
        container: Option<Size>,
    ) -> f64 {
        match self.layout(context, container) {
            Some(layout) => image_length * layout.fit * context.image_scale,
            None => image_length,
        }
    }

    fn layout(&self, context: &TransformContext, container: Option<Size>) -> Option<Layout> {
        let layout = match (context.image_natural_size, container) {
            (Some(image), Some(container))
                if image.is_usable() && container.is_usable() && context.image_scale > 0.0 =>
            {
                Some(Layout {
                    image,
                    container,
                    fit: fit_scale(&image, &container),
                })
            }
            _ => None,
        };

        if layout.is_none() && self.throttle.try_acquire(self.clock.now()) {
            self.warnings.set(self.warnings.get() + 1);
            log::warn!(
                "Coordinate transform unavailable (image size: {:?}, container: {:?}); using identity mapping",
                context.image_natural_size,
                container
            );
        }
        layout
    }
}
