// File: crates/fuelplot-core/src/types.rs
// Summary: Shared canvas context (sizes, margins) passed to every chart builder.

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self { top, right, bottom, left }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(20, 80, 70, 50)
    }
}

/// Canvas geometry shared by every chart on a page. Built once and passed
/// explicitly; chart builders never reach for ambient globals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartContext {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl ChartContext {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self { width, height, insets }
    }

    /// Full-size canvas (800x400).
    pub fn full() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }

    /// Half-height canvas used by the fillup-frequency chart.
    pub fn half_height() -> Self {
        Self::new(WIDTH, HEIGHT / 2, Insets::default())
    }

    pub fn plot_left(&self) -> f64 {
        self.insets.left as f64
    }

    pub fn plot_right(&self) -> f64 {
        (self.width - self.insets.right) as f64
    }

    pub fn plot_top(&self) -> f64 {
        self.insets.top as f64
    }

    pub fn plot_bottom(&self) -> f64 {
        (self.height - self.insets.bottom) as f64
    }
}

impl Default for ChartContext {
    fn default() -> Self {
        Self::full()
    }
}
