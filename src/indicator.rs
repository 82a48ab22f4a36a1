//! # Status indicator
//!
//! Boards often carry a single RGB pixel (a NeoPixel or DotStar) that the
//! manager uses to show what the network is doing:
//!
//! | State        | Color                       |
//! |--------------|-----------------------------|
//! | idle         | [`Color::OFF`]              |
//! | waiting DHCP | [`Color::CONNECTING`] (red)   |
//! | got address  | [`Color::CONNECTED`] (green)  |
//! | HTTP request | [`Color::REQUESTING`] (blue)  |
//!
//! Pixel drivers come in two shapes: single-pixel drivers with a settable
//! color, and strip drivers that are filled with one color. [`ColorIndicator`]
//! and [`FillIndicator`] adapt either to [`StatusIndicator`].

#![allow(missing_docs)]
#![deny(unsafe_code)]

/// A value written to the status pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Single brightness value applied to every channel.
    Intensity(u8),
    /// Red, green and blue components.
    Rgb(u8, u8, u8),
}

impl Color {
    pub const OFF: Self = Color::Intensity(0);
    pub const CONNECTING: Self = Color::Rgb(100, 0, 0);
    pub const CONNECTED: Self = Color::Rgb(0, 100, 0);
    pub const REQUESTING: Self = Color::Rgb(0, 0, 100);

    /// Expands the value to RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match *self {
            Color::Intensity(v) => (v, v, v),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }
}

impl From<u8> for Color {
    fn from(value: u8) -> Self {
        Color::Intensity(value)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Color {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Color::Intensity(v) => defmt::write!(f, "Intensity({})", v),
            Color::Rgb(r, g, b) => defmt::write!(f, "Rgb({}, {}, {})", r, g, b),
        }
    }
}

/// Something that can display a [`Color`].
pub trait StatusIndicator {
    fn show(&mut self, value: Color);
}

/// A pixel driver exposing a settable color.
pub trait ColorPixel {
    fn set_color(&mut self, value: Color);
}

/// A pixel strip driver that is filled with a single color.
pub trait FillPixel {
    fn fill(&mut self, value: Color);
}

/// Drives a [`ColorPixel`] as a status indicator.
#[derive(Debug)]
pub struct ColorIndicator<P: ColorPixel>(pub P);

impl<P: ColorPixel> StatusIndicator for ColorIndicator<P> {
    fn show(&mut self, value: Color) {
        self.0.set_color(value);
    }
}

/// Drives a [`FillPixel`] as a status indicator.
#[derive(Debug)]
pub struct FillIndicator<P: FillPixel>(pub P);

impl<P: FillPixel> StatusIndicator for FillIndicator<P> {
    fn show(&mut self, value: Color) {
        self.0.fill(value);
    }
}

/// Placeholder type for a manager built without a status pixel.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIndicator;

impl StatusIndicator for NoIndicator {
    fn show(&mut self, _value: Color) {}
}

impl<T: StatusIndicator + ?Sized> StatusIndicator for &mut T {
    fn show(&mut self, value: Color) {
        (**self).show(value);
    }
}
