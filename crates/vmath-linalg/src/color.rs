//! RGB(A) colors and color space conversions.
//!
//! Colors are plain vectors: `Color3<T>` is a [`Vec3<T>`] whose elements are also reachable as
//! `r`, `g` and `b`. Channels of floating-point colors are nominally in range 0.0 to 1.0, integer
//! channels span the full range of the element type (0 to 255 for `u8`).

use crate::{traits::Scalar, Vector};

pub type Color3<T> = Vector<T, 3>;
pub type Color4<T> = Vector<T, 4>;

pub type Color3c = Color3<u8>;
pub type Color3f = Color3<f32>;
pub type Color3d = Color3<f64>;
pub type Color4c = Color4<u8>;
pub type Color4f = Color4<f32>;
pub type Color4d = Color4<f64>;

/// An 8-bit RGBA color packed into a `u32`, red in the least significant byte.
pub type PackedColor = u32;

/// Channel value as a fraction of full intensity.
fn normalized<T: Scalar>(c: T) -> f64 {
    if T::INTEGRAL {
        c.to_f64() / T::MAX.to_f64()
    } else {
        c.to_f64()
    }
}

fn denormalized<T: Scalar>(c: f64) -> T {
    if T::INTEGRAL {
        T::from_f64(c * T::MAX.to_f64())
    } else {
        T::from_f64(c)
    }
}

fn hsv_to_rgb_f64([hue, sat, val]: [f64; 3]) -> [f64; 3] {
    let hue = if hue == 1.0 { 0.0 } else { hue * 6.0 };
    let i = hue.floor();
    let f = hue - i;
    let p = val * (1.0 - sat);
    let q = val * (1.0 - sat * f);
    let t = val * (1.0 - sat * (1.0 - f));
    match i as i32 {
        0 => [val, t, p],
        1 => [q, val, p],
        2 => [p, val, t],
        3 => [p, q, val],
        4 => [t, p, val],
        5 => [val, p, q],
        _ => [0.0; 3],
    }
}

fn rgb_to_hsv_f64([x, y, z]: [f64; 3]) -> [f64; 3] {
    let max = x.max(y).max(z);
    let min = x.min(y).min(z);
    let range = max - min;
    let val = max;
    let sat = if max != 0.0 { range / max } else { 0.0 };
    let mut hue = 0.0;
    if sat != 0.0 {
        let h = if x == max {
            (y - z) / range
        } else if y == max {
            2.0 + (z - x) / range
        } else {
            4.0 + (x - y) / range
        };
        hue = h / 6.0;
        if hue < 0.0 {
            hue += 1.0;
        }
    }
    [hue, sat, val]
}

/// Converts a color from HSV to RGB.
///
/// Hue, saturation and value are fractions, so a hue of 1.0 (or the integer maximum) is the same
/// as a hue of zero.
pub fn hsv_to_rgb<T: Scalar>(hsv: Color3<T>) -> Color3<T> {
    Vector::from(hsv_to_rgb_f64(hsv.into_array().map(normalized))).map(denormalized)
}

/// Converts a color from RGB to HSV.
pub fn rgb_to_hsv<T: Scalar>(rgb: Color3<T>) -> Color3<T> {
    Vector::from(rgb_to_hsv_f64(rgb.into_array().map(normalized))).map(denormalized)
}

/// Converts a color from HSV to RGB, passing alpha through.
pub fn hsva_to_rgba<T: Scalar>(hsva: Color4<T>) -> Color4<T> {
    hsv_to_rgb(hsva.truncate()).extend(hsva.a)
}

/// Converts a color from RGB to HSV, passing alpha through.
pub fn rgba_to_hsva<T: Scalar>(rgba: Color4<T>) -> Color4<T> {
    rgb_to_hsv(rgba.truncate()).extend(rgba.a)
}

fn pack_channel<T: Scalar>(c: T) -> u32 {
    (normalized(c) * 255.0) as u32
}

/// Packs a color into 8 bits per channel. Out-of-range float channels saturate.
pub fn rgba_to_packed<T: Scalar>(c: Color4<T>) -> PackedColor {
    let [r, g, b, a] = c.into_array().map(pack_channel);
    (r & 0xff) | (g & 0xff) << 8 | (b & 0xff) << 16 | (a & 0xff) << 24
}

/// Packs an opaque color.
pub fn rgb_to_packed<T: Scalar>(c: Color3<T>) -> PackedColor {
    let [r, g, b] = c.into_array().map(pack_channel);
    (r & 0xff) | (g & 0xff) << 8 | (b & 0xff) << 16 | 0xff << 24
}

pub fn packed_to_rgba<T: Scalar>(packed: PackedColor) -> Color4<T> {
    // Integer channels scale by a whole factor, so 0xff maps to a multiple of it rather than to
    // exactly `T::MAX`.
    let factor = if T::INTEGRAL {
        (T::MAX.to_f64() / 255.0).floor()
    } else {
        1.0 / 255.0
    };
    Vector::from_fn(|i| T::from_f64(f64::from((packed >> (8 * i)) & 0xff) * factor))
}

pub fn packed_to_rgb<T: Scalar>(packed: PackedColor) -> Color3<T> {
    packed_to_rgba(packed).truncate()
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, vec4};

    use super::*;

    #[test]
    fn hsv_round_trip() {
        let rgb = vec3(0.2f64, 0.4, 0.8);
        let hsv = rgb_to_hsv(rgb);
        assert_approx_eq!(hsv, vec3(220.0 / 360.0, 0.75, 0.8)).abs(1e-12);
        assert_approx_eq!(hsv_to_rgb(hsv), rgb).abs(1e-12);

        assert_eq!(rgb_to_hsv(vec3(0.0f32, 0.0, 0.0)), vec3(0.0, 0.0, 0.0));
        assert_eq!(rgb_to_hsv(vec3(0.5f32, 0.5, 0.5)), vec3(0.0, 0.0, 0.5));
        assert_eq!(hsv_to_rgb(vec3(1.0f32, 1.0, 1.0)), vec3(1.0, 0.0, 0.0));
    }

    #[test]
    fn hsv_integer_channels() {
        assert_eq!(rgb_to_hsv(vec3(255u8, 0, 0)), vec3(0, 255, 255));
        assert_eq!(rgb_to_hsv(vec3(0u8, 0, 255)).y, 255);
        assert_eq!(hsv_to_rgb(vec3(0u8, 255, 255)), vec3(255, 0, 0));
        assert_eq!(hsva_to_rgba(vec4(0u8, 0, 255, 7)), vec4(255, 255, 255, 7));
        assert_eq!(rgba_to_hsva(vec4(0.0f32, 0.0, 1.0, 0.5)).a, 0.5);
    }

    #[test]
    fn packing() {
        let packed = rgba_to_packed(vec4(1.0f32, 0.0, 0.5, 1.0));
        assert_eq!(packed, 0xff7f00ff);
        assert_eq!(rgb_to_packed(vec3(255u8, 0, 255)), 0xffff00ff);
        assert_eq!(packed_to_rgba::<u8>(0x11223344), vec4(0x44, 0x33, 0x22, 0x11));
        assert_approx_eq!(packed_to_rgb::<f32>(0xff00ff), vec3(1.0, 0.0, 1.0));
        assert_eq!(packed_to_rgba::<i32>(0xff)[0], 255 * 8421504);
    }
}
