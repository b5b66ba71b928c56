use densglobe_geom::lerp;
use densglobe_grid::HueRange;

#[inline]
fn hue_channel(lo: f32, hi: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}

/// HSL to linear RGB in [0,1]. Hue wraps (so 1.1 == 0.1); saturation and
/// lightness clamp to [0,1].
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lo = 2.0 * l - hi;
    [
        hue_channel(lo, hi, h + 1.0 / 3.0),
        hue_channel(lo, hi, h),
        hue_channel(lo, hi, h - 1.0 / 3.0),
    ]
}

/// Scales to 0..=255 and truncates, the way a byte buffer store does.
#[inline]
pub fn rgb_to_u8(rgb: [f32; 3]) -> [u8; 3] {
    rgb.map(|c| (c * 255.0) as u8)
}

/// Box colour for a normalised amount: hue across `hue`, full saturation,
/// lightness across `lightness`.
pub fn amount_color(hue: HueRange, lightness: [f32; 2], amount: f32) -> [u8; 3] {
    let h = hue.at(amount);
    let l = lerp(lightness[0], lightness[1], amount);
    rgb_to_u8(hsl_to_rgb(h, 1.0, l))
}

/// Appends `count` copies of `item` to `out`.
#[inline]
pub fn broadcast_into<T: Copy, const N: usize>(item: [T; N], count: usize, out: &mut Vec<T>) {
    out.reserve(N * count);
    for _ in 0..count {
        out.extend_from_slice(&item);
    }
}
