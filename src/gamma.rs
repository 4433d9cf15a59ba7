// Speeds up gamma-correct alpha blending by replacing powf with table lookups.
// Used when a PNG pixel is neither fully opaque nor fully transparent
// (soft cloud edges, the skier glow, tree outlines).

pub struct GammaLut {
    // sRGB(0..255) -> linear (0..1) as f32
    srgb_to_linear: [f32; 256],
    // linear(0..1) -> sRGB(0..255) via 4096-step quantization
    // (index = (linear * 4095).round())
    linear_to_srgb: [u8; 4096],
}

impl Default for GammaLut {
    fn default() -> Self {
        Self::new()
    }
}

impl GammaLut {
    /// Build both tables once at startup.
    pub fn new() -> Self {
        let mut s2l = [0.0f32; 256];
        for (v, slot) in s2l.iter_mut().enumerate() {
            let c = v as f32 / 255.0;
            *slot = if c <= 0.04045 { c / 12.92 } else { ((c + 0.055) / 1.055).powf(2.4) };
        }

        let mut l2s = [0u8; 4096];
        for (i, slot) in l2s.iter_mut().enumerate() {
            let l = (i as f32) / 4095.0;
            let s = if l <= 0.003_130_8 { 12.92 * l } else { 1.055 * l.powf(1.0 / 2.4) - 0.055 };
            *slot = (s * 255.0).round().clamp(0.0, 255.0) as u8;
        }

        Self { srgb_to_linear: s2l, linear_to_srgb: l2s }
    }

    #[inline]
    pub fn srgb_u8_to_linear(&self, v: u8) -> f32 {
        self.srgb_to_linear[v as usize]
    }

    #[inline]
    pub fn linear_to_srgb_u8(&self, l: f32) -> u8 {
        let idx = (l.clamp(0.0, 1.0) * 4095.0).round() as usize;
        self.linear_to_srgb[idx]
    }

    /// Mix `src` (0xAARRGGBB) over `dst` (0x00RRGGBB) in linear light.
    pub fn blend_over(&self, dst: u32, src: u32) -> u32 {
        let a = ((src >> 24) & 0xFF) as f32 / 255.0;
        let inv = 1.0 - a;
        let mix = |shift: u32| {
            let s = self.srgb_u8_to_linear(((src >> shift) & 0xFF) as u8);
            let d = self.srgb_u8_to_linear(((dst >> shift) & 0xFF) as u8);
            self.linear_to_srgb_u8(a * s + inv * d) as u32
        };
        (mix(16) << 16) | (mix(8) << 8) | mix(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_endpoints_round_trip() {
        let lut = GammaLut::new();
        assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(0)), 0);
        assert_eq!(lut.linear_to_srgb_u8(lut.srgb_u8_to_linear(255)), 255);
    }

    #[test]
    fn blend_over_respects_alpha_extremes() {
        let lut = GammaLut::new();
        assert_eq!(lut.blend_over(0x00_10_20_30, 0xFF_AA_BB_CC), 0x00_AA_BB_CC);
        assert_eq!(lut.blend_over(0x00_10_20_30, 0x00_AA_BB_CC), 0x00_10_20_30);
    }

    #[test]
    fn half_alpha_lands_between() {
        let lut = GammaLut::new();
        let out = lut.blend_over(0x00_00_00_00, 0x80_FF_FF_FF);
        let r = (out >> 16) & 0xFF;
        assert!(r > 0 && r < 255);
    }
}
