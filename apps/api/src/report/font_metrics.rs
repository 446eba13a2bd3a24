//! Static glyph-width tables for the builtin Helvetica faces used in exports.
//!
//! Widths come from the standard Adobe AFM files, in 1/1000 em. Tables cover
//! ASCII 0x20..=0x7E (95 printable characters), index = (char as usize) - 32.
//! Anything outside that range is measured at `fallback_width`, which is at
//! least as wide as any WinAnsi glyph, so measured widths never undershoot.

const PT_TO_MM: f32 = 25.4 / 72.0;

/// Character-width table for one builtin font.
pub struct FontMetricTable {
    widths: [u16; 95],
    pub fallback_width: u16,
}

impl FontMetricTable {
    /// Measures the rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        let units: u32 = s
            .chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    u32::from(self.widths[code - 32])
                } else {
                    u32::from(self.fallback_width)
                }
            })
            .sum();
        units as f32 / 1000.0
    }

    /// Rendered width of `s` in millimetres at `size_pt`.
    pub fn width_mm(&self, s: &str, size_pt: f32) -> f32 {
        self.measure_str(s) * size_pt * PT_TO_MM
    }
}

pub static HELVETICA: FontMetricTable = FontMetricTable {
    widths: [
        // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :   ;    <    =    >    ?    @
        278, 278, 584, 584, 584, 556, 1015,
        // A-Z
        667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [   \    ]    ^    _    `
        278, 278, 278, 469, 556, 333,
        // a-z
        556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        // {   |    }    ~
        334, 260, 334, 584,
    ],
    fallback_width: 1015,
};

pub static HELVETICA_BOLD: FontMetricTable = FontMetricTable {
    widths: [
        // sp  !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
        278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
        // 0-9
        556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        // :   ;    <    =    >    ?    @
        333, 333, 584, 584, 584, 611, 975,
        // A-Z
        722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        // [   \    ]    ^    _    `
        333, 278, 333, 584, 556, 333,
        // a-z
        556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        // {   |    }    ~
        389, 280, 389, 584,
    ],
    fallback_width: 1015,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_known_glyphs() {
        assert!((HELVETICA.measure_str("W") - 0.944).abs() < 1e-6);
        assert!((HELVETICA.measure_str("il") - 0.444).abs() < 1e-6);
        assert!((HELVETICA_BOLD.measure_str("m") - 0.889).abs() < 1e-6);
    }

    #[test]
    fn test_index_mapping_hits_expected_slots() {
        assert!((HELVETICA.measure_str(" ") - 0.278).abs() < 1e-6);
        assert!((HELVETICA.measure_str("0") - 0.556).abs() < 1e-6);
        assert!((HELVETICA.measure_str("A") - 0.667).abs() < 1e-6);
        assert!((HELVETICA.measure_str("a") - 0.556).abs() < 1e-6);
        assert!((HELVETICA.measure_str("~") - 0.584).abs() < 1e-6);
    }

    #[test]
    fn test_non_ascii_uses_fallback() {
        assert!((HELVETICA.measure_str("é") - 1.015).abs() < 1e-6);
    }

    #[test]
    fn test_width_mm_scales_with_size() {
        // 1em at 72pt is exactly one inch.
        let em = 1000.0 / 944.0;
        let w = HELVETICA.width_mm("W", 72.0 * em);
        assert!((w - 25.4).abs() < 1e-3);
    }

    #[test]
    fn test_bold_is_never_narrower_for_letters() {
        for c in ('a'..='z').chain('A'..='Z') {
            let s = c.to_string();
            assert!(HELVETICA_BOLD.measure_str(&s) >= HELVETICA.measure_str(&s), "{c}");
        }
    }
}
