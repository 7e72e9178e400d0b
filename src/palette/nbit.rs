use crate::types::Rgb;

/// Smallest supported bits-per-channel depth.
pub const MIN_BITS: u8 = 1;
/// Largest supported bits-per-channel depth (full 8-bit channels).
pub const MAX_BITS: u8 = 8;

/// Iterator over every color representable at `bits` bits per channel.
///
/// Value `i` decomposes into three `bits`-wide fields (red in the low bits,
/// then green, then blue); each field is scaled up to 8 bits by a left shift
/// of `8 − bits`, so a 2-bit channel covers {0, 64, 128, 192}. Every color
/// appears exactly once.
#[derive(Clone, Debug)]
pub struct NBitColors {
    bits: u8,
    next: u32,
    count: u32,
}

impl NBitColors {
    /// Returns the enumeration, or `None` when `bits` lies outside
    /// [`MIN_BITS`]..=[`MAX_BITS`].
    pub fn new(bits: u8) -> Option<Self> {
        if !(MIN_BITS..=MAX_BITS).contains(&bits) {
            return None;
        }
        Some(Self {
            bits,
            next: 0,
            count: 1u32 << (3 * bits as u32),
        })
    }

    /// Number of distinct colors at this depth (`2^(3·bits)`).
    #[inline]
    pub fn color_count(&self) -> usize {
        self.count as usize
    }

    #[inline]
    fn decode(&self, index: u32) -> Rgb {
        let channel_mask = (1u32 << self.bits) - 1;
        let scale_shift = 8 - self.bits as u32;
        let r = (index & channel_mask) << scale_shift;
        let g = ((index >> self.bits) & channel_mask) << scale_shift;
        let b = ((index >> (2 * self.bits as u32)) & channel_mask) << scale_shift;
        Rgb::new(r as u8, g as u8, b as u8)
    }
}

impl Iterator for NBitColors {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        if self.next >= self.count {
            return None;
        }
        let color = self.decode(self.next);
        self.next += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for NBitColors {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn rejects_depths_outside_supported_range() {
        assert!(NBitColors::new(0).is_none());
        assert!(NBitColors::new(9).is_none());
        assert!(NBitColors::new(MIN_BITS).is_some());
        assert!(NBitColors::new(MAX_BITS).is_some());
    }

    #[test]
    fn enumeration_is_a_bijection() {
        for bits in 1..=4u8 {
            let iter = NBitColors::new(bits).unwrap();
            let expected = 1usize << (3 * bits as u32);
            assert_eq!(iter.color_count(), expected, "bits={bits}");
            let colors: Vec<Rgb> = iter.collect();
            assert_eq!(colors.len(), expected, "bits={bits}");
            let distinct: HashSet<u32> = colors.iter().map(|c| c.packed()).collect();
            assert_eq!(distinct.len(), expected, "bits={bits}");
        }
    }

    #[test]
    fn two_bit_channels_cover_the_scaled_values() {
        let colors: Vec<Rgb> = NBitColors::new(2).unwrap().collect();
        let mut reds: Vec<u8> = colors.iter().map(|c| c.r).collect();
        reds.sort_unstable();
        reds.dedup();
        assert_eq!(reds, vec![0, 64, 128, 192]);
        let mut blues: Vec<u8> = colors.iter().map(|c| c.b).collect();
        blues.sort_unstable();
        blues.dedup();
        assert_eq!(blues, vec![0, 64, 128, 192]);
    }

    #[test]
    fn full_depth_covers_every_channel_value() {
        let mut greens = [false; 256];
        for color in NBitColors::new(8).unwrap() {
            greens[color.g as usize] = true;
        }
        assert!(greens.iter().all(|&seen| seen));
    }

    #[test]
    fn reports_exact_length() {
        let mut iter = NBitColors::new(2).unwrap();
        assert_eq!(iter.len(), 64);
        iter.next();
        assert_eq!(iter.len(), 63);
    }
}
