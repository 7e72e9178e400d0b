use super::nbit::NBitColors;
use crate::types::Rgb;
use rand::Rng;

/// The shuffled sequence dictating which color is placed next.
///
/// Produced once per run and consumed strictly front to back by the engine.
#[derive(Clone, Debug)]
pub struct PlacementOrder {
    colors: Vec<Rgb>,
}

impl PlacementOrder {
    /// Enumerates the color space for `bits` and shuffles it in place with a
    /// Fisher–Yates pass over the supplied random source. Returns `None` when
    /// `bits` is outside the supported range.
    pub fn generate<R: Rng>(bits: u8, rng: &mut R) -> Option<Self> {
        let mut colors: Vec<Rgb> = NBitColors::new(bits)?.collect();
        for i in (1..colors.len()).rev() {
            let j = rng.gen_range(0..=i);
            colors.swap(i, j);
        }
        Some(Self { colors })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }
}
