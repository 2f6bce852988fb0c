//! Deterministic procedural layout for repeated shelf-like fixtures.
//!
//! [`generate`] is a pure function from a seed to a packed run of items —
//! the same seed always reproduces the same run, so a scene can fill
//! every shelf with stable variety and zero stored data. The sampler is a
//! trigonometric scramble re-seeded per value from `(seed, index)`; that
//! reproducibility is the load-bearing property, not any statistical
//! quality of the sequence.

use crate::options::LayoutOptions;

/// Fixed item color palette. Indices produced by [`generate`] point here;
/// values are sRGB components in [0, 1].
pub const PALETTE: [[f32; 3]; 24] = [
    [0.545, 0.000, 0.000],
    [0.180, 0.545, 0.341],
    [0.294, 0.000, 0.510],
    [0.502, 0.000, 0.502],
    [0.000, 0.545, 0.545],
    [0.722, 0.525, 0.043],
    [0.545, 0.271, 0.075],
    [0.184, 0.310, 0.310],
    [0.333, 0.420, 0.184],
    [0.545, 0.000, 0.545],
    [1.000, 0.549, 0.000],
    [0.600, 0.196, 0.800],
    [0.863, 0.078, 0.235],
    [0.133, 0.545, 0.133],
    [0.098, 0.098, 0.439],
    [0.561, 0.737, 0.561],
    [0.804, 0.522, 0.247],
    [0.275, 0.510, 0.706],
    [0.824, 0.412, 0.118],
    [0.561, 0.737, 0.561],
    [0.604, 0.804, 0.196],
    [0.125, 0.698, 0.667],
    [0.529, 0.808, 0.922],
    [0.867, 0.627, 0.867],
];

/// Seed for one generated run: which fixture variant, and which slot
/// (shelf row, bay, …) within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutSeed {
    /// Fixture variant id.
    pub variant: u32,
    /// Slot index within the fixture.
    pub slot: u32,
}

impl LayoutSeed {
    /// Seed for the item-count draw.
    fn count_seed(self) -> u32 {
        self.variant * 100 + self.slot * 10
    }

    /// Seed for the i-th item's first sample; consecutive offsets give
    /// the item's other samples.
    fn item_seed(self, index: u32) -> u32 {
        self.variant * 1000 + self.slot * 100 + index
    }
}

/// One placed item in a generated run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratedItem {
    /// Packing size along the run axis.
    pub extent: f32,
    /// Decorative size perpendicular to the run, already clamped to the
    /// allowed maximum.
    pub height: f32,
    /// Index into [`PALETTE`].
    pub color: usize,
    /// Center offset from the left edge of the region.
    pub offset: f32,
}

/// Deterministic scramble of an integer seed into [0, 1).
///
/// Evaluated in f64 so the fractional part survives the ×10000 blow-up,
/// then truncated. Identical seeds always produce identical samples.
fn scramble(seed: u32) -> f32 {
    let x = f64::from(seed).sin() * 10_000.0;
    (x - x.floor()) as f32
}

/// Sample a value from an inclusive-exclusive range at `seed`.
fn sample(seed: u32, range: (f32, f32)) -> f32 {
    range.0 + scramble(seed) * (range.1 - range.0)
}

/// Generate a packed left-to-right run of items for `seed`.
///
/// Items are placed at the running cursor plus half their extent; the
/// cursor advances by extent plus the configured gap. Placement stops —
/// dropping the remaining items, never resizing them — as soon as the
/// next advance would pass `region_width`. Degenerate inputs
/// (non-positive width, inverted ranges) yield an empty run: decorative
/// absence is an acceptable degraded state, not an error.
#[must_use]
pub fn generate(
    seed: LayoutSeed,
    region_width: f32,
    params: &LayoutOptions,
) -> Vec<GeneratedItem> {
    if region_width <= 0.0
        || params.count_max < params.count_min
        || params.size_range.1 < params.size_range.0
        || params.height_range.1 < params.height_range.0
    {
        return Vec::new();
    }

    let span = params.count_max - params.count_min;
    let count = params.count_min
        + (scramble(seed.count_seed()) * span as f32) as u32;

    let mut items = Vec::with_capacity(count as usize);
    let mut cursor = 0.0_f32;

    for i in 0..count {
        let s = seed.item_seed(i);
        let extent = sample(s, params.size_range);
        let height =
            sample(s + 1, params.height_range).min(params.max_height);
        let color =
            (scramble(s + 2) * PALETTE.len() as f32) as usize % PALETTE.len();

        if cursor + extent + params.gap > region_width {
            break;
        }

        items.push(GeneratedItem {
            extent,
            height,
            color,
            offset: cursor + extent / 2.0,
        });
        cursor += extent + params.gap;
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf_params() -> LayoutOptions {
        LayoutOptions::default()
    }

    #[test]
    fn identical_seeds_yield_identical_runs() {
        let seed = LayoutSeed {
            variant: 42,
            slot: 0,
        };
        let a = generate(seed, 1.55, &shelf_params());
        let b = generate(seed, 1.55, &shelf_params());
        assert!(!a.is_empty());
        assert_eq!(a, b);
    }

    #[test]
    fn different_variants_differ() {
        let a = generate(
            LayoutSeed {
                variant: 1,
                slot: 0,
            },
            1.55,
            &shelf_params(),
        );
        let b = generate(
            LayoutSeed {
                variant: 2,
                slot: 0,
            },
            1.55,
            &shelf_params(),
        );
        assert_ne!(a, b);
    }

    #[test]
    fn packed_run_fits_the_region() {
        let params = shelf_params();
        for variant in 0..8 {
            for slot in 0..5 {
                let items = generate(
                    LayoutSeed { variant, slot },
                    1.55,
                    &params,
                );
                let used: f32 = items
                    .iter()
                    .map(|item| item.extent + params.gap)
                    .sum();
                assert!(used <= 1.55 + 1e-6);

                // Offsets are centers: each item lies inside the region.
                for item in &items {
                    assert!(item.offset - item.extent / 2.0 >= -1e-6);
                    assert!(item.offset + item.extent / 2.0 <= 1.55);
                }
            }
        }
    }

    #[test]
    fn count_stays_in_configured_range() {
        let params = shelf_params();
        // A very wide region so packing never truncates the run.
        for variant in 0..10 {
            let items = generate(
                LayoutSeed { variant, slot: 3 },
                1000.0,
                &params,
            );
            assert!(items.len() as u32 >= params.count_min);
            assert!((items.len() as u32) < params.count_max);
        }
    }

    #[test]
    fn heights_clamped_to_allowed_maximum() {
        let mut params = shelf_params();
        params.height_range = (0.4, 0.9);
        params.max_height = 0.5;
        let items = generate(
            LayoutSeed {
                variant: 3,
                slot: 1,
            },
            1.55,
            &params,
        );
        assert!(!items.is_empty());
        for item in &items {
            assert!(item.height <= 0.5);
        }
    }

    #[test]
    fn color_indices_stay_in_palette() {
        let items = generate(
            LayoutSeed {
                variant: 6,
                slot: 4,
            },
            1.55,
            &shelf_params(),
        );
        for item in &items {
            assert!(item.color < PALETTE.len());
        }
    }

    #[test]
    fn degenerate_inputs_yield_empty_runs() {
        let seed = LayoutSeed {
            variant: 1,
            slot: 1,
        };
        let params = shelf_params();
        assert!(generate(seed, 0.0, &params).is_empty());
        assert!(generate(seed, -1.0, &params).is_empty());

        let mut inverted = shelf_params();
        inverted.count_max = 5;
        inverted.count_min = 10;
        assert!(generate(seed, 1.55, &inverted).is_empty());

        let mut bad_sizes = shelf_params();
        bad_sizes.size_range = (0.05, 0.02);
        assert!(generate(seed, 1.55, &bad_sizes).is_empty());
    }

    #[test]
    fn narrow_region_drops_the_tail() {
        let seed = LayoutSeed {
            variant: 2,
            slot: 2,
        };
        let full = generate(seed, 1.55, &shelf_params());
        let narrow = generate(seed, 0.2, &shelf_params());
        assert!(narrow.len() < full.len());
        // The surviving prefix is unchanged.
        assert_eq!(&full[..narrow.len()], &narrow[..]);
    }
}
