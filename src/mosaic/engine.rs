//! Mosaic generation by randomized tile placement
//!
//! Two placement modes share one assembly path. Without a pool, each pass
//! permutes the working image's own tiles, so a single pass is a pure
//! rearrangement. With a pool, each cell independently draws a tile (with
//! replacement) from the tiles harvested across all pool images.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};

use crate::grid::{GridSpec, Image, Tile, assemble, extract_tiles};

/// Generate a mosaic of `target` using the caller's random source
///
/// Splits the target into `order` by `order` cells and rewrites every cell
/// `iterations` times in sequence, each pass consuming the previous pass's
/// output. `iterations` below 1 is clamped to 1. When `pool` yields at
/// least one tile, cells draw uniformly from the pool with replacement;
/// otherwise each pass shuffles the working image's own tiles as a uniform
/// random permutation. The mode is fixed once per call.
///
/// Degenerate inputs never fail: an order of 0 or 1 returns a pixel-exact
/// copy of the target (a one-cell mosaic is the identity), and pool images
/// that cannot be partitioned are skipped, falling back to no-pool mode
/// when none survive. The output always has the target's dimensions and
/// shares no buffer with it.
pub fn generate<R: Rng>(
    target: &Image,
    order: usize,
    iterations: usize,
    pool: Option<&[Image]>,
    rng: &mut R,
) -> Image {
    let (height, width, _) = target.dim();
    if order <= 1 {
        return target.clone();
    }

    let Ok(spec) = GridSpec::compute(height, width, order) else {
        // Unreachable for order > 1; keep the identity fallback regardless
        return target.clone();
    };

    // Pool tiles are harvested once per call and reused across passes
    let pool_tiles = pool.map_or_else(Vec::new, |images| collect_pool_tiles(images, order));

    let passes = iterations.max(1);
    let mut working = target.clone();

    if pool_tiles.is_empty() {
        for _ in 0..passes {
            let tiles = extract_tiles(&working, &spec);
            let mut permutation: Vec<usize> = (0..tiles.len()).collect();
            permutation.shuffle(rng);
            working = assemble(height, width, &spec, |index| {
                permutation.get(index).and_then(|&source| tiles.get(source))
            });
        }
    } else {
        for _ in 0..passes {
            working = assemble(height, width, &spec, |_| pool_tiles.choose(rng));
        }
    }

    working
}

/// Generate a mosaic from a fixed seed
///
/// Thin wrapper over [`generate`] that drives a [`StdRng`] seeded with
/// `seed`, giving reproducible placements for the same inputs.
pub fn generate_with_seed(
    target: &Image,
    order: usize,
    iterations: usize,
    pool: Option<&[Image]>,
    seed: u64,
) -> Image {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(target, order, iterations, pool, &mut rng)
}

/// Harvest tiles from every pool image that can be partitioned
///
/// Each pool image is split with the same grid order as the target; images
/// with a zero-sized axis contribute nothing and are skipped silently.
/// Images smaller than the grid order partition into some zero-area cells;
/// only their non-empty tiles enter the pool, so a drawn tile always has
/// pixels to resample into the destination cell.
fn collect_pool_tiles(pool: &[Image], order: usize) -> Vec<Tile> {
    let mut tiles = Vec::new();
    for source in pool {
        let (height, width, _) = source.dim();
        if height == 0 || width == 0 {
            continue;
        }
        if let Ok(spec) = GridSpec::compute(height, width, order) {
            tiles.extend(
                extract_tiles(source, &spec)
                    .into_iter()
                    .filter(|tile| tile.dim().0 > 0 && tile.dim().1 > 0),
            );
        }
    }
    tiles
}
