//! Random subsampling of aligned pairs.
use log::info;
use rand::seq::index;
use rand::Rng;

use super::Aligned;

/// Draw `min(max_size, len)` pairs without replacement, uniformly at random.
///
/// The same indices are applied to both sides, and the result follows the drawn order.
pub fn subsample<R: Rng + ?Sized>(pairs: Aligned, max_size: usize, rng: &mut R) -> Aligned {
    let amount = max_size.min(pairs.len());
    info!("limiting number of examples to {} ({} requested)", amount, max_size);
    let indices = index::sample(rng, pairs.len(), amount);
    pairs.select(indices.into_vec())
}
