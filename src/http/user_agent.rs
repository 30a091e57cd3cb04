use rand::Rng;
use rand::seq::SliceRandom;

/// Picks one `User-Agent` uniformly at random, or `None` for an empty pool.
#[must_use]
pub fn pick_user_agent<R>(pool: &[&'static str], rng: &mut R) -> Option<&'static str>
where
    R: Rng + ?Sized,
{
    pool.choose(rng).copied()
}
