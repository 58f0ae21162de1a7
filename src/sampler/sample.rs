use rand::Rng;

use super::error::SelectError;

/// The number of names drawn from a file.
pub const SAMPLE_SIZE: usize = 10;

/// A source of uniformly random indices.
pub trait RandomIndex {
    /// Returns a uniformly random integer in `[0, upper)`. `upper` is never zero.
    fn random_index(&mut self, upper: usize) -> usize;
}

impl<R: Rng> RandomIndex for R {
    fn random_index(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

/// Draw `k` distinct items from `items` without replacement, in draw order.
///
/// Each step picks a random position among the items still in the pool and takes it out, so
/// every ordered selection of `k` items is equally likely.
pub fn sample_unique<T, R>(items: &[T], k: usize, rng: &mut R) -> Result<Vec<T>, SelectError>
where
    T: Clone,
    R: RandomIndex + ?Sized,
{
    if items.len() < k {
        return Err(SelectError::InsufficientRecords {
            minimum: k,
            found: items.len(),
        });
    }

    let mut pool: Vec<&T> = items.iter().collect();
    let mut selected = Vec::with_capacity(k);

    for _ in 0..k {
        let idx = rng.random_index(pool.len());
        selected.push(pool.remove(idx).clone());
    }

    Ok(selected)
}

/******************************************************************************/
/* Tests                                                                      */
/******************************************************************************/
