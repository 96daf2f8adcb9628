use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

/// A row of Pascal's triangle, C(n, 0..=n). Rows are shared, never mutated once built.
///
/// Coefficients are whole numbers held as f64. They are exact up to degree 56 and only lose
/// low order digits past that, so there is no degree a row cannot be built for.
pub type BinomialRow = Arc<[f64]>;

static GLOBAL_CACHE: Lazy<BinomialCache> = Lazy::new(BinomialCache::new);

/// Grows Pascal's triangle one row at a time and hands out rows by degree.
///
/// The table only ever grows. Readers share a read lock; a missing row is built under the
/// write lock and pushed in one step, so no reader can observe a half-built row. Rows handed
/// out earlier are `Arc`s and stay valid (and unchanged) however far the table grows later.
#[derive(Debug)]
pub struct BinomialCache {
    rows: RwLock<Vec<BinomialRow>>,
}

impl Default for BinomialCache {
    fn default() -> Self {
        Self::new()
    }
}

impl BinomialCache {
    pub fn new() -> Self {
        let seed: Vec<BinomialRow> = vec![Arc::from(vec![1.]), Arc::from(vec![1., 1.])];
        BinomialCache {
            rows: RwLock::new(seed),
        }
    }

    /// The process wide cache used by curves built without an explicit cache.
    pub fn global() -> &'static BinomialCache {
        &GLOBAL_CACHE
    }

    /// Number of degrees currently held, i.e. the table covers degrees `0..computed_degrees()`.
    pub fn computed_degrees(&self) -> usize {
        self.rows.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns C(degree, 0..=degree), building any missing rows first.
    pub fn row(&self, degree: usize) -> BinomialRow {
        {
            let rows = self.rows.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(row) = rows.get(degree) {
                return Arc::clone(row);
            }
        }

        let mut rows = self.rows.write().unwrap_or_else(PoisonError::into_inner);
        // somebody else may have grown the table while we waited on the lock
        while rows.len() <= degree {
            let next = next_row(&rows[rows.len() - 1]);
            log::trace!("Extended binomial table to degree {}", rows.len());
            rows.push(next);
        }

        Arc::clone(&rows[degree])
    }

    /// The row for a curve with `count` control points. No control points means no curve and
    /// an empty row.
    pub fn row_for_points(&self, count: usize) -> BinomialRow {
        match count {
            0 => Arc::from(Vec::new()),
            n => self.row(n - 1),
        }
    }
}

// Pascal's rule: row[j] = prev[j - 1] + prev[j], with ones at both ends.
fn next_row(previous: &[f64]) -> BinomialRow {
    let mut coefficients = Vec::with_capacity(previous.len() + 1);
    coefficients.push(1.);
    coefficients.extend(previous.windows(2).map(|pair| pair[0] + pair[1]));
    coefficients.push(1.);

    Arc::from(coefficients)
}
