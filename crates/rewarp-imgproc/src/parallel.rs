use rayon::prelude::*;
use thiserror::Error;

use rewarp_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how the per-pixel loops are executed.
///
/// Every destination pixel is computed independently, so all strategies produce the same
/// output. Only the scheduling differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool and process destination rows in parallel.
    #[default]
    ParallelRows,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Build a strategy from an optional thread count.
    ///
    /// `None` selects the global pool, `Some(1)` runs serially and `Some(n)` builds a
    /// local pool of `n` threads.
    pub fn from_threads(threads: Option<usize>) -> Result<Self, ParallelError> {
        match threads {
            None => Ok(ExecutionStrategy::ParallelRows),
            Some(0) => Err(ParallelError::InvalidThreadCount(0)),
            Some(1) => Ok(ExecutionStrategy::Serial),
            Some(n) => Ok(ExecutionStrategy::Fixed(n)),
        }
    }
}

/// Apply a function to every pixel of `dst`, passing its column and row.
///
/// Rows are written as disjoint chunks, so `f` only needs shared access to its captures.
pub fn par_iter_rows_indexed<T>(
    dst: &mut Image<T>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize, &mut T) + Send + Sync,
) -> Result<(), ParallelError>
where
    T: Send,
{
    let cols = dst.cols();
    if cols == 0 || dst.rows() == 0 {
        return Ok(());
    }

    let row_op = |(y, dst_row): (usize, &mut [T])| {
        dst_row
            .iter_mut()
            .enumerate()
            .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
    };

    let dst_slice = dst.as_slice_mut();

    match strategy {
        ExecutionStrategy::Serial => {
            dst_slice.chunks_exact_mut(cols).enumerate().for_each(row_op);
        }
        ExecutionStrategy::ParallelRows => {
            dst_slice
                .par_chunks_exact_mut(cols)
                .enumerate()
                .for_each(row_op);
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst_slice
                    .par_chunks_exact_mut(cols)
                    .enumerate()
                    .for_each(row_op);
            });
        }
    }

    Ok(())
}
