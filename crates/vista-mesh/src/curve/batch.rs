use rayon::prelude::*;
use vista_core::Result;

use super::{CurveGeometry, CurvePath, CurveTessellator, TessellationContext};

/// Tessellate independent curves in parallel.
///
/// Results come back in job order; one failing curve does not affect the
/// others.
pub fn tessellate_batch(
    jobs: &[(&CurveTessellator, &CurvePath)],
    ctx: &TessellationContext,
) -> Vec<Result<CurveGeometry>> {
    jobs.par_iter()
        .map(|(tessellator, path)| tessellator.tessellate(path, ctx))
        .collect()
}
