//! Index template shared by every side of a tube.

/// Rings covered by one strip submission.
pub const MAX_CHUNK_RINGS: usize = 128;

/// Rings advanced between submissions; consecutive chunks share one ring.
pub const CHUNK_STEP: usize = MAX_CHUNK_RINGS - 1;

/// Template offset used by all sides but the last.
pub const LOWER_OFFSET: usize = 0;

/// Template offset used by the last side, which wraps around to side 0.
pub const UPPER_OFFSET: usize = 2 * MAX_CHUNK_RINGS;

const TEMPLATE_LEN: usize = 4 * MAX_CHUNK_RINGS + 1;

/// Precomputed strip indices relative to a side's first vertex.
///
/// With `S` sides, vertex `(ring, side)` lives at `ring * S + side`. The lower
/// half alternates `(ring, a)` / `(ring, a + 1)` relative to side `a`; the upper
/// half alternates `(ring, S - 1)` / `(ring, 0)` relative to side 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurveSlice {
    entries: Box<[u32; TEMPLATE_LEN]>,
}

impl CurveSlice {
    pub fn new(sides: usize) -> Self {
        let mut entries = Box::new([0u32; TEMPLATE_LEN]);
        let s = sides as u32;
        for i in 0..MAX_CHUNK_RINGS {
            let ring = i as u32 * s;
            entries[2 * i] = ring;
            entries[2 * i + 1] = ring + 1;
            entries[2 * i + UPPER_OFFSET] = ring + (s - 1);
            entries[2 * i + UPPER_OFFSET + 1] = ring;
        }
        Self { entries }
    }

    /// `len` template entries starting at `offset`.
    pub fn run(&self, offset: usize, len: usize) -> &[u32] {
        &self.entries[offset..offset + len]
    }

    pub fn entries(&self) -> &[u32] {
        &self.entries[..]
    }
}
