use serde::{Deserialize, Serialize};

/// A purchasable piece of wall
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub length: u32, // positive
    pub price: u32,
}

impl Segment {
    pub fn new(length: u32, price: u32) -> Self {
        Self { length, price }
    }
}

impl From<(u32, u32)> for Segment {
    fn from((length, price): (u32, u32)) -> Self {
        Self { length, price }
    }
}

/// Ordered list of segment offers.
///
/// Entry `k` of the catalog is row `k + 1` of the coverage table; row 0 is the
/// "buy nothing" row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentCatalog {
    segments: Vec<Segment>,
}

impl SegmentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Length obtained by buying every offer once
    pub fn total_length(&self) -> u64 {
        self.segments.iter().map(|s| s.length as u64).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }
}

impl FromIterator<Segment> for SegmentCatalog {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SegmentCatalog {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
