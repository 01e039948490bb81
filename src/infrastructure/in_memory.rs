use crate::domain::ports::SegmentResolver;
use crate::domain::segment::Segment;
use crate::error::{LoanError, Result};
use std::collections::HashMap;

/// A segment directory held in memory.
///
/// Maps applicant identifiers to segments. New tiers are added as data, not code.
#[derive(Debug, Default, Clone)]
pub struct InMemorySegmentResolver {
    segments: HashMap<String, Segment>,
}

impl InMemorySegmentResolver {
    /// Creates a new, empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver seeded with the well-known test applicants.
    pub fn with_defaults() -> Self {
        let mut resolver = Self::new();
        resolver.insert("49002010965", Segment::Debt);
        resolver.insert("49002010976", Segment::SEGMENT_1);
        resolver.insert("49002010987", Segment::SEGMENT_2);
        resolver.insert("49002010998", Segment::SEGMENT_3);
        resolver
    }

    pub fn insert(&mut self, identifier: impl Into<String>, segment: Segment) {
        self.segments.insert(identifier.into(), segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl FromIterator<(String, Segment)> for InMemorySegmentResolver {
    fn from_iter<I: IntoIterator<Item = (String, Segment)>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl SegmentResolver for InMemorySegmentResolver {
    fn resolve(&self, identifier: &str) -> Result<Segment> {
        self.segments
            .get(identifier)
            .copied()
            .ok_or_else(|| LoanError::UnknownApplicant(identifier.to_string()))
    }
}
