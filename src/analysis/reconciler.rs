//! Span reconciler
//!
//! Merges pattern-rule spans with recognizer spans into one non-overlapping
//! set using a deterministic longest-span-wins rule. Pure function: inputs
//! are consumed, never mutated in place, and the output ordering is fixed.

use crate::domain::{EntitySpan, SpanOrigin};

/// Resolve the union of both span sets into a non-overlapping set.
///
/// Spans are sorted by start offset, then by descending length; on a full
/// tie the recognizer span wins over the pattern span (recognizer context
/// is higher-precision for ambiguous boundaries). The sorted sequence is
/// walked greedily: a span is kept only if it overlaps no already-kept
/// span. Output is sorted by start offset.
pub fn reconcile(
    pattern_spans: Vec<EntitySpan>,
    recognizer_spans: Vec<EntitySpan>,
) -> Vec<EntitySpan> {
    let mut all: Vec<EntitySpan> = pattern_spans
        .into_iter()
        .chain(recognizer_spans)
        .collect();

    all.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| b.len().cmp(&a.len()))
            .then_with(|| origin_rank(a.origin).cmp(&origin_rank(b.origin)))
    });

    let mut kept: Vec<EntitySpan> = Vec::with_capacity(all.len());
    for span in all {
        if !kept.iter().any(|k| k.overlaps(&span)) {
            kept.push(span);
        }
    }

    kept.sort_by_key(|s| s.start);
    kept
}

fn origin_rank(origin: SpanOrigin) -> u8 {
    match origin {
        SpanOrigin::Recognizer => 0,
        SpanOrigin::PatternRule => 1,
    }
}
