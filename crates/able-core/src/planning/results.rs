//! Canned step results, keyed on fragments of the step title.

/// Result used when no title fragment matches.
pub const DEFAULT_RESULT: &str = "Step completed successfully";

/// Title fragment to result, checked in order. Matching is case-sensitive.
const RESULTS: &[(&str, &str)] = &[
    (
        "market segments",
        "Identified 4 key segments: Last-mile ($4.2B), Warehouse ($3.8B), Route Optimization ($2.6B), Visibility ($1.8B)",
    ),
    (
        "players",
        "Found 12 companies with $50M+ funding. Top 3: Flexport ($2.2B), project44 ($420M), FourKites ($200M)",
    ),
    (
        "landscape",
        "Generated competitive heatmap with 18 companies across 6 dimensions",
    ),
    (
        "investment",
        "$3.2B total disclosed funding in 18 months. 4 unicorns identified.",
    ),
    (
        "summary",
        "Executive summary ready with 5 key insights and 3 recommendations",
    ),
];

/// Looks up the result text for a completed step.
pub fn step_result(title: &str) -> &'static str {
    RESULTS
        .iter()
        .find(|(fragment, _)| title.contains(fragment))
        .map_or(DEFAULT_RESULT, |(_, result)| result)
}
