//! Operation-Type Classifier
//!
//! Maps a single EXPLAIN line to a short operation label using a fixed
//! vocabulary of PostgreSQL node names.

/// Known operation labels, tested in order; the first label contained in the
/// line wins. The order makes "Bitmap Index Scan" lines report as
/// "Index Scan" and "Parallel Seq Scan" lines as "Seq Scan", which the
/// recommendation rules rely on.
pub const OPERATION_VOCABULARY: [&str; 14] = [
    "Seq Scan",
    "Index Scan",
    "Index Only Scan",
    "Bitmap Heap Scan",
    "Bitmap Index Scan",
    "Nested Loop",
    "Hash Join",
    "Merge Join",
    "Sort",
    "Aggregate",
    "Hash",
    "Materialize",
    "Gather",
    "Parallel Seq Scan",
];

/// Classifies a plan line against the vocabulary, falling back to the first
/// one or two words of the trimmed line.
pub fn classify_operation(line: &str) -> String {
    let trimmed = line.trim();

    for op in OPERATION_VOCABULARY {
        if trimmed.contains(op) {
            return op.to_string();
        }
    }

    let mut words = trimmed.split_whitespace();
    match (words.next(), words.next()) {
        (Some(first), Some(second)) => format!("{first} {second}"),
        (Some(first), None) => first.to_string(),
        _ => "Unknown Operation".to_string(),
    }
}
