//! Scoring module - line clear points, leveling and gravity speed
//!
//! Classic single-table rules: base points per clear count multiplied by the
//! level at the time of the clear, level recomputed from total lines after
//! every clear.

use blockfall_types::{
    DROP_INTERVAL_FAST_MS, DROP_INTERVAL_MEDIUM_MS, DROP_INTERVAL_SLOW_MS, LINES_PER_LEVEL,
    LINE_SCORES,
};

/// Points awarded for clearing `rows` rows at `level`
pub fn line_clear_score(rows: usize, level: u32) -> u32 {
    if rows == 0 || rows >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[rows] * level
}

/// Level for a total line count: one level per 10 lines, starting at 1.
/// Recomputed after every clear, never incremented.
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Automatic drop interval for a level (milliseconds)
pub fn drop_interval_ms(level: u32) -> u64 {
    if level <= 3 {
        DROP_INTERVAL_SLOW_MS
    } else if level <= 6 {
        DROP_INTERVAL_MEDIUM_MS
    } else {
        DROP_INTERVAL_FAST_MS
    }
}
