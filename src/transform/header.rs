use crate::transform::month::MonthToken;
use crate::transform::numeric::parse_number;

/// Resolved role of a non-key column header. The role is decided once, up
/// front, by the reshaper that owns the orientation; downstream code never
/// re-guesses what a header means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Header failed to resolve; the whole column is dropped.
    Unrecognized,
    /// Header is a day-of-month in 1..=31.
    Day(u8),
    /// Header resolved to a canonical month.
    Month(MonthToken),
}

impl ColumnKind {
    /// Classify a header expected to carry a day number (orientation A).
    /// The header must parse strictly as a number; the integer part must land
    /// in 1..=31. Garbled headers classify as `Unrecognized`.
    pub fn expect_day(raw: &str) -> ColumnKind {
        match parse_number(raw) {
            Some(n) if (1.0..=31.0).contains(&n.trunc()) => ColumnKind::Day(n.trunc() as u8),
            _ => ColumnKind::Unrecognized,
        }
    }

    /// Classify a header expected to carry a month label (orientation B).
    pub fn expect_month(raw: &str) -> ColumnKind {
        match MonthToken::parse(raw) {
            Some(m) => ColumnKind::Month(m),
            None => ColumnKind::Unrecognized,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_headers() {
        assert_eq!(ColumnKind::expect_day("1"), ColumnKind::Day(1));
        assert_eq!(ColumnKind::expect_day(" 31 "), ColumnKind::Day(31));
        assert_eq!(ColumnKind::expect_day("7.0"), ColumnKind::Day(7));
        assert_eq!(ColumnKind::expect_day("0"), ColumnKind::Unrecognized);
        assert_eq!(ColumnKind::expect_day("32"), ColumnKind::Unrecognized);
        assert_eq!(ColumnKind::expect_day("Jan"), ColumnKind::Unrecognized);
        assert_eq!(ColumnKind::expect_day(""), ColumnKind::Unrecognized);
    }

    #[test]
    fn month_headers() {
        assert_eq!(
            ColumnKind::expect_month("Mei"),
            ColumnKind::Month(MonthToken::Mei)
        );
        assert_eq!(
            ColumnKind::expect_month("3"),
            ColumnKind::Month(MonthToken::Mar)
        );
        assert_eq!(ColumnKind::expect_month("Total"), ColumnKind::Unrecognized);
    }
}
