use std::fmt;

/// The twelve canonical month labels (Indonesian abbreviation set), in
/// calendar order. This set is fixed: matrix rows are always exactly these
/// twelve, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MonthToken {
    Jan,
    Peb,
    Mar,
    Apr,
    Mei,
    Jun,
    Jul,
    Ags,
    Sep,
    Okt,
    Nop,
    Des,
}

impl MonthToken {
    pub const ALL: [MonthToken; 12] = [
        MonthToken::Jan,
        MonthToken::Peb,
        MonthToken::Mar,
        MonthToken::Apr,
        MonthToken::Mei,
        MonthToken::Jun,
        MonthToken::Jul,
        MonthToken::Ags,
        MonthToken::Sep,
        MonthToken::Okt,
        MonthToken::Nop,
        MonthToken::Des,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MonthToken::Jan => "Jan",
            MonthToken::Peb => "Peb",
            MonthToken::Mar => "Mar",
            MonthToken::Apr => "Apr",
            MonthToken::Mei => "Mei",
            MonthToken::Jun => "Jun",
            MonthToken::Jul => "Jul",
            MonthToken::Ags => "Ags",
            MonthToken::Sep => "Sep",
            MonthToken::Okt => "Okt",
            MonthToken::Nop => "Nop",
            MonthToken::Des => "Des",
        }
    }

    /// Zero-based calendar position (Jan = 0, Des = 11).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map a raw OCR token to its canonical month.
    ///
    /// Accepts month numbers ("1".."12"), the canonical abbreviations, and the
    /// alternate/full spellings the source tables are known to carry. Tokens
    /// are lowercased with internal spaces and hyphens stripped before lookup.
    /// Anything unmapped is `None`; callers filter these out rather than fail.
    pub fn parse(raw: &str) -> Option<MonthToken> {
        let token: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| *c != ' ' && *c != '-')
            .collect();

        let month = match token.as_str() {
            "1" | "jan" | "jan." | "januari" => MonthToken::Jan,
            "2" | "peb" | "feb" | "februari" => MonthToken::Peb,
            "3" | "mar" | "maret" => MonthToken::Mar,
            "4" | "apr" | "april" => MonthToken::Apr,
            "5" | "mei" | "may" => MonthToken::Mei,
            "6" | "jun" | "juni" => MonthToken::Jun,
            "7" | "jul" | "juli" => MonthToken::Jul,
            "8" | "ags" | "agt" | "aug" | "agustus" => MonthToken::Ags,
            "9" | "sep" | "sept" | "september" => MonthToken::Sep,
            "10" | "okt" | "oct" | "oktober" => MonthToken::Okt,
            "11" | "nop" | "nov" | "november" => MonthToken::Nop,
            "12" | "des" | "dec" | "desember" => MonthToken::Des,
            _ => return None,
        };
        Some(month)
    }
}

impl fmt::Display for MonthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
