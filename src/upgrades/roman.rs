//! Roman numerals for upgrade levels
//!
//! Covers the additive tens-and-ones patterns only. Every ten above the
//! first is another `X`, so 40 renders as `XXXX`; levels are expected to
//! stay small.

/// Numeral for `level`; 0 yields an empty string
pub fn roman_numerals(level: u32) -> String {
    let mut numerals = String::new();
    let mut remaining = level;

    while remaining > 10 {
        numerals.push('X');
        remaining -= 10;
    }

    numerals.push_str(match remaining {
        1 => "I",
        2 => "II",
        3 => "III",
        4 => "IV",
        5 => "V",
        6 => "VI",
        7 => "VII",
        8 => "VIII",
        9 => "IX",
        10 => "X",
        _ => "",
    });
    numerals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_levels() {
        assert_eq!(roman_numerals(1), "I");
        assert_eq!(roman_numerals(3), "III");
        assert_eq!(roman_numerals(4), "IV");
        assert_eq!(roman_numerals(5), "V");
        assert_eq!(roman_numerals(8), "VIII");
        assert_eq!(roman_numerals(9), "IX");
        assert_eq!(roman_numerals(10), "X");
    }

    #[test]
    fn test_levels_above_ten() {
        assert_eq!(roman_numerals(12), "XII");
        assert_eq!(roman_numerals(19), "XIX");
        assert_eq!(roman_numerals(20), "XX");
    }

    #[test]
    fn test_forty_degenerates_to_repeated_tens() {
        assert_eq!(roman_numerals(40), "XXXX");
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(roman_numerals(0), "");
    }
}
