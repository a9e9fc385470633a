//! IEC (base-1024) size strings, as read and written by `numfmt --from=iec` / `--to=iec`

use once_cell::sync::Lazy;
use regex::Regex;

static IEC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9.]+)([KMGTPEZYRQ]?)(i?)").expect("IEC pattern is valid"));

const IEC_BASE: f64 = 1024.0;

/// Binary magnitude prefixes, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IecUnit {
    Kilo,
    Mega,
    Giga,
    Tera,
    Peta,
    Exa,
    Zetta,
    Yotta,
    Ronna,
    Quetta,
}

impl IecUnit {
    pub const ALL: [IecUnit; 10] = [
        IecUnit::Kilo,
        IecUnit::Mega,
        IecUnit::Giga,
        IecUnit::Tera,
        IecUnit::Peta,
        IecUnit::Exa,
        IecUnit::Zetta,
        IecUnit::Yotta,
        IecUnit::Ronna,
        IecUnit::Quetta,
    ];

    /// Parse a multiplier letter, ignoring case
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'K' => Some(IecUnit::Kilo),
            'M' => Some(IecUnit::Mega),
            'G' => Some(IecUnit::Giga),
            'T' => Some(IecUnit::Tera),
            'P' => Some(IecUnit::Peta),
            'E' => Some(IecUnit::Exa),
            'Z' => Some(IecUnit::Zetta),
            'Y' => Some(IecUnit::Yotta),
            'R' => Some(IecUnit::Ronna),
            'Q' => Some(IecUnit::Quetta),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            IecUnit::Kilo => 'K',
            IecUnit::Mega => 'M',
            IecUnit::Giga => 'G',
            IecUnit::Tera => 'T',
            IecUnit::Peta => 'P',
            IecUnit::Exa => 'E',
            IecUnit::Zetta => 'Z',
            IecUnit::Yotta => 'Y',
            IecUnit::Ronna => 'R',
            IecUnit::Quetta => 'Q',
        }
    }

    /// Power of 1024 this prefix stands for (K = 1, Q = 10)
    pub fn rank(&self) -> i32 {
        *self as i32 + 1
    }

    pub fn factor(&self) -> f64 {
        IEC_BASE.powi(self.rank())
    }
}

/// Convert an IEC size string such as `100M` or `2.5Gi` to a number
///
/// The first `<number>[unit][i]` run found in the input is used. Input with
/// no digits yields `0`.
///
/// # Examples
/// ```
/// use edgekit::utils::size::iec_to_num;
/// assert_eq!(iec_to_num("100M"), 104_857_600.0);
/// assert_eq!(iec_to_num("1k"), 1024.0);
/// assert_eq!(iec_to_num("bogus"), 0.0);
/// ```
pub fn iec_to_num(value: &str) -> f64 {
    let Some(captures) = IEC_PATTERN.captures(value) else {
        return 0.0;
    };

    let magnitude = parse_magnitude(&captures[1]);
    let factor = captures[2]
        .chars()
        .next()
        .and_then(IecUnit::from_letter)
        .map_or(1.0, |unit| unit.factor());

    magnitude * factor
}

/// Read the leading decimal number out of a run of digits and dots
///
/// `1.2.3` reads as `1.2`; a run without digits reads as `0`.
fn parse_magnitude(run: &str) -> f64 {
    let integer_len = run.bytes().take_while(u8::is_ascii_digit).count();
    let mut end = integer_len;

    if run[end..].starts_with('.') {
        let fraction_len = run[end + 1..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count();
        if integer_len > 0 || fraction_len > 0 {
            end += 1 + fraction_len;
        }
    }

    run[..end].parse::<f64>().unwrap_or(0.0)
}

/// Format a byte count with the largest IEC prefix that keeps it at or above one
///
/// Values under 10 units keep one decimal, rounded away from zero the way
/// `numfmt --to=iec` does.
///
/// # Examples
/// ```
/// use edgekit::utils::size::num_to_iec;
/// assert_eq!(num_to_iec(1024.0), "1.0K");
/// assert_eq!(num_to_iec(104_857_600.0), "100M");
/// assert_eq!(num_to_iec(512.0), "512");
/// ```
pub fn num_to_iec(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude < IEC_BASE {
        return format!("{}{}", sign, magnitude.ceil());
    }

    let mut index = IecUnit::ALL
        .iter()
        .rposition(|unit| magnitude >= unit.factor())
        .unwrap_or(0);

    loop {
        let unit = IecUnit::ALL[index];
        let scaled = magnitude / unit.factor();
        let (rounded, text) = if scaled < 10.0 {
            let rounded = (scaled * 10.0).ceil() / 10.0;
            (rounded, format!("{:.1}", rounded))
        } else {
            let rounded = scaled.ceil();
            (rounded, format!("{}", rounded))
        };

        if rounded >= IEC_BASE && index + 1 < IecUnit::ALL.len() {
            index += 1;
            continue;
        }

        return format!("{}{}{}", sign, text, unit.letter());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iec_to_num_units() {
        assert_eq!(iec_to_num("1K"), 1024.0);
        assert_eq!(iec_to_num("100M"), 104_857_600.0);
        assert_eq!(iec_to_num("2.5G"), 2.5 * 1024f64.powi(3));
        assert_eq!(iec_to_num("1Q"), 1024f64.powi(10));
        assert_eq!(iec_to_num("42"), 42.0);
    }

    #[test]
    fn test_iec_to_num_is_case_insensitive_and_accepts_i_suffix() {
        assert_eq!(iec_to_num("1m"), 1024.0 * 1024.0);
        assert_eq!(iec_to_num("2.5Gi"), 2.5 * 1024f64.powi(3));
        assert_eq!(iec_to_num("3ki"), 3.0 * 1024.0);
    }

    #[test]
    fn test_iec_to_num_malformed_input() {
        assert_eq!(iec_to_num("bogus"), 0.0);
        assert_eq!(iec_to_num(""), 0.0);
        assert_eq!(iec_to_num("."), 0.0);
        assert_eq!(iec_to_num("K"), 0.0);
    }

    #[test]
    fn test_iec_to_num_uses_first_numeric_run() {
        assert_eq!(iec_to_num("size=4K"), 4096.0);
        assert_eq!(iec_to_num("1.2.3M"), 1.2 * 1024.0 * 1024.0);
        assert_eq!(iec_to_num(".5K"), 512.0);
        assert_eq!(iec_to_num("10 M"), 10.0);
        assert_eq!(iec_to_num("10X"), 10.0);
    }

    #[test]
    fn test_iec_unit_letters() {
        for unit in IecUnit::ALL {
            assert_eq!(IecUnit::from_letter(unit.letter()), Some(unit));
            assert_eq!(
                IecUnit::from_letter(unit.letter().to_ascii_lowercase()),
                Some(unit)
            );
        }
        assert_eq!(IecUnit::from_letter('X'), None);
        assert_eq!(IecUnit::Kilo.rank(), 1);
        assert_eq!(IecUnit::Quetta.rank(), 10);
    }

    #[test]
    fn test_num_to_iec() {
        assert_eq!(num_to_iec(0.0), "0");
        assert_eq!(num_to_iec(1023.0), "1023");
        assert_eq!(num_to_iec(1024.0), "1.0K");
        assert_eq!(num_to_iec(1025.0), "1.1K");
        assert_eq!(num_to_iec(1536.0), "1.5K");
        assert_eq!(num_to_iec(10240.0), "10K");
        assert_eq!(num_to_iec(104_857_600.0), "100M");
        assert_eq!(num_to_iec(-2048.0), "-2.0K");
    }

    #[test]
    fn test_num_to_iec_rounds_into_next_unit() {
        // 1023.5K rounds up to 1024K, which is shown as 1.0M
        assert_eq!(num_to_iec(1023.5 * 1024.0), "1.0M");
    }
}
