//! Dutch (nl-NL) euro amounts: `€ 1.234,50`, with a no-break space after the sign.

const EURO_SIGN: &str = "€";
const SIGN_SEPARATOR: char = '\u{a0}';
const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

pub fn format_euro_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let euros = group_thousands(magnitude / 100);
    format!(
        "{EURO_SIGN}{SIGN_SEPARATOR}{sign}{euros}{DECIMAL_SEPARATOR}{:02}",
        magnitude % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts() {
        assert_eq!(format_euro_cents(0), "€\u{a0}0,00");
        assert_eq!(format_euro_cents(25), "€\u{a0}0,25");
        assert_eq!(format_euro_cents(175), "€\u{a0}1,75");
    }

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_euro_cents(123_450), "€\u{a0}1.234,50");
        assert_eq!(format_euro_cents(100_000_000), "€\u{a0}1.000.000,00");
        assert_eq!(format_euro_cents(99_999), "€\u{a0}999,99");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_euro_cents(-175), "€\u{a0}-1,75");
    }
}
