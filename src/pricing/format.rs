//! Text forms of the numbers shown on the page.

/// How an animated number is written into its element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueFormat {
    /// Bare integer, e.g. `59`.
    Plain,
    /// Dollar amount with thousands separators, e.g. `$1,240`.
    Currency,
}

impl ValueFormat {
    pub fn render(self, value: i64) -> String {
        match self {
            ValueFormat::Plain => value.to_string(),
            ValueFormat::Currency => format_currency(value),
        }
    }
}

pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_currency(value: i64) -> String {
    format!("${}", format_thousands(value))
}

pub fn format_storage(gb: u32) -> String {
    format!("{} GB", gb)
}

pub fn format_yearly_savings(amount: i64) -> String {
    format!("Save ${}/year", amount)
}

/// Reads the number currently shown in an element. Currency symbols,
/// separators and trailing units are ignored; anything without leading
/// digits reads as 0.
pub fn parse_display_value(text: &str) -> i64 {
    let cleaned: String = text
        .chars()
        .filter(|c| !matches!(c, '$' | ',') && !c.is_whitespace())
        .collect();

    let (negative, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<i64>() {
        Ok(v) if negative => -v,
        Ok(v) => v,
        Err(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(50_000), "50,000");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
        assert_eq!(format_thousands(-12_345), "-12,345");
    }

    #[test]
    fn value_formats() {
        assert_eq!(ValueFormat::Plain.render(1460), "1460");
        assert_eq!(ValueFormat::Currency.render(1460), "$1,460");
        assert_eq!(format_storage(100), "100 GB");
        assert_eq!(format_yearly_savings(72), "Save $72/year");
    }

    #[test]
    fn parses_what_was_rendered() {
        assert_eq!(parse_display_value("59"), 59);
        assert_eq!(parse_display_value("$1,460"), 1460);
        assert_eq!(parse_display_value(" $140 "), 140);
        assert_eq!(parse_display_value("23/mo"), 23);
    }

    #[test]
    fn unparseable_text_reads_as_zero() {
        assert_eq!(parse_display_value(""), 0);
        assert_eq!(parse_display_value("$"), 0);
        assert_eq!(parse_display_value("free"), 0);
        assert_eq!(parse_display_value("-"), 0);
    }
}
