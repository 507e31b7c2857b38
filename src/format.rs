pub const DECIMALS: usize = 6;

/// Fixed six decimals, integer part grouped in thousands with `,`.
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.*}", DECIMALS, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

#[cfg(test)]
mod test {
    use super::format_number;

    #[test]
    fn six_decimals() {
        assert_eq!(format_number(0.0), "0.000000");
        assert_eq!(format_number(60.32), "60.320000");
        assert_eq!(format_number(572.026844746915), "572.026845");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(1657.0), "1,657.000000");
        assert_eq!(format_number(1234567.5), "1,234,567.500000");
        assert_eq!(format_number(-98765.4321), "-98,765.432100");
        assert_eq!(format_number(100.0), "100.000000");
    }
}
