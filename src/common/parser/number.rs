use nom::combinator::all_consuming;
use nom::number::complete::double;

use super::result::{IResult, Span};

pub fn number_literal(input: Span) -> IResult<f64> {
    let (rest, n) = double(input)?;
    Ok((rest, n))
}

/// Total coercion from a trimmed field value to a number.
///
/// Accepted: an optional sign, integer and decimal literals with an optional
/// exponent, and the IEEE `inf` spellings; `nan` is rejected. Anything
/// carrying leading or trailing characters outside the grammar is rejected
/// as a whole, so `"12s"` or `"0x10"` never half-parse.
pub fn parse_number(value: &str) -> Option<f64> {
    match all_consuming(number_literal)(Span::new(value)) {
        Ok((_, n)) if !n.is_nan() => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_accepted() {
        let tests = [
            ("1", 1.0),
            ("007", 7.0),
            ("1.", 1.0),
            (".5", 0.5),
            ("-3.25", -3.25),
            ("2e-5", 0.00002),
            ("+12", 12.0),
            ("Inf", f64::INFINITY),
        ];

        for (input, expected) in &tests {
            let actual = parse_number(input);
            assert_eq!(Some(*expected), actual, "while parsing {}", input);
        }
    }

    #[test]
    fn test_parse_number_rejected() {
        for input in &["", "abc", "12s", "1 2", "0x10", "12.3.4", "--1", "1,5", "NaN"] {
            assert_eq!(None, parse_number(input), "while parsing {:?}", input);
        }
    }
}
