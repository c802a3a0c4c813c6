use sdk::*;
use sdk::anyhow::anyhow;

lazy_static! {
    // Each name is kept on both sides of its digit so overlapping names ("eightwo") survive
    // every later replacement.
    static ref SPELLED_DIGITS: Vec<(&'static str, String)> = [
        "zero",
        "one",
        "two",
        "three",
        "four",
        "five",
        "six",
        "seven",
        "eight",
        "nine",
    ]
        .into_iter()
        .enumerate()
        .map(|(digit, name)| (name, format!("{name}{digit}{name}")))
        .collect();
}

fn main() -> Result<()> {
    run(
        env!("CARGO_MANIFEST_DIR"),
        Ok,
        |lines: &Vec<String>| calibration_sum(lines),
        |lines: &Vec<String>| spelled_calibration_sum(lines),
    )
}

fn calibration_sum(lines: &[String]) -> Result<usize> {
    let mut sum = 0;
    for line in lines {
        sum += calibration_value(line)?;
    }
    Ok(sum)
}

fn spelled_calibration_sum(lines: &[String]) -> Result<usize> {
    let mut sum = 0;
    for line in lines {
        let replaced = replace_words(line);
        trace!("Replaced {line} with {replaced}");
        sum += calibration_value(&replaced)?;
    }
    Ok(sum)
}

fn calibration_value(line: &str) -> Result<usize> {
    let (a, b) = extract_digits(line).ok_or(anyhow!("Unable to extract digits from `{line}`"))?;
    let value: usize = [a, b].into_iter().collect::<String>().parse()?;
    trace!("Calibration for {line}: {value}");
    Ok(value)
}

fn replace_words(s: &str) -> String {
    SPELLED_DIGITS
        .iter()
        .fold(s.to_owned(), |s, (name, replacement)| s.replace(name, replacement))
}

fn extract_digits(text: &str) -> Option<(char, char)> {
    let digits: Vec<_> = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.first().copied().zip(digits.last().copied())
}

#[cfg(test)]
mod tests {
    use sdk::init;
    use crate::{calibration_sum, calibration_value, extract_digits, replace_words, spelled_calibration_sum};

    fn lines(input: &str) -> Vec<String> {
        input.lines().map(str::to_owned).collect()
    }

    #[test]
    fn digits() {
        init();
        let cases = [
            ("12", '1', '2'),
            ("sdlfk3abc4sdbp", '3', '4'),
            ("1234f5", '1', '5'),
            ("stuff6stuff1", '6', '1'),
            ("stuff7stuff", '7', '7'),
        ];
        for (case, expected_a, expected_b) in cases {
            let (a, b) = extract_digits(case).unwrap();
            assert_eq!(expected_a, a);
            assert_eq!(expected_b, b);
        }
    }

    #[test]
    fn calibration_values() {
        let cases = [
            ("1abc2", 12),
            ("pqr3stu8vwx", 38),
            ("a1b2c3d4e5f", 15),
            ("treb7uchet", 77),
        ];
        for (case, expected) in cases {
            assert_eq!(expected, calibration_value(case).unwrap());
        }
    }

    #[test]
    fn no_digits_is_an_error() {
        let err = calibration_value("trebuchet").unwrap_err();
        assert!(err.to_string().contains("trebuchet"));
        assert!(calibration_sum(&lines("1abc2\nnothing")).is_err());
    }

    #[test]
    fn replace() {
        let cases = [
            ("two1nine", 29),
            ("eightwothree", 83),
            ("abcone2threexyz", 13),
            ("xtwone3four", 24),
            ("4nineeightseven2", 42),
            ("zoneight234", 14),
            ("7pqrstsixteen", 76),
            ("eightwo", 82),
            ("zero5", 5),
        ];
        for (case, expected) in cases {
            assert_eq!(expected, calibration_value(&replace_words(case)).unwrap(), "{case}");
        }
    }

    #[test]
    fn replace_keeps_words() {
        assert_eq!("eight8eightwo2two", replace_words("eightwo"));
        assert_eq!("x12y", replace_words("x12y"));
    }

    #[test]
    fn example_sums() {
        let first = lines("1abc2\npqr3stu8vwx\na1b2c3d4e5f\ntreb7uchet");
        assert_eq!(142, calibration_sum(&first).unwrap());

        let second = lines(
            "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n4nineeightseven2\nzoneight234\n7pqrstsixteen",
        );
        assert_eq!(281, spelled_calibration_sum(&second).unwrap());
        assert_eq!(281, spelled_calibration_sum(&second).unwrap());
    }
}
