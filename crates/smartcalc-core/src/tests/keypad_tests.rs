#[cfg(test)]
mod keypad_tests {
    use crate::calculator::Operator;
    use crate::error::CalcError;
    use crate::keypad::{parse_keys, Key};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_digits_and_operators() {
        let keys = parse_keys("12.5 × 3 =").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Digit('1'),
                Key::Digit('2'),
                Key::Digit('.'),
                Key::Digit('5'),
                Key::Operator(Operator::Multiply),
                Key::Digit('3'),
                Key::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_ascii_operator_aliases() {
        let keys = parse_keys("*x/÷-+").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::Operator(Operator::Multiply),
                Key::Operator(Operator::Multiply),
                Key::Operator(Operator::Divide),
                Key::Operator(Operator::Divide),
                Key::Operator(Operator::Subtract),
                Key::Operator(Operator::Add),
            ]
        );
    }

    #[test]
    fn test_parse_function_keys() {
        assert_eq!(
            parse_keys("AC c % +/- ± n").unwrap(),
            vec![
                Key::Clear,
                Key::Clear,
                Key::Percent,
                Key::ToggleSign,
                Key::ToggleSign,
                Key::ToggleSign,
            ]
        );
    }

    #[test]
    fn test_parse_unknown_key() {
        assert_eq!(parse_keys("2^3"), Err(CalcError::UnknownKey('^')));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Key::ToggleSign.label(), "+/-");
        assert_eq!(Key::Clear.label(), "AC");
    }
}
