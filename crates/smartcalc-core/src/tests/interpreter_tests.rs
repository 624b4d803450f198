#[cfg(test)]
mod interpreter_tests {
    use crate::calculator::{CalculatorState, Operator};
    use crate::interpreter::{has_import, interpret, ImportAction};
    use pretty_assertions::assert_eq;

    fn pair(left: &str, operator: Operator, right: &str) -> ImportAction {
        ImportAction::StagePair {
            left: left.to_string(),
            operator,
            right: right.to_string(),
        }
    }

    #[test]
    fn test_binary_expression_in_arabic_prose() {
        assert_eq!(interpret("النتيجة هي 5 + 3"), Some(pair("5", Operator::Add, "3")));
    }

    #[test]
    fn test_bare_number_fallback() {
        assert_eq!(
            interpret("القيمة هي -42.5 فقط"),
            Some(ImportAction::SetCurrent("-42.5".to_string()))
        );
    }

    #[test]
    fn test_no_digits_offers_nothing() {
        assert_eq!(interpret("لا توجد أرقام هنا"), None);
        assert_eq!(interpret(""), None);
        assert!(!has_import("no numbers at all"));
    }

    #[test]
    fn test_ascii_operators_are_mapped() {
        assert_eq!(interpret("3*4"), Some(pair("3", Operator::Multiply, "4")));
        assert_eq!(interpret("10 / 2.5"), Some(pair("10", Operator::Divide, "2.5")));
        assert_eq!(interpret("7 × -2"), Some(pair("7", Operator::Multiply, "-2")));
        assert_eq!(interpret("9 ÷ 3"), Some(pair("9", Operator::Divide, "3")));
    }

    #[test]
    fn test_first_expression_wins() {
        assert_eq!(
            interpret("first 1 + 2, then 3 - 4"),
            Some(pair("1", Operator::Add, "2"))
        );
    }

    #[test]
    fn test_signed_operands() {
        assert_eq!(interpret("-6 - -2"), Some(pair("-6", Operator::Subtract, "-2")));
        assert_eq!(interpret("5 -3"), Some(pair("5", Operator::Subtract, "3")));
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        // Arabic-Indic digits are not scraped
        assert_eq!(interpret("٥ + ٣"), None);
    }

    #[test]
    fn test_apply_stage_pair_does_not_evaluate() {
        let mut state = CalculatorState::new();
        interpret("answer: 12 * 3").unwrap().apply(&mut state);
        assert_eq!(state.previous_input(), Some("12"));
        assert_eq!(state.operator(), Some(Operator::Multiply));
        assert_eq!(state.current_input(), "3");
    }

    #[test]
    fn test_apply_set_current_keeps_pending_pair() {
        let mut state = CalculatorState::new();
        state.stage("2", Operator::Add, "0");
        interpret("about 86400 seconds").unwrap().apply(&mut state);
        assert_eq!(state.current_input(), "86400");
        assert_eq!(state.previous_input(), Some("2"));
    }

    #[test]
    fn test_has_import_agrees_with_interpret() {
        for text in ["5 + 3", "x = 42", "no digits", "", "-0.5", "٣"] {
            assert_eq!(has_import(text), interpret(text).is_some(), "{}", text);
        }
    }

    #[test]
    fn test_describe() {
        assert_eq!(pair("5", Operator::Add, "3").describe(), "5 + 3");
        assert_eq!(ImportAction::SetCurrent("-1".to_string()).describe(), "-1");
    }
}
