use crate::utils::error::{Result, ToolError};

/// 四則運算；運算子接受文字或符號別名
pub fn calculate(operand1: f64, operand2: f64, operator: &str) -> Result<f64> {
    match operator {
        "add" | "+" => Ok(operand1 + operand2),
        "subtract" | "-" => Ok(operand1 - operand2),
        "multiply" | "*" | "x" | "×" => Ok(operand1 * operand2),
        "divide" | "/" | "÷" => {
            if operand2 == 0.0 {
                Err(ToolError::DivisionByZero)
            } else {
                Ok(operand1 / operand2)
            }
        }
        other => Err(ToolError::UnknownOperator {
            operator: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(calculate(2.0, 3.0, "add").unwrap(), 5.0);
        assert_eq!(calculate(10.0, 4.0, "subtract").unwrap(), 6.0);
        assert_eq!(calculate(6.0, 7.0, "multiply").unwrap(), 42.0);
        assert_eq!(calculate(15.0, 4.0, "divide").unwrap(), 3.75);
    }

    #[test]
    fn test_symbol_aliases() {
        assert_eq!(calculate(2.0, 3.0, "+").unwrap(), 5.0);
        assert_eq!(calculate(2.0, 3.0, "-").unwrap(), -1.0);
        assert_eq!(calculate(2.0, 3.0, "*").unwrap(), 6.0);
        assert_eq!(calculate(2.0, 3.0, "x").unwrap(), 6.0);
        assert_eq!(calculate(2.0, 3.0, "×").unwrap(), 6.0);
        assert_eq!(calculate(9.0, 3.0, "/").unwrap(), 3.0);
        assert_eq!(calculate(9.0, 3.0, "÷").unwrap(), 3.0);
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let err = calculate(5.0, 0.0, "divide").unwrap_err();
        assert!(matches!(err, ToolError::DivisionByZero));
        // 負零也一樣
        assert!(calculate(5.0, -0.0, "/").is_err());
    }

    #[test]
    fn test_unknown_operator_is_rejected() {
        let err = calculate(1.0, 2.0, "modulo").unwrap_err();
        assert!(matches!(err, ToolError::UnknownOperator { .. }));
    }

    #[test]
    fn test_negative_and_fractional_operands() {
        assert_eq!(calculate(-2.5, 1.5, "add").unwrap(), -1.0);
        assert_eq!(calculate(0.1, 0.2, "multiply").unwrap(), 0.1 * 0.2);
    }
}
