use crate::domain::model::{TextOutcome, TextStats};
use crate::utils::error::{Result, ToolError};

pub fn transform(text: &str, operation: &str) -> Result<TextOutcome> {
    let outcome = match operation {
        "uppercase" => plain(text.to_uppercase()),
        "lowercase" => plain(text.to_lowercase()),
        "titlecase" => plain(titlecase(text)),
        "reverse" => plain(text.chars().rev().collect()),
        "trim" => plain(text.trim().to_string()),
        "remove_extra_spaces" => plain(text.split_whitespace().collect::<Vec<_>>().join(" ")),
        "count" => TextOutcome {
            result: text.to_string(),
            stats: Some(count(text)),
        },
        other => {
            return Err(ToolError::UnknownOperation {
                operation: other.to_string(),
            })
        }
    };
    Ok(outcome)
}

fn plain(result: String) -> TextOutcome {
    TextOutcome {
        result,
        stats: None,
    }
}

/// 每段連續字母的第一個字母大寫，其餘小寫 ("it's" -> "It'S")
fn titlecase(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alphabetic = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if prev_alphabetic {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alphabetic = true;
        } else {
            out.push(ch);
            prev_alphabetic = false;
        }
    }
    out
}

fn count(text: &str) -> TextStats {
    TextStats {
        words: text.split_whitespace().count(),
        characters: text.chars().count(),
        // 只排除 ASCII 空格，不含 tab 或換行
        characters_no_space: text.chars().filter(|c| *c != ' ').count(),
        lines: text.lines().count(),
    }
}
