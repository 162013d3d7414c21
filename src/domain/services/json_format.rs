use crate::utils::error::{Result, ToolError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// 解析輸入 JSON 再以指定縮排寬度重新輸出；物件鍵保留插入順序
pub fn format_json(input: &str, indent: usize) -> Result<String> {
    let value: serde_json::Value =
        serde_json::from_str(input).map_err(|e| ToolError::InvalidJsonInput {
            message: e.to_string(),
        })?;

    let indent_bytes = vec![b' '; indent];
    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(&indent_bytes);
    let mut serializer = Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&out).into_owned())
}
