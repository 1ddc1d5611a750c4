//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 单个发票文件处理失败的原因
///
/// 所有变体都只影响当前文件，批处理会记录后继续下一个文件。
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("文件不存在: {}", .0.display())]
    FileMissing(PathBuf),

    #[error("不是PDF文件: {}", .0.display())]
    NotAPdf(PathBuf),

    #[error("读取PDF文件时出错: {name}: {reason}")]
    Extraction { name: String, reason: String },

    #[error("无法从PDF中提取文本: {0}")]
    EmptyText(String),

    #[error("无法从PDF中提取金额: {0}")]
    NoAmountFound(String),

    #[error("重命名文件时出错: {name} -> {target}: {source}")]
    Rename {
        name: String,
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// 金额匹配模式配置错误
#[derive(Debug, Error)]
pub enum PatternError {
    #[error("无效的金额匹配模式 `{label}`: {source}")]
    Invalid {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("金额匹配模式 `{0}` 缺少数字捕获组")]
    MissingCapture(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_file() {
        let err = ProcessError::NoAmountFound("b.pdf".to_string());
        assert_eq!(err.to_string(), "无法从PDF中提取金额: b.pdf");

        let err = ProcessError::NotAPdf(PathBuf::from("notes.txt"));
        assert_eq!(err.to_string(), "不是PDF文件: notes.txt");
    }

    #[test]
    fn rename_error_keeps_io_source() {
        use std::error::Error as _;

        let err = ProcessError::Rename {
            name: "a.pdf".to_string(),
            target: "1.00元_发票.pdf".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("重命名文件时出错: a.pdf -> 1.00元_发票.pdf"));
    }
}
