//! InvoicePilot Lite - 读取PDF发票金额并自动重命名的工具
//!
//! # 功能
//! - 扫描目录中的PDF发票（不递归）
//! - 从PDF文本中按优先级匹配金额（金额/小写/合计/总计 > ￥ > ¥ > 元）
//! - 重命名为 `<金额>元_发票.pdf`，重名时追加 `_1`、`_2` …

pub mod cli;
pub mod console;
pub mod error;
pub mod parser;
pub mod pdf;
pub mod renamer;

pub use error::{PatternError, ProcessError};
pub use parser::{resolve_amount, resolve_name, Amount, AmountPatterns, AmountResolution};
pub use renamer::{BatchSummary, InvoiceRenamer, ProcessResult};
