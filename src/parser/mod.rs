//! 文本解析模块 - 发票金额提取与文件名生成

mod amount;
mod filename;
mod patterns;

pub use amount::Amount;
pub use filename::{get_unique_filename, invoice_filename, resolve_name, INVOICE_SUFFIX};
pub use patterns::{AmountPattern, AmountPatterns};

use tracing::debug;

/// 金额解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountResolution {
    Found(Amount),
    NotFound,
}

impl AmountResolution {
    pub fn amount(&self) -> Option<&Amount> {
        match self {
            Self::Found(amount) => Some(amount),
            Self::NotFound => None,
        }
    }
}

/// 从文本中提取金额
///
/// 按优先级依次尝试各模式；同一模式内从最后一个匹配往前找，
/// 第一个大于零的值即为结果。全部失败时返回 `NotFound`。
pub fn resolve_amount(text: &str, patterns: &AmountPatterns) -> AmountResolution {
    let text = normalize_whitespace(text);

    for pattern in patterns.iter() {
        // 合计通常出现在明细之后，所以取最后一个
        for raw in pattern.captures(&text).into_iter().rev() {
            match Amount::parse(raw) {
                Some(amount) => {
                    debug!(pattern = pattern.label(), raw, %amount, "金额匹配");
                    return AmountResolution::Found(amount);
                }
                None => debug!(pattern = pattern.label(), raw, "跳过无效金额"),
            }
        }
    }

    AmountResolution::NotFound
}

/// 连续空白（含换行）压缩为单个空格并去除首尾空白
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
