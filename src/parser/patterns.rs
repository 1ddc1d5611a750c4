//! 金额匹配模式

use crate::error::PatternError;
use regex::{Regex, RegexBuilder};
use std::sync::OnceLock;

/// 内置模式（按优先级排列）
///
/// 标签类 > 全角符号 > 半角符号 > 尾随"元"
const BUILTIN_PATTERNS: &[(&str, &str)] = &[
    // 金额：¥100.00
    ("金额", r"金额[：:]\s*¥?\s*([0-9,]+\.?[0-9]*)"),
    // 小写：¥100.00
    ("小写", r"小写[：:]\s*¥?\s*([0-9,]+\.?[0-9]*)"),
    // 合计：¥100.00
    ("合计", r"合计[：:]\s*¥?\s*([0-9,]+\.?[0-9]*)"),
    // 总计：¥100.00
    ("总计", r"总计[：:]\s*¥?\s*([0-9,]+\.?[0-9]*)"),
    // ￥100.00
    ("全角￥", r"￥\s*([0-9,]+\.?[0-9]*)"),
    // ¥100.00
    ("半角¥", r"¥\s*([0-9,]+\.?[0-9]*)"),
    // 100.00元
    ("元", r"([0-9,]+\.?[0-9]*)\s*元"),
];

static BUILTIN: OnceLock<AmountPatterns> = OnceLock::new();

/// 单个金额模式：标签 + 不区分大小写的正则
///
/// 第 1 个捕获组是数字部分。
#[derive(Debug, Clone)]
pub struct AmountPattern {
    label: String,
    regex: Regex,
}

impl AmountPattern {
    pub fn new(label: impl Into<String>, pattern: &str) -> Result<Self, PatternError> {
        let label = label.into();
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| PatternError::Invalid {
                label: label.clone(),
                source,
            })?;

        // captures_len 包含整体匹配 (组 0)
        if regex.captures_len() < 2 {
            return Err(PatternError::MissingCapture(label));
        }

        Ok(Self { label, regex })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 文本中所有匹配的数字捕获，按出现顺序
    pub fn captures<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

/// 有序、不可变的金额模式集合，顺序即优先级
#[derive(Debug, Clone)]
pub struct AmountPatterns {
    patterns: Vec<AmountPattern>,
}

impl AmountPatterns {
    /// 由 (标签, 正则) 列表构建
    pub fn new<'a, I>(patterns: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let patterns = patterns
            .into_iter()
            .map(|(label, pattern)| AmountPattern::new(label, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// 内置的七个模式
    pub fn builtin() -> &'static AmountPatterns {
        BUILTIN.get_or_init(|| {
            AmountPatterns::new(BUILTIN_PATTERNS.iter().copied())
                .expect("内置金额模式必须可编译")
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &AmountPattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for AmountPatterns {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
