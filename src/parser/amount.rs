//! 金额值

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use std::fmt;
use std::str::FromStr;

/// 从发票文本中解析出的金额（严格大于零）
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(BigDecimal);

impl Amount {
    /// 解析捕获到的数字串
    ///
    /// 千分位逗号会先被移除。无法解析或不大于零时返回 `None`。
    pub fn parse(raw: &str) -> Option<Self> {
        let digits = raw.replace(',', "");
        let value = BigDecimal::from_str(&digits).ok()?;
        if value > BigDecimal::zero() {
            Some(Self(value))
        } else {
            None
        }
    }

    /// 保留两位小数（银行家舍入）
    pub fn formatted(&self) -> String {
        let rounded = self.0.with_scale_round(2, RoundingMode::HalfEven).to_string();

        // 舍入为零时小数位会丢失
        match rounded.split_once('.') {
            Some((int, frac)) => format!("{}.{:0<2}", int, frac),
            None => format!("{}.00", rounded),
        }
    }

    pub fn value(&self) -> &BigDecimal {
        &self.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
