//! 目标文件名生成

use super::Amount;
use std::path::Path;

/// 新文件名的固定后缀
pub const INVOICE_SUFFIX: &str = "元_发票";

/// 基础文件名: `<金额>元_发票.pdf`
pub fn invoice_filename(amount: &Amount) -> String {
    format!("{}{}.pdf", amount.formatted(), INVOICE_SUFFIX)
}

/// 为金额生成目录内唯一的文件名
///
/// `existing_name` 是待重命名文件当前的名字；与它相同的候选名视为可用，
/// 这样已经按金额命名的文件再次处理时不会被改成 `_1`。
pub fn resolve_name(amount: &Amount, directory: &Path, existing_name: &str) -> String {
    get_unique_filename(directory, &invoice_filename(amount), Some(existing_name))
}

/// 获取唯一文件名（同名文件存在时追加 `_N`，N 从 1 开始）
pub fn get_unique_filename(directory: &Path, filename: &str, current: Option<&str>) -> String {
    let path = Path::new(filename);
    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or(filename);
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("pdf");

    let is_taken = |name: &str| current != Some(name) && directory.join(name).exists();

    let mut final_name = filename.to_string();
    let mut counter = 1;

    while is_taken(&final_name) {
        final_name = format!("{}_{}.{}", stem, counter, ext);
        counter += 1;
    }

    final_name
}
