//! PDF处理模块 - 从PDF中提取文本

use anyhow::{anyhow, Context, Result};
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use tracing::debug;

/// 文本提取器
///
/// 返回所有页面拼接后的文本。批处理只依赖这个接口，测试中可以替换。
pub trait TextExtractor {
    fn extract_text(&self, pdf_path: &Path) -> Result<String>;
}

/// 基于 `pdf-extract` 的提取器（只处理文本型PDF，不做OCR）
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract_text(&self, pdf_path: &Path) -> Result<String> {
        let bytes = std::fs::read(pdf_path)
            .with_context(|| format!("PDF文件读取失败: {:?}", pdf_path))?;

        // pdf-extract 遇到损坏的文件可能 panic
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&bytes)
        }))
        .map_err(|_| anyhow!("PDF解析异常终止"))?
        .map_err(|e| anyhow!("PDF文本提取失败: {}", e))?;

        debug!(path = ?pdf_path, chars = extracted.chars().count(), "文本提取完成");
        Ok(extracted)
    }
}
