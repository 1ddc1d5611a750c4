//! 发票重命名 - 目录扫描与逐个文件处理

use crate::console;
use crate::error::ProcessError;
use crate::parser::{resolve_amount, resolve_name, Amount, AmountPatterns, AmountResolution};
use crate::pdf::TextExtractor;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// 重命名成功后的信息
#[derive(Debug, Clone)]
pub struct RenamedInvoice {
    /// 新文件名（与原文件同一目录）
    pub new_name: String,
    /// 解析出的金额
    pub amount: Amount,
}

/// 处理结果
#[derive(Debug)]
pub struct ProcessResult {
    /// 原文件名
    pub original: String,
    /// 成功时的新名称，或失败原因
    pub outcome: Result<RenamedInvoice, ProcessError>,
}

impl ProcessResult {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// 一次目录处理的汇总
#[derive(Debug)]
pub struct BatchSummary {
    /// 扫描的目录
    pub directory: PathBuf,
    /// 按处理顺序排列的逐个文件结果
    pub results: Vec<ProcessResult>,
}

impl BatchSummary {
    pub fn success_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.results.len() - self.success_count()
    }
}

/// 发票处理器
pub struct InvoiceRenamer<E> {
    extractor: E,
    patterns: AmountPatterns,
}

impl<E: TextExtractor> InvoiceRenamer<E> {
    pub fn new(extractor: E, patterns: AmountPatterns) -> Self {
        if patterns.is_empty() {
            warn!("金额匹配模式为空，所有文件都将无法提取金额");
        } else {
            debug!(count = patterns.len(), "加载金额匹配模式");
        }

        Self {
            extractor,
            patterns,
        }
    }

    /// 处理目录中的所有PDF发票
    ///
    /// 单个文件的失败只记入结果；只有目录本身无法读取时返回错误。
    pub fn process_directory(&self, directory: &Path) -> Result<BatchSummary> {
        console::print_scanning(directory);

        let pdf_files = find_pdf_files(directory)?;
        info!(directory = ?directory, count = pdf_files.len(), "扫描完成");

        if pdf_files.is_empty() {
            console::print_no_pdfs();
            return Ok(BatchSummary {
                directory: directory.to_path_buf(),
                results: Vec::new(),
            });
        }

        console::print_file_list(&pdf_files);

        let mut results = Vec::with_capacity(pdf_files.len());
        for pdf_path in &pdf_files {
            let original = file_name_of(pdf_path);
            let span = tracing::info_span!("invoice", file = %original);
            let _guard = span.enter();

            console::print_processing(&original);
            let outcome = self.process_invoice(pdf_path);
            match &outcome {
                Ok(renamed) => {
                    info!(amount = %renamed.amount, new_name = %renamed.new_name, "重命名成功")
                }
                Err(e) => warn!(error = %e, "处理失败"),
            }

            let result = ProcessResult { original, outcome };
            console::print_result(&result);
            results.push(result);
        }

        let summary = BatchSummary {
            directory: directory.to_path_buf(),
            results,
        };
        console::print_summary(&summary);

        Ok(summary)
    }

    /// 处理单个发票文件：提取文本 → 解析金额 → 重命名
    pub fn process_invoice(&self, pdf_path: &Path) -> Result<RenamedInvoice, ProcessError> {
        if !pdf_path.exists() {
            return Err(ProcessError::FileMissing(pdf_path.to_path_buf()));
        }

        if !is_pdf(pdf_path) {
            return Err(ProcessError::NotAPdf(pdf_path.to_path_buf()));
        }

        let original = file_name_of(pdf_path);

        let text = self
            .extractor
            .extract_text(pdf_path)
            .map_err(|e| ProcessError::Extraction {
                name: original.clone(),
                reason: format!("{:#}", e),
            })?;

        if text.trim().is_empty() {
            return Err(ProcessError::EmptyText(original));
        }

        let AmountResolution::Found(amount) = resolve_amount(&text, &self.patterns) else {
            return Err(ProcessError::NoAmountFound(original));
        };

        // 与原文件同一目录
        let directory = pdf_path.parent().unwrap_or(Path::new("."));
        let new_name = resolve_name(&amount, directory, &original);

        if new_name != original {
            let new_path = directory.join(&new_name);
            fs::rename(pdf_path, &new_path).map_err(|source| ProcessError::Rename {
                name: original.clone(),
                target: new_name.clone(),
                source,
            })?;
        }

        Ok(RenamedInvoice { new_name, amount })
    }
}

/// 目录中的PDF文件（不递归，扩展名不区分大小写，按文件名排序）
pub fn find_pdf_files(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(directory)
        .with_context(|| format!("无法读取目录: {:?}", directory))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("无法读取目录项: {:?}", directory))?;
        let path = entry.path();
        if path.is_file() && is_pdf(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_pdf(path: &Path) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown.pdf".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    /// 按文件名返回预设文本
    struct FakeExtractor(HashMap<&'static str, &'static str>);

    impl TextExtractor for FakeExtractor {
        fn extract_text(&self, pdf_path: &Path) -> Result<String> {
            let name = pdf_path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            match self.0.get(name) {
                Some(text) => Ok(text.to_string()),
                None => anyhow::bail!("no fixture for {}", name),
            }
        }
    }

    fn renamer(fixtures: &[(&'static str, &'static str)]) -> InvoiceRenamer<FakeExtractor> {
        InvoiceRenamer::new(
            FakeExtractor(fixtures.iter().copied().collect()),
            AmountPatterns::default(),
        )
    }

    #[test]
    fn finds_pdfs_case_insensitively_and_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["b.PDF", "a.pdf", "notes.txt", "c.Pdf"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("nested.pdf")).unwrap();

        let names: Vec<String> = find_pdf_files(dir.path())
            .unwrap()
            .iter()
            .map(|p| file_name_of(p))
            .collect();
        assert_eq!(names, ["a.pdf", "b.PDF", "c.Pdf"]);
    }

    #[test]
    fn missing_directory_is_fatal() {
        let dir = TempDir::new().unwrap();
        assert!(find_pdf_files(&dir.path().join("absent")).is_err());
    }

    #[test]
    fn renames_in_place() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.pdf");
        fs::write(&path, b"").unwrap();

        let renamed = renamer(&[("a.pdf", "合计：¥1,050.00")]).process_invoice(&path).unwrap();
        assert_eq!(renamed.new_name, "1050.00元_发票.pdf");
        assert!(!path.exists());
        assert!(dir.path().join("1050.00元_发票.pdf").exists());
    }

    #[test]
    fn classifies_failures() {
        let dir = TempDir::new().unwrap();
        let r = renamer(&[("blank.pdf", " \n "), ("plain.pdf", "no amounts here")]);

        for name in ["blank.pdf", "plain.pdf", "unknown.pdf", "doc.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let err = |name: &str| r.process_invoice(&dir.path().join(name)).unwrap_err();
        assert!(matches!(err("blank.pdf"), ProcessError::EmptyText(_)));
        assert!(matches!(err("plain.pdf"), ProcessError::NoAmountFound(_)));
        assert!(matches!(err("unknown.pdf"), ProcessError::Extraction { .. }));
        assert!(matches!(err("doc.txt"), ProcessError::NotAPdf(_)));
        assert!(matches!(err("vanished.pdf"), ProcessError::FileMissing(_)));
    }

    #[test]
    fn already_named_file_is_left_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("88.00元_发票.pdf");
        fs::write(&path, b"").unwrap();

        let renamed = renamer(&[("88.00元_发票.pdf", "金额：88")]).process_invoice(&path).unwrap();
        assert_eq!(renamed.new_name, "88.00元_发票.pdf");
        assert!(path.exists());
        assert!(!dir.path().join("88.00元_发票_1.pdf").exists());
    }

    #[test]
    fn empty_pattern_set_finds_no_amount() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.pdf");
        fs::write(&path, b"").unwrap();

        let patterns = AmountPatterns::new(Vec::<(&str, &str)>::new()).unwrap();
        let r = InvoiceRenamer::new(FakeExtractor([("a.pdf", "合计：10")].into()), patterns);
        assert!(matches!(r.process_invoice(&path), Err(ProcessError::NoAmountFound(_))));
        assert!(path.exists());
    }
}
