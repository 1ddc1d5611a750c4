//! 控制台输出 - 状态行、帮助与退出等待

use crate::renamer::{BatchSummary, ProcessResult};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const HEAVY_RULE: usize = 60;
const LIGHT_RULE: usize = 40;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

/// 帮助信息
pub fn help_text() -> String {
    let line = rule('=', 50);
    [
        "InvoicePilot Lite - PDF发票自动重命名工具".to_string(),
        line.clone(),
        "功能: 自动读取当前目录下的PDF发票，提取金额信息并重命名文件".to_string(),
        "使用方法: 将程序放在包含PDF发票的目录中，双击运行即可".to_string(),
        "重命名格式: 金额元_发票.pdf (例如: 100.00元_发票.pdf)".to_string(),
        line,
    ]
    .join("\n")
}

pub fn print_help() {
    println!("{}", help_text());
}

pub fn print_scanning(directory: &Path) {
    println!("正在扫描目录: {}", directory.display());
    println!("{}", rule('=', HEAVY_RULE));
}

pub fn print_no_pdfs() {
    println!("当前目录中未找到PDF文件");
    println!("请确保PDF发票文件位于程序同一目录下");
}

pub fn print_file_list(files: &[PathBuf]) {
    println!("找到 {} 个PDF文件:", files.len());
    for file in files {
        let name = file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
        println!("  - {}", name);
    }
    println!("{}", rule('=', HEAVY_RULE));
}

pub fn print_processing(name: &str) {
    println!("正在处理: {}", name);
}

pub fn print_result(result: &ProcessResult) {
    match &result.outcome {
        Ok(renamed) => println!("✓ 成功重命名: {} -> {}", result.original, renamed.new_name),
        Err(e) => println!("✗ {}", e),
    }
    println!("{}", rule('-', LIGHT_RULE));
}

pub fn print_summary(summary: &BatchSummary) {
    println!("{}", rule('=', HEAVY_RULE));
    println!(
        "处理完成: 成功 {} 个，失败 {} 个",
        summary.success_count(),
        summary.failure_count()
    );

    if summary.success_count() > 0 {
        println!("已重命名的文件保存在: {}", summary.directory.display());
    }
}

/// 等待用户按回车键退出（独立可执行文件双击运行时使用）
pub fn wait_for_enter() {
    print!("\n按回车键退出...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

/// Windows 控制台切换到 UTF-8 代码页，以便正确显示中文
#[cfg(windows)]
pub fn enable_utf8() {
    const CP_UTF8: u32 = 65001;
    // SAFETY: 仅修改当前进程控制台的输出代码页
    unsafe {
        winapi::um::wincon::SetConsoleOutputCP(CP_UTF8);
    }
}

#[cfg(not(windows))]
pub fn enable_utf8() {}
