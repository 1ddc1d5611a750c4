//! 命令行参数与运行模式

use anyhow::{Context, Result};
use std::path::PathBuf;

/// 帮助参数
const HELP_FLAGS: &[&str] = &["-h", "--help", "/?", "-?"];

/// 命令行动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Run,
}

impl Command {
    /// 只看第一个参数，其余参数忽略
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Self {
        match args.first() {
            Some(arg) if HELP_FLAGS.contains(&arg.as_ref()) => Self::Help,
            _ => Self::Run,
        }
    }
}

/// 运行模式
///
/// 发布构建视为独立可执行文件：处理程序所在目录，结束后等待回车。
/// 调试构建处理当前工作目录，直接退出。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Packaged,
    Development,
}

impl RunMode {
    pub fn detect() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Packaged
        }
    }

    /// 要扫描的目录
    pub fn target_directory(self) -> Result<PathBuf> {
        match self {
            Self::Packaged => {
                let exe = std::env::current_exe().context("无法获取程序路径")?;
                exe.parent()
                    .map(|p| p.to_path_buf())
                    .context("无法获取程序所在目录")
            }
            Self::Development => std::env::current_dir().context("无法获取当前工作目录"),
        }
    }

    pub fn waits_for_keypress(self) -> bool {
        self == Self::Packaged
    }
}
