//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// 一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款基于 LSB (最低有效位) 隐写术的命令行工具，用于在无损格式图像 (如 PNG, BMP) 中隐藏或恢复文本。",
    group(ArgGroup::new("mode").required(true).args(["encode", "decode"]))
)]
pub struct Cli {
    /// 要使用的图像文件路径 (如 PNG, BMP)。
    pub image: PathBuf,

    /// 要隐藏到图像中的文本。
    #[arg(short, long, value_name = "TEXT")]
    pub encode: Option<String>,

    /// 从图像中恢复隐藏的文本。
    #[arg(short, long)]
    pub decode: bool,
}
