//! # 命令处理逻辑模块
//!
//! 包含处理编码和解码两条路径的高级业务逻辑。
//! 本模块负责协调图像 I/O、调用核心隐写算法以及向用户报告结果。

use crate::constants::ENCODED_FILE_NAME;
use crate::error::StegError;
use crate::steganography;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// 无损存储像素通道的图像格式扩展名。
/// 隐写要求通道值逐位保真，有损格式 (如 JPEG) 会破坏嵌入的数据。
const LOSSLESS_EXTENSIONS: [&str; 6] = ["png", "bmp", "tiff", "tif", "webp", "qoi"];

/// 处理编码路径的执行逻辑。
///
/// 负责读取图像文件、调用核心编码函数将文本嵌入像素 LSB，
/// 最后将结果保存为输入图像同目录下的 `encoded.png`。
/// 任何一步失败都不会写出输出文件。
///
/// # Arguments
///
/// * `image_path` - 作为载体的图像文件路径。
/// * `text` - 要隐藏的文本。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 图像扩展名不属于支持的无损格式。
/// * 无法读取或解码输入的图像文件。
/// * 核心编码函数失败 (消息为空、超出容量等)。
/// * 无法写入输出图像文件。
pub fn handle_encode(image_path: &Path, text: &str) -> Result<PathBuf> {
    ensure_lossless(image_path)?;

    let cover = image::open(image_path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                image_path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let stego = steganography::encode(&cover, text).with_context(|| {
        format!(
            "Failed to hide the text in '{}'.",
            image_path.to_string_lossy().red().bold()
        )
    })?;

    let dest = image_path
        .parent()
        .map(|dir| dir.join(ENCODED_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(ENCODED_FILE_NAME));

    stego.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(dest)
}

/// 处理解码路径的执行逻辑。
///
/// 负责读取经过隐写的图像文件，并调用核心解码函数恢复隐藏的文本。
/// 若图像从未嵌入过消息，恢复出的可能是空字符串或无意义的噪声，
/// 这不视为错误 (格式中没有校验标记)。
///
/// # Arguments
///
/// * `image_path` - 已隐藏文本数据的图像文件路径。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 图像扩展名不属于支持的无损格式。
/// * 无法读取或解码输入的图像文件。
/// * 图像宽度不足以容纳长度头部。
pub fn handle_decode(image_path: &Path) -> Result<String> {
    ensure_lossless(image_path)?;

    let stego = image::open(image_path)
        .with_context(|| {
            format!(
                "Unable to read image file: {}",
                image_path.to_string_lossy().red().bold()
            )
        })?
        .to_rgb8();

    let text = steganography::decode(&stego).with_context(|| {
        format!(
            "Failed to recover text from '{}'.",
            image_path.to_string_lossy().red().bold()
        )
    })?;

    Ok(text)
}

/// 校验图像扩展名属于支持的无损格式。
fn ensure_lossless(path: &Path) -> Result<(), StegError> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    if LOSSLESS_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(StegError::UnsupportedFormat(ext))
    }
}
