//! # stegotext 库
//!
//! 本库包含在图像像素 LSB 中隐藏/恢复文本的核心逻辑。

// 声明库包含的所有模块。

pub mod bits;
pub mod capacity;
pub mod channel;
pub mod cli;
pub mod constants;
pub mod error;
pub mod handler;
pub mod steganography;
