use core::fmt;

/// 隐写编码或解码过程中可能发生的错误。
#[derive(Debug, PartialEq, Eq)]
pub enum StegError {
    /// 待隐藏的消息为空或仅含空白字符。
    EmptyMessage,
    /// 消息的位长超出了图像的可用嵌入容量。
    CapacityExceeded { required: usize, available: usize },
    /// 图像宽度不足以容纳最后一行的 11 个头部像素。
    ImageTooNarrow(u32),
    /// 图像文件扩展名不属于支持的无损格式。
    UnsupportedFormat(String),
    /// 消息包含超出单字节码元范围 (0..=255) 的字符。
    UnsupportedChar(char),
}

impl fmt::Display for StegError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMessage => write!(f, "the message must not be empty"),
            Self::CapacityExceeded {
                required,
                available,
            } => write!(
                f,
                "the message does not fit in the image ({required} bits required, {available} available)"
            ),
            Self::ImageTooNarrow(width) => write!(
                f,
                "the image is too narrow for the length header ({width} px wide, 11 required)"
            ),
            Self::UnsupportedFormat(ext) => write!(
                f,
                "unsupported image format '{ext}' (a lossless format such as PNG or BMP is required)"
            ),
            Self::UnsupportedChar(c) => write!(
                f,
                "character {c:?} is outside the supported single-byte range"
            ),
        }
    }
}

impl std::error::Error for StegError {}
