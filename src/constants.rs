/// 图像最后一行末尾为长度头部保留的像素数。
/// 这 11 个像素专门用于存储载荷的像素计数，隐写载荷不得写入此区域。
pub const HEADER_PIXELS: u32 = 11;

/// 每个像素可用的颜色通道数 (R, G, B)。
/// 每个通道的最低有效位承载 1 bit 数据，因此每个像素可存储 3 bits。
pub const CHANNELS_PER_PIXEL: u32 = 3;

/// 头部区域的总位数：11 个像素 × 3 个通道 = 33 bits。
pub const HEADER_BITS: u32 = HEADER_PIXELS * CHANNELS_PER_PIXEL;

/// 用于提取 8 位通道值最低有效位的掩码。
pub const LSB_MASK: u8 = 0b1;

/// 文本中每个字符占用的位数。
/// 每个字符按单字节码元 (0..=255) 处理，即 8 bits。
pub const BITS_PER_CHAR: usize = 8;

/// 编码完成后输出图像的固定文件名，写入输入图像所在目录。
pub const ENCODED_FILE_NAME: &str = "encoded.png";
