use crate::constants::{CHANNELS_PER_PIXEL, HEADER_BITS, HEADER_PIXELS};
use crate::error::StegError;

pub fn available_bits(width: u32, height: u32) -> usize {
    let pixels = u64::from(width) * u64::from(height);
    let payload_pixels = pixels.saturating_sub(u64::from(HEADER_PIXELS));
    (payload_pixels * u64::from(CHANNELS_PER_PIXEL)) as usize
}

pub fn pixel_count(bit_len: usize) -> u64 {
    bit_len.div_ceil(CHANNELS_PER_PIXEL as usize) as u64 + 1
}

pub fn plan(bit_len: usize, width: u32, height: u32) -> Result<u64, StegError> {
    let available = available_bits(width, height);
    if bit_len > available {
        return Err(StegError::CapacityExceeded {
            required: bit_len,
            available,
        });
    }

    // 容量足够也未必放得下头部：最后一行必须容纳全部 11 个保留像素。
    if width < HEADER_PIXELS {
        return Err(StegError::ImageTooNarrow(width));
    }

    // 像素计数必须能放进 33 位的头部区域。
    let count = pixel_count(bit_len);
    if count >> HEADER_BITS != 0 {
        return Err(StegError::CapacityExceeded {
            required: bit_len,
            available,
        });
    }

    Ok(count)
}
