use image::RgbImage;

use crate::bits;
use crate::capacity;
use crate::channel::{clear_lsb, read_lsb, write_lsb};
use crate::constants::{CHANNELS_PER_PIXEL, HEADER_PIXELS};
use crate::error::StegError;

// 头部像素内的通道子顺序：蓝、绿、红，配合从右向左的像素遍历，
// 使最右下角像素的蓝色通道承载像素计数的最低位。
const HEADER_CHANNEL_ORDER: [(u32, usize); 3] = [(0, 2), (1, 1), (2, 0)];

fn is_header_pixel(x: u32, y: u32, width: u32, height: u32) -> bool {
    y == height - 1 && x >= width - HEADER_PIXELS
}

fn payload_coords(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    (0..height)
        .flat_map(move |y| (0..width).map(move |x| (x, y)))
        .take_while(move |&(x, y)| !is_header_pixel(x, y, width, height))
}

pub fn encode(cover: &RgbImage, text: &str) -> Result<RgbImage, StegError> {
    if text.trim().is_empty() {
        return Err(StegError::EmptyMessage);
    }

    let (width, height) = cover.dimensions();
    let text_bits = bits::to_bits(text)?;
    let pixel_count = capacity::plan(text_bits.len(), width, height)?;

    let mut stego = RgbImage::new(width, height);

    // 头部：从 (W-1, H-1) 向左写入像素计数的二进制位，低位在前，
    // 多余的槽位清零。
    for offset in 0..HEADER_PIXELS {
        let (x, y) = (width - offset - 1, height - 1);
        let mut pixel = *cover.get_pixel(x, y);
        for (sub, chan) in HEADER_CHANNEL_ORDER {
            let bit = ((pixel_count >> (offset * CHANNELS_PER_PIXEL + sub)) & 1) as u8;
            pixel.0[chan] = write_lsb(pixel.0[chan], bit);
        }
        stego.put_pixel(x, y, pixel);
    }

    // 载荷：按光栅顺序逐像素写入消息位 (R, G, B)，位流耗尽后剩余
    // 通道的 LSB 一律清零。
    let mut stream = text_bits.iter().copied();
    for (x, y) in payload_coords(width, height) {
        let mut pixel = *cover.get_pixel(x, y);
        for chan in pixel.0.iter_mut() {
            *chan = match stream.next() {
                Some(bit) => write_lsb(*chan, bit),
                None => clear_lsb(*chan),
            };
        }
        stego.put_pixel(x, y, pixel);
    }

    Ok(stego)
}

pub fn decode(stego: &RgbImage) -> Result<String, StegError> {
    let (width, height) = stego.dimensions();
    if width < HEADER_PIXELS {
        return Err(StegError::ImageTooNarrow(width));
    }

    // 以编码时相同的槽位映射还原像素计数。
    let mut pixel_count: u64 = 0;
    for offset in 0..HEADER_PIXELS {
        let pixel = stego.get_pixel(width - offset - 1, height - 1);
        for (sub, chan) in HEADER_CHANNEL_ORDER {
            let bit = u64::from(read_lsb(pixel.0[chan]));
            pixel_count |= bit << (offset * CHANNELS_PER_PIXEL + sub);
        }
    }

    // 读取 pixel_count 个载荷像素；计数被钳制在载荷区域大小内，
    // 因此永远不会读入头部区域。
    let payload_pixels =
        (u64::from(width) * u64::from(height)).saturating_sub(u64::from(HEADER_PIXELS));
    let take = pixel_count.min(payload_pixels) as usize;

    let mut collected = Vec::with_capacity(take * CHANNELS_PER_PIXEL as usize);
    for (x, y) in payload_coords(width, height).take(take) {
        let pixel = stego.get_pixel(x, y);
        for chan in pixel.0 {
            collected.push(read_lsb(chan));
        }
    }

    Ok(bits::from_bits(&collected))
}
