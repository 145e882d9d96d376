use crate::constants::BITS_PER_CHAR;
use crate::error::StegError;

pub fn to_bits(text: &str) -> Result<Vec<u8>, StegError> {
    let mut bits = Vec::with_capacity(text.len() * BITS_PER_CHAR);

    for c in text.chars() {
        let code = u8::try_from(u32::from(c)).map_err(|_| StegError::UnsupportedChar(c))?;
        for shift in (0..BITS_PER_CHAR).rev() {
            bits.push((code >> shift) & 1);
        }
    }

    Ok(bits)
}

pub fn from_bits(bits: &[u8]) -> String {
    bits.chunks_exact(BITS_PER_CHAR)
        .map(|byte_bits| {
            let byte = byte_bits.iter().fold(0u8, |acc, &bit| (acc << 1) | bit);
            char::from(byte)
        })
        .collect()
}
