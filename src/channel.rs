use crate::constants::LSB_MASK;

pub fn set_lsb(value: u8) -> u8 {
    value | LSB_MASK
}

pub fn clear_lsb(value: u8) -> u8 {
    value & !LSB_MASK
}

pub fn read_lsb(value: u8) -> u8 {
    value & LSB_MASK
}

pub fn write_lsb(value: u8, bit: u8) -> u8 {
    if bit == 1 { set_lsb(value) } else { clear_lsb(value) }
}
