pub static ONES_32: u32 = 0xffffffff;

#[macro_export]
macro_rules! BIT {
    ( $x:expr ) => {
        (1u32 << $x)
    };
}

#[macro_export]
macro_rules! BM_SET {
    ( $x:expr, $mask:expr ) => {
        $x |= $mask
    };
}

#[macro_export]
macro_rules! BM_CLR {
    ( $x:expr, $mask:expr ) => {
        $x &= !($mask)
    };
}

/// Iterator over the indices of the set bits of a snapshot word, highest first.
///
/// Each step finds the top set bit with a leading-zero count and strips it from the
/// in-hand copy, so the sequence is finite (at most 32 items) and never touches hardware.
/// Restart by building a new `SetBits` from the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits(u32);

impl SetBits {
    pub const fn new(word: u32) -> Self {
        SetBits(word)
    }

    /// What is still left to walk.
    pub const fn remaining(&self) -> u32 {
        self.0
    }
}

impl Iterator for SetBits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }

        // 31 - CLZ is the location of the highest pending bit
        let bit = 31 - self.0.leading_zeros();
        BM_CLR!(self.0, BIT!(bit));
        Some(bit as u8)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for SetBits {}

impl core::iter::FusedIterator for SetBits {}
