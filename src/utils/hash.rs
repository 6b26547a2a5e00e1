//! Content hashing for reload change detection.
//!
//! ```ignore
//! use crate::utils::hash;
//!
//! let h = hash::compute(content.as_bytes()); // -> u64
//! ```

use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Compute 64-bit hash from byte data.
#[inline]
pub fn compute<T: AsRef<[u8]> + ?Sized>(data: &T) -> u64 {
    let mut hasher = FxHasher::default();
    hasher.write(data.as_ref());
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_is_stable() {
        assert_eq!(compute("hue = 250"), compute(b"hue = 250"));
        assert_ne!(compute("hue = 250"), compute("hue = 345"));
    }
}
