//! Array size, index and alignment validation
//!
//! Pure arithmetic on byte lengths and addresses, no I/O.

use crate::{CoreError, MapElement};
use bytemuck::PodCastError;

/// Number of whole `T` elements that fit in `byte_len` bytes
///
/// Uses truncating division: trailing bytes that do not form a whole
/// element are left out of the count, never rejected.
pub const fn element_count<T>(byte_len: usize) -> Result<usize, CoreError> {
    let element_size = core::mem::size_of::<T>();
    if element_size == 0 {
        return Err(CoreError::ZeroSizedElement);
    }
    Ok(byte_len / element_size)
}

/// Byte length of an array of `count` elements of `T`
pub const fn byte_len<T>(count: usize) -> Result<usize, CoreError> {
    let element_size = core::mem::size_of::<T>();
    if element_size == 0 {
        return Err(CoreError::ZeroSizedElement);
    }
    match count.checked_mul(element_size) {
        // Slices may not span more than isize::MAX bytes
        Some(len) if len <= isize::MAX as usize => Ok(len),
        _ => Err(CoreError::SizeOverflow),
    }
}

/// Check an index against an element count
pub const fn check_index(index: usize, len: usize) -> Result<(), CoreError> {
    if index >= len {
        return Err(CoreError::IndexOutOfRange { index, len });
    }
    Ok(())
}

/// View the whole elements at the front of `bytes` as `T`s
///
/// Trailing bytes that do not complete an element are left out, the same
/// way [`element_count`] drops them. The view starts at `bytes`' own
/// address, also when it is empty.
pub fn typed_prefix<T: MapElement>(bytes: &[u8]) -> Result<&[T], CoreError> {
    let whole = element_count::<T>(bytes.len())? * core::mem::size_of::<T>();
    bytemuck::try_cast_slice(&bytes[..whole]).map_err(cast_error)
}

/// Mutable counterpart of [`typed_prefix`]
pub fn typed_prefix_mut<T: MapElement>(bytes: &mut [u8]) -> Result<&mut [T], CoreError> {
    let whole = element_count::<T>(bytes.len())? * core::mem::size_of::<T>();
    bytemuck::try_cast_slice_mut(&mut bytes[..whole]).map_err(cast_error)
}

fn cast_error(err: PodCastError) -> CoreError {
    match err {
        PodCastError::TargetAlignmentGreaterAndInputNotAligned
        | PodCastError::AlignmentMismatch => CoreError::Misaligned,
        PodCastError::OutputSliceWouldHaveSlop | PodCastError::SizeMismatch => {
            CoreError::SizeOverflow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count_truncates() {
        assert_eq!(element_count::<u32>(16), Ok(4));
        assert_eq!(element_count::<u32>(15), Ok(3));
        assert_eq!(element_count::<u64>(7), Ok(0));
        assert_eq!(element_count::<u8>(0), Ok(0));
        assert_eq!(element_count::<()>(8), Err(CoreError::ZeroSizedElement));
    }

    #[test]
    fn test_byte_len() {
        assert_eq!(byte_len::<i32>(30), Ok(120));
        assert_eq!(byte_len::<u8>(0), Ok(0));
        assert_eq!(byte_len::<u64>(usize::MAX), Err(CoreError::SizeOverflow));
        assert_eq!(byte_len::<u8>(usize::MAX), Err(CoreError::SizeOverflow));
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 1), Ok(()));
        assert_eq!(check_index(29, 30), Ok(()));
        assert_eq!(
            check_index(30, 30),
            Err(CoreError::IndexOutOfRange { index: 30, len: 30 })
        );
        assert_eq!(
            check_index(0, 0),
            Err(CoreError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_typed_prefix_drops_partial_element() {
        let words = [0x0102_0304u32, 7, 9];
        let bytes: &[u8] = bytemuck::cast_slice(&words);

        let all = typed_prefix::<u32>(bytes).unwrap();
        assert_eq!(all, &words);
        assert_eq!(all.as_ptr() as *const u8, bytes.as_ptr());

        let short = typed_prefix::<u32>(&bytes[..11]).unwrap();
        assert_eq!(short, &words[..2]);

        let none = typed_prefix::<u32>(&bytes[..0]).unwrap();
        assert!(none.is_empty());
        assert_eq!(none.as_ptr() as *const u8, bytes.as_ptr());
    }

    #[test]
    fn test_typed_prefix_rejects_misaligned_start() {
        let words = [0u64; 3];
        let bytes: &[u8] = bytemuck::cast_slice(&words);

        assert_eq!(
            typed_prefix::<u64>(&bytes[1..]).unwrap_err(),
            CoreError::Misaligned
        );
        assert_eq!(
            typed_prefix::<()>(bytes).unwrap_err(),
            CoreError::ZeroSizedElement
        );
    }

    #[test]
    fn test_typed_prefix_mut_writes_through() {
        let mut words = [0u16; 4];
        {
            let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
            let view = typed_prefix_mut::<u16>(&mut bytes[..7]).unwrap();
            assert_eq!(view.len(), 3);
            view[2] = 0xbeef;
        }
        assert_eq!(words, [0, 0, 0xbeef, 0]);
    }
}
