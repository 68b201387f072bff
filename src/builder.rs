//! Fixed length string assembly.

use crate::error::BuilderError;

/// Builds a string of known length with exactly one allocation.
///
/// Usage is split in two phases. First the total length is [reserved](Self::reserve), possibly
/// in several steps. The first write then allocates a buffer of exactly that size and later
/// writes fill it in order. [`finish`](Self::finish) only succeeds once the buffer is full.
///
/// Lengths are counted in bytes of UTF-8.
///
/// # Examples
/// ```
/// use actix_header::InplaceStringBuilder;
///
/// let mut buf = InplaceStringBuilder::new();
/// buf.reserve(3).unwrap();
/// buf.reserve(2).unwrap();
///
/// buf.append("max").unwrap();
/// buf.append("=5").unwrap();
///
/// assert_eq!(buf.finish().unwrap(), "max=5");
/// ```
#[derive(Debug, Default)]
pub struct InplaceStringBuilder {
    capacity: usize,
    offset: usize,
    buf: Option<Box<[u8]>>,
}

impl InplaceStringBuilder {
    /// Constructs a builder with no reserved capacity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructs a builder with `capacity` bytes already reserved.
    pub fn with_capacity(capacity: usize) -> Self {
        InplaceStringBuilder {
            capacity,
            ..Self::default()
        }
    }

    /// Total number of bytes reserved.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of bytes written so far.
    pub fn len(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == 0
    }

    /// Adds `additional` bytes to the reserved capacity.
    ///
    /// # Errors
    /// Fails once writing has started.
    pub fn reserve(&mut self, additional: usize) -> Result<(), BuilderError> {
        if self.buf.is_some() {
            log::debug!("attempt to reserve {} bytes after writing", additional);
            return Err(BuilderError::ReserveAfterWrite);
        }

        self.capacity = self
            .capacity
            .checked_add(additional)
            .ok_or(BuilderError::Overflow)?;

        Ok(())
    }

    /// Writes `value` at the current offset.
    ///
    /// # Errors
    /// Fails, without writing anything, if `value` does not fit the remaining capacity.
    pub fn append(&mut self, value: &str) -> Result<(), BuilderError> {
        self.write(value.as_bytes())
    }

    /// Writes `count` bytes of `value` starting at byte `offset`.
    ///
    /// # Errors
    /// Fails if the range is outside `value` or splits a character, or if it does not fit the
    /// remaining capacity.
    pub fn append_range(
        &mut self,
        value: &str,
        offset: usize,
        count: usize,
    ) -> Result<(), BuilderError> {
        let end = offset.checked_add(count).ok_or(BuilderError::Overflow)?;

        let part = value.get(offset..end).ok_or(BuilderError::InvalidRange {
            start: offset,
            end,
        })?;

        self.write(part.as_bytes())
    }

    /// Writes a single character.
    pub fn append_char(&mut self, ch: char) -> Result<(), BuilderError> {
        let mut utf8 = [0; 4];
        self.write(ch.encode_utf8(&mut utf8).as_bytes())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), BuilderError> {
        let capacity = self.capacity;

        // writing has started from here on, even if this write is rejected
        let buf = self
            .buf
            .get_or_insert_with(|| vec![0; capacity].into_boxed_slice());

        let end = match self.offset.checked_add(bytes.len()) {
            Some(end) if end <= capacity => end,
            _ => {
                log::debug!(
                    "write of {} bytes at {} exceeds capacity {}",
                    bytes.len(),
                    self.offset,
                    capacity
                );

                return Err(BuilderError::Capacity {
                    len: bytes.len(),
                    offset: self.offset,
                    capacity,
                });
            }
        };

        buf[self.offset..end].copy_from_slice(bytes);
        self.offset = end;

        Ok(())
    }

    /// Returns the assembled string.
    ///
    /// # Errors
    /// Fails unless exactly the reserved number of bytes has been written.
    pub fn finish(self) -> Result<String, BuilderError> {
        if self.offset != self.capacity {
            log::debug!(
                "finishing buffer with {} of {} bytes written",
                self.offset,
                self.capacity
            );

            return Err(BuilderError::Incomplete {
                written: self.offset,
                capacity: self.capacity,
            });
        }

        let bytes = self.buf.map(Vec::from).unwrap_or_default();

        // every write copied a whole `str` (or a char aligned sub-range) end to end
        String::from_utf8(bytes).map_err(|err| {
            debug_assert!(false, "builder holds invalid UTF-8: {}", err);
            BuilderError::Utf8
        })
    }
}
