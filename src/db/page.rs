use crate::error::ValidationError;

/// Largest page a caller may request.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// A validated offset/limit window over the `quotes` table.
///
/// Holds the values in the signed form SQLite binds, so the storage layer never converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    offset: i64,
    limit: i64,
}

impl Page {
    /// Checks the server-side ceiling and that `offset` fits a SQLite integer.
    ///
    /// `limit` above [`MAX_PAGE_LIMIT`] is rejected, never clamped.
    pub fn new(offset: u64, limit: u32) -> Result<Self, ValidationError> {
        if limit > MAX_PAGE_LIMIT {
            return Err(ValidationError::LimitTooLarge {
                requested: limit,
                max: MAX_PAGE_LIMIT,
            });
        }
        let offset =
            i64::try_from(offset).map_err(|_| ValidationError::OffsetOutOfRange(offset))?;
        Ok(Self {
            offset,
            limit: i64::from(limit),
        })
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// A zero-length window; nothing needs to be read.
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}
