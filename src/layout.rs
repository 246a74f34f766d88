use crate::state::{Error, Result};

pub const PUBLIC_KEY_SPAN : usize = 32;
pub const UINT64_SPAN : usize = 8;

/// A named fixed-width byte region inside a larger account buffer.
/// Carries no knowledge of field order or record size, those are
/// supplied by whoever composes descriptors into a full layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldLayout {
    pub span : usize,
    pub property : String,
}

impl FieldLayout {
    /// Slices this field's bytes out of `data` starting at `offset`.
    pub fn read<'a>(&self, data : &'a [u8], offset : usize) -> Result<&'a [u8]> {
        if data.len().saturating_sub(offset) < self.span {
            return Err(Error::LayoutOverrun {
                property : self.property.clone(),
                span : self.span,
                offset : offset,
                available : data.len(),
            });
        }
        Ok(&data[offset..offset + self.span])
    }
}

/// 32 byte region holding a public key.
pub fn public_key(property : &str) -> FieldLayout {
    FieldLayout {
        span : PUBLIC_KEY_SPAN,
        property : property.to_string(),
    }
}

/// 8 byte region holding an unsigned 64 bit integer. The bytes are
/// left opaque here, numeric interpretation is the decoder's job.
pub fn uint64(property : &str) -> FieldLayout {
    FieldLayout {
        span : UINT64_SPAN,
        property : property.to_string(),
    }
}
