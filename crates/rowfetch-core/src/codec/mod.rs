//! Module: codec
//! Responsibility: the key-space prefix every index read starts from.
//! Does not own: row encoding, column-value encoding, or key decoding.
//!
//! Invariants:
//! - Prefix bytes are canonical: one (tenant, table, index) triple has
//!   exactly one encoding.
//! - Byte ordering of encoded prefixes matches numeric ordering of the
//!   encoded identifiers.


use crate::types::{IndexId, TableId, TenantId};

/// Marker byte introducing a tenant-scoped key space. Chosen from the top
/// of the byte range so tenant key spaces sort after the system key space.
const TENANT_PREFIX_BYTE: u8 = 0xFE;

///
/// KeyPrefixCodec
///
/// Produces the encoded key prefix all rows of a given table index share.
/// The fetch-spec builder only measures the prefix; decoding it back is the
/// row decoder's concern.
///

pub trait KeyPrefixCodec {
    fn index_key_prefix(&self, table_id: TableId, index_id: IndexId) -> Vec<u8>;
}

///
/// KeyCodec
///
/// Canonical prefix layout: optional tenant prefix, then the table id and
/// index id as order-preserving varints.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct KeyCodec {
    tenant_prefix: Vec<u8>,
}

impl KeyCodec {
    /// Codec for the system tenant: no tenant prefix.
    #[must_use]
    pub const fn system() -> Self {
        Self {
            tenant_prefix: Vec::new(),
        }
    }

    /// Codec for a named tenant's key space.
    #[must_use]
    pub fn for_tenant(tenant_id: TenantId) -> Self {
        let mut tenant_prefix = vec![TENANT_PREFIX_BYTE];
        encode_uvarint_ascending(&mut tenant_prefix, tenant_id.0);
        Self { tenant_prefix }
    }

    #[must_use]
    pub fn tenant_prefix(&self) -> &[u8] {
        &self.tenant_prefix
    }

    /// Byte length [`KeyPrefixCodec::index_key_prefix`] will produce,
    /// computed without materializing the prefix.
    #[must_use]
    pub fn prefix_len(&self, table_id: TableId, index_id: IndexId) -> usize {
        self.tenant_prefix.len()
            + uvarint_len(u64::from(table_id.0))
            + uvarint_len(u64::from(index_id.0))
    }
}

impl KeyPrefixCodec for KeyCodec {
    fn index_key_prefix(&self, table_id: TableId, index_id: IndexId) -> Vec<u8> {
        let mut buf = self.tenant_prefix.clone();
        encode_uvarint_ascending(&mut buf, u64::from(table_id.0));
        encode_uvarint_ascending(&mut buf, u64::from(index_id.0));
        buf
    }
}

/// Append an order-preserving unsigned varint: a one-byte payload length
/// tag (1..=8) followed by the minimal big-endian payload. Longer payloads
/// always sort after shorter ones; equal lengths compare numerically.
pub(crate) fn encode_uvarint_ascending(buf: &mut Vec<u8>, value: u64) {
    let len = payload_len(value);
    #[expect(clippy::cast_possible_truncation)]
    buf.push(len as u8);
    buf.extend_from_slice(&value.to_be_bytes()[8 - len..]);
}

/// Encoded length of [`encode_uvarint_ascending`] output.
pub(crate) const fn uvarint_len(value: u64) -> usize {
    1 + payload_len(value)
}

const fn payload_len(value: u64) -> usize {
    if value == 0 {
        1
    } else {
        (64 - value.leading_zeros() as usize).div_ceil(8)
    }
}
