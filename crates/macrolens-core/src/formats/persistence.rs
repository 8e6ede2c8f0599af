//! Binary catalog snapshots.
//!
//! Layout:
//!
//! ```text
//! ┌────────┬─────────┬────────────────────────────┐
//! │ "MLCS" │ u16 LE  │ postcard(RawCatalog)       │
//! │ magic  │ version │ payload                    │
//! └────────┴─────────┴────────────────────────────┘
//! ```

use crate::catalog::{Catalog, RawCatalog};
use crate::error::{CatalogError, Result};

/// Snapshot magic bytes.
pub const SNAPSHOT_MAGIC: [u8; 4] = *b"MLCS";

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u16 = 1;

const HEADER_LEN: usize = SNAPSHOT_MAGIC.len() + 2;

/// Encode a raw catalog into a versioned snapshot.
pub fn encode_snapshot(raw: &RawCatalog) -> Result<Vec<u8>> {
    let payload = postcard::to_stdvec(raw)?;
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&SNAPSHOT_MAGIC);
    bytes.extend_from_slice(&SNAPSHOT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&payload);
    Ok(bytes)
}

/// Decode a snapshot back into a raw catalog. Does not validate.
pub fn decode_snapshot(bytes: &[u8]) -> Result<RawCatalog> {
    if bytes.len() < HEADER_LEN {
        return Err(CatalogError::SnapshotHeader(format!(
            "expected at least {HEADER_LEN} bytes, got {}",
            bytes.len()
        )));
    }

    let (header, payload) = bytes.split_at(HEADER_LEN);
    if header[..4] != SNAPSHOT_MAGIC {
        return Err(CatalogError::SnapshotHeader("bad magic".to_string()));
    }

    let version = u16::from_le_bytes([header[4], header[5]]);
    if version != SNAPSHOT_VERSION {
        return Err(CatalogError::SnapshotHeader(format!(
            "unsupported version {version}, expected {SNAPSHOT_VERSION}"
        )));
    }

    Ok(postcard::from_bytes(payload)?)
}

/// Encode a loaded catalog. Orphan conditions are not carried over.
pub fn export_catalog(catalog: &Catalog) -> Result<Vec<u8>> {
    encode_snapshot(&RawCatalog::from(catalog))
}

/// Decode and validate a snapshot in one step.
pub fn import_catalog(bytes: &[u8]) -> Result<Catalog> {
    Catalog::load(decode_snapshot(bytes)?)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin;

    #[test]
    fn snapshot_roundtrip_preserves_catalog() {
        let raw = builtin::raw_catalog();
        let bytes = encode_snapshot(&raw).unwrap();

        assert_eq!(&bytes[..4], b"MLCS");
        assert_eq!(decode_snapshot(&bytes).unwrap(), raw);
    }

    #[test]
    fn export_import_loaded_catalog() {
        let catalog = builtin::catalog().unwrap();
        let bytes = export_catalog(&catalog).unwrap();
        let restored = import_catalog(&bytes).unwrap();

        assert_eq!(restored.crisis_count(), catalog.crisis_count());
        assert_eq!(restored.conditions_count(), catalog.conditions_count());
        assert_eq!(restored.current(), catalog.current());
    }

    #[test]
    fn short_input_rejected() {
        assert!(matches!(
            decode_snapshot(b"ML"),
            Err(CatalogError::SnapshotHeader(_))
        ));
    }

    #[test]
    fn bad_magic_rejected() {
        let mut bytes = encode_snapshot(&builtin::raw_catalog()).unwrap();
        bytes[0] = b'X';
        assert!(matches!(
            decode_snapshot(&bytes),
            Err(CatalogError::SnapshotHeader(_))
        ));
    }

    #[test]
    fn unknown_version_rejected() {
        let mut bytes = encode_snapshot(&builtin::raw_catalog()).unwrap();
        bytes[4] = 9;
        assert!(decode_snapshot(&bytes).is_err());
    }

    #[test]
    fn truncated_payload_rejected() {
        let bytes = encode_snapshot(&builtin::raw_catalog()).unwrap();
        let cut = &bytes[..bytes.len() / 2];
        assert!(matches!(
            decode_snapshot(cut),
            Err(CatalogError::Snapshot(_))
        ));
    }
}
