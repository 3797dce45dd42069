//! Per-network registry of deployed contract addresses.
//!
//! One JSON document per network at `<base>/<network>.json`, holding a flat
//! mapping of contract-name-or-chain-label strings to addresses. Writes are
//! additive: new entries are merged over the persisted document, last write
//! wins on key collision. Deployment flows run one at a time from an
//! operator's shell, so calls do no cross-process locking.

use std::{
    collections::BTreeMap,
    fs, io,
    path::{Path, PathBuf},
};

use alloy_primitives::Address;
use tracing::{debug, warn};

use crate::error::RegistryError;

/// Address store rooted at an explicit base directory.
#[derive(Clone, Debug)]
pub struct Registry {
    base_dir: PathBuf,
}

impl Registry {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self { Self { base_dir: base_dir.into() } }

    pub fn base_dir(&self) -> &Path { &self.base_dir }

    /// Path of the document holding `network`'s addresses.
    pub fn network_path(&self, network: &str) -> PathBuf {
        self.base_dir.join(format!("{network}.json"))
    }

    /// Reads the persisted mapping for `network`.
    ///
    /// An absent document reads as an empty mapping; a document that exists
    /// but does not parse is corrupt and fails with
    /// [`RegistryError::ReadFailure`].
    pub fn get(&self, network: &str) -> Result<BTreeMap<String, Address>, RegistryError> {
        let path = self.network_path(network);
        match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data)
                .map_err(|e| RegistryError::ReadFailure { path, reason: e.to_string() }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(RegistryError::ReadFailure { path, reason: e.to_string() }),
        }
    }

    /// Stores one `(key, address)` pair for `network`, preserving all other
    /// persisted entries. An existing key is overwritten.
    pub fn set(&self, network: &str, key: &str, address: Address) -> Result<(), RegistryError> {
        self.set_many(network, BTreeMap::from([(key.to_string(), address)]))
    }

    /// Merges a whole mapping of new entries over the persisted document in
    /// one write.
    ///
    /// The merged document lands via a temporary file and an atomic rename,
    /// so a failed write leaves the previous document untouched; the caller
    /// can retry.
    pub fn set_many(
        &self,
        network: &str,
        entries: BTreeMap<String, Address>,
    ) -> Result<(), RegistryError> {
        let path = self.network_path(network);
        let mut addresses = self.get(network)?;
        addresses.extend(entries);

        self.write_document(&path, &addresses).inspect_err(|e| {
            warn!(network, error = %e, "failed to store addresses");
        })?;
        debug!(network, entries = addresses.len(), "stored address list");
        Ok(())
    }

    fn write_document(
        &self,
        path: &Path,
        addresses: &BTreeMap<String, Address>,
    ) -> Result<(), RegistryError> {
        let write_failure =
            |e: io::Error| RegistryError::WriteFailure { path: path.to_path_buf(), reason: e.to_string() };

        fs::create_dir_all(&self.base_dir).map_err(write_failure)?;

        let json = serde_json::to_string_pretty(addresses).map_err(|e| {
            RegistryError::WriteFailure { path: path.to_path_buf(), reason: e.to_string() }
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(write_failure)?;
        fs::rename(&tmp, path).map_err(|e| {
            // Leave no stray temp document behind.
            let _ = fs::remove_file(&tmp);
            write_failure(e)
        })
    }
}
