//! Document catalog: the id ↔ path table.
//!
//! The engine only sees numeric ids; this table is how the CLI turns files
//! into ids and hits back into paths. It is persisted as versioned JSON next
//! to the index and promoted with the same temp-file + rename as the index.
//!
//! Ids are never reused: a path keeps its id across re-indexing, and a new
//! path always gets `next_id`.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use vortex_core::DocId;
use vortex_durability::{write_atomic, SaveMode};

/// Current catalog format version
pub const CATALOG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    version: u32,
    next_id: u64,
    paths: BTreeMap<u64, PathBuf>,
    #[serde(skip)]
    ids: BTreeMap<PathBuf, u64>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            version: CATALOG_VERSION,
            next_id: 0,
            paths: BTreeMap::new(),
            ids: BTreeMap::new(),
        }
    }

    /// Read the catalog at `path`, or start an empty one if there is none
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let bytes =
            std::fs::read(path).with_context(|| format!("reading catalog {}", path.display()))?;
        let mut catalog: Catalog = serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing catalog {}", path.display()))?;

        if catalog.version != CATALOG_VERSION {
            bail!(
                "catalog {} has unsupported version {} (expected {})",
                path.display(),
                catalog.version,
                CATALOG_VERSION
            );
        }
        if let Some((&max, _)) = catalog.paths.iter().next_back() {
            if max >= catalog.next_id {
                bail!(
                    "catalog {} is inconsistent: id {} is not below next_id {}",
                    path.display(),
                    max,
                    catalog.next_id
                );
            }
        }

        catalog.ids = catalog
            .paths
            .iter()
            .map(|(&id, path)| (path.clone(), id))
            .collect();
        if catalog.ids.len() != catalog.paths.len() {
            bail!("catalog {} maps one path to several ids", path.display());
        }
        Ok(catalog)
    }

    /// Read the catalog that belongs to the index at `index`
    ///
    /// An existing index without its catalog is refused: starting a fresh
    /// catalog would hand the index's ids to unrelated files.
    pub fn load_for_index(path: &Path, index: &Path) -> anyhow::Result<Self> {
        if index.exists() && !path.exists() {
            bail!(
                "index {} exists but its catalog {} does not; pass the matching --catalog",
                index.display(),
                path.display()
            );
        }
        Self::load_or_default(path)
    }

    pub fn save(&self, path: &Path, mode: SaveMode) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(self)?;
        write_atomic(path, &bytes, mode)
            .with_context(|| format!("writing catalog {}", path.display()))
    }

    /// Id for `path`, assigning the next free one if the path is new
    pub fn id_for(&mut self, path: &Path) -> DocId {
        if let Some(&id) = self.ids.get(path) {
            return DocId::new(id);
        }
        let id = self.next_id;
        self.next_id += 1;
        self.paths.insert(id, path.to_path_buf());
        self.ids.insert(path.to_path_buf(), id);
        DocId::new(id)
    }

    pub fn path(&self, doc_id: DocId) -> Option<&Path> {
        self.paths.get(&doc_id.as_u64()).map(PathBuf::as_path)
    }

    /// Forget `doc_id`. Its id is not handed out again.
    pub fn remove(&mut self, doc_id: DocId) -> Option<PathBuf> {
        let path = self.paths.remove(&doc_id.as_u64())?;
        self.ids.remove(&path);
        Some(path)
    }

    /// Entries whose path lies under `root`
    pub fn entries_under<'a>(
        &'a self,
        root: &'a Path,
    ) -> impl Iterator<Item = (DocId, &'a Path)> + 'a {
        self.paths
            .iter()
            .filter(move |(_, path)| path.starts_with(root))
            .map(|(&id, path)| (DocId::new(id), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
