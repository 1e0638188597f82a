//! Save mode for index files.
//!
//! Defines how hard `write_atomic` works to make a promoted file survive a
//! crash. Both modes are atomic with respect to readers: the target path
//! holds either the old file or the complete new one.

/// Save mode for index writes.
///
/// # Mode Comparison
///
/// | Mode | fsync | Use Case |
/// |------|-------|----------|
/// | Buffered | none | Tests, rebuildable indexes, development |
/// | Strict | file + directory | Indexes that are expensive to rebuild |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveMode {
    /// Temp file + rename, no fsync.
    ///
    /// A crash shortly after `save` returns may lose the new file, in which
    /// case the previous file is still in place.
    #[default]
    Buffered,

    /// fsync the temp file before the rename and the directory after it.
    Strict,
}

impl SaveMode {
    /// Check if this mode fsyncs before returning.
    pub fn requires_fsync(&self) -> bool {
        matches!(self, SaveMode::Strict)
    }

    /// Human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            SaveMode::Buffered => "Atomic rename, no fsync (fast, may lose the latest save on crash)",
            SaveMode::Strict => "Atomic rename with fsync (durable once save returns)",
        }
    }
}
