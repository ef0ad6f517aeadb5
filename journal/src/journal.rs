//! Event journal implementations.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use cograph_core::Event;
use tracing::{debug, error, warn};

use crate::entry::{EventRecord, Seq};
use crate::error::{JournalError, JournalResult};

/// An append-only, gap-free sequence of event records.
pub trait Journal: Send + Sync {
    /// Append events in order as one unit, returning the last assigned
    /// sequence number (the current last one if `events` is empty).
    fn append(&mut self, events: &[Event]) -> JournalResult<Seq>;

    /// Every record, oldest first.
    fn records(&self) -> &[EventRecord];

    /// Flush buffered writes to durable storage.
    fn sync(&mut self) -> JournalResult<()>;

    /// Sequence number of the newest record, 0 when empty.
    fn last_seq(&self) -> Seq {
        self.records().last().map(|r| r.seq).unwrap_or(0)
    }

    /// Records with a sequence number greater than `seq`.
    fn since(&self, seq: Seq) -> &[EventRecord] {
        let records = self.records();
        let start = usize::try_from(seq).unwrap_or(usize::MAX).min(records.len());
        &records[start..]
    }
}

/// In-memory journal for tests and ephemeral stores.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    /// All recorded entries.
    entries: Vec<EventRecord>,
}

impl MemoryJournal {
    /// Create a new empty memory journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get entry by sequence number.
    pub fn get(&self, seq: Seq) -> Option<&EventRecord> {
        let pos = usize::try_from(seq).ok()?.checked_sub(1)?;
        self.entries.get(pos)
    }
}

impl Journal for MemoryJournal {
    fn append(&mut self, events: &[Event]) -> JournalResult<Seq> {
        let mut seq = self.last_seq();
        for event in events {
            seq += 1;
            self.entries.push(EventRecord::new(seq, event.clone()));
        }
        Ok(seq)
    }

    fn records(&self) -> &[EventRecord] {
        &self.entries
    }

    /// Sync is a no-op for memory journal.
    fn sync(&mut self) -> JournalResult<()> {
        Ok(())
    }
}

/// File-based journal: one JSON record per line.
pub struct FileJournal {
    /// Path to the journal file.
    path: PathBuf,
    /// File for writing.
    writer: BufWriter<File>,
    /// Fsync after every append.
    sync_on_append: bool,
    /// Bytes of the file taken by accepted records.
    len: u64,
    /// A failed append is still in the file.
    damaged: bool,
    /// Every record in the file, kept for reads and recovery.
    entries: Vec<EventRecord>,
}

impl FileJournal {
    /// Open or create a journal file, loading any records it already holds.
    pub fn open(path: impl AsRef<Path>, sync_on_append: bool) -> JournalResult<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            Self::scan_file(&path)?
        } else {
            Vec::new()
        };

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let len = file.metadata()?.len();
        debug!(path = %path.display(), records = entries.len(), "opened journal");

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            sync_on_append,
            len,
            damaged: false,
            entries,
        })
    }

    /// Read every record, checking that sequence numbers run 1, 2, 3, ...
    fn scan_file(path: &Path) -> JournalResult<Vec<EventRecord>> {
        let reader = BufReader::new(File::open(path)?);
        let mut entries = Vec::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let line_no = i + 1;
            let record: EventRecord = serde_json::from_str(&line)
                .map_err(|e| JournalError::invalid_format(line_no, e.to_string()))?;

            let expected = entries.len() as Seq + 1;
            if record.seq != expected {
                return Err(JournalError::invalid_format(
                    line_no,
                    format!("expected seq {}, found {}", expected, record.seq),
                ));
            }
            entries.push(record);
        }

        Ok(entries)
    }

    /// Hand `bytes` to the OS, and to the disk when configured.
    fn write_through(&mut self, bytes: &[u8]) -> JournalResult<()> {
        self.writer.write_all(bytes)?;
        self.writer.flush()?;
        if self.sync_on_append {
            self.writer.get_ref().sync_data()?;
        }
        Ok(())
    }

    /// Cut the file back to `len` bytes and drop anything still buffered.
    fn truncate_to(&mut self, len: u64) -> JournalResult<()> {
        let file = OpenOptions::new().append(true).open(&self.path)?;
        file.set_len(len)?;
        let stale = std::mem::replace(&mut self.writer, BufWriter::new(file));
        // into_parts hands back the buffer instead of flushing it
        let (_file, _unwritten) = stale.into_parts();
        Ok(())
    }
}

impl Journal for FileJournal {
    fn append(&mut self, events: &[Event]) -> JournalResult<Seq> {
        if self.damaged {
            return Err(JournalError::Damaged {
                path: self.path.display().to_string(),
            });
        }
        let first = self.last_seq() + 1;
        let records: Vec<EventRecord> = events
            .iter()
            .zip(first..)
            .map(|(event, seq)| EventRecord::new(seq, event.clone()))
            .collect();

        // Serialize everything before touching the file.
        let mut buf = String::new();
        for record in &records {
            buf.push_str(&serde_json::to_string(record)?);
            buf.push('\n');
        }

        if let Err(e) = self.write_through(buf.as_bytes()) {
            warn!(path = %self.path.display(), error = %e, "journal append failed");
            if let Err(undo) = self.truncate_to(self.len) {
                error!(path = %self.path.display(), error = %undo, "cannot remove partial append");
                self.damaged = true;
            }
            return Err(e);
        }

        self.len += buf.len() as u64;
        self.entries.extend(records);
        Ok(self.last_seq())
    }

    fn records(&self) -> &[EventRecord] {
        &self.entries
    }

    fn sync(&mut self) -> JournalResult<()> {
        if self.damaged {
            return Err(JournalError::Damaged {
                path: self.path.display().to_string(),
            });
        }
        self.writer.flush()?;
        self.writer.get_ref().sync_data()?;
        Ok(())
    }
}

impl Drop for FileJournal {
    fn drop(&mut self) {
        if !self.damaged {
            let _ = self.writer.flush();
        }
    }
}
