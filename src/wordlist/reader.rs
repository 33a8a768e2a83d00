use std::fs::File;
use std::path::Path;
use std::sync::RwLock;

use log::{debug, info, trace};

use super::compare::WordComparator;
use super::line;
use super::list::WordList;
use super::offset_index::OffsetIndex;
use super::segment::SegmentMap;
use super::types::error::{WordListError, Result};
use super::types::models::WordListConfig;
use super::utils;

/// A sorted word list file exposed through memory-mapped segments.
///
/// Construction scans the file once to count lines and build the offset
/// index; afterwards every lookup is a read-only walk over the mapped
/// segments, so one instance can be shared by any number of threads.
///
/// The file must already be sorted according to the configured case
/// sensitivity. This is not verified; an unsorted file makes searches
/// return wrong answers.
#[derive(Debug)]
pub struct MappedWordList {
    len: usize,
    file_len: u64,
    config: WordListConfig,
    state: RwLock<Option<MappedState>>,
}

/// Everything released by `close()`.
#[derive(Debug)]
struct MappedState {
    file: File,
    segments: SegmentMap,
    index: OffsetIndex,
}

impl MappedWordList {
    /// Open a case-sensitive UTF-8 word list with default caching.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, WordListConfig::default())
    }

    /// Open a word list file.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The configuration is invalid (checked before the file is opened)
    /// - The file cannot be opened, inspected or mapped
    pub fn open_with(path: impl AsRef<Path>, config: WordListConfig) -> Result<Self> {
        config.validate()?;
        let path = path.as_ref();
        info!("Opening word list: {}", path.display());
        let file = File::open(path)?;
        Self::from_file(file, config)
    }

    /// Build a word list over an already opened, readable file.
    ///
    /// The handle is owned by the list from here on and closed with it.
    pub fn from_file(file: File, config: WordListConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            "Word list settings: case_sensitive={}, cache_percent={}, encoding={}, segment_size={}",
            config.case_sensitive,
            config.cache_percent,
            config.encoding.name(),
            config.segment_size
        );

        let file_len = file.metadata()?.len();
        let segments = SegmentMap::map(&file, file_len, config.segment_size)?;
        let index = OffsetIndex::build(&segments, config.cache_percent)?;
        let len = index.line_count();

        info!(
            "Word list ready: {} words, {} bytes, {} segments, {} cached offsets",
            len,
            file_len,
            segments.segments().len(),
            index.breakpoints().len()
        );

        Ok(Self {
            len,
            file_len,
            config,
            state: RwLock::new(Some(MappedState { file, segments, index })),
        })
    }

    /// Unmap all segments and close the file.
    ///
    /// Later reads fail with [`WordListError::Closed`]. Closing twice is a no-op.
    pub fn close(&self) -> Result<()> {
        let mut state = self.state.write().map_err(|_| WordListError::LockPoisoned)?;
        if state.take().is_some() {
            info!("Word list closed ({} words)", self.len);
        }
        Ok(())
    }

    pub fn is_closed(&self) -> Result<bool> {
        let state = self.state.read().map_err(|_| WordListError::LockPoisoned)?;
        Ok(state.is_none())
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.comparator().is_case_sensitive()
    }

    pub fn cache_percent(&self) -> u8 {
        self.config.cache_percent
    }

    pub fn encoding(&self) -> &'static encoding_rs::Encoding {
        self.config.encoding
    }

    /// Size of the backing file when the list was built.
    pub fn file_len(&self) -> u64 {
        self.file_len
    }

    pub fn segment_count(&self) -> Result<usize> {
        self.with_state(|state| Ok(state.segments.segments().len()))
    }

    pub fn breakpoint_count(&self) -> Result<usize> {
        self.with_state(|state| Ok(state.index.breakpoints().len()))
    }

    fn with_state<T>(&self, f: impl FnOnce(&MappedState) -> Result<T>) -> Result<T> {
        let guard = self.state.read().map_err(|_| WordListError::LockPoisoned)?;
        let state = guard.as_ref().ok_or(WordListError::Closed)?;
        f(state)
    }
}

impl MappedState {
    /// Refuse to touch the mapping once the file has shrunk underneath it.
    fn check_length(&self, expected: u64) -> Result<()> {
        let actual = self.file.metadata()?.len();
        if actual < expected {
            return Err(WordListError::Truncated { expected, actual });
        }
        Ok(())
    }
}

impl WordList for MappedWordList {
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Result<String> {
        self.with_state(|state| {
            if index >= self.len {
                return Err(WordListError::IndexOutOfRange { index, len: self.len });
            }
            state.check_length(self.file_len)?;

            let offset = state.index.locate(&state.segments, index)?;
            let (record, bytes) = line::read_line(&state.segments, offset)?;
            trace!("Word {} at bytes {}..{}", index, record.start, record.end);

            utils::decode_strict(&bytes, self.config.encoding).ok_or(WordListError::Decode {
                index,
                encoding: self.config.encoding.name(),
            })
        })
    }

    fn comparator(&self) -> WordComparator {
        WordComparator::new(self.config.case_sensitive)
    }

    fn ensure_open(&self) -> Result<()> {
        self.with_state(|_| Ok(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn fixture(dir: &tempfile::TempDir) -> MappedWordList {
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "alpha\nbravo\ncharlie\n").unwrap();
        MappedWordList::open(&path).unwrap()
    }

    #[test]
    fn poisoned_lock_is_reported_everywhere() {
        let dir = tempfile::TempDir::new().unwrap();
        let list = fixture(&dir);
        assert!(!list.is_closed().unwrap());

        let _ = thread::scope(|s| {
            s.spawn(|| {
                let _guard = list.state.write().unwrap();
                panic!("poison the state lock");
            })
            .join()
        });

        assert!(matches!(list.is_closed(), Err(WordListError::LockPoisoned)));
        assert!(matches!(list.get(0), Err(WordListError::LockPoisoned)));
        assert!(matches!(list.contains("alpha"), Err(WordListError::LockPoisoned)));
        assert!(matches!(list.close(), Err(WordListError::LockPoisoned)));
    }

    #[test]
    fn accessors_reflect_configuration() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("words.txt");
        std::fs::write(&path, "Alpha\nbravo\n").unwrap();
        let config = WordListConfig::default()
            .case_sensitive(false)
            .encoding(encoding_rs::WINDOWS_1252);
        let list = MappedWordList::open_with(&path, config).unwrap();
        assert!(!list.is_case_sensitive());
        assert_eq!(list.encoding(), encoding_rs::WINDOWS_1252);
        assert_eq!(list.index_of("ALPHA").unwrap(), Some(0));
    }
}
