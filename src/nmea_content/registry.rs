use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::{Arc, LazyLock, PoisonError, RwLock},
};

use crate::{Error, FrameConfig, RawFrame, Result, nmea_content::Record};

/// A decoder for one sentence type.
pub type DecodeFn = dyn Fn(RawFrame) -> Result<Record> + Send + Sync;

static GLOBAL: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Maps sentence types to decoders.
///
/// Custom decoders registered at runtime take priority over the built-ins of
/// [`Record::decode_builtin`]. Lookups share a read lock; registration takes the write
/// lock. The decoder is cloned out before it runs, so a decoder may itself call into the
/// registry.
///
/// ```rust
/// use nmea_geo::{Error, Registry};
///
/// let registry = Registry::new();
/// assert!(matches!(
///     registry.decode("$GPXYZ,1,2*4F"),
///     Err(Error::UnsupportedType(prefix)) if prefix == "GPXYZ"
/// ));
/// ```
#[derive(Default)]
pub struct Registry {
    custom: RwLock<HashMap<String, Arc<DecodeFn>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry behind [`decode`] and [`register_decoder`].
    pub fn global() -> &'static Registry {
        &GLOBAL
    }

    /// Adds a decoder for `sentence_type`.
    ///
    /// Fails with [`Error::DuplicateRegistration`] if a custom decoder is already
    /// registered for that type; the first one stays active.
    pub fn register<F>(&self, sentence_type: &str, decoder: F) -> Result<()>
    where
        F: Fn(RawFrame) -> Result<Record> + Send + Sync + 'static,
    {
        let mut custom = self.custom.write().unwrap_or_else(PoisonError::into_inner);

        match custom.entry(sentence_type.to_string()) {
            Entry::Occupied(_) => {
                log::warn!("decoder for {sentence_type:?} already registered");
                Err(Error::DuplicateRegistration(sentence_type.to_string()))
            }
            Entry::Vacant(slot) => {
                log::debug!("registered decoder for {sentence_type:?}");
                slot.insert(Arc::new(decoder));
                Ok(())
            }
        }
    }

    /// `true` if a custom decoder is registered for `sentence_type`.
    pub fn is_registered(&self, sentence_type: &str) -> bool {
        self.lookup(sentence_type).is_some()
    }

    fn lookup(&self, sentence_type: &str) -> Option<Arc<DecodeFn>> {
        self.custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(sentence_type)
            .cloned()
    }

    /// Validates `line` with the default [`FrameConfig`] and decodes it.
    pub fn decode(&self, line: &str) -> Result<Record> {
        self.decode_with(line, &FrameConfig::default())
    }

    /// Validates `line` according to `config` and decodes it.
    pub fn decode_with(&self, line: &str, config: &FrameConfig) -> Result<Record> {
        let frame = RawFrame::parse_with(line, config)
            .inspect_err(|e| log::debug!("rejected line {line:?}: {e}"))?;

        log::trace!("frame {} with {} fields", frame.prefix(), frame.fields().len());

        let record = match self.lookup(frame.sentence_type()) {
            Some(decoder) => decoder(frame),
            None => Record::decode_builtin(frame),
        };

        record.inspect_err(|e| log::debug!("{e}"))
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let custom = self.custom.read().unwrap_or_else(PoisonError::into_inner);
        let mut types: Vec<&String> = custom.keys().collect();
        types.sort();

        f.debug_struct("Registry").field("custom", &types).finish()
    }
}

/// Validates and decodes one line with the global [`Registry`].
///
/// ```rust
/// use nmea_geo::{Error, decode};
///
/// assert!(matches!(
///     decode("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6B"),
///     Err(Error::ChecksumMismatch { expected: 0x6A, .. })
/// ));
/// ```
pub fn decode(line: &str) -> Result<Record> {
    Registry::global().decode(line)
}

/// Like [`decode`], with explicit framing rules.
pub fn decode_with(line: &str, config: &FrameConfig) -> Result<Record> {
    Registry::global().decode_with(line, config)
}

/// Registers a custom decoder with the global [`Registry`].
pub fn register_decoder<F>(sentence_type: &str, decoder: F) -> Result<()>
where
    F: Fn(RawFrame) -> Result<Record> + Send + Sync + 'static,
{
    Registry::global().register(sentence_type, decoder)
}
