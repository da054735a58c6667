//! Byte supply: the [`ByteSource`] capability and the immutable [`ByteSample`].
//!
//! Production callers use [`RngSource::os`], which reads the operating
//! system's cryptographic generator. Nothing here falls back to a weaker
//! generator if that source degrades.
//!
//! [`RngSource::seeded`] and [`ReplaySource`] give deterministic samples for
//! tests and for reproducing a recorded reading.

use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use tracing::warn;

use crate::error::{CompassError, Result};

/// Minimum sample length: six bytes drive the direction derivation and four
/// make the first Monte Carlo point.
pub const MIN_SAMPLE_LEN: usize = 6;

// ─── ByteSample ─────────────────────────────────────────────────────────────

/// Ordered, immutable block of random bytes.
///
/// Created fresh for every scan or probe and discarded after reduction; only
/// a [`visual_slice`](Self::visual_slice) is retained downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteSample {
    bytes: Vec<u8>,
}

impl ByteSample {
    /// Wrap raw bytes, rejecting samples shorter than [`MIN_SAMPLE_LEN`].
    pub fn new(bytes: Vec<u8>) -> Result<Self> {
        if bytes.len() < MIN_SAMPLE_LEN {
            return Err(CompassError::SampleTooShort {
                len: bytes.len(),
                min: MIN_SAMPLE_LEN,
            });
        }
        Ok(Self { bytes })
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of bytes in the sample.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Copy of the leading `n` bytes (fewer if the sample is shorter).
    pub fn visual_slice(&self, n: usize) -> Vec<u8> {
        self.bytes[..n.min(self.bytes.len())].to_vec()
    }
}

impl AsRef<[u8]> for ByteSample {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// ─── ByteSource ─────────────────────────────────────────────────────────────

/// Supplier of uniformly distributed random bytes.
///
/// Implementations must be individually reentrant; the pipeline performs no
/// cross-call synchronisation.
pub trait ByteSource {
    /// Fill `dest` completely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]);

    /// Draw a fresh [`ByteSample`] of `len` bytes.
    fn sample(&mut self, len: usize) -> Result<ByteSample> {
        let mut buf = vec![0u8; len];
        self.fill_bytes(&mut buf);
        ByteSample::new(buf)
    }
}

impl<B: ByteSource + ?Sized> ByteSource for &mut B {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (**self).fill_bytes(dest);
    }
}

/// [`ByteSource`] backed by any `rand` generator.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: RngCore> RngSource<R> {
    /// Wrap an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<OsRng> {
    /// The operating system's cryptographic generator.
    pub fn os() -> Self {
        Self::new(OsRng)
    }
}

impl RngSource<StdRng> {
    /// Deterministic generator for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> ByteSource for RngSource<R> {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest);
    }
}

/// Replays a recorded byte stream, wrapping to the start when exhausted.
#[derive(Clone, Debug)]
pub struct ReplaySource {
    recording: Vec<u8>,
    cursor: usize,
}

impl ReplaySource {
    /// Build a replay source; the recording must not be empty.
    pub fn new(recording: Vec<u8>) -> Result<Self> {
        if recording.is_empty() {
            return Err(CompassError::EmptyReplay);
        }
        Ok(Self { recording, cursor: 0 })
    }

    /// Bytes consumed so far, modulo the recording length.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl ByteSource for ReplaySource {
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for slot in dest.iter_mut() {
            *slot = self.recording[self.cursor];
            self.cursor += 1;
            if self.cursor == self.recording.len() {
                warn!(len = self.recording.len(), "replay source wrapped; bytes are being reused");
                self.cursor = 0;
            }
        }
    }
}
