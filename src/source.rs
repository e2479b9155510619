//! Injectable randomness sources.

use std::io;

use rand::rngs::OsRng;
use rand::{RngCore, TryRngCore};

/// A source of random bytes for password sampling.
///
/// The generator holds one source for its lifetime and draws from it on
/// every call. Production code uses [`OsEntropy`]; tests inject a seeded
/// or sequential source to make generation reproducible. A source shared
/// across threads is responsible for its own synchronization.
pub trait RandomSource {
    /// Fill `buf` entirely with random bytes.
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()>;
}

/// Operating system entropy via `OsRng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl RandomSource for OsEntropy {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        OsRng.try_fill_bytes(buf).map_err(io::Error::other)
    }
}

/// Adapter for any infallible `rand` generator, e.g. a seeded `StdRng`.
#[derive(Debug, Clone)]
pub struct RngSource<R: RngCore>(pub R);

impl<R: RngCore> RandomSource for RngSource<R> {
    fn fill_bytes(&mut self, buf: &mut [u8]) -> io::Result<()> {
        self.0.fill_bytes(buf);
        Ok(())
    }
}
