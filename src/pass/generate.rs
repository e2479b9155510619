//! Password generation.

use log::trace;
use zeroize::Zeroize;

use super::charset;
use crate::config::Config;
use crate::error::Error;
use crate::source::{OsEntropy, RandomSource};

/// Password generator over an injected randomness source.
///
/// The source is held for the generator's lifetime and consumed one byte
/// per accepted draw, so entropy use is proportional to password length.
pub struct Generator<S: RandomSource> {
    source: S,
}

impl Generator<OsEntropy> {
    /// Generator backed by operating system entropy.
    pub fn new() -> Self {
        Self::with_source(OsEntropy)
    }
}

impl Default for Generator<OsEntropy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> Generator<S> {
    /// Generator over a caller-supplied source. Injecting a fixed or
    /// seeded source makes generation fully reproducible.
    pub fn with_source(source: S) -> Self {
        Generator { source }
    }

    /// Generate a single password based on `config`.
    ///
    /// Returns exactly `config.length` characters, each a member of the
    /// resolved character pool; a zero length yields an empty string. On
    /// any source failure no partial password is returned.
    pub fn generate(&mut self, config: &Config) -> Result<String, Error> {
        let chars = charset::build(config);
        if chars.is_empty() {
            return Err(Error::InvalidConfiguration);
        }

        trace!(
            "generating {} character password from a pool of {}",
            config.length,
            chars.len()
        );

        let mut bytes = Vec::with_capacity(config.length);
        for _ in 0..config.length {
            match sample(&mut self.source, &chars) {
                Ok(byte) => bytes.push(byte),
                Err(err) => {
                    bytes.zeroize();
                    return Err(Error::SourceUnavailable(err));
                }
            }
        }

        // Safety: the pool is all ASCII
        Ok(unsafe { String::from_utf8_unchecked(bytes) })
    }
}

/// Draw one pool member. Bytes at or above the largest multiple of the
/// pool size are rejected and redrawn, keeping the modulo reduction
/// uniform when the pool size does not divide 256.
#[inline]
fn sample<S: RandomSource>(source: &mut S, chars: &[u8]) -> std::io::Result<u8> {
    let zone = 256 - (256 % chars.len());
    loop {
        let mut byte = [0u8; 1];
        source.fill_bytes(&mut byte)?;
        if (byte[0] as usize) < zone {
            return Ok(chars[byte[0] as usize % chars.len()]);
        }
    }
}
