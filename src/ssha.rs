use crate::base::BaseHash;
use crate::error::Error;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use rand::{CryptoRng, RngCore};
use std::fmt;

const OUTPUT_PREFIX: &str = "{SSHA}";

/// Digest is a salted digest over the base hash `H`.
///
/// It accumulates plaintext written into it and, on demand, produces the
/// combined value `H(accumulated || salt) || salt`. The salt is fixed for
/// the lifetime of the instance; the accumulated input can be cleared with
/// [`reset`](Digest::reset) and the instance reused for an independent
/// message under the same salt.
pub struct Digest<H: BaseHash> {
    hash: H,
    salt: Vec<u8>,
    data: Vec<u8>, // plaintext written since creation or the last reset
}

impl<H: BaseHash> Digest<H> {
    /// new returns a Digest salted with the caller-supplied bytes.
    /// The salt must be at least one byte long.
    pub fn new(hash: H, salt: Vec<u8>) -> Result<Digest<H>, Error> {
        if salt.is_empty() {
            return Err(Error::SaltTooShort);
        }
        Ok(Digest {
            hash,
            salt,
            data: Vec::new(),
        })
    }

    /// with_random_salt returns a Digest salted with `salt_len` bytes drawn
    /// from `rng`. The source must yield exactly `salt_len` bytes or fail;
    /// a short read surfaces as [`Error::Random`].
    pub fn with_random_salt<R: RngCore + CryptoRng>(
        hash: H,
        salt_len: usize,
        rng: &mut R,
    ) -> Result<Digest<H>, Error> {
        if salt_len == 0 {
            return Err(Error::SaltTooShort);
        }
        let mut salt = vec![0u8; salt_len];
        rng.try_fill_bytes(&mut salt)?;
        Digest::new(hash, salt)
    }

    /// write adds more data to the running digest. It cannot fail; the
    /// Result carries the accepted byte count for streaming-write symmetry.
    pub fn write(&mut self, p: &[u8]) -> Result<usize, Error> {
        self.data.extend_from_slice(p);
        Ok(p.len())
    }

    /// reset clears the accumulated input. The salt remains unchanged.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    /// size returns the number of bytes sum produces: one base digest plus
    /// the salt.
    pub fn size(&self) -> usize {
        self.hash.output_len() + self.salt.len()
    }

    /// block_size returns the base primitive's block size.
    pub fn block_size(&self) -> usize {
        self.hash.block_len()
    }

    /// salt returns the salt attached to this instance.
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    /// sum appends the combined digest `H(accumulated || salt) || salt` to
    /// `buf` and returns the resulting vector. It does not change the
    /// accumulated input, so the caller can keep writing and summing.
    pub fn sum(&self, mut buf: Vec<u8>) -> Vec<u8> {
        // Concatenate into a fresh buffer; growing the accumulator in place
        // here could leak salt bytes into the state seen by the next write.
        let mut msg = Vec::with_capacity(self.data.len() + self.salt.len());
        msg.extend_from_slice(&self.data);
        msg.extend_from_slice(&self.salt);

        let d = self.hash.digest(&msg);
        buf.reserve(d.len() + self.salt.len());
        buf.extend_from_slice(&d);
        buf.extend_from_slice(&self.salt);
        buf
    }

    /// hex_string returns the combined digest as lowercase hexadecimal.
    pub fn hex_string(&self) -> String {
        hex::encode(self.sum(Vec::new()))
    }
}

/// The `{SSHA}`-prefixed, base64-encoded form of the combined digest, as
/// stored in directory-service password attributes.
impl<H: BaseHash> fmt::Display for Digest<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            OUTPUT_PREFIX,
            BASE64_STANDARD.encode(self.sum(Vec::new()))
        )
    }
}
