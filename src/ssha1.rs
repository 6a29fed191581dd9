use crate::base::Sha1;
use crate::error::Error;
use crate::ssha::Digest;
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

/// The size in bytes of the underlying SHA-1 digest.
pub const DIGEST_SIZE: usize = 20;

/// Block size, in bytes, of the underlying SHA-1 hash.
pub const BLOCK_SIZE: usize = 64;

/// Number of salt bytes generated when the caller does not choose a size.
pub const DEFAULT_SALT_SIZE: usize = 20;

/// Minimum allowed number of salt bytes.
pub const MIN_SALT_SIZE: usize = 1;

/// new returns a salted SHA-1 digest with a random salt of the default
/// size, drawn from the operating system's secure random source.
pub fn new() -> Result<Digest<Sha1>, Error> {
    new_for_salt_size(DEFAULT_SALT_SIZE)
}

/// new_with_salt returns a salted SHA-1 digest with the specified salt.
/// The salt must be at least [`MIN_SALT_SIZE`] bytes and stays attached for
/// the life of the instance.
pub fn new_with_salt(salt: Vec<u8>) -> Result<Digest<Sha1>, Error> {
    Digest::new(Sha1, salt)
}

/// new_for_salt_size returns a salted SHA-1 digest with a random salt of
/// `num_salt_bytes` bytes, drawn from the operating system's secure random
/// source. The size must be at least [`MIN_SALT_SIZE`].
pub fn new_for_salt_size(num_salt_bytes: usize) -> Result<Digest<Sha1>, Error> {
    new_for_salt_size_with_rng(num_salt_bytes, &mut OsRng)
}

/// new_for_salt_size_with_rng is [`new_for_salt_size`] with a caller-chosen
/// random source, for deployments that pin their entropy source and for
/// deterministic tests.
pub fn new_for_salt_size_with_rng<R: RngCore + CryptoRng>(
    num_salt_bytes: usize,
    rng: &mut R,
) -> Result<Digest<Sha1>, Error> {
    Digest::with_random_salt(Sha1, num_salt_bytes, rng)
}

/// sum returns the combined SSHA1 digest of `data`. With `None`, a salt of
/// the default size is generated; otherwise the given salt is used and must
/// be at least one byte long.
pub fn sum(data: &[u8], salt: Option<&[u8]>) -> Result<Vec<u8>, Error> {
    let mut d = match salt {
        None => new()?,
        Some(salt) => new_with_salt(salt.to_vec())?,
    };
    d.write(data)?;
    Ok(d.sum(Vec::new()))
}

/// validate reports whether `sample` is the plaintext behind a previously
/// produced combined digest. The salt is recovered from the trailing bytes
/// of `hash`, the sample is re-digested under it, and the two combined
/// values are compared over their full length, salt included.
pub fn validate(hash: &[u8], sample: &[u8]) -> Result<bool, Error> {
    let length = hash.len();
    if length < DIGEST_SIZE {
        return Err(Error::TooShortForBaseHash);
    }

    let salt_size = length - DIGEST_SIZE;
    if salt_size == 0 {
        return Err(Error::MissingSalt);
    }

    let salt = &hash[length - salt_size..];
    let mut d = new_with_salt(salt.to_vec())?;
    d.write(sample)?;
    let recomputed = d.sum(Vec::new());

    Ok(recomputed == hash)
}
