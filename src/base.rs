use digest::crypto_common::BlockSizeUser;
use digest::typenum::Unsigned;
use digest::Digest;

/// BaseHash is the unsalted, fixed-output hash primitive the salted
/// construction is built on. Implementations must be deterministic and
/// carry no hidden state across calls.
pub trait BaseHash: Clone {
    /// digest hashes `data` in one shot and returns the fixed-size output.
    fn digest(&self, data: &[u8]) -> Vec<u8>;
    /// output_len returns the size in bytes of one digest output.
    fn output_len(&self) -> usize;
    /// block_len returns the block size in bytes of the primitive.
    fn block_len(&self) -> usize;
}

/// Sha1 is the SHA-1 base primitive used by the `ssha1` instantiation.
#[derive(Clone, Copy, Default)]
pub struct Sha1;

impl BaseHash for Sha1 {
    fn digest(&self, data: &[u8]) -> Vec<u8> {
        sha1::Sha1::digest(data).to_vec()
    }

    fn output_len(&self) -> usize {
        sha1::Sha1::output_size()
    }

    fn block_len(&self) -> usize {
        <sha1::Sha1 as BlockSizeUser>::BlockSize::USIZE
    }
}
