//! Fingerprinting: canonical JSON bytes and domain-separated SHA-256.
//!
//! Nothing in the kernel's graph model depends on `proof`; `proof` is used by
//! the graph snapshot fingerprint and by downstream result/report digests.

pub mod canon;
pub mod hash;
pub mod hash_domain;
