//! Jar reading: stream a compressed jar's entries into manifest, pom, and
//! class-file views, plus a compression-independent content hash.

pub mod hasher;
pub mod reader;

pub use hasher::hash_jar_contents;
pub use reader::{read_jar, ReadJar};
