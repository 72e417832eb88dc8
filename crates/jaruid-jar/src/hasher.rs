use jaruid_util::hash::ContentHasher;

use crate::reader::ReadJar;

/// Compute the jar content hash (§4.2): base64 SHA-256 over the
/// concatenation of each entry's uncompressed bytes, in the order they
/// were enumerated by the reader. Two jars differing only in deflate
/// level or compression method hash identically.
pub fn hash_jar_contents(read: &ReadJar) -> String {
    let mut hasher = ContentHasher::new();
    for entry in &read.uncompressed_entries {
        hasher.update(entry);
    }
    hasher.finish_base64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_jar;
    use std::io::{Cursor, Write};

    fn build_test_jar(entries: &[(&str, &[u8])], method: zip::CompressionMethod) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut writer = zip::ZipWriter::new(Cursor::new(&mut buf));
            let options: zip::write::FileOptions<()> =
                zip::write::FileOptions::default().compression_method(method);
            for (name, data) in entries {
                writer.start_file(*name, options).unwrap();
                writer.write_all(data).unwrap();
            }
            writer.finish().unwrap();
        }
        buf
    }

    #[test]
    fn hash_is_independent_of_compression_method() {
        let entries: &[(&str, &[u8])] = &[("a.txt", b"hello"), ("b.txt", b"world")];
        let stored = build_test_jar(entries, zip::CompressionMethod::Stored);
        let deflated = build_test_jar(entries, zip::CompressionMethod::Deflated);

        let hash_stored = hash_jar_contents(&read_jar(&stored).unwrap());
        let hash_deflated = hash_jar_contents(&read_jar(&deflated).unwrap());
        assert_eq!(hash_stored, hash_deflated);
    }

    #[test]
    fn different_content_hashes_differently() {
        let a = build_test_jar(&[("a.txt", b"hello")], zip::CompressionMethod::Stored);
        let b = build_test_jar(&[("a.txt", b"goodbye")], zip::CompressionMethod::Stored);
        assert_ne!(
            hash_jar_contents(&read_jar(&a).unwrap()),
            hash_jar_contents(&read_jar(&b).unwrap())
        );
    }
}
