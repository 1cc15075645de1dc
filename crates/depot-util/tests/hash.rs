use depot_util::hash::{digest_bytes, digest_file};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_digest_bytes_empty() {
    let digests = digest_bytes(b"");
    assert_eq!(digests.md5, "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(digests.sha1, "da39a3ee5e6b4b0d3255bfef95601890afd80709");
    assert_eq!(
        digests.sha256,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn test_digest_bytes_hello_world() {
    let digests = digest_bytes(b"hello world");
    assert_eq!(digests.md5, "5eb63bbbe01eeed093cb22bb8f5acdc3");
    assert_eq!(digests.sha1, "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed");
    assert_eq!(
        digests.sha256,
        "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
    );
}

#[test]
fn test_digest_lengths() {
    let digests = digest_bytes(b"depot");
    assert_eq!(digests.md5.len(), 32);
    assert_eq!(digests.sha1.len(), 40);
    assert_eq!(digests.sha256.len(), 64);
}

#[test]
fn test_digest_bytes_deterministic() {
    let a = digest_bytes(b"depot");
    let b = digest_bytes(b"depot");
    assert_eq!(a, b);
}

#[test]
fn test_digest_file_matches_bytes() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(b"hello world").unwrap();
    tmp.flush().unwrap();
    let file_digests = digest_file(tmp.path()).unwrap();
    assert_eq!(file_digests, digest_bytes(b"hello world"));
}

#[test]
fn test_digest_file_empty() {
    let tmp = NamedTempFile::new().unwrap();
    let digests = digest_file(tmp.path()).unwrap();
    assert_eq!(digests, digest_bytes(b""));
}

#[test]
fn test_digest_file_not_found() {
    let result = digest_file(Path::new("/nonexistent/path/file.jar"));
    assert!(result.is_err());
}
