//! Tests for storage key generation.

use std::collections::HashSet;
use vermeer_core::{MediaKind, StorageKey};

#[test]
fn image_keys_use_jpg_extension() {
    let key = StorageKey::generate("ABC123", MediaKind::Image);
    assert_eq!(key.extension, "jpg");
    assert!(key.to_string().starts_with("ABC123_"));
    assert!(key.to_string().ends_with(".jpg"));
}

#[test]
fn video_keys_use_mp4_extension() {
    let key = StorageKey::generate("ABC123", MediaKind::Video);
    assert_eq!(key.extension, "mp4");
    assert!(key.to_string().ends_with(".mp4"));
}

#[test]
fn nonce_is_128_bit_hex() {
    let key = StorageKey::generate("ABC123", MediaKind::Image);
    assert_eq!(key.nonce.len(), 32);
    assert!(key.nonce.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn repeated_generation_never_collides() {
    let mut seen = HashSet::new();
    for _ in 0..1000 {
        let key = StorageKey::generate("SAME", MediaKind::Image);
        assert!(seen.insert(key.to_string()), "duplicate key generated");
    }
}

#[test]
fn key_renders_shortcode_nonce_extension() {
    let key = StorageKey::generate("CxYz123", MediaKind::Video);
    let rendered = key.to_string();
    let (prefix, rest) = rendered.split_once('_').unwrap();
    assert_eq!(prefix, "CxYz123");
    assert_eq!(rest.len(), 32 + ".mp4".len());
}
