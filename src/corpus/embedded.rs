//! Embedded corpora
//!
//! Transcription tables compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/common_lemmas.rs"));
include!(concat!(env!("OUT_DIR"), "/common_words.rs"));
include!(concat!(env!("OUT_DIR"), "/all_words.rs"));
