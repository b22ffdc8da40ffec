// Resume intake: validate → persist → extract → generate.
// Extraction and question generation sit behind traits so real backends can be
// swapped in through `AppState` without touching the handler.

pub mod document;
pub mod extractor;
pub mod handlers;
pub mod questions;
pub mod service;
pub mod storage;
