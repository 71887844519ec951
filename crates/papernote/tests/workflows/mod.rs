use super::*;

mod download;
mod metadata;
mod summarize;
