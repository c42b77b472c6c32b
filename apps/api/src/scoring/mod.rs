// Lexical match scoring: text normalization and token-overlap scoring.
// Pure functions only; no I/O happens in this module.

pub mod normalizer;
pub mod scorer;
