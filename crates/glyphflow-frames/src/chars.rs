//! Glyph constants for generated frames.

/// Filled cell of a loading bar.
pub const FILLED: char = '█';

/// Empty cell of a loading bar.
pub const EMPTY: char = '⎕';
