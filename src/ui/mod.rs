//! Discord-facing presentation: colours, glyphs and embed conversion.
pub mod embed;
pub mod style;
