//! Tests for the literal scanner and its longest-match race.

mod properties;
mod race;
