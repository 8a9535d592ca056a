//! Visual theme for the MEMO-RE screens.

pub mod colors;
