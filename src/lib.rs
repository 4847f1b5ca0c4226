//! タイルシートの各タイルの周りに, タイル自身の縁を複製した余白を付ける.

pub mod basis;
pub mod error;
pub mod fragment;
pub mod grid;
pub mod image;
pub mod padder;

#[cfg(test)]
mod testing;

pub use crate::{
    basis::{CornerMode, TileSize},
    error::PadError,
    padder::{pad, PadParam},
};
