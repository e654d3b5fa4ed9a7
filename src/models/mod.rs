//! Data models and transfer types

pub mod livro;
