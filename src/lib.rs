//! gcmbox - Password-based file encryption using AES-256-GCM and PBKDF2

#![forbid(unsafe_code)]

pub mod cipher;
pub mod config;
pub mod container;
pub mod error;
pub mod file_ops;
pub mod kdf;
pub mod passphrase;
pub mod secretcrypt;
