//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64url, constant-time compare)
//! - Password hashing (Argon2id)
//! - Signed bearer tokens (JWT HS256 compact form)
//! - Approximate string matching for duplicate detection

pub mod crypto;
pub mod fuzzy;
pub mod password;
pub mod token;
