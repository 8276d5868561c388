//! Built-in file bodies, one module per artifact family.
//!
//! Every function here is pure: options in, text out. Fixed text lives in
//! `const` strings with `{{VARIABLE}}` placeholders; optional sections are
//! appended before substitution.

pub mod api;
pub mod auth;
pub mod docker;
pub mod kube;
pub mod lint;
pub mod page;
pub mod prisma;
pub mod service;
pub mod shadcn;
