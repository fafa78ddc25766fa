// src/config/mod.rs

pub mod consts;
pub mod mail;

pub use mail::MailConfig;
