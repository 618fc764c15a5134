//! Wire types for the draft article service
//!
//! This crate mirrors the JSON shapes exchanged with the editorial draft API:
//! - Article, NewArticle, UpdatedArticle: a draft article and its create/patch payloads
//! - Localized records: title, content, tags, etc. paired with a language code
//! - Copyright, License, Author: rights metadata
//! - Agreement, UpdatedAgreement: stored rightsholder agreements
//! - UserData, UpdatedUserData: per-editor preferences
//!
//! Decoding goes through [`codec`], which reports shape mismatches, and
//! [`validation`] checks relations between fields that the types cannot.

pub mod agreement;
pub mod article;
pub mod author;
pub mod codec;
pub mod config;
pub mod copyright;
pub mod localized;
pub mod new_article;
pub mod patch;
pub mod related_content;
pub mod status;
pub mod updated;
pub mod user_data;
pub mod validation;

pub use agreement::*;
pub use article::*;
pub use author::*;
pub use codec::*;
pub use config::*;
pub use copyright::*;
pub use localized::*;
pub use new_article::*;
pub use patch::*;
pub use related_content::*;
pub use status::*;
pub use updated::*;
pub use user_data::*;
pub use validation::*;
