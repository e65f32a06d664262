//! Core traits for DNS record management
//!
//! This module defines the abstract interfaces that all providers must follow.
//!
//! - [`RecordGetter`], [`RecordAppender`], [`RecordSetter`], [`RecordDeleter`]:
//!   the four record capabilities
//! - [`RecordProvider`]: all four capabilities together
//! - [`ProviderFactory`]: construction from configuration

pub mod record_provider;

pub use record_provider::{
    ProviderFactory, RecordAppender, RecordDeleter, RecordGetter, RecordProvider, RecordSetter,
};
