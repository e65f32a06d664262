//! Shared test utilities for contract tests
//!
//! Provides an in-memory record provider with call counters.

#![allow(dead_code)]

use async_trait::async_trait;
use libdns_core::{
    Context, Error, ProviderConfig, ProviderFactory, Record, RecordAppender, RecordDeleter,
    RecordGetter, RecordProvider, RecordSetter, Result,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// In-memory record provider keyed by zone
#[derive(Default)]
pub struct MemoryProvider {
    records: Mutex<Vec<(String, Record)>>,
    next_id: AtomicUsize,
    calls: AtomicUsize,
    /// Artificial latency applied to every call
    latency: Option<Duration>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    async fn step(&self, ctx: &Context) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ctx.run(async {
            if let Some(latency) = self.latency {
                tokio::time::sleep(latency).await;
            }
            Ok(())
        })
        .await
    }

    fn zone_records(&self, zone: &str) -> Vec<Record> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(z, _)| z == zone)
            .map(|(_, r)| r.clone())
            .collect()
    }

    fn insert(&self, zone: &str, record: &Record) -> Record {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let stored = record.clone().with_id(id.to_string());
        self.records
            .lock()
            .unwrap()
            .push((zone.to_string(), stored.clone()));
        stored
    }
}

#[async_trait]
impl RecordGetter for MemoryProvider {
    async fn get_records(&self, ctx: &Context, zone: &str) -> Result<Vec<Record>> {
        self.step(ctx).await?;
        Ok(self.zone_records(zone))
    }
}

#[async_trait]
impl RecordAppender for MemoryProvider {
    async fn append_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        let mut created = Vec::with_capacity(records.len());
        for record in records {
            self.step(ctx).await?;
            created.push(self.insert(zone, record));
        }
        Ok(created)
    }
}

#[async_trait]
impl RecordSetter for MemoryProvider {
    async fn set_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        let mut stored = Vec::with_capacity(records.len());
        for record in records {
            self.step(ctx).await?;
            let mut all = self.records.lock().unwrap();
            let existing = all.iter_mut().find(|(z, r)| {
                z == zone && r.name == record.name && r.record_type == record.record_type
            });
            match existing {
                Some((_, slot)) => {
                    let updated = record.clone().with_id(slot.id.clone());
                    *slot = updated.clone();
                    stored.push(updated);
                }
                None => {
                    drop(all);
                    stored.push(self.insert(zone, record));
                }
            }
        }
        Ok(stored)
    }
}

#[async_trait]
impl RecordDeleter for MemoryProvider {
    async fn delete_records(
        &self,
        ctx: &Context,
        zone: &str,
        records: &[Record],
    ) -> Result<Vec<Record>> {
        let mut deleted = Vec::new();
        for record in records {
            self.step(ctx).await?;
            let mut all = self.records.lock().unwrap();
            let before = all.len();
            all.retain(|(z, r)| {
                !(z == zone && r.name == record.name && r.record_type == record.record_type)
            });
            if all.len() < before {
                deleted.push(record.clone());
            }
        }
        Ok(deleted)
    }
}

impl RecordProvider for MemoryProvider {
    fn provider_name(&self) -> &'static str {
        "memory"
    }
}

/// Factory that counts how often it was asked to build a provider
#[derive(Clone, Default)]
pub struct MemoryFactory {
    pub created: Arc<AtomicUsize>,
}

impl ProviderFactory for MemoryFactory {
    fn create(&self, config: &ProviderConfig) -> Result<Box<dyn RecordProvider>> {
        match config {
            ProviderConfig::Custom { factory, .. } if factory == "memory" => {
                self.created.fetch_add(1, Ordering::SeqCst);
                Ok(Box::new(MemoryProvider::new()))
            }
            _ => Err(Error::config("Invalid config for memory provider")),
        }
    }
}

pub fn memory_config() -> ProviderConfig {
    ProviderConfig::Custom {
        factory: "memory".to_string(),
        config: serde_json::json!({}),
    }
}
