//! Test doubles for provider contract tests
//!
//! `MockLuaDnsApi` keeps zones and records in memory and counts every
//! endpoint call, so tests can assert on the exact request budget of each
//! operation.

#![allow(dead_code)]

use async_trait::async_trait;
use libdns_core::{Context, Error, Result};
use libdns_luadns::{LuaDnsApi, LuaDnsRecord, LuaDnsZone};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

/// In-memory LuaDNS API that tracks calls
pub struct MockLuaDnsApi {
    zones: Vec<LuaDnsZone>,
    records: Mutex<Vec<LuaDnsRecord>>,
    next_id: AtomicU64,
    configured: bool,
    /// 1-based create call that fails with a 500
    fail_create_on: Option<usize>,
    /// 1-based update call that fails with a 500
    fail_update_on: Option<usize>,
    /// 1-based delete call that fails with a 500
    fail_delete_on: Option<usize>,
    list_zones_calls: AtomicUsize,
    list_records_calls: AtomicUsize,
    create_calls: AtomicUsize,
    update_calls: AtomicUsize,
    delete_calls: AtomicUsize,
}

impl MockLuaDnsApi {
    pub fn new() -> Self {
        Self {
            zones: Vec::new(),
            records: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(1000),
            configured: true,
            fail_create_on: None,
            fail_update_on: None,
            fail_delete_on: None,
            list_zones_calls: AtomicUsize::new(0),
            list_records_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// Add a zone to the account
    pub fn with_zone(mut self, id: u64, name: &str) -> Self {
        self.zones.push(LuaDnsZone {
            id,
            name: name.to_string(),
        });
        self
    }

    /// Seed an existing record
    pub fn with_record(
        self,
        id: u64,
        zone_id: u64,
        name: &str,
        record_type: &str,
        content: &str,
        ttl: u32,
    ) -> Self {
        self.records.lock().unwrap().push(LuaDnsRecord {
            id,
            name: name.to_string(),
            record_type: record_type.to_string(),
            content: content.to_string(),
            ttl,
            zone_id,
        });
        self
    }

    /// Make the n-th create call (1-based) fail
    pub fn failing_create_on(mut self, call: usize) -> Self {
        self.fail_create_on = Some(call);
        self
    }

    /// Make the n-th update call (1-based) fail
    pub fn failing_update_on(mut self, call: usize) -> Self {
        self.fail_update_on = Some(call);
        self
    }

    /// Make the n-th delete call (1-based) fail
    pub fn failing_delete_on(mut self, call: usize) -> Self {
        self.fail_delete_on = Some(call);
        self
    }

    /// Behave as if credentials were missing
    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn list_zones_calls(&self) -> usize {
        self.list_zones_calls.load(Ordering::SeqCst)
    }

    pub fn list_records_calls(&self) -> usize {
        self.list_records_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    pub fn delete_calls(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    /// Total requests issued
    pub fn total_calls(&self) -> usize {
        self.list_zones_calls()
            + self.list_records_calls()
            + self.create_calls()
            + self.update_calls()
            + self.delete_calls()
    }

    /// Snapshot of stored records
    pub fn stored(&self) -> Vec<LuaDnsRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl LuaDnsApi for MockLuaDnsApi {
    fn ensure_configured(&self) -> Result<()> {
        if self.configured {
            Ok(())
        } else {
            Err(Error::config("email is required"))
        }
    }

    async fn list_zones(&self, ctx: &Context) -> Result<Vec<LuaDnsZone>> {
        ctx.run(async {
            self.list_zones_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.zones.clone())
        })
        .await
    }

    async fn list_records(&self, ctx: &Context, zone_id: u64) -> Result<Vec<LuaDnsRecord>> {
        ctx.run(async {
            self.list_records_calls.fetch_add(1, Ordering::SeqCst);
            let records = self.records.lock().unwrap();
            Ok(records
                .iter()
                .filter(|r| r.zone_id == zone_id)
                .cloned()
                .collect())
        })
        .await
    }

    async fn create_record(
        &self,
        ctx: &Context,
        zone_id: u64,
        record: &LuaDnsRecord,
    ) -> Result<LuaDnsRecord> {
        ctx.run(async {
            let call = self.create_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_create_on == Some(call) {
                return Err(Error::api(500, "internal server error"));
            }

            let created = LuaDnsRecord {
                id: self.next_id.fetch_add(1, Ordering::SeqCst),
                zone_id,
                ..record.clone()
            };
            self.records.lock().unwrap().push(created.clone());
            Ok(created)
        })
        .await
    }

    async fn update_record(
        &self,
        ctx: &Context,
        zone_id: u64,
        record_id: u64,
        record: &LuaDnsRecord,
    ) -> Result<LuaDnsRecord> {
        ctx.run(async {
            let call = self.update_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_update_on == Some(call) {
                return Err(Error::api(500, "internal server error"));
            }

            let mut records = self.records.lock().unwrap();
            let slot = records
                .iter_mut()
                .find(|r| r.id == record_id && r.zone_id == zone_id)
                .ok_or_else(|| Error::api(404, "record not found"))?;

            *slot = LuaDnsRecord {
                id: record_id,
                zone_id,
                ..record.clone()
            };
            Ok(slot.clone())
        })
        .await
    }

    async fn delete_record(&self, ctx: &Context, zone_id: u64, record_id: u64) -> Result<()> {
        ctx.run(async {
            let call = self.delete_calls.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_delete_on == Some(call) {
                return Err(Error::api(500, "internal server error"));
            }

            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| !(r.id == record_id && r.zone_id == zone_id));
            if records.len() == before {
                return Err(Error::api(404, "record not found"));
            }
            Ok(())
        })
        .await
    }
}
