//! Common test utilities: an in-memory store with transactional batches

#![allow(dead_code)]

use async_trait::async_trait;
use otp_settings::contract::{FlagUpdate, OtpSetting};
use otp_settings::domain::repository::OtpSettingsStore;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

/// In-memory store. Batch operations work on a staged copy and only publish
/// it when every entry succeeded, standing in for a database transaction.
#[derive(Clone, Default)]
pub struct MockStore {
    rows: Arc<RwLock<Vec<OtpSetting>>>,
    calls: Arc<AtomicUsize>,
    insert_batches: Arc<AtomicUsize>,
    fail_on_id: Arc<RwLock<Option<Uuid>>>,
    fail_reads: Arc<RwLock<bool>>,
    fail_inserts: Arc<RwLock<bool>>,
    concurrent_seed: Arc<RwLock<Option<Vec<OtpSetting>>>>,
}

impl MockStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<OtpSetting>) -> Self {
        let store = Self::new();
        *store.rows.write() = records;
        store
    }

    /// Make any write touching `id` fail
    pub fn fail_on(&self, id: Uuid) {
        *self.fail_on_id.write() = Some(id);
    }

    /// Make every read fail
    pub fn fail_reads(&self) {
        *self.fail_reads.write() = true;
    }

    /// Make every insert fail
    pub fn fail_inserts(&self) {
        *self.fail_inserts.write() = true;
    }

    /// The next insert finds `winner` already stored by another writer and
    /// fails on the unique index
    pub fn seed_concurrently(&self, winner: Vec<OtpSetting>) {
        *self.concurrent_seed.write() = Some(winner);
    }

    /// Total number of trait method invocations
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn insert_batches(&self) -> usize {
        self.insert_batches.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Vec<OtpSetting> {
        self.rows.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<OtpSetting> {
        self.rows.read().iter().find(|r| r.id == id).cloned()
    }

    fn record_call(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_read(&self) -> anyhow::Result<()> {
        if *self.fail_reads.read() {
            anyhow::bail!("simulated connectivity failure");
        }
        Ok(())
    }

    fn check_write(&self, id: Uuid) -> anyhow::Result<()> {
        if *self.fail_on_id.read() == Some(id) {
            anyhow::bail!("simulated store failure for {id}");
        }
        Ok(())
    }

    /// Apply `f` to a staged copy; publish only on success
    fn in_transaction<T>(
        &self,
        f: impl FnOnce(&mut Vec<OtpSetting>) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let mut staged = self.rows.read().clone();
        let value = f(&mut staged)?;
        *self.rows.write() = staged;
        Ok(value)
    }
}

#[async_trait]
impl OtpSettingsStore for MockStore {
    async fn list_all(&self) -> anyhow::Result<Vec<OtpSetting>> {
        self.record_call();
        self.check_read()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<OtpSetting>> {
        self.record_call();
        self.check_read()?;
        Ok(self.get(id))
    }

    async fn insert_many(&self, records: &[OtpSetting]) -> anyhow::Result<()> {
        self.record_call();
        self.insert_batches.fetch_add(1, Ordering::SeqCst);
        if *self.fail_inserts.read() {
            anyhow::bail!("simulated insert failure");
        }
        if let Some(winner) = self.concurrent_seed.write().take() {
            *self.rows.write() = winner;
            anyhow::bail!("UNIQUE constraint failed: tb_otp_setting.action");
        }
        self.rows.write().extend_from_slice(records);
        Ok(())
    }

    async fn update_flags(
        &self,
        id: Uuid,
        email_enabled: bool,
        whatsapp_enabled: bool,
    ) -> anyhow::Result<()> {
        self.record_call();
        self.check_write(id)?;
        if let Some(row) = self.rows.write().iter_mut().find(|r| r.id == id) {
            row.email_enabled = email_enabled;
            row.whatsapp_enabled = whatsapp_enabled;
        }
        Ok(())
    }

    async fn save_all(&self, records: &[OtpSetting]) -> anyhow::Result<usize> {
        self.record_call();
        self.in_transaction(|rows| {
            let mut saved = 0;
            for record in records {
                self.check_write(record.id)?;
                if let Some(row) = rows.iter_mut().find(|r| r.id == record.id) {
                    *row = record.clone();
                    saved += 1;
                }
            }
            Ok(saved)
        })
    }

    async fn execute_flag_updates(&self, updates: &[FlagUpdate]) -> anyhow::Result<u64> {
        self.record_call();
        self.in_transaction(|rows| {
            let mut affected = 0;
            for update in updates {
                self.check_write(update.id)?;
                if let Some(row) = rows.iter_mut().find(|r| r.id == update.id) {
                    row.email_enabled = update.email_enabled;
                    row.whatsapp_enabled = update.whatsapp_enabled;
                    affected += 1;
                }
            }
            Ok(affected)
        })
    }
}

/// The four canonical records with both channels disabled
pub fn canonical_records() -> Vec<OtpSetting> {
    otp_settings::domain::SeedingPolicy::default().default_records()
}

pub fn action_names(settings: &[OtpSetting]) -> Vec<String> {
    let mut names: Vec<String> = settings.iter().filter_map(|s| s.action.clone()).collect();
    names.sort();
    names
}

pub fn sorted_canonical_actions() -> Vec<String> {
    let mut names: Vec<String> = otp_settings::domain::DEFAULT_ACTIONS
        .iter()
        .map(|a| (*a).to_owned())
        .collect();
    names.sort();
    names
}
