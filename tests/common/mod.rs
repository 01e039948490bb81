#![allow(dead_code)]

use loan_engine::domain::loan::LoanRequest;
use loan_engine::domain::ports::{LoanConfiguration, SegmentResolver};
use loan_engine::domain::segment::Segment;
use loan_engine::error::Result;
use loan_engine::infrastructure::in_memory::InMemorySegmentResolver;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Counts and orders every read made through [`LoanConfiguration`].
#[derive(Debug, Default)]
pub struct ConfigReads {
    min_amount: AtomicUsize,
    max_amount: AtomicUsize,
    max_period: AtomicUsize,
    order: Mutex<Vec<&'static str>>,
}

impl ConfigReads {
    fn record(&self, counter: &AtomicUsize, name: &'static str) {
        counter.fetch_add(1, Ordering::SeqCst);
        self.order.lock().unwrap().push(name);
    }

    pub fn min_amount(&self) -> usize {
        self.min_amount.load(Ordering::SeqCst)
    }

    pub fn max_amount(&self) -> usize {
        self.max_amount.load(Ordering::SeqCst)
    }

    pub fn max_period(&self) -> usize {
        self.max_period.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.min_amount() + self.max_amount() + self.max_period()
    }

    pub fn order(&self) -> Vec<&'static str> {
        self.order.lock().unwrap().clone()
    }
}

/// Configuration double; clones share the same read log.
#[derive(Debug, Clone)]
pub struct RecordingConfig {
    pub min_amount: Decimal,
    pub max_amount: Decimal,
    pub max_period: u32,
    pub reads: Arc<ConfigReads>,
}

impl RecordingConfig {
    pub fn new(min_amount: Decimal, max_amount: Decimal, max_period: u32) -> Self {
        Self {
            min_amount,
            max_amount,
            max_period,
            reads: Arc::new(ConfigReads::default()),
        }
    }
}

impl Default for RecordingConfig {
    fn default() -> Self {
        Self::new(dec!(2000), dec!(10000), 60)
    }
}

impl LoanConfiguration for RecordingConfig {
    fn min_amount(&self) -> Decimal {
        self.reads.record(&self.reads.min_amount, "min_amount");
        self.min_amount
    }

    fn max_amount(&self) -> Decimal {
        self.reads.record(&self.reads.max_amount, "max_amount");
        self.max_amount
    }

    fn max_period(&self) -> u32 {
        self.reads.record(&self.reads.max_period, "max_period");
        self.max_period
    }
}

/// Resolver double counting lookups.
#[derive(Debug, Clone)]
pub struct CountingResolver {
    inner: InMemorySegmentResolver,
    pub calls: Arc<AtomicUsize>,
}

impl CountingResolver {
    pub fn new(inner: InMemorySegmentResolver) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SegmentResolver for CountingResolver {
    fn resolve(&self, identifier: &str) -> Result<Segment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.resolve(identifier)
    }
}

pub fn loan_request() -> LoanRequest {
    LoanRequest::new("49002010976", dec!(5000), 12)
}

pub fn credit(modifier: Decimal) -> Segment {
    Segment::credit(modifier).expect("non-negative modifier")
}
