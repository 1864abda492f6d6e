//! Batch orchestration: resolve, parse, format, emit
//!
//! Each supported unit is processed independently on a rayon pool and tagged with
//! its input index; results are sorted by that index before assembly, so worker
//! completion order never shows in the output. No per-file problem escapes this
//! module: malformed source yields a partial outline, and adapter faults (errors
//! or panics) yield an empty record.

use crate::config::OutlineConfig;
use crate::error::{OutlineError, Result};
use crate::extractors::base::{OutlineRecord, ParseOutcome, SourceUnit};
use crate::extractors::ExtractorManager;
use crate::language::{LanguageRegistry, LanguageTag};
use crate::outline::{OutlineCache, OutlineFormatter};
use rayon::prelude::*;
use regex::Regex;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, LazyLock};
use std::time::Instant;
use tracing::{debug, error, warn};

/// `C:\` and `C:/` style roots, absolute on Windows whatever the host
static DRIVE_ROOT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]:[\\/]").expect("static drive root regex"));

/// Shared flag for all-or-nothing batch cancellation
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

pub struct OutlineEngine<'r> {
    config: OutlineConfig,
    registry: &'r LanguageRegistry,
    manager: ExtractorManager,
    formatter: OutlineFormatter,
    cache: Option<OutlineCache>,
    pool: rayon::ThreadPool,
}

impl<'r> OutlineEngine<'r> {
    /// Create an engine with its own worker pool.
    ///
    /// The registry is borrowed for the engine's lifetime and never modified.
    pub fn new(config: OutlineConfig, registry: &'r LanguageRegistry) -> Result<Self> {
        config.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            // 0 lets rayon pick one thread per core
            .num_threads(config.worker_threads.unwrap_or(0))
            .thread_name(|i| format!("outline-worker-{}", i))
            .build()?;

        Ok(Self {
            formatter: OutlineFormatter::from_config(&config),
            manager: ExtractorManager::new(),
            config,
            registry,
            cache: None,
            pool,
        })
    }

    /// Reuse parse outcomes for content seen before
    pub fn with_cache(mut self, cache: OutlineCache) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn config(&self) -> &OutlineConfig {
        &self.config
    }

    pub fn worker_threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Outline a batch. One record per supported input, in input order.
    pub fn run(&self, units: &[SourceUnit]) -> Result<Vec<OutlineRecord>> {
        self.run_with_cancel(units, &CancellationToken::new())
    }

    /// [`Self::run`] that gives up with [`OutlineError::Cancelled`] once `token`
    /// is cancelled, discarding everything computed so far.
    pub fn run_with_cancel(
        &self,
        units: &[SourceUnit],
        token: &CancellationToken,
    ) -> Result<Vec<OutlineRecord>> {
        let started = Instant::now();
        validate_batch(units)?;

        let supported: Vec<(usize, LanguageTag)> = units
            .iter()
            .enumerate()
            .filter_map(|(index, unit)| self.registry.resolve(&unit.path).map(|tag| (index, tag)))
            .collect();

        let mut tagged: Vec<(usize, Option<OutlineRecord>)> = self.pool.install(|| {
            supported
                .par_iter()
                .map(|&(index, language)| {
                    if token.is_cancelled() {
                        return (index, None);
                    }
                    (index, Some(self.outline_unit(&units[index], language)))
                })
                .collect()
        });

        if token.is_cancelled() {
            debug!("Outline batch of {} inputs cancelled", units.len());
            return Err(OutlineError::Cancelled);
        }

        tagged.sort_unstable_by_key(|(index, _)| *index);
        let records = tagged
            .into_iter()
            .map(|(_, record)| record)
            .collect::<Option<Vec<_>>>()
            .ok_or(OutlineError::Cancelled)?;

        debug!(
            "Outlined {} inputs: {} records, {} skipped, {:?} elapsed",
            units.len(),
            records.len(),
            units.len() - records.len(),
            started.elapsed()
        );
        Ok(records)
    }

    fn outline_unit(&self, unit: &SourceUnit, language: LanguageTag) -> OutlineRecord {
        self.outline_with(unit, language, || self.parse(language, &unit.content))
    }

    /// Run `parse` behind the fault boundary and render its outcome
    fn outline_with<F>(&self, unit: &SourceUnit, language: LanguageTag, parse: F) -> OutlineRecord
    where
        F: FnOnce() -> Result<ParseOutcome>,
    {
        match panic::catch_unwind(AssertUnwindSafe(parse)) {
            Ok(Ok(outcome)) => {
                if let Some(diagnostic) = &outcome.diagnostic {
                    warn!("{}: partial {} outline, {}", unit.path, language, diagnostic);
                }
                OutlineRecord::new(
                    unit.path.as_str(),
                    self.formatter.format(&unit.path, &outcome.declarations),
                )
            }
            Ok(Err(e)) => {
                error!("{}: {}", unit.path, e);
                OutlineRecord::empty(unit.path.as_str())
            }
            Err(payload) => {
                let fault = OutlineError::parser_fault(language, panic_message(payload.as_ref()));
                error!("{}: {}", unit.path, fault);
                OutlineRecord::empty(unit.path.as_str())
            }
        }
    }

    fn parse(&self, language: LanguageTag, content: &str) -> Result<ParseOutcome> {
        let width = self.config.max_signature_width;
        if let Some(cache) = &self.cache {
            if let Some(outcome) = cache.get(content, language, width) {
                return Ok(outcome);
            }
        }

        let outcome = self.manager.parse_declarations(language, content, width)?;
        if let Some(cache) = &self.cache {
            cache.insert(content, language, width, outcome.clone());
        }
        Ok(outcome)
    }
}

/// Structural checks on the whole batch, before any unit is processed
fn validate_batch(units: &[SourceUnit]) -> Result<()> {
    for (index, unit) in units.iter().enumerate() {
        if unit.path.trim().is_empty() {
            return Err(OutlineError::invalid_input(index, "path is empty"));
        }
        if unit.path.contains('\0') {
            return Err(OutlineError::invalid_input(index, "path contains a NUL byte"));
        }
        if unit.path.starts_with(['/', '\\'])
            || DRIVE_ROOT_RE.is_match(&unit.path)
            || Path::new(&unit.path).is_absolute()
        {
            return Err(OutlineError::invalid_input(
                index,
                format!("path '{}' is not relative", unit.path),
            ));
        }
    }
    Ok(())
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "adapter panicked".to_string()
    }
}
