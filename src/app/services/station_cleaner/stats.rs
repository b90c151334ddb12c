//! Cleaning statistics and result structures for the station cleaning pipeline
//!
//! This module provides types for tracking how many records survived each stage
//! and why the rest were dropped. These replace ad-hoc log lines: the caller
//! decides what, if anything, to report.

use super::deduplication::DuplicateId;
use super::validation::ValidationIssue;
use crate::Error;
use crate::app::models::StationRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics for a cleaning pass
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningStats {
    /// Total number of raw input records
    pub total_input: usize,
    /// Number of records that passed validation
    pub valid: usize,
    /// Number of records after deduplication
    pub unique: usize,
    /// Number of records dropped by validation
    pub invalid: usize,
    /// Number of valid records discarded as duplicates
    pub duplicates_removed: usize,
    /// Rejected record counts by reason
    pub rejections: BTreeMap<ValidationIssue, usize>,
    /// Ids shared by more than one valid record, in first-seen order
    pub duplicate_ids: Vec<DuplicateId>,
}

impl CleaningStats {
    /// Create new empty cleaning statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            valid: 0,
            unique: 0,
            invalid: 0,
            duplicates_removed: 0,
            rejections: BTreeMap::new(),
            duplicate_ids: Vec::new(),
        }
    }

    /// Record a validation rejection
    pub fn add_rejection(&mut self, issue: ValidationIssue) {
        self.invalid += 1;
        *self.rejections.entry(issue).or_insert(0) += 1;
    }

    /// Get the number of rejections for a specific reason
    pub fn rejections_for(&self, issue: ValidationIssue) -> usize {
        self.rejections.get(&issue).copied().unwrap_or(0)
    }

    /// Total records removed by the whole pipeline
    pub fn removed(&self) -> usize {
        self.total_input.saturating_sub(self.unique)
    }

    /// The failure reported when nothing survived cleaning
    pub fn empty_dataset_error(&self) -> Error {
        Error::empty_dataset(self.total_input, self.valid, self.unique)
    }

    /// Percentage of input records that passed validation
    pub fn validity_rate(&self) -> f64 {
        if self.total_input == 0 {
            0.0
        } else {
            (self.valid as f64 / self.total_input as f64) * 100.0
        }
    }

    /// Percentage of valid records that were unique
    pub fn uniqueness_rate(&self) -> f64 {
        if self.valid == 0 {
            0.0
        } else {
            (self.unique as f64 / self.valid as f64) * 100.0
        }
    }

    /// Get summary of cleaning statistics
    pub fn summary(&self) -> String {
        format!(
            "Cleaning Summary: {} -> {} stations | Valid: {} ({:.1}%) | \
             Duplicates removed: {} | Removed total: {}",
            self.total_input,
            self.unique,
            self.valid,
            self.validity_rate(),
            self.duplicates_removed,
            self.removed()
        )
    }
}

impl Default for CleaningStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a successful cleaning pass
#[derive(Debug, Clone)]
pub struct CleaningResult {
    /// Cleaned stations, unique by `place_id`, in input order
    pub stations: Vec<StationRecord>,
    /// Cleaning diagnostics
    pub stats: CleaningStats,
}

impl CleaningResult {
    /// Create a new cleaning result
    pub fn new(stations: Vec<StationRecord>, stats: CleaningStats) -> Self {
        Self { stations, stats }
    }

    /// Get the number of cleaned stations
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
