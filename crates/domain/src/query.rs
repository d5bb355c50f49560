use crate::entity::EntityKind;
use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Row cap used for transaction-like feeds
pub const RECENT_LIMIT: u64 = 500;

/// Ordering understood by the entity store.
///
/// Each key belongs to exactly one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// `-transaction_datetime`
    TransactionDatetimeDesc,
    /// `-prestart_datetime`
    PrestartDatetimeDesc,
    /// `-usage_date`
    UsageDateDesc,
    /// `name`
    NameAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TransactionDatetimeDesc => "-transaction_datetime",
            Self::PrestartDatetimeDesc => "-prestart_datetime",
            Self::UsageDateDesc => "-usage_date",
            Self::NameAsc => "name",
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::TransactionDatetimeDesc => EntityKind::FuelTransaction,
            Self::PrestartDatetimeDesc => EntityKind::PrestartCheck,
            Self::UsageDateDesc => EntityKind::UsageRecord,
            Self::NameAsc => EntityKind::HireProvider,
        }
    }

    pub fn is_descending(&self) -> bool {
        self.as_str().starts_with('-')
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// "List entities of kind K, optionally ordered, optionally capped"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    pub sort: Option<SortKey>,
    pub limit: Option<u64>,
}

impl ListQuery {
    /// Unordered, uncapped
    pub fn all() -> Self {
        Self::default()
    }

    pub fn sorted(key: SortKey) -> Self {
        Self {
            sort: Some(key),
            limit: None,
        }
    }

    /// Newest first, capped at `limit`
    pub fn recent(key: SortKey, limit: u64) -> Self {
        Self {
            sort: Some(key),
            limit: Some(limit),
        }
    }

    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Reject a sort key that belongs to another kind
    pub fn check_sort(&self, kind: EntityKind) -> Result<()> {
        match self.sort {
            Some(key) if key.kind() != kind => Err(DomainError::UnsupportedSort {
                kind,
                key: key.as_str().to_string(),
            }),
            _ => Ok(()),
        }
    }
}
