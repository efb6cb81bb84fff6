//! Ledger configuration
//!
//! Controls how account numbers are minted. Every field has a serde
//! default so a partial config file is enough.

use serde::Deserialize;

/// Configuration for the account number generator.
///
/// Ids are `account_prefix` followed by the sequence value. The counter is
/// incremented before use, so with the defaults the first id is `ACC1001`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LedgerConfig {
    /// Fixed prefix of every account number
    #[serde(default = "default_account_prefix")]
    pub account_prefix: String,

    /// Counter value before the first account is created
    #[serde(default = "default_sequence_base")]
    pub sequence_base: u64,
}

fn default_account_prefix() -> String {
    "ACC".to_string()
}

fn default_sequence_base() -> u64 {
    1000
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            account_prefix: default_account_prefix(),
            sequence_base: default_sequence_base(),
        }
    }
}

impl LedgerConfig {
    /// Builder-style prefix override
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.account_prefix = prefix.into();
        self
    }

    /// Builder-style sequence base override
    pub fn with_sequence_base(mut self, base: u64) -> Self {
        self.sequence_base = base;
        self
    }
}
