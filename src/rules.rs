use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{LedgerError, Result};

/// annual interest rate effective from a given date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestRule {
    pub date: NaiveDate,
    pub id: String,
    pub rate: Rate,
}

/// interest rules sorted by effective date, at most one rule per date
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleTable {
    rules: Vec<InterestRule>,
}

impl RuleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// insert a rule, replacing any existing rule with the same effective date
    pub fn add_or_replace(&mut self, date: NaiveDate, id: impl Into<String>, rate: Rate) -> Result<&InterestRule> {
        if !rate.is_valid_rule_rate() {
            return Err(LedgerError::InvalidRate { rate });
        }

        let rule = InterestRule { date, id: id.into(), rate };
        let pos = match self.rules.binary_search_by_key(&date, |r| r.date) {
            Ok(pos) => {
                self.rules[pos] = rule;
                pos
            }
            Err(pos) => {
                self.rules.insert(pos, rule);
                pos
            }
        };
        Ok(&self.rules[pos])
    }

    /// the rule in effect on the given date: latest effective date <= date
    pub fn rate_effective_on(&self, date: NaiveDate) -> Option<&InterestRule> {
        match self.rules.binary_search_by_key(&date, |r| r.date) {
            Ok(pos) => Some(&self.rules[pos]),
            Err(0) => None,
            Err(pos) => Some(&self.rules[pos - 1]),
        }
    }

    /// rules in effective-date order
    pub fn iter(&self) -> impl Iterator<Item = &InterestRule> {
        self.rules.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}
