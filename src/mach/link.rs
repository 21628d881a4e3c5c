use super::Address;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// ## Label table
///
/// Lives for one compile. Names keep their leading `:`.

#[derive(Debug, Default)]
pub struct Link {
    symbols: HashMap<String, Address>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn define(&mut self, label: &str, addr: Address) -> Result<()> {
        if self.symbols.contains_key(label) {
            return Err(error!(DuplicateLabel, addr; label));
        }
        self.symbols.insert(label.to_string(), addr);
        Ok(())
    }

    pub fn resolve(&self, label: &str) -> Option<Address> {
        self.symbols.get(label).copied()
    }

    /// Replace every defined label reference with its decimal address.
    /// Undefined references are left for the encoder to report.
    pub fn link(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .map(|token| match self.resolve(&token) {
                Some(addr) => addr.to_string(),
                None => token,
            })
            .collect()
    }
}
