//! A global registry that gives names to symbols.
//!
//! Symbols are plain identities and can be used without a name. The registry
//! only matters for printing and for looking up a symbol by name.

use std::sync::RwLock;

use ahash::{HashMap, HashMapExt};
use append_only_vec::AppendOnlyVec;
use once_cell::sync::Lazy;
use smartstring::alias::String;
use tracing::debug;

use crate::atom::Symbol;

static STATE: Lazy<RwLock<State>> = Lazy::new(|| RwLock::new(State::new()));
static NAMES: AppendOnlyVec<String> = AppendOnlyVec::<String>::new();

/// Automatically assigned ids start here, away from the small ids that are
/// typically chosen by hand with [Symbol::new].
pub const AUTO_ID_START: u32 = u32::MAX / 2;

/// A global state, that stores mappings from symbol names to ids.
pub struct State {
    str_to_id: HashMap<String, Symbol>,
    id_to_name: HashMap<Symbol, usize>,
    next_id: u32,
}

impl State {
    fn new() -> State {
        State {
            str_to_id: HashMap::new(),
            id_to_name: HashMap::new(),
            next_id: AUTO_ID_START,
        }
    }

    /// Get the symbol for a certain name if the name is already registered,
    /// else register it under the lowest unused id from [AUTO_ID_START] upwards.
    pub fn get_symbol<S: AsRef<str>>(name: S) -> Symbol {
        STATE.write().unwrap().get_symbol_impl(name.as_ref())
    }

    pub(crate) fn get_symbol_impl(&mut self, name: &str) -> Symbol {
        if let Some(s) = self.str_to_id.get(name) {
            return *s;
        }

        while self.id_to_name.contains_key(&Symbol::new(self.next_id)) {
            if self.next_id == u32::MAX {
                panic!("Too many symbols defined");
            }
            self.next_id += 1;
        }

        let symbol = Symbol::new(self.next_id);
        self.insert(name, symbol);
        symbol
    }

    /// Register `name` as the name of the symbol with identity `id`.
    ///
    /// This function will return an error when the name is already bound to
    /// another id, or when the id already has another name.
    pub fn get_symbol_with_id<S: AsRef<str>>(name: S, id: u32) -> Result<Symbol, String> {
        STATE
            .write()
            .unwrap()
            .get_symbol_with_id_impl(name.as_ref(), id)
    }

    pub(crate) fn get_symbol_with_id_impl(&mut self, name: &str, id: u32) -> Result<Symbol, String> {
        let symbol = Symbol::new(id);

        if let Some(r) = self.str_to_id.get(name).copied() {
            return if r == symbol {
                Ok(r)
            } else {
                Err(format!(
                    "Symbol {} is already defined with id {}",
                    name,
                    r.get_id()
                )
                .into())
            };
        }

        if let Some(n) = self.id_to_name.get(&symbol) {
            return Err(format!("Id {} is already used by symbol {}", id, NAMES[*n]).into());
        }

        self.insert(name, symbol);
        Ok(symbol)
    }

    fn insert(&mut self, name: &str, symbol: Symbol) {
        // only one thread can push at a time since the state is behind a lock
        let index = NAMES.push(name.into());
        self.str_to_id.insert(name.into(), symbol);
        self.id_to_name.insert(symbol, index);

        debug!(name, id = symbol.get_id(), "registered symbol");
    }

    /// Get the name of a symbol, if it has one.
    pub fn get_name(symbol: Symbol) -> Option<&'static str> {
        let index = *STATE.read().unwrap().id_to_name.get(&symbol)?;
        Some(NAMES[index].as_str())
    }

    /// Iterate over all named symbols, in order of registration.
    pub fn symbol_iter() -> impl Iterator<Item = (&'static str, Symbol)> {
        let state = STATE.read().unwrap();
        let mut symbols: Vec<_> = state
            .id_to_name
            .iter()
            .map(|(s, i)| (*i, *s))
            .collect();
        symbols.sort_unstable();
        symbols.into_iter().map(|(i, s)| (NAMES[i].as_str(), s))
    }
}
