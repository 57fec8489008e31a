use super::value::Value;

/// Lexical scope of `let` bindings, innermost last.
///
/// Entries may share a name; `lookup` always returns the most recently pushed
/// one, which is how shadowing falls out. `push` and `pop` must be paired
/// around each `let` body.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ScopeStack {
    entries: Vec<(String, Value)>,
}

impl ScopeStack {
    pub fn new() -> Self {
        ScopeStack::default()
    }

    pub fn push(&mut self, name: String, value: Value) {
        self.entries.push((name, value));
    }

    pub fn pop(&mut self) -> Option<(String, Value)> {
        self.entries.pop()
    }

    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.entries
            .iter()
            .rev()
            .find(|(entry, _)| entry == name)
            .map(|(_, value)| *value)
    }

    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
