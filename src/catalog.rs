//! Catalog parsing: `id,name` lines into an ordered, read-only entry list.

/// One catalog record. Immutable once loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: u32,
    pub name: String,
}

impl Entry {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Parse the raw catalog text, one `id,name` record per line.
///
/// Per line: trim, skip if empty, split on the first comma; keep the line
/// only when the id parses as a positive integer and the name is non-empty.
/// Malformed lines are dropped without being reported. The result is sorted
/// ascending by id (the source list usually is already, but nothing
/// guarantees it).
pub fn parse_catalog(text: &str) -> Vec<Entry> {
    let mut entries: Vec<Entry> = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some((id_part, name_part)) = trimmed.split_once(',') else {
            continue;
        };
        let Ok(id) = id_part.trim().parse::<u32>() else {
            continue;
        };
        if id == 0 {
            continue;
        }
        let name = name_part.trim();
        if name.is_empty() {
            continue;
        }
        entries.push(Entry::new(id, name));
    }
    entries.sort_by_key(|e| e.id);
    entries
}
