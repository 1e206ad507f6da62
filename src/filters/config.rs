// src/filters/config.rs

use chrono::NaiveDate;

/// Column a list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Id,
    EntryDate,
    ExitDate,
    Status,
    Carpenter,
}

impl SortKey {
    /// Query-string token -> key. Unknown tokens fall back to the default
    /// column instead of failing; inside the engine the key is closed.
    pub fn from_token(raw: &str) -> Self {
        match raw {
            "id" => SortKey::Id,
            "entrada" => SortKey::EntryDate,
            "saida" => SortKey::ExitDate,
            "status" => SortKey::Status,
            "marceneiro" => SortKey::Carpenter,
            _ => SortKey::Id,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SortKey::Id => "id",
            SortKey::EntryDate => "entrada",
            SortKey::ExitDate => "saida",
            SortKey::Status => "status",
            SortKey::Carpenter => "marceneiro",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn from_token(raw: &str) -> Self {
        match raw {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// The whole filter/sort configuration of a list view.
///
/// `Default` is the neutral configuration: show everything, sorted by id
/// ascending. Lives only for the view session, never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterConfig {
    /// Case-insensitive substring match on the record id; empty = no
    /// constraint.
    pub id_search: String,
    /// Inclusive bounds on the entry/creation date.
    pub entry_from: Option<NaiveDate>,
    pub entry_to: Option<NaiveDate>,
    /// Inclusive bounds on the exit/delivery date.
    pub exit_from: Option<NaiveDate>,
    pub exit_to: Option<NaiveDate>,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl FilterConfig {
    /// True iff anything deviates from the neutral configuration. Drives the
    /// "filters active" marker in the UI.
    pub fn is_active(&self) -> bool {
        *self != FilterConfig::default()
    }

    /// Query string carrying this configuration, so export/reminder links and
    /// column headers reproduce exactly what the user is looking at. Fields
    /// at their default are omitted.
    pub fn query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if !self.id_search.is_empty() {
            pairs.push(format!("busca={}", percent_encode(&self.id_search)));
        }
        push_date(&mut pairs, "entrada_de", self.entry_from);
        push_date(&mut pairs, "entrada_ate", self.entry_to);
        push_date(&mut pairs, "saida_de", self.exit_from);
        push_date(&mut pairs, "saida_ate", self.exit_to);
        if self.sort_by != SortKey::default() {
            pairs.push(format!("ordenar={}", self.sort_by.token()));
        }
        if self.sort_order != SortOrder::default() {
            pairs.push(format!("direcao={}", self.sort_order.token()));
        }
        pairs.join("&")
    }

    /// Query string for a column-header link: clicking the current sort
    /// column flips the direction, any other column starts ascending.
    pub fn query_string_sorted_by(&self, key: SortKey) -> String {
        let mut next = self.clone();
        if self.sort_by == key {
            next.sort_order = self.sort_order.flipped();
        } else {
            next.sort_by = key;
            next.sort_order = SortOrder::Asc;
        }
        next.query_string()
    }
}

fn push_date(pairs: &mut Vec<String>, name: &str, value: Option<NaiveDate>) {
    if let Some(date) = value {
        pairs.push(format!("{name}={}", date.format("%Y-%m-%d")));
    }
}

fn percent_encode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}
