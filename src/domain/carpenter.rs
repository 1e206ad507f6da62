// src/domain/carpenter.rs

use serde::Deserialize;

/// Roster entry for a carpenter. Loaded separately from orders; orders refer
/// to carpenters by id or name without any referential integrity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Carpenter {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(alias = "nome")]
    pub name: String,
}

/// Resolves an order's carpenter reference for display.
///
/// The reference may be the roster id or already a name; if the roster knows
/// neither, the raw key is shown unchanged rather than hiding the assignment.
pub fn resolve_carpenter_name<'a>(roster: &'a [Carpenter], key: &'a str) -> &'a str {
    roster
        .iter()
        .find(|c| c.id == key || c.name == key)
        .map(|c| c.name.as_str())
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Carpenter> {
        vec![
            Carpenter {
                id: "m1".into(),
                name: "João".into(),
            },
            Carpenter {
                id: "m2".into(),
                name: "Pedro".into(),
            },
        ]
    }

    #[test]
    fn resolves_by_id_and_by_name() {
        let roster = roster();
        assert_eq!(resolve_carpenter_name(&roster, "m2"), "Pedro");
        assert_eq!(resolve_carpenter_name(&roster, "João"), "João");
    }

    #[test]
    fn unknown_key_is_shown_raw() {
        let roster = roster();
        assert_eq!(resolve_carpenter_name(&roster, "ex-funcionário"), "ex-funcionário");
    }
}
