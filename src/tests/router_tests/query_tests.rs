// src/tests/router_tests/query_tests.rs

use crate::filters::{FilterConfig, SortKey, SortOrder};
use crate::router::{filter_config_from_query, parse_query};
use astra::Body;
use chrono::NaiveDate;
use http::{Method, Request};
use std::collections::HashMap;

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn empty_query_yields_the_neutral_config() {
    let cfg = filter_config_from_query(&HashMap::new());
    assert_eq!(cfg, FilterConfig::default());
    assert!(!cfg.is_active());
}

#[test]
fn full_query_is_applied() {
    let cfg = filter_config_from_query(&params(&[
        ("busca", "OS-1"),
        ("entrada_de", "2024-01-01"),
        ("saida_ate", "2024-01-31"),
        ("ordenar", "saida"),
        ("direcao", "desc"),
    ]));
    assert_eq!(cfg.id_search, "OS-1");
    assert_eq!(cfg.entry_from, NaiveDate::from_ymd_opt(2024, 1, 1));
    assert_eq!(cfg.exit_to, NaiveDate::from_ymd_opt(2024, 1, 31));
    assert_eq!(cfg.sort_by, SortKey::ExitDate);
    assert_eq!(cfg.sort_order, SortOrder::Desc);
    assert!(cfg.is_active());
}

#[test]
fn limpar_wins_over_everything_else() {
    let cfg = filter_config_from_query(&params(&[
        ("busca", "OS-1"),
        ("ordenar", "status"),
        ("limpar", "1"),
    ]));
    assert_eq!(cfg, FilterConfig::default());
}

#[test]
fn unknown_sort_token_falls_back_to_default_column() {
    let cfg = filter_config_from_query(&params(&[("ordenar", "preco"), ("direcao", "subindo")]));
    assert_eq!(cfg.sort_by, SortKey::Id);
    assert_eq!(cfg.sort_order, SortOrder::Asc);
}

#[test]
fn malformed_date_bound_is_ignored_not_rejected() {
    let cfg = filter_config_from_query(&params(&[("saida_de", "31-31-2024"), ("busca", "x")]));
    assert_eq!(cfg.exit_from, None);
    assert_eq!(cfg.id_search, "x");
}

#[test]
fn query_string_round_trips_through_parse_query() {
    let original = FilterConfig {
        id_search: "OS 1".into(),
        exit_from: NaiveDate::from_ymd_opt(2024, 1, 6),
        sort_by: SortKey::Status,
        sort_order: SortOrder::Desc,
        ..Default::default()
    };

    let req = Request::builder()
        .method(Method::GET)
        .uri(format!("/ordens?{}", original.query_string()))
        .body(Body::empty())
        .unwrap();

    let cfg = filter_config_from_query(&parse_query(&req));
    assert_eq!(cfg, original);
}
