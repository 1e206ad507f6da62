use crate::filters::{FilterConfig, SortKey, SortOrder};
use chrono::NaiveDate;
use maud::{html, Markup};

/// Field captions differ between the two lists (orders talk about
/// entry/exit, deliveries about creation/delivery).
pub struct DateFieldLabels {
    pub entry: &'static str,
    pub exit: &'static str,
    pub assignee: &'static str,
}

/// Collapsible filter panel. Submitting the form is the "apply" action;
/// the "Limpar filtros" link clears and re-applies in one step.
pub fn filter_form(action: &str, config: &FilterConfig, labels: &DateFieldLabels) -> Markup {
    let sort_options: [(SortKey, &str); 5] = [
        (SortKey::Id, "Número"),
        (SortKey::EntryDate, labels.entry),
        (SortKey::ExitDate, labels.exit),
        (SortKey::Status, "Status"),
        (SortKey::Carpenter, labels.assignee),
    ];

    html! {
        details class="card" open[config.is_active()] {
            summary {
                "Filtros"
                @if config.is_active() {
                    span class="badge badge-orange" style="margin-left: 8px;" { "ativos" }
                }
            }
            form action=(action) method="get" style="display: flex; flex-wrap: wrap; gap: 10px; align-items: end; margin-top: 10px;" {
                label {
                    "Número"
                    input type="text" name="busca" value=(config.id_search) placeholder="OS-";
                }
                label {
                    (labels.entry) " de"
                    input type="date" name="entrada_de" value=(iso(config.entry_from));
                }
                label {
                    (labels.entry) " até"
                    input type="date" name="entrada_ate" value=(iso(config.entry_to));
                }
                label {
                    (labels.exit) " de"
                    input type="date" name="saida_de" value=(iso(config.exit_from));
                }
                label {
                    (labels.exit) " até"
                    input type="date" name="saida_ate" value=(iso(config.exit_to));
                }
                label {
                    "Ordenar por"
                    select name="ordenar" {
                        @for (key, label) in sort_options {
                            option value=(key.token()) selected[config.sort_by == key] { (label) }
                        }
                    }
                }
                label {
                    "Direção"
                    select name="direcao" {
                        option value="asc" selected[config.sort_order == SortOrder::Asc] { "Crescente" }
                        option value="desc" selected[config.sort_order == SortOrder::Desc] { "Decrescente" }
                    }
                }
                button type="submit" class="btn" { "Aplicar" }
                a href=(format!("{action}?limpar=1")) { "Limpar filtros" }
            }
        }
    }
}

fn iso(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
