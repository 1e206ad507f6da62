use crate::dates::{format_br, parse_date};
use crate::domain::delivery::DeliveryRow;
use crate::filters::{FilterConfig, SortKey, SortOrder};
use crate::templates::components::{filter_form, sort_indicator, status_badge, DateFieldLabels};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct DeliveriesPageVm {
    pub rows: Vec<DeliveryRow>,
    pub config: FilterConfig,
    pub total_unfiltered: usize,
}

const LABELS: DateFieldLabels = DateFieldLabels {
    entry: "Criação",
    exit: "Entrega",
    assignee: "Responsável",
};

pub fn deliveries_page(vm: &DeliveriesPageVm) -> Markup {
    desktop_layout(
        "Entregas",
        html! {
            main class="container" {
                h1 { "Entregas" }

                (filter_form("/entregas", &vm.config, &LABELS))

                p style="margin: 10px 0;" {
                    "Exibindo " strong { (vm.rows.len()) } " de " (vm.total_unfiltered) " entregas."
                }

                table class="min-w-full" {
                    thead {
                        tr {
                            (header_cell("Número", SortKey::Id, &vm.config))
                            (header_cell("Criação", SortKey::EntryDate, &vm.config))
                            (header_cell("Entrega", SortKey::ExitDate, &vm.config))
                            (header_cell("Status", SortKey::Status, &vm.config))
                            (header_cell("Responsável", SortKey::Carpenter, &vm.config))
                        }
                    }
                    tbody {
                        @for row in &vm.rows {
                            tr {
                                td { strong { (row.delivery.id) } }
                                td { (date_label(row.delivery.created_date.as_deref())) }
                                td { (date_label(row.delivery.delivery_date.as_deref())) }
                                td {
                                    (status_badge(row.display_status.label(), row.display_status.badge_class()))
                                }
                                td { (row.assignee_name.as_deref().unwrap_or("—")) }
                            }
                        }
                        @if vm.rows.is_empty() {
                            tr {
                                td colspan="5" { "Nenhuma entrega encontrada com os filtros atuais." }
                            }
                        }
                    }
                }
            }
        },
    )
}

fn header_cell(label: &str, key: SortKey, config: &FilterConfig) -> Markup {
    let active = config.sort_by == key;
    let descending = config.sort_order == SortOrder::Desc;
    let qs = config.query_string_sorted_by(key);
    let href = if qs.is_empty() {
        "/entregas".to_string()
    } else {
        format!("/entregas?{qs}")
    };
    html! {
        th {
            a href=(href) {
                (label) (sort_indicator(active, descending))
            }
        }
    }
}

fn date_label(raw: Option<&str>) -> String {
    match raw {
        Some(raw) => parse_date(raw)
            .map(format_br)
            .unwrap_or_else(|| raw.to_string()),
        None => "—".to_string(),
    }
}
