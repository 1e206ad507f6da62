use crate::dates::{format_br, parse_date};
use crate::domain::order::OrderRow;
use crate::domain::status::OrderStatus;
use crate::filters::{FilterConfig, SortKey, SortOrder};
use crate::templates::components::{filter_form, sort_indicator, status_badge, DateFieldLabels};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct OrdersPageVm {
    pub rows: Vec<OrderRow>,
    pub config: FilterConfig,
    pub total_unfiltered: usize,
}

const LABELS: DateFieldLabels = DateFieldLabels {
    entry: "Entrada",
    exit: "Saída",
    assignee: "Marceneiro",
};

// Manual statuses only; atrasada/paraHoje are derived overlays the user
// never sets by hand.
const MANUAL_STATUSES: [OrderStatus; 3] = [
    OrderStatus::Recebida,
    OrderStatus::EmProcesso,
    OrderStatus::Concluida,
];

pub fn orders_page(vm: &OrdersPageVm) -> Markup {
    let qs = vm.config.query_string();
    let export_href = join_query("/ordens/exportar", &qs);
    let reminder_href = join_query("/ordens/lembrete", &qs);

    desktop_layout(
        "Ordens de serviço",
        html! {
            main class="container" {
                h1 { "Ordens de serviço" }

                (filter_form("/ordens", &vm.config, &LABELS))

                div class="flex items-center justify-between" style="margin: 10px 0;" {
                    p {
                        "Exibindo " strong { (vm.rows.len()) } " de " (vm.total_unfiltered) " ordens."
                    }
                    div style="display: flex; gap: 10px;" {
                        a href=(export_href) { "Exportar Excel" }
                        a href=(reminder_href) { "Mensagem WhatsApp" }
                    }
                }

                table class="min-w-full" {
                    thead {
                        tr {
                            (header_cell("Número", SortKey::Id, &vm.config))
                            (header_cell("Entrada", SortKey::EntryDate, &vm.config))
                            (header_cell("Saída", SortKey::ExitDate, &vm.config))
                            (header_cell("Status", SortKey::Status, &vm.config))
                            (header_cell("Marceneiro", SortKey::Carpenter, &vm.config))
                            th { "Materiais" }
                        }
                    }
                    tbody {
                        @for row in &vm.rows {
                            tr {
                                td { strong { (row.order.id) } }
                                td { (date_label(row.order.entry_date.as_deref())) }
                                td { (date_label(row.order.exit_date.as_deref())) }
                                td {
                                    (status_badge(row.display_status.label(), row.display_status.badge_class()))
                                }
                                td { (row.carpenter_name.as_deref().unwrap_or("—")) }
                                td { (row_actions(row)) }
                            }
                        }
                        @if vm.rows.is_empty() {
                            tr {
                                td colspan="6" { "Nenhuma ordem encontrada com os filtros atuais." }
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
    let href = join_query("/ordens", &config.query_string_sorted_by(key));
    html! {
        th {
            a href=(href) {
                (label) (sort_indicator(active, descending))
            }
        }
    }
}

fn row_actions(row: &OrderRow) -> Markup {
    html! {
        (row.materials_summary())
        details {
            summary { "Editar" }
            form action="/ordens/status" method="post" style="margin: 6px 0;" {
                input type="hidden" name="id" value=(row.order.id);
                select name="status" {
                    @for status in &MANUAL_STATUSES {
                        option value=(status.token()) selected[row.order.status == *status] {
                            (status.label())
                        }
                    }
                }
                button type="submit" class="btn" { "Salvar status" }
            }
            form action="/ordens/materiais" method="post" {
                input type="hidden" name="id" value=(row.order.id);
                // One "descrição;quantidade" pair per line; the whole list is
                // replaced on save.
                textarea name="materiais" rows="3" placeholder="Folha de MDF;2" {
                    @for material in &row.order.materials {
                        (material.description) ";" (material.quantity) "\n"
                    }
                }
                button type="submit" class="btn" { "Salvar materiais" }
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

fn join_query(path: &str, qs: &str) -> String {
    if qs.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{qs}")
    }
}
