use crate::templates::card;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct HomeVm {
    pub overdue: usize,
    pub due_today: usize,
    pub in_progress: usize,
    pub open_orders: usize,
    pub pending_deliveries: usize,
}

pub fn home_page(vm: &HomeVm) -> Markup {
    desktop_layout(
        "Painel",
        html! {
            main class="container" {
                h1 { "Painel da marcenaria" }

                div style="display: flex; gap: 16px; flex-wrap: wrap;" {
                    (stat("Atrasadas", vm.overdue, "stat stat-red"))
                    (stat("Para hoje", vm.due_today, "stat stat-orange"))
                    (stat("Em processo", vm.in_progress, "stat stat-blue"))
                    (stat("Ordens abertas", vm.open_orders, "stat"))
                    (stat("Entregas pendentes", vm.pending_deliveries, "stat"))
                }

                (card("Atalhos", html! {
                    ul {
                        li { a href="/ordens" { "Ordens de serviço" } }
                        li { a href="/ordens?ordenar=status" { "Ordens por urgência" } }
                        li { a href="/entregas" { "Entregas" } }
                        li { a href="/ordens/lembrete" { "Mensagem do dia (WhatsApp)" } }
                    }
                }))
            }
        },
    )
}

fn stat(label: &str, value: usize, class: &str) -> Markup {
    html! {
        div class=(class) {
            p { (label) }
            h2 { (value) }
        }
    }
}
