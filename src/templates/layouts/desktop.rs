use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="24"
                        height="24"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#92400e"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M3 21h18" {}
                        path d="M5 21v-12l7 -6l7 6v12" {}
                        path d="M9 21v-8h6v8" {}
                    }
                    h3 { "Marcenaria" }
                    nav {
                        ul {
                            li { a href="/" { "Início" } }
                            li { a href="/ordens" { "Ordens" } }
                            li { a href="/entregas" { "Entregas" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
