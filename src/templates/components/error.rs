use maud::{html, Markup, DOCTYPE};

/// Standalone error page (no layout: it must render even when rendering the
/// layout is what failed).
pub fn error_page(status: u16, message: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="utf-8";
                title { "Erro " (status) }
            }
            body {
                h1 { "Erro " (status) }
                p { (message) }
                p { a href="/" { "Voltar ao início" } }
            }
        }
    }
}
