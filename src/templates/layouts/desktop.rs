use crate::api::CurrentUser;
use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, user: Option<&CurrentUser>, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Orquesta" }
                link rel="icon" href="/static/favicon/favicon.ico";
                link rel="stylesheet" href="/static/main.css";
            }
            body {
                header class="flex items-center justify-between px-6 py-3 shadow" {
                    a href="/" class="brand" { "Orquesta" }
                    nav {
                        ul {
                            li { a href="/eventos" { "Eventos" } }
                            li { a href="/noticias" { "Noticias" } }
                            @if user.is_some() {
                                li { a href="/asistencias" { "Asistencia" } }
                                li { a href="/informes" { "Informes" } }
                            }
                        }
                    }
                    @if let Some(u) = user {
                        span class="text-sm" {
                            (u.display_name())
                            @if u.is_admin() { " (admin)" }
                        }
                    } @else {
                        span class="text-sm text-gray-500" { "Sin sesión" }
                    }
                }
                main class="container" {
                    (content)
                }
            }
        }
    }
}
