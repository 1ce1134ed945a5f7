// templates/pages/home.rs

use crate::api::CurrentUser;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn home_page(user: Option<&CurrentUser>) -> Markup {
    desktop_layout(
        "Inicio",
        user,
        html! {
            h1 { "Orquesta" }
            @if let Some(u) = user {
                p { "Hola, " strong { (u.display_name()) } }
            }

            section class="card" {
                h3 { "Agenda y novedades" }
                ul {
                    li { a href="/eventos?estado=proximo" { "Próximos eventos" } }
                    li { a href="/noticias" { "Noticias" } }
                }
            }

            @if user.is_some() {
                section class="card" {
                    h3 { "Gestión" }
                    ul {
                        li { a href="/asistencias" { "Asistencia" } }
                        li { a href="/informes" { "Informes" } }
                    }
                }
            }
        },
    )
}
