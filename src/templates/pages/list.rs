// templates/pages/list.rs

use crate::api::CurrentUser;
use crate::filter::{FilterCriteria, FilterSet, FilterSummary};
use crate::templates::components::filters::ChoiceLists;
use crate::templates::{active_filters, desktop_layout, filter_bar, records_table};
use maud::{html, Markup};

pub struct ListPageVm<'a> {
    pub title: &'a str,
    pub path: &'a str,
    pub user: Option<&'a CurrentUser>,
    pub filters: &'a FilterSet,
    pub criteria: &'a FilterCriteria,
    pub summary: &'a FilterSummary,
    pub choices: &'a ChoiceLists,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    /// Size of the unfiltered collection
    pub total: usize,
    pub export_href: Option<String>,
}

pub fn list_page(vm: &ListPageVm<'_>) -> Markup {
    desktop_layout(
        vm.title,
        vm.user,
        html! {
            h1 { (vm.title) }

            section class="card" {
                (filter_bar(vm.path, vm.filters, vm.criteria, vm.choices))
                (active_filters(vm.path, vm.filters, vm.criteria, vm.summary))
            }

            div class="flex items-center justify-between mb-3" {
                p class="text-gray-700" {
                    @if vm.summary.any_active() {
                        "Mostrando " strong { (vm.rows.len()) } " de " (vm.total) " registros."
                    } @else {
                        strong { (vm.total) } " registros."
                    }
                }
                @if let Some(href) = &vm.export_href {
                    a class="btn" href=(href) { "Exportar a Excel" }
                }
            }

            (records_table(&vm.headers, &vm.rows))
        },
    )
}
