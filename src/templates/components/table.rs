use maud::{html, Markup};

pub fn records_table(headers: &[&str], rows: &[Vec<String>]) -> Markup {
    html! {
        @if rows.is_empty() {
            p class="empty" { "No hay registros que coincidan con los filtros." }
        } @else {
            div class="overflow-hidden border border-gray-200 rounded-lg shadow-sm" {
                table class="min-w-full divide-y divide-gray-200" {
                    thead class="bg-gray-50" {
                        tr {
                            @for h in headers {
                                th scope="col" class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider" { (h) }
                            }
                        }
                    }
                    tbody class="bg-white divide-y divide-gray-200" {
                        @for row in rows {
                            tr {
                                @for cell in row {
                                    td class="px-4 py-3 text-sm text-gray-700" { (cell) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
