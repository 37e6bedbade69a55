use crate::domain::comparison::format_amount;
use crate::domain::ComparisonTable;
use maud::{html, Markup};

/// The comparison as an HTML table. Headers are always rendered, even when
/// no listing matched.
pub fn comparison_table(table: &ComparisonTable) -> Markup {
    let column_count = table.headers().len();

    html! {
        table class="comparison" {
            thead {
                tr {
                    @for header in table.headers() {
                        th scope="col" { (header) }
                    }
                }
            }
            tbody {
                @if table.is_empty() {
                    tr {
                        td colspan=(column_count) class="missing" { "No matching listings found." }
                    }
                }
                @for row in table.rows() {
                    tr class=[(!row.has_all_sources()).then_some("partial")] {
                        td { (row.make) }
                        td { (row.model) }
                        td class="num" { (row.year) }
                        @for source in table.sources() {
                            @match row.price(*source) {
                                Some(price) => {
                                    td class="num" { (format_amount(price)) }
                                }
                                None => {
                                    td class="num missing" { "n/a" }
                                }
                            }
                        }
                        td class="num" { (format_amount(row.difference)) }
                    }
                }
            }
        }
    }
}
