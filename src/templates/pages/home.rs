// templates/pages/home.rs

use crate::pipeline::ComparisonSnapshot;
use crate::templates::{card, compare_form, comparison_table, desktop_layout};
use maud::{html, Markup};

pub fn home_page(make: &str, pages: u32, snapshot: Option<&ComparisonSnapshot>) -> Markup {
    desktop_layout(
        "Car Price Comparator",
        html! {
            (compare_form(make, pages))

            @if let Some(snapshot) = snapshot {
                (card("Comparison Result:", html! {
                    p class="muted" {
                        "Make " strong { (snapshot.make_filter) } ", "
                        (snapshot.pages) " SS.com page(s), "
                        (snapshot.total_listings()) " listing(s) compared, "
                        (snapshot.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()) "."
                    }

                    (comparison_table(&snapshot.table))

                    p {
                        a href="/download" { "Download CSV" }
                        " · "
                        a href="/download.xlsx" { "Download XLSX" }
                    }
                }))
            }
        },
    )
}
