use maud::{html, Markup};

pub mod comparison_table;
pub mod error;

pub use comparison_table::comparison_table;
pub use error::error_page;

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h3 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}

/// Make and page-count form, posting back to `/`.
pub fn compare_form(make: &str, pages: u32) -> Markup {
    html! {
        form method="post" action="/" {
            label for="make" { "Make (e.g. BMW): " }
            input type="text" id="make" name="make" value=(make);
            br;
            label for="pages" { "Pages to scrape from SS.com (default 2): " }
            input type="number" id="pages" name="pages" min="1" value=(pages);
            br;
            br;
            input type="submit" value="Compare";
        }
    }
}
