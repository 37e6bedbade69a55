use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
table { border-collapse: collapse; width: 100%; margin-top: 1rem; }
th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
th { background: #f4f4f4; }
td.num { text-align: right; font-variant-numeric: tabular-nums; }
td.missing { color: #999; }
tr.partial { background: #fffbe6; }
.card { border: 1px solid #e5e5e5; border-radius: 8px; padding: 1rem; margin-top: 1.5rem; }
.muted { color: #666; font-size: 0.9rem; }
"#;

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    h2 { "Compare Car Prices: WebAutoBid vs SS.com" }
                    nav { a href="/" { "Home" } }
                }
                (content)
            }
        }
    }
}
