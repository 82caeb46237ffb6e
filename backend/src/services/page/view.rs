use common::i18n::Locale;
use maud::{html, Markup, PreEscaped, DOCTYPE};

const STYLESHEET: &str = "https://unpkg.com/mvp.css";

const INLINE_STYLE: &str = r#"
        :root { --accent: #007bff; }
        body { max-width: 800px; margin: 0 auto; padding: 20px; font-family: sans-serif; }
        header { text-align: center; margin-bottom: 30px; }
        .lang-switch { text-align: right; margin-bottom: 10px; }
        .lang-switch a { font-size: 0.8em; text-decoration: underline; cursor: pointer; }
        section { padding: 20px; border-radius: 8px; border: 1px solid #eee; margin-bottom: 20px; }
        input[type="text"], input[type="file"] { width: 100%; margin-bottom: 10px; }
        @media (max-width: 600px) { body { padding: 10px; } button { width: 100%; } }
"#;

const FOOTER_STYLE: &str = "text-align: center; color: #666; font-size: 0.8em; margin-top: 30px;";

/// The single page of the tool: a text form and an upload form.
///
/// Only static table strings and locale codes are interpolated; submitted
/// values are never echoed back.
pub fn render_form(locale: Locale) -> Markup {
    let t = locale.strings();
    let action = format!("/?lang={}", locale.code());
    let switch_href = format!("/?lang={}", locale.other().code());

    html! {
        (DOCTYPE)
        html lang=(locale.code()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (t.title) }
                link rel="stylesheet" href=(STYLESHEET);
                style { (PreEscaped(INLINE_STYLE)) }
            }
            body {
                div class="lang-switch" {
                    a href=(switch_href) { (t.switch) }
                }
                header {
                    h1 { (t.title) }
                    p { (t.subtitle) }
                }
                main {
                    section {
                        form method="post" action=(action) {
                            h2 { (t.single_title) }
                            label { (t.single_label) }
                            input type="text" name="text_data" placeholder="https://..." required;
                            button type="submit" { (t.single_btn) }
                        }
                    }
                    section {
                        form method="post" enctype="multipart/form-data" action=(action) {
                            h2 { (t.batch_title) }
                            label { (t.batch_label) }
                            input type="file" name="file_data" accept=".csv, .txt" required;
                            button type="submit" { (t.batch_btn) }
                        }
                    }
                }
                footer style=(FOOTER_STYLE) {
                    (t.footer)
                }
            }
        }
    }
}
