//! The page shell and the styles shared between views.

use maud::{DOCTYPE, Markup, PreEscaped, html};

pub const BUTTON_PRIMARY_STYLE: &str = "w-full h-12 px-4 rounded font-semibold text-white \
    bg-emerald-600 hover:enabled:bg-emerald-700 disabled:bg-emerald-800";

pub const FORM_LABEL_STYLE: &str = "block mb-1 text-sm font-medium text-slate-700 dark:text-slate-200";
pub const FORM_TEXT_INPUT_STYLE: &str = "block w-full h-12 px-3 rounded text-sm \
    text-slate-900 dark:text-white bg-white dark:bg-slate-700 \
    border border-slate-300 dark:border-slate-600 placeholder-slate-400 \
    focus:border-indigo-600 focus:ring-indigo-600";

pub const TABLE_HEADER_STYLE: &str = "text-sm text-slate-500 dark:text-slate-400";
pub const TABLE_ROW_STYLE: &str = "bg-white dark:bg-slate-800 rounded";
pub const TABLE_CELL_STYLE: &str = "px-6 py-4";

pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col gap-8 px-4 py-8 mx-auto max-w-screen-lg \
    text-slate-900 dark:text-white";

/// Extra elements to put in a page's `<head>`.
pub enum HeadElement {
    Style(PreEscaped<String>),
}

/// Wrap `content` in a full HTML page titled "`title` - Finance Dashboard".
///
/// Every page gets the stylesheet, htmx with the response-targets extension
/// and an `#alert-container` that failed htmx requests render into.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Finance Dashboard" }
                link href="/static/main.css" rel="stylesheet";

                script src="/static/htmx-2.0.8-min.js" integrity="sha384-/TgkGk7p307TH7EXJDuUlgG3Ce1UVolAOFopFekQkkXihi5u/6OCvVKyz1W+idaz" {}
                script src="/static/htmx-ext-response-targets-2.0.4.js" integrity="sha384-T41oglUPvXLGBVyRdZsVRxNWnOOqCynaPubjUVjxhsjFTKrFJGEMm3/0KGmNQ+Pg" {}

                style { ".htmx-indicator { display: none; } .htmx-request.htmx-indicator { display: inline-block; }" }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::Style(text) => style { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="min-h-screen bg-slate-100 dark:bg-slate-900"
            {
                (content)

                div
                    id="alert-container"
                    class="fixed bottom-4 left-1/2 -translate-x-1/2 z-50 w-full max-w-md px-4"
                {}
            }
        }
    }
}

/// A full page for an error with a status code, a description of what went
/// wrong and how the user can fix it.
pub fn error_view(title: &str, status: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        main class="flex flex-col items-center gap-4 px-4 py-16 mx-auto max-w-screen-sm text-center"
        {
            h1 class="text-8xl font-extrabold text-indigo-600 dark:text-indigo-400" { (status) }
            p class="text-3xl font-bold text-slate-900 dark:text-white" { (description) }
            p class="text-xl text-slate-700 dark:text-slate-300" { (fix) }
            a
                href="/"
                class="px-5 py-2.5 rounded text-sm font-medium text-white bg-indigo-600 hover:bg-indigo-800"
            {
                "Voltar ao início"
            }
        }
    );

    base(title, &[], &content)
}

/// A small spinner shown while a form submission is in flight.
pub fn loading_spinner() -> Markup {
    html! {
        span
            aria-hidden="true"
            role="status"
            class="inline-block w-4 h-4 me-2 align-middle rounded-full border-2 border-white border-t-transparent animate-spin"
        {}
    }
}

/// Returns the CSS styles for adding a "R$" prefix to number inputs.
pub fn currency_input_styles() -> HeadElement {
    HeadElement::Style(PreEscaped(
        r#"
        .input-wrapper {
            position: relative;
        }
        .input-wrapper input[type="number"] {
            padding-left: 2.4rem;
        }
        .input-wrapper::before {
            content: 'R$';
            position: absolute;
            left: 0.75rem;
            top: 50%;
            transform: translateY(-50%);
            pointer-events: none;
        }
        "#
        .to_owned(),
    ))
}
