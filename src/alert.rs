//! Alert messages that htmx swaps into the alert container of the base page.

use maud::{Markup, html};

/// An error message to display to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    /// A short summary of what went wrong.
    pub message: String,
    /// What the user can do about it. May be empty.
    pub details: String,
}

impl Alert {
    pub fn error(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
        }
    }

    pub fn into_html(self) -> Markup {
        html!(
            div
                role="alert"
                class="p-4 mb-4 text-sm text-red-800 rounded-lg bg-red-50
                    dark:bg-slate-800 dark:text-red-400 border border-red-300
                    dark:border-red-800"
            {
                div class="flex items-start justify-between gap-4"
                {
                    div
                    {
                        p class="font-semibold" { (self.message) }

                        @if !self.details.is_empty() {
                            p { (self.details) }
                        }
                    }

                    button
                        type="button"
                        aria-label="Fechar"
                        class="font-bold"
                        onclick="this.closest('[role=alert]').remove()"
                    {
                        "×"
                    }
                }
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use super::Alert;

    #[test]
    fn shows_message_and_details() {
        let alert = Alert::error("Could not save", "Try again");

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let paragraphs: Vec<String> = html
            .select(&Selector::parse("[role=alert] p").unwrap())
            .map(|p| p.text().collect())
            .collect();
        assert_eq!(paragraphs, vec!["Could not save", "Try again"]);
    }

    #[test]
    fn empty_details_are_omitted() {
        let alert = Alert::error("Saved", "");

        let html = Html::parse_fragment(&alert.into_html().into_string());

        let paragraph_count = html.select(&Selector::parse("p").unwrap()).count();
        assert_eq!(paragraph_count, 1);
    }
}
