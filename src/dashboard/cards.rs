//! Cards summarising the balance: income, outcome and the net total.

use maud::{Markup, html};

use crate::dashboard::loader::FormattedBalance;

const CARD_STYLE: &str = "flex flex-col justify-between p-6 rounded-lg shadow \
    bg-white text-slate-900 dark:bg-slate-800 dark:text-white";
const TOTAL_CARD_STYLE: &str = "flex flex-col justify-between p-6 rounded-lg shadow \
    bg-orange-400 text-white dark:bg-orange-500";

struct Card<'a> {
    label: &'a str,
    id: &'a str,
    amount: &'a str,
    highlight: bool,
}

impl Card<'_> {
    fn into_html(self) -> Markup {
        let style = if self.highlight {
            TOTAL_CARD_STYLE
        } else {
            CARD_STYLE
        };

        html!(
            div class=(style)
            {
                header class="flex items-center justify-between mb-4"
                {
                    p class="text-base" { (self.label) }
                }

                h1 id=(self.id) class="text-3xl font-medium" { (self.amount) }
            }
        )
    }
}

/// Render the income, outcome and total cards for `balance`.
pub(super) fn balance_cards(balance: &FormattedBalance) -> Markup {
    let cards = [
        Card {
            label: "Entradas",
            id: "balance-income",
            amount: &balance.income,
            highlight: false,
        },
        Card {
            label: "Saídas",
            id: "balance-outcome",
            amount: &balance.outcome,
            highlight: false,
        },
        Card {
            label: "Total",
            id: "balance-total",
            amount: &balance.total,
            highlight: true,
        },
    ];

    html!(
        section
            id="balance"
            class="w-full grid grid-cols-1 md:grid-cols-3 gap-8 mb-8"
        {
            @for card in cards {
                (card.into_html())
            }
        }
    )
}
