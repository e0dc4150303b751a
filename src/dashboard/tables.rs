//! The table listing every transaction.

use maud::{Markup, html};
use time::format_description::well_known::Rfc3339;

use crate::{
    dashboard::loader::DisplayTransaction,
    html::{TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE},
    transaction::TransactionType,
};

const TABLE_CELL_GREEN_STYLE: &str = "text-green-600 dark:text-green-400";
const TABLE_CELL_RED_STYLE: &str = "text-red-600 dark:text-red-400";

fn value_color_class(type_: TransactionType) -> &'static str {
    match type_ {
        TransactionType::Income => TABLE_CELL_GREEN_STYLE,
        TransactionType::Outcome => TABLE_CELL_RED_STYLE,
    }
}

fn transaction_row(transaction: &DisplayTransaction) -> Markup {
    let type_ = transaction.type_();
    let created_at = transaction
        .created_at()
        .format(&Rfc3339)
        .unwrap_or_else(|_| transaction.formatted_date().to_owned());

    html!(
        tr class=(TABLE_ROW_STYLE) data-transaction-id=(transaction.id())
        {
            td class={"title " (TABLE_CELL_STYLE) " font-medium text-slate-900 dark:text-white"}
            {
                (transaction.title())
            }

            td
                class={(type_) " " (TABLE_CELL_STYLE) " " (value_color_class(type_))}
                data-value=(transaction.value())
            {
                @if type_ == TransactionType::Outcome {
                    "- "
                }
                (transaction.formatted_value())
            }

            td class=(TABLE_CELL_STYLE) { (transaction.category().title) }

            td class=(TABLE_CELL_STYLE)
            {
                time datetime=(created_at) { (transaction.formatted_date()) }
            }
        }
    )
}

/// Render a table with one row per transaction, in the order given.
pub(super) fn transactions_table(transactions: &[DisplayTransaction]) -> Markup {
    html!(
        section id="transactions" class="w-full"
        {
            div class="overflow-x-auto rounded-lg shadow"
            {
                table class="w-full text-sm text-left text-slate-500 dark:text-slate-400"
                {
                    thead class=(TABLE_HEADER_STYLE)
                    {
                        tr
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Título" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Preço" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Categoria" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Data" }
                        }
                    }

                    tbody
                    {
                        @for transaction in transactions {
                            (transaction_row(transaction))
                        }
                    }
                }
            }

            @if transactions.is_empty() {
                p class="mt-4 text-center text-slate-500 dark:text-slate-400"
                {
                    "Nenhuma transação."
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::datetime;

    use crate::{
        dashboard::loader::DisplayTransaction,
        test_utils::transaction,
        timezone::get_timezone,
        transaction::TransactionType,
    };

    use super::transactions_table;

    fn display(id: &str, value: f64, type_: TransactionType) -> DisplayTransaction {
        DisplayTransaction::new(
            transaction(
                id,
                "Title",
                value,
                type_,
                "Category",
                datetime!(2020-05-24 00:00:00 UTC),
            ),
            get_timezone("Etc/UTC").unwrap(),
        )
    }

    fn value_cells(html: &Html) -> Vec<String> {
        html.select(&Selector::parse("tbody tr td:nth-child(2)").unwrap())
            .map(|cell| cell.text().collect())
            .collect()
    }

    #[test]
    fn renders_one_row_per_transaction() {
        let transactions = vec![
            display("1", 10.0, TransactionType::Income),
            display("2", 20.0, TransactionType::Outcome),
            display("3", 30.0, TransactionType::Income),
        ];

        let html = Html::parse_fragment(&transactions_table(&transactions).into_string());

        let row_count = html.select(&Selector::parse("tbody tr").unwrap()).count();
        assert_eq!(row_count, 3);
    }

    #[test]
    fn outcome_values_have_minus_prefix() {
        let transactions = vec![
            display("1", 5000.0, TransactionType::Income),
            display("2", 1234.56, TransactionType::Outcome),
        ];

        let html = Html::parse_fragment(&transactions_table(&transactions).into_string());

        assert_eq!(
            value_cells(&html),
            vec!["R$ 5.000,00".to_owned(), "- R$ 1.234,56".to_owned()]
        );
    }

    #[test]
    fn value_cell_has_type_class() {
        let transactions = vec![display("1", 1.0, TransactionType::Outcome)];

        let html = Html::parse_fragment(&transactions_table(&transactions).into_string());

        let outcome_cells = html
            .select(&Selector::parse("td.outcome").unwrap())
            .count();
        assert_eq!(outcome_cells, 1);
    }

    #[test]
    fn shows_date_and_category() {
        let transactions = vec![display("1", 1.0, TransactionType::Income)];

        let html = Html::parse_fragment(&transactions_table(&transactions).into_string());

        let cells: Vec<String> = html
            .select(&Selector::parse("tbody td").unwrap())
            .map(|cell| cell.text().collect())
            .collect();
        assert_eq!(cells[2], "Category");
        assert_eq!(cells[3], "24/05/2020");
    }

    #[test]
    fn empty_list_shows_notice() {
        let html = Html::parse_fragment(&transactions_table(&[]).into_string());

        let row_count = html.select(&Selector::parse("tbody tr").unwrap()).count();
        assert_eq!(row_count, 0);
        assert!(html.html().contains("Nenhuma transação."));
    }
}
