//! The page listing expense records.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    category::{Category, get_all_categories},
    endpoints::{self, format_endpoint},
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, edit_delete_action_links, format_currency,
    },
    navigation::NavBar,
    record::{
        RecordWithCategory,
        query::{RecordList, RecordsQuery, SortOrder, list_records},
    },
};

/// The state needed for the records page.
#[derive(Debug, Clone)]
pub struct RecordsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for RecordsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the records matching the query parameters, along with their total.
pub async fn get_records_page(
    State(state): State<RecordsPageState>,
    Query(query): Query<RecordsQuery>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let categories = get_all_categories(&connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve categories: {error}"))?;
    let record_list = list_records(&query, &connection)
        .inspect_err(|error| tracing::error!("Failed to retrieve records: {error}"))?;

    Ok(records_view(&query, &categories, &record_list).into_response())
}

fn records_view(query: &RecordsQuery, categories: &[Category], record_list: &RecordList) -> Markup {
    let nav_bar = NavBar::new(endpoints::RECORDS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="flex justify-between items-center mb-4"
            {
                h1 class="text-xl font-bold" { "Records" }

                a href=(endpoints::NEW_RECORD_VIEW) class=(LINK_STYLE) { "New Record" }
            }

            (filter_form_view(query, categories))

            p class="my-4 text-lg"
            {
                "Total: "
                span id="total" class="font-semibold" { (format_currency(record_list.total)) }
            }

            (records_table_view(query, &record_list.records))
        }
    };

    base("Records", &content)
}

fn filter_form_view(query: &RecordsQuery, categories: &[Category]) -> Markup {
    html! {
        form
            method="get"
            action=(endpoints::RECORDS_VIEW)
            class="flex flex-wrap gap-4 items-end"
        {
            div
            {
                label for="filter" class=(FORM_LABEL_STYLE) { "Category" }

                select id="filter" name="filter" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[query.filter.is_none()] { "All" }

                    @for category in categories {
                        option
                            value=(category.id)
                            selected[query.filter == Some(category.id)]
                        {
                            (category.title)
                        }
                    }
                }
            }

            div
            {
                label for="sort" class=(FORM_LABEL_STYLE) { "Sort by amount" }

                select id="sort" name="sort" class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[query.sort.is_none()] { "None" }
                    option value="asc" selected[query.sort == Some(SortOrder::Ascending)]
                    {
                        "Lowest first"
                    }
                    option value="desc" selected[query.sort == Some(SortOrder::Descending)]
                    {
                        "Highest first"
                    }
                }
            }

            div
            {
                label for="keyword" class=(FORM_LABEL_STYLE) { "Search" }

                input
                    id="keyword"
                    type="search"
                    name="keyword"
                    placeholder="Record name"
                    value=[query.keyword.as_deref()]
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Apply" }
            }
        }
    }
}

fn records_table_view(query: &RecordsQuery, records: &[RecordWithCategory]) -> Markup {
    let (amount_sort_url, amount_sort_label) = match query.sort {
        Some(SortOrder::Ascending) => (
            query
                .with_sort(Some(SortOrder::Descending))
                .to_url(endpoints::RECORDS_VIEW),
            "Amount ▲",
        ),
        Some(SortOrder::Descending) => (
            query
                .with_sort(Some(SortOrder::Ascending))
                .to_url(endpoints::RECORDS_VIEW),
            "Amount ▼",
        ),
        None => (
            query
                .with_sort(Some(SortOrder::Ascending))
                .to_url(endpoints::RECORDS_VIEW),
            "Amount",
        ),
    };

    html! {
        div class="relative overflow-x-auto shadow-md sm:rounded-lg"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE)
                        {
                            a id="amount-sort" href=(amount_sort_url) class=(LINK_STYLE)
                            {
                                (amount_sort_label)
                            }
                        }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for record in records {
                        tr class=(TABLE_ROW_STYLE) data-record-id=(record.id)
                        {
                            td class=(TABLE_CELL_STYLE) { (record.name) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                span class=(CATEGORY_BADGE_STYLE) { (record.category.title) }
                            }
                            td class=(TABLE_CELL_STYLE) { (format_currency(record.amount)) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                (edit_delete_action_links(
                                    &format_endpoint(endpoints::EDIT_RECORD_VIEW, record.id),
                                    &format_endpoint(endpoints::RECORD, record.id),
                                    &format!("Are you sure you want to delete '{}'?", record.name),
                                ))
                            }
                        }
                    }

                    @if records.is_empty() {
                        tr
                        {
                            td colspan="4" class="px-6 py-4 text-center"
                            {
                                "No records found."
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod records_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Query, State},
        http::StatusCode,
    };
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{
        category::create_category,
        db::initialize,
        record::{
            NewRecord, RecordName, create_record,
            query::{RecordsQuery, SortOrder},
            records_page::{RecordsPageState, get_records_page},
        },
        test_utils::{assert_content_type, assert_valid_html, parse_html_document},
    };

    fn get_state() -> RecordsPageState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();
        create_category("Food", &connection).unwrap();
        create_category("Transport", &connection).unwrap();

        for (name, amount, category) in [
            ("Lunch", 12.0, "Food"),
            ("Bus", 3.5, "Transport"),
            ("Dinner", 20.0, "Food"),
        ] {
            create_record(
                NewRecord {
                    name: RecordName::new_unchecked(name),
                    amount,
                    category_title: category.to_owned(),
                },
                &connection,
            )
            .unwrap();
        }

        RecordsPageState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    fn row_names(html: &Html) -> Vec<String> {
        let selector = Selector::parse("tbody tr[data-record-id] td:first-child").unwrap();

        html.select(&selector)
            .map(|cell| cell.text().collect::<String>().trim().to_owned())
            .collect()
    }

    fn total_text(html: &Html) -> String {
        let selector = Selector::parse("#total").unwrap();

        html.select(&selector)
            .next()
            .expect("No total found")
            .text()
            .collect()
    }

    #[tokio::test]
    async fn lists_all_records_with_total() {
        let response = get_records_page(State(get_state()), Query(RecordsQuery::default()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        assert_eq!(row_names(&html), ["Lunch", "Bus", "Dinner"]);
        assert_eq!(total_text(&html), "$35.50");
    }

    #[tokio::test]
    async fn filters_by_category() {
        let query = RecordsQuery {
            filter: Some(1),
            ..Default::default()
        };

        let response = get_records_page(State(get_state()), Query(query))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(row_names(&html), ["Lunch", "Dinner"]);
        assert_eq!(total_text(&html), "$32.00");
    }

    #[tokio::test]
    async fn sorts_and_searches() {
        let query = RecordsQuery {
            filter: None,
            sort: Some(SortOrder::Descending),
            keyword: Some("n".to_owned()),
        };

        let response = get_records_page(State(get_state()), Query(query))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert_eq!(row_names(&html), ["Dinner", "Lunch"]);
        assert_eq!(total_text(&html), "$32.00");
    }

    #[tokio::test]
    async fn amount_header_links_to_opposite_sort() {
        let query = RecordsQuery {
            filter: Some(2),
            sort: Some(SortOrder::Ascending),
            keyword: None,
        };

        let response = get_records_page(State(get_state()), Query(query))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        let link = html
            .select(&Selector::parse("#amount-sort").unwrap())
            .next()
            .expect("No sort link found");
        assert_eq!(link.value().attr("href"), Some("/records?filter=2&sort=desc"));
    }

    #[tokio::test]
    async fn shows_message_when_no_records_match() {
        let query = RecordsQuery {
            keyword: Some("groceries".to_owned()),
            ..Default::default()
        };

        let response = get_records_page(State(get_state()), Query(query))
            .await
            .unwrap();

        let html = parse_html_document(response).await;
        assert!(row_names(&html).is_empty());
        assert_eq!(total_text(&html), "$0.00");
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("No records found."));
    }
}
