//! HTTP handlers for the listing pages and the listing API

use super::host::ServerHost;
use crate::catalog::{Car, Hotel, distinct_values};
use crate::core::error::Result;
use crate::core::{ListPresenter, ListQuery, PaginatedResponse, Record, filter::is_match_all};
use crate::view::html::{PageContext, Select, SelectOption};
use crate::view::{HtmlView, MemoryView};
use axum::Json;
use axum::extract::{Query, State};
use axum::response::Html;
use reqwest::Url;
use serde_json::{Value, json};
use std::sync::Arc;

/// Origin used only to build relative pagination links
const LINK_ORIGIN: &str = "http://bookeasy.local";

/// Sort dropdown entries: `(value, label)`
const SORT_OPTIONS: [(&str, &str); 4] = [
    ("", "Default order"),
    ("price", "Price: low to high"),
    ("rating", "Rating: high to low"),
    ("name", "Name: A to Z"),
];

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "bookeasy"
    }))
}

/// GET /hotels
pub async fn hotels_page(
    State(host): State<Arc<ServerHost>>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let page = ListingPage {
        heading: "Hotels",
        path: "/hotels",
        text_field: "name",
        dropdowns: &[],
    };
    render_listing_page(&host, host.hotels.clone(), host.config.listing.hotels_per_page, &page, &query)
}

/// GET /cars
pub async fn cars_page(
    State(host): State<Arc<ServerHost>>,
    Query(query): Query<ListQuery>,
) -> Result<Html<String>> {
    let page = ListingPage {
        heading: "Cars",
        path: "/cars",
        text_field: "model",
        dropdowns: &[("category", "All Categories"), ("brand", "All Brands")],
    };
    render_listing_page(&host, host.cars.clone(), host.config.listing.cars_per_page, &page, &query)
}

/// GET /api/hotels
pub async fn list_hotels(
    State(host): State<Arc<ServerHost>>,
    Query(query): Query<ListQuery>,
) -> Json<PaginatedResponse<Hotel>> {
    Json(paginate(host.hotels.clone(), host.config.listing.hotels_per_page, &query))
}

/// GET /api/cars
pub async fn list_cars(
    State(host): State<Arc<ServerHost>>,
    Query(query): Query<ListQuery>,
) -> Json<PaginatedResponse<Car>> {
    Json(paginate(host.cars.clone(), host.config.listing.cars_per_page, &query))
}

/// Static description of one listing page
struct ListingPage {
    heading: &'static str,
    path: &'static str,
    /// Name of the text search input
    text_field: &'static str,
    /// Equality dropdowns: `(field, "All ..." sentinel label)`
    dropdowns: &'static [(&'static str, &'static str)],
}

fn paginate<R: Record>(records: Arc<[R]>, per_page: usize, query: &ListQuery) -> PaginatedResponse<R> {
    let mut presenter = ListPresenter::new(records, per_page, MemoryView::new());
    presenter.set_filter(query.criteria());
    presenter.set_sort(query.sort_key());

    let slice = presenter.slice(query.page());
    PaginatedResponse {
        data: slice.records.into_iter().cloned().collect(),
        pagination: slice.meta,
    }
}

fn render_listing_page<R: Record>(
    host: &ServerHost,
    records: Arc<[R]>,
    per_page: usize,
    page: &ListingPage,
    query: &ListQuery,
) -> Result<Html<String>> {
    let params = link_params(query);
    let path = page.path;
    let view = HtmlView::new(host.templates.clone())
        .with_link(move |n| page_href(path, &params, n));

    let mut presenter = ListPresenter::new(records, per_page, view);
    presenter.set_filter(query.criteria());
    presenter.set_sort(query.sort_key());
    let outcome = presenter.render(Some(query.page()));

    let mut selects: Vec<Select> = page
        .dropdowns
        .iter()
        .map(|(field, all_label)| {
            let selected = query_value(query, field);
            dropdown(field, all_label, distinct_values(presenter.records(), field), selected)
        })
        .collect();
    selects.push(sort_dropdown(query.sort.as_deref().unwrap_or_default()));

    presenter.view_mut().check()?;
    let view = presenter.view();
    let context = PageContext {
        heading: page.heading.to_string(),
        action: page.path.to_string(),
        text_field: page.text_field.to_string(),
        text_value: query_value(query, page.text_field).to_string(),
        selects,
        total: outcome.total_items,
        page: outcome.page,
        total_pages: outcome.total_pages,
        display: view.display().to_string(),
        pagination: view.pagination().to_string(),
    };

    Ok(Html(host.templates.render_page(&context)?))
}

fn query_value<'a>(query: &'a ListQuery, field: &str) -> &'a str {
    let value = match field {
        "name" => query.name.as_deref(),
        "model" => query.model.as_deref(),
        "category" => query.category.as_deref(),
        "brand" => query.brand.as_deref(),
        "sort" => query.sort.as_deref(),
        _ => None,
    };
    value.unwrap_or_default()
}

fn dropdown(field: &str, all_label: &str, values: Vec<String>, selected: &str) -> Select {
    let mut options = vec![SelectOption {
        value: all_label.to_string(),
        label: all_label.to_string(),
        selected: is_match_all(selected),
    }];
    options.extend(values.into_iter().map(|value| SelectOption {
        selected: value == selected,
        label: value.clone(),
        value,
    }));
    Select {
        name: field.to_string(),
        options,
    }
}

fn sort_dropdown(selected: &str) -> Select {
    Select {
        name: "sort".to_string(),
        options: SORT_OPTIONS
            .iter()
            .map(|(value, label)| SelectOption {
                value: value.to_string(),
                label: label.to_string(),
                selected: *value == selected,
            })
            .collect(),
    }
}

/// Query parameters to carry over into pagination links
fn link_params(query: &ListQuery) -> Vec<(&'static str, String)> {
    ["name", "model", "category", "brand", "sort"]
        .into_iter()
        .filter_map(|field| {
            let value = query_value(query, field);
            (!value.is_empty()).then(|| (field, value.to_string()))
        })
        .collect()
}

/// Relative link to `page` of a listing, keeping the active filters
fn page_href(path: &str, params: &[(&str, String)], page: usize) -> String {
    let Ok(mut url) = Url::parse(&format!("{LINK_ORIGIN}{path}")) else {
        return format!("{path}?page={page}");
    };
    url.query_pairs_mut()
        .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
        .append_pair("page", &page.to_string());

    match url.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    }
}
