// web_app/components/manufacturer.rs - Manufacturer table and pager
//
// The list renders whatever connection it is handed. It owns no query state:
// page changes and refreshes are reported back through callbacks.

use leptos::prelude::*;

use super::common::{use_translator, Badge};
use crate::web_app::model::{Manufacturer, ManufacturerConnection, PaginatorInfo};
use crate::web_app::routes::manufacturer_edit_path;

/// Page buttons shown around the current page
const PAGE_BUTTONS: u32 = 5;

/// Manufacturer table with pagination
#[component]
pub fn ManufacturerList(
    /// Page to show; `None` while nothing has been loaded
    manufacturers: Option<ManufacturerConnection>,
    /// Shop slug used to build row links
    #[prop(into)]
    shop: String,
    /// True while a request for this list is in flight
    #[prop(into)]
    fetching: Signal<bool>,
    /// Called with the page the user picked
    on_pagination: Callback<u32>,
    /// Asks the page to load the current variables again
    refetch: Callback<()>,
) -> impl IntoView {
    let t = use_translator();
    let ManufacturerConnection {
        data,
        paginator_info,
    } = manufacturers.unwrap_or_default();

    let headers = [
        "table:table-item-id",
        "table:table-item-title",
        "table:table-item-slug",
        "table:table-item-products",
        "table:table-item-website",
        "table:table-item-approval",
        "table:table-item-created-at",
        "table:table-item-actions",
    ]
    .map(|key| t.t(key));

    let empty_text = t.t("common:text-no-manufacturers");
    let refresh_label = t.t("common:text-refresh");
    let has_rows = !data.is_empty();
    let show_pager = paginator_info.total > 0;

    let rows = data
        .into_iter()
        .map(|manufacturer| view! { <ManufacturerRow manufacturer=manufacturer shop=shop.clone() /> })
        .collect_view();

    view! {
        <div class="mb-6 overflow-hidden rounded shadow bg-white">
            <div class="flex justify-end px-4 py-2 border-b border-gray-100">
                <button
                    type="button"
                    class="inline-flex items-center gap-2 text-xs font-semibold text-accent hover:underline uppercase tracking-wide disabled:opacity-50"
                    disabled=move || fetching.get()
                    aria-busy=move || fetching.get().to_string()
                    on:click=move |_| refetch.run(())
                >
                    <Show when=move || fetching.get()>
                        <span class="w-3 h-3 border-2 border-accent border-t-transparent rounded-full animate-spin"></span>
                    </Show>
                    {refresh_label}
                </button>
            </div>
            <table class="w-full text-sm text-left">
                <thead class="bg-gray-50 text-gray-600">
                    <tr>
                        {headers.into_iter().map(|h| view! { <th class="px-4 py-3 font-semibold">{h}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
            <Show when=move || !has_rows>
                <p class="py-12 text-center text-gray-500">{empty_text.clone()}</p>
            </Show>
        </div>

        <Show when=move || show_pager>
            <Pagination paginator=paginator_info.clone() on_change=on_pagination />
        </Show>
    }
}

#[component]
fn ManufacturerRow(manufacturer: Manufacturer, shop: String) -> impl IntoView {
    let t = use_translator();
    let edit_href = manufacturer_edit_path(&shop, &manufacturer.slug);
    let edit_label = t.t("form:button-label-edit");
    let (badge_variant, badge_label) = if manufacturer.is_approved {
        ("green", t.t("common:text-approved"))
    } else {
        ("yellow", t.t("common:text-pending"))
    };
    let created = manufacturer.created_at.format("%b %d, %Y").to_string();

    view! {
        <tr class="border-b border-gray-100 hover:bg-gray-50">
            <td class="px-4 py-3 text-gray-500">{manufacturer.id}</td>
            <td class="px-4 py-3 font-medium text-heading">{manufacturer.name}</td>
            <td class="px-4 py-3">{manufacturer.slug}</td>
            <td class="px-4 py-3">{manufacturer.products_count}</td>
            <td class="px-4 py-3">
                {manufacturer.website.map(|url| view! {
                    <a href=url.clone() target="_blank" rel="noreferrer" class="text-accent hover:underline">{url}</a>
                })}
            </td>
            <td class="px-4 py-3">
                <Badge variant=badge_variant>{badge_label}</Badge>
            </td>
            <td class="px-4 py-3 whitespace-nowrap">{created}</td>
            <td class="px-4 py-3">
                <a href=edit_href class="text-accent hover:underline">{edit_label}</a>
            </td>
        </tr>
    }
}

/// Pagination component
///
/// Previous / numbered / next buttons; emits 1-based page numbers.
#[component]
pub fn Pagination(
    paginator: PaginatorInfo,
    on_change: Callback<u32>,
) -> impl IntoView {
    let t = use_translator();
    let current = paginator.current_page;
    let can_go_prev = paginator.has_previous_page();
    let can_go_next = paginator.has_more_pages;
    let range = paginator.item_range().map(|(first, last)| {
        format!("{}-{} {} {}", first, last, t.t("common:text-of"), paginator.total)
    });

    let button_class = "px-3 py-1.5 bg-white border border-gray-200 rounded shadow-sm \
                        disabled:opacity-50 disabled:cursor-not-allowed \
                        hover:bg-gray-50 transition-all font-medium text-gray-700";

    let pages = paginator
        .page_window(PAGE_BUTTONS)
        .into_iter()
        .map(|page| {
            let class = if page == current {
                "px-3 py-1.5 rounded bg-accent text-white font-semibold"
            } else {
                button_class
            };
            view! {
                <button
                    type="button"
                    class=class
                    aria-current=move || (page == current).then_some("page")
                    on:click=move |_| on_change.run(page)
                >
                    {page}
                </button>
            }
        })
        .collect_view();

    view! {
        <nav class="flex items-center justify-end gap-2" aria-label="pagination">
            {range.map(|text| view! { <span class="me-auto text-sm text-gray-500">{text}</span> })}
            <button
                type="button"
                class=button_class
                disabled=!can_go_prev
                on:click=move |_| {
                    if can_go_prev {
                        on_change.run(current - 1);
                    }
                }
            >
                {t.t("common:text-previous")}
            </button>
            {pages}
            <button
                type="button"
                class=button_class
                disabled=!can_go_next
                on:click=move |_| {
                    if can_go_next {
                        on_change.run(current + 1);
                    }
                }
            >
                {t.t("common:text-next")}
            </button>
        </nav>
    }
}
