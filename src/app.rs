use std::rc::Rc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::domain::entities::criteria::{
    Column, FilterCriterion, Relation, SortCriterion, SortOrder,
};
use crate::domain::entities::person::HEADERS;
use crate::infra::odata::source::ODataPeopleSource;
use crate::ui::state::app_state::AppState;
use crate::usecase::services::criteria_form::FormRow;
use crate::usecase::services::people_controller::{
    FetchOutcome, FetchTicket, PeopleController,
};
use crate::usecase::services::query_service::QueryService;

type Controller = PeopleController<AppState>;

const POPUP_STYLE: &str = "position: fixed; top: 80px; left: 50%; transform: translateX(-50%); min-width: 420px; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 12px;";
const ROW_STYLE: &str = "display: flex; gap: 8px; align-items: center; padding: 4px 0;";

/// Runs controller actions from event handlers and drives the request a
/// ticket stands for to completion.
#[derive(Clone, Copy)]
struct Dispatcher {
    controller: Signal<Controller>,
    service: Signal<QueryService>,
}

impl Dispatcher {
    fn edit<R>(self, action: impl FnOnce(&mut Controller) -> R) -> R {
        let mut controller = self.controller;
        let mut guard = controller.write();
        action(&mut *guard)
    }

    fn run<T>(self, action: impl FnOnce(&mut Controller) -> T)
    where
        T: Into<Option<FetchTicket>>,
    {
        if let Some(ticket) = self.edit(action).into() {
            self.spawn_fetch(ticket);
        }
    }

    /// Popups start fetches and then close themselves, so the task is not
    /// owned by the scope whose handler issued it.
    fn spawn_fetch(self, ticket: FetchTicket) {
        let service = self.service.peek().clone();
        let mut controller = self.controller;
        spawn_forever(async move {
            let seq = ticket.seq();
            let result = service.fetch(&ticket).await;
            match controller.write().finish_fetch(ticket, result) {
                FetchOutcome::Rendered { rows, total_items } => {
                    debug!(seq, rows, total_items, "people page applied")
                }
                FetchOutcome::Superseded => debug!(seq, "people page dropped"),
                FetchOutcome::Failed(err) => debug!(seq, %err, "people page left as it was"),
            }
        });
    }
}

fn display(visible: bool) -> &'static str {
    if visible {
        "display: inline;"
    } else {
        "display: none;"
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let state = AppState::new();
    use_context_provider(|| state);
    let controller = use_signal(|| PeopleController::new(&config, state));
    let service = use_signal(|| QueryService::new(Rc::new(ODataPeopleSource::new())));
    let dispatcher = use_context_provider(|| Dispatcher {
        controller,
        service,
    });

    use_effect(move || dispatcher.run(|controller| controller.start()));

    let loading = (state.loading)();
    let show_filter_popup = (state.show_filter_popup)();
    let show_sort_popup = (state.show_sort_popup)();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px;",
            Toolbar {}

            if show_filter_popup {
                FilterPopup {}
            }
            if show_sort_popup {
                SortPopup {}
            }

            ResultsTable {}
            PaginationBar {}

            if loading {
                div {
                    id: "loaderOverlay",
                    style: "position: fixed; inset: 0; background: rgba(255,255,255,0.6); display: flex; align-items: center; justify-content: center; z-index: 1500;",
                    "Loading..."
                }
            }
        }
    }
}

#[component]
fn Toolbar() -> Element {
    let mut state = use_context::<AppState>();
    let dispatcher = use_context::<Dispatcher>();
    let filter_count = state.filter_form.read().count();
    let sort_count = state.sort_form.read().count();
    let status = (state.status)();

    rsx! {
        nav {
            style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
            span {
                id: "filter",
                a {
                    id: "filter-id",
                    style: "cursor: pointer;",
                    onclick: move |_| {
                        let open = (state.show_filter_popup)();
                        state.show_filter_popup.set(!open);
                    },
                    "Filter "
                    span { id: "filter-count", "{filter_count}" }
                }
                button {
                    class: "close-btn",
                    title: "Remove all filters",
                    onclick: move |_| dispatcher.run(|controller| controller.reset_filters()),
                    "×"
                }
            }
            span {
                id: "sort",
                a {
                    id: "sort-id",
                    style: "cursor: pointer;",
                    onclick: move |_| {
                        let open = (state.show_sort_popup)();
                        state.show_sort_popup.set(!open);
                    },
                    "Sort "
                    span { id: "sort-count", "{sort_count}" }
                }
                button {
                    class: "close-btn",
                    title: "Remove all sorts",
                    onclick: move |_| dispatcher.run(|controller| controller.reset_sorts()),
                    "×"
                }
            }
            button {
                class: "refreshbutton",
                onclick: move |_| dispatcher.run(|controller| controller.refresh()),
                "Refresh"
            }
            span { "{status}" }
        }
    }
}

#[component]
fn FilterPopup() -> Element {
    let mut state = use_context::<AppState>();
    let dispatcher = use_context::<Dispatcher>();
    let form = (state.filter_form)();

    rsx! {
        div {
            id: "filterOverlay",
            style: POPUP_STYLE,
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                strong { "Filter" }
                button {
                    class: "filter-close-btn",
                    onclick: move |_| state.show_filter_popup.set(false),
                    "×"
                }
            }
            div {
                id: "filter-rows-container",
                if form.header_visible() {
                    div {
                        class: "filter-row filter-header",
                        style: ROW_STYLE,
                        for label in form.headers().iter() {
                            span { style: "flex: 1; font-weight: bold;", "{label}" }
                        }
                    }
                }
                for row in form.rows().iter().cloned() {
                    FilterRowEditor { key: "{row.id}", row }
                }
            }
            div {
                style: "display: flex; gap: 8px; justify-content: flex-end; padding-top: 8px;",
                button {
                    class: "filter-add-btn",
                    onclick: move |_| {
                        dispatcher.edit(|controller| controller.add_filter_row());
                    },
                    "Add Filter"
                }
                button {
                    class: "filter-reset-btn",
                    onclick: move |_| dispatcher.run(|controller| controller.reset_filters()),
                    "Reset"
                }
                button {
                    class: "filter-submit-btn",
                    onclick: move |_| {
                        dispatcher.run(|controller| controller.submit_filters());
                        state.show_filter_popup.set(false);
                    },
                    "Submit"
                }
            }
        }
    }
}

#[component]
fn FilterRowEditor(row: FormRow<FilterCriterion>) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let id = row.id;
    let criterion = row.criterion;

    rsx! {
        div {
            class: "filter-row",
            style: ROW_STYLE,
            select {
                class: "filter-column",
                onchange: move |event| match event.value().parse::<Column>() {
                    Ok(column) => dispatcher.edit(|controller| controller.set_filter_column(id, column)),
                    Err(err) => warn!("ignoring filter column change: {err}"),
                },
                for column in Column::FILTERABLE {
                    option {
                        value: column.key(),
                        selected: column == criterion.column,
                        {column.label()}
                    }
                }
            }
            select {
                class: "filter-relation",
                onchange: move |event| match event.value().parse::<Relation>() {
                    Ok(relation) => dispatcher.edit(|controller| controller.set_filter_relation(id, relation)),
                    Err(err) => warn!("ignoring filter relation change: {err}"),
                },
                for relation in Relation::ALL {
                    option {
                        value: relation.keyword(),
                        selected: relation == criterion.relation,
                        {relation.label()}
                    }
                }
            }
            input {
                r#type: "text",
                class: "filter-value",
                placeholder: "Enter value",
                value: "{criterion.value}",
                onchange: move |event| {
                    let value = event.value();
                    dispatcher.edit(move |controller| controller.set_filter_value(id, value));
                },
            }
            button {
                class: "filter-delete-btn",
                title: "Delete",
                onclick: move |_| dispatcher.edit(|controller| controller.delete_filter_row(id)),
                "Delete"
            }
        }
    }
}

#[component]
fn SortPopup() -> Element {
    let mut state = use_context::<AppState>();
    let dispatcher = use_context::<Dispatcher>();
    let form = (state.sort_form)();

    rsx! {
        div {
            id: "sortOverlay",
            style: POPUP_STYLE,
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                strong { "Sort" }
                button {
                    class: "close-icon",
                    onclick: move |_| state.show_sort_popup.set(false),
                    "×"
                }
            }
            div {
                id: "sorter-container",
                if form.header_visible() {
                    div {
                        class: "sort-row sort-header",
                        style: ROW_STYLE,
                        for label in form.headers().iter() {
                            span { style: "flex: 1; font-weight: bold;", "{label}" }
                        }
                    }
                }
                for row in form.rows().iter().cloned() {
                    SortRowEditor { key: "{row.id}", row }
                }
            }
            div {
                style: "display: flex; gap: 8px; justify-content: flex-end; padding-top: 8px;",
                button {
                    class: "add-sorter",
                    onclick: move |_| {
                        dispatcher.edit(|controller| controller.add_sort_row());
                    },
                    "Add Sort"
                }
                button {
                    class: "sort-reset-btn",
                    onclick: move |_| dispatcher.run(|controller| controller.reset_sorts()),
                    "Reset"
                }
                button {
                    class: "sort-submit-btn",
                    onclick: move |_| {
                        dispatcher.run(|controller| controller.submit_sorts());
                        state.show_sort_popup.set(false);
                    },
                    "Submit"
                }
            }
        }
    }
}

#[component]
fn SortRowEditor(row: FormRow<SortCriterion>) -> Element {
    let dispatcher = use_context::<Dispatcher>();
    let id = row.id;
    let criterion = row.criterion;

    rsx! {
        div {
            class: "sort-row",
            style: ROW_STYLE,
            select {
                class: "sort-column",
                onchange: move |event| match event.value().parse::<Column>() {
                    Ok(column) => dispatcher.edit(|controller| controller.set_sort_column(id, column)),
                    Err(err) => warn!("ignoring sort column change: {err}"),
                },
                for column in Column::SORTABLE {
                    option {
                        value: column.key(),
                        selected: column == criterion.column,
                        {column.label()}
                    }
                }
            }
            select {
                class: "sort-order",
                onchange: move |event| match event.value().parse::<SortOrder>() {
                    Ok(order) => dispatcher.edit(|controller| controller.set_sort_order(id, order)),
                    Err(err) => warn!("ignoring sort order change: {err}"),
                },
                for order in SortOrder::ALL {
                    option {
                        value: order.keyword(),
                        selected: order == criterion.order,
                        {order.label()}
                    }
                }
            }
            button {
                class: "sort-delete-btn",
                title: "Delete",
                onclick: move |_| dispatcher.edit(|controller| controller.delete_sort_row(id)),
                "Delete"
            }
        }
    }
}

#[component]
fn ResultsTable() -> Element {
    let state = use_context::<AppState>();
    let rows = (state.rows)();

    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse;",
            thead {
                tr {
                    for header in HEADERS {
                        th { style: "text-align: left; border-bottom: 1px solid #ccc;", "{header}" }
                    }
                }
            }
            tbody {
                id: "userTableBody",
                for (idx, row) in rows.iter().enumerate() {
                    tr {
                        key: "{idx}",
                        for cell in row.cells() {
                            td { style: "padding: 10px 0;", "{cell}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PaginationBar() -> Element {
    let state = use_context::<AppState>();
    let dispatcher = use_context::<Dispatcher>();
    let info = (state.pagination)();
    let label = info.label();
    let previous_style = format!("cursor: pointer; {}", display(info.show_previous));
    let next_style = format!("cursor: pointer; {}", display(info.show_next));
    let links: Vec<(u64, &'static str, String)> = info
        .links
        .iter()
        .map(|link| {
            let (class, weight) = if link.active {
                ("page-link active", "bold")
            } else {
                ("page-link", "normal")
            };
            let style = format!(
                "cursor: pointer; font-weight: {weight}; {}",
                display(link.visible)
            );
            (link.number, class, style)
        })
        .collect();

    rsx! {
        div {
            class: "pagination",
            style: "display: flex; gap: 8px; align-items: center; padding: 8px 0;",
            a {
                id: "prev",
                style: previous_style,
                onclick: move |_| dispatcher.run(|controller| controller.previous_page()),
                "Previous"
            }
            for (number, class, style) in links {
                a {
                    key: "{number}",
                    class: class,
                    style: style,
                    onclick: move |_| dispatcher.run(move |controller| controller.go_to_page(number)),
                    "{number}"
                }
            }
            a {
                id: "next",
                style: next_style,
                onclick: move |_| dispatcher.run(|controller| controller.next_page()),
                "Next"
            }
            span { id: "page-numbers", "{label}" }
        }
    }
}
