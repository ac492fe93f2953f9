use crate::dashboards::d404_analytics::columns::{
    column_style, contract_start_date_column, filter_rows, project_column, ColumnDescriptor,
};
use crate::dashboards::d404_analytics::mock::{generate_mock_rows, MockDataConfig};
use crate::dashboards::d404_analytics::state::AnalyticsState;
use crate::shared::date_utils::format_date;
use contracts::dashboards::d404_analytics::{ClientRow, RangeMode};
use leptos::prelude::*;
use thaw::*;

/// Колонки страницы: два фильтруемых столбца и остальные поля строки
fn build_columns(state: AnalyticsState) -> Vec<ColumnDescriptor<ClientRow>> {
    vec![
        project_column(),
        contract_start_date_column(state),
        ColumnDescriptor::plain("Код клиента", "clientCode", 130),
        ColumnDescriptor::plain("Сумма договора", "contractAmount", 140),
        ColumnDescriptor::plain("Адрес", "address", 260),
    ]
}

fn cell_text(row: &ClientRow, key: &str) -> String {
    match key {
        "projectName" => row.project_name.clone(),
        "contractStartDate" => format_date(&row.contract_start_date),
        "clientCode" => row.client_code.clone(),
        "contractAmount" => row.contract_amount.clone(),
        "address" => row.address.clone(),
        _ => String::new(),
    }
}

/// Analytics dashboard: mock client table with project and contract date filters
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let state = AnalyticsState::new();
    provide_context(state);

    let config = StoredValue::new(MockDataConfig::default());
    let columns = StoredValue::new(build_columns(state));
    let rows = RwSignal::new(Vec::<ClientRow>::new());
    let error = RwSignal::new(None::<String>);
    let date_from = RwSignal::new(String::new());
    let date_to = RwSignal::new(String::new());

    let regenerate = move || {
        let generated = config.with_value(generate_mock_rows);
        state.update_project_items(&generated);
        rows.set(generated);
    };
    regenerate();

    let apply_custom_range = move || {
        let from = date_from.get_untracked();
        let to = date_to.get_untracked();
        if from.is_empty() || to.is_empty() {
            state.clear_custom_range();
            error.set(None);
            return;
        }
        match state.set_custom_range(&from, &to) {
            Ok(()) => error.set(None),
            Err(e) => error.set(Some(e)),
        }
    };

    let visible_rows = Memo::new(move |_| {
        let active = state.active_filters();
        rows.with(|all| columns.with_value(|cols| filter_rows(all, cols, &active)))
    });

    view! {
        <div id="d404_analytics--dashboard" class="d404-dashboard">
            <Flex align=FlexAlign::Center gap=FlexGap::Small style="margin-bottom: 12px;">
                <select
                    class="form__select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.select_project(if value.is_empty() { None } else { Some(value) });
                    }
                >
                    <option value="" selected=move || state.selected_project.get().is_none()>
                        "Все проекты"
                    </option>
                    <For
                        each=move || state.project_items.get()
                        key=|item| item.value.clone()
                        children=move |item| {
                            let value = item.value.clone();
                            let is_selected = move || {
                                state.selected_project.get().as_deref() == Some(value.as_str())
                            };
                            view! {
                                <option value=item.value selected=is_selected>
                                    {item.label}
                                </option>
                            }
                        }
                    />
                </select>

                <ButtonGroup>
                    {RangeMode::all()
                        .into_iter()
                        .map(|mode| {
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=move || {
                                        if state.check_range.get() == mode {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        }
                                    }
                                    on_click=move |_| state.set_range_mode(mode)
                                >
                                    {mode.display_name()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </ButtonGroup>

                <Show when=move || state.check_range.get() == RangeMode::Year>
                    <input
                        type="date"
                        prop:value=move || date_from.get()
                        on:input=move |ev| {
                            date_from.set(event_target_value(&ev));
                            apply_custom_range();
                        }
                    />
                    <div>"—"</div>
                    <input
                        type="date"
                        prop:value=move || date_to.get()
                        on:input=move |ev| {
                            date_to.set(event_target_value(&ev));
                            apply_custom_range();
                        }
                    />
                </Show>

                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| regenerate()
                >
                    "Обновить данные"
                </Button>
            </Flex>

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="d404-error">
                            <strong>"⚠ Ошибка: "</strong>
                            {err}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <div class="d404-table-container" style="overflow-x: auto;">
                <table class="d404-table">
                    <thead>
                        <tr>
                            {columns.with_value(|cols| {
                                cols.iter()
                                    .enumerate()
                                    .map(|(i, col)| {
                                        view! { <th style=column_style(cols, i)>{col.title}</th> }
                                    })
                                    .collect_view()
                            })}
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || visible_rows.get()
                            key=|row| row.id.clone()
                            children=move |row| {
                                columns.with_value(|cols| {
                                    let cells = cols
                                        .iter()
                                        .enumerate()
                                        .map(|(i, col)| {
                                            view! {
                                                <td style=column_style(cols, i)>
                                                    {cell_text(&row, col.key)}
                                                </td>
                                            }
                                        })
                                        .collect_view();
                                    view! { <tr>{cells}</tr> }
                                })
                            }
                        />
                    </tbody>
                </table>
            </div>

            <div class="d404-footer">
                {move || format!("Строк: {} из {}", visible_rows.with(|r| r.len()), rows.with(|r| r.len()))}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_by_column_key() {
        let row = ClientRow {
            id: "1".into(),
            client_code: "CL-AbC123".into(),
            project_name: "Альфа".into(),
            contract_start_date: "2024-03-15".into(),
            contract_amount: "1500.25".into(),
            address: "Москва ул. Ленина д. 1".into(),
        };
        assert_eq!(cell_text(&row, "projectName"), "Альфа");
        assert_eq!(cell_text(&row, "contractStartDate"), "15.03.2024");
        assert_eq!(cell_text(&row, "contractAmount"), "1500.25");
        assert_eq!(cell_text(&row, "unknown"), "");
    }
}
