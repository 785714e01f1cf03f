//! Relatórios por período, exibidos como tabela e exportáveis em CSV.

use crate::projections::p900_reports::api;
use crate::shared::components::{DateInput, ErrorBox, PageHeader};
use crate::shared::date_utils::{parse_input_date, to_input_date, today};
use crate::shared::export::{alert_on_error, export_json_rows};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_REPORT;
use chrono::{Datelike, NaiveDate};
use contracts::projections::p900_reports::{ReportKind, ReportQuery, ReportRows};
use contracts::shared::csv::{json_cell, json_columns};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn report_query(from: &str, to: &str) -> Result<ReportQuery, String> {
    let from = parse_input_date(from).ok_or("Informe a data inicial")?;
    let to = parse_input_date(to).ok_or("Informe a data final")?;
    let query = ReportQuery { from, to };
    query.validate()?;
    Ok(query)
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let kind_input = RwSignal::new(ReportKind::Customers.slug().to_string());
    let from = RwSignal::new(to_input_date(month_start(today())));
    let to = RwSignal::new(to_input_date(today()));

    // Relatório exibido e o tipo com que foi gerado
    let (rows, set_rows) = signal(None::<(ReportKind, ReportRows)>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let generate = move |_| {
        let Some(kind) = ReportKind::from_slug(&kind_input.get_untracked()) else {
            set_error.set(Some("Selecione um relatório".to_string()));
            return;
        };
        let query = match report_query(&from.get_untracked(), &to.get_untracked()) {
            Ok(q) => q,
            Err(msg) => {
                set_error.set(Some(msg));
                return;
            }
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_report(kind, &query).await {
                Ok(data) => {
                    log::info!("report {} loaded: {} rows", kind.slug(), data.len());
                    set_rows.set(Some((kind, data)));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("report {} failed: {}", kind.slug(), e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let export = move |_| {
        rows.with_untracked(|r| match r {
            Some((kind, data)) => alert_on_error(export_json_rows(data, kind.file_prefix())),
            None => alert_on_error(Err("Gere o relatório antes de exportar".to_string())),
        })
    };

    view! {
        <PageFrame page_id="p900_reports--report" category=PAGE_CAT_REPORT>
            <PageHeader title="Relatórios".to_string() icon_name="file-text">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=export
                    disabled=Signal::derive(move || !rows.with(|r| r.as_ref().is_some_and(|(_, d)| !d.is_empty())))
                >
                    {icon("download")}
                    " CSV"
                </Button>
            </PageHeader>

            <div class="filter-bar">
                <Select value=kind_input>
                    {ReportKind::ALL.into_iter().map(|k| view! {
                        <option value=k.slug()>{k.label()}</option>
                    }).collect_view()}
                </Select>
                <label class="filter-bar__label">"De"</label>
                <DateInput value=from on_change=move |v| from.set(v) />
                <label class="filter-bar__label">"Até"</label>
                <DateInput value=to on_change=move |v| to.set(v) />
                <Button appearance=ButtonAppearance::Primary on_click=generate loading=loading>
                    "Gerar"
                </Button>
            </div>

            <ErrorBox error=error />

            {move || rows.get().map(|(kind, data)| {
                if data.is_empty() {
                    return view! {
                        <div class="placeholder">
                            {format!("Nenhum registro de {} no período.", kind.label().to_lowercase())}
                        </div>
                    }.into_any();
                }
                let columns = json_columns(&data);
                let header = columns.clone();
                view! {
                    <div class="table-container">
                        <table class="table__data">
                            <thead>
                                <tr>
                                    {header.into_iter().map(|c| view! {
                                        <th class="table__header-cell">{c}</th>
                                    }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {data.iter().map(|row| {
                                    let cells: Vec<String> = columns
                                        .iter()
                                        .map(|c| row.get(c).map(json_cell).unwrap_or_default())
                                        .collect();
                                    view! {
                                        <tr class="table__row">
                                            {cells.into_iter().map(|cell| view! {
                                                <td class="table__cell">{cell}</td>
                                            }).collect_view()}
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                    <div class="table__footer">{format!("{} registro(s)", data.len())}</div>
                }.into_any()
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_start() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 17).unwrap();
        assert_eq!(month_start(d), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_report_query() {
        let q = report_query("2024-06-01", "2024-06-30").unwrap();
        assert_eq!(q.from, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(
            report_query("2024-06-30", "2024-06-01").unwrap_err(),
            "Data inicial deve ser anterior à final"
        );
        assert_eq!(report_query("", "2024-06-01").unwrap_err(), "Informe a data inicial");
    }
}
