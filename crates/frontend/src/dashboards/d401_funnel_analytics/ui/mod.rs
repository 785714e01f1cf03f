//! Gráficos do funil de cadastro.
//!
//! Barras em CSS e a série diária em SVG; os dados chegam prontos do
//! servidor e só são reorganizados por `charts`.

use crate::dashboards::d401_funnel_analytics::api;
use crate::shared::components::{ErrorBox, PageHeader};
use crate::shared::config::analytics_days;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d401_funnel_analytics::charts::{
    dwell_bars, format_duration_secs, funnel_bars, hourly_bars, polyline_points, rate_pairs,
    scale_percent, series_points, top_locations,
};
use contracts::dashboards::d401_funnel_analytics::{AnalyticsSnapshot, PERIOD_OPTIONS};
use contracts::shared::money::{format_count, format_percent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SERIES_WIDTH: f64 = 600.0;
const SERIES_HEIGHT: f64 = 160.0;

/// Opções do seletor de período; o padrão configurado entra se não estiver
/// na lista fixa.
fn period_options(default_days: u32) -> Vec<u32> {
    let mut opts = PERIOD_OPTIONS.to_vec();
    if !opts.contains(&default_days) {
        opts.push(default_days);
        opts.sort_unstable();
    }
    opts
}

fn bar_style(value: f64, max: f64) -> String {
    format!("width: {:.1}%", scale_percent(value, max))
}

#[component]
fn ChartCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card chart-card">
            <div class="card__header">
                <h3 class="card__title">{title}</h3>
            </div>
            <div class="card__body">{children()}</div>
        </div>
    }
}

#[component]
fn FunnelChart(snapshot: AnalyticsSnapshot) -> impl IntoView {
    let bars = funnel_bars(&snapshot);
    let max = bars.iter().map(|b| b.value).max().unwrap_or(0) as f64;
    view! {
        <div class="hbar-chart">
            {bars.into_iter().map(|b| view! {
                <div class="hbar-chart__row">
                    <span class="hbar-chart__label">{b.label}</span>
                    <div class="hbar-chart__track">
                        <div class="hbar-chart__bar" style=bar_style(b.value as f64, max)></div>
                    </div>
                    <span class="hbar-chart__value">{format_count(b.value)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn RatesChart(snapshot: AnalyticsSnapshot) -> impl IntoView {
    view! {
        <div class="hbar-chart">
            {rate_pairs(&snapshot).into_iter().map(|r| view! {
                <div class="hbar-chart__row hbar-chart__row--pair">
                    <span class="hbar-chart__label">{r.label}</span>
                    <div class="hbar-chart__track">
                        <div class="hbar-chart__bar hbar-chart__bar--danger" style=bar_style(r.abandonment, 100.0)></div>
                    </div>
                    <span class="hbar-chart__value">{format_percent(r.abandonment, 1)}</span>
                    <div class="hbar-chart__track">
                        <div class="hbar-chart__bar hbar-chart__bar--success" style=bar_style(r.conversion, 100.0)></div>
                    </div>
                    <span class="hbar-chart__value">{format_percent(r.conversion, 1)}</span>
                </div>
            }).collect_view()}
            <div class="chart-legend">
                <span class="chart-legend__item chart-legend__item--danger">"Abandono"</span>
                <span class="chart-legend__item chart-legend__item--success">"Conversão"</span>
            </div>
        </div>
    }
}

#[component]
fn DwellChart(snapshot: AnalyticsSnapshot) -> impl IntoView {
    let bars = dwell_bars(&snapshot);
    let max = bars.iter().map(|b| b.seconds).fold(0.0_f64, f64::max);
    view! {
        <div class="hbar-chart">
            {bars.into_iter().map(|b| view! {
                <div class="hbar-chart__row">
                    <span class="hbar-chart__label">{b.label}</span>
                    <div class="hbar-chart__track">
                        <div class="hbar-chart__bar" style=bar_style(b.seconds, max)></div>
                    </div>
                    <span class="hbar-chart__value">{format_duration_secs(b.seconds)}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn SeriesChart(snapshot: AnalyticsSnapshot) -> impl IntoView {
    let points = series_points(&snapshot);
    let totals: Vec<u64> = points.iter().map(|p| p.total).collect();
    let completed: Vec<u64> = points.iter().map(|p| p.completed).collect();
    let abandoned: Vec<u64> = points.iter().map(|p| p.abandoned).collect();
    let first = points.first().map(|p| p.date.clone()).unwrap_or_default();
    let last = points.last().map(|p| p.date.clone()).unwrap_or_default();

    view! {
        <svg
            class="line-chart"
            viewBox=format!("0 0 {} {}", SERIES_WIDTH, SERIES_HEIGHT)
            preserveAspectRatio="none"
        >
            <polyline class="line-chart__line line-chart__line--total" fill="none"
                points=polyline_points(&totals, SERIES_WIDTH, SERIES_HEIGHT) />
            <polyline class="line-chart__line line-chart__line--success" fill="none"
                points=polyline_points(&completed, SERIES_WIDTH, SERIES_HEIGHT) />
            <polyline class="line-chart__line line-chart__line--danger" fill="none"
                points=polyline_points(&abandoned, SERIES_WIDTH, SERIES_HEIGHT) />
        </svg>
        <div class="line-chart__axis">
            <span>{first}</span>
            <span>{last}</span>
        </div>
        <div class="chart-legend">
            <span class="chart-legend__item">"Total"</span>
            <span class="chart-legend__item chart-legend__item--success">"Concluídas"</span>
            <span class="chart-legend__item chart-legend__item--danger">"Abandonadas"</span>
        </div>
    }
}

#[component]
fn HourlyChart(snapshot: AnalyticsSnapshot) -> impl IntoView {
    let bars = hourly_bars(&snapshot);
    let max = bars.iter().map(|b| b.count).max().unwrap_or(0) as f64;
    view! {
        <div class="vbar-chart">
            {bars.into_iter().map(|b| view! {
                <div class="vbar-chart__col" title=format!("{}: {}", b.label, b.count)>
                    <div
                        class="vbar-chart__bar"
                        style=format!("height: {:.1}%", scale_percent(b.count as f64, max))
                    ></div>
                    <span class="vbar-chart__label">{b.label.clone()}</span>
                </div>
            }).collect_view()}
        </div>
    }
}

#[component]
fn LocationsTable(snapshot: AnalyticsSnapshot) -> impl IntoView {
    view! {
        <table class="table__data">
            <thead>
                <tr>
                    <th class="table__header-cell">"Local"</th>
                    <th class="table__header-cell table__header-cell--right">"Acessos"</th>
                    <th class="table__header-cell table__header-cell--right">"Concluídos"</th>
                    <th class="table__header-cell table__header-cell--right">"Conversão"</th>
                </tr>
            </thead>
            <tbody>
                {top_locations(&snapshot).into_iter().map(|row| view! {
                    <tr class="table__row">
                        <td class="table__cell">{icon("map-pin")}" "{row.label}</td>
                        <td class="table__cell table__cell--right">{format_count(row.total)}</td>
                        <td class="table__cell table__cell--right">{format_count(row.completed)}</td>
                        <td class="table__cell table__cell--right">{format_percent(row.conversion_rate, 1)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

#[component]
pub fn FunnelAnalyticsDashboard() -> impl IntoView {
    let default_days = analytics_days();
    let (days, set_days) = signal(default_days);
    let (snapshot, set_snapshot) = signal(None::<AnalyticsSnapshot>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // Recarrega sempre que o período muda
    Effect::new(move |_| {
        let d = days.get();
        set_loading.set(true);
        spawn_local(async move {
            match api::get_analytics(d).await {
                Ok(data) => {
                    set_snapshot.set(Some(data));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("Failed to load funnel analytics ({} days): {}", d, e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <PageFrame page_id="d401_funnel_analytics--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Análise do funil".to_string() icon_name="bar-chart">
                <select
                    class="filter-bar__select"
                    prop:value=move || days.get().to_string()
                    on:change=move |ev| {
                        if let Ok(d) = event_target_value(&ev).parse::<u32>() {
                            set_days.set(d);
                        }
                    }
                >
                    {period_options(default_days).into_iter().map(|d| view! {
                        <option value=d.to_string()>{format!("Últimos {} dias", d)}</option>
                    }).collect_view()}
                </select>
            </PageHeader>

            <ErrorBox error=error />

            <Show when=move || loading.get()>
                <Spinner />
            </Show>

            {move || snapshot.get().map(|snap| {
                if snap.is_empty() {
                    return view! {
                        <div class="placeholder">"Sem interações no período selecionado."</div>
                    }.into_any();
                }
                let (s1, s2, s3, s4, s5) =
                    (snap.clone(), snap.clone(), snap.clone(), snap.clone(), snap.clone());
                view! {
                    <div class="chart-grid">
                        <ChartCard title="Funil por etapa">
                            <FunnelChart snapshot=s1 />
                        </ChartCard>
                        <ChartCard title="Abandono x conversão por tela">
                            <RatesChart snapshot=s2 />
                        </ChartCard>
                        <ChartCard title="Tempo médio por tela">
                            <DwellChart snapshot=s3 />
                        </ChartCard>
                        <ChartCard title="Interações por dia">
                            <SeriesChart snapshot=s4 />
                        </ChartCard>
                        <ChartCard title="Interações por hora">
                            <HourlyChart snapshot=s5 />
                        </ChartCard>
                        <ChartCard title="Conversão por local (top 10)">
                            <LocationsTable snapshot=snap />
                        </ChartCard>
                    </div>
                }.into_any()
            })}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_options_include_configured_default() {
        assert_eq!(period_options(30), vec![7, 30, 90]);
        assert_eq!(period_options(14), vec![7, 14, 30, 90]);
    }

    #[test]
    fn test_bar_style() {
        assert_eq!(bar_style(25.0, 50.0), "width: 50.0%");
        assert_eq!(bar_style(3.0, 0.0), "width: 0.0%");
    }
}
