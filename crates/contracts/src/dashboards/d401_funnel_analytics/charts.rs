//! Converte um [`AnalyticsSnapshot`] nas linhas que os gráficos desenham.
//! Nada aqui calcula estatística: os valores só ganham rótulo, ordem e corte.

use super::dto::AnalyticsSnapshot;

pub const TOP_LOCATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct FunnelBar {
    pub label: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatePair {
    pub label: String,
    pub abandonment: f64,
    pub conversion: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DwellBar {
    pub label: String,
    pub seconds: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub total: u64,
    pub completed: u64,
    pub abandoned: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourBar {
    pub hour: u8,
    pub label: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationRow {
    pub label: String,
    pub total: u64,
    pub completed: u64,
    pub conversion_rate: f64,
}

pub fn funnel_bars(snapshot: &AnalyticsSnapshot) -> Vec<FunnelBar> {
    snapshot
        .funnel
        .iter()
        .map(|step| FunnelBar {
            label: step.screen.label().to_string(),
            value: step.count,
        })
        .collect()
}

pub fn rate_pairs(snapshot: &AnalyticsSnapshot) -> Vec<RatePair> {
    snapshot
        .screen_rates
        .iter()
        .map(|r| RatePair {
            label: r.screen.label().to_string(),
            abandonment: r.abandonment_rate,
            conversion: r.completion_rate,
        })
        .collect()
}

pub fn dwell_bars(snapshot: &AnalyticsSnapshot) -> Vec<DwellBar> {
    snapshot
        .avg_time_per_screen
        .iter()
        .map(|d| DwellBar {
            label: d.screen.label().to_string(),
            seconds: d.avg_seconds,
        })
        .collect()
}

pub fn series_points(snapshot: &AnalyticsSnapshot) -> Vec<SeriesPoint> {
    snapshot
        .interactions_over_time
        .iter()
        .map(|d| SeriesPoint {
            date: d.date.clone(),
            total: d.total,
            completed: d.completed,
            abandoned: d.abandoned,
        })
        .collect()
}

pub fn hourly_bars(snapshot: &AnalyticsSnapshot) -> Vec<HourBar> {
    let mut bars: Vec<HourBar> = snapshot
        .hourly
        .iter()
        .map(|h| HourBar {
            hour: h.hour,
            label: format!("{:02}h", h.hour),
            count: h.count,
        })
        .collect();
    bars.sort_by_key(|b| b.hour);
    bars
}

/// As 10 localidades de maior total. `sort_by` é estável: totais iguais
/// mantêm a ordem enviada pelo servidor.
pub fn top_locations(snapshot: &AnalyticsSnapshot) -> Vec<LocationRow> {
    let mut rows: Vec<LocationRow> = snapshot
        .locations
        .iter()
        .map(|l| LocationRow {
            label: location_label(l.city.as_deref(), l.state.as_deref()),
            total: l.total,
            completed: l.completed,
            conversion_rate: l.conversion_rate,
        })
        .collect();
    rows.sort_by(|a, b| b.total.cmp(&a.total));
    rows.truncate(TOP_LOCATIONS);
    rows
}

fn location_label(city: Option<&str>, state: Option<&str>) -> String {
    match (city, state) {
        (Some(c), Some(s)) => format!("{}/{}", c, s),
        (Some(c), None) => c.to_string(),
        (None, Some(s)) => s.to_string(),
        (None, None) => "Desconhecido".to_string(),
    }
}

/// Largura da barra em percentual de `max`, limitada a `0..=100`.
pub fn scale_percent(value: f64, max: f64) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    (value / max * 100.0).clamp(0.0, 100.0)
}

/// `"1min 05s"` / `"42s"` nas barras de permanência.
pub fn format_duration_secs(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    if total >= 60 {
        format!("{}min {:02}s", total / 60, total % 60)
    } else {
        format!("{}s", total)
    }
}

/// Atributo `points` da polyline SVG de uma série, numa caixa
/// `width` x `height` com origem no canto inferior esquerdo.
pub fn polyline_points(values: &[u64], width: f64, height: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    let max = values.iter().copied().max().unwrap_or(0) as f64;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = step * i as f64;
            let y = height - scale_percent(*v as f64, max) / 100.0 * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> AnalyticsSnapshot {
        serde_json::from_value(json!({
            "funnel": [
                {"screen": "signup_start", "count": 120},
                {"screen": "cpf_entry", "count": "95"}
            ],
            "screen_rates": [
                {"screen": "cpf_entry", "abandonment_rate": "20.83", "completion_rate": "79.17"}
            ],
            "avg_time_per_screen": [
                {"screen": "personal_details", "avg_seconds": "65.4"}
            ],
            "interactions_over_time": [
                {"date": "2024-06-01", "total": 10, "completed": 4, "abandoned": 3}
            ],
            "hourly": [
                {"hour": 18, "count": 7},
                {"hour": 9, "count": 2}
            ],
            "locations": []
        }))
        .unwrap()
    }

    #[test]
    fn test_funnel_and_rates() {
        let snap = snapshot();
        assert_eq!(
            funnel_bars(&snap),
            vec![
                FunnelBar { label: "Início do cadastro".into(), value: 120 },
                FunnelBar { label: "CPF".into(), value: 95 },
            ]
        );
        let rates = rate_pairs(&snap);
        assert_eq!(rates[0].abandonment, 20.83);
        assert_eq!(rates[0].conversion, 79.17);
        assert_eq!(dwell_bars(&snap)[0].seconds, 65.4);
        assert_eq!(series_points(&snap)[0].completed, 4);
    }

    #[test]
    fn test_hourly_sorted_by_hour() {
        let bars = hourly_bars(&snapshot());
        assert_eq!(bars[0].label, "09h");
        assert_eq!(bars[1].label, "18h");
    }

    #[test]
    fn test_top_locations_rank_and_ties() {
        let mut locations = Vec::new();
        for i in 0..12u64 {
            locations.push(json!({"city": format!("C{}", i), "state": "SP", "total": i % 4}));
        }
        let snap: AnalyticsSnapshot =
            serde_json::from_value(json!({ "locations": locations })).unwrap();
        let top = top_locations(&snap);
        assert_eq!(top.len(), TOP_LOCATIONS);
        let labels: Vec<&str> = top.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "C3/SP", "C7/SP", "C11/SP", "C2/SP", "C6/SP", "C10/SP", "C1/SP", "C5/SP",
                "C9/SP", "C0/SP"
            ]
        );
    }

    #[test]
    fn test_location_label_fallbacks() {
        let snap: AnalyticsSnapshot = serde_json::from_value(json!({
            "locations": [{"state": "RJ", "total": 2}, {"total": 1}]
        }))
        .unwrap();
        let top = top_locations(&snap);
        assert_eq!(top[0].label, "RJ");
        assert_eq!(top[1].label, "Desconhecido");
    }

    #[test]
    fn test_missing_blocks_default_empty() {
        let snap: AnalyticsSnapshot = serde_json::from_value(json!({})).unwrap();
        assert!(snap.is_empty());
        assert!(top_locations(&snap).is_empty());
    }

    #[test]
    fn test_scale_and_duration() {
        assert_eq!(scale_percent(50.0, 200.0), 25.0);
        assert_eq!(scale_percent(5.0, 0.0), 0.0);
        assert_eq!(scale_percent(300.0, 200.0), 100.0);
        assert_eq!(format_duration_secs(42.4), "42s");
        assert_eq!(format_duration_secs(65.4), "1min 05s");
    }

    #[test]
    fn test_polyline_points() {
        assert_eq!(polyline_points(&[], 100.0, 50.0), "");
        assert_eq!(polyline_points(&[0, 10], 100.0, 50.0), "0.0,50.0 100.0,0.0");
        assert_eq!(polyline_points(&[4], 100.0, 50.0), "0.0,0.0");
    }
}
