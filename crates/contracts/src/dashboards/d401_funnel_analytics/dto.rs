use serde::{Deserialize, Serialize};

use crate::domain::a006_funnel_interaction::FunnelScreen;
use crate::shared::number_parse::{deserialize_lenient_f64, deserialize_lenient_u64};

/// Query de `GET /funnel/analytics`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsQuery {
    pub days: u32,
}

pub const PERIOD_OPTIONS: [u32; 3] = [7, 30, 90];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunnelStepCount {
    pub screen: FunnelScreen,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenRate {
    pub screen: FunnelScreen,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub abandonment_rate: f64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenDwell {
    pub screen: FunnelScreen,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub avg_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyInteractions {
    /// `YYYY-MM-DD`, como enviado pelo servidor
    pub date: String,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub completed: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub abandoned: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyInteractions {
    pub hour: u8,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationConversion {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub total: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_u64")]
    pub completed: u64,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub conversion_rate: f64,
}

/// Agregados do funil já calculados pelo servidor.
///
/// Cada bloco é independente; blocos ausentes chegam vazios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    #[serde(default)]
    pub funnel: Vec<FunnelStepCount>,
    #[serde(default)]
    pub screen_rates: Vec<ScreenRate>,
    #[serde(default)]
    pub avg_time_per_screen: Vec<ScreenDwell>,
    #[serde(default)]
    pub interactions_over_time: Vec<DailyInteractions>,
    #[serde(default)]
    pub hourly: Vec<HourlyInteractions>,
    #[serde(default)]
    pub locations: Vec<LocationConversion>,
}

impl AnalyticsSnapshot {
    pub fn is_empty(&self) -> bool {
        self.funnel.is_empty()
            && self.screen_rates.is_empty()
            && self.avg_time_per_screen.is_empty()
            && self.interactions_over_time.is_empty()
            && self.hourly.is_empty()
            && self.locations.is_empty()
    }
}
