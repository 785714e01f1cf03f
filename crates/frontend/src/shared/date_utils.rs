/// Utilitários de formatação de data e hora (padrão brasileiro)
///
/// Datas chegam da API em UTC e são mostradas no fuso do navegador.
use chrono::{DateTime, FixedOffset, Local, NaiveDate, Offset, Utc};

/// Fuso do navegador no momento da chamada.
pub fn local_offset() -> FixedOffset {
    Local::now().offset().fix()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// DD/MM/AAAA HH:MM no fuso informado.
/// Exemplo: 2024-03-15T14:02:26Z em UTC-3 → "15/03/2024 11:02"
pub fn format_datetime_in(at: DateTime<Utc>, offset: FixedOffset) -> String {
    at.with_timezone(&offset).format("%d/%m/%Y %H:%M").to_string()
}

pub fn format_datetime(at: DateTime<Utc>) -> String {
    format_datetime_in(at, local_offset())
}

/// DD/MM/AAAA
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_opt_datetime(at: Option<DateTime<Utc>>) -> String {
    at.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Lê o valor de um `<input type="date">` (AAAA-MM-DD).
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Valor para `<input type="date">`.
pub fn to_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_in_offset() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap();
        let brt = FixedOffset::west_opt(3 * 3600).unwrap();
        assert_eq!(format_datetime_in(at, brt), "15/03/2024 11:02");
        let utc = FixedOffset::east_opt(0).unwrap();
        assert_eq!(format_datetime_in(at, utc), "15/03/2024 14:02");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(format_date(d), "31/12/2024");
    }

    #[test]
    fn test_input_date_roundtrip_and_invalid() {
        let d = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(to_input_date(d), "2024-01-05");
        assert_eq!(parse_input_date("2024-01-05"), Some(d));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("05/01/2024"), None);
    }
}
