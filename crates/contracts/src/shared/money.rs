//! Valores monetários em centavos e sua formatação em reais.

/// Formata centavos como `R$ 1.234,56`.
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!(
        "{}R$ {},{:02}",
        sign,
        group_thousands(abs / 100),
        abs % 100
    )
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, ch) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Inteiro com separador de milhar: `12345` → `12.345`.
pub fn format_count(n: u64) -> String {
    group_thousands(n)
}

/// Percentual com vírgula decimal: `12.5` → `12,5%`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    format!("{:.prec$}%", value, prec = decimals).replace('.', ",")
}

/// Lê um valor digitado em reais e devolve centavos.
///
/// Aceita `R$ 1.234,56`, `1234,56`, `1234.56` e `50`. Com vírgula presente o
/// ponto é separador de milhar; sem vírgula, um único ponto seguido de até
/// dois dígitos é tratado como decimal.
pub fn parse_brl_to_cents(input: &str) -> Result<i64, String> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if cleaned.is_empty() {
        return Err("Informe um valor".to_string());
    }

    let (negative, body) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };

    let (int_part, frac_part) = if let Some((int, frac)) = body.split_once(',') {
        (int.replace('.', ""), frac.to_string())
    } else {
        match body.rsplit_once('.') {
            Some((int, frac)) if frac.len() <= 2 && !int.contains('.') => {
                (int.to_string(), frac.to_string())
            }
            _ => (body.replace('.', ""), String::new()),
        }
    };

    let valid = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(format!("Valor inválido: {}", input.trim()));
    }
    if !valid(&int_part) || !valid(&frac_part) || frac_part.len() > 2 {
        return Err(format!("Valor inválido: {}", input.trim()));
    }

    let reais: i64 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| format!("Valor muito alto: {}", input.trim()))?
    };
    let centavos: i64 = match frac_part.len() {
        0 => 0,
        1 => frac_part.parse::<i64>().unwrap_or(0) * 10,
        _ => frac_part.parse::<i64>().unwrap_or(0),
    };

    let total = reais
        .checked_mul(100)
        .and_then(|v| v.checked_add(centavos))
        .ok_or_else(|| format!("Valor muito alto: {}", input.trim()))?;

    Ok(if negative { -total } else { total })
}

/// Centavos no formato de edição (`1234,56`), sem prefixo nem milhar.
pub fn cents_to_input(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{},{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(5), "R$ 0,05");
        assert_eq!(format_brl(8990), "R$ 89,90");
        assert_eq!(format_brl(123456), "R$ 1.234,56");
        assert_eq!(format_brl(123456789), "R$ 1.234.567,89");
        assert_eq!(format_brl(-4500), "-R$ 45,00");
    }

    #[test]
    fn test_format_count_and_percent() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(12345), "12.345");
        assert_eq!(format_percent(12.5, 1), "12,5%");
        assert_eq!(format_percent(3.0, 0), "3%");
    }

    #[test]
    fn test_parse_brl() {
        assert_eq!(parse_brl_to_cents("R$ 1.234,56"), Ok(123456));
        assert_eq!(parse_brl_to_cents("1234,56"), Ok(123456));
        assert_eq!(parse_brl_to_cents("1234.56"), Ok(123456));
        assert_eq!(parse_brl_to_cents("89,9"), Ok(8990));
        assert_eq!(parse_brl_to_cents("50"), Ok(5000));
        assert_eq!(parse_brl_to_cents("1.500"), Ok(150000));
        assert_eq!(parse_brl_to_cents(",50"), Ok(50));
        assert_eq!(parse_brl_to_cents("-10"), Ok(-1000));
    }

    #[test]
    fn test_parse_brl_rejects_garbage() {
        assert!(parse_brl_to_cents("").is_err());
        assert!(parse_brl_to_cents("abc").is_err());
        assert!(parse_brl_to_cents("12,345").is_err());
        assert!(parse_brl_to_cents("R$").is_err());
    }

    #[test]
    fn test_cents_to_input() {
        assert_eq!(cents_to_input(8990), "89,90");
        assert_eq!(cents_to_input(123456), "1234,56");
    }
}
