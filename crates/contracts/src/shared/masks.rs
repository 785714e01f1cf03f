//! Máscaras de entrada para documentos e telefones brasileiros.
//!
//! As funções aceitam qualquer texto: caracteres que não são dígitos são
//! descartados e o excesso de dígitos é cortado, então podem ser aplicadas a
//! cada tecla digitada.

const CPF_LEN: usize = 11;
const PHONE_MAX_LEN: usize = 11;

pub fn only_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Máscara progressiva `000.000.000-00`.
///
/// `"12345678901"` → `"123.456.789-01"`, `"1234"` → `"123.4"`.
pub fn mask_cpf(input: &str) -> String {
    let mut out = String::with_capacity(14);
    for (i, c) in only_digits(input).chars().take(CPF_LEN).enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Valida os dois dígitos verificadores do CPF.
///
/// Sequências de um único dígito repetido (`111.111.111-11`) passam no
/// cálculo mas não são CPFs válidos.
pub fn is_valid_cpf(input: &str) -> bool {
    let digits: Vec<u32> = only_digits(input)
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();

    if digits.len() != CPF_LEN || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    let check = |len: usize| -> u32 {
        let weight_start = len as u32 + 1;
        let sum: u32 = digits[..len]
            .iter()
            .enumerate()
            .map(|(i, d)| d * (weight_start - i as u32))
            .sum();
        match (sum * 10) % 11 {
            10 => 0,
            r => r,
        }
    };

    check(9) == digits[9] && check(10) == digits[10]
}

/// Máscara progressiva de telefone: `(00) 0000-0000` ou `(00) 00000-0000`.
pub fn mask_phone(input: &str) -> String {
    let digits: Vec<char> = only_digits(input).chars().take(PHONE_MAX_LEN).collect();
    if digits.is_empty() {
        return String::new();
    }

    let mut out = String::from("(");
    out.extend(digits.iter().take(2));
    if digits.len() <= 2 {
        return out;
    }

    out.push_str(") ");
    let rest = &digits[2..];
    let split = if digits.len() == PHONE_MAX_LEN { 5 } else { 4 };
    if rest.len() <= split {
        out.extend(rest);
    } else {
        out.extend(&rest[..split]);
        out.push('-');
        out.extend(&rest[split..]);
    }
    out
}

/// Telefone completo: DDD + 8 ou 9 dígitos.
pub fn is_valid_phone(input: &str) -> bool {
    matches!(only_digits(input).len(), 10 | 11)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_cpf_full() {
        assert_eq!(mask_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn test_mask_cpf_progressive() {
        assert_eq!(mask_cpf(""), "");
        assert_eq!(mask_cpf("123"), "123");
        assert_eq!(mask_cpf("1234"), "123.4");
        assert_eq!(mask_cpf("1234567"), "123.456.7");
        assert_eq!(mask_cpf("1234567890"), "123.456.789-0");
    }

    #[test]
    fn test_mask_cpf_ignores_noise_and_extra_digits() {
        assert_eq!(mask_cpf("123.456.789-01"), "123.456.789-01");
        assert_eq!(mask_cpf("123456789012345"), "123.456.789-01");
        assert_eq!(mask_cpf("abc"), "");
    }

    #[test]
    fn test_cpf_check_digits() {
        assert!(is_valid_cpf("529.982.247-25"));
        assert!(is_valid_cpf("52998224725"));
        assert!(!is_valid_cpf("529.982.247-26"));
        assert!(!is_valid_cpf("12345678901"));
        assert!(!is_valid_cpf("111.111.111-11"));
        assert!(!is_valid_cpf("5299822472"));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone(""), "");
        assert_eq!(mask_phone("1"), "(1");
        assert_eq!(mask_phone("11"), "(11");
        assert_eq!(mask_phone("119"), "(11) 9");
        assert_eq!(mask_phone("1112345678"), "(11) 1234-5678");
        assert_eq!(mask_phone("11912345678"), "(11) 91234-5678");
        assert_eq!(mask_phone("(11) 91234-5678 ramal 2"), "(11) 91234-5678");
    }

    #[test]
    fn test_valid_phone() {
        assert!(is_valid_phone("(11) 91234-5678"));
        assert!(is_valid_phone("1112345678"));
        assert!(!is_valid_phone("912345678"));
    }
}
