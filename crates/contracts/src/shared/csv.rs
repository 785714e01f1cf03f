//! Geração de CSV para exportar listas e relatórios.
//!
//! A saída abre direto em planilhas: começa com BOM UTF-8, usa `,` como
//! delimitador e `\n` entre linhas. Só recebe aspas o campo que contém
//! vírgula, aspas ou quebra de linha.

use serde_json::Value;
use thiserror::Error;

/// BOM no início para a planilha reconhecer UTF-8 (acentos nos nomes).
pub const UTF8_BOM: char = '\u{FEFF}';

const DELIMITER: char = ',';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CsvError {
    #[error("Nenhum dado para exportar")]
    Empty,
    #[error("Linha {0} do relatório não é um objeto")]
    NotAnObject(usize),
}

/// Tipos que sabem se converter em linha de CSV.
pub trait CsvExportable {
    /// Cabeçalhos das colunas, na ordem das células de `to_csv_row`.
    fn headers() -> Vec<&'static str>;

    fn to_csv_row(&self) -> Vec<String>;
}

/// Põe aspas na célula que contém delimitador, aspas ou quebra de linha.
/// Aspas internas são duplicadas.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(DELIMITER) || cell.contains('"') || cell.contains('\n') || cell.contains('\r')
    {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn join_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|c| escape_csv_cell(c.as_ref()))
        .collect::<Vec<_>>()
        .join(&DELIMITER.to_string())
}

fn assemble(header: String, lines: Vec<String>) -> String {
    let mut out = String::new();
    out.push(UTF8_BOM);
    out.push_str(&header);
    for line in lines {
        out.push('\n');
        out.push_str(&line);
    }
    out
}

/// Monta o CSV de linhas tipadas.
pub fn build_csv<T: CsvExportable>(data: &[T]) -> Result<String, CsvError> {
    if data.is_empty() {
        return Err(CsvError::Empty);
    }

    let header = join_line(&T::headers());
    let lines = data.iter().map(|item| join_line(&item.to_csv_row())).collect();

    Ok(assemble(header, lines))
}

/// Texto de um valor JSON dentro de uma célula.
///
/// `null` vira célula vazia, strings entram como estão e o resto usa o
/// texto JSON.
pub fn json_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Colunas de um relatório: chaves da primeira linha, na ordem do servidor.
pub fn json_columns(rows: &[Value]) -> Vec<String> {
    rows.first()
        .and_then(Value::as_object)
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}

/// Monta o CSV de linhas de relatório sem tipo (objetos JSON planos).
///
/// O cabeçalho vem das chaves da primeira linha. Chave ausente numa linha
/// posterior vira célula vazia; chaves extras são ignoradas.
pub fn build_csv_from_json(rows: &[Value]) -> Result<String, CsvError> {
    if rows.is_empty() {
        return Err(CsvError::Empty);
    }

    let columns = json_columns(rows);
    if columns.is_empty() {
        return Err(CsvError::NotAnObject(1));
    }

    let mut lines = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or(CsvError::NotAnObject(idx + 1))?;
        let cells: Vec<String> = columns
            .iter()
            .map(|col| obj.get(col).map(json_cell).unwrap_or_default())
            .collect();
        lines.push(join_line(&cells));
    }

    Ok(assemble(join_line(&columns), lines))
}

/// Nome de arquivo padrão: `{prefix}_{AAAA-MM-DD}.csv`.
pub fn csv_filename(prefix: &str, date: chrono::NaiveDate) -> String {
    format!("{}_{}.csv", prefix, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Row {
        name: &'static str,
        note: &'static str,
    }

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Nome", "Observação"]
        }

        fn to_csv_row(&self) -> Vec<String> {
            vec![self.name.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn test_json_rows_with_bom_and_quoting() {
        let rows = vec![json!({"a": 1, "b": "x,y"})];
        let csv = build_csv_from_json(&rows).unwrap();
        assert_eq!(csv, "\u{FEFF}a,b\n1,\"x,y\"");

        let mut lines = csv.trim_start_matches(UTF8_BOM).lines();
        assert_eq!(lines.next(), Some("a,b"));
        assert_eq!(lines.next(), Some("1,\"x,y\""));
    }

    #[test]
    fn test_header_keeps_server_key_order() {
        let rows = vec![json!({"zeta": 1, "alpha": 2, "mid": null})];
        let csv = build_csv_from_json(&rows).unwrap();
        assert_eq!(csv, "\u{FEFF}zeta,alpha,mid\n1,2,");
    }

    #[test]
    fn test_missing_keys_become_empty_cells() {
        let rows = vec![
            json!({"cliente": "Ana", "valor": 50}),
            json!({"cliente": "Bruno"}),
        ];
        let csv = build_csv_from_json(&rows).unwrap();
        assert_eq!(csv, "\u{FEFF}cliente,valor\nAna,50\nBruno,");
    }

    #[test]
    fn test_escape_quotes_and_newlines() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("line1\nline2"), "\"line1\nline2\"");
        assert_eq!(escape_csv_cell("a\rb"), "\"a\rb\"");
        assert_eq!(escape_csv_cell("semi;colon"), "semi;colon");
    }

    #[test]
    fn test_typed_rows() {
        let data = [
            Row { name: "João", note: "corte, barba" },
            Row { name: "Pedro", note: "" },
        ];
        let csv = build_csv(&data).unwrap();
        assert_eq!(csv, "\u{FEFF}Nome,Observação\nJoão,\"corte, barba\"\nPedro,");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(build_csv_from_json(&[]), Err(CsvError::Empty));
        let empty: [Row; 0] = [];
        assert_eq!(build_csv(&empty), Err(CsvError::Empty));
        assert_eq!(CsvError::Empty.to_string(), "Nenhum dado para exportar");
    }

    #[test]
    fn test_non_object_row_is_reported() {
        let rows = vec![json!({"a": 1}), json!([1, 2])];
        assert_eq!(build_csv_from_json(&rows), Err(CsvError::NotAnObject(2)));
    }

    #[test]
    fn test_nested_values_use_json_text() {
        assert_eq!(json_cell(&json!(true)), "true");
        assert_eq!(json_cell(&json!(2.5)), "2.5");
        assert_eq!(json_cell(&json!({"k": 1})), "{\"k\":1}");
    }

    #[test]
    fn test_csv_filename() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(csv_filename("pagamentos", date), "pagamentos_2024-03-05.csv");
    }
}
