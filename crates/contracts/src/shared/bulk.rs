//! Contagem de um lote de requisições independentes (exclusão em lote).

/// Quantos pedidos de um lote foram atendidos e quantos falharam.
///
/// Um lote parcialmente falho é um resultado normal: os itens que falharam
/// continuam no servidor e aparecem de novo na próxima listagem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkOutcome {
    pub succeeded: usize,
    pub failed: usize,
}

impl BulkOutcome {
    pub fn tally<T, E, I>(results: I) -> Self
    where
        I: IntoIterator<Item = Result<T, E>>,
    {
        results
            .into_iter()
            .fold(Self::default(), |mut acc, result| {
                match result {
                    Ok(_) => acc.succeeded += 1,
                    Err(_) => acc.failed += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    /// Mensagem única mostrada ao usuário ao fim da exclusão em lote.
    pub fn delete_summary(&self) -> String {
        if self.all_succeeded() {
            format!("{} excluída(s) com sucesso.", self.succeeded)
        } else {
            format!(
                "{} excluída(s) com sucesso, {} falharam.",
                self.succeeded, self.failed
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_failure_summary() {
        let results: Vec<Result<(), String>> =
            vec![Ok(()), Err("500".to_string()), Ok(())];
        let outcome = BulkOutcome::tally(results);
        assert_eq!(outcome, BulkOutcome { succeeded: 2, failed: 1 });
        assert_eq!(outcome.total(), 3);
        assert_eq!(
            outcome.delete_summary(),
            "2 excluída(s) com sucesso, 1 falharam."
        );
    }

    #[test]
    fn test_clean_summary() {
        let outcome = BulkOutcome::tally(vec![Ok::<_, ()>(1), Ok(2)]);
        assert!(outcome.all_succeeded());
        assert_eq!(outcome.delete_summary(), "2 excluída(s) com sucesso.");
    }

    #[test]
    fn test_total_failure_summary() {
        let outcome = BulkOutcome::tally(vec![Err::<(), _>("a"), Err("b")]);
        assert_eq!(
            outcome.delete_summary(),
            "0 excluída(s) com sucesso, 2 falharam."
        );
    }
}
