use crate::{entities::RunSummary, presentation::utils::format_eur};

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Umsatz {}: {}", self.period, format_eur(self.turnover))?;
        write!(
            f,
            "Kassenbestand zum Monatsende: {}",
            format_eur(self.cash_on_hand)
        )
    }
}
