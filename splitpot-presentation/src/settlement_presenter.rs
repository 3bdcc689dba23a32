use crate::currency::format_amount;
use splitpot_application::{CurrencyCode, SettlementReport};

/// Rendered settlement: a signed balance line per contributor and, when
/// anyone still owes, a transfer line per payment instruction.
pub struct SettlementView {
    pub balance_table: String,
    pub transfer_table: Option<String>,
}

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn render(report: &SettlementReport, currency: &CurrencyCode) -> SettlementView {
        SettlementView {
            balance_table: Self::build_balance_table(report, currency),
            transfer_table: Self::build_transfer_table(report, currency),
        }
    }

    fn build_balance_table(report: &SettlementReport, currency: &CurrencyCode) -> String {
        let name_width = report
            .balances
            .iter()
            .map(|balance| balance.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut lines = vec![format!(
            "Fair share: {}",
            format_amount(report.fair_share, currency)
        )];
        for balance in &report.balances {
            let sign = if balance.net >= 0.0 { "+" } else { "-" };
            lines.push(format!(
                "{:<name_width$}  {sign}{}",
                balance.name,
                format_amount(balance.net.abs(), currency),
            ));
        }
        lines.join("\n")
    }

    fn build_transfer_table(report: &SettlementReport, currency: &CurrencyCode) -> Option<String> {
        if report.transfers.is_empty() {
            return None;
        }

        let lines: Vec<String> = report
            .transfers
            .iter()
            .map(|transfer| {
                format!(
                    "{} -> {}  {}",
                    transfer.from,
                    transfer.to,
                    format_amount(transfer.amount, currency)
                )
            })
            .collect();
        Some(lines.join("\n"))
    }
}
