// src/views/vendor_dashboard.rs

use uuid::Uuid;

use crate::{client::ApiClient, models::wallet::WalletResponse};

pub const NO_TRANSACTIONS_TEXT: &str = "No transactions yet";

// Uma linha pronta da tabela de extrato
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRow {
    pub date: String,
    pub description: String,
    // Sempre com o prefixo "+": o extrato do vendedor lista créditos recebidos
    pub amount: String,
}

// O painel do vendedor: identificador de pagamento, saldo e extrato.
// Enquanto o fetch não resolve, vale o padrão: saldo zero, extrato vazio.
#[derive(Debug)]
pub struct VendorDashboard {
    pub vendor_id: Uuid,
    pub wallet: WalletResponse,
    pub loaded: bool,
}

impl VendorDashboard {
    pub fn pending(vendor_id: Uuid) -> Self {
        Self {
            vendor_id,
            wallet: WalletResponse::default(),
            loaded: false,
        }
    }

    // Uma única leitura; falha é logada e o estado padrão permanece.
    pub async fn load(client: &ApiClient) -> Self {
        let mut view = Self::pending(client.user_id());

        match client.wallet().await {
            Ok(wallet) => view.wallet = wallet,
            Err(e) => tracing::error!("Falha ao buscar a carteira: {}", e),
        }

        view.loaded = true;
        view
    }

    // O placeholder estático de recebimento ("escaneie para pagar")
    pub fn payment_id_label(&self) -> String {
        format!("ID: {}", self.vendor_id)
    }

    // Saldo sempre com duas casas, independente da precisão de entrada
    pub fn balance_display(&self) -> String {
        format!("{:.2}", self.wallet.balance)
    }

    pub fn transaction_rows(&self) -> Vec<TransactionRow> {
        self.wallet
            .transactions
            .iter()
            .map(|tx| TransactionRow {
                date: tx.timestamp.format("%Y-%m-%d").to_string(),
                description: tx.description.clone(),
                amount: format!("+{}", tx.amount),
            })
            .collect()
    }

    // `Some(texto)` quando a tabela deve mostrar a linha de estado vazio
    pub fn empty_state_row(&self) -> Option<&'static str> {
        self.wallet
            .transactions
            .is_empty()
            .then_some(NO_TRANSACTIONS_TEXT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::wallet::{Transaction, TransactionKind};
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn incoming(vendor_id: Uuid, amount: rust_decimal::Decimal) -> Transaction {
        Transaction {
            id: Uuid::new_v4(),
            sender_id: Uuid::new_v4(),
            receiver_id: Some(vendor_id),
            amount,
            kind: TransactionKind::VendorPayment,
            description: "Payment to Cantina Central".into(),
            timestamp: Utc.with_ymd_and_hms(2026, 8, 20, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_balance_always_renders_two_decimal_places() {
        let mut view = VendorDashboard::pending(Uuid::new_v4());

        view.wallet.balance = dec!(42);
        assert_eq!(view.balance_display(), "42.00");

        view.wallet.balance = dec!(42.5);
        assert_eq!(view.balance_display(), "42.50");

        view.wallet.balance = dec!(0);
        assert_eq!(view.balance_display(), "0.00");
    }

    #[test]
    fn test_rows_are_prefixed_and_empty_state_only_without_rows() {
        let vendor_id = Uuid::new_v4();
        let mut view = VendorDashboard::pending(vendor_id);

        assert_eq!(view.empty_state_row(), Some(NO_TRANSACTIONS_TEXT));
        assert!(view.transaction_rows().is_empty());

        view.wallet.transactions = vec![incoming(vendor_id, dec!(25.00))];

        assert_eq!(view.empty_state_row(), None);
        let rows = view.transaction_rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, "+25.00");
        assert_eq!(rows[0].date, "2026-08-20");
    }

    #[test]
    fn test_payment_placeholder_carries_the_vendor_id() {
        let vendor_id = Uuid::new_v4();
        let view = VendorDashboard::pending(vendor_id);

        assert_eq!(view.payment_id_label(), format!("ID: {vendor_id}"));
    }

    #[test]
    fn test_wallet_consistency_invariant() {
        let vendor_id = Uuid::new_v4();
        let mut wallet = WalletResponse {
            balance: dec!(75.00),
            transactions: vec![incoming(vendor_id, dec!(50.00)), incoming(vendor_id, dec!(25.00))],
        };

        assert!(wallet.is_consistent(vendor_id));

        wallet.balance = dec!(80.00);
        assert!(!wallet.is_consistent(vendor_id));
    }

    #[tokio::test]
    async fn test_load_commits_the_wallet_payload() {
        let server = MockServer::start().await;
        let vendor_id = Uuid::new_v4();

        Mock::given(method("GET"))
            .and(path("/wallet/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "balance": 42.0,
                "transactions": []
            })))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), vendor_id);
        let view = VendorDashboard::load(&client).await;

        assert!(view.loaded);
        assert_eq!(view.vendor_id, vendor_id);
        assert_eq!(view.balance_display(), "42.00");
        assert_eq!(view.empty_state_row(), Some(NO_TRANSACTIONS_TEXT));
    }

    #[tokio::test]
    async fn test_load_failure_keeps_zeroed_defaults() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/wallet/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = ApiClient::new(server.uri(), Uuid::new_v4());
        let view = VendorDashboard::load(&client).await;

        assert!(view.loaded);
        assert_eq!(view.balance_display(), "0.00");
        assert!(view.wallet.transactions.is_empty());
    }
}
